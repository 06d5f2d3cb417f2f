//! Molecule definitions handed to electronic-structure drivers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChemError;

/// Default H–H distance in Ångström.
pub const H2_BOND_LENGTH: f64 = 0.74;

/// Molecules with a known geometry and a pre-tabulated fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Molecule {
    /// Molecular hydrogen.
    H2,
    /// Ammonia.
    NH3,
}

impl Molecule {
    pub const ALL: [Molecule; 2] = [Molecule::H2, Molecule::NH3];

    /// Canonical identifier.
    pub fn name(self) -> &'static str {
        match self {
            Molecule::H2 => "H2",
            Molecule::NH3 => "NH3",
        }
    }

    /// Human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            Molecule::H2 => "H₂ (Hydrogen)",
            Molecule::NH3 => "NH₃ (Ammonia)",
        }
    }

    /// Qubit count of the pre-tabulated fallback encoding.
    pub fn fallback_qubits(self) -> u32 {
        match self {
            Molecule::H2 => 4,
            Molecule::NH3 => 6,
        }
    }

    /// Resolve the driver parameters. `bond_length` only applies to H2.
    pub fn spec(self, bond_length: Option<f64>) -> MoleculeSpec {
        match self {
            Molecule::H2 => {
                let r = bond_length.unwrap_or(H2_BOND_LENGTH);
                MoleculeSpec {
                    molecule: self,
                    atoms: vec![Atom::new("H", [0.0, 0.0, 0.0]), Atom::new("H", [0.0, 0.0, r])],
                    basis: "sto3g".into(),
                    charge: 0,
                    spin: 0,
                    unit: DistanceUnit::Angstrom,
                }
            }
            Molecule::NH3 => MoleculeSpec {
                molecule: self,
                atoms: vec![
                    Atom::new("N", [0.0, 0.0, 0.0]),
                    Atom::new("H", [0.9377, 0.0, -0.3816]),
                    Atom::new("H", [-0.4688, 0.8119, -0.3816]),
                    Atom::new("H", [-0.4688, -0.8119, -0.3816]),
                ],
                basis: "sto3g".into(),
                charge: 0,
                spin: 0,
                unit: DistanceUnit::Angstrom,
            },
        }
    }
}

impl FromStr for Molecule {
    type Err = ChemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h2" => Ok(Molecule::H2),
            "nh3" => Ok(Molecule::NH3),
            _ => Err(ChemError::UnsupportedMolecule(s.to_string())),
        }
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unit of atomic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Angstrom,
    Bohr,
}

/// An atom at a Cartesian position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub symbol: String,
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(symbol: &str, position: [f64; 3]) -> Self {
        Self {
            symbol: symbol.to_string(),
            position,
        }
    }
}

/// Everything a driver needs to set up a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoleculeSpec {
    pub molecule: Molecule,
    pub atoms: Vec<Atom>,
    /// Basis set name as understood by PySCF.
    pub basis: String,
    pub charge: i32,
    /// Number of unpaired electrons (2S).
    pub spin: u32,
    pub unit: DistanceUnit,
}

impl MoleculeSpec {
    /// Geometry in the `"N 0 0 0; H 0.9377 0 -0.3816"` form PySCF accepts.
    pub fn geometry(&self) -> String {
        self.atoms
            .iter()
            .map(|a| {
                let [x, y, z] = a.position;
                format!("{} {x} {y} {z}", a.symbol)
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}
