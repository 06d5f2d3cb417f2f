//! Hamiltonian construction with a pre-tabulated fallback.
//!
//! The builder resolves the molecule first (unknown molecules fail before
//! anything runs), then walks a small state machine:
//!
//! ```text
//!   TryAbInitio ──ok──────────────────────────▶ Done(AbInitio)
//!        │
//!        └─driver missing / any error─▶ UseFallback ──▶ Done(Fallback)
//! ```
//!
//! Forcing the fallback starts the machine at `UseFallback`.

use std::fmt;

use tracing::{info, warn};

use crate::driver::{ElectronicStructureDriver, PySCFConfig, PySCFDriver};
use crate::error::{ChemError, ChemResult};
use crate::extract::ab_initio_hamiltonian;
use crate::fallback::precomputed_hamiltonian;
use crate::molecule::Molecule;
use crate::operator::SparsePauliOp;

/// Why the pre-tabulated operator was used.
#[derive(Debug)]
pub enum FallbackReason {
    /// The caller asked for it.
    Forced,
    /// No electronic-structure driver could be loaded in this process.
    StackUnavailable,
    /// The ab-initio path ran and failed.
    AbInitioFailed(ChemError),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::Forced => f.write_str("pre-computed operator requested"),
            FallbackReason::StackUnavailable => {
                f.write_str("electronic-structure stack (PySCF) not available")
            }
            FallbackReason::AbInitioFailed(e) => write!(f, "ab-initio generation failed: {e}"),
        }
    }
}

/// Where a Hamiltonian came from.
#[derive(Debug)]
pub enum HamiltonianSource {
    AbInitio,
    Fallback(FallbackReason),
}

impl HamiltonianSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, HamiltonianSource::Fallback(_))
    }
}

/// A built Hamiltonian and its provenance.
#[derive(Debug)]
pub struct BuiltHamiltonian {
    pub molecule: Molecule,
    pub operator: SparsePauliOp,
    pub source: HamiltonianSource,
}

enum BuildState {
    TryAbInitio,
    UseFallback(FallbackReason),
    Done(SparsePauliOp, HamiltonianSource),
}

/// Builds molecular qubit Hamiltonians.
///
/// The builder holds no state that changes between calls; building the same
/// molecule twice yields the same operator.
pub struct HamiltonianBuilder {
    driver: Option<Box<dyn ElectronicStructureDriver>>,
    force_precomputed: bool,
    bond_length: Option<f64>,
}

impl HamiltonianBuilder {
    /// A builder using `driver` for the ab-initio path.
    pub fn new(driver: Option<Box<dyn ElectronicStructureDriver>>) -> Self {
        Self {
            driver,
            force_precomputed: false,
            bond_length: None,
        }
    }

    /// A builder with the PySCF driver when the stack is importable.
    pub fn detect(config: PySCFConfig) -> Self {
        let driver = PySCFDriver::detect(config)
            .map(|d| Box::new(d) as Box<dyn ElectronicStructureDriver>);
        Self::new(driver)
    }

    /// A builder that can only use the pre-tabulated operators.
    pub fn precomputed_only() -> Self {
        Self::new(None)
    }

    /// Skip the ab-initio path entirely.
    pub fn force_precomputed(mut self, force: bool) -> Self {
        self.force_precomputed = force;
        self
    }

    /// H–H distance in Ångström for H2.
    pub fn with_bond_length(mut self, bond_length: f64) -> Self {
        self.bond_length = Some(bond_length);
        self
    }

    /// Whether an ab-initio driver is configured.
    pub fn has_driver(&self) -> bool {
        self.driver.is_some()
    }

    /// Build the Hamiltonian for `molecule`.
    ///
    /// Only [`ChemError::UnsupportedMolecule`] is returned; every ab-initio
    /// failure is absorbed into a fallback.
    pub fn build(&self, molecule: &str) -> ChemResult<BuiltHamiltonian> {
        let molecule: Molecule = molecule.parse()?;

        let mut state = if self.force_precomputed {
            BuildState::UseFallback(FallbackReason::Forced)
        } else {
            BuildState::TryAbInitio
        };

        loop {
            state = match state {
                BuildState::TryAbInitio => match &self.driver {
                    None => BuildState::UseFallback(FallbackReason::StackUnavailable),
                    Some(driver) => {
                        let spec = molecule.spec(self.bond_length);
                        match ab_initio_hamiltonian(driver.as_ref(), &spec) {
                            Ok(op) => BuildState::Done(op, HamiltonianSource::AbInitio),
                            Err(e) => {
                                warn!(%molecule, driver = driver.name(), "ab-initio path failed, using fallback: {e}");
                                BuildState::UseFallback(FallbackReason::AbInitioFailed(e))
                            }
                        }
                    }
                },
                BuildState::UseFallback(reason) => {
                    info!(%molecule, "using pre-tabulated Hamiltonian: {reason}");
                    BuildState::Done(
                        precomputed_hamiltonian(molecule),
                        HamiltonianSource::Fallback(reason),
                    )
                }
                BuildState::Done(operator, source) => {
                    return Ok(BuiltHamiltonian {
                        molecule,
                        operator,
                        source,
                    });
                }
            };
        }
    }
}

/// Build the qubit Hamiltonian for `molecule`, trying PySCF first unless
/// `force_precomputed` is set.
///
/// The driver is configured from the environment (see
/// [`PySCFConfig::from_env`]); availability is probed once per process.
pub fn build_molecule_qubit_hamiltonian(
    molecule: &str,
    force_precomputed: bool,
) -> ChemResult<SparsePauliOp> {
    let builder = if force_precomputed {
        HamiltonianBuilder::precomputed_only().force_precomputed(true)
    } else {
        HamiltonianBuilder::detect(PySCFConfig::from_env())
    };
    builder.build(molecule).map(|built| built.operator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_molecule() {
        let err = HamiltonianBuilder::precomputed_only().build("XX").unwrap_err();
        assert!(matches!(err, ChemError::UnsupportedMolecule(_)));
    }

    #[test]
    fn test_no_driver_falls_back() {
        let built = HamiltonianBuilder::precomputed_only().build("h2").unwrap();
        assert_eq!(built.molecule, Molecule::H2);
        assert!(matches!(
            built.source,
            HamiltonianSource::Fallback(FallbackReason::StackUnavailable)
        ));
        assert_eq!(built.operator.num_qubits(), 4);
    }

    #[test]
    fn test_forced_reason() {
        let built = HamiltonianBuilder::precomputed_only()
            .force_precomputed(true)
            .build("NH3")
            .unwrap();
        assert!(matches!(
            built.source,
            HamiltonianSource::Fallback(FallbackReason::Forced)
        ));
    }
}
