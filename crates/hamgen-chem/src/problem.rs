//! Electronic-structure problems and their second-quantized operators.
//!
//! A driver either hands back a ready problem (operators already built) or
//! the raw molecular-orbital integrals, which [`ElectronicStructureProblem`]
//! turns into the electronic energy operator itself.

use std::collections::BTreeMap;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChemError, ChemResult};
use crate::fermionic::{FermionicOp, LadderOp};

/// Key of the main Hamiltonian in a set of second-quantized operators.
pub const ELECTRONIC_ENERGY: &str = "ElectronicEnergy";

/// Integrals below this magnitude produce no term.
const INTEGRAL_CUTOFF: f64 = 1e-12;

/// Molecular-orbital integrals in the spatial-orbital basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectronicIntegrals {
    pub num_spatial_orbitals: usize,
    pub nuclear_repulsion_energy: f64,
    /// h_pq, `n × n`.
    pub one_body: Vec<Vec<f64>>,
    /// (pq|rs) in chemists' notation, row-major `n⁴`.
    pub two_body: Vec<f64>,
}

impl ElectronicIntegrals {
    fn validate(&self) -> ChemResult<()> {
        let n = self.num_spatial_orbitals;
        if self.one_body.len() != n || self.one_body.iter().any(|row| row.len() != n) {
            return Err(ChemError::MalformedIntegrals(format!(
                "one-body integrals must be {n}x{n}"
            )));
        }
        if self.two_body.len() != n.pow(4) {
            return Err(ChemError::MalformedIntegrals(format!(
                "two-body integrals have {} entries, expected {}",
                self.two_body.len(),
                n.pow(4)
            )));
        }
        Ok(())
    }

    fn eri(&self, p: usize, q: usize, r: usize, s: usize) -> f64 {
        let n = self.num_spatial_orbitals;
        self.two_body[((p * n + q) * n + r) * n + s]
    }

    /// The electronic energy operator over `2n` spin orbitals (alpha block
    /// first, then beta):
    ///
    ///   H = Σ h_pq a†_p a_q + ½ Σ (pq|rs) a†_p a†_r a_s a_q
    ///
    /// The nuclear repulsion energy is not included.
    pub fn electronic_energy(&self) -> ChemResult<FermionicOp> {
        self.validate()?;
        let n = self.num_spatial_orbitals;
        let mut op = FermionicOp::zero((2 * n) as u32);
        let mode = |orbital: usize, spin: usize| (orbital + spin * n) as u32;

        for spin in 0..2 {
            for p in 0..n {
                for q in 0..n {
                    let h = self.one_body[p][q];
                    if h.abs() < INTEGRAL_CUTOFF {
                        continue;
                    }
                    op.add_term(
                        vec![
                            LadderOp::create(mode(p, spin)),
                            LadderOp::annihilate(mode(q, spin)),
                        ],
                        Complex64::new(h, 0.0),
                    )?;
                }
            }
        }

        for sigma in 0..2 {
            for tau in 0..2 {
                for p in 0..n {
                    for q in 0..n {
                        for r in 0..n {
                            for s in 0..n {
                                let v = self.eri(p, q, r, s);
                                if v.abs() < INTEGRAL_CUTOFF {
                                    continue;
                                }
                                let (mp, mq) = (mode(p, sigma), mode(q, sigma));
                                let (mr, ms) = (mode(r, tau), mode(s, tau));
                                if mp == mr || mq == ms {
                                    continue;
                                }
                                op.add_term(
                                    vec![
                                        LadderOp::create(mp),
                                        LadderOp::create(mr),
                                        LadderOp::annihilate(ms),
                                        LadderOp::annihilate(mq),
                                    ],
                                    Complex64::new(0.5 * v, 0.0),
                                )?;
                            }
                        }
                    }
                }
            }
        }

        debug!(
            spatial_orbitals = n,
            terms = op.num_terms(),
            "built electronic energy operator from integrals"
        );
        Ok(op)
    }
}

/// One element of a sequence-shaped operator set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OpsEntry {
    /// A nested name → operator mapping.
    Keyed {
        operators: BTreeMap<String, FermionicOp>,
    },
    /// A bare fermionic operator.
    Fermionic { operator: FermionicOp },
    /// Anything else the driver returned, identified by its type name.
    Opaque { type_name: String },
}

/// The set of second-quantized operators a problem exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum SecondQuantizedOps {
    /// Operators keyed by name.
    Keyed {
        operators: BTreeMap<String, FermionicOp>,
    },
    /// An ordered sequence of entries.
    Sequence { elements: Vec<OpsEntry> },
}

impl SecondQuantizedOps {
    /// Short shape description, used in errors.
    pub fn shape(&self) -> String {
        match self {
            SecondQuantizedOps::Keyed { operators } => {
                format!("mapping with {} keys", operators.len())
            }
            SecondQuantizedOps::Sequence { elements } => {
                format!("sequence of {} elements", elements.len())
            }
        }
    }

    /// Human-readable lines describing the shape and contents.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = vec![format!("second_q_ops: {}", self.shape())];
        match self {
            SecondQuantizedOps::Keyed { operators } => {
                for (name, op) in operators {
                    lines.push(format!("  key {name:?} -> {}", describe_op(op)));
                }
            }
            SecondQuantizedOps::Sequence { elements } => {
                for (i, el) in elements.iter().enumerate() {
                    let what = match el {
                        OpsEntry::Keyed { operators } => format!(
                            "mapping {{{}}}",
                            operators.keys().cloned().collect::<Vec<_>>().join(", ")
                        ),
                        OpsEntry::Fermionic { operator } => describe_op(operator),
                        OpsEntry::Opaque { type_name } => format!("opaque {type_name}"),
                    };
                    lines.push(format!("  element[{i}] -> {what}"));
                }
            }
        }
        lines
    }
}

fn describe_op(op: &FermionicOp) -> String {
    format!(
        "FermionicOp ({} terms, {} spin orbitals)",
        op.num_terms(),
        op.num_spin_orbitals()
    )
}

/// What a driver run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum DriverOutput {
    /// A fully formed problem.
    Problem { second_q_ops: SecondQuantizedOps },
    /// Raw integrals that still need wrapping into a problem.
    Integrals(ElectronicIntegrals),
}

impl DriverOutput {
    /// Human-readable lines describing what the driver returned.
    pub fn describe(&self) -> Vec<String> {
        match self {
            DriverOutput::Problem { second_q_ops } => {
                let mut lines = vec!["driver result: problem".to_string()];
                lines.extend(second_q_ops.describe());
                lines
            }
            DriverOutput::Integrals(integrals) => vec![
                "driver result: integrals".to_string(),
                format!("  spatial orbitals: {}", integrals.num_spatial_orbitals),
                format!(
                    "  nuclear repulsion: {:.12}",
                    integrals.nuclear_repulsion_energy
                ),
            ],
        }
    }
}

/// An electronic-structure problem, normalized from any driver output.
#[derive(Debug, Clone, PartialEq)]
pub enum ElectronicStructureProblem {
    /// The driver already built the operators.
    Prepared(SecondQuantizedOps),
    /// Operators are derived from integrals on demand.
    FromIntegrals(ElectronicIntegrals),
}

impl From<DriverOutput> for ElectronicStructureProblem {
    fn from(output: DriverOutput) -> Self {
        match output {
            DriverOutput::Problem { second_q_ops } => Self::Prepared(second_q_ops),
            DriverOutput::Integrals(integrals) => Self::FromIntegrals(integrals),
        }
    }
}

impl ElectronicStructureProblem {
    /// The second-quantized operators of this problem.
    pub fn second_q_ops(self) -> ChemResult<SecondQuantizedOps> {
        match self {
            Self::Prepared(ops) => Ok(ops),
            Self::FromIntegrals(integrals) => {
                let mut operators = BTreeMap::new();
                operators.insert(ELECTRONIC_ENERGY.to_string(), integrals.electronic_energy()?);
                Ok(SecondQuantizedOps::Keyed { operators })
            }
        }
    }

    /// Nuclear repulsion energy, when known.
    pub fn nuclear_repulsion_energy(&self) -> Option<f64> {
        match self {
            Self::Prepared(_) => None,
            Self::FromIntegrals(integrals) => Some(integrals.nuclear_repulsion_energy),
        }
    }
}
