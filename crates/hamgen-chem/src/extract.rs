//! Ab-initio extraction: driver output → named fermionic operator → qubits.

use tracing::debug;

use crate::driver::ElectronicStructureDriver;
use crate::error::{ChemError, ChemResult};
use crate::fermionic::FermionicOp;
use crate::mapper::{JordanWignerMapper, QubitMapper};
use crate::molecule::MoleculeSpec;
use crate::operator::SparsePauliOp;
use crate::problem::{ELECTRONIC_ENERGY, ElectronicStructureProblem, OpsEntry, SecondQuantizedOps};

/// Pull the operator called `name` out of `ops`.
///
/// Lookup order:
/// 1. keyed lookup when `ops` is a mapping;
/// 2. the first sequence element that is a mapping containing `name`;
/// 3. the first sequence element that is a bare fermionic operator;
/// 4. otherwise [`ChemError::OperatorNotFound`].
pub fn extract_operator(ops: SecondQuantizedOps, name: &str) -> ChemResult<FermionicOp> {
    let shape = ops.shape();
    let not_found = || ChemError::OperatorNotFound {
        name: name.to_string(),
        shape: shape.clone(),
    };

    match ops {
        SecondQuantizedOps::Keyed { mut operators } => {
            operators.remove(name).ok_or_else(not_found)
        }
        SecondQuantizedOps::Sequence { mut elements } => {
            let keyed = elements.iter().position(
                |el| matches!(el, OpsEntry::Keyed { operators } if operators.contains_key(name)),
            );
            let index = keyed
                .or_else(|| {
                    elements
                        .iter()
                        .position(|el| matches!(el, OpsEntry::Fermionic { .. }))
                })
                .ok_or_else(not_found)?;

            match elements.swap_remove(index) {
                OpsEntry::Keyed { mut operators } => operators.remove(name).ok_or_else(not_found),
                OpsEntry::Fermionic { operator } => Ok(operator),
                OpsEntry::Opaque { .. } => Err(not_found()),
            }
        }
    }
}

/// Run `driver` for `spec` and map its electronic energy operator to qubits
/// with the Jordan-Wigner encoding. Every failure is returned to the caller.
pub fn ab_initio_hamiltonian(
    driver: &dyn ElectronicStructureDriver,
    spec: &MoleculeSpec,
) -> ChemResult<SparsePauliOp> {
    let output = driver.run(spec)?;
    let problem = ElectronicStructureProblem::from(output);
    if let Some(e_nuc) = problem.nuclear_repulsion_energy() {
        debug!(molecule = %spec.molecule, e_nuc, "nuclear repulsion energy");
    }

    let fermionic = extract_operator(problem.second_q_ops()?, ELECTRONIC_ENERGY)?;
    let qubit_op = JordanWignerMapper::new().map(&fermionic);
    debug!(
        molecule = %spec.molecule,
        driver = driver.name(),
        qubits = qubit_op.num_qubits(),
        terms = qubit_op.num_terms(),
        "mapped electronic energy to qubits"
    );
    Ok(qubit_op)
}
