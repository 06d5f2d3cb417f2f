//! Fermion-to-qubit mappings.
//!
//! The Jordan-Wigner encoding stores the occupation of mode `j` on qubit `j`
//! and carries the fermionic sign on a string of Z operators over the lower
//! modes:
//!
//!   a_j  ↦ ½ (X_j + iY_j) Z_{j-1} ⋯ Z_0
//!   a†_j ↦ ½ (X_j − iY_j) Z_{j-1} ⋯ Z_0

use num_complex::Complex64;
use tracing::debug;

use crate::fermionic::{FermionicOp, LadderAction, LadderOp};
use crate::operator::{Pauli, PauliString, SparsePauliOp};

/// Terms whose merged coefficient is at or below this magnitude are dropped.
pub const SIMPLIFY_ATOL: f64 = 1e-12;

/// Maps a fermionic operator onto a qubit operator.
pub trait QubitMapper {
    /// Map `op` onto qubits.
    fn map(&self, op: &FermionicOp) -> SparsePauliOp;
}

/// The Jordan-Wigner encoding: one qubit per spin orbital.
#[derive(Debug, Clone, Copy, Default)]
pub struct JordanWignerMapper;

impl JordanWignerMapper {
    pub fn new() -> Self {
        Self
    }

    /// The two Pauli branches of a single ladder operator.
    fn ladder_branches(op: LadderOp, num_qubits: u32) -> [(Complex64, PauliString); 2] {
        let mut x = PauliString::identity(num_qubits);
        for q in 0..op.mode {
            x.set(q, Pauli::Z);
        }
        let mut y = x.clone();
        x.set(op.mode, Pauli::X);
        y.set(op.mode, Pauli::Y);

        let y_coeff = match op.action {
            LadderAction::Create => Complex64::new(0.0, -0.5),
            LadderAction::Annihilate => Complex64::new(0.0, 0.5),
        };
        [(Complex64::new(0.5, 0.0), x), (y_coeff, y)]
    }
}

impl QubitMapper for JordanWignerMapper {
    fn map(&self, op: &FermionicOp) -> SparsePauliOp {
        let num_qubits = op.num_spin_orbitals();
        let mut expanded = SparsePauliOp::zero(num_qubits);

        for term in op.terms() {
            let mut products = vec![(term.coeff, PauliString::identity(num_qubits))];
            for ladder in &term.ops {
                let branches = Self::ladder_branches(*ladder, num_qubits);
                products = products
                    .iter()
                    .flat_map(|(coeff, pauli)| {
                        branches.iter().map(move |(b_coeff, b_pauli)| {
                            let (phase, product) = pauli.compose(b_pauli);
                            (coeff * b_coeff * phase, product)
                        })
                    })
                    .collect();
            }
            for (coeff, pauli) in products {
                expanded.push(pauli, coeff);
            }
        }

        debug!(
            fermionic_terms = op.num_terms(),
            expanded_terms = expanded.num_terms(),
            "Jordan-Wigner expansion"
        );
        expanded.simplify(SIMPLIFY_ATOL)
    }
}
