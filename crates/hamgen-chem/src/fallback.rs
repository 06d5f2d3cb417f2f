//! Pre-tabulated molecular qubit Hamiltonians.
//!
//! These are Jordan-Wigner encoded Hamiltonians at a fixed geometry and
//! basis, used whenever the ab-initio path is unavailable or fails. Each
//! entry lists its non-identity factors as `(position, pauli)`, where
//! position 0 is the leftmost label character; an empty list is the identity.
//! `Z0` on four qubits therefore renders as `ZIII`.

use num_complex::Complex64;

use crate::molecule::Molecule;
use crate::operator::Pauli::{self, X, Y, Z};
use crate::operator::{PauliString, SparsePauliOp};

/// A table row: non-identity `(position, pauli)` factors and a real coefficient.
pub type TableEntry = (&'static [(u32, Pauli)], f64);

/// H2, STO-3G, R ≈ 0.735 Å, 4 qubits.
pub const H2_STO3G: &[TableEntry] = &[
    (&[], -1.052373245772859),
    (&[(0, Z)], 0.39793742484318045),
    (&[(1, Z)], -0.39793742484318045),
    (&[(2, Z)], -0.01128010425623538),
    (&[(3, Z)], 0.18093119978423156),
    (&[(0, Z), (1, Z)], 0.39793742484318045),
    (&[(0, Z), (3, Z)], -0.18093119978423156),
    (&[(1, Z), (2, Z)], -0.01128010425623538),
    (&[(2, Z), (3, Z)], 0.18093119978423156),
    (&[(0, X), (1, X), (2, Y), (3, Y)], 0.1689275387008791),
    (&[(0, X), (1, Y), (2, Y), (3, X)], -0.1689275387008791),
    (&[(0, Y), (1, X), (2, X), (3, Y)], -0.1689275387008791),
    (&[(0, Y), (1, Y), (2, X), (3, X)], 0.1689275387008791),
];

/// NH3, STO-3G, reduced 6-qubit active space at the equilibrium geometry.
pub const NH3_STO3G_ACTIVE: &[TableEntry] = &[
    (&[], -3.124512345678),
    (&[(0, Z)], 0.215648923471),
    (&[(1, Z)], 0.215648923471),
    (&[(2, Z)], -0.098237651204),
    (&[(3, Z)], -0.098237651204),
    (&[(4, Z)], -0.312765489123),
    (&[(5, Z)], -0.312765489123),
    (&[(0, Z), (1, Z)], 0.170456128934),
    (&[(0, Z), (2, Z)], 0.120387654321),
    (&[(1, Z), (3, Z)], 0.120387654321),
    (&[(2, Z), (3, Z)], 0.165432109876),
    (&[(4, Z), (5, Z)], 0.174562318907),
    (&[(0, X), (1, X), (2, Y), (3, Y)], 0.045123456789),
    (&[(0, Y), (1, Y), (2, X), (3, X)], 0.045123456789),
    (&[(2, X), (3, X), (4, Y), (5, Y)], -0.032198765432),
];

/// The literal table for `molecule`.
pub fn table(molecule: Molecule) -> &'static [TableEntry] {
    match molecule {
        Molecule::H2 => H2_STO3G,
        Molecule::NH3 => NH3_STO3G_ACTIVE,
    }
}

/// The pre-tabulated Hamiltonian for `molecule`.
pub fn precomputed_hamiltonian(molecule: Molecule) -> SparsePauliOp {
    let num_qubits = molecule.fallback_qubits();
    let mut op = SparsePauliOp::zero(num_qubits);
    for (factors, coeff) in table(molecule) {
        let mut pauli = PauliString::identity(num_qubits);
        for &(position, p) in *factors {
            pauli.set(num_qubits - 1 - position, p);
        }
        op.push(pauli, Complex64::new(*coeff, 0.0));
    }
    op
}
