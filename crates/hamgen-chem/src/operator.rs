//! Qubit operator data structures.
//!
//! A qubit operator is a sum of weighted Pauli strings:
//!
//!   H = Σ_k  c_k · P_k
//!
//! where each P_k is a tensor product of single-qubit Pauli operators
//! (I, X, Y, Z) and c_k ∈ ℂ.
//!
//! Labels are little-endian: qubit 0 is the *rightmost* character, so the
//! label `"IIXZ"` means Z on qubit 0 and X on qubit 1.
//!
//! # Example
//!
//! ```rust
//! use hamgen_chem::operator::SparsePauliOp;
//!
//! // H = -1.0·Z₀Z₁ + 0.5·X₀
//! let h = SparsePauliOp::from_sparse_list(2, [("Z0 Z1", -1.0), ("X0", 0.5)]).unwrap();
//! assert_eq!(h.num_terms(), 2);
//! assert_eq!(h.labels(), vec!["ZZ".to_string(), "IX".to_string()]);
//! ```

use std::fmt;

use num_complex::Complex64;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChemError, ChemResult};

const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pauli {
    /// Identity.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl Pauli {
    /// Label character for this operator.
    pub fn symbol(self) -> char {
        match self {
            Pauli::I => 'I',
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }

    /// Parse a label character.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'I' => Some(Pauli::I),
            'X' => Some(Pauli::X),
            'Y' => Some(Pauli::Y),
            'Z' => Some(Pauli::Z),
            _ => None,
        }
    }

    /// Product `self · other` as `(phase, pauli)`.
    pub fn compose(self, other: Pauli) -> (Complex64, Pauli) {
        match (self, other) {
            (Pauli::I, p) | (p, Pauli::I) => (ONE, p),
            (Pauli::X, Pauli::X) | (Pauli::Y, Pauli::Y) | (Pauli::Z, Pauli::Z) => (ONE, Pauli::I),
            (Pauli::X, Pauli::Y) => (I, Pauli::Z),
            (Pauli::Y, Pauli::X) => (-I, Pauli::Z),
            (Pauli::Y, Pauli::Z) => (I, Pauli::X),
            (Pauli::Z, Pauli::Y) => (-I, Pauli::X),
            (Pauli::Z, Pauli::X) => (I, Pauli::Y),
            (Pauli::X, Pauli::Z) => (-I, Pauli::Y),
        }
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A dense tensor product of Pauli operators, indexed by qubit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PauliString {
    /// `ops[q]` acts on qubit `q`.
    ops: Vec<Pauli>,
}

impl PauliString {
    /// Identity on `num_qubits` qubits.
    pub fn identity(num_qubits: u32) -> Self {
        Self {
            ops: vec![Pauli::I; num_qubits as usize],
        }
    }

    /// Build from per-qubit operators (`ops[q]` acts on qubit `q`).
    pub fn from_qubit_ops(ops: Vec<Pauli>) -> Self {
        Self { ops }
    }

    /// Parse a little-endian label such as `"IXYZ"`.
    pub fn from_label(label: &str) -> ChemResult<Self> {
        let ops = label
            .chars()
            .rev()
            .map(|c| {
                Pauli::from_symbol(c).ok_or_else(|| ChemError::InvalidPauliLabel {
                    label: label.to_string(),
                    found: c,
                })
            })
            .collect::<ChemResult<Vec<_>>>()?;
        Ok(Self { ops })
    }

    /// Render as a little-endian label.
    pub fn to_label(&self) -> String {
        self.ops.iter().rev().map(|p| p.symbol()).collect()
    }

    /// Number of qubits spanned.
    pub fn num_qubits(&self) -> u32 {
        self.ops.len() as u32
    }

    /// Operator on qubit `q`.
    pub fn get(&self, qubit: u32) -> Pauli {
        self.ops[qubit as usize]
    }

    /// Replace the operator on qubit `q`.
    pub fn set(&mut self, qubit: u32, pauli: Pauli) {
        self.ops[qubit as usize] = pauli;
    }

    /// True if every factor is the identity.
    pub fn is_identity(&self) -> bool {
        self.ops.iter().all(|p| *p == Pauli::I)
    }

    /// Number of non-identity factors.
    pub fn weight(&self) -> usize {
        self.ops.iter().filter(|p| **p != Pauli::I).count()
    }

    /// Product `self · other` as `(phase, string)`. Both strings must span
    /// the same number of qubits.
    pub fn compose(&self, other: &PauliString) -> (Complex64, PauliString) {
        debug_assert_eq!(self.ops.len(), other.ops.len());
        let mut phase = ONE;
        let ops = self
            .ops
            .iter()
            .zip(&other.ops)
            .map(|(a, b)| {
                let (p, op) = a.compose(*b);
                phase *= p;
                op
            })
            .collect();
        (phase, PauliString { ops })
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_label())
    }
}

/// A sparse sum of Pauli strings with complex coefficients.
///
/// Stored as parallel `paulis` / `coeffs` sequences. Every string spans
/// exactly `num_qubits` qubits. Duplicate strings are allowed; call
/// [`SparsePauliOp::simplify`] to merge them.
#[derive(Debug, Clone, PartialEq)]
pub struct SparsePauliOp {
    num_qubits: u32,
    paulis: Vec<PauliString>,
    coeffs: Vec<Complex64>,
}

impl SparsePauliOp {
    /// An operator with no terms.
    pub fn zero(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            paulis: Vec::new(),
            coeffs: Vec::new(),
        }
    }

    /// Build from dense labels and coefficients.
    ///
    /// The qubit count is taken from the first label; every other label must
    /// have the same length.
    pub fn from_list<L, C>(terms: impl IntoIterator<Item = (L, C)>) -> ChemResult<Self>
    where
        L: AsRef<str>,
        C: Into<Complex64>,
    {
        let mut op: Option<Self> = None;
        for (label, coeff) in terms {
            let label = label.as_ref();
            let pauli = PauliString::from_label(label)?;
            let target = op.get_or_insert_with(|| Self::zero(pauli.num_qubits()));
            if pauli.num_qubits() != target.num_qubits {
                return Err(ChemError::LabelLengthMismatch {
                    label: label.to_string(),
                    expected: target.num_qubits as usize,
                    found: pauli.num_qubits() as usize,
                });
            }
            target.push(pauli, coeff.into());
        }
        Ok(op.unwrap_or_else(|| Self::zero(0)))
    }

    /// Build from sparse labels such as `"X0 Y2"` on an explicit qubit count.
    ///
    /// An empty sparse label is the identity.
    pub fn from_sparse_list<L, C>(
        num_qubits: u32,
        terms: impl IntoIterator<Item = (L, C)>,
    ) -> ChemResult<Self>
    where
        L: AsRef<str>,
        C: Into<Complex64>,
    {
        let mut op = Self::zero(num_qubits);
        for (label, coeff) in terms {
            let label = label.as_ref();
            let mut pauli = PauliString::identity(num_qubits);
            for factor in label.split_whitespace() {
                let mut chars = factor.chars();
                let symbol = chars.next().unwrap_or(' ');
                let p = Pauli::from_symbol(symbol).ok_or_else(|| ChemError::InvalidPauliLabel {
                    label: label.to_string(),
                    found: symbol,
                })?;
                let qubit: u32 = chars.as_str().parse().map_err(|_| ChemError::InvalidPauliLabel {
                    label: label.to_string(),
                    found: symbol,
                })?;
                if qubit >= num_qubits {
                    return Err(ChemError::QubitOutOfRange { qubit, num_qubits });
                }
                pauli.set(qubit, p);
            }
            op.push(pauli, coeff.into());
        }
        Ok(op)
    }

    /// Append a term. Panics in debug builds if the width does not match.
    pub fn push(&mut self, pauli: PauliString, coeff: Complex64) {
        debug_assert_eq!(pauli.num_qubits(), self.num_qubits);
        self.paulis.push(pauli);
        self.coeffs.push(coeff);
    }

    /// Number of qubits every term spans.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of terms (duplicates counted separately).
    pub fn num_terms(&self) -> usize {
        self.paulis.len()
    }

    /// True if there are no terms.
    pub fn is_empty(&self) -> bool {
        self.paulis.is_empty()
    }

    /// The Pauli strings, aligned with [`coeffs`](Self::coeffs).
    pub fn paulis(&self) -> &[PauliString] {
        &self.paulis
    }

    /// The coefficients, aligned with [`paulis`](Self::paulis).
    pub fn coeffs(&self) -> &[Complex64] {
        &self.coeffs
    }

    /// Little-endian labels of every term, in order.
    pub fn labels(&self) -> Vec<String> {
        self.paulis.iter().map(PauliString::to_label).collect()
    }

    /// Iterate over `(pauli, coeff)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&PauliString, Complex64)> + '_ {
        self.paulis.iter().zip(self.coeffs.iter().copied())
    }

    /// Merge duplicate strings and drop terms with `|c| <= atol`.
    ///
    /// Surviving terms keep the order of their first occurrence.
    pub fn simplify(self, atol: f64) -> Self {
        let mut index: FxHashMap<PauliString, usize> = FxHashMap::default();
        let mut paulis: Vec<PauliString> = Vec::new();
        let mut coeffs: Vec<Complex64> = Vec::new();

        for (pauli, coeff) in self.paulis.into_iter().zip(self.coeffs) {
            match index.get(&pauli) {
                Some(&i) => coeffs[i] += coeff,
                None => {
                    index.insert(pauli.clone(), paulis.len());
                    paulis.push(pauli);
                    coeffs.push(coeff);
                }
            }
        }

        let (paulis, coeffs) = paulis
            .into_iter()
            .zip(coeffs)
            .filter(|(_, c)| c.norm() > atol)
            .unzip();

        Self {
            num_qubits: self.num_qubits,
            paulis,
            coeffs,
        }
    }
}

impl fmt::Display for SparsePauliOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "SparsePauliOp ({} terms, {} qubits):",
            self.num_terms(),
            self.num_qubits()
        )?;
        for (pauli, coeff) in self.iter() {
            writeln!(f, "  {pauli}  {coeff}")?;
        }
        Ok(())
    }
}
