//! Error types for the chem crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building, formatting or persisting qubit Hamiltonians.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChemError {
    /// The molecule identifier is not one of the known molecules.
    #[error("unsupported molecule '{0}' (available: H2, NH3)")]
    UnsupportedMolecule(String),

    /// The external electronic-structure stack could not be loaded.
    #[error("electronic-structure stack unavailable: {0}")]
    StackUnavailable(String),

    /// The named operator was not present in any recognised result shape.
    #[error("operator '{name}' not found in second-quantized operators ({shape})")]
    OperatorNotFound {
        /// Operator name that was looked up.
        name: String,
        /// Short description of the shape that was scanned.
        shape: String,
    },

    /// The driver process ran but exited unsuccessfully.
    #[error("driver '{program}' exited with {status}: {stderr}")]
    DriverFailed {
        /// Program that was launched.
        program: String,
        /// Exit status as reported by the OS.
        status: String,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// The driver produced output that does not match the driver contract.
    #[error("malformed driver output: {0}")]
    DriverOutput(String),

    /// A Pauli label contained a character outside {I, X, Y, Z}.
    #[error("invalid Pauli label '{label}': unexpected character '{found}'")]
    InvalidPauliLabel {
        /// The offending label.
        label: String,
        /// The first character that is not a Pauli symbol.
        found: char,
    },

    /// A Pauli label does not span the operator's qubit count.
    #[error("Pauli label '{label}' has length {found}, expected {expected}")]
    LabelLengthMismatch {
        /// The offending label.
        label: String,
        /// Qubit count of the operator.
        expected: usize,
        /// Length of the label.
        found: usize,
    },

    /// A term references a qubit beyond the operator's width.
    #[error("term references qubit {qubit} but operator only has {num_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: u32,
        /// Width of the operator.
        num_qubits: u32,
    },

    /// A fermionic label could not be parsed.
    #[error("invalid fermionic label '{0}'")]
    InvalidFermionicLabel(String),

    /// A ladder operator acts on a mode outside the register.
    #[error("mode {mode} out of range for {num_spin_orbitals} spin orbitals")]
    ModeOutOfRange {
        /// The offending mode index.
        mode: u32,
        /// Register size.
        num_spin_orbitals: u32,
    },

    /// Integral arrays have inconsistent dimensions.
    #[error("malformed integrals: {0}")]
    MalformedIntegrals(String),

    /// Parallel arrays in an operator file differ in length.
    #[error("{paulis} Pauli labels but {coeffs} coefficients in {path}")]
    LengthMismatch {
        /// File that was read.
        path: PathBuf,
        /// Number of labels.
        paulis: usize,
        /// Number of coefficients.
        coeffs: usize,
    },

    /// Filesystem or process I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Hamiltonian construction operations.
pub type ChemResult<T> = Result<T, ChemError>;
