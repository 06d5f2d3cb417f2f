//! JSON persistence for qubit operators.
//!
//! File format: `{"paulis": ["IIXZ", ...], "coeffs": [[re, im], ...]}`, the
//! two arrays aligned by index.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{ChemError, ChemResult};
use crate::operator::SparsePauliOp;

/// On-disk form of a [`SparsePauliOp`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorFile {
    pub paulis: Vec<String>,
    pub coeffs: Vec<[f64; 2]>,
}

impl From<&SparsePauliOp> for OperatorFile {
    fn from(op: &SparsePauliOp) -> Self {
        Self {
            paulis: op.labels(),
            coeffs: op.coeffs().iter().map(|c| [c.re, c.im]).collect(),
        }
    }
}

impl OperatorFile {
    /// Rebuild the operator. `path` is only used in error messages.
    pub fn into_operator(self, path: &Path) -> ChemResult<SparsePauliOp> {
        if self.paulis.len() != self.coeffs.len() {
            return Err(ChemError::LengthMismatch {
                path: path.to_path_buf(),
                paulis: self.paulis.len(),
                coeffs: self.coeffs.len(),
            });
        }
        SparsePauliOp::from_list(
            self.paulis
                .into_iter()
                .zip(self.coeffs)
                .map(|(label, [re, im])| (label, Complex64::new(re, im))),
        )
    }
}

/// Write `op` to `path` as pretty-printed JSON, replacing any existing file.
pub fn save_operator(op: &SparsePauliOp, path: impl AsRef<Path>) -> ChemResult<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer_pretty(&mut writer, &OperatorFile::from(op))?;
    writer.flush()?;
    Ok(())
}

/// Read an operator previously written by [`save_operator`].
pub fn load_operator(path: impl AsRef<Path>) -> ChemResult<SparsePauliOp> {
    let path = path.as_ref();
    let file: OperatorFile = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    file.into_operator(path)
}
