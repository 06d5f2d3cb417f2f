//! PySCF driver, run as a Python subprocess.
//!
//! The request is written to the interpreter's stdin as JSON and the
//! [`DriverOutput`] is read back from stdout. When qiskit-nature is installed
//! the script returns the problem it builds; otherwise it returns plain
//! RHF molecular-orbital integrals.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use serde::Serialize;
use tracing::{debug, info};

use super::ElectronicStructureDriver;
use crate::error::{ChemError, ChemResult};
use crate::molecule::{DistanceUnit, MoleculeSpec};
use crate::problem::DriverOutput;

/// Environment variable naming the Python interpreter.
pub const PYTHON_ENV: &str = "HAMGEN_PYTHON";

const DRIVER_SCRIPT: &str = include_str!("pyscf_driver.py");

/// Whether the PySCF stack could be imported. Probed once per process.
static STACK_AVAILABLE: OnceLock<bool> = OnceLock::new();

/// Configuration for the PySCF driver.
#[derive(Debug, Clone, PartialEq)]
pub struct PySCFConfig {
    /// Python interpreter with `pyscf` installed.
    pub python: PathBuf,
}

impl Default for PySCFConfig {
    fn default() -> Self {
        Self {
            python: PathBuf::from("python3"),
        }
    }
}

impl PySCFConfig {
    /// Default configuration, with the interpreter overridden by
    /// `HAMGEN_PYTHON` when set.
    pub fn from_env() -> Self {
        match std::env::var_os(PYTHON_ENV) {
            Some(python) if !python.is_empty() => Self {
                python: PathBuf::from(python),
            },
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DriverRequest<'a> {
    atom: String,
    basis: &'a str,
    charge: i32,
    spin: u32,
    unit: DistanceUnit,
}

impl<'a> From<&'a MoleculeSpec> for DriverRequest<'a> {
    fn from(spec: &'a MoleculeSpec) -> Self {
        Self {
            atom: spec.geometry(),
            basis: &spec.basis,
            charge: spec.charge,
            spin: spec.spin,
            unit: spec.unit,
        }
    }
}

/// Runs PySCF through a Python interpreter.
#[derive(Debug, Clone)]
pub struct PySCFDriver {
    config: PySCFConfig,
}

impl PySCFDriver {
    pub fn new(config: PySCFConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PySCFConfig {
        &self.config
    }

    /// Check whether `import pyscf` succeeds with the configured interpreter.
    pub fn probe(config: &PySCFConfig) -> ChemResult<()> {
        let output = Command::new(&config.python)
            .args(["-c", "import pyscf"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                ChemError::StackUnavailable(format!(
                    "cannot launch {}: {e}",
                    config.python.display()
                ))
            })?;
        if output.status.success() {
            Ok(())
        } else {
            Err(ChemError::StackUnavailable(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ))
        }
    }

    /// The driver, if the PySCF stack is importable.
    ///
    /// The first call probes `config`'s interpreter; the outcome is cached for
    /// the rest of the process and later calls only reuse it.
    pub fn detect(config: PySCFConfig) -> Option<Self> {
        let available = *STACK_AVAILABLE.get_or_init(|| match Self::probe(&config) {
            Ok(()) => {
                info!(python = %config.python.display(), "PySCF stack available");
                true
            }
            Err(e) => {
                info!(python = %config.python.display(), "PySCF stack not available: {e}");
                false
            }
        });
        available.then(|| Self::new(config))
    }
}

impl ElectronicStructureDriver for PySCFDriver {
    fn name(&self) -> &str {
        "pyscf"
    }

    fn run(&self, spec: &MoleculeSpec) -> ChemResult<DriverOutput> {
        let request = serde_json::to_vec(&DriverRequest::from(spec))?;
        debug!(
            python = %self.config.python.display(),
            molecule = %spec.molecule,
            geometry = %spec.geometry(),
            "launching PySCF driver"
        );

        let mut child = Command::new(&self.config.python)
            .args(["-c", DRIVER_SCRIPT])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(&request)?;
        }
        let output = child.wait_with_output()?;

        if !output.status.success() {
            return Err(ChemError::DriverFailed {
                program: self.config.python.display().to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        serde_json::from_slice(&output.stdout).map_err(|e| ChemError::DriverOutput(e.to_string()))
    }
}
