//! Command-line arguments for the hamgen binaries.

use std::path::PathBuf;

use clap::{Args, Parser};

use hamgen_chem::driver::{PYTHON_ENV, PySCFConfig};
use hamgen_chem::format::DEFAULT_CUTOFF;

/// Options shared by every binary.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Python interpreter with PySCF installed
    #[arg(long, env = PYTHON_ENV, default_value = "python3")]
    pub python: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    pub fn pyscf_config(&self) -> PySCFConfig {
        PySCFConfig {
            python: self.python.clone(),
        }
    }
}

/// Print the qubit Hamiltonian of a molecule.
#[derive(Parser, Debug)]
#[command(name = "hamgen")]
#[command(version, about = "Print the Jordan-Wigner qubit Hamiltonian of a molecule")]
pub struct ShowArgs {
    /// Molecule (H2, NH3)
    #[arg(short, long, default_value = "NH3")]
    pub molecule: String,

    /// Use the pre-computed operator instead of running PySCF
    #[arg(long)]
    pub precomputed: bool,

    /// H-H distance in Angstrom (H2 only)
    #[arg(long)]
    pub bond_length: Option<f64>,

    /// Hide terms whose coefficient magnitude is below this value
    #[arg(long, default_value_t = DEFAULT_CUTOFF)]
    pub cutoff: f64,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Write the qubit Hamiltonian of a molecule to a JSON file.
#[derive(Parser, Debug)]
#[command(name = "hamgen-save")]
#[command(version, about = "Save a molecular qubit Hamiltonian as JSON")]
pub struct SaveArgs {
    /// Output JSON file path
    #[arg(long)]
    pub out: PathBuf,

    /// Use the pre-computed operator instead of running PySCF
    #[arg(long)]
    pub precomputed: bool,

    /// Molecule (H2, NH3)
    #[arg(short, long, default_value = "NH3")]
    pub molecule: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Describe what the electronic-structure driver returns.
#[derive(Parser, Debug)]
#[command(name = "hamgen-probe")]
#[command(version, about = "Run the PySCF driver and print the shape of its result")]
pub struct ProbeArgs {
    /// Molecule (H2, NH3)
    #[arg(short, long, default_value = "NH3")]
    pub molecule: String,

    /// H-H distance in Angstrom (H2 only)
    #[arg(long)]
    pub bond_length: Option<f64>,

    #[command(flatten)]
    pub common: CommonArgs,
}
