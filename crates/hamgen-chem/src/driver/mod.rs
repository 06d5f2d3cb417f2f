//! Electronic-structure drivers.
//!
//! A driver takes a [`MoleculeSpec`] and runs an external ab-initio
//! calculation, returning a [`DriverOutput`]. The crate ships one
//! implementation, [`PySCFDriver`], which runs PySCF in a Python subprocess.

mod pyscf;

pub use pyscf::{PySCFConfig, PySCFDriver, PYTHON_ENV};

use crate::error::ChemResult;
use crate::molecule::MoleculeSpec;
use crate::problem::DriverOutput;

/// Runs an electronic-structure calculation for one molecule.
pub trait ElectronicStructureDriver {
    /// Short name for logs and messages.
    fn name(&self) -> &str;

    /// Run the calculation. Blocks until the driver finishes.
    fn run(&self, spec: &MoleculeSpec) -> ChemResult<DriverOutput>;
}

impl<D: ElectronicStructureDriver + ?Sized> ElectronicStructureDriver for Box<D> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn run(&self, spec: &MoleculeSpec) -> ChemResult<DriverOutput> {
        (**self).run(spec)
    }
}
