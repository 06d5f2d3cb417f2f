//! Command implementations.

pub mod probe;
pub mod save;
pub mod show;

use anyhow::Result;

use hamgen_chem::builder::{BuiltHamiltonian, HamiltonianBuilder};
use hamgen_chem::driver::PySCFConfig;

/// Build `molecule` with the detected driver unless the fallback is forced.
pub fn build(
    molecule: &str,
    precomputed: bool,
    bond_length: Option<f64>,
    config: PySCFConfig,
) -> Result<BuiltHamiltonian> {
    let builder = if precomputed {
        HamiltonianBuilder::precomputed_only()
    } else {
        HamiltonianBuilder::detect(config)
    };
    let mut builder = builder.force_precomputed(precomputed);
    if let Some(r) = bond_length {
        builder = builder.with_bond_length(r);
    }
    Ok(builder.build(molecule)?)
}
