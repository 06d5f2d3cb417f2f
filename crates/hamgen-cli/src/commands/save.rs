//! `hamgen-save`: write a molecule's qubit Hamiltonian to JSON.

use anyhow::{Context, Result};
use tracing::info;

use hamgen_chem::serialize::save_operator;

use crate::args::SaveArgs;
use crate::print_success;

/// Execute the save command.
pub fn execute(args: &SaveArgs) -> Result<()> {
    let built = super::build(
        &args.molecule,
        args.precomputed,
        None,
        args.common.pyscf_config(),
    )?;
    if built.source.is_fallback() {
        info!(molecule = %built.molecule, "saving pre-tabulated operator");
    }

    save_operator(&built.operator, &args.out)
        .with_context(|| format!("Failed to write operator to {}", args.out.display()))?;

    print_success(&format!(
        "Saved operator with {} terms to {}",
        built.operator.num_terms(),
        args.out.display()
    ));
    Ok(())
}
