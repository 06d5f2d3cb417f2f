//! `hamgen`: print a molecule's qubit Hamiltonian.

use anyhow::Result;

use hamgen_chem::builder::HamiltonianSource;
use hamgen_chem::format::compact_string;

use crate::args::ShowArgs;
use crate::{create_spinner, print_banner, print_field, print_note, print_section, print_terms};

/// Execute the show command.
pub fn execute(args: &ShowArgs) -> Result<()> {
    let spinner = create_spinner(&format!("Building Hamiltonian for {}", args.molecule));
    let built = super::build(
        &args.molecule,
        args.precomputed,
        args.bond_length,
        args.common.pyscf_config(),
    );
    spinner.finish_and_clear();
    let built = built?;

    print_banner(&format!(
        "Qubit Hamiltonian for {} (Jordan-Wigner, STO-3G)",
        built.molecule.description()
    ));
    print_field("Qubits", built.operator.num_qubits());
    print_field("Terms", built.operator.num_terms());

    match &built.source {
        HamiltonianSource::AbInitio => print_field("Source", "ab initio (PySCF)"),
        HamiltonianSource::Fallback(reason) => {
            print_field("Source", "pre-tabulated fallback");
            print_note(&format!("Fallback used: {reason}."));
            print_note(
                "Ab-initio generation reflects the requested geometry exactly; \
                 install PySCF (and optionally qiskit-nature) to enable it.",
            );
        }
    }

    print_section("Terms");
    print_terms(&compact_string(&built.operator, args.cutoff));
    Ok(())
}
