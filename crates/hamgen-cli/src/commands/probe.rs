//! `hamgen-probe`: show what the electronic-structure driver returns.

use anyhow::{Context, Result};

use hamgen_chem::driver::{ElectronicStructureDriver, PySCFDriver};
use hamgen_chem::molecule::Molecule;
use hamgen_chem::problem::ElectronicStructureProblem;

use crate::args::ProbeArgs;
use crate::{print_banner, print_field, print_section, print_terms};

/// Execute the probe command.
pub fn execute(args: &ProbeArgs) -> Result<()> {
    let molecule: Molecule = args.molecule.parse()?;
    let config = args.common.pyscf_config();
    PySCFDriver::probe(&config)?;

    let spec = molecule.spec(args.bond_length);
    let driver = PySCFDriver::new(config);

    print_banner(&format!("Driver probe: {}", molecule.description()));
    print_field("Driver", driver.name());
    print_field("Interpreter", driver.config().python.display());
    print_field("Geometry", spec.geometry());

    let output = driver
        .run(&spec)
        .with_context(|| format!("{} driver run failed", driver.name()))?;

    print_section("Driver result");
    print_terms(&output.describe().join("\n"));

    print_section("Normalized problem");
    let problem = ElectronicStructureProblem::from(output);
    if let Some(e_nuc) = problem.nuclear_repulsion_energy() {
        print_field("Nuclear repulsion", format!("{e_nuc:.12} Hartree"));
    }
    print_terms(&problem.second_q_ops()?.describe().join("\n"));
    Ok(())
}
