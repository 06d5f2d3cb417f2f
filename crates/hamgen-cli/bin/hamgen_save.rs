//! Save a molecule's qubit Hamiltonian as JSON.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;
use console::style;

use hamgen_cli::args::SaveArgs;
use hamgen_cli::commands::save;
use hamgen_cli::init_logging;

fn main() {
    let args = SaveArgs::parse();
    init_logging(args.common.verbose);

    if let Err(e) = save::execute(&args) {
        eprintln!("{} {e:?}", style("Error:").red().bold());
        std::process::exit(1);
    }
}
