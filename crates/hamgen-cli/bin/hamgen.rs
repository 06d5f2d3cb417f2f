//! Print a molecule's Jordan-Wigner qubit Hamiltonian.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;
use console::style;

use hamgen_cli::args::ShowArgs;
use hamgen_cli::commands::show;
use hamgen_cli::init_logging;

fn main() {
    let args = ShowArgs::parse();
    init_logging(args.common.verbose);

    if let Err(e) = show::execute(&args) {
        eprintln!("{} {e:?}", style("Error:").red().bold());
        std::process::exit(1);
    }
}
