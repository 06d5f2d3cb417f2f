//! Run the PySCF driver and describe the shape of its result.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;
use console::style;

use hamgen_cli::args::ProbeArgs;
use hamgen_cli::commands::probe;
use hamgen_cli::init_logging;

fn main() {
    let args = ProbeArgs::parse();
    init_logging(args.common.verbose);

    if let Err(e) = probe::execute(&args) {
        eprintln!("{} {e:?}", style("Error:").red().bold());
        std::process::exit(1);
    }
}
