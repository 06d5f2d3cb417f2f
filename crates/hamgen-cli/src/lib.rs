//! hamgen command-line front ends.
//!
//! Three binaries share this library:
//!
//! - `hamgen`: build a molecule's qubit Hamiltonian and print it
//! - `hamgen-save`: build the Hamiltonian and write it to a JSON file
//! - `hamgen-probe`: run the electronic-structure driver and describe what it
//!   returned

pub mod args;
pub mod commands;

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber. `-v` count selects the level.
pub fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// A spinner shown while a Hamiltonian is being built.
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.green} [{elapsed}] {msg}") {
        pb.set_style(spinner_style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

const RULE_WIDTH: usize = 64;

/// Banner naming the molecule and encoding being reported.
pub fn print_banner(title: &str) {
    println!();
    println!("{}", style(title).cyan().bold());
    println!("{}", style("=".repeat(title.chars().count().min(RULE_WIDTH))).cyan());
}

/// Start a block of output (terms, driver result, ...).
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("[{title}]")).green().bold());
}

/// A `label: value` line, labels padded to a common column.
pub fn print_field(label: &str, value: impl std::fmt::Display) {
    let label = format!("{label}:");
    println!("  {} {value}", style(format!("{label:<18}")).dim());
}

/// One line per Pauli term, indented under the current section.
pub fn print_terms(rendered: &str) {
    for line in rendered.lines() {
        println!("  {line}");
    }
}

/// Completion message for a command that wrote output.
pub fn print_success(message: &str) {
    println!("{} {message}", style("done:").green().bold());
}

/// Remark about how the Hamiltonian was obtained.
pub fn print_note(message: &str) {
    println!("{} {message}", style("note:").yellow());
}
