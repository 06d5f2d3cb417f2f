//! CLI argument parsing and command tests.

use std::path::PathBuf;

use clap::Parser;

use hamgen_chem::format::DEFAULT_CUTOFF;
use hamgen_chem::serialize::OperatorFile;
use hamgen_cli::args::{ProbeArgs, SaveArgs, ShowArgs};
use hamgen_cli::commands::{self, save};

// ============================================================================
// Argument parsing
// ============================================================================

#[test]
fn show_defaults() {
    let args = ShowArgs::try_parse_from(["hamgen"]).unwrap();
    assert_eq!(args.molecule, "NH3");
    assert!(!args.precomputed);
    assert_eq!(args.bond_length, None);
    assert_eq!(args.cutoff, DEFAULT_CUTOFF);
    assert_eq!(args.common.verbose, 0);
}

#[test]
fn show_short_molecule_flag() {
    let args = ShowArgs::try_parse_from(["hamgen", "-m", "h2", "--precomputed", "-vv"]).unwrap();
    assert_eq!(args.molecule, "h2");
    assert!(args.precomputed);
    assert_eq!(args.common.verbose, 2);
}

#[test]
fn show_bond_length_and_cutoff() {
    let args = ShowArgs::try_parse_from([
        "hamgen",
        "--molecule",
        "H2",
        "--bond-length",
        "0.9",
        "--cutoff",
        "1e-6",
        "--python",
        "/opt/py/bin/python",
    ])
    .unwrap();
    assert_eq!(args.bond_length, Some(0.9));
    assert_eq!(args.cutoff, 1e-6);
    assert_eq!(args.common.pyscf_config().python, PathBuf::from("/opt/py/bin/python"));
}

#[test]
fn save_requires_out() {
    assert!(SaveArgs::try_parse_from(["hamgen-save"]).is_err());
    assert!(SaveArgs::try_parse_from(["hamgen-save", "--precomputed"]).is_err());
}

#[test]
fn save_parses_out_and_flag() {
    let args =
        SaveArgs::try_parse_from(["hamgen-save", "--out", "nh3_op.json", "--precomputed"]).unwrap();
    assert_eq!(args.out, PathBuf::from("nh3_op.json"));
    assert!(args.precomputed);
    assert_eq!(args.molecule, "NH3");
}

#[test]
fn probe_defaults() {
    let args = ProbeArgs::try_parse_from(["hamgen-probe", "-m", "H2"]).unwrap();
    assert_eq!(args.molecule, "H2");
    assert_eq!(args.bond_length, None);
}

#[test]
fn unknown_flag_rejected() {
    assert!(ShowArgs::try_parse_from(["hamgen", "--basis", "631g"]).is_err());
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn save_precomputed_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nh3_op.json");
    let args = SaveArgs::try_parse_from([
        "hamgen-save",
        "--out",
        out.to_str().unwrap(),
        "--precomputed",
    ])
    .unwrap();

    save::execute(&args).unwrap();

    let file: OperatorFile =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(file.paulis.len(), 15);
    assert_eq!(file.coeffs.len(), 15);
    assert_eq!(file.paulis[0], "IIIIII");
    assert_eq!(file.coeffs[0], [-3.124512345678, 0.0]);
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("no/such/dir/op.json");
    let args = SaveArgs::try_parse_from([
        "hamgen-save",
        "--out",
        out.to_str().unwrap(),
        "--precomputed",
    ])
    .unwrap();

    let err = save::execute(&args).unwrap_err();
    assert!(err.to_string().starts_with("Failed to write operator"));
}

#[test]
fn save_unsupported_molecule_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("xx_op.json");
    for extra in [&["--precomputed"][..], &["--python", "/nonexistent/hamgen-python"][..]] {
        let mut argv = vec!["hamgen-save", "-m", "XX", "--out", out.to_str().unwrap()];
        argv.extend_from_slice(extra);
        let args = SaveArgs::try_parse_from(argv).unwrap();

        let err = save::execute(&args).unwrap_err();
        assert!(err.to_string().contains("unsupported molecule 'XX'"));
        assert!(!out.exists());
    }
}

#[test]
fn build_unsupported_molecule_fails() {
    let err = commands::build("XX", true, None, Default::default()).unwrap_err();
    assert!(err.to_string().contains("unsupported molecule 'XX'"));
}

#[test]
fn build_precomputed_h2() {
    let built = commands::build("H2", true, Some(0.9), Default::default()).unwrap();
    assert!(built.source.is_fallback());
    assert_eq!(built.operator.num_qubits(), 4);
}
