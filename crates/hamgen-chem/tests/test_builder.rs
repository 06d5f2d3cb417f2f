//! Tests for the Hamiltonian builder and its fallback state machine.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use num_complex::Complex64;

use hamgen_chem::builder::{FallbackReason, HamiltonianBuilder, HamiltonianSource};
use hamgen_chem::driver::ElectronicStructureDriver;
use hamgen_chem::error::{ChemError, ChemResult};
use hamgen_chem::fallback::{NH3_STO3G_ACTIVE, table};
use hamgen_chem::fermionic::FermionicOp;
use hamgen_chem::molecule::{Molecule, MoleculeSpec};
use hamgen_chem::problem::{DriverOutput, ElectronicIntegrals, OpsEntry, SecondQuantizedOps};

// ---------------------------------------------------------------------------
// Scripted driver
// ---------------------------------------------------------------------------

type Script = fn() -> ChemResult<DriverOutput>;

struct ScriptedDriver {
    script: Script,
    calls: Rc<RefCell<Vec<MoleculeSpec>>>,
}

impl ScriptedDriver {
    fn boxed(script: Script) -> (Box<dyn ElectronicStructureDriver>, Rc<RefCell<Vec<MoleculeSpec>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let driver = ScriptedDriver {
            script,
            calls: Rc::clone(&calls),
        };
        (Box::new(driver), calls)
    }
}

impl ElectronicStructureDriver for ScriptedDriver {
    fn name(&self) -> &str {
        "scripted"
    }

    fn run(&self, spec: &MoleculeSpec) -> ChemResult<DriverOutput> {
        self.calls.borrow_mut().push(spec.clone());
        (self.script)()
    }
}

fn one_orbital_integrals() -> ChemResult<DriverOutput> {
    Ok(DriverOutput::Integrals(ElectronicIntegrals {
        num_spatial_orbitals: 1,
        nuclear_repulsion_energy: 0.7,
        one_body: vec![vec![-1.25]],
        two_body: vec![0.68],
    }))
}

fn sequence_problem() -> ChemResult<DriverOutput> {
    let op = FermionicOp::from_labels(2, [("+_0 -_1", 0.5), ("+_1 -_0", 0.5)])?;
    Ok(DriverOutput::Problem {
        second_q_ops: SecondQuantizedOps::Sequence {
            elements: vec![
                OpsEntry::Opaque {
                    type_name: "tuple".into(),
                },
                OpsEntry::Fermionic { operator: op },
            ],
        },
    })
}

fn missing_operator() -> ChemResult<DriverOutput> {
    Ok(DriverOutput::Problem {
        second_q_ops: SecondQuantizedOps::Keyed {
            operators: BTreeMap::new(),
        },
    })
}

fn crashing_driver() -> ChemResult<DriverOutput> {
    Err(ChemError::DriverFailed {
        program: "python3".into(),
        status: "exit status: 1".into(),
        stderr: "ModuleNotFoundError: No module named 'pyscf'".into(),
    })
}

fn coeff(op: &hamgen_chem::SparsePauliOp, label: &str) -> Complex64 {
    op.iter()
        .find(|(p, _)| p.to_label() == label)
        .map(|(_, c)| c)
        .unwrap_or_else(|| panic!("no term {label}"))
}

// ---------------------------------------------------------------------------
// Ab-initio path
// ---------------------------------------------------------------------------

#[test]
fn ab_initio_from_integrals() {
    let (driver, calls) = ScriptedDriver::boxed(one_orbital_integrals);
    let built = HamiltonianBuilder::new(Some(driver)).build("H2").unwrap();

    assert!(matches!(built.source, HamiltonianSource::AbInitio));
    assert_eq!(calls.borrow().len(), 1);

    // H = h(n0 + n1) + v n0 n1 with h = -1.25, v = 0.68
    let op = &built.operator;
    assert_eq!(op.num_qubits(), 2);
    assert_eq!(op.num_terms(), 4);
    assert!((coeff(op, "II") - Complex64::new(-1.08, 0.0)).norm() < 1e-12);
    assert!((coeff(op, "IZ") - Complex64::new(0.455, 0.0)).norm() < 1e-12);
    assert!((coeff(op, "ZI") - Complex64::new(0.455, 0.0)).norm() < 1e-12);
    assert!((coeff(op, "ZZ") - Complex64::new(0.17, 0.0)).norm() < 1e-12);
}

#[test]
fn ab_initio_from_sequence_shape() {
    let (driver, _) = ScriptedDriver::boxed(sequence_problem);
    let built = HamiltonianBuilder::new(Some(driver)).build("nh3").unwrap();

    assert!(!built.source.is_fallback());
    assert_eq!(built.molecule, Molecule::NH3);
    let mut labels = built.operator.labels();
    labels.sort();
    assert_eq!(labels, vec!["XX", "YY"]);
    assert!((coeff(&built.operator, "XX") - Complex64::new(0.25, 0.0)).norm() < 1e-12);
}

#[test]
fn h2_bond_length_reaches_driver() {
    let (driver, calls) = ScriptedDriver::boxed(one_orbital_integrals);
    HamiltonianBuilder::new(Some(driver))
        .with_bond_length(0.9)
        .build("H2")
        .unwrap();

    let calls = calls.borrow();
    assert_eq!(calls[0].molecule, Molecule::H2);
    assert_eq!(calls[0].geometry(), "H 0 0 0; H 0 0 0.9");
}

// ---------------------------------------------------------------------------
// Fallback transitions
// ---------------------------------------------------------------------------

#[test]
fn force_flag_skips_driver() {
    let (driver, calls) = ScriptedDriver::boxed(one_orbital_integrals);
    let built = HamiltonianBuilder::new(Some(driver))
        .force_precomputed(true)
        .build("NH3")
        .unwrap();

    assert!(calls.borrow().is_empty());
    assert!(matches!(
        built.source,
        HamiltonianSource::Fallback(FallbackReason::Forced)
    ));
    assert_eq!(built.operator.num_terms(), NH3_STO3G_ACTIVE.len());
}

#[test]
fn driver_failure_falls_back() {
    let (driver, calls) = ScriptedDriver::boxed(crashing_driver);
    let built = HamiltonianBuilder::new(Some(driver)).build("NH3").unwrap();

    assert_eq!(calls.borrow().len(), 1);
    match built.source {
        HamiltonianSource::Fallback(FallbackReason::AbInitioFailed(ChemError::DriverFailed {
            stderr,
            ..
        })) => assert!(stderr.contains("pyscf")),
        other => panic!("unexpected source: {other:?}"),
    }
    assert_eq!(built.operator.num_qubits(), 6);
}

#[test]
fn extraction_failure_falls_back() {
    let (driver, _) = ScriptedDriver::boxed(missing_operator);
    let built = HamiltonianBuilder::new(Some(driver)).build("H2").unwrap();

    assert!(matches!(
        built.source,
        HamiltonianSource::Fallback(FallbackReason::AbInitioFailed(
            ChemError::OperatorNotFound { .. }
        ))
    ));
    assert_eq!(built.operator.num_terms(), table(Molecule::H2).len());
}

#[test]
fn fallback_reason_names_the_error() {
    let (driver, _) = ScriptedDriver::boxed(crashing_driver);
    let built = HamiltonianBuilder::new(Some(driver)).build("H2").unwrap();
    let HamiltonianSource::Fallback(reason) = built.source else {
        panic!("expected fallback");
    };
    let message = reason.to_string();
    assert!(message.starts_with("ab-initio generation failed"));
    assert!(message.contains("exit status: 1"));
}

#[test]
fn unsupported_molecule_never_runs_driver() {
    let (driver, calls) = ScriptedDriver::boxed(one_orbital_integrals);
    let err = HamiltonianBuilder::new(Some(driver)).build("XX").unwrap_err();

    assert!(matches!(err, ChemError::UnsupportedMolecule(ref id) if id == "XX"));
    assert!(calls.borrow().is_empty());
}

#[test]
fn unsupported_molecule_even_when_forced() {
    let err = hamgen_chem::build_molecule_qubit_hamiltonian("XX", true).unwrap_err();
    assert!(matches!(err, ChemError::UnsupportedMolecule(_)));
}

// ---------------------------------------------------------------------------
// Fallback operator properties
// ---------------------------------------------------------------------------

#[test]
fn nh3_forced_scenario() {
    let op = hamgen_chem::build_molecule_qubit_hamiltonian("NH3", true).unwrap();
    assert_eq!(op.num_terms(), 15);
    assert_eq!(op.labels()[0], "IIIIII");
    assert_eq!(op.coeffs()[0], Complex64::new(-3.124512345678, 0.0));
}

#[test]
fn forced_coefficients_match_table_exactly() {
    for molecule in Molecule::ALL {
        let op = hamgen_chem::build_molecule_qubit_hamiltonian(molecule.name(), true).unwrap();
        let expected: Vec<Complex64> = table(molecule)
            .iter()
            .map(|(_, c)| Complex64::new(*c, 0.0))
            .collect();
        assert_eq!(op.coeffs(), expected.as_slice());
    }
}

#[test]
fn label_width_matches_fallback_encoding() {
    for molecule in Molecule::ALL {
        let op = hamgen_chem::build_molecule_qubit_hamiltonian(molecule.name(), true).unwrap();
        let width = molecule.fallback_qubits() as usize;
        assert!(op.labels().iter().all(|l| l.len() == width));
    }
}

#[test]
fn building_twice_is_idempotent() {
    let builder = HamiltonianBuilder::precomputed_only();
    let first = builder.build("h2").unwrap();
    let second = builder.build("H2").unwrap();
    assert_eq!(first.operator, second.operator);

    let (driver, _) = ScriptedDriver::boxed(one_orbital_integrals);
    let builder = HamiltonianBuilder::new(Some(driver));
    assert_eq!(
        builder.build("H2").unwrap().operator,
        builder.build("H2").unwrap().operator
    );
}
