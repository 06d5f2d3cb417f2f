//! Second-quantized fermionic operators.
//!
//! A [`FermionicOp`] is a sum of products of ladder operators acting on a
//! register of spin orbitals. Terms use the label syntax `"+_0 -_1"`, where
//! `+_j` creates and `-_j` annihilates a fermion in mode `j`. The empty label
//! is the identity.

use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{ChemError, ChemResult};

/// Creation or annihilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LadderAction {
    /// a†
    Create,
    /// a
    Annihilate,
}

/// A single ladder operator on one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LadderOp {
    pub action: LadderAction,
    pub mode: u32,
}

impl LadderOp {
    pub fn create(mode: u32) -> Self {
        Self {
            action: LadderAction::Create,
            mode,
        }
    }

    pub fn annihilate(mode: u32) -> Self {
        Self {
            action: LadderAction::Annihilate,
            mode,
        }
    }
}

impl fmt::Display for LadderOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.action {
            LadderAction::Create => '+',
            LadderAction::Annihilate => '-',
        };
        write!(f, "{sign}_{}", self.mode)
    }
}

/// One weighted product of ladder operators, applied right to left.
#[derive(Debug, Clone, PartialEq)]
pub struct FermionicTerm {
    pub ops: Vec<LadderOp>,
    pub coeff: Complex64,
}

impl FermionicTerm {
    /// Render the ladder operators as a label.
    pub fn label(&self) -> String {
        self.ops
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Parse a label such as `"+_0 -_3"`.
pub fn parse_label(label: &str) -> ChemResult<Vec<LadderOp>> {
    label
        .split_whitespace()
        .map(|token| {
            let invalid = || ChemError::InvalidFermionicLabel(label.to_string());
            let (action, mode) = token.split_once('_').ok_or_else(invalid)?;
            let action = match action {
                "+" => LadderAction::Create,
                "-" => LadderAction::Annihilate,
                _ => return Err(invalid()),
            };
            let mode = mode.parse().map_err(|_| invalid())?;
            Ok(LadderOp { action, mode })
        })
        .collect()
}

/// A fermionic operator on a fixed register of spin orbitals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FermionicOpRepr", into = "FermionicOpRepr")]
pub struct FermionicOp {
    num_spin_orbitals: u32,
    terms: Vec<FermionicTerm>,
}

impl FermionicOp {
    /// An operator with no terms.
    pub fn zero(num_spin_orbitals: u32) -> Self {
        Self {
            num_spin_orbitals,
            terms: Vec::new(),
        }
    }

    /// Build from `(label, coeff)` pairs, validating every mode index.
    pub fn from_labels<L, C>(
        num_spin_orbitals: u32,
        terms: impl IntoIterator<Item = (L, C)>,
    ) -> ChemResult<Self>
    where
        L: AsRef<str>,
        C: Into<Complex64>,
    {
        let mut op = Self::zero(num_spin_orbitals);
        for (label, coeff) in terms {
            op.add_term(parse_label(label.as_ref())?, coeff.into())?;
        }
        Ok(op)
    }

    /// Append a term.
    pub fn add_term(&mut self, ops: Vec<LadderOp>, coeff: Complex64) -> ChemResult<()> {
        if let Some(op) = ops.iter().find(|op| op.mode >= self.num_spin_orbitals) {
            return Err(ChemError::ModeOutOfRange {
                mode: op.mode,
                num_spin_orbitals: self.num_spin_orbitals,
            });
        }
        self.terms.push(FermionicTerm { ops, coeff });
        Ok(())
    }

    pub fn num_spin_orbitals(&self) -> u32 {
        self.num_spin_orbitals
    }

    pub fn terms(&self) -> &[FermionicTerm] {
        &self.terms
    }

    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }
}

/// Wire form: `{"num_spin_orbitals": n, "terms": [["+_0 -_1", re, im], ...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FermionicOpRepr {
    num_spin_orbitals: u32,
    terms: Vec<(String, f64, f64)>,
}

impl TryFrom<FermionicOpRepr> for FermionicOp {
    type Error = ChemError;

    fn try_from(repr: FermionicOpRepr) -> ChemResult<Self> {
        Self::from_labels(
            repr.num_spin_orbitals,
            repr.terms
                .into_iter()
                .map(|(label, re, im)| (label, Complex64::new(re, im))),
        )
    }
}

impl From<FermionicOp> for FermionicOpRepr {
    fn from(op: FermionicOp) -> Self {
        Self {
            num_spin_orbitals: op.num_spin_orbitals,
            terms: op
                .terms
                .iter()
                .map(|t| (t.label(), t.coeff.re, t.coeff.im))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label() {
        let ops = parse_label("+_0 -_12").unwrap();
        assert_eq!(ops, vec![LadderOp::create(0), LadderOp::annihilate(12)]);
        assert!(parse_label("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_label("+0").is_err());
        assert!(parse_label("*_1").is_err());
        assert!(parse_label("+_x").is_err());
    }

    #[test]
    fn test_mode_out_of_range() {
        let err = FermionicOp::from_labels(2, [("+_2 -_0", 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            ChemError::ModeOutOfRange {
                mode: 2,
                num_spin_orbitals: 2
            }
        ));
    }

    #[test]
    fn test_wire_form() {
        let op = FermionicOp::from_labels(4, [("+_0 -_1", 0.5), ("", -1.0)]).unwrap();
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(json["num_spin_orbitals"], 4);
        assert_eq!(json["terms"][0][0], "+_0 -_1");
        assert_eq!(json["terms"][1][0], "");

        let back: FermionicOp = serde_json::from_value(json).unwrap();
        assert_eq!(back, op);
    }
}
