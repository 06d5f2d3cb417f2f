//! Compact, deterministic text rendering of qubit operators.

use crate::operator::SparsePauliOp;

/// Coefficients below this magnitude are hidden by default.
pub const DEFAULT_CUTOFF: f64 = 1e-10;

/// Render `op` as one `coeff * LABEL` line per term.
///
/// Terms with `|c| < cutoff` are omitted. Real coefficients print as
/// `+0.123456789012 * XIZY`; coefficients with a non-negligible imaginary
/// part print as `(+0.1…+0.2…j) * XIZY`. Lines are sorted lexicographically
/// and joined with `\n` (no trailing newline).
pub fn compact_string(op: &SparsePauliOp, cutoff: f64) -> String {
    let mut lines: Vec<String> = op
        .iter()
        .filter(|(_, c)| c.norm() >= cutoff)
        .map(|(pauli, c)| {
            if c.im.abs() < cutoff {
                format!("{:+.12} * {pauli}", c.re)
            } else {
                format!("({:+.12}{:+.12}j) * {pauli}", c.re, c.im)
            }
        })
        .collect();
    lines.sort();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;

    use super::*;

    #[test]
    fn test_real_and_complex_terms() {
        let op = SparsePauliOp::from_list([
            ("ZI", Complex64::new(-0.5, 0.0)),
            ("XY", Complex64::new(0.25, -0.125)),
            ("II", Complex64::new(1.0, 1e-14)),
        ])
        .unwrap();
        assert_eq!(
            compact_string(&op, DEFAULT_CUTOFF),
            "(+0.250000000000-0.125000000000j) * XY\n\
             +1.000000000000 * II\n\
             -0.500000000000 * ZI"
        );
    }

    #[test]
    fn test_cutoff_drops_small_terms() {
        let op = SparsePauliOp::from_list([("X", 1e-11), ("Z", 0.5)]).unwrap();
        assert_eq!(compact_string(&op, DEFAULT_CUTOFF), "+0.500000000000 * Z");
        assert_eq!(compact_string(&op, 1.0), "");
    }

    #[test]
    fn test_duplicates_are_separate_lines() {
        let op = SparsePauliOp::from_list([("Z", 0.5), ("Z", 0.5)]).unwrap();
        assert_eq!(
            compact_string(&op, DEFAULT_CUTOFF),
            "+0.500000000000 * Z\n+0.500000000000 * Z"
        );
    }
}
