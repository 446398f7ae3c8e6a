//! Exhaustive satisfiability search
//!
//! A plain enumeration of all assignments, used to cross-check
//! verification results on small instances. Usable only for a handful of
//! variables; the verifier never depends on it.

use crate::{formula::Formula, literal::Literal};

/// Search all assignments over variables 1 to `nvars` for a model.
///
/// Returns a satisfying assignment as one literal per variable, or `None`
/// if the formula has no model over these variables.
pub fn brute_force_solve(nvars: u32, formula: &Formula) -> Option<Vec<Literal>> {
    requires!(nvars < 64);
    (0..1u64 << nvars)
        .map(|bits| decode_assignment(nvars, bits))
        .find(|assignment| satisfies(formula, assignment))
}

/// The `bits`-th assignment: bit i decides the polarity of variable i + 1.
fn decode_assignment(nvars: u32, bits: u64) -> Vec<Literal> {
    (1..=nvars as i32)
        .map(|variable| {
            if bits & (1 << (variable - 1)) != 0 {
                Literal::new(variable)
            } else {
                Literal::new(-variable)
            }
        })
        .collect()
}

/// True if every clause contains a literal made true by the assignment.
fn satisfies(formula: &Formula, assignment: &[Literal]) -> bool {
    formula
        .clauses()
        .iter()
        .all(|clause| clause.literals().iter().any(|literal| assignment.contains(literal)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::sum_triples;

    #[test]
    fn finds_a_model_when_there_is_one() {
        let model = brute_force_solve(2, &formula![[1, 2], [-1]]).unwrap();
        assert_eq!(model, vec![Literal::new(-1), Literal::new(2)]);
    }

    #[test]
    fn detects_unsatisfiability() {
        assert_eq!(brute_force_solve(1, &formula![[1], [-1]]), None);
        assert_eq!(brute_force_solve(0, &formula![[]]), None);
    }

    #[test]
    fn an_empty_formula_is_satisfied_by_anything() {
        assert!(brute_force_solve(0, &Formula::new()).is_some());
    }

    #[test]
    fn cross_checks_the_sum_triples_boundary() {
        // n = 8 is the largest satisfiable instance of this family.
        assert!(brute_force_solve(8, &sum_triples(8)).is_some());
        assert_eq!(brute_force_solve(9, &sum_triples(9)), None);
    }
}
