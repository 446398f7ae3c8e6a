//! Unit propagation to a fixpoint

use crate::{
    formula::{Clause, Formula},
    literal::Literal,
};

/// Reduce a formula to its fixpoint under unit propagation.
///
/// Takes ownership of its argument; callers clone when they need to keep
/// the original. Each pass collects the current unit clauses, drops clauses
/// satisfied by a unit literal and strips falsified literals from the rest.
/// A clause stripped down to zero literals stays in the formula as the
/// derived conflict. The result is deduplicated because two clauses can
/// shrink into the same residual.
///
/// Every pass that changes anything strictly decreases the clause count or
/// the total literal count, so the loop terminates.
pub fn propagate(formula: Formula) -> Formula {
    let maxvar = formula.maxvar();
    let mut clauses = formula.into_clauses();
    loop {
        let units: Vec<Literal> = clauses.iter().filter_map(Clause::unit).collect();
        let mut changed = false;
        let mut next = Vec::with_capacity(clauses.len());
        for clause in clauses {
            match reduce_clause(clause, &units) {
                Some((clause, shrunk)) => {
                    changed |= shrunk;
                    next.push(clause);
                }
                None => changed = true,
            }
        }
        clauses = next;
        if !changed {
            break;
        }
    }
    let mut result = Formula::from_parts(clauses, maxvar);
    result.dedupe();
    result
}

/// Reduce one clause under the unit literals of the current pass.
///
/// Returns `None` if the clause contains a unit literal and more than one
/// literal overall (it is satisfied and adds no constraint). Otherwise
/// all negations of unit literals are stripped; the flag records whether
/// any literal was removed. A unit clause is never dropped by its own
/// literal, so the forcing units survive into the result.
fn reduce_clause(mut clause: Clause, units: &[Literal]) -> Option<(Clause, bool)> {
    let mut shrunk = false;
    for &unit in units {
        if clause.len() > 1 && clause.contains(unit) {
            return None;
        }
        while clause.remove_one(-unit) {
            shrunk = true;
        }
    }
    Some((clause, shrunk))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_literal_satisfies_clause() {
        assert_eq!(propagate(formula![[1, 2], [1]]), formula![[1]]);
    }

    #[test]
    fn falsified_literal_is_stripped() {
        assert_eq!(propagate(formula![[-1, 2], [1]]), formula![[2], [1]]);
    }

    #[test]
    fn chained_units_derive_a_conflict() {
        // {x, !x v !y, x v !z, y v z, y v !z} propagates to {x, !y, conflict}.
        assert_eq!(
            propagate(formula![[1], [-1, -2], [1, -3], [2, 3], [2, -3]]),
            formula![[1], [-2], []]
        );
    }

    #[test]
    fn propagation_is_idempotent() {
        let fixpoint = propagate(formula![[1], [-1, -2], [1, -3], [2, 3], [2, -3]]);
        assert_eq!(propagate(fixpoint.clone()), fixpoint);
        let fixpoint = propagate(formula![[-1, 2], [1]]);
        assert_eq!(propagate(fixpoint.clone()), fixpoint);
    }

    #[test]
    fn conflicts_are_preserved() {
        let formula = formula![[], [1, 2], [-1]];
        assert!(formula.has_empty_clause());
        assert!(propagate(formula).has_empty_clause());
    }

    #[test]
    fn fixpoint_keeps_maxvar() {
        let result = propagate(formula![[1, 2], [1]]);
        assert_eq!(result.maxvar().as_index(), 2);
    }
}
