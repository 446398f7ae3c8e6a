//! The resolution asymmetric tautology check

use crate::{
    formula::{Clause, Formula},
    literal::Literal,
    propagate::propagate,
};

/// Check whether `clause` is a resolution asymmetric tautology on `pivot`
/// with respect to `formula`.
///
/// For every clause of the formula containing the negated pivot, resolving
/// it with `clause` on the pivot and assuming the negation of the resolvent
/// must let unit propagation derive a conflict. Vacuously true when no
/// clause contains the negated pivot.
///
/// # Panics
/// `pivot` must be a member of `clause`; violating this is a caller bug.
pub fn has_rat(formula: &Formula, clause: &Clause, pivot: Literal) -> bool {
    rat_counterexample(formula, clause, pivot).is_none()
}

/// Like [has_rat], but return the first resolution candidate whose trial
/// fails to produce a conflict. Used to report rejections.
pub fn rat_counterexample(formula: &Formula, clause: &Clause, pivot: Literal) -> Option<Clause> {
    requires!(clause.contains(pivot));
    formula
        .clauses()
        .iter()
        .filter(|candidate| candidate.contains(-pivot))
        .find(|candidate| !resolvent_conflicts(formula, clause, candidate, pivot))
        .cloned()
}

/// Run one trial: negate the resolvent of `clause` and `candidate` on
/// `pivot` into unit clauses and propagate them together with the formula.
///
/// Each trial reads the same snapshot of the formula; trials do not see
/// each other's assumptions.
pub(crate) fn resolvent_conflicts(
    formula: &Formula,
    clause: &Clause,
    candidate: &Clause,
    pivot: Literal,
) -> bool {
    let mut resolvent = clause.clone();
    for &literal in candidate.literals() {
        if literal != -pivot && !resolvent.contains(literal) {
            resolvent.push(literal);
        }
    }
    invariant!(resolvent.contains(pivot));
    let mut trial = formula.clone();
    for unit in resolvent.negated_units() {
        trial.add(unit);
    }
    propagate(trial).has_empty_clause()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::Literal;

    #[test]
    fn vacuously_true_without_negated_pivot() {
        let formula = formula![[1, 2], [2, 3]];
        assert!(has_rat(&formula, &clause!(1, 4), Literal::new(4)));
    }

    #[test]
    fn unit_against_its_negation_is_not_rat() {
        let formula = formula![[1]];
        assert!(!has_rat(&formula, &clause!(-1), Literal::new(-1)));
        assert_eq!(
            rat_counterexample(&formula, &clause!(-1), Literal::new(-1)),
            Some(clause!(1))
        );
    }

    #[test]
    fn unit_with_three_resolution_candidates_is_rat() {
        // Every resolvent of !x1 with the three clauses containing x1
        // propagates to a conflict.
        let formula = formula![
            [1, 2, -3],
            [-1, -2, 3],
            [2, 3, -4],
            [-2, -3, 4],
            [1, 3, 4],
            [-1, -3, -4],
            [-1, 2, 4],
            [1, -2, -4],
        ];
        assert!(has_rat(&formula, &clause!(-1), Literal::new(-1)));
    }

    #[test]
    #[should_panic]
    fn pivot_must_be_in_the_clause() {
        let formula = formula![[1, 2]];
        has_rat(&formula, &clause!(1), Literal::new(2));
    }
}
