//! Proof replay

use crate::{
    formula::{Clause, Formula, Proof},
    propagate::propagate,
    rat::rat_counterexample,
    sick::{Sick, Witness, PROOF_FORMAT},
};

/// The result of replaying a proof.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Verdict {
    /// The proof derives the empty clause.
    Verified,
    /// The proof ran out of steps without claiming a conflict.
    NoEmptyClause,
    /// The proof claims a conflict that unit propagation does not confirm.
    IncorrectEmptyClause,
    /// Some proof clause is not a RAT inference on its first literal.
    IncorrectLemma,
}

/// A verdict plus diagnostics for rejected proofs.
#[derive(Debug)]
pub struct Verification {
    pub verdict: Verdict,
    /// One-based index of the rejected proof step, if any.
    pub proof_step: Option<usize>,
    /// Incorrectness certificate for rejected steps.
    pub rejection: Option<Sick>,
}

impl Verification {
    pub fn accepted(&self) -> bool {
        self.verdict == Verdict::Verified
    }
    fn passed(verdict: Verdict) -> Verification {
        Verification {
            verdict,
            proof_step: None,
            rejection: None,
        }
    }
    fn rejected_lemma(step: usize, lemma: &Clause, candidate: Option<Clause>) -> Verification {
        Verification {
            verdict: Verdict::IncorrectLemma,
            proof_step: Some(step),
            rejection: Some(Sick {
                proof_format: PROOF_FORMAT.to_string(),
                proof_step: Some(step),
                witness: candidate.map(|failing_clause| Witness {
                    failing_clause,
                    pivot: lemma.first(),
                }),
            }),
        }
    }
    fn rejected_conflict(step: usize) -> Verification {
        Verification {
            verdict: Verdict::IncorrectEmptyClause,
            proof_step: Some(step),
            rejection: Some(Sick {
                proof_format: PROOF_FORMAT.to_string(),
                proof_step: Some(step),
                witness: None,
            }),
        }
    }
}

/// Replay `proof` against a private copy of `formula`.
///
/// Each non-empty proof clause must be a RAT inference on its first
/// literal; accepted clauses extend the working formula, so later steps may
/// depend on earlier ones. An empty clause claims completion and ends the
/// replay; whatever follows it is never examined. The proof is accepted iff
/// no step was rejected and unit propagation of the final working formula
/// derives the empty clause.
pub fn check_proof(formula: &Formula, proof: &Proof, verbosity: u32) -> Verification {
    let mut working = formula.clone();
    let mut claimed_step = None;
    for (index, lemma) in proof.steps().iter().enumerate() {
        let pivot = match lemma.first() {
            None => {
                claimed_step = Some(index + 1);
                break;
            }
            Some(pivot) => pivot,
        };
        if pivot.is_zero() {
            // Malformed proof data, not a caller bug.
            return Verification::rejected_lemma(index + 1, lemma, None);
        }
        match rat_counterexample(&working, lemma, pivot) {
            None => {
                _log!(verbosity, 1, "c accepted lemma {}", lemma);
                working.add(lemma.clone());
            }
            Some(candidate) => {
                _log!(verbosity, 1, "c rejected lemma {}", lemma);
                return Verification::rejected_lemma(index + 1, lemma, Some(candidate));
            }
        }
    }
    if propagate(working).has_empty_clause() {
        Verification::passed(Verdict::Verified)
    } else {
        match claimed_step {
            Some(step) => Verification::rejected_conflict(step),
            None => Verification::passed(Verdict::NoEmptyClause),
        }
    }
}

/// Check whether `proof` establishes that `formula` is unsatisfiable.
pub fn verify(formula: &Formula, proof: &Proof) -> bool {
    check_proof(formula, proof, 0).accepted()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::sum_triples;

    /// The 4-variable example formula whose refutation needs both RAT steps.
    fn example_formula() -> Formula {
        formula![
            [1, 2, -3],
            [-1, -2, 3],
            [2, 3, -4],
            [-2, -3, 4],
            [1, 3, 4],
            [-1, -3, -4],
            [-1, 2, 4],
            [1, -2, -4],
        ]
    }

    fn example_refutation() -> Proof {
        proof![[-1], [2], []]
    }

    /// Refutes the sum-triples instances for n >= 9.
    fn sum_triples_refutation() -> Proof {
        proof![[1, 4], [1], [4], []]
    }

    #[test]
    fn accepts_the_example_refutation() {
        assert!(verify(&example_formula(), &example_refutation()));
    }

    #[test]
    fn rejects_an_empty_proof() {
        let result = check_proof(&example_formula(), &Proof::new(), 0);
        assert_eq!(result.verdict, Verdict::NoEmptyClause);
        assert!(result.rejection.is_none());
    }

    #[test]
    fn rejects_a_truncated_proof() {
        assert!(!verify(&example_formula(), &proof![[-1]]));
    }

    #[test]
    fn steps_after_the_empty_clause_are_ignored() {
        assert!(verify(
            &example_formula(),
            &proof![[-1], [2], [], [7, 0, -7]]
        ));
    }

    #[test]
    fn rejects_a_refutation_of_a_satisfiable_instance() {
        let result = check_proof(&sum_triples(8), &sum_triples_refutation(), 0);
        assert_eq!(result.verdict, Verdict::IncorrectLemma);
        assert_eq!(result.proof_step, Some(1));
        assert!(result.rejection.is_some());
    }

    #[test]
    fn accepts_the_sum_triples_refutations() {
        assert!(verify(&sum_triples(9), &sum_triples_refutation()));
        assert!(verify(&sum_triples(10), &sum_triples_refutation()));
    }

    #[test]
    fn a_proof_for_another_formula_is_rejected() {
        assert!(!verify(&sum_triples(9), &example_refutation()));
    }

    #[test]
    fn a_zero_pivot_is_rejected_not_fatal() {
        let result = check_proof(&example_formula(), &proof![[0, 1]], 0);
        assert_eq!(result.verdict, Verdict::IncorrectLemma);
    }
}
