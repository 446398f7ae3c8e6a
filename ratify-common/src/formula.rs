//! Clause, formula and proof representations
//!
//! Clauses and formulas are kept in insertion order because proofs care
//! about positions (the first literal of a proof clause is its pivot), but
//! they compare as sets: clause equality ignores literal order and
//! duplicates, and formulas collapse duplicate clauses on demand.

use crate::literal::{Literal, Variable};
use serde_derive::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fmt,
    fmt::Display,
    hash::{Hash, Hasher},
};

/// A disjunction of literals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(literals: Vec<Literal>) -> Clause {
        Clause { literals }
    }
    /// The empty clause, representing a derived contradiction.
    pub fn empty() -> Clause {
        Clause::default()
    }
    pub fn len(&self) -> usize {
        self.literals.len()
    }
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }
    /// The first literal as listed; doubles as the pivot of proof clauses.
    pub fn first(&self) -> Option<Literal> {
        self.literals.first().cloned()
    }
    /// The forced literal if this is a unit clause.
    pub fn unit(&self) -> Option<Literal> {
        if self.literals.len() == 1 {
            Some(self.literals[0])
        } else {
            None
        }
    }
    pub fn contains(&self, literal: Literal) -> bool {
        self.literals.contains(&literal)
    }
    pub fn push(&mut self, literal: Literal) {
        self.literals.push(literal);
    }
    /// Remove the first occurrence of `literal`, returning true if it was present.
    pub fn remove_one(&mut self, literal: Literal) -> bool {
        match self.literals.iter().position(|&other| other == literal) {
            Some(offset) => {
                self.literals.remove(offset);
                true
            }
            None => false,
        }
    }
    /// The negation of this clause as one unit clause per literal.
    ///
    /// Adding these units to a formula asserts that every literal of the
    /// clause is false.
    pub fn negated_units(&self) -> impl Iterator<Item = Clause> + '_ {
        self.literals
            .iter()
            .map(|&literal| Clause::new(vec![-literal]))
    }
    /// The literals sorted with duplicates removed; the set underlying
    /// equality and hashing.
    fn normalized(&self) -> Vec<Literal> {
        let mut literals = self.literals.clone();
        literals.sort();
        literals.dedup();
        literals
    }
}

impl PartialEq for Clause {
    fn eq(&self, other: &Clause) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Clause {}

impl Hash for Clause {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.normalized().hash(hasher);
    }
}

/// Write the literals in DIMACS convention, with a terminating 0.
impl Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &literal in &self.literals {
            write!(f, "{} ", literal)?;
        }
        write!(f, "0")
    }
}

/// A conjunction of clauses.
///
/// Equality compares the clause sequence only; the variable bound is a
/// bookkeeping value that grows monotonically and never shrinks when
/// clauses are simplified away.
#[derive(Debug, Clone, Default)]
pub struct Formula {
    clauses: Vec<Clause>,
    maxvar: Variable,
}

impl Formula {
    pub fn new() -> Formula {
        Formula::default()
    }
    pub fn from_clauses(clauses: Vec<Clause>) -> Formula {
        let mut formula = Formula::new();
        for clause in clauses {
            formula.add(clause);
        }
        formula
    }
    pub(crate) fn from_parts(clauses: Vec<Clause>, maxvar: Variable) -> Formula {
        Formula { clauses, maxvar }
    }
    pub fn len(&self) -> usize {
        self.clauses.len()
    }
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }
    pub(crate) fn into_clauses(self) -> Vec<Clause> {
        self.clauses
    }
    /// The largest variable seen in any clause or declared by a header.
    pub fn maxvar(&self) -> Variable {
        self.maxvar
    }
    /// Raise the variable bound, typically from a DIMACS header.
    pub fn ensure_maxvar(&mut self, variable: Variable) {
        if variable > self.maxvar {
            self.maxvar = variable;
        }
    }
    /// Append a clause, keeping the variable bound up to date.
    pub fn add(&mut self, clause: Clause) {
        for &literal in clause.literals() {
            self.ensure_maxvar(literal.variable());
        }
        self.clauses.push(clause);
    }
    /// True if a conflict has been derived.
    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }
    /// Drop clauses equal (as literal sets) to an earlier one, preserving
    /// first-occurrence order.
    pub fn dedupe(&mut self) {
        let mut seen = HashSet::with_capacity(self.clauses.len());
        self.clauses.retain(|clause| seen.insert(clause.normalized()));
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Formula) -> bool {
        self.clauses == other.clauses
    }
}

impl Eq for Formula {}

/// Write the formula in DIMACS format, one clause per line.
impl Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "p cnf {} {}", self.maxvar, self.clauses.len())?;
        for clause in &self.clauses {
            writeln!(f, "{}", clause)?;
        }
        Ok(())
    }
}

/// An ordered sequence of clause introductions claimed by a prover.
///
/// The empty clause claims that a contradiction has been derived; a proof
/// without one is incomplete and will not verify.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Proof {
    steps: Vec<Clause>,
}

impl Proof {
    pub fn new() -> Proof {
        Proof::default()
    }
    pub fn from_clauses(steps: Vec<Clause>) -> Proof {
        Proof { steps }
    }
    pub fn steps(&self) -> &[Clause] {
        &self.steps
    }
    pub fn len(&self) -> usize {
        self.steps.len()
    }
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
    pub fn push(&mut self, clause: Clause) {
        self.steps.push(clause);
    }
}

/// Construct a clause from signed integer literals.
#[macro_export]
macro_rules! clause {
    ($($literal:expr),* $(,)?) => (
        $crate::formula::Clause::new(vec![$($crate::literal::Literal::new($literal)),*])
    );
}

/// Construct a formula from clauses of signed integer literals.
#[macro_export]
macro_rules! formula {
    ($([$($literal:expr),* $(,)?]),* $(,)?) => (
        $crate::formula::Formula::from_clauses(vec![$($crate::clause!($($literal),*)),*])
    );
}

/// Construct a proof from clauses of signed integer literals.
#[macro_export]
macro_rules! proof {
    ($([$($literal:expr),* $(,)?]),* $(,)?) => (
        $crate::formula::Proof::from_clauses(vec![$($crate::clause!($($literal),*)),*])
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clause_equality_is_set_equality() {
        assert_eq!(clause!(1, 2, 3), clause!(3, 1, 2));
        assert_eq!(clause!(1, 1, 2), clause!(2, 1));
        assert_ne!(clause!(1, 2), clause!(1, -2));
        assert_eq!(clause!(), Clause::empty());
    }

    #[test]
    fn dedupe_keeps_first_occurrence_order() {
        let mut formula = formula![[1, 2], [2, 1], [-1], [1, 2, 3], [-1]];
        formula.dedupe();
        assert_eq!(formula, formula![[1, 2], [-1], [1, 2, 3]]);
    }

    #[test]
    fn negated_units_falsify_every_literal() {
        let negation: Vec<Clause> = clause!(1, -2, 3).negated_units().collect();
        assert_eq!(negation, vec![clause!(-1), clause!(2), clause!(-3)]);
        assert_eq!(Clause::empty().negated_units().count(), 0);
    }

    #[test]
    fn maxvar_tracks_added_clauses() {
        let mut formula = Formula::new();
        assert_eq!(formula.maxvar(), Variable::new(0));
        formula.add(clause!(-4, 2));
        assert_eq!(formula.maxvar(), Variable::new(4));
        formula.add(clause!(1));
        assert_eq!(formula.maxvar(), Variable::new(4));
    }
}
