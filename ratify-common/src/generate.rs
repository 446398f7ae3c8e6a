//! Combinatorial test instances

use crate::{
    formula::{Clause, Formula},
    literal::Literal,
};

/// Encode the Boolean sum triples instance over the numbers 1 to `n`.
///
/// Every triple a + b = c with a < b and c <= n contributes two clauses:
/// one of the three numbers must be set, and one must be clear. The
/// instances are satisfiable up to n = 8 and unsatisfiable from n = 9 on.
pub fn sum_triples(n: i32) -> Formula {
    requires!(n >= 1);
    let mut clauses = Vec::new();
    for a in 1..n - 1 {
        for b in a + 1..=n - a {
            let c = a + b;
            clauses.push(Clause::new(vec![
                Literal::new(a),
                Literal::new(b),
                Literal::new(c),
            ]));
            clauses.push(Clause::new(vec![
                Literal::new(-a),
                Literal::new(-b),
                Literal::new(-c),
            ]));
        }
    }
    Formula::from_clauses(clauses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::Variable;

    #[test]
    fn smallest_instance_has_one_triple() {
        assert_eq!(sum_triples(3), formula![[1, 2, 3], [-1, -2, -3]]);
    }

    #[test]
    fn instances_grow_with_n() {
        // Two clauses per triple {(1,2,3), (1,3,4), (1,4,5), (2,3,5)}.
        assert_eq!(sum_triples(5).len(), 8);
        assert!(sum_triples(9).len() > sum_triples(8).len());
        assert_eq!(sum_triples(9).maxvar(), Variable::new(9));
    }
}
