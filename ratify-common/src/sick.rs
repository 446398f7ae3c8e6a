//! SICK incorrectness certificates
//!
//! When a proof is rejected, the verifier records which step failed and,
//! for a failed RAT check, the resolution candidate that did not produce a
//! conflict. The certificate is serialized as TOML and can be validated
//! independently of the rejecting run, which guards against checker bugs
//! masquerading as bad proofs.

use crate::{
    formula::{Clause, Formula, Proof},
    literal::Literal,
    propagate::propagate,
    rat::{has_rat, resolvent_conflicts},
};
use serde_derive::{Deserialize, Serialize};
use std::io::{self, ErrorKind, Write};

/// The proof format identifier written into certificates: the pivot of a
/// lemma is always its first literal, never searched for.
pub const PROOF_FORMAT: &str = "DRAT-pivot-is-first-literal";

/// A SICK certificate.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Sick {
    /// The string identifying the proof format
    pub proof_format: String,
    /// The one-based line in the proof that failed
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub proof_step: Option<usize>,
    /// The failed RAT trial; absent when the rejected step is the conflict
    /// claim itself
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub witness: Option<Witness>,
}

/// The refutation of a single RAT trial.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Witness {
    /// The resolution candidate that failed to produce a conflict
    pub failing_clause: Clause,
    /// The pivot literal of the rejected lemma
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pivot: Option<Literal>,
}

/// Serialize the certificate as TOML.
pub fn write_sick_witness(sick: &Sick, file: &mut impl Write) -> io::Result<()> {
    let text = toml::to_string(sick)
        .map_err(|err| io::Error::new(ErrorKind::InvalidData, err.to_string()))?;
    file.write_all(text.as_bytes())
}

/// Read a certificate back from TOML.
pub fn read_sick_witness(text: &str) -> io::Result<Sick> {
    toml::from_str(text).map_err(|err| io::Error::new(ErrorKind::InvalidData, err.to_string()))
}

/// Check a SICK certificate against the formula and proof it talks about.
///
/// Replays the accepted prefix of the proof, then confirms that the named
/// step really fails. Returns an error describing the first inconsistency.
pub fn check_incorrectness_certificate(
    formula: &Formula,
    proof: &Proof,
    sick: &Sick,
) -> Result<(), String> {
    if sick.proof_format != PROOF_FORMAT {
        return Err(format!("Unsupported proof format: {}", sick.proof_format));
    }
    let proof_step = sick
        .proof_step
        .ok_or_else(|| "certificate names no proof step".to_string())?;
    if proof_step == 0 || proof_step > proof.len() {
        return Err(format!(
            "Specified proof step exceeds proof size: {}",
            proof_step
        ));
    }
    // Reconstruct the working formula at the rejected step.
    let mut working = formula.clone();
    for lemma in &proof.steps()[..proof_step - 1] {
        let pivot = lemma
            .first()
            .ok_or_else(|| "the proof claims a conflict before the rejected step".to_string())?;
        if pivot.is_zero() || !has_rat(&working, lemma, pivot) {
            return Err("an earlier proof step already fails".to_string());
        }
        working.add(lemma.clone());
    }
    let lemma = &proof.steps()[proof_step - 1];
    let pivot = match lemma.first() {
        None => {
            // A rejected conflict claim: propagation must not derive the
            // empty clause.
            return if propagate(working).has_empty_clause() {
                Err("conflict claimed incorrect but unit propagation derives it".to_string())
            } else {
                Ok(())
            };
        }
        Some(pivot) => pivot,
    };
    if pivot.is_zero() {
        // The zero literal never forms a valid lemma.
        return Ok(());
    }
    let witness = sick
        .witness
        .as_ref()
        .ok_or_else(|| "RAT rejection requires a witness with a failing clause".to_string())?;
    if witness.pivot.map_or(false, |specified| specified != pivot) {
        return Err("the witness pivot must be the first literal of the lemma".to_string());
    }
    if !witness.failing_clause.contains(-pivot) {
        return Err("failing clause does not contain the negated pivot".to_string());
    }
    if !working
        .clauses()
        .iter()
        .any(|clause| clause == &witness.failing_clause)
    {
        return Err("failing clause is not present in the formula".to_string());
    }
    if resolvent_conflicts(&working, lemma, &witness.failing_clause, pivot) {
        return Err("the failing clause produces a conflict after all".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate::sum_triples, verifier::check_proof};

    #[test]
    fn rejections_produce_a_valid_certificate() {
        let formula = sum_triples(8);
        let proof = proof![[1, 4], [1], [4], []];
        let result = check_proof(&formula, &proof, 0);
        assert!(!result.accepted());
        let sick = result.rejection.expect("rejection must carry a certificate");
        assert_eq!(check_incorrectness_certificate(&formula, &proof, &sick), Ok(()));
    }

    #[test]
    fn certificates_survive_a_toml_round_trip() {
        let formula = sum_triples(8);
        let proof = proof![[1, 4], [1], [4], []];
        let sick = check_proof(&formula, &proof, 0).rejection.unwrap();
        let mut buffer = Vec::new();
        write_sick_witness(&sick, &mut buffer).unwrap();
        let read_back = read_sick_witness(std::str::from_utf8(&buffer).unwrap()).unwrap();
        assert_eq!(read_back.proof_format, PROOF_FORMAT);
        assert_eq!(read_back.proof_step, sick.proof_step);
        assert_eq!(
            read_back.witness.unwrap().failing_clause,
            sick.witness.unwrap().failing_clause
        );
    }

    #[test]
    fn a_fabricated_certificate_is_refused() {
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
        let proof = proof![[-1], [2], []];
        let sick = Sick {
            proof_format: PROOF_FORMAT.to_string(),
            proof_step: Some(1),
            witness: Some(Witness {
                failing_clause: clause!(1, 2, -3),
                pivot: Some(crate::literal::Literal::new(-1)),
            }),
        };
        // The named trial does conflict, so the certificate is bogus.
        assert!(check_incorrectness_certificate(&formula, &proof, &sick).is_err());
    }
}
