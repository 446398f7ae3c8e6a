//! DIMACS and DRAT parsing

use crate::{
    formula::{Clause, Formula, Proof},
    input::Input,
    literal::{Literal, Variable},
    output::Timer,
};
use flate2::read::GzDecoder;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Result},
};

/// File extension of Gzip archives.
const GZIP: &str = ".gz";

/// Parse a formula file and a proof file, reporting fatal errors with
/// their position.
pub fn parse_files(formula_filename: &str, proof_filename: &str, verbose: bool) -> (Formula, Proof) {
    let formula = {
        let mut _timer = Timer::name("parsing formula");
        _timer.disabled = !verbose;
        parse_formula(&mut read_file(formula_filename))
            .unwrap_or_else(|err| die!("failed to parse formula: {}", err))
    };
    let proof = {
        let mut _timer = Timer::name("parsing proof");
        _timer.disabled = !verbose;
        parse_proof(&mut read_file(proof_filename))
            .unwrap_or_else(|err| die!("failed to parse proof: {}", err))
    };
    (formula, proof)
}

/// Return an [Input](struct.Input.html) to read from a possibly compressed file.
///
/// Gzip-compressed files are transparently uncompressed.
pub fn read_file(filename: &str) -> Input<'static> {
    let file = open_file(filename);
    if filename.ends_with(GZIP) {
        Input::new(Box::new(GzDecoder::new(file).bytes().map(panic_on_error)))
    } else {
        Input::new(Box::new(BufReader::new(file).bytes().map(panic_on_error)))
    }
}

/// Open a file for reading.
/// # Panics
/// Panics on error.
pub fn open_file(filename: &str) -> File {
    File::open(filename).unwrap_or_else(|err| die!("cannot open file: {}", err))
}

/// Open a file for writing.
/// # Panics
/// Panics on error.
pub fn open_file_for_writing(filename: &str) -> BufWriter<File> {
    BufWriter::new(
        File::create(filename).unwrap_or_else(|err| die!("cannot open file for writing: {}", err)),
    )
}

/// Unwraps a result, panicking on error.
fn panic_on_error<T>(result: Result<T>) -> T {
    result.unwrap_or_else(|error| die!("{}", error))
}

/// Parse a DIMACS formula.
pub fn parse_formula(input: &mut Input) -> Result<Formula> {
    let (maxvar, _clause_count) = parse_formula_header(input)?;
    let mut formula = Formula::new();
    formula.ensure_maxvar(Variable::new(maxvar as u32));
    loop {
        input.skip_any_whitespace();
        match input.peek() {
            None => return Ok(formula),
            Some(b'c') => parse_comment(input)?,
            Some(_) => formula.add(parse_clause(input)?),
        }
    }
}

/// Parse a DRAT proof in text format.
///
/// Deletion steps are parsed but dropped since the verifier has no
/// deletion support; the first one triggers a warning. No terminating
/// empty clause is added: a proof that does not claim a conflict is
/// incomplete and will not verify.
pub fn parse_proof(input: &mut Input) -> Result<Proof> {
    let mut proof = Proof::new();
    let mut deletions_warned = false;
    loop {
        input.skip_any_whitespace();
        match input.peek() {
            None => return Ok(proof),
            Some(b'c') => parse_comment(input)?,
            Some(b'd') => {
                input.next();
                input.skip_some_whitespace()?;
                let clause = parse_clause(input)?;
                if !deletions_warned {
                    warn!("deletion steps are not supported, ignoring \"d {}\"", clause);
                    deletions_warned = true;
                }
            }
            Some(c) if Input::is_digit_or_dash(c) => proof.push(parse_clause(input)?),
            Some(_) => return Err(input.error(Input::DRAT)),
        }
    }
}

/// Parse a DIMACS header, returning the declared variable and clause counts.
fn parse_formula_header(input: &mut Input) -> Result<(i32, i32)> {
    input.skip_any_whitespace();
    while input.peek() == Some(b'c') {
        parse_comment(input)?;
        input.skip_any_whitespace();
    }
    for &expected in b"p cnf" {
        if input.peek().map_or(true, |c| c != expected) {
            return Err(input.error(Input::P_CNF));
        }
        input.next();
    }
    input.skip_some_whitespace()?;
    let maxvar = input.parse_decimal()?;
    input.skip_some_whitespace()?;
    let clause_count = input.parse_decimal()?;
    if maxvar < 0 || clause_count < 0 {
        return Err(input.error(Input::P_CNF));
    }
    Ok((maxvar, clause_count))
}

/// Parse a DIMACS comment starting with "c ".
///
/// Consumes a leading "c" and any characters until (including) the next newline.
fn parse_comment(input: &mut Input) -> Result<()> {
    match input.peek() {
        Some(b'c') => {
            input.next();
            while let Some(c) = input.next() {
                if c == b'\n' {
                    return Ok(());
                }
            }
            Err(input.error(Input::NEWLINE))
        }
        _ => Err(input.error(Input::NEWLINE)),
    }
}

/// Parse literals up to (excluding) the terminating zero.
fn parse_clause(input: &mut Input) -> Result<Clause> {
    let mut clause = Clause::empty();
    loop {
        let literal = parse_literal(input)?;
        if literal.is_zero() {
            return Ok(clause);
        }
        clause.push(literal);
    }
}

/// Parse a single literal preceded by optional whitespace.
fn parse_literal(input: &mut Input) -> Result<Literal> {
    input.skip_any_whitespace();
    match input.peek() {
        None => Err(input.error(Input::EOF)),
        Some(c) if Input::is_digit_or_dash(c) => Ok(Literal::new(input.parse_decimal()?)),
        Some(_) => Err(input.error(Input::NUMBER)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_from(text: &str) -> Input {
        Input::new(Box::new(text.as_bytes().iter().cloned()))
    }

    #[test]
    fn parses_a_formula_with_comments() {
        let formula = parse_formula(&mut input_from(
            "c comment\np cnf 2 2\n1 2 0\nc comment\n-1 -2 0\n",
        ))
        .unwrap();
        assert_eq!(formula, formula![[1, 2], [-1, -2]]);
        assert_eq!(formula.maxvar(), Variable::new(2));
    }

    #[test]
    fn header_maxvar_wins_over_literals() {
        let formula = parse_formula(&mut input_from("p cnf 5 1\n1 0\n")).unwrap();
        assert_eq!(formula.maxvar(), Variable::new(5));
    }

    #[test]
    fn rejects_a_missing_header() {
        assert!(parse_formula(&mut input_from("1 2 0\n")).is_err());
    }

    #[test]
    fn rejects_an_unterminated_clause() {
        assert!(parse_formula(&mut input_from("p cnf 2 1\n1 2\n")).is_err());
    }

    #[test]
    fn parses_a_proof_and_skips_deletions() {
        let proof = parse_proof(&mut input_from("-1 0\nd 1 2 0\n2 0\n0\n")).unwrap();
        assert_eq!(proof, proof![[-1], [2], []]);
    }

    #[test]
    fn an_empty_file_is_an_empty_proof() {
        assert!(parse_proof(&mut input_from("")).unwrap().is_empty());
    }

    #[test]
    fn rejects_garbage_in_a_proof() {
        assert!(parse_proof(&mut input_from("x 1 0\n")).is_err());
    }

    #[test]
    fn reports_the_error_position() {
        let error = parse_formula(&mut input_from("p cnf 2 1\n1 y 0\n")).unwrap_err();
        assert!(error.to_string().contains("line 2"));
    }
}
