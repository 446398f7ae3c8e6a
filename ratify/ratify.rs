//! Clausal proof checker (DRAT) for certifying SAT solvers' unsatisfiability results

use clap::{Arg, ArgMatches};
use ratify_common::{
    comment, config, die,
    output::{print_key_value, print_solution, Timer},
    parser::{open_file_for_writing, parse_files},
    sick::{check_incorrectness_certificate, write_sick_witness},
    verifier::{check_proof, Verdict},
};

/// Run `ratify`.
fn main() {
    std::process::exit(run_frontend());
}

/// Run `ratify`, returning its exit code.
///
/// This is a separate function because `std::process::exit` does not
/// call destructors.
fn run_frontend() -> i32 {
    let mut app = clap::App::new("ratify")
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .after_help("Input files may be gzip-compressed (file extension gz).")
        .arg(
            Arg::with_name("INPUT")
                .required(true)
                .help("input file in DIMACS format"),
        )
        .arg(
            Arg::with_name("PROOF")
                .required(true)
                .help("proof file in DRAT format"),
        )
        .arg(
            Arg::with_name("SICK_FILE")
                .takes_value(true)
                .short("S")
                .long("sick")
                .help("Write an incorrectness certificate to this file if the proof is rejected."),
        );
    if config::ENABLE_LOGGING {
        app = app.arg(
            Arg::with_name("v")
                .short("v")
                .multiple(true)
                .help("Verbose output. Print a line for each processed proof clause."),
        );
    }
    let flags = Flags::new(app.get_matches());
    let timer = Timer::name("total time");
    let (formula, proof) = parse_files(
        &flags.formula_filename,
        &flags.proof_filename,
        flags.verbosity > 0,
    );
    print_key_value("premise clauses", formula.len());
    print_key_value("variables", formula.maxvar());
    print_key_value("proof steps", proof.len());
    let result = check_proof(&formula, &proof, flags.verbosity);
    drop(timer);
    match result.verdict {
        Verdict::NoEmptyClause => comment!("no conflict"),
        Verdict::IncorrectEmptyClause => comment!(
            "{}:{} conflict claimed but not detected",
            &flags.proof_filename,
            result.proof_step.unwrap()
        ),
        Verdict::IncorrectLemma => comment!(
            "{}:{} redundancy check failed for {}",
            &flags.proof_filename,
            result.proof_step.unwrap(),
            &proof.steps()[result.proof_step.unwrap() - 1]
        ),
        Verdict::Verified => (),
    }
    print_solution(if result.accepted() {
        "VERIFIED"
    } else {
        "NOT VERIFIED"
    });
    if let (Some(sick), Some(filename)) = (&result.rejection, &flags.sick_filename) {
        let mut file = open_file_for_writing(filename);
        write_sick_witness(sick, &mut file)
            .unwrap_or_else(|err| die!("failed to write SICK incorrectness witness: {}", err));
        if let Err(reason) = check_incorrectness_certificate(&formula, &proof, sick) {
            comment!("rejection certificate failed validation: {}", reason);
            comment!("proof claimed incorrect but validation failed, please report a bug");
            return 2;
        }
    }
    if result.accepted() {
        0
    } else {
        1
    }
}

/// Parsed arguments. See `ratify --help`.
#[derive(Debug)]
struct Flags {
    verbosity: u32,
    formula_filename: String,
    proof_filename: String,
    sick_filename: Option<String>,
}

impl Flags {
    /// Create a flags instance from commandline arguments.
    fn new(matches: ArgMatches) -> Flags {
        Flags {
            verbosity: matches.occurrences_of("v") as u32,
            formula_filename: matches.value_of("INPUT").unwrap().to_string(),
            proof_filename: matches.value_of("PROOF").unwrap().to_string(),
            sick_filename: matches.value_of("SICK_FILE").map(String::from),
        }
    }
}
