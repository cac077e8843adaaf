//! Absolute-tolerance comparison of a candidate numeric answer against a
//! reference answer.
//!
//! Input is one whitespace-delimited stream:
//! `usrCount corrCount paramCount`, `usrCount` candidate reals,
//! `corrCount` reference reals, then `eps` when `paramCount == 1`.

pub mod error;
pub mod protocol;
pub mod verdict;

pub use error::{CheckError, EXIT_INPUT, EXIT_PROTOCOL};
pub use protocol::{CheckerInput, Tolerance, read_input};
pub use verdict::{Outcome, Verdict};

use log::debug;
use qcheck_core_kernel::cpu_tolerance::{abs_diff_f64, first_mismatch_f64};
use std::io::Read;

/// Compares the two sequences position by position and stops at the first
/// pair outside the tolerance.
pub fn compare(input: &CheckerInput) -> Outcome {
    let (usr, corr) = (&input.candidate, &input.reference);

    // the kernel rejects uneven lengths before looking at any element
    match first_mismatch_f64(usr, corr, input.tolerance.get()) {
        Ok(None) => Outcome::Accepted,
        Ok(Some(index)) => Outcome::ValueMismatch {
            index,
            candidate: usr[index],
            reference: corr[index],
            diff: abs_diff_f64(usr[index], corr[index]),
        },
        Err(err) => {
            debug!("{err}");
            Outcome::LengthMismatch {
                candidate: usr.len(),
                reference: corr.len(),
            }
        }
    }
}

#[must_use]
pub fn check(input: &CheckerInput) -> Verdict {
    compare(input).verdict()
}

/// Reads the whole stream, parses it and judges it.
pub fn run<R: Read>(mut reader: R) -> Result<Verdict, CheckError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let input = read_input(&text)?;
    let outcome = compare(&input);
    debug!("eps={} -> {}", input.tolerance.get(), outcome);
    Ok(outcome.verdict())
}
