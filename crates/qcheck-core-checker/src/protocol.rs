use crate::error::CheckError;
use log::{debug, trace};
use std::str::SplitAsciiWhitespace;

/// Maximum allowed absolute deviation between paired values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Rejects negative and NaN values. `+inf` is allowed.
    pub fn new(eps: f64) -> Result<Self, CheckError> {
        if eps.is_nan() || eps < 0.0 {
            return Err(CheckError::InvalidTolerance { value: eps });
        }
        Ok(Self(eps))
    }

    #[inline(always)]
    pub fn get(self) -> f64 {
        self.0
    }
}

/// One fully parsed checker invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckerInput {
    pub candidate: Vec<f64>,
    pub reference: Vec<f64>,
    pub tolerance: Tolerance,
}

/// Whitespace token cursor over the raw input.
struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_ascii_whitespace(),
        }
    }

    fn next_token(&mut self, what: &'static str) -> Result<&'a str, CheckError> {
        self.inner.next().ok_or(CheckError::MissingToken { what })
    }

    fn parse<T: std::str::FromStr>(&mut self, what: &'static str) -> Result<T, CheckError> {
        let token = self.next_token(what)?;
        token.parse::<T>().map_err(|_| CheckError::Malformed {
            what,
            token: token.to_string(),
        })
    }

    fn reals(&mut self, count: usize, what: &'static str) -> Result<Vec<f64>, CheckError> {
        // count comes from the input, do not trust it for allocation
        let mut out = Vec::new();
        for _ in 0..count {
            out.push(self.parse::<f64>(what)?);
        }
        Ok(out)
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}

/// Parses `usrCount corrCount paramCount`, both sequences, then `eps`.
///
/// Both sequences are consumed before the parameter count is checked, and
/// the tolerance is only read when exactly one parameter is announced.
pub fn read_input(text: &str) -> Result<CheckerInput, CheckError> {
    let mut tokens = Tokens::new(text);

    let usr_count: usize = tokens.parse("candidate count")?;
    let corr_count: usize = tokens.parse("reference count")?;
    let param_count: i64 = tokens.parse("parameter count")?;
    trace!("header: usr={usr_count} corr={corr_count} params={param_count}");

    let candidate = tokens.reals(usr_count, "candidate value")?;
    let reference = tokens.reals(corr_count, "reference value")?;

    if param_count != 1 {
        return Err(CheckError::ParamCount { found: param_count });
    }

    let tolerance = Tolerance::new(tokens.parse("tolerance")?)?;

    let trailing = tokens.remaining();
    if trailing > 0 {
        debug!("ignoring {trailing} trailing token(s) after tolerance");
    }

    Ok(CheckerInput {
        candidate,
        reference,
        tolerance,
    })
}
