use thiserror::Error;

/// Exit status for a malformed checker invocation (wrong parameter shape).
pub const EXIT_PROTOCOL: u8 = 1;
/// Exit status for input that could not be read or parsed.
pub const EXIT_INPUT: u8 = 2;

/// Everything that stops the checker before it can produce a verdict.
///
/// `OK` and `WA` are not errors; they come back as a [`crate::Verdict`].
#[derive(Debug, Error)]
pub enum CheckError {
    /// Parameter count is not 1, so no tolerance follows.
    #[error("expected exactly 1 tolerance parameter, got {found}")]
    ParamCount { found: i64 },

    /// Tolerance is negative or NaN.
    #[error("tolerance must be a non-negative number, got {value}")]
    InvalidTolerance { value: f64 },

    /// Stream ended before `what` was read.
    #[error("input ended early: missing {what}")]
    MissingToken { what: &'static str },

    /// Token for `what` did not parse.
    #[error("malformed {what}: {token:?}")]
    Malformed { what: &'static str, token: String },

    #[error("failed to read checker input: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckError {
    /// Caller invoked the checker with the wrong shape, as opposed to
    /// handing it unreadable input.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self, Self::ParamCount { .. } | Self::InvalidTolerance { .. })
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_protocol_violation() {
            EXIT_PROTOCOL
        } else {
            EXIT_INPUT
        }
    }
}
