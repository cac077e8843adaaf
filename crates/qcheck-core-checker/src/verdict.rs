use core::fmt;

/// Judging outcome printed by the checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Wa,
}

impl Verdict {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Wa => "WA",
        }
    }

    #[must_use]
    pub fn is_accepted(self) -> bool {
        self == Self::Ok
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a comparison ended the way it did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Accepted,
    /// Sequence lengths differ; no element was looked at.
    LengthMismatch { candidate: usize, reference: usize },
    /// First out-of-tolerance pair.
    ValueMismatch {
        index: usize,
        candidate: f64,
        reference: f64,
        diff: f64,
    },
}

impl Outcome {
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        match self {
            Self::Accepted => Verdict::Ok,
            Self::LengthMismatch { .. } | Self::ValueMismatch { .. } => Verdict::Wa,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "all values within tolerance"),
            Self::LengthMismatch {
                candidate,
                reference,
            } => write!(
                f,
                "length mismatch: candidate has {candidate} values, reference has {reference}"
            ),
            Self::ValueMismatch {
                index,
                candidate,
                reference,
                diff,
            } => write!(
                f,
                "value mismatch at index {index}: candidate={candidate} reference={reference} diff={diff}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_text() {
        assert_eq!(Verdict::Ok.to_string(), "OK");
        assert_eq!(Verdict::Wa.to_string(), "WA");
        assert!(Verdict::Ok.is_accepted());
        assert!(!Verdict::Wa.is_accepted());
    }

    #[test]
    fn test_every_mismatch_is_wrong_answer() {
        let len = Outcome::LengthMismatch {
            candidate: 1,
            reference: 2,
        };
        let val = Outcome::ValueMismatch {
            index: 0,
            candidate: 2.1,
            reference: 2.0,
            diff: 0.1,
        };
        assert_eq!(Outcome::Accepted.verdict(), Verdict::Ok);
        assert_eq!(len.verdict(), Verdict::Wa);
        assert_eq!(val.verdict(), Verdict::Wa);
        assert!(len.to_string().contains("candidate has 1 values"));
    }
}
