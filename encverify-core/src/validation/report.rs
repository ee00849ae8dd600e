use std::fmt::{self, Display};
use std::path::PathBuf;

use serde::Serialize;

use super::outcome::VerificationOutcome;

/// Overall decision for an original/candidate pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Every check passed; the candidate can replace the original
    Accept,
    /// At least one check found a mismatch
    Review,
    /// At least one check could not be judged, so no verdict is trustworthy
    Undetermined,
}

impl Verdict {
    /// Undetermined dominates Review, which dominates Accept.
    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a VerificationOutcome>,
    {
        outcomes
            .into_iter()
            .fold(Verdict::Accept, |verdict, outcome| match (verdict, outcome) {
                (Verdict::Undetermined, _) | (_, VerificationOutcome::Undetermined { .. }) => {
                    Verdict::Undetermined
                }
                (Verdict::Review, _) | (_, VerificationOutcome::NeedsReview { .. }) => Verdict::Review,
                (Verdict::Accept, VerificationOutcome::Pass { .. }) => Verdict::Accept,
            })
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accept => write!(f, "ACCEPT"),
            Verdict::Review => write!(f, "REVIEW"),
            Verdict::Undetermined => write!(f, "UNDETERMINED"),
        }
    }
}

/// Both checks for one original/candidate pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub original: PathBuf,
    pub candidate: PathBuf,
    pub duration: VerificationOutcome,
    pub size: VerificationOutcome,
    pub verdict: Verdict,
}

impl VerificationReport {
    pub fn new(
        original: PathBuf,
        candidate: PathBuf,
        duration: VerificationOutcome,
        size: VerificationOutcome,
    ) -> Self {
        let verdict = Verdict::from_outcomes([&duration, &size]);
        Self {
            original,
            candidate,
            duration,
            size,
            verdict,
        }
    }

    /// Named outcomes in display order.
    pub fn checks(&self) -> [(&'static str, &VerificationOutcome); 2] {
        [("Duration", &self.duration), ("Size", &self.size)]
    }
}
