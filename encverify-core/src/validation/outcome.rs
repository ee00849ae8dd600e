//! Verification outcome of a single check

use serde::Serialize;

/// Result of one check (duration or size) on an original/candidate pair.
///
/// Three states exist and callers must act differently on each:
/// `NeedsReview` means the check ran and the candidate looks wrong,
/// `Undetermined` means the check could not run at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VerificationOutcome {
    Pass { message: String },
    NeedsReview { reason: String },
    Undetermined { reason: String },
}

impl VerificationOutcome {
    pub fn pass(message: impl Into<String>) -> Self {
        VerificationOutcome::Pass {
            message: message.into(),
        }
    }

    pub fn needs_review(reason: impl Into<String>) -> Self {
        VerificationOutcome::NeedsReview {
            reason: reason.into(),
        }
    }

    pub fn undetermined(reason: impl Into<String>) -> Self {
        VerificationOutcome::Undetermined {
            reason: reason.into(),
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, VerificationOutcome::Pass { .. })
    }

    pub fn needs_manual_review(&self) -> bool {
        matches!(self, VerificationOutcome::NeedsReview { .. })
    }

    pub fn is_undetermined(&self) -> bool {
        matches!(self, VerificationOutcome::Undetermined { .. })
    }

    /// The `(passed, needs_manual_review)` pair. Never `(true, true)`;
    /// `(false, false)` is the undetermined state.
    pub fn flags(&self) -> (bool, bool) {
        (self.passed(), self.needs_manual_review())
    }

    /// Operator-facing text accompanying the decision.
    pub fn message(&self) -> &str {
        match self {
            VerificationOutcome::Pass { message } => message.as_str(),
            VerificationOutcome::NeedsReview { reason } => reason.as_str(),
            VerificationOutcome::Undetermined { reason } => reason.as_str(),
        }
    }

    /// Short label for terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            VerificationOutcome::Pass { .. } => "PASS",
            VerificationOutcome::NeedsReview { .. } => "REVIEW",
            VerificationOutcome::Undetermined { .. } => "UNDETERMINED",
        }
    }

    pub(crate) fn log(&self, check: &str) {
        match self {
            VerificationOutcome::Pass { message } => log::info!("{} check passed: {}", check, message),
            VerificationOutcome::NeedsReview { reason } => {
                log::warn!("{} check needs review: {}", check, reason)
            }
            VerificationOutcome::Undetermined { reason } => {
                log::warn!("{} check undetermined: {}", check, reason)
            }
        }
    }
}
