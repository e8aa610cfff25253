use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected,
}

/// Status of one asynchronous form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    phase: SubmissionPhase,
    message: Option<String>,
}

impl SubmissionState {
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SubmissionPhase::Pending
    }

    pub fn is_error(&self) -> bool {
        self.phase == SubmissionPhase::Rejected
    }

    pub fn is_success(&self) -> bool {
        self.phase == SubmissionPhase::Fulfilled
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Terminal result handed out exactly once by [`Submission::consume`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub message: String,
    pub success: bool,
}

/// Explicitly owned submission state machine:
/// `Idle -> Pending -> (Fulfilled | Rejected) -> Idle`.
///
/// Each form instance owns its own handle, so tests and pages never share
/// ambient state. Terminal messages are one-shot: `consume` hands the
/// message out and transitions back to `Idle` in the same step, so a
/// re-render cannot show it twice.
#[derive(Clone, Copy)]
pub struct Submission {
    state: RwSignal<SubmissionState>,
}

impl Default for Submission {
    fn default() -> Self {
        Self::new()
    }
}

impl Submission {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(SubmissionState::default()),
        }
    }

    /// Reactive snapshot for rendering.
    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(SubmissionState::is_loading)
    }

    /// Enters `Pending`. Returns `false` while a call is already in flight;
    /// the caller must not dispatch a second one.
    pub fn begin(&self) -> bool {
        let already_pending = self
            .state
            .with_untracked(|state| state.phase == SubmissionPhase::Pending);
        if already_pending {
            log::warn!("submission already pending, ignoring dispatch");
            return false;
        }
        self.state.set(SubmissionState {
            phase: SubmissionPhase::Pending,
            message: None,
        });
        true
    }

    pub fn fulfill(&self, message: impl Into<String>) {
        self.finish(SubmissionPhase::Fulfilled, message.into());
    }

    pub fn reject(&self, message: impl Into<String>) {
        self.finish(SubmissionPhase::Rejected, message.into());
    }

    // A result may only land on an in-flight submission; anything else is a
    // stale call whose submission was already consumed or never started.
    fn finish(&self, phase: SubmissionPhase, message: String) {
        let pending = self
            .state
            .with_untracked(|state| state.phase == SubmissionPhase::Pending);
        if !pending {
            log::warn!("discarding stale submission result: {message}");
            return;
        }
        self.state.set(SubmissionState {
            phase,
            message: Some(message),
        });
    }

    /// Takes the terminal outcome, if any, and resets the machine to
    /// `Idle`. Returns `None` while idle or pending.
    pub fn consume(&self) -> Option<SubmissionOutcome> {
        let outcome = self.state.with_untracked(|state| match state.phase {
            SubmissionPhase::Fulfilled => Some(SubmissionOutcome {
                message: state.message.clone().unwrap_or_default(),
                success: true,
            }),
            SubmissionPhase::Rejected => Some(SubmissionOutcome {
                message: state.message.clone().unwrap_or_default(),
                success: false,
            }),
            SubmissionPhase::Idle | SubmissionPhase::Pending => None,
        });
        if outcome.is_some() {
            self.state.set(SubmissionState::default());
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn starts_idle_with_no_message() {
        with_runtime(|| {
            let submission = Submission::new();
            let state = submission.state.get_untracked();
            assert_eq!(state.phase(), SubmissionPhase::Idle);
            assert!(!state.is_loading());
            assert!(state.message().is_none());
        });
    }

    #[test]
    fn begin_blocks_second_dispatch_while_pending() {
        with_runtime(|| {
            let submission = Submission::new();
            assert!(submission.begin());
            assert!(!submission.begin());
            assert!(submission.is_loading());
        });
    }

    #[test]
    fn rejected_outcome_is_delivered_once_then_idle() {
        with_runtime(|| {
            let submission = Submission::new();
            submission.begin();
            submission.reject("Email exists");
            assert!(submission.state.get_untracked().is_error());

            let outcome = submission.consume().expect("terminal outcome");
            assert_eq!(outcome.message, "Email exists");
            assert!(!outcome.success);

            assert_eq!(
                submission.state.get_untracked().phase(),
                SubmissionPhase::Idle
            );
            assert!(submission.consume().is_none(), "message must be one-shot");
        });
    }

    #[test]
    fn fulfilled_outcome_carries_success_flag() {
        with_runtime(|| {
            let submission = Submission::new();
            submission.begin();
            submission.fulfill("Account created");
            let outcome = submission.consume().expect("terminal outcome");
            assert!(outcome.success);
            assert_eq!(outcome.message, "Account created");
        });
    }

    #[test]
    fn results_without_pending_call_are_discarded() {
        with_runtime(|| {
            let submission = Submission::new();
            submission.fulfill("late");
            assert!(submission.consume().is_none());

            submission.begin();
            submission.reject("failed");
            submission.consume();
            // A second result from the same call arrives after consume.
            submission.fulfill("duplicate");
            assert!(submission.consume().is_none());
        });
    }

    #[test]
    fn begin_is_allowed_again_after_consume() {
        with_runtime(|| {
            let submission = Submission::new();
            submission.begin();
            submission.reject("failed");
            submission.consume();
            assert!(submission.begin(), "resubmit after a consumed failure");
        });
    }
}
