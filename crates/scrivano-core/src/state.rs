//! Submission state machine and the shared state handle.
//!
//! [`SubmissionState`] is the single source of truth for rendering one
//! submission. The orchestrator (and its ticker task) mutate it; the
//! selection gate and the presenter only read it.

use std::sync::{Arc, Mutex};

/// Phases of one submission.
///
/// Transitions are linear, no branching back:
///
/// ```text
/// Idle ──submit──▶ Estimating ──▶ Running ──upload ok──▶ Done
///                                         ──upload err─▶ Failed
/// ```
///
/// A new submission resets the state and starts over at `Estimating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// The best-effort time-estimate request is in flight.
    Estimating,
    /// The upload is in flight and the ticker is running.
    Running,
    /// Upload succeeded; the transcript is available.
    Done,
    /// Upload failed; the error message is available.
    Failed,
}

impl Phase {
    /// True while a submission is in flight.
    ///
    /// The gate rejects file/option changes and new submissions while active.
    pub fn is_active(&self) -> bool {
        matches!(self, Phase::Estimating | Phase::Running)
    }

    /// A short human-readable label for status output.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Estimating => "Estimating",
            Phase::Running => "Processing",
            Phase::Done => "Done",
            Phase::Failed => "Failed",
        }
    }
}

/// Everything the presenter needs to render one submission.
///
/// Invariants: `elapsed_seconds` only increments while the phase is active;
/// `result_text` and `error_message` are mutually exclusive, and both absent
/// outside `Done`/`Failed`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionState {
    pub phase: Phase,
    /// Whole seconds since the ticker started for this submission.
    pub elapsed_seconds: u64,
    /// Predicted processing duration, when the estimate call succeeded.
    pub estimated_seconds: Option<f64>,
    /// Transcript returned by the service (`Done` only).
    pub result_text: Option<String>,
    /// Fixed user-facing message (`Failed` only).
    pub error_message: Option<String>,
}

impl SubmissionState {
    /// Zero every field and enter `Estimating`. Runs once at the start of
    /// each submission; state never carries over between runs.
    pub(crate) fn reset_for_submission(&mut self) {
        *self = SubmissionState {
            phase: Phase::Estimating,
            ..SubmissionState::default()
        };
    }

    /// Seconds left relative to the estimate, rounded.
    ///
    /// Goes negative once the job overruns its estimate; callers display the
    /// raw value. `None` when no estimate is available.
    pub fn remaining_seconds(&self) -> Option<i64> {
        self.estimated_seconds
            .map(|estimate| (estimate - self.elapsed_seconds as f64).round() as i64)
    }
}

/// Thread-safe handle to [`SubmissionState`].
///
/// Lock for short critical sections only; never hold the lock across an
/// await point.
pub type SharedSubmissionState = Arc<Mutex<SubmissionState>>;

/// Construct a fresh shared state in the `Idle` phase.
pub fn new_shared_state() -> SharedSubmissionState {
    Arc::new(Mutex::new(SubmissionState::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle_and_empty() {
        let state = SubmissionState::default();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.elapsed_seconds, 0);
        assert!(state.estimated_seconds.is_none());
        assert!(state.result_text.is_none());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn only_estimating_and_running_are_active() {
        assert!(!Phase::Idle.is_active());
        assert!(Phase::Estimating.is_active());
        assert!(Phase::Running.is_active());
        assert!(!Phase::Done.is_active());
        assert!(!Phase::Failed.is_active());
    }

    #[test]
    fn reset_clears_previous_run() {
        let mut state = SubmissionState {
            phase: Phase::Failed,
            elapsed_seconds: 17,
            estimated_seconds: Some(40.0),
            result_text: None,
            error_message: Some("File upload failed".to_string()),
        };
        state.reset_for_submission();
        assert_eq!(state.phase, Phase::Estimating);
        assert_eq!(state.elapsed_seconds, 0);
        assert!(state.estimated_seconds.is_none());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn remaining_counts_down_from_estimate() {
        let mut state = SubmissionState {
            estimated_seconds: Some(42.0),
            ..SubmissionState::default()
        };
        assert_eq!(state.remaining_seconds(), Some(42));
        state.elapsed_seconds = 1;
        assert_eq!(state.remaining_seconds(), Some(41));
    }

    #[test]
    fn remaining_goes_negative_on_overrun() {
        let state = SubmissionState {
            estimated_seconds: Some(10.0),
            elapsed_seconds: 13,
            ..SubmissionState::default()
        };
        assert_eq!(state.remaining_seconds(), Some(-3));
    }

    #[test]
    fn remaining_rounds_fractional_estimates() {
        let state = SubmissionState {
            estimated_seconds: Some(41.6),
            ..SubmissionState::default()
        };
        assert_eq!(state.remaining_seconds(), Some(42));
    }

    #[test]
    fn remaining_absent_without_estimate() {
        let state = SubmissionState {
            elapsed_seconds: 5,
            ..SubmissionState::default()
        };
        assert_eq!(state.remaining_seconds(), None);
    }

    #[test]
    fn shared_state_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SharedSubmissionState>();
    }
}
