//! Elapsed-time ticker for an active submission.

use std::time::Duration;

use tokio::task::JoinHandle;

use crate::state::SharedSubmissionState;

/// Ownership token for the running one-second ticker task.
///
/// At most one exists per submission. The orchestrator acquires it when the
/// upload starts and releases it exactly once in teardown; `stop` is
/// idempotent, and `Drop` also stops the task so a panicking caller cannot
/// leak a ticker that keeps incrementing after the submission settled.
#[derive(Debug)]
pub struct TickerHandle {
    handle: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Spawn the ticker. It fires once per second and bumps
    /// `elapsed_seconds` while the submission is active, until stopped.
    pub fn start(state: SharedSubmissionState) -> Self {
        let handle = tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                let mut state = state.lock().unwrap();
                // The phase check keeps the elapsed-only-while-active
                // invariant even if a tick lands between abort and the
                // terminal-phase write.
                if state.phase.is_active() {
                    state.elapsed_seconds += 1;
                }
            }
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Stop the ticker. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.handle.is_none()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
