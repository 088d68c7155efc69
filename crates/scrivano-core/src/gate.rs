//! Selection gate: the chosen file and options, guarded while a submission
//! is in flight.

use crate::config::ProcessingTier;
use crate::media::SelectedFile;
use crate::state::SharedSubmissionState;

/// User-chosen submission options.
///
/// Mutable only while no submission is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOptions {
    pub tier: ProcessingTier,
    /// Ask the service to split the transcript into paragraphs.
    pub split_text: bool,
    /// Play the completion chime when the submission settles.
    pub sound_enabled: bool,
}

impl Default for SubmissionOptions {
    fn default() -> Self {
        Self {
            tier: ProcessingTier::default(),
            split_text: false,
            sound_enabled: true,
        }
    }
}

/// Holds the selected file and options, and is the authoritative guard
/// against changing either while a submission runs.
///
/// The gate only reads the shared state; it never mutates it.
pub struct SelectionGate {
    state: SharedSubmissionState,
    file: Option<SelectedFile>,
    options: SubmissionOptions,
}

impl SelectionGate {
    pub fn new(state: SharedSubmissionState) -> Self {
        Self::with_options(state, SubmissionOptions::default())
    }

    pub fn with_options(state: SharedSubmissionState, options: SubmissionOptions) -> Self {
        Self {
            state,
            file: None,
            options,
        }
    }

    fn submission_active(&self) -> bool {
        self.state.lock().unwrap().phase.is_active()
    }

    /// Replace the selected file.
    ///
    /// Rejected (returns `false`, nothing stored) while a submission is
    /// active. The file content is not validated.
    pub fn select_file(&mut self, file: SelectedFile) -> bool {
        if self.submission_active() {
            return false;
        }
        self.file = Some(file);
        true
    }

    /// Change the processing tier; a no-op while a submission is active.
    pub fn set_tier(&mut self, tier: ProcessingTier) -> bool {
        if self.submission_active() {
            return false;
        }
        self.options.tier = tier;
        true
    }

    /// Toggle transcript splitting; a no-op while a submission is active.
    pub fn set_split_text(&mut self, split_text: bool) -> bool {
        if self.submission_active() {
            return false;
        }
        self.options.split_text = split_text;
        true
    }

    /// Toggle the completion chime; a no-op while a submission is active.
    pub fn set_sound_enabled(&mut self, sound_enabled: bool) -> bool {
        if self.submission_active() {
            return false;
        }
        self.options.sound_enabled = sound_enabled;
        true
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn options(&self) -> &SubmissionOptions {
        &self.options
    }

    /// A submission may start only with a file selected and no submission
    /// currently active.
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.submission_active()
    }
}
