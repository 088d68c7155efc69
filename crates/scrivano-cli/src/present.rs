//! Result presenter: the live progress line, the terminal outcome, and the
//! copy action.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use console::style;
use dialoguer::Confirm;

use scrivano_core::{Phase, SharedSubmissionState, SubmissionState, copy_to_clipboard};

/// What the terminal state renders to.
///
/// The transcript wins when present, then the error message, else nothing.
#[derive(Debug, PartialEq, Eq)]
pub enum Rendered<'a> {
    Transcript(&'a str),
    Error(&'a str),
    Nothing,
}

pub fn rendered(state: &SubmissionState) -> Rendered<'_> {
    if let Some(text) = state.result_text.as_deref() {
        Rendered::Transcript(text)
    } else if let Some(message) = state.error_message.as_deref() {
        Rendered::Error(message)
    } else {
        Rendered::Nothing
    }
}

/// Redraw the progress line twice a second until the submission settles.
///
/// With an estimate the line counts down (and into negative overrun);
/// without one it falls back to raw elapsed seconds.
pub async fn progress_line(state: SharedSubmissionState) {
    let mut drew = false;
    loop {
        tokio::time::sleep(Duration::from_millis(500)).await;
        let snapshot = state.lock().unwrap().clone();
        match snapshot.phase {
            Phase::Idle => {}
            Phase::Estimating => {
                print!("\rEstimating processing time...");
                let _ = std::io::stdout().flush();
                drew = true;
            }
            Phase::Running => {
                let line = match snapshot.remaining_seconds() {
                    Some(remaining) => format!("Processing... about {remaining}s remaining"),
                    None => format!("Processing... {}s elapsed", snapshot.elapsed_seconds),
                };
                print!("\r{line:<40}");
                let _ = std::io::stdout().flush();
                drew = true;
            }
            Phase::Done | Phase::Failed => {
                if drew {
                    println!();
                }
                break;
            }
        }
    }
}

/// Print the terminal state and run the copy flow for a transcript.
///
/// A failed submission prints its message and exits non-zero.
pub fn show_outcome(state: &SubmissionState, copy_without_asking: bool) -> Result<()> {
    match rendered(state) {
        Rendered::Transcript(text) => {
            println!("{}", style("Transcript:").bold());
            println!("{text}");
            offer_copy(text, copy_without_asking)
        }
        Rendered::Error(message) => {
            eprintln!("{}", style(message).red());
            std::process::exit(1);
        }
        Rendered::Nothing => Ok(()),
    }
}

fn offer_copy(text: &str, copy_without_asking: bool) -> Result<()> {
    let wanted = copy_without_asking
        || (console::user_attended()
            && Confirm::new()
                .with_prompt("Copy the transcript to the clipboard?")
                .default(true)
                .interact()?);
    if !wanted {
        return Ok(());
    }

    match copy_to_clipboard(text) {
        Ok(()) => println!("{}", style("Copied to clipboard.").green()),
        Err(err) => {
            scrivano_core::warn!("{err:#}");
            println!("{}", style("Copy failed.").red());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_wins_over_nothing() {
        let state = SubmissionState {
            phase: Phase::Done,
            result_text: Some("hello".to_string()),
            ..SubmissionState::default()
        };
        assert_eq!(rendered(&state), Rendered::Transcript("hello"));
    }

    #[test]
    fn error_renders_when_no_transcript() {
        let state = SubmissionState {
            phase: Phase::Failed,
            error_message: Some("File upload failed".to_string()),
            ..SubmissionState::default()
        };
        assert_eq!(rendered(&state), Rendered::Error("File upload failed"));
    }

    #[test]
    fn idle_state_renders_nothing() {
        assert_eq!(rendered(&SubmissionState::default()), Rendered::Nothing);
    }
}
