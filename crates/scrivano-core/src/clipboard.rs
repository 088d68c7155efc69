//! Copy-to-clipboard with a native backend and a legacy command fallback.
//!
//! The native arboard backend is tried first. When it is unavailable or
//! rejects the write (e.g. Wayland compositors without the data-control
//! protocol), the text is piped into an external clipboard command instead.
//! Only a failure of the fallback surfaces to the user.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use arboard::Clipboard;
use thiserror::Error;

/// Every copy strategy failed; the last underlying failure is attached.
///
/// Callers show this as its own message, distinct from a missing transcript.
#[derive(Debug, Error)]
#[error("copy failed")]
pub struct CopyError {
    #[source]
    source: anyhow::Error,
}

/// One way of writing text to the system clipboard.
pub trait CopyBackend {
    fn name(&self) -> &'static str;
    fn copy(&self, text: &str) -> Result<()>;
}

/// Native clipboard via arboard.
pub struct NativeClipboard;

impl CopyBackend for NativeClipboard {
    fn name(&self) -> &'static str {
        "native"
    }

    fn copy(&self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to copy text to clipboard")?;
        Ok(())
    }
}

/// Commands tried by the legacy fallback, in order.
const COPY_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
];

/// Legacy fallback: pipe the text into an external clipboard command.
pub struct CommandClipboard;

impl CopyBackend for CommandClipboard {
    fn name(&self) -> &'static str {
        "command"
    }

    fn copy(&self, text: &str) -> Result<()> {
        let mut last_err = None;
        for (command, args) in COPY_COMMANDS {
            match pipe_to_command(command, args, text) {
                Ok(()) => return Ok(()),
                Err(err) => last_err = Some(err),
            }
        }
        Err(last_err.unwrap_or_else(|| anyhow::anyhow!("No clipboard command available")))
    }
}

fn pipe_to_command(command: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(command)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to spawn {command}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {command}"))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for {command}"))?;
    if !status.success() {
        anyhow::bail!("{command} exited with non-zero status");
    }
    Ok(())
}

/// Try each backend in the given order until one succeeds.
///
/// Empty text is a no-op: nothing to copy, no backend is invoked. A backend
/// failure falls through to the next backend silently (verbose-logged);
/// only exhausting every backend is an error.
pub fn copy_with_backends(text: &str, backends: &[&dyn CopyBackend]) -> Result<(), CopyError> {
    if text.is_empty() {
        return Ok(());
    }

    let mut last_err = None;
    for backend in backends {
        match backend.copy(text) {
            Ok(()) => return Ok(()),
            Err(err) => {
                crate::verbose!("Clipboard backend '{}' failed: {err:#}", backend.name());
                last_err = Some(err);
            }
        }
    }

    Err(CopyError {
        source: last_err.unwrap_or_else(|| anyhow::anyhow!("No clipboard backend configured")),
    })
}

/// Copy with the default two-tier strategy: native first, command fallback
/// second.
pub fn copy_to_clipboard(text: &str) -> Result<(), CopyError> {
    copy_with_backends(text, &[&NativeClipboard, &CommandClipboard])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingBackend {
        name: &'static str,
        fail: bool,
        copied: RefCell<Vec<String>>,
    }

    impl RecordingBackend {
        fn new(name: &'static str, fail: bool) -> Self {
            Self {
                name,
                fail,
                copied: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.copied.borrow().len()
        }
    }

    impl CopyBackend for RecordingBackend {
        fn name(&self) -> &'static str {
            self.name
        }

        fn copy(&self, text: &str) -> Result<()> {
            self.copied.borrow_mut().push(text.to_string());
            if self.fail {
                anyhow::bail!("{} backend rejected the write", self.name);
            }
            Ok(())
        }
    }

    #[test]
    fn primary_success_skips_fallback() {
        let primary = RecordingBackend::new("primary", false);
        let fallback = RecordingBackend::new("fallback", false);

        copy_with_backends("abc", &[&primary, &fallback]).unwrap();

        assert_eq!(primary.copied.borrow().as_slice(), ["abc"]);
        assert_eq!(fallback.calls(), 0);
    }

    #[test]
    fn primary_failure_falls_through_to_fallback() {
        let primary = RecordingBackend::new("primary", true);
        let fallback = RecordingBackend::new("fallback", false);

        copy_with_backends("abc", &[&primary, &fallback]).unwrap();

        assert_eq!(primary.calls(), 1);
        assert_eq!(fallback.copied.borrow().as_slice(), ["abc"]);
    }

    #[test]
    fn all_backends_failing_is_a_copy_error() {
        let primary = RecordingBackend::new("primary", true);
        let fallback = RecordingBackend::new("fallback", true);

        let err = copy_with_backends("abc", &[&primary, &fallback]).unwrap_err();
        assert_eq!(err.to_string(), "copy failed");
    }

    #[test]
    fn empty_text_is_a_no_op() {
        let primary = RecordingBackend::new("primary", false);

        copy_with_backends("", &[&primary]).unwrap();

        assert_eq!(primary.calls(), 0);
    }
}
