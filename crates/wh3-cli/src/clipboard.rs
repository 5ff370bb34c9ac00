//! Clipboard adapter
//!
//! Each copy is an independent transaction against the OS clipboard and is
//! never retried; a failure surfaces as `Wh3Error::Clipboard`.

use wh3_core::{Result, Wh3Error};

/// Destination for console commands
pub trait Clipboard {
    /// Replace the clipboard contents with `text`
    ///
    /// # Errors
    ///
    /// Returns `Wh3Error::Clipboard` when the platform clipboard cannot be
    /// reached or refuses the write.
    fn copy(&mut self, text: &str) -> Result<()>;

    /// Whether `copy` actually reaches a clipboard
    fn is_live(&self) -> bool {
        true
    }
}

/// The platform clipboard, opened per copy
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        tracing::debug!(op = "clipboard_copy", len = text.len(), "copying command");
        let mut clipboard = arboard::Clipboard::new().map_err(clipboard_error)?;
        clipboard.set_text(text).map_err(clipboard_error)
    }
}

/// Used with `--no-clipboard`: commands are only echoed
#[derive(Debug, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn copy(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }

    fn is_live(&self) -> bool {
        false
    }
}

fn clipboard_error(err: arboard::Error) -> Wh3Error {
    Wh3Error::Clipboard {
        message: err.to_string(),
    }
}

#[cfg(test)]
pub mod fake {
    use super::*;

    /// Records every copy instead of touching the OS
    #[derive(Debug, Default)]
    pub struct RecordingClipboard {
        pub copies: Vec<String>,
        pub fail: bool,
    }

    impl RecordingClipboard {
        pub fn failing() -> Self {
            Self {
                copies: Vec::new(),
                fail: true,
            }
        }

        pub fn last(&self) -> Option<&str> {
            self.copies.last().map(String::as_str)
        }
    }

    impl Clipboard for RecordingClipboard {
        fn copy(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(Wh3Error::Clipboard {
                    message: "no display".to_string(),
                });
            }
            self.copies.push(text.to_string());
            Ok(())
        }
    }
}
