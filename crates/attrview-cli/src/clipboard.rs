//! Clipboard access
//!
//! Copying goes through the terminal with the OSC 52 escape sequence, which
//! most terminal emulators (and tmux with `set-clipboard on`) forward to the
//! system clipboard, including over SSH.

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Errors raised by a clipboard backend
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Writing the escape sequence failed
    #[error("Clipboard write failed: {0}")]
    Io(#[from] io::Error),

    /// Backend refused the request
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Something that can receive copied text
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard that writes OSC 52 sequences to a terminal
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl Osc52Clipboard<io::Stdout> {
    /// Clipboard bound to the process's stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Build the escape sequence that sets the clipboard selection to `text`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.out.write_all(osc52_sequence(text).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// In-memory clipboard, mostly for tests
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
