//! Loaded attributes and the fetch -> parse -> render pipeline
//!
//! A [`Session`] owns the parsed document for the lifetime of one run. It is
//! built once by [`Session::load`]; every later render only reads it.

use attrview_core::render::{HtmlGenerator, JsonGenerator, TextGenerator, FAILURE_MESSAGE};
use attrview_core::{parse, AttrError, ParseResult, RenderedView};
use tracing::{error, info};

use crate::clipboard::Clipboard;
use crate::config::OutputFormat;
use crate::fetch::DocumentSource;

/// Acknowledgment shown after a successful copy
pub const COPY_ACKNOWLEDGMENT: &str = "Copied!";

/// Outcome of loading the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Ready(ParseResult),
    Failed,
}

/// Session state for one loaded document
#[derive(Debug, Clone)]
pub struct Session {
    location: String,
    state: LoadState,
}

impl Session {
    /// Fetch and parse the document. Any failure is logged and leaves the
    /// session in [`LoadState::Failed`]; there is no retry.
    pub fn load(source: &dyn DocumentSource) -> Self {
        let location = source.location();
        match source.fetch() {
            Ok(text) => Self::from_text(location, &text),
            Err(e) => {
                error!(location = %location, error = %e, "could not load attributes document");
                Self {
                    location,
                    state: LoadState::Failed,
                }
            }
        }
    }

    /// Build a session from already retrieved text
    pub fn from_text(location: impl Into<String>, text: &str) -> Self {
        let location = location.into();
        let result = parse(text);
        info!(
            location = %location,
            attributes = result.attribute_count(),
            conditions = result.conditionals.len(),
            "parsed attributes document"
        );
        Self {
            location,
            state: LoadState::Ready(result),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Parsed document, unless loading failed
    pub fn result(&self) -> Option<&ParseResult> {
        match &self.state {
            LoadState::Ready(result) => Some(result),
            LoadState::Failed => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.result().is_some()
    }

    /// Filter the cached document
    pub fn render(&self, filter: &str) -> SessionView<'_> {
        match &self.state {
            LoadState::Ready(result) => SessionView::Items(result.view(filter)),
            LoadState::Failed => SessionView::Failed,
        }
    }

    /// Copy `value` to the clipboard, returning the acknowledgment on
    /// success. Failures are logged and produce no acknowledgment.
    pub fn copy(&self, value: &str, clipboard: &mut dyn Clipboard) -> Option<&'static str> {
        match clipboard.set_text(value) {
            Ok(()) => Some(COPY_ACKNOWLEDGMENT),
            Err(e) => {
                error!(error = %e, "Copy failed");
                None
            }
        }
    }
}

/// What the content area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionView<'a> {
    Items(RenderedView<'a>),
    Failed,
}

impl SessionView<'_> {
    /// Render the view in the requested format
    pub fn to_output(&self, format: OutputFormat) -> Result<String, AttrError> {
        match (self, format) {
            (SessionView::Items(view), OutputFormat::Text) => Ok(TextGenerator::generate(view)),
            (SessionView::Items(view), OutputFormat::Json) => JsonGenerator::generate(view),
            (SessionView::Items(view), OutputFormat::Html) => Ok(HtmlGenerator::generate(view)),
            (SessionView::Failed, OutputFormat::Text) => Ok(format!("{}\n", FAILURE_MESSAGE)),
            (SessionView::Failed, OutputFormat::Json) => JsonGenerator::generate_failure(),
            (SessionView::Failed, OutputFormat::Html) => Ok(HtmlGenerator::generate_failure()),
        }
    }
}
