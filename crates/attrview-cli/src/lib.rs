//! attrview CLI - Command-line interface library
//!
//! This library provides the CLI functionality for attrview, including:
//! - List: Print attributes matching a filter as text, JSON or HTML
//! - Browse: Filter and copy attributes in a terminal UI
//! - Copy: Put a single attribute value on the clipboard
//!
//! # Library Usage
//!
//! ```ignore
//! use attrview_cli::{list_command, FileSource, OutputFormat};
//!
//! let source = FileSource::new("_attributes/common-attributes.adoc");
//! let output = list_command(&source, "rosa", OutputFormat::Text)?;
//! print!("{}", output.text());
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Print every attribute from the OpenShift docs
//! attrview list
//!
//! # Filter and emit JSON
//! attrview list --filter rosa --format json
//!
//! # Interactive browser over a local checkout
//! attrview --source _attributes/common-attributes.adoc browse
//!
//! # Copy a value from a conditional block
//! attrview copy product-title --condition openshift-origin
//! ```

pub mod app;
pub mod clipboard;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod session;
pub mod tui;

// Re-export main entry point and types
pub use app::{browse_command, copy_command, list_command, run_cli, CommandOutput};
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, Osc52Clipboard};
pub use config::{OutputFormat, Settings, DEFAULT_SOURCE};
pub use fetch::{DocumentSource, FetchError, FileSource, HttpSource};
pub use session::{LoadState, Session, SessionView, COPY_ACKNOWLEDGMENT};
