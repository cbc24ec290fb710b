//! attrview-core - AsciiDoc attributes at a glance
//!
//! Core library for attrview: extracts `:name: value` declarations from an
//! AsciiDoc attributes file, groups them by `ifdef` condition and filters
//! them for display.
//!
//! # Example
//!
//! ```
//! use attrview_core::{parse, RenderItem};
//!
//! let result = parse("ifdef::openshift-enterprise[]\n:x: 1\nendif::\n:y: 2\n");
//! assert_eq!(result.unconditional[0].name, "y");
//!
//! let view = result.view("y");
//! assert_eq!(view.items.len(), 1);
//! assert!(matches!(view.items[0], RenderItem::Attribute(_)));
//! ```

pub mod attribute;
pub mod error;
pub mod filter;
pub mod parser;
pub mod render;

// Re-export main types and functions
pub use attribute::{Attribute, ConditionalGroups, ParseResult};
pub use error::AttrError;
pub use filter::{render_view, Filter, RenderItem, RenderedView};
pub use parser::parse;
pub use render::{HtmlGenerator, JsonGenerator, TextGenerator, FAILURE_MESSAGE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
