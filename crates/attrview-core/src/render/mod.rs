//! Output generators for a filtered attribute view
//!
//! Supports multiple output formats:
//! - Plain text for terminals and pipes
//! - JSON for scripting
//! - HTML matching the attribute browser page markup
//!
//! # Example
//!
//! ```
//! use attrview_core::parser::parse;
//! use attrview_core::render::TextGenerator;
//!
//! let result = parse(":foo: bar\n");
//! let text = TextGenerator::generate(&result.view(""));
//! assert_eq!(text, "foo = bar\n");
//! ```

mod html;
mod json;
mod text;

pub use html::HtmlGenerator;
pub use json::JsonGenerator;
pub use text::TextGenerator;

/// The only thing a user sees when the document could not be loaded
pub const FAILURE_MESSAGE: &str = "All is lost!";

/// Label shown above each conditional group
pub fn condition_label(condition: &str) -> String {
    format!("Condition: {}", condition)
}
