//! Attribute directive parser
//!
//! Extracts attribute declarations from an AsciiDoc attributes file such as
//! OpenShift's `common-attributes.adoc`.
//!
//! # Recognized lines
//!
//! - Comments: `// ...` (ignored)
//! - Condition start: `ifdef::openshift-enterprise[]`
//! - Condition end: `endif::openshift-enterprise[]` (any `endif::` line)
//! - Attributes: `:product-title: OpenShift Container Platform`
//!
//! An attribute line needs at least one whitespace character after the
//! closing colon: `:foo:bar` is skipped rather than read as `foo = bar`, and a
//! bare `:toc:` declares nothing.
//!
//! Everything else is skipped. Conditions never nest: a second `ifdef` replaces
//! the active condition.
//!
//! # Example
//!
//! ```
//! use attrview_core::parser;
//!
//! let result = parser::parse(":foo: bar\n:baz: !\n");
//! assert_eq!(result.unconditional.len(), 1);
//! assert_eq!(result.unconditional[0].name, "foo");
//! ```

use regex::Regex;
use std::sync::OnceLock;
use tracing::trace;

use crate::attribute::{sort_attributes, Attribute, ConditionalGroups, ParseResult};

/// Value meaning "explicitly unset"
pub const DISABLE_SENTINEL: &str = "!";

/// Document classification attribute; never a display value
pub const RESERVED_ATTRIBUTE: &str = "_mod-docs-content-type";

/// Line comment prefix
const COMMENT_PREFIX: &str = "//";

/// Condition end prefix
const ENDIF_PREFIX: &str = "endif::";

/// Which scope new attributes land in
#[derive(Debug, Clone, PartialEq, Eq)]
enum ScopeState {
    /// Outside any `ifdef` block
    Unconditional,
    /// Inside `ifdef::NAME[]`
    InCondition(String),
}

/// Classification of a single source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Comment,
    EnterCondition(&'a str),
    ExitCondition,
    /// Syntactic attribute declaration; may still be rejected
    Attribute { name: &'a str, value: &'a str },
    Other,
}

/// Classify a line. Rules are checked in a fixed order and the first match
/// wins.
pub fn classify(line: &str) -> LineKind<'_> {
    static IFDEF_RE: OnceLock<Regex> = OnceLock::new();
    static ATTR_RE: OnceLock<Regex> = OnceLock::new();

    let ifdef_re = IFDEF_RE.get_or_init(|| Regex::new(r"^ifdef::([^\[\]]+)\[\]").unwrap());
    let attr_re = ATTR_RE.get_or_init(|| Regex::new(r"^:([^:]+):\s+(.*)$").unwrap());

    if line.starts_with(COMMENT_PREFIX) {
        return LineKind::Comment;
    }

    if let Some(caps) = ifdef_re.captures(line) {
        if let Some(name) = caps.get(1) {
            return LineKind::EnterCondition(name.as_str());
        }
    }

    if line.starts_with(ENDIF_PREFIX) {
        return LineKind::ExitCondition;
    }

    if let Some(caps) = attr_re.captures(line) {
        if let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) {
            return LineKind::Attribute {
                name: name.as_str(),
                value: value.as_str().trim(),
            };
        }
    }

    LineKind::Other
}

/// Whether a candidate declaration should appear in the output
fn accepts(name: &str, value: &str) -> bool {
    !value.is_empty() && value != DISABLE_SENTINEL && name != RESERVED_ATTRIBUTE
}

/// Single-pass attribute collector
struct Parser {
    state: ScopeState,
    unconditional: Vec<Attribute>,
    conditionals: ConditionalGroups,
}

impl Parser {
    fn new() -> Self {
        Self {
            state: ScopeState::Unconditional,
            unconditional: Vec::new(),
            conditionals: ConditionalGroups::new(),
        }
    }

    fn parse(mut self, text: &str) -> ParseResult {
        for (index, line) in text.lines().enumerate() {
            self.process_line(index + 1, line);
        }

        sort_attributes(&mut self.unconditional);
        self.conditionals.sort();

        ParseResult {
            unconditional: self.unconditional,
            conditionals: self.conditionals,
        }
    }

    fn process_line(&mut self, line_no: usize, line: &str) {
        match classify(line) {
            LineKind::Comment | LineKind::Other => {}
            LineKind::EnterCondition(name) => {
                if let ScopeState::InCondition(previous) = &self.state {
                    trace!(line_no, previous = %previous, next = name, "condition replaced");
                }
                self.state = ScopeState::InCondition(name.to_string());
            }
            LineKind::ExitCondition => {
                self.state = ScopeState::Unconditional;
            }
            LineKind::Attribute { name, value } => {
                if !accepts(name, value) {
                    trace!(line_no, name, "attribute skipped");
                    return;
                }
                let attribute = Attribute::new(name, value);
                match &self.state {
                    ScopeState::Unconditional => self.unconditional.push(attribute),
                    ScopeState::InCondition(condition) => {
                        self.conditionals.push(condition, attribute)
                    }
                }
            }
        }
    }
}

/// Parse an attributes document
///
/// Never fails: lines that match no rule are skipped.
pub fn parse(text: &str) -> ParseResult {
    Parser::new().parse(text)
}
