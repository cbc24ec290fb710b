//! JSON output
//!
//! Shape:
//!
//! ```json
//! {
//!   "attributes": [{ "name": "y", "value": "2" }],
//!   "conditionals": [
//!     { "condition": "openshift-enterprise", "attributes": [{ "name": "x", "value": "1" }] }
//!   ]
//! }
//! ```

use serde::Serialize;

use super::FAILURE_MESSAGE;
use crate::attribute::Attribute;
use crate::error::Result;
use crate::filter::RenderedView;

#[derive(Serialize)]
struct JsonGroup<'a> {
    condition: &'a str,
    attributes: &'a [&'a Attribute],
}

#[derive(Serialize)]
struct JsonView<'a> {
    attributes: Vec<&'a Attribute>,
    conditionals: Vec<JsonGroup<'a>>,
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    error: &'a str,
}

/// JSON report generator
pub struct JsonGenerator;

impl JsonGenerator {
    pub fn generate(view: &RenderedView<'_>) -> Result<String> {
        let groups = view.groups();
        let report = JsonView {
            attributes: view.unconditional(),
            conditionals: groups
                .iter()
                .map(|&(condition, attributes)| JsonGroup {
                    condition,
                    attributes,
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }

    /// Document emitted in place of a view when loading failed
    pub fn generate_failure() -> Result<String> {
        Ok(serde_json::to_string_pretty(&JsonFailure {
            error: FAILURE_MESSAGE,
        })?)
    }
}
