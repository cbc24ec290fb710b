//! HTML output
//!
//! Produces a self-contained page whose attribute markup mirrors the browser
//! page: `.attribute` rows with a copy button carrying `data-value`, and
//! `.conditional-section` wrappers for each condition.

use super::{condition_label, FAILURE_MESSAGE};
use crate::attribute::Attribute;
use crate::filter::{RenderItem, RenderedView};

/// HTML page generator
pub struct HtmlGenerator;

impl HtmlGenerator {
    /// Generate a complete HTML page for `view`
    pub fn generate(view: &RenderedView<'_>) -> String {
        Self::page(&Self::format_items(view))
    }

    /// Page showing only the failure message
    pub fn generate_failure() -> String {
        Self::page(&html_escape(FAILURE_MESSAGE))
    }

    /// Attribute markup only, without the page chrome
    pub fn format_items(view: &RenderedView<'_>) -> String {
        let mut html = String::new();

        for item in &view.items {
            match item {
                RenderItem::Attribute(attribute) => html.push_str(&Self::format_attribute(attribute)),
                RenderItem::Group {
                    condition,
                    attributes,
                } => {
                    html.push_str(&format!(
                        r#"
        <div class="conditional-section">
            <div class="attr-name">{label}</div>"#,
                        label = html_escape(&condition_label(condition))
                    ));
                    for attribute in attributes {
                        html.push_str(&Self::format_attribute(attribute));
                    }
                    html.push_str(
                        r#"
        </div>"#,
                    );
                }
            }
        }

        html
    }

    fn format_attribute(attribute: &Attribute) -> String {
        format!(
            r#"
        <div class="attribute">
            <div>
                <div class="attr-name">{name}</div>
                <div class="attr-value">{value}</div>
            </div>
            <button data-value="{value}">Copy</button>
        </div>"#,
            name = html_escape(&attribute.name),
            value = html_escape(&attribute.value)
        )
    }

    fn page(body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>AsciiDoc Attributes</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            max-width: 960px;
            margin: 0 auto;
            padding: 2rem;
            background: #f8f9fa;
        }}
        .attribute {{
            display: flex;
            justify-content: space-between;
            align-items: center;
            background: white;
            padding: 0.75rem 1rem;
            margin: 0.5rem 0;
            border-radius: 4px;
            box-shadow: 0 1px 2px rgba(0,0,0,0.1);
        }}
        .attr-name {{
            font-family: 'SF Mono', Monaco, 'Courier New', monospace;
            font-weight: bold;
        }}
        .attr-value {{ color: #495057; }}
        .conditional-section {{
            border-left: 4px solid #17a2b8;
            padding-left: 1rem;
            margin-top: 1.5rem;
        }}
    </style>
</head>
<body>
    <div id="attributes-container">{body}
    </div>
</body>
</html>"#,
            body = body
        )
    }
}

/// Basic HTML escaping for attribute text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
