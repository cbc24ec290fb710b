//! Plain text output

use super::condition_label;
use crate::filter::{RenderItem, RenderedView};

/// Text generator: one `name = value` line per attribute
pub struct TextGenerator;

impl TextGenerator {
    pub fn generate(view: &RenderedView<'_>) -> String {
        let mut out = String::new();

        for item in &view.items {
            match item {
                RenderItem::Attribute(attribute) => {
                    out.push_str(&format!("{} = {}\n", attribute.name, attribute.value));
                }
                RenderItem::Group {
                    condition,
                    attributes,
                } => {
                    out.push('\n');
                    out.push_str(&condition_label(condition));
                    out.push('\n');
                    for attribute in attributes {
                        out.push_str(&format!("  {} = {}\n", attribute.name, attribute.value));
                    }
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_generate_groups() {
        let result = parse("ifdef::openshift-enterprise[]\n:x: 1\nendif::\n:y: 2\n");
        let text = TextGenerator::generate(&result.view(""));
        assert_eq!(text, "y = 2\n\nCondition: openshift-enterprise\n  x = 1\n");
    }

    #[test]
    fn test_generate_empty_view() {
        let result = parse("");
        assert_eq!(TextGenerator::generate(&result.view("")), "");
    }
}
