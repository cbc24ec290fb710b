//! Attribute data model
//!
//! A parsed attributes document is a [`ParseResult`]: the attributes declared
//! outside any conditional block, plus one list per `ifdef` condition.

use std::cmp::Ordering;

use feruca::{Collator, Locale, Tailoring};
use serde::Serialize;

/// A single `:name: value` declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Attribute name, without the surrounding colons
    pub name: String,
    /// Trimmed value; never empty and never the `!` sentinel
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Root-locale collator with non-ignorable punctuation, matching the order
/// of a default ICU collator.
fn collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}

/// Compare attribute names the way a reader expects to see them listed.
///
/// Punctuation sorts before digits and digits before letters; a lowercase
/// name precedes its uppercase twin. Identical strings compare equal.
pub fn collate(a: &str, b: &str) -> Ordering {
    collator().collate(a, b)
}

/// Stable in-place sort of an attribute list by name
pub fn sort_attributes(attributes: &mut [Attribute]) {
    let mut collator = collator();
    attributes.sort_by(|a, b| collator.collate(a.name.as_str(), b.name.as_str()));
}

/// Attributes declared inside `ifdef::NAME[]` blocks, keyed by condition.
///
/// Conditions iterate in the order they were first seen in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionalGroups {
    groups: Vec<(String, Vec<Attribute>)>,
}

impl ConditionalGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute to a condition, creating the condition on first use
    pub fn push(&mut self, condition: &str, attribute: Attribute) {
        match self.groups.iter_mut().find(|(name, _)| name == condition) {
            Some((_, attributes)) => attributes.push(attribute),
            None => self
                .groups
                .push((condition.to_string(), vec![attribute])),
        }
    }

    /// Attributes recorded for a condition
    pub fn get(&self, condition: &str) -> Option<&[Attribute]> {
        self.groups
            .iter()
            .find(|(name, _)| name == condition)
            .map(|(_, attributes)| attributes.as_slice())
    }

    /// Iterate `(condition, attributes)` in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Attribute])> {
        self.groups
            .iter()
            .map(|(name, attributes)| (name.as_str(), attributes.as_slice()))
    }

    /// Condition names in first-seen order
    pub fn conditions(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub(crate) fn sort(&mut self) {
        for (_, attributes) in &mut self.groups {
            sort_attributes(attributes);
        }
    }
}

/// Everything extracted from one attributes document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// Attributes outside any condition, sorted by name
    pub unconditional: Vec<Attribute>,
    /// Per-condition attributes, each list sorted by name
    pub conditionals: ConditionalGroups,
}

impl ParseResult {
    /// Total number of attributes across all scopes
    pub fn attribute_count(&self) -> usize {
        self.unconditional.len()
            + self
                .conditionals
                .iter()
                .map(|(_, attributes)| attributes.len())
                .sum::<usize>()
    }

    /// Look up the first attribute with `name`, in the unconditional scope or
    /// in `condition` when one is given.
    pub fn find(&self, name: &str, condition: Option<&str>) -> Option<&Attribute> {
        let scope = match condition {
            Some(condition) => self.conditionals.get(condition)?,
            None => self.unconditional.as_slice(),
        };
        scope.iter().find(|attr| attr.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collate_folds_case() {
        assert_eq!(collate("Product", "product-title"), Ordering::Less);
        assert_eq!(collate("abc", "ABD"), Ordering::Less);
    }

    #[test]
    fn test_collate_tie_break_is_total() {
        assert_eq!(collate("ocp", "OCP"), Ordering::Less);
        assert_eq!(collate("OCP", "ocp"), Ordering::Greater);
        assert_eq!(collate("ocp", "ocp"), Ordering::Equal);
    }

    #[test]
    fn test_sort_matches_locale_order() {
        let mut attrs: Vec<Attribute> = ["a1", "a_b", "a-b", "OCP", "ocp", "Ab", "ab"]
            .into_iter()
            .map(|name| Attribute::new(name, "v"))
            .collect();
        sort_attributes(&mut attrs);

        let names: Vec<&str> = attrs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a_b", "a-b", "a1", "ab", "Ab", "ocp", "OCP"]);
    }

    #[test]
    fn test_sort_is_stable_for_duplicates() {
        let mut attrs = vec![
            Attribute::new("b", "2"),
            Attribute::new("a", "first"),
            Attribute::new("a", "second"),
        ];
        sort_attributes(&mut attrs);
        assert_eq!(attrs[0].value, "first");
        assert_eq!(attrs[1].value, "second");
        assert_eq!(attrs[2].name, "b");
    }

    #[test]
    fn test_conditional_groups_keep_first_seen_order() {
        let mut groups = ConditionalGroups::new();
        groups.push("openshift-origin", Attribute::new("x", "1"));
        groups.push("openshift-enterprise", Attribute::new("y", "2"));
        groups.push("openshift-origin", Attribute::new("z", "3"));

        let order: Vec<&str> = groups.conditions().collect();
        assert_eq!(order, vec!["openshift-origin", "openshift-enterprise"]);
        assert_eq!(groups.get("openshift-origin").map(|a| a.len()), Some(2));
        assert!(groups.get("missing").is_none());
    }

    #[test]
    fn test_find_respects_scope() {
        let mut result = ParseResult::default();
        result.unconditional.push(Attribute::new("product", "OKD"));
        result
            .conditionals
            .push("openshift-enterprise", Attribute::new("product", "OCP"));

        assert_eq!(result.find("product", None).map(|a| a.value.as_str()), Some("OKD"));
        assert_eq!(
            result
                .find("product", Some("openshift-enterprise"))
                .map(|a| a.value.as_str()),
            Some("OCP")
        );
        assert!(result.find("product", Some("missing")).is_none());
        assert_eq!(result.attribute_count(), 2);
    }
}
