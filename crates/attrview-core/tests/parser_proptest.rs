//! Property-based tests for attribute parsing and filtering

use attrview_core::attribute::collate;
use attrview_core::parser::{parse, RESERVED_ATTRIBUTE};
use attrview_core::Attribute;
use proptest::prelude::*;
use std::cmp::Ordering;

/// Generate attribute names, including the reserved one now and then
fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => "[a-zA-Z][a-zA-Z0-9_-]{0,12}",
        1 => Just(RESERVED_ATTRIBUTE.to_string()),
    ]
}

/// Generate values, including empty and disabled ones
fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => "[a-zA-Z0-9][a-zA-Z0-9 ().-]{0,20}",
        1 => Just("!".to_string()),
        1 => Just(String::new()),
    ]
}

/// Generate one document line
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => (name_strategy(), value_strategy()).prop_map(|(n, v)| format!(":{}: {}", n, v)),
        1 => "[a-z-]{1,12}".prop_map(|c| format!("ifdef::{}[]", c)),
        1 => Just("endif::[]".to_string()),
        1 => "[a-zA-Z :]{0,20}".prop_map(|c| format!("// {}", c)),
        1 => "[a-zA-Z ]{0,20}",
    ]
}

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(line_strategy(), 0..40).prop_map(|lines| lines.join("\n"))
}

fn all_attributes(result: &attrview_core::ParseResult) -> Vec<&Attribute> {
    result
        .unconditional
        .iter()
        .chain(result.conditionals.iter().flat_map(|(_, attrs)| attrs.iter()))
        .collect()
}

fn is_sorted(attrs: &[Attribute]) -> bool {
    attrs
        .windows(2)
        .all(|pair| collate(&pair[0].name, &pair[1].name) != Ordering::Greater)
}

proptest! {
    #[test]
    fn test_parse_is_deterministic(doc in document_strategy()) {
        prop_assert_eq!(parse(&doc), parse(&doc));
    }

    #[test]
    fn test_lists_are_sorted(doc in document_strategy()) {
        let result = parse(&doc);
        prop_assert!(is_sorted(&result.unconditional));
        for (_, attrs) in result.conditionals.iter() {
            prop_assert!(is_sorted(attrs));
        }
    }

    #[test]
    fn test_rejected_values_never_appear(doc in document_strategy()) {
        let result = parse(&doc);
        for attr in all_attributes(&result) {
            prop_assert!(!attr.value.is_empty());
            prop_assert_ne!(attr.value.as_str(), "!");
            prop_assert_ne!(attr.name.as_str(), RESERVED_ATTRIBUTE);
        }
    }

    #[test]
    fn test_filter_ignores_case(doc in document_strategy(), needle in "[a-zA-Z]{0,3}") {
        let result = parse(&doc);
        let upper = result.view(&needle.to_uppercase());
        let lower = result.view(&needle.to_lowercase());
        prop_assert_eq!(upper, lower);
    }

    #[test]
    fn test_filter_is_idempotent(doc in document_strategy(), needle in "[a-z]{0,3}") {
        let result = parse(&doc);
        let once = result.view(&needle);
        let hits: Vec<Attribute> = once.attributes().into_iter().cloned().collect();
        let filter = attrview_core::Filter::new(&needle);
        prop_assert!(hits.iter().all(|attr| filter.matches(attr)));
        prop_assert_eq!(result.view(&needle), once);
    }

    #[test]
    fn test_groups_are_never_empty(doc in document_strategy(), needle in "[a-z]{0,2}") {
        let result = parse(&doc);
        for (_, attrs) in result.view(&needle).groups() {
            prop_assert!(!attrs.is_empty());
        }
    }
}
