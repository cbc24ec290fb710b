//! TDD tests for the attribute parser and filter
//!
//! Each scenario feeds a small attributes document through `parse` and checks
//! the resulting lists and the filtered view.

use attrview_core::parser::{self, RESERVED_ATTRIBUTE};
use attrview_core::{Attribute, RenderItem};

/// Disabled attributes are dropped
///
/// Input:
/// ```asciidoc
/// :foo: bar
/// :baz: !
/// ```
#[test]
fn test_parse_disable_sentinel() {
    let result = parser::parse(":foo: bar\n:baz: !\n");

    assert_eq!(result.unconditional, vec![Attribute::new("foo", "bar")]);
    assert!(result.conditionals.is_empty());
}

/// Attributes inside an `ifdef` block belong to that condition
#[test]
fn test_parse_conditional_block() {
    let result = parser::parse("ifdef::openshift-enterprise[]\n:x: 1\nendif::\n:y: 2\n");

    assert_eq!(result.unconditional, vec![Attribute::new("y", "2")]);
    assert_eq!(result.conditionals.len(), 1);
    assert_eq!(
        result.conditionals.get("openshift-enterprise"),
        Some(&[Attribute::new("x", "1")][..])
    );
}

/// Filtering hides condition groups without hits
#[test]
fn test_filter_omits_empty_condition() {
    let result = parser::parse("ifdef::openshift-enterprise[]\n:x: 1\nendif::\n:y: 2\n");
    let view = result.view("y");

    assert_eq!(view.items, vec![RenderItem::Attribute(&result.unconditional[0])]);
    assert_eq!(view.group_count(), 0);
}

/// A realistic slice of common-attributes.adoc
#[test]
fn test_parse_common_attributes_excerpt() {
    let input = r#"// Standard document attributes to be used in the documentation
//
// The following are shared by all documents
:toc:
:toclevels: 4
:experimental:
:_mod-docs-content-type: SNIPPET
//
// Product content attributes, that is, substitution variables in the files.
//
:product-title: OpenShift Container Platform
:product-version: 4.17
:op-system-first: Red Hat Enterprise Linux CoreOS (RHCOS)
:op-system: RHCOS
ifdef::openshift-origin[]
:op-system-first: Fedora CoreOS (FCOS)
:op-system: FCOS
:product-title: OKD
endif::[]
ifdef::openshift-enterprise[]
:op-system-base-full: Red Hat Enterprise Linux (RHEL)
endif::[]
:ai-first: artificial intelligence (AI)
"#;

    let result = parser::parse(input);

    let names: Vec<&str> = result
        .unconditional
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "ai-first",
            "op-system",
            "op-system-first",
            "product-title",
            "product-version",
            "toclevels",
        ]
    );
    assert!(result.find(RESERVED_ATTRIBUTE, None).is_none());

    let conditions: Vec<&str> = result.conditionals.conditions().collect();
    assert_eq!(conditions, vec!["openshift-origin", "openshift-enterprise"]);

    let origin: Vec<&str> = result
        .conditionals
        .get("openshift-origin")
        .unwrap()
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(origin, vec!["op-system", "op-system-first", "product-title"]);
}

/// Duplicate names in one scope are both kept
#[test]
fn test_parse_keeps_duplicates() {
    let result = parser::parse(":a: first\n:a: second\n");

    assert_eq!(
        result.unconditional,
        vec![Attribute::new("a", "first"), Attribute::new("a", "second")]
    );
    assert_eq!(result.view("").len(), 2);
}

/// The reserved classification attribute never shows up, in any scope
#[test]
fn test_reserved_attribute_excluded_in_condition() {
    let input = format!("ifdef::x[]\n:{}: ASSEMBLY\n:kept: yes\nendif::[]\n", RESERVED_ATTRIBUTE);
    let result = parser::parse(&input);

    assert_eq!(result.conditionals.get("x"), Some(&[Attribute::new("kept", "yes")][..]));
}

/// Comment lines never change the active condition
#[test]
fn test_commented_directives_are_ignored() {
    let result = parser::parse("ifdef::a[]\n// endif::a[]\n:x: 1\n//ifdef::b[]\n:y: 2\nendif::a[]\n");

    assert!(result.unconditional.is_empty());
    assert_eq!(result.conditionals.get("a").map(|a| a.len()), Some(2));
    assert!(result.conditionals.get("b").is_none());
}

/// Case-folded ordering
#[test]
fn test_sort_is_case_insensitive() {
    let result = parser::parse(":beta: 2\n:Alpha: 1\n:gamma: 3\n");
    let names: Vec<&str> = result
        .unconditional
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, vec!["Alpha", "beta", "gamma"]);
}

/// Punctuation before digits before letters, lowercase before uppercase
#[test]
fn test_sort_follows_locale_collation() {
    let result = parser::parse(":a1: v\n:a_b: v\n:a-b: v\n:OCP: v\n:ocp: v\n:Ab: v\n:ab: v\n");
    let names: Vec<&str> = result
        .unconditional
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, vec!["a_b", "a-b", "a1", "ab", "Ab", "ocp", "OCP"]);
}
