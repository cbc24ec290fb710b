//! Filtering of parsed attributes into a display view
//!
//! A [`RenderedView`] borrows from a [`ParseResult`], so re-filtering on every
//! keystroke only walks the cached lists and never touches the source text.

use crate::attribute::{Attribute, ParseResult};

/// Case-insensitive substring filter over attribute names and values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    needle: String,
}

impl Filter {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    /// True when the filter accepts every attribute
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, attribute: &Attribute) -> bool {
        self.is_empty()
            || attribute.name.to_lowercase().contains(&self.needle)
            || attribute.value.to_lowercase().contains(&self.needle)
    }
}

/// One entry of the rendered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderItem<'a> {
    /// Unconditional attribute, shown without a wrapper
    Attribute(&'a Attribute),
    /// Attributes under one condition that passed the filter; never empty
    Group {
        condition: &'a str,
        attributes: Vec<&'a Attribute>,
    },
}

impl<'a> RenderItem<'a> {
    /// Attributes carried by this item, in display order
    pub fn attributes(&self) -> Vec<&'a Attribute> {
        match self {
            RenderItem::Attribute(attribute) => vec![*attribute],
            RenderItem::Group { attributes, .. } => attributes.clone(),
        }
    }
}

/// Filtered, display-ordered view of a [`ParseResult`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedView<'a> {
    pub items: Vec<RenderItem<'a>>,
}

impl<'a> RenderedView<'a> {
    /// Number of attributes in the view, across all groups
    pub fn len(&self) -> usize {
        self.items
            .iter()
            .map(|item| match item {
                RenderItem::Attribute(_) => 1,
                RenderItem::Group { attributes, .. } => attributes.len(),
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn group_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, RenderItem::Group { .. }))
            .count()
    }

    /// Every visible attribute flattened in display order
    pub fn attributes(&self) -> Vec<&'a Attribute> {
        self.items.iter().flat_map(|item| item.attributes()).collect()
    }

    /// Unconditional attributes in the view
    pub fn unconditional(&self) -> Vec<&'a Attribute> {
        self.items
            .iter()
            .filter_map(|item| match item {
                RenderItem::Attribute(attribute) => Some(*attribute),
                RenderItem::Group { .. } => None,
            })
            .collect()
    }

    /// Visible groups as `(condition, attributes)`
    pub fn groups(&self) -> Vec<(&'a str, &[&'a Attribute])> {
        self.items
            .iter()
            .filter_map(|item| match item {
                RenderItem::Group {
                    condition,
                    attributes,
                } => Some((*condition, attributes.as_slice())),
                RenderItem::Attribute(_) => None,
            })
            .collect()
    }
}

/// Build the display view for `result` under `filter`
pub fn render_view<'a>(result: &'a ParseResult, filter: &Filter) -> RenderedView<'a> {
    let mut items: Vec<RenderItem<'a>> = result
        .unconditional
        .iter()
        .filter(|attribute| filter.matches(attribute))
        .map(RenderItem::Attribute)
        .collect();

    for (condition, attributes) in result.conditionals.iter() {
        let hits: Vec<&Attribute> = attributes
            .iter()
            .filter(|attribute| filter.matches(attribute))
            .collect();
        if hits.is_empty() {
            continue;
        }
        items.push(RenderItem::Group {
            condition,
            attributes: hits,
        });
    }

    RenderedView { items }
}

impl ParseResult {
    /// Filter with free text; an empty string shows everything
    pub fn view(&self, filter: &str) -> RenderedView<'_> {
        render_view(self, &Filter::new(filter))
    }
}
