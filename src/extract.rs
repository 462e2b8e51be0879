//! Ordered extraction chains over a parsed HTML document.
//!
//! Each field of a scraped problem is located by a [`Chain`]: a list of
//! [`Strategy`] steps tried in order. The first step that matches an element
//! wins, even when that element's text is empty; later steps are never
//! evaluated.

use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Text of the first element matching a CSS selector.
    Css(&'static str),
    /// Text of the first `tag` element whose class attribute contains every
    /// part in order, ignoring case.
    ClassPattern {
        tag: &'static str,
        parts: &'static [&'static str],
    },
    /// Text of the next `tag` element (document order) after the first `tag`
    /// element whose own string contains `needle`, ignoring case.
    AfterHeading {
        tag: &'static str,
        needle: &'static str,
    },
    /// A fixed string.
    Fixed(&'static str),
}

impl Strategy {
    pub fn apply(&self, document: &Html) -> Option<String> {
        match self {
            Strategy::Css(css) => {
                let selector = Selector::parse(css).ok()?;
                document.select(&selector).next().map(element_text)
            }
            Strategy::ClassPattern { tag, parts } => {
                let selector = Selector::parse(tag).ok()?;
                document
                    .select(&selector)
                    .find(|el| {
                        el.value()
                            .attr("class")
                            .is_some_and(|class| contains_in_order(class, parts))
                    })
                    .map(element_text)
            }
            Strategy::AfterHeading { tag, needle } => {
                let selector = Selector::parse(tag).ok()?;
                let needle = needle.to_lowercase();
                let mut elements = document.select(&selector);
                elements.by_ref().find(|el| {
                    own_string(*el).is_some_and(|s| s.to_lowercase().contains(&needle))
                })?;
                elements.next().map(element_text)
            }
            Strategy::Fixed(text) => Some(text.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Chain {
    field: &'static str,
    steps: Vec<Strategy>,
}

impl Chain {
    pub fn new(field: &'static str, steps: Vec<Strategy>) -> Self {
        Self { field, steps }
    }

    pub fn steps(&self) -> &[Strategy] {
        &self.steps
    }

    /// Returns the first hit, or `None` when every step misses.
    pub fn run(&self, document: &Html) -> Option<String> {
        self.steps.iter().enumerate().find_map(|(idx, step)| {
            let text = step.apply(document)?;
            debug!(field = self.field, step = idx, ?step, "extraction hit");
            Some(text)
        })
    }
}

/// Concatenated descendant text, trimmed.
pub fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// The text of an element holding a single text node, looking through
/// single-child wrappers such as `<div><strong>Example 1:</strong></div>`.
fn own_string(el: ElementRef<'_>) -> Option<String> {
    let mut children = el.children();
    let only = children.next()?;
    if children.next().is_some() {
        return None;
    }

    match only.value() {
        Node::Text(text) => Some(text.to_string()),
        Node::Element(_) => ElementRef::wrap(only).and_then(own_string),
        _ => None,
    }
}

fn contains_in_order(haystack: &str, parts: &[&str]) -> bool {
    let haystack = haystack.to_lowercase();
    let mut rest = haystack.as_str();
    for part in parts {
        let part = part.to_lowercase();
        match rest.find(part.as_str()) {
            Some(idx) => rest = &rest[idx + part.len()..],
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_should_return_first_hit() {
        let document = Html::parse_document(
            "<html><head><title>Page Title</title></head><body><h1>Heading</h1></body></html>",
        );
        let chain = Chain::new(
            "title",
            vec![
                Strategy::Css("h1"),
                Strategy::Css("title"),
                Strategy::Fixed("default"),
            ],
        );

        assert_eq!(chain.run(&document).as_deref(), Some("Heading"));
    }

    #[test]
    fn matched_blank_element_should_still_hit() {
        let document = Html::parse_document(
            "<html><head><title>Page Title</title></head><body><h1>   </h1></body></html>",
        );
        let chain = Chain::new("title", vec![Strategy::Css("h1"), Strategy::Css("title")]);

        assert_eq!(chain.run(&document).as_deref(), Some(""));
    }

    #[test]
    fn chain_without_fixed_step_may_miss() {
        let document = Html::parse_document("<html><body><p>nothing</p></body></html>");
        let chain = Chain::new("example", vec![Strategy::Css("pre")]);

        assert_eq!(chain.run(&document), None);
    }

    #[test]
    fn invalid_selector_should_be_a_miss() {
        let document = Html::parse_document("<html><body><h1>x</h1></body></html>");

        assert_eq!(Strategy::Css("h1[").apply(&document), None);
    }

    #[test]
    fn class_pattern_should_match_in_order_ignoring_case() {
        assert!(contains_in_order("Problems_Problem_Content__Z9", &["problem", "content"]));
        assert!(contains_in_order("problem-box main-content", &["problem", "content"]));
        assert!(!contains_in_order("content-problem", &["problem", "content"]));
        assert!(!contains_in_order("sidebar", &["problem", "content"]));
    }

    #[test]
    fn own_string_should_look_through_single_child_wrappers() {
        let document = Html::parse_document(
            "<html><body><div><strong>Example 1:</strong></div><div>a<b>b</b></div></body></html>",
        );
        let selector = Selector::parse("div").unwrap();
        let divs: Vec<_> = document.select(&selector).collect();

        assert_eq!(own_string(divs[0]).as_deref(), Some("Example 1:"));
        assert_eq!(own_string(divs[1]), None);
    }
}
