//! Attribute wrappers
//!
//! A wrapper that merges attributes into the enclosing element's staged
//! set for the duration of its content's render, then restores the set
//! that was active before. `class` accumulates across wrappers with a
//! single-space separator; any other key keeps the value written by the
//! outermost (last-applied) wrapper.

use indexmap::map::Entry;

use crate::node::Html;
use crate::printer::{AttrMap, Printer};

/// Wrapper node carrying attributes for the enclosing element.
///
/// Built with [`Html::attribute`]; chained calls accumulate into the same
/// wrapper, with a later call overwriting an earlier one for the same key
/// (`class` excepted, which accumulates).
pub struct HtmlAttributes<C> {
    content: C,
    attributes: AttrMap,
}

impl<C: Html> HtmlAttributes<C> {
    pub(crate) fn wrap(content: C, name: String, value: Option<&str>) -> Self {
        let mut attributes = AttrMap::default();
        if let Some(value) = value {
            attributes.insert(name, value.to_string());
        }
        Self {
            content,
            attributes,
        }
    }

    /// Add another attribute to this wrapper. A `None` value leaves the
    /// wrapper unchanged, which allows conditional attributes without
    /// changing the node type.
    pub fn attribute<'a>(
        mut self,
        name: impl Into<String>,
        value: impl Into<Option<&'a str>>,
    ) -> Self {
        if let Some(value) = value.into() {
            let name = name.into();
            if name == "class" {
                append_class(&mut self.attributes, value);
            } else {
                self.attributes.insert(name, value.to_string());
            }
        }
        self
    }
}

impl<C: Html> Html for HtmlAttributes<C> {
    fn render(&self, printer: &mut Printer) {
        let previous = printer.attributes.clone();

        for (name, value) in &self.attributes {
            if name == "class" {
                append_class(&mut printer.attributes, value);
            } else if !printer.attributes.contains_key(name) {
                // An existing key was staged by an outer wrapper, which
                // was applied later; it wins.
                printer.attributes.insert(name.clone(), value.clone());
            }
        }

        self.content.render(printer);
        printer.attributes = previous;
    }
}

fn append_class(attributes: &mut AttrMap, value: &str) {
    match attributes.entry(String::from("class")) {
        Entry::Occupied(mut entry) => {
            let classes = entry.get_mut();
            classes.push(' ');
            classes.push_str(value);
        }
        Entry::Vacant(entry) => {
            entry.insert(value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::tag;
    use crate::node::{text, HtmlEmpty};
    use crate::printer::render_to_string;

    #[test]
    fn test_single_attribute() {
        let node = tag("div", text("x")).attribute("id", "main");
        assert_eq!(
            render_to_string(&node).unwrap(),
            "<div id=\"main\">x</div>"
        );
    }

    #[test]
    fn test_class_values_accumulate() {
        let node = tag("div", HtmlEmpty)
            .attribute("class", "a")
            .attribute("class", "b");
        assert_eq!(render_to_string(&node).unwrap(), "<div class=\"a b\"></div>");
    }

    #[test]
    fn test_later_call_wins_for_non_class_keys() {
        let node = tag("div", HtmlEmpty)
            .attribute("id", "first")
            .attribute("id", "second");
        assert_eq!(render_to_string(&node).unwrap(), "<div id=\"second\"></div>");
    }

    #[test]
    fn test_none_value_is_transparent() {
        let node = tag("a", text("link"))
            .attribute("href", "/")
            .attribute("target", None);
        assert_eq!(
            render_to_string(&node).unwrap(),
            "<a href=\"/\">link</a>"
        );
    }

    #[test]
    fn test_empty_value_renders_bare_attribute() {
        let node = tag("input", HtmlEmpty).attribute("disabled", "");
        assert_eq!(render_to_string(&node).unwrap(), "<input disabled>");
    }

    #[test]
    fn test_attributes_scoped_to_wrapped_element_only() {
        let node = (
            tag("div", HtmlEmpty).attribute("id", "a"),
            tag("div", HtmlEmpty),
        );
        assert_eq!(
            render_to_string(&node).unwrap(),
            "<div id=\"a\"></div><div></div>"
        );
    }

    #[test]
    fn test_class_from_style_wrapper_comes_before_attribute_class() {
        // The style wrapper is applied last, so it renders first and its
        // generated class leads the list.
        let node = tag("div", HtmlEmpty)
            .attribute("class", "container")
            .inline_style("color", "red");
        assert_eq!(
            render_to_string(&node).unwrap(),
            "<div class=\"color-0 container\"></div>"
        );
    }

    #[test]
    fn test_attribute_order_follows_wrapper_order() {
        // Styles stage `class` before the attribute wrapper stages `href`.
        let node = tag("a", text("Styled link"))
            .attribute("href", "https://example.com")
            .inline_style("color", "#007bff");
        assert_eq!(
            render_to_string(&node).unwrap(),
            "<a class=\"color-0\" href=\"https://example.com\">Styled link</a>"
        );
    }
}
