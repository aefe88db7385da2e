//! HTML elements
//!
//! An element owns its tag name and its children by value. When it opens
//! it consumes the attributes staged in the printer, then renders its
//! children against a fresh attribute scope, so attributes never leak
//! downward or across siblings.

use crate::node::Html;
use crate::printer::Printer;

/// An HTML element with typed children.
pub struct HtmlElement<C> {
    tag: String,
    content: C,
}

/// Create an element with the given tag name and content.
///
/// This is the single construction contract the tag catalogue builds on;
/// custom tag names pass through unvalidated.
pub fn tag<C: Html>(name: impl Into<String>, content: C) -> HtmlElement<C> {
    HtmlElement {
        tag: name.into(),
        content,
    }
}

impl<C> HtmlElement<C> {
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl<C: Html> Html for HtmlElement<C> {
    fn render(&self, printer: &mut Printer) {
        let block = !is_inline_element(&self.tag);
        if block {
            printer.push_newline_and_indent();
        }

        printer.push_bytes(b"<");
        printer.push_str(&self.tag);

        // Consuming the staged attributes doubles as the fresh scope for
        // the children; the set is put back once this element is done.
        let attributes = std::mem::take(&mut printer.attributes);
        for (name, value) in &attributes {
            printer.push_bytes(b" ");
            printer.push_str(name);
            if !value.is_empty() {
                printer.push_bytes(b"=\"");
                printer.push_attribute_value(value);
                printer.push_bytes(b"\"");
            }
        }
        printer.push_bytes(b">");

        if !is_void_element(&self.tag) {
            printer.indent_deeper();
            self.content.render(printer);
            printer.indent_shallower();
            if block {
                printer.push_newline_and_indent();
            }
            printer.push_bytes(b"</");
            printer.push_str(&self.tag);
            printer.push_bytes(b">");
        }

        printer.attributes = attributes;
    }
}

/// Whether `name` is a void element: no closing tag, never any children.
pub fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "area" | "base" | "br" | "col" | "command" | "embed" | "hr" | "img"
        | "input" | "keygen" | "link" | "meta" | "param" | "source" | "track"
        | "wbr"
    )
}

/// Inline-level elements stay in flow in pretty output; block-level
/// elements get a fresh indented line.
fn is_inline_element(name: &str) -> bool {
    matches!(
        name,
        "a" | "abbr" | "acronym" | "b" | "bdo" | "big" | "br" | "button"
        | "cite" | "code" | "dfn" | "em" | "i" | "img" | "input" | "kbd"
        | "label" | "map" | "object" | "output" | "q" | "samp" | "select"
        | "small" | "span" | "strong" | "sub" | "sup" | "textarea" | "time"
        | "tt" | "var"
    )
}
