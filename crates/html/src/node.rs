//! Node rendering protocol
//!
//! Every piece of a document tree implements [`Html`]: one operation that
//! contributes to the shared print state. Nodes are immutable values;
//! wrapping a node in an attribute or style wrapper builds a new value,
//! never mutates an existing one.

use crate::attributes::HtmlAttributes;
use crate::printer::Printer;
use crate::style::{InlineStyle, Style};

/// A renderable piece of an HTML document.
///
/// The only observable effect of [`render`](Html::render) is mutation of
/// the printer: appending bytes, staging attributes, registering styles.
/// Rendering never fails and never blocks; a render pass is a synchronous
/// traversal bounded by tree size.
pub trait Html {
    /// Serialize this node into the printer.
    fn render(&self, printer: &mut Printer);

    /// Wrap this node so that `name="value"` is merged into the enclosing
    /// element's attributes. A `None` value makes the wrapper transparent;
    /// an empty string renders as a bare (boolean) attribute.
    fn attribute<'a>(
        self,
        name: impl Into<String>,
        value: impl Into<Option<&'a str>>,
    ) -> HtmlAttributes<Self>
    where
        Self: Sized,
    {
        HtmlAttributes::wrap(self, name.into(), value.into())
    }

    /// Wrap this node with a style declaration; the declaration becomes a
    /// generated class on the enclosing element and one stylesheet rule.
    /// A `None` value makes the wrapper transparent.
    fn inline_style<'a>(
        self,
        property: impl Into<String>,
        value: impl Into<Option<&'a str>>,
    ) -> InlineStyle<Self>
    where
        Self: Sized,
    {
        InlineStyle::wrap(self, property.into(), value.into())
    }

    /// Wrap this node with a fully specified style declaration (media
    /// query, selector prefix, pseudo-selector).
    fn styled(self, style: Style) -> InlineStyle<Self>
    where
        Self: Sized,
    {
        InlineStyle::wrap_style(self, style)
    }
}

/// Escaped text content.
pub struct HtmlText(String);

/// Create a text node. `&`, `<`, and `>` are escaped when rendered.
pub fn text(content: impl Into<String>) -> HtmlText {
    HtmlText(content.into())
}

impl Html for HtmlText {
    fn render(&self, printer: &mut Printer) {
        printer.push_text(&self.0);
    }
}

/// Verbatim, unescaped output. The caller is responsible for validity.
pub struct HtmlRaw(Vec<u8>);

/// Create a raw node whose content is emitted byte-for-byte.
pub fn raw(content: impl Into<String>) -> HtmlRaw {
    HtmlRaw(content.into().into_bytes())
}

impl HtmlRaw {
    /// Raw output from bytes that may not be valid UTF-8.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Html for HtmlRaw {
    fn render(&self, printer: &mut Printer) {
        printer.push_bytes(&self.0);
    }
}

/// A node that renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEmpty;

impl Html for HtmlEmpty {
    fn render(&self, _printer: &mut Printer) {}
}

impl<T: Html + ?Sized> Html for &T {
    fn render(&self, printer: &mut Printer) {
        (**self).render(printer);
    }
}

impl<T: Html + ?Sized> Html for Box<T> {
    fn render(&self, printer: &mut Printer) {
        (**self).render(printer);
    }
}

impl<T: Html> Html for Option<T> {
    fn render(&self, printer: &mut Printer) {
        if let Some(inner) = self {
            inner.render(printer);
        }
    }
}

impl<T: Html> Html for Vec<T> {
    fn render(&self, printer: &mut Printer) {
        for child in self {
            child.render(printer);
        }
    }
}

/// String slices render as escaped text.
impl Html for str {
    fn render(&self, printer: &mut Printer) {
        printer.push_text(self);
    }
}

impl Html for String {
    fn render(&self, printer: &mut Printer) {
        printer.push_text(self);
    }
}

/// Tuples render their members in order, which is how sibling sequences
/// are composed.
macro_rules! impl_html_for_tuple {
    ($($ty:ident),+) => {
        impl<$($ty: Html),+> Html for ($($ty,)+) {
            fn render(&self, printer: &mut Printer) {
                #[allow(non_snake_case)]
                let ($($ty,)+) = self;
                $($ty.render(printer);)+
            }
        }
    };
}

impl_html_for_tuple!(A);
impl_html_for_tuple!(A, B);
impl_html_for_tuple!(A, B, C);
impl_html_for_tuple!(A, B, C, D);
impl_html_for_tuple!(A, B, C, D, E);
impl_html_for_tuple!(A, B, C, D, E, F);
impl_html_for_tuple!(A, B, C, D, E, F, G);
impl_html_for_tuple!(A, B, C, D, E, F, G, H);
impl_html_for_tuple!(A, B, C, D, E, F, G, H, I);
impl_html_for_tuple!(A, B, C, D, E, F, G, H, I, J);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::{render_to_string, render_to_string_with, Config};

    #[test]
    fn test_text_is_escaped() {
        let rendered = render_to_string(&text("a < b && c > d")).unwrap();
        assert_eq!(rendered, "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn test_text_leaves_quotes_alone() {
        let rendered = render_to_string(&text("say \"hi\" & 'bye'")).unwrap();
        assert_eq!(rendered, "say \"hi\" &amp; 'bye'");
    }

    #[test]
    fn test_raw_is_verbatim() {
        let rendered = render_to_string(&raw("<b>bold & proud</b>")).unwrap();
        assert_eq!(rendered, "<b>bold & proud</b>");
    }

    #[test]
    fn test_empty_renders_nothing() {
        let rendered = render_to_string(&HtmlEmpty).unwrap();
        assert_eq!(rendered, "");
    }

    #[test]
    fn test_str_renders_as_text() {
        let rendered = render_to_string(&"1 < 2").unwrap();
        assert_eq!(rendered, "1 &lt; 2");
    }

    #[test]
    fn test_tuples_render_in_order() {
        let rendered = render_to_string(&(text("a"), text("b"), text("c"))).unwrap();
        assert_eq!(rendered, "abc");
    }

    #[test]
    fn test_option_renders_some_only() {
        let some: Option<HtmlText> = Some(text("present"));
        let none: Option<HtmlText> = None;
        assert_eq!(render_to_string(&(some, none)).unwrap(), "present");
    }

    #[test]
    fn test_vec_renders_all_members() {
        let items = vec![text("one"), text("two")];
        assert_eq!(render_to_string(&items).unwrap(), "onetwo");
    }

    #[test]
    fn test_unicode_text_passes_through() {
        let rendered =
            render_to_string_with(&text("© 2025 — ünïcode"), Config::default()).unwrap();
        assert_eq!(rendered, "© 2025 — ünïcode");
    }
}
