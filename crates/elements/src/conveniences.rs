//! Attribute conveniences
//!
//! Shorthand for the attributes that show up on almost every page.

use weft_html::{Html, HtmlAttributes};

/// Convenience methods available on every node.
pub trait AttributeExt: Html + Sized {
    /// Sets the `alt` attribute for accessibility descriptions.
    fn alt<'a>(self, value: impl Into<Option<&'a str>>) -> HtmlAttributes<Self> {
        self.attribute("alt", value)
    }

    /// Sets the `href` attribute for hyperlinks.
    fn href<'a>(self, value: impl Into<Option<&'a str>>) -> HtmlAttributes<Self> {
        self.attribute("href", value)
    }

    /// Sets the `rel` attribute describing a link relationship.
    fn rel<'a>(self, value: impl Into<Option<&'a str>>) -> HtmlAttributes<Self> {
        self.attribute("rel", value)
    }

    /// Sets the `src` attribute for embedded resources.
    fn src<'a>(self, value: impl Into<Option<&'a str>>) -> HtmlAttributes<Self> {
        self.attribute("src", value)
    }
}

impl<T: Html> AttributeExt for T {}
