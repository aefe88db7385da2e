//! Inline styles
//!
//! Per-node style assertions that are collected into a deduplicated,
//! media-query-grouped stylesheet during rendering. A style applied to a
//! node becomes a generated CSS class on that node's `class` attribute
//! plus one rule in the printer's style map.

use smallvec::SmallVec;

use crate::node::Html;
use crate::printer::Printer;

/// A CSS media query, kept as an opaque string.
///
/// The engine never parses the query; it is only a grouping key for the
/// assembled stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaQuery(String);

impl MediaQuery {
    /// Create a media query from its raw CSS text.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw CSS media query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Devices in dark mode.
    pub fn dark() -> Self {
        Self::new("(prefers-color-scheme: dark)")
    }

    /// Print media.
    pub fn print() -> Self {
        Self::new("print")
    }
}

/// A CSS pseudo-class or pseudo-element suffix, kept as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pseudo(String);

impl Pseudo {
    /// Create a pseudo-selector from its raw CSS text (including colons).
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw selector suffix text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn active() -> Self {
        Self::new(":active")
    }

    pub fn after() -> Self {
        Self::new("::after")
    }

    pub fn before() -> Self {
        Self::new("::before")
    }

    pub fn checked() -> Self {
        Self::new(":checked")
    }

    pub fn disabled() -> Self {
        Self::new(":disabled")
    }

    pub fn empty() -> Self {
        Self::new(":empty")
    }

    pub fn enabled() -> Self {
        Self::new(":enabled")
    }

    pub fn first_child() -> Self {
        Self::new(":first-child")
    }

    pub fn first_of_type() -> Self {
        Self::new(":first-of-type")
    }

    pub fn focus() -> Self {
        Self::new(":focus")
    }

    pub fn hover() -> Self {
        Self::new(":hover")
    }

    pub fn in_range() -> Self {
        Self::new(":in-range")
    }

    pub fn invalid() -> Self {
        Self::new(":invalid")
    }

    pub fn lang() -> Self {
        Self::new(":lang")
    }

    pub fn last_child() -> Self {
        Self::new(":last-child")
    }

    pub fn last_of_type() -> Self {
        Self::new(":last-of-type")
    }

    pub fn link() -> Self {
        Self::new(":link")
    }

    pub fn only_child() -> Self {
        Self::new(":only-child")
    }

    pub fn only_of_type() -> Self {
        Self::new(":only-of-type")
    }

    pub fn optional() -> Self {
        Self::new(":optional")
    }

    pub fn out_of_range() -> Self {
        Self::new(":out-of-range")
    }

    pub fn read_only() -> Self {
        Self::new(":read-only")
    }

    pub fn read_write() -> Self {
        Self::new(":read-write")
    }

    pub fn required() -> Self {
        Self::new(":required")
    }

    pub fn root() -> Self {
        Self::new(":root")
    }

    pub fn target() -> Self {
        Self::new(":target")
    }

    pub fn valid() -> Self {
        Self::new(":valid")
    }

    pub fn visited() -> Self {
        Self::new(":visited")
    }

    /// `:is(...)` with the given selector list.
    pub fn is(selectors: &str) -> Self {
        Self::new(format!(":is({})", selectors))
    }

    /// `:not(...)` of another pseudo-selector.
    pub fn not(other: Self) -> Self {
        Self::new(format!(":not({})", other.0))
    }

    /// `:nth-child(...)` with the given argument, e.g. `"2"` or `"2n+1"`.
    pub fn nth_child(n: &str) -> Self {
        Self::new(format!(":nth-child({})", n))
    }

    pub fn nth_last_child(n: &str) -> Self {
        Self::new(format!(":nth-last-child({})", n))
    }

    pub fn nth_of_type(n: &str) -> Self {
        Self::new(format!(":nth-of-type({})", n))
    }

    pub fn nth_last_of_type(n: &str) -> Self {
        Self::new(format!(":nth-last-of-type({})", n))
    }
}

/// Pseudo-selectors compose by concatenation, e.g.
/// `Pseudo::first_child() + Pseudo::hover()`.
impl std::ops::Add for Pseudo {
    type Output = Pseudo;

    fn add(mut self, rhs: Pseudo) -> Pseudo {
        self.0.push_str(&rhs.0);
        self
    }
}

/// A single style declaration scoped by optional media query, selector
/// prefix, and pseudo-selector.
///
/// Identity is structural over all five fields: two styles are the same
/// style (and share one generated class) only if every field matches.
/// Property and value strings are passed through verbatim, never validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Style {
    property: String,
    value: String,
    media: Option<MediaQuery>,
    pre_selector: Option<String>,
    pseudo: Option<Pseudo>,
}

impl Style {
    /// Create a global (non-media-scoped) style declaration.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            media: None,
            pre_selector: None,
            pseudo: None,
        }
    }

    /// Scope this declaration to a media query.
    pub fn media(mut self, media: MediaQuery) -> Self {
        self.media = Some(media);
        self
    }

    /// Prefix the generated selector, e.g. `"nav"` for `nav .c0`.
    pub fn pre_selector(mut self, pre: impl Into<String>) -> Self {
        self.pre_selector = Some(pre.into());
        self
    }

    /// Suffix the generated selector with a pseudo-selector.
    pub fn pseudo(mut self, pseudo: Pseudo) -> Self {
        self.pseudo = Some(pseudo);
        self
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn media_query(&self) -> Option<&MediaQuery> {
        self.media.as_ref()
    }

    /// The bytes the hashed naming strategy digests: value, then media,
    /// pre-selector, and pseudo text, absent fields contributing nothing.
    pub(crate) fn identity_key(&self) -> String {
        let mut key = String::with_capacity(
            self.value.len()
                + self.media.as_ref().map_or(0, |m| m.0.len())
                + self.pre_selector.as_ref().map_or(0, String::len)
                + self.pseudo.as_ref().map_or(0, |p| p.0.len()),
        );
        key.push_str(&self.value);
        if let Some(media) = &self.media {
            key.push_str(&media.0);
        }
        if let Some(pre) = &self.pre_selector {
            key.push_str(pre);
        }
        if let Some(pseudo) = &self.pseudo {
            key.push_str(&pseudo.0);
        }
        key
    }

    /// The selector for this style once a class name has been generated:
    /// `<pre_selector> .<class><pseudo>`.
    pub(crate) fn selector(&self, class_name: &str) -> String {
        let mut selector = String::with_capacity(class_name.len() + 16);
        if let Some(pre) = &self.pre_selector {
            selector.push_str(pre);
            selector.push(' ');
        }
        selector.push('.');
        selector.push_str(class_name);
        if let Some(pseudo) = &self.pseudo {
            selector.push_str(&pseudo.0);
        }
        selector
    }
}

/// Wrapper node that applies one or more style declarations to its content.
///
/// Built with [`Html::inline_style`] or [`Html::styled`]; chained calls
/// accumulate into the same wrapper. During rendering each style is
/// registered with the session's class-name registry, its rule is inserted
/// into the printer's style map (first write wins per selector and media
/// group), and the generated class is appended to the active `class`
/// attribute for the duration of the content's render.
pub struct InlineStyle<C> {
    content: C,
    styles: SmallVec<[Style; 2]>,
}

impl<C: Html> InlineStyle<C> {
    pub(crate) fn wrap(content: C, property: String, value: Option<&str>) -> Self {
        let mut styles = SmallVec::new();
        if let Some(value) = value {
            styles.push(Style::new(property, value));
        }
        Self { content, styles }
    }

    pub(crate) fn wrap_style(content: C, style: Style) -> Self {
        let mut styles = SmallVec::new();
        styles.push(style);
        Self { content, styles }
    }

    /// Add another declaration to this wrapper. A `None` value is skipped,
    /// which allows conditional styling without changing the node type.
    pub fn inline_style<'a>(
        mut self,
        property: impl Into<String>,
        value: impl Into<Option<&'a str>>,
    ) -> Self {
        if let Some(value) = value.into() {
            self.styles.push(Style::new(property.into(), value));
        }
        self
    }

    /// Add a fully specified declaration to this wrapper.
    pub fn styled(mut self, style: Style) -> Self {
        self.styles.push(style);
        self
    }
}

impl<C: Html> Html for InlineStyle<C> {
    fn render(&self, printer: &mut Printer) {
        let previous_class = printer.attributes.get("class").cloned();

        for style in &self.styles {
            let class_name = printer.class_names.class_name(style);
            let selector = style.selector(&class_name);

            let group = printer.styles.entry(style.media.clone()).or_default();
            if !group.contains_key(&selector) {
                let mut rule = String::with_capacity(
                    style.property.len() + style.value.len() + 1,
                );
                rule.push_str(&style.property);
                rule.push(':');
                rule.push_str(&style.value);
                group.insert(selector, rule);
            }

            match printer.attributes.entry(String::from("class")) {
                indexmap::map::Entry::Occupied(mut entry) => {
                    let classes = entry.get_mut();
                    classes.push(' ');
                    classes.push_str(&class_name);
                }
                indexmap::map::Entry::Vacant(entry) => {
                    entry.insert(class_name);
                }
            }
        }

        self.content.render(printer);

        // Restore the class attribute that was active before this wrapper.
        match previous_class {
            Some(value) => {
                printer.attributes.insert(String::from("class"), value);
            }
            None => {
                printer.attributes.shift_remove("class");
            }
        }
    }
}
