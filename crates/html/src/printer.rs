//! Print state
//!
//! The printer is the single mutable accumulator threaded through one
//! render pass: output bytes, the attribute set staged for the element
//! currently being rendered, the collected style rules, and the session's
//! class-name registry. It lives for exactly one render call.

use indexmap::IndexMap;
use log::trace;
use rustc_hash::FxBuildHasher;

use crate::class_names::ClassNames;
use crate::error::RenderResult;
use crate::node::Html;
use crate::style::MediaQuery;

/// Insertion-ordered attribute map with unique keys.
pub type AttrMap = IndexMap<String, String, FxBuildHasher>;

/// Insertion-ordered selector-to-declaration map for one media group.
pub type RuleMap = IndexMap<String, String, FxBuildHasher>;

/// Collected rules grouped by media query; `None` is the global group.
pub type StyleMap = IndexMap<Option<MediaQuery>, RuleMap, FxBuildHasher>;

/// Formatting policy for one render pass.
#[derive(Debug, Clone)]
pub struct Config {
    /// Append ` !important` to every emitted declaration.
    pub force_important: bool,
    /// One level of indentation in pretty output.
    pub indentation: String,
    /// Line separator in pretty output.
    pub newline: String,
}

impl Config {
    /// No whitespace at all; the default.
    pub fn compact() -> Self {
        Self {
            force_important: false,
            indentation: String::new(),
            newline: String::new(),
        }
    }

    /// Two-space indentation and newlines, for humans.
    pub fn pretty() -> Self {
        Self {
            force_important: false,
            indentation: String::from("  "),
            newline: String::from("\n"),
        }
    }

    /// Single-space indentation, newlines, and forced `!important` on
    /// every declaration, for mail clients that strip stylesheets.
    pub fn email() -> Self {
        Self {
            force_important: true,
            indentation: String::from(" "),
            newline: String::from("\n"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::compact()
    }
}

/// The mutable print state for one render pass.
///
/// `attributes` holds the attributes staged for the element currently
/// being rendered, not the whole document; elements consume it when they
/// open and give children a fresh scope. `bytes` is append-only output.
/// `styles` collects one declaration per generated selector, grouped by
/// media query, first write wins.
pub struct Printer {
    pub attributes: AttrMap,
    pub bytes: Vec<u8>,
    pub styles: StyleMap,
    pub(crate) config: Config,
    pub(crate) indent: String,
    pub(crate) class_names: ClassNames,
}

impl Printer {
    /// A fresh printer with its own class-name registry.
    pub fn new(config: Config) -> Self {
        Self::with_class_names(config, ClassNames::default())
    }

    /// A fresh printer using a caller-supplied registry, for hashed
    /// naming or cross-document class reuse.
    pub fn with_class_names(config: Config, class_names: ClassNames) -> Self {
        Self {
            attributes: AttrMap::default(),
            bytes: Vec::new(),
            styles: StyleMap::default(),
            config,
            indent: String::new(),
            class_names,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Append raw bytes to the output.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Append a string verbatim.
    pub fn push_str(&mut self, text: &str) {
        self.bytes.extend_from_slice(text.as_bytes());
    }

    /// Append text content, escaping `&`, `<`, and `>`.
    pub fn push_text(&mut self, text: &str) {
        for &byte in text.as_bytes() {
            match byte {
                b'&' => self.bytes.extend_from_slice(b"&amp;"),
                b'<' => self.bytes.extend_from_slice(b"&lt;"),
                b'>' => self.bytes.extend_from_slice(b"&gt;"),
                _ => self.bytes.push(byte),
            }
        }
    }

    /// Append an attribute value, escaping `&` and `"`.
    pub fn push_attribute_value(&mut self, value: &str) {
        for &byte in value.as_bytes() {
            match byte {
                b'&' => self.bytes.extend_from_slice(b"&amp;"),
                b'"' => self.bytes.extend_from_slice(b"&quot;"),
                _ => self.bytes.push(byte),
            }
        }
    }

    /// Append the configured newline followed by the current indentation.
    pub fn push_newline_and_indent(&mut self) {
        self.bytes.extend_from_slice(self.config.newline.as_bytes());
        self.bytes.extend_from_slice(self.indent.as_bytes());
    }

    pub(crate) fn indent_deeper(&mut self) {
        self.indent.push_str(&self.config.indentation);
    }

    pub(crate) fn indent_shallower(&mut self) {
        let depth = self.indent.len().saturating_sub(self.config.indentation.len());
        self.indent.truncate(depth);
    }

    /// A printer for an isolated sub-render sharing this configuration
    /// and, by handoff, this session's class-name registry. Pair with
    /// [`Printer::adopt`].
    pub(crate) fn fork(&mut self) -> Printer {
        Printer {
            attributes: AttrMap::default(),
            bytes: Vec::new(),
            styles: StyleMap::default(),
            config: self.config.clone(),
            indent: String::new(),
            class_names: std::mem::take(&mut self.class_names),
        }
    }

    /// Take back the registry and collected styles from a forked printer.
    pub(crate) fn adopt(&mut self, forked: Printer) {
        self.class_names = forked.class_names;
        for (media, rules) in forked.styles {
            let group = self.styles.entry(media).or_default();
            for (selector, rule) in rules {
                group.entry(selector).or_insert(rule);
            }
        }
    }

    /// Assemble the stylesheet text from the collected rules.
    ///
    /// The global group is emitted first; the remaining media groups keep
    /// their registration order, each wrapped in `@media <query>{ ... }`.
    /// Computed from the style map at read time, not maintained
    /// incrementally.
    pub fn stylesheet(&self) -> String {
        trace!("assembling stylesheet from {} media groups", self.styles.len());
        let mut sheet = String::new();
        sheet.push_str(&self.config.newline);

        let globals = self.styles.iter().filter(|(media, _)| media.is_none());
        let scoped = self.styles.iter().filter(|(media, _)| media.is_some());
        for (media, rules) in globals.chain(scoped) {
            let indentation = match media {
                Some(media) => {
                    sheet.push_str("@media ");
                    sheet.push_str(media.as_str());
                    sheet.push('{');
                    sheet.push_str(&self.config.newline);
                    self.config.indentation.as_str()
                }
                None => "",
            };
            for (selector, rule) in rules {
                sheet.push_str(indentation);
                sheet.push_str(selector);
                sheet.push('{');
                sheet.push_str(rule);
                if self.config.force_important {
                    sheet.push_str(" !important");
                }
                sheet.push('}');
                sheet.push_str(&self.config.newline);
            }
            if media.is_some() {
                sheet.push('}');
                sheet.push_str(&self.config.newline);
            }
        }
        sheet
    }

    /// Consume the printer, keeping only the serialized output.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Consume the printer, keeping the registry for a later render.
    pub fn into_class_names(self) -> ClassNames {
        self.class_names
    }
}

/// Render a node to bytes with the default (compact) configuration.
pub fn render<H: Html + ?Sized>(html: &H) -> Vec<u8> {
    render_with(html, Config::default())
}

/// Render a node to bytes with the given configuration.
pub fn render_with<H: Html + ?Sized>(html: &H, config: Config) -> Vec<u8> {
    let mut printer = Printer::new(config);
    html.render(&mut printer);
    printer.into_bytes()
}

/// Render a node to a string with the default (compact) configuration.
pub fn render_to_string<H: Html + ?Sized>(html: &H) -> RenderResult<String> {
    render_to_string_with(html, Config::default())
}

/// Render a node to a string with the given configuration.
///
/// Fails only if a raw node injected bytes that are not valid UTF-8.
pub fn render_to_string_with<H: Html + ?Sized>(html: &H, config: Config) -> RenderResult<String> {
    Ok(String::from_utf8(render_with(html, config))?)
}
