//! Weft HTML rendering engine
//!
//! Builds HTML as a tree of typed, immutable nodes and serializes it to
//! bytes in one pass, collecting per-node style declarations into a
//! deduplicated, media-query-grouped stylesheet along the way.
//!
//! ```
//! use weft_html::{document, render_to_string, tag, text, Html};
//!
//! let page = document(
//!     tag("title", text("Hello")),
//!     tag("div", text("Hello, world!")).inline_style("color", "red"),
//! );
//! let html = render_to_string(&page).unwrap();
//! assert!(html.contains("color:red"));
//! ```

mod attributes;
mod class_names;
mod document;
mod element;
mod error;
mod hash;
mod node;
mod printer;
mod style;

pub use attributes::HtmlAttributes;
pub use class_names::{ClassNames, ClassNaming};
pub use document::{document, HtmlDocument};
pub use element::{is_void_element, tag, HtmlElement};
pub use error::{RenderError, RenderResult};
pub use node::{raw, text, Html, HtmlEmpty, HtmlRaw, HtmlText};
pub use printer::{
    render, render_to_string, render_to_string_with, render_with, AttrMap, Config, Printer,
    RuleMap, StyleMap,
};
pub use style::{InlineStyle, MediaQuery, Pseudo, Style};
