//! Weft HTML element catalogue
//!
//! Named constructors for the standard HTML tags, plus convenience
//! methods for the most common attributes. Everything here builds on the
//! two contracts of `weft-html`: `tag(name, content)` and
//! `attribute(name, value)`.

mod conveniences;
mod tags;

pub use conveniences::AttributeExt;
pub use tags::*;
