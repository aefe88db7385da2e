//! Class name registry
//!
//! Assigns a stable identity to each distinct style seen during a render
//! session and turns that identity into a CSS class name. Registration is
//! check-then-insert over full structural equality, so the first sighting
//! of a style fixes its name for the whole session.

use log::debug;
use rustc_hash::FxHashMap;

use crate::hash::{base62, murmur3_32};
use crate::style::Style;

/// Policy turning a style's identity into a class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassNaming {
    /// `<sanitized-property>-<index>`, readable, session-scoped numbering.
    #[default]
    Debug,
    /// `c<index>`, short, session-scoped numbering.
    Compact,
    /// `<property>-<base62 hash>`, reproducible across runs and platforms.
    Hashed,
}

/// Registry of the styles seen in one render session.
///
/// Lives inside a [`Printer`](crate::Printer) by default. Callers that want
/// class reuse across documents can construct one themselves, render with
/// [`Printer::with_class_names`](crate::Printer::with_class_names), and
/// carry it over; sharing across concurrent renders requires external
/// serialization since registration is a read-modify-write sequence.
#[derive(Debug, Default)]
pub struct ClassNames {
    naming: ClassNaming,
    indices: FxHashMap<Style, usize>,
}

impl ClassNames {
    pub fn new(naming: ClassNaming) -> Self {
        Self {
            naming,
            indices: FxHashMap::default(),
        }
    }

    /// Number of distinct styles registered so far.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The class name for `style`, registering it if it is new.
    pub fn class_name(&mut self, style: &Style) -> String {
        match self.naming {
            ClassNaming::Debug => {
                let index = self.index_of(style);
                format!("{}-{}", sanitize_property(style.property()), index)
            }
            ClassNaming::Compact => {
                let index = self.index_of(style);
                format!("c{}", index)
            }
            ClassNaming::Hashed => format!(
                "{}-{}",
                style.property(),
                base62(murmur3_32(style.identity_key().as_bytes()))
            ),
        }
    }

    fn index_of(&mut self, style: &Style) -> usize {
        match self.indices.get(style) {
            Some(&index) => index,
            None => {
                let index = self.indices.len();
                self.indices.insert(style.clone(), index);
                debug!(
                    "registered style {}:{} as index {}",
                    style.property(),
                    style.value(),
                    index
                );
                index
            }
        }
    }
}

/// Replace anything that cannot appear in a CSS class name with `-`.
fn sanitize_property(property: &str) -> String {
    property
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{MediaQuery, Pseudo};

    #[test]
    fn test_sequential_indices_follow_registration_order() {
        let mut names = ClassNames::new(ClassNaming::Debug);
        assert_eq!(names.class_name(&Style::new("color", "red")), "color-0");
        assert_eq!(names.class_name(&Style::new("margin", "0")), "margin-1");
        assert_eq!(names.class_name(&Style::new("color", "blue")), "color-2");
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_registration_is_idempotent() {
        let mut names = ClassNames::new(ClassNaming::Compact);
        let style = Style::new("color", "red");
        let first = names.class_name(&style);
        for _ in 0..5 {
            assert_eq!(names.class_name(&style), first);
        }
        assert_eq!(first, "c0");
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_identity_includes_every_field() {
        let mut names = ClassNames::new(ClassNaming::Compact);
        let base = Style::new("color", "red");
        let in_dark = Style::new("color", "red").media(MediaQuery::dark());
        let on_hover = Style::new("color", "red").pseudo(Pseudo::hover());
        assert_eq!(names.class_name(&base), "c0");
        assert_eq!(names.class_name(&in_dark), "c1");
        assert_eq!(names.class_name(&on_hover), "c2");
        assert_eq!(names.class_name(&base), "c0");
    }

    #[test]
    fn test_hashed_naming_is_stateless_and_stable() {
        let mut names = ClassNames::new(ClassNaming::Hashed);
        let style = Style::new("color", "red");
        assert_eq!(names.class_name(&style), "color-dMYaj4");
        assert_eq!(names.class_name(&style), "color-dMYaj4");
        assert!(names.is_empty());
    }

    #[test]
    fn test_hashed_naming_digests_optional_fields() {
        let mut names = ClassNames::new(ClassNaming::Hashed);
        // value + media text: "white(prefers-color-scheme: dark)"
        let dark = Style::new("color", "white").media(MediaQuery::dark());
        assert_eq!(names.class_name(&dark), "color-20lWI1");
        // value + pseudo text: "red:hover"
        let hover = Style::new("color", "red").pseudo(Pseudo::hover());
        assert_eq!(names.class_name(&hover), "color-S9wdG2");
    }

    #[test]
    fn test_hashed_name_for_empty_identity() {
        // murmur3("") is 0 and base62(0) is "", so the suffix vanishes.
        let mut names = ClassNames::new(ClassNaming::Hashed);
        let style = Style::new("color", "");
        assert_eq!(names.class_name(&style), "color-");
    }

    #[test]
    fn test_property_sanitization_in_debug_names() {
        let mut names = ClassNames::new(ClassNaming::Debug);
        let odd = Style::new("--custom prop", "1");
        assert_eq!(names.class_name(&odd), "--custom-prop-0");
    }
}
