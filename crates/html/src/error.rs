//! Rendering error types
//!
//! The engine itself has no recoverable failure modes: property and value
//! strings pass through uninterpreted, and contract violations are bugs,
//! not errors. The one fallible surface is extracting rendered bytes as a
//! string, since raw nodes may inject arbitrary bytes.

use thiserror::Error;

/// Rendering result type
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors surfaced when extracting rendered output
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("rendered output is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::HtmlRaw;
    use crate::printer::render_to_string;

    #[test]
    fn test_invalid_utf8_is_reported() {
        let node = HtmlRaw::from_bytes(vec![0xff, 0xfe]);
        let result = render_to_string(&node);
        assert!(matches!(result, Err(RenderError::InvalidUtf8(_))));
    }

    #[test]
    fn test_error_display() {
        let err = render_to_string(&HtmlRaw::from_bytes(vec![0x80])).unwrap_err();
        assert!(format!("{}", err).starts_with("rendered output is not valid UTF-8"));
    }
}
