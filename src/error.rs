//! The error type produced when text cannot be matched against a pattern.

use alloc::borrow::Cow;
use core::fmt;

/// The category of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input text did not conform to the pattern.
    Syntax,
    /// A matched field was outside any representable value.
    Range,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => f.write_str("SyntaxError"),
            Self::Range => f.write_str("RangeError"),
        }
    }
}

/// The error raised by `parse` and `truncate` when text does not conform to
/// the supplied pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl ParseError {
    /// Creates a syntax error.
    #[must_use]
    pub(crate) const fn syntax() -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: Cow::Borrowed(""),
        }
    }

    /// Creates a range error.
    #[must_use]
    pub(crate) const fn range() -> Self {
        Self {
            kind: ErrorKind::Range,
            message: Cow::Borrowed(""),
        }
    }

    /// Attaches a message to this error.
    #[must_use]
    pub(crate) fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Returns this error's kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns this error's message, which may be empty.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl core::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_with_and_without_message() {
        let plain = ParseError::syntax();
        assert_eq!(plain.to_string(), "SyntaxError");

        let messaged = ParseError::range().with_message("field out of range");
        assert_eq!(messaged.to_string(), "RangeError: field out of range");
        assert_eq!(messaged.kind(), ErrorKind::Range);
    }
}
