//! Contains the Error and Result type used by the reader and printer.
use nbtree::Tag;

/// Various errors that can occur while reading or printing SNBT.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

/// The category of an [`Error`]. Positions are byte offsets into the input.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Any other errors. Users should not match on this variant and should
    /// instead use a wildcard `_`.
    Other,

    /// The text ran out while a value, separator or closing bracket was
    /// still expected.
    UnexpectedEndOfInput { pos: usize },

    /// A character that cannot appear at this point, such as a missing `:`
    /// in a compound.
    UnexpectedCharacter { pos: usize, found: char },

    /// An element of a typed array was not an integer of the array's width.
    InvalidNumber { pos: usize },

    /// A value or key was expected but no token starts here.
    EmptyToken { pos: usize },

    /// A quoted string has no closing quote. The position is the opening
    /// quote.
    UnterminatedQuotedString { pos: usize },

    /// Something other than whitespace follows the root value.
    TrailingInput { pos: usize },

    /// An End element was given to the printer.
    UnexpectedEndTag,

    /// A list mixes elements of different tags.
    TypeMismatch { expected: Tag, found: Tag },

    /// Lists and compounds were nested deeper than the decode options allow.
    DepthLimitExceeded(usize),

    /// Writing to the underlying sink failed.
    Io,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn bespoke(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::Other,
        }
    }

    pub(crate) fn unexpected_eof(pos: usize) -> Self {
        Self {
            msg: format!("eof: unexpectedly ran out of input at {}", pos),
            kind: ErrorKind::UnexpectedEndOfInput { pos },
        }
    }

    pub(crate) fn unexpected_char(pos: usize, found: char) -> Self {
        Self {
            msg: format!("unexpected character {:?} at {}", found, pos),
            kind: ErrorKind::UnexpectedCharacter { pos, found },
        }
    }

    pub(crate) fn invalid_number(pos: usize) -> Self {
        Self {
            msg: format!("invalid array element at {}", pos),
            kind: ErrorKind::InvalidNumber { pos },
        }
    }

    pub(crate) fn empty_token(pos: usize) -> Self {
        Self {
            msg: format!("expected a value at {}", pos),
            kind: ErrorKind::EmptyToken { pos },
        }
    }

    pub(crate) fn unterminated_string(pos: usize) -> Self {
        Self {
            msg: format!("quoted string starting at {} is not closed", pos),
            kind: ErrorKind::UnterminatedQuotedString { pos },
        }
    }

    pub(crate) fn trailing_input(pos: usize) -> Self {
        Self {
            msg: format!("input wasn't fully consumed, stopped at {}", pos),
            kind: ErrorKind::TrailingInput { pos },
        }
    }

    pub(crate) fn unexpected_end_tag() -> Self {
        Self {
            msg: "end tag has no text form".into(),
            kind: ErrorKind::UnexpectedEndTag,
        }
    }

    pub(crate) fn depth_limit(max: usize) -> Self {
        Self {
            msg: format!("nesting deeper than max depth ({})", max),
            kind: ErrorKind::DepthLimitExceeded(max),
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self {
            msg: format!("io error: {}", e),
            kind: ErrorKind::Io,
        }
    }
}

impl From<nbtree::error::Error> for Error {
    fn from(e: nbtree::error::Error) -> Self {
        let kind = match *e.kind() {
            nbtree::error::ErrorKind::TypeMismatch { expected, found } => {
                ErrorKind::TypeMismatch { expected, found }
            }
            nbtree::error::ErrorKind::UnexpectedEndTag => ErrorKind::UnexpectedEndTag,
            _ => ErrorKind::Other,
        };
        Self {
            msg: e.to_string(),
            kind,
        }
    }
}
