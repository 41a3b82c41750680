//! Contains the Error and Result type used by the binary codec and the element
//! model.
use crate::Tag;

/// Various errors that can occur while building, encoding or decoding NBT.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

/// The category of an [`Error`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Any other errors. Users should not match on this variant and should
    /// instead use a wildcard `_`. Errors in this category may be moved to new
    /// variants.
    Other,

    /// A byte that is not one of the thirteen NBT tag ids was read where a tag
    /// was expected.
    InvalidTag(u8),

    /// The input ran out part way through a value.
    UnexpectedEndOfInput,

    /// An End tag was found, or was about to be produced, where a value is
    /// required. End only ever terminates a compound.
    UnexpectedEndTag,

    /// An element was added to a list already holding elements of a different
    /// tag.
    TypeMismatch { expected: Tag, found: Tag },

    /// A string's UTF-8 encoding is longer than the `u16` length prefix can
    /// describe. Contains the byte length.
    StringTooLong(usize),

    /// A list or array declared a negative length.
    NegativeLength(i32),

    /// A list or array declared more elements than the decode options allow.
    SeqTooLong(usize),

    /// Containers were nested deeper than the decode options allow.
    DepthLimitExceeded(usize),

    /// A string payload was not valid UTF-8. Contains the offending bytes.
    NonUnicodeString(Vec<u8>),

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

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, ErrorKind::UnexpectedEndOfInput)
    }

    pub(crate) fn bespoke(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::Other,
        }
    }

    pub(crate) fn invalid_tag(tag: u8) -> Self {
        Self {
            msg: format!("invalid nbt tag value: {}", tag),
            kind: ErrorKind::InvalidTag(tag),
        }
    }

    pub(crate) fn unexpected_eof() -> Self {
        Self {
            msg: "eof: unexpectedly ran out of input".into(),
            kind: ErrorKind::UnexpectedEndOfInput,
        }
    }

    pub(crate) fn unexpected_end_tag() -> Self {
        Self {
            msg: "unexpected end tag, was expecting a value".into(),
            kind: ErrorKind::UnexpectedEndTag,
        }
    }

    pub(crate) fn type_mismatch(expected: Tag, found: Tag) -> Self {
        Self {
            msg: format!(
                "list holds elements of type {:?}, cannot add {:?}",
                expected, found
            ),
            kind: ErrorKind::TypeMismatch { expected, found },
        }
    }

    pub(crate) fn string_too_long(len: usize) -> Self {
        Self {
            msg: format!("string of {} bytes is longer than {} bytes", len, u16::MAX),
            kind: ErrorKind::StringTooLong(len),
        }
    }

    pub(crate) fn negative_length(len: i32) -> Self {
        Self {
            msg: format!("size was negative: {}", len),
            kind: ErrorKind::NegativeLength(len),
        }
    }

    pub(crate) fn seq_too_long(len: usize, max: usize) -> Self {
        Self {
            msg: format!("size ({}) greater than max sequence length ({})", len, max),
            kind: ErrorKind::SeqTooLong(len),
        }
    }

    pub(crate) fn depth_limit(max: usize) -> Self {
        Self {
            msg: format!("nesting deeper than max depth ({})", max),
            kind: ErrorKind::DepthLimitExceeded(max),
        }
    }

    pub(crate) fn nonunicode_string(data: &[u8]) -> Self {
        Self {
            msg: format!(
                "invalid nbt string: nonunicode: {}",
                String::from_utf8_lossy(data)
            ),
            kind: ErrorKind::NonUnicodeString(data.to_vec()),
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
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::unexpected_eof(),
            _ => Self {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Io,
            },
        }
    }
}
