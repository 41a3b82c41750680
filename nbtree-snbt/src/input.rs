use crate::error::{Error, Result};

/// A forward-only cursor over SNBT text. Positions are byte offsets.
pub(crate) struct Input<'de> {
    data: &'de str,
    index: usize,
}

impl<'de> Input<'de> {
    pub fn new(data: &'de str) -> Self {
        Self { data, index: 0 }
    }

    pub fn pos(&self) -> usize {
        self.index
    }

    /// The text from the cursor onwards. Empty if the cursor is not on a char
    /// boundary.
    pub fn rest(&self) -> &'de str {
        self.data.get(self.index..).unwrap_or_default()
    }

    pub fn slice(&self, start: usize, end: usize) -> &'de str {
        self.data.get(start..end).unwrap_or_default()
    }

    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.data.as_bytes().get(self.index + offset).cloned()
    }

    pub fn peek_char(&self) -> Option<char> {
        self.data
            .get(self.index..)
            .and_then(|rest| rest.chars().next())
    }

    pub fn discard(&mut self) {
        self.advance(1);
    }

    pub fn advance(&mut self, n: usize) {
        self.index = (self.index + n).min(self.data.len());
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.data.len()
    }

    pub fn discard_whitespace(&mut self) {
        while let Some(b' ' | b'\n' | b'\t' | b'\r') = self.peek() {
            self.discard();
        }
    }

    /// An error for whatever is under the cursor: end of input if there is
    /// nothing left, otherwise the unexpected character.
    pub fn unexpected(&self) -> Error {
        match self.peek_char() {
            Some(c) => Error::unexpected_char(self.index, c),
            None => Error::unexpected_eof(self.index),
        }
    }

    /// Consume `expected` or fail with [`Input::unexpected`].
    pub fn expect(&mut self, expected: u8) -> Result<()> {
        if self.peek() == Some(expected) {
            self.discard();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }
}
