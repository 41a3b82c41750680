//! This module contains the SNBT reader. It turns text into an [`Element`]
//! tree. Use [`from_str`](crate::from_str) or
//! [`from_str_with_opts`](crate::from_str_with_opts).
//!
//! Any single value is a document. Whitespace may appear between tokens.
//!
//! | Text                 | Element                |
//! |----------------------|------------------------|
//! | `1b`, `1s`, `1L`     | Byte, Short, Long      |
//! | `1`                  | Int                    |
//! | `1.5f`, `1f`         | Float                  |
//! | `1.5`, `1e3`, `1d`   | Double                 |
//! | `abc`, `"a b"`, `'c'`| String                 |
//! | `[B;1b,2]`           | ByteArray              |
//! | `[I;1,2]`, `[L;1L]`  | IntArray, LongArray    |
//! | `[1,2]`, `[]`        | List                   |
//! | `{a:1,"b c":2}`      | Compound               |
//!
//! A token that looks like a number but continues with other token characters
//! (`12abc`) is a String, as is a number that does not fit its suffix
//! (`300b`).
//!
//! ```
//! use nbtree::Element;
//!
//! let el = nbtree_snbt::from_str("[1s, 2s]").unwrap();
//! let list = el.as_list().unwrap();
//! assert_eq!(list.as_slice(), &[Element::Short(1), Element::Short(2)]);
//! ```
use std::str::FromStr;

use log::{debug, trace};
use nbtree::{Compound, DeOpts, Element, List};

use crate::{
    error::{Error, Result},
    input::Input,
    parser,
};

/// Reader for one SNBT document. See the [module docs](self).
pub struct Decoder<'de> {
    input: Input<'de>,
    opts: DeOpts,
    depth: usize,
}

impl<'de> Decoder<'de> {
    pub fn new(input: &'de str, opts: DeOpts) -> Self {
        Self {
            input: Input::new(input),
            opts,
            depth: 0,
        }
    }

    /// Read the root value. Only whitespace may follow it.
    pub fn decode(&mut self) -> Result<Element> {
        trace!("reading snbt of {} bytes", self.input.rest().len());
        let value = self.value()?;

        self.input.discard_whitespace();
        if !self.input.at_end() {
            return Err(Error::trailing_input(self.input.pos()));
        }
        Ok(value)
    }

    fn value(&mut self) -> Result<Element> {
        self.input.discard_whitespace();
        match self.input.peek() {
            None => Err(Error::unexpected_eof(self.input.pos())),
            Some(b'{') => Ok(Element::Compound(self.compound()?)),
            Some(b'[') => self.list_like(),
            Some(quote @ (b'"' | b'\'')) => Ok(Element::String(self.quoted(quote)?)),
            Some(_) => match parser::number(self.input.rest()) {
                Some((num, len)) => {
                    self.input.advance(len);
                    Ok(num)
                }
                None => Ok(Element::String(self.unquoted()?.to_owned())),
            },
        }
    }

    /// A compound key or any other place only a string can appear.
    fn string(&mut self) -> Result<String> {
        self.input.discard_whitespace();
        match self.input.peek() {
            Some(quote @ (b'"' | b'\'')) => self.quoted(quote),
            _ => Ok(self.unquoted()?.to_owned()),
        }
    }

    fn unquoted(&mut self) -> Result<&'de str> {
        let pos = self.input.pos();
        match parser::unquoted(self.input.rest()) {
            Ok((_, token)) => {
                self.input.advance(token.len());
                Ok(token)
            }
            Err(_) if self.input.at_end() => Err(Error::unexpected_eof(pos)),
            Err(_) => Err(Error::empty_token(pos)),
        }
    }

    // Only \n and \t mean something after a backslash. Any other escaped
    // character stands for itself.
    fn quoted(&mut self, quote: u8) -> Result<String> {
        let start = self.input.pos();
        self.input.discard();

        let mut owned = String::new();
        let mut segment = self.input.pos();
        loop {
            match self.input.peek() {
                None => return Err(Error::unterminated_string(start)),
                Some(b'\\') => {
                    owned.push_str(self.input.slice(segment, self.input.pos()));
                    self.input.discard();
                    let escaped = self
                        .input
                        .peek_char()
                        .ok_or_else(|| Error::unterminated_string(start))?;
                    owned.push(match escaped {
                        'n' => '\n',
                        't' => '\t',
                        c => c,
                    });
                    self.input.advance(escaped.len_utf8());
                    segment = self.input.pos();
                }
                Some(b) if b == quote => {
                    owned.push_str(self.input.slice(segment, self.input.pos()));
                    self.input.discard();
                    return Ok(owned);
                }
                Some(_) => self.input.discard(),
            }
        }
    }

    fn compound(&mut self) -> Result<Compound> {
        self.enter()?;
        self.input.discard();

        let mut compound = Compound::new();
        self.input.discard_whitespace();
        if self.input.peek() == Some(b'}') {
            self.input.discard();
            self.depth -= 1;
            return Ok(compound);
        }

        loop {
            let key = self.string()?;
            self.input.discard_whitespace();
            self.input.expect(b':')?;
            let value = self.value()?;
            compound.insert(key, value)?;

            self.input.discard_whitespace();
            match self.input.peek() {
                Some(b',') => self.input.discard(),
                Some(b'}') => {
                    self.input.discard();
                    break;
                }
                _ => return Err(self.input.unexpected()),
            }
        }

        self.depth -= 1;
        Ok(compound)
    }

    fn list_like(&mut self) -> Result<Element> {
        self.input.discard();
        self.input.discard_whitespace();

        match (self.input.peek(), self.input.peek_at(1)) {
            (Some(b']'), _) => {
                self.input.discard();
                Ok(Element::List(List::new()))
            }
            (Some(b'B'), Some(b';')) => {
                self.input.advance(2);
                Ok(Element::ByteArray(self.array(Some(b'b'))?))
            }
            (Some(b'I'), Some(b';')) => {
                self.input.advance(2);
                Ok(Element::IntArray(self.array(None)?))
            }
            (Some(b'L'), Some(b';')) => {
                self.input.advance(2);
                Ok(Element::LongArray(self.array(Some(b'l'))?))
            }
            _ => Ok(Element::List(self.list()?)),
        }
    }

    fn list(&mut self) -> Result<List> {
        self.enter()?;

        let mut list = List::new();
        loop {
            list.push(self.value()?)?;

            self.input.discard_whitespace();
            match self.input.peek() {
                Some(b',') => self.input.discard(),
                Some(b']') => {
                    self.input.discard();
                    break;
                }
                _ => return Err(self.input.unexpected()),
            }
        }

        self.depth -= 1;
        Ok(list)
    }

    /// Elements of a typed array, after the `X;` prefix. `suffix` is the
    /// lowercase letter elements may optionally carry.
    fn array<T: FromStr>(&mut self, suffix: Option<u8>) -> Result<Vec<T>> {
        let mut values = Vec::new();
        self.input.discard_whitespace();
        if self.input.peek() == Some(b']') {
            self.input.discard();
            return Ok(values);
        }

        loop {
            values.push(self.array_element(suffix)?);

            self.input.discard_whitespace();
            match self.input.peek() {
                Some(b',') => self.input.discard(),
                Some(b']') => {
                    self.input.discard();
                    return Ok(values);
                }
                _ => return Err(self.input.unexpected()),
            }
        }
    }

    fn array_element<T: FromStr>(&mut self, suffix: Option<u8>) -> Result<T> {
        self.input.discard_whitespace();
        let pos = self.input.pos();
        let digits = match parser::integer(self.input.rest()) {
            Ok((_, digits)) => digits,
            Err(_) if self.input.at_end() => return Err(Error::unexpected_eof(pos)),
            Err(_) => return Err(Error::invalid_number(pos)),
        };
        self.input.advance(digits.len());

        if let (Some(suffix), Some(c)) = (suffix, self.input.peek()) {
            if c.to_ascii_lowercase() == suffix {
                self.input.discard();
            }
        }
        if matches!(self.input.peek(), Some(c) if parser::is_token_char(c as char)) {
            return Err(Error::invalid_number(pos));
        }

        digits.parse().map_err(|_| Error::invalid_number(pos))
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.opts.depth_limit() {
            debug!("refusing snbt nested deeper than {}", self.opts.depth_limit());
            return Err(Error::depth_limit(self.opts.depth_limit()));
        }
        self.depth += 1;
        Ok(())
    }
}
