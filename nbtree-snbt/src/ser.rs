//! This module contains the SNBT printer. Use [`to_string`](crate::to_string),
//! [`to_vec`](crate::to_vec) or [`to_writer`](crate::to_writer).
//!
//! Output is compact, with no whitespace. Numbers carry the suffix of their
//! type (`1b`, `1s`, `1`, `1L`, `1.5f`, `1.5d`) and typed arrays their prefix
//! (`[B;1,2]`). Strings are left unquoted when they are a plain token that
//! would not read back as a number, and are double quoted otherwise.
//!
//! ```
//! use nbtree::{Compound, Element};
//!
//! let mut compound = Compound::new();
//! compound.insert("test", "value").unwrap();
//! compound.insert("n", "12").unwrap();
//!
//! let snbt = nbtree_snbt::to_string(&Element::Compound(compound)).unwrap();
//! assert_eq!(snbt, r#"{test:value,n:"12"}"#);
//! ```
//!
//! Printing an `End` element is an error.

use std::io::Write;

use nbtree::{Compound, Element, List};

use crate::{
    error::{Error, Result},
    parser,
};

/// Write `v` in double quotes. Only newline, tab, both quote characters and
/// backslash are escaped. Other control characters are written as they are.
pub(crate) fn write_escaped_str<W: Write>(mut writer: W, v: &str) -> Result<()> {
    writer.write_all(b"\"")?;
    let bytes = v.as_bytes();
    let mut start = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        let escaped: &[u8] = match byte {
            b'\n' => b"\\n",
            b'\t' => b"\\t",
            b'"' => b"\\\"",
            b'\'' => b"\\'",
            b'\\' => b"\\\\",
            _ => continue,
        };
        if start < i {
            writer.write_all(v[start..i].as_bytes())?;
        }
        writer.write_all(escaped)?;
        start = i + 1;
    }
    if start != bytes.len() {
        writer.write_all(v[start..].as_bytes())?;
    }
    Ok(writer.write_all(b"\"")?)
}

/// Whether `v` is a single unquoted token. Enough for compound keys, which are
/// never read as numbers.
fn is_token(v: &str) -> bool {
    !v.is_empty() && v.chars().all(parser::is_token_char)
}

/// Whether the string value `v` can be printed without quotes and still read
/// back as a string.
fn is_plain(v: &str) -> bool {
    is_token(v) && parser::number(v).is_none()
}

pub(crate) struct Printer<W> {
    pub(crate) writer: W,
}

impl<W: Write> Printer<W> {
    pub(crate) fn element(&mut self, el: &Element) -> Result<()> {
        match el {
            Element::End => Err(Error::unexpected_end_tag()),
            Element::Byte(v) => self.integer(*v, "b"),
            Element::Short(v) => self.integer(*v, "s"),
            Element::Int(v) => self.integer(*v, ""),
            Element::Long(v) => self.integer(*v, "L"),
            Element::Float(v) => self.float(*v, "f"),
            Element::Double(v) => self.float(*v, "d"),
            Element::String(v) => self.string(v),
            Element::ByteArray(v) => self.array("B;", v),
            Element::IntArray(v) => self.array("I;", v),
            Element::LongArray(v) => self.array("L;", v),
            Element::List(v) => self.list(v),
            Element::Compound(v) => self.compound(v),
        }
    }

    fn integer<I: itoa::Integer>(&mut self, v: I, suffix: &str) -> Result<()> {
        let mut buffer = itoa::Buffer::new();
        self.writer.write_all(buffer.format(v).as_bytes())?;
        Ok(self.writer.write_all(suffix.as_bytes())?)
    }

    fn float<F: ryu::Float>(&mut self, v: F, suffix: &str) -> Result<()> {
        let mut buffer = ryu::Buffer::new();
        self.writer.write_all(buffer.format(v).as_bytes())?;
        Ok(self.writer.write_all(suffix.as_bytes())?)
    }

    fn key(&mut self, v: &str) -> Result<()> {
        if is_token(v) {
            Ok(self.writer.write_all(v.as_bytes())?)
        } else {
            write_escaped_str(&mut self.writer, v)
        }
    }

    fn string(&mut self, v: &str) -> Result<()> {
        if is_plain(v) {
            Ok(self.writer.write_all(v.as_bytes())?)
        } else {
            write_escaped_str(&mut self.writer, v)
        }
    }

    fn array<I: itoa::Integer + Copy>(&mut self, prefix: &str, values: &[I]) -> Result<()> {
        self.writer.write_all(b"[")?;
        self.writer.write_all(prefix.as_bytes())?;
        for (i, v) in values.iter().enumerate() {
            if i != 0 {
                self.writer.write_all(b",")?;
            }
            self.integer(*v, "")?;
        }
        Ok(self.writer.write_all(b"]")?)
    }

    fn list(&mut self, list: &List) -> Result<()> {
        self.writer.write_all(b"[")?;
        for (i, el) in list.iter().enumerate() {
            if i != 0 {
                self.writer.write_all(b",")?;
            }
            self.element(el)?;
        }
        Ok(self.writer.write_all(b"]")?)
    }

    fn compound(&mut self, compound: &Compound) -> Result<()> {
        self.writer.write_all(b"{")?;
        for (i, (key, value)) in compound.iter().enumerate() {
            if i != 0 {
                self.writer.write_all(b",")?;
            }
            self.key(key)?;
            self.writer.write_all(b":")?;
            self.element(value)?;
        }
        Ok(self.writer.write_all(b"}")?)
    }
}
