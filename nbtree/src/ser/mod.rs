//! This module contains the binary encoder. It turns an [`Element`] tree into
//! NBT bytes. Use [`to_bytes`][`crate::to_bytes`] or
//! [`to_writer`][`crate::to_writer`].
//!
//! The root is written as a tag byte, a name, and the payload. [`to_bytes`]
//! always writes an empty name, whatever the root element is:
//!
//! ```
//! use nbtree::Element;
//!
//! let bytes = nbtree::to_bytes(&Element::Byte(23)).unwrap();
//! assert_eq!(bytes, [1, 0, 0, 23]);
//! ```
//!
//! Encoding fails, and produces no output at all, if the tree contains an
//! `End` element or a string whose UTF-8 form is longer than 65535 bytes.
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};
use log::trace;

use crate::error::{Error, Result};
use crate::{Compound, Element, List, Tag};

use self::write_nbt::WriteNbt;

mod write_nbt;

/// Encode `element` as a root value with an empty name.
pub fn to_bytes(element: &Element) -> Result<Vec<u8>> {
    to_bytes_named("", element)
}

/// Encode `element` as a root value with the given name.
pub fn to_bytes_named(name: &str, element: &Element) -> Result<Vec<u8>> {
    let mut encoder = Encoder { writer: Vec::new() };
    encoder.root(name, element)?;
    trace!(
        "encoded root {:?} into {} bytes",
        element.tag(),
        encoder.writer.len()
    );
    Ok(encoder.writer)
}

/// Encode `element` as a root value with an empty name into `writer`. The
/// whole document is built in memory first, so nothing is written if encoding
/// fails.
pub fn to_writer<W: Write>(mut writer: W, element: &Element) -> Result<()> {
    let bytes = to_bytes(element)?;
    writer.write_all(&bytes)?;
    Ok(())
}

struct Encoder<W: Write> {
    writer: W,
}

impl<W: Write> Encoder<W> {
    fn root(&mut self, name: &str, element: &Element) -> Result<()> {
        self.header(element.tag(), name)?;
        self.payload(element)
    }

    fn header(&mut self, tag: Tag, name: &str) -> Result<()> {
        if tag == Tag::End {
            return Err(Error::unexpected_end_tag());
        }
        self.writer.write_tag(tag)?;
        self.writer.write_size_prefixed_str(name)
    }

    fn payload(&mut self, element: &Element) -> Result<()> {
        match element {
            Element::End => return Err(Error::unexpected_end_tag()),
            Element::Byte(v) => self.writer.write_i8(*v)?,
            Element::Short(v) => self.writer.write_i16::<BigEndian>(*v)?,
            Element::Int(v) => self.writer.write_i32::<BigEndian>(*v)?,
            Element::Long(v) => self.writer.write_i64::<BigEndian>(*v)?,
            Element::Float(v) => self.writer.write_f32::<BigEndian>(*v)?,
            Element::Double(v) => self.writer.write_f64::<BigEndian>(*v)?,
            Element::String(v) => self.writer.write_size_prefixed_str(v)?,
            Element::ByteArray(v) => {
                self.writer.write_len(v.len())?;
                for b in v {
                    self.writer.write_i8(*b)?;
                }
            }
            Element::IntArray(v) => {
                self.writer.write_len(v.len())?;
                for i in v {
                    self.writer.write_i32::<BigEndian>(*i)?;
                }
            }
            Element::LongArray(v) => {
                self.writer.write_len(v.len())?;
                for l in v {
                    self.writer.write_i64::<BigEndian>(*l)?;
                }
            }
            Element::List(list) => self.list(list)?,
            Element::Compound(compound) => self.compound(compound)?,
        }
        Ok(())
    }

    fn list(&mut self, list: &List) -> Result<()> {
        self.writer.write_tag(list.wire_subtype())?;
        self.writer.write_len(list.len())?;
        for el in list {
            self.payload(el)?;
        }
        Ok(())
    }

    fn compound(&mut self, compound: &Compound) -> Result<()> {
        for (name, value) in compound {
            self.header(value.tag(), name)?;
            self.payload(value)?;
        }
        self.writer.write_tag(Tag::End)
    }
}
