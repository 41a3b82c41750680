//! This module contains the binary decoder. It turns NBT bytes into an
//! [`Element`] tree.
//!
//! A binary NBT document is a tag byte, a name, and the payload for that tag.
//! [`from_bytes`] discards the name, [`from_bytes_named`] returns it.
//!
//! ```
//! use nbtree::Element;
//!
//! // An Int named "" with value 23.
//! let data = [3, 0, 0, 0, 0, 0, 23];
//! assert_eq!(nbtree::from_bytes(&data).unwrap(), Element::Int(23));
//! ```
//!
//! Decoding only ever reads from the given slice. Truncated input fails with
//! [`ErrorKind::UnexpectedEndOfInput`][crate::error::ErrorKind], unknown tag
//! bytes with `InvalidTag`, and an End tag anywhere other than closing a
//! compound with `UnexpectedEndTag`. Bytes after the root value are left
//! alone; see [`Decoder::remaining`].
//!
//! Nesting depth and sequence lengths are bounded by [`DeOpts`].

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::input::Slice;
use crate::{Compound, DeOpts, Element, List, Tag};

/// Decode the root element from some NBT data, using default options.
pub fn from_bytes(input: &[u8]) -> Result<Element> {
    from_bytes_with_opts(input, DeOpts::new())
}

/// Decode the root element from some NBT data with the given options.
pub fn from_bytes_with_opts(input: &[u8], opts: DeOpts) -> Result<Element> {
    Decoder::new(input, opts).decode().map(|(_, el)| el)
}

/// Decode the root element and the name stored alongside it.
pub fn from_bytes_named(input: &[u8]) -> Result<(String, Element)> {
    Decoder::new(input, DeOpts::new()).decode()
}

/// Decoder for binary NBT. Holds the position in the input, so one decoder
/// decodes one document. See the [module docs](self) for more information.
pub struct Decoder<'de> {
    input: Slice<'de>,
    opts: DeOpts,
    depth: usize,
}

impl<'de> Decoder<'de> {
    pub fn new(input: &'de [u8], opts: DeOpts) -> Self {
        Self {
            input: Slice::new(input),
            opts,
            depth: 0,
        }
    }

    /// Decode the next named value.
    pub fn decode(&mut self) -> Result<(String, Element)> {
        let tag = self.input.consume_tag()?;
        if tag == Tag::End {
            return Err(Error::unexpected_end_tag());
        }
        let name = self.input.consume_str()?.to_owned();
        trace!("decoding root {:?} named {:?}", tag, name);

        let value = self.value(tag)?;
        Ok((name, value))
    }

    /// The input that has not been consumed yet.
    pub fn remaining(&self) -> &'de [u8] {
        self.input.remaining()
    }

    // Lists and compounds recurse back into here once per nesting level, so
    // the container arms live in their own functions to keep this frame small.
    fn value(&mut self, tag: Tag) -> Result<Element> {
        match tag {
            Tag::List => self.list_value(),
            Tag::Compound => self.compound_value(),
            _ => self.leaf(tag),
        }
    }

    #[inline(never)]
    fn leaf(&mut self, tag: Tag) -> Result<Element> {
        Ok(match tag {
            Tag::End => return Err(Error::unexpected_end_tag()),
            Tag::List => return self.list_value(),
            Tag::Compound => return self.compound_value(),
            Tag::Byte => Element::Byte(self.input.consume_i8()?),
            Tag::Short => Element::Short(self.input.consume_i16()?),
            Tag::Int => Element::Int(self.input.consume_i32()?),
            Tag::Long => Element::Long(self.input.consume_i64()?),
            Tag::Float => Element::Float(self.input.consume_f32()?),
            Tag::Double => Element::Double(self.input.consume_f64()?),
            Tag::String => Element::String(self.input.consume_str()?.to_owned()),
            Tag::ByteArray => {
                let size = self.seq_size()?;
                let bs = self.input.consume_bytes(size)?;
                Element::ByteArray(bs.iter().map(|b| *b as i8).collect())
            }
            Tag::IntArray => {
                let size = self.seq_size()?;
                self.check_available(size, std::mem::size_of::<i32>())?;
                let mut v = Vec::with_capacity(size);
                for _ in 0..size {
                    v.push(self.input.consume_i32()?);
                }
                Element::IntArray(v)
            }
            Tag::LongArray => {
                let size = self.seq_size()?;
                self.check_available(size, std::mem::size_of::<i64>())?;
                let mut v = Vec::with_capacity(size);
                for _ in 0..size {
                    v.push(self.input.consume_i64()?);
                }
                Element::LongArray(v)
            }
        })
    }

    #[inline(never)]
    fn list_value(&mut self) -> Result<Element> {
        self.enter()?;
        let list = self.list()?;
        self.depth -= 1;
        Ok(Element::List(list))
    }

    #[inline(never)]
    fn compound_value(&mut self) -> Result<Element> {
        self.enter()?;
        let compound = self.compound()?;
        self.depth -= 1;
        Ok(Element::Compound(compound))
    }

    fn list(&mut self) -> Result<List> {
        let element_tag = self.input.consume_tag()?;
        let size = self.seq_size()?;

        // An empty list is often written with End as its element type. A
        // non-empty list of End would be a list of nothing at all.
        if element_tag == Tag::End && size != 0 {
            return Err(Error::unexpected_end_tag());
        }

        let mut list = List::with_subtype(element_tag);
        for _ in 0..size {
            list.push(self.value(element_tag)?)?;
        }
        Ok(list)
    }

    fn compound(&mut self) -> Result<Compound> {
        let mut compound = Compound::new();
        loop {
            let tag = self.input.consume_tag()?;
            if tag == Tag::End {
                return Ok(compound);
            }
            let name = self.input.consume_str()?.to_owned();
            let value = self.value(tag)?;
            compound.insert(name, value)?;
        }
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.opts.max_depth {
            debug!("refusing nbt nested deeper than {}", self.opts.max_depth);
            return Err(Error::depth_limit(self.opts.max_depth));
        }
        self.depth += 1;
        Ok(())
    }

    fn seq_size(&mut self) -> Result<usize> {
        let size = self.input.consume_i32()?;
        let size: usize = size
            .try_into()
            .map_err(|_| Error::negative_length(size))?;

        if size > self.opts.max_seq_len {
            debug!(
                "refusing sequence of {} elements, max is {}",
                size, self.opts.max_seq_len
            );
            return Err(Error::seq_too_long(size, self.opts.max_seq_len));
        }
        Ok(size)
    }

    // Fail early rather than allocating for elements that cannot be there.
    fn check_available(&self, size: usize, width: usize) -> Result<()> {
        match size.checked_mul(width) {
            Some(needed) if needed <= self.input.remaining().len() => Ok(()),
            _ => Err(Error::unexpected_eof()),
        }
    }
}
