use byteorder::{BigEndian, ReadBytesExt};

use crate::{
    error::{Error, Result},
    Tag,
};

/// Cursor over the bytes being decoded. Every read either takes exactly the
/// bytes it asked for or fails with an unexpected EOF, leaving nothing half
/// consumed.
pub(crate) struct Slice<'de> {
    data: &'de [u8],
}

macro_rules! consume_be {
    ($($name:ident: $ty:ty => $read:ident;)*) => {
        $(
            pub fn $name(&mut self) -> Result<$ty> {
                let mut bs = self.consume_bytes(std::mem::size_of::<$ty>())?;
                Ok(bs.$read::<BigEndian>()?)
            }
        )*
    };
}

impl<'de> Slice<'de> {
    pub fn new(data: &'de [u8]) -> Self {
        Self { data }
    }

    pub fn remaining(&self) -> &'de [u8] {
        self.data
    }

    pub fn consume_bytes(&mut self, n: usize) -> Result<&'de [u8]> {
        if n > self.data.len() {
            return Err(Error::unexpected_eof());
        }
        let (taken, rest) = self.data.split_at(n);
        self.data = rest;
        Ok(taken)
    }

    pub fn consume_tag(&mut self) -> Result<Tag> {
        let id = self.consume_i8()? as u8;
        Tag::try_from(id).map_err(|_| Error::invalid_tag(id))
    }

    /// A `u16` byte count followed by that many bytes of UTF-8.
    pub fn consume_str(&mut self) -> Result<&'de str> {
        let len = self.consume_u16()?;
        let bytes = self.consume_bytes(len as usize)?;
        std::str::from_utf8(bytes).map_err(|_| Error::nonunicode_string(bytes))
    }

    pub fn consume_i8(&mut self) -> Result<i8> {
        Ok(self.consume_bytes(1)?[0] as i8)
    }

    consume_be! {
        consume_u16: u16 => read_u16;
        consume_i16: i16 => read_i16;
        consume_i32: i32 => read_i32;
        consume_i64: i64 => read_i64;
        consume_f32: f32 => read_f32;
        consume_f64: f64 => read_f64;
    }
}
