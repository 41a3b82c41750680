use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::Tag;

/// Low level writes shared by the encoder. Anything implementing `Write` gets
/// these for free.
pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(u8::from(tag))?;
        Ok(())
    }

    /// Write a string as a `u16` byte count followed by its UTF-8 bytes.
    fn write_size_prefixed_str(&mut self, s: &str) -> Result<()> {
        let len: u16 = s
            .len()
            .try_into()
            .map_err(|_| Error::string_too_long(s.len()))?;
        self.write_u16::<BigEndian>(len)?;
        self.write_all(s.as_bytes())?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        self.write_i32::<BigEndian>(
            len.try_into()
                .map_err(|_| Error::bespoke(format!("len too large: {}", len)))?,
        )?;

        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write {}
