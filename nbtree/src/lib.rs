//! nbtree is an in-memory tree of NBT values, the tagged binary format used by
//! *Minecraft: Java Edition* for world data, player inventories and the like,
//! together with a binary encoder and decoder for that tree.
//!
//! * For the value tree see [`Element`], [`List`] and [`Compound`].
//! * For decoding see [`from_bytes`] and [`from_bytes_with_opts`].
//! * For encoding see [`to_bytes`] and [`to_writer`].
//!
//! The stringified form (SNBT) lives in the sibling `nbtree-snbt` crate, which
//! works on the same tree.
//!
//! # Quick example
//!
//! ```
//! use nbtree::{Compound, Element, List};
//!
//! # fn main() -> nbtree::error::Result<()> {
//! let mut names = List::new();
//! names.push("test")?;
//!
//! let mut root = Compound::new();
//! root.insert("test", names)?;
//!
//! let bytes = nbtree::to_bytes(&Element::Compound(root.clone()))?;
//! assert_eq!(
//!     bytes,
//!     [
//!         0x0A, 0x00, 0x00, 0x09, 0x00, 0x04, b't', b'e', b's', b't', 0x08, 0x00,
//!         0x00, 0x00, 0x01, 0x00, 0x04, b't', b'e', b's', b't', 0x00
//!     ]
//! );
//!
//! let decoded = nbtree::from_bytes(&bytes)?;
//! assert_eq!(decoded, Element::Compound(root));
//! # Ok(())
//! # }
//! ```
//!
//! # The root name
//!
//! A binary NBT document is a single named value. [`to_bytes`] always writes
//! an empty name for the root, whatever the root is. Use [`to_bytes_named`]
//! and [`from_bytes_named`] when the name matters.

pub mod de;
pub mod error;
pub mod ser;

mod input;
mod value;

pub use de::{from_bytes, from_bytes_named, from_bytes_with_opts};
pub use ser::{to_bytes, to_bytes_named, to_writer};
pub use value::*;

#[cfg(test)]
mod test;

/// An NBT tag. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other objects, all of the same type.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

impl Tag {
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Tag::Byte | Tag::Short | Tag::Int | Tag::Long | Tag::Float | Tag::Double
        )
    }

    pub const fn is_array(self) -> bool {
        matches!(self, Tag::ByteArray | Tag::IntArray | Tag::LongArray)
    }

    pub const fn is_composite(self) -> bool {
        matches!(self, Tag::List | Tag::Compound)
    }
}

// Crates exist to generate this code for us, but the tags will never change,
// so it is written out by hand.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 3,
            Tag::Long => 4,
            Tag::Float => 5,
            Tag::Double => 6,
            Tag::ByteArray => 7,
            Tag::String => 8,
            Tag::List => 9,
            Tag::Compound => 10,
            Tag::IntArray => 11,
            Tag::LongArray => 12,
        }
    }
}

/// Options controlling how much a decoder is willing to accept. Used by both
/// the binary decoder here and the SNBT reader.
///
/// ```
/// # use nbtree::DeOpts;
/// let opts = DeOpts::new().max_seq_len(1024).max_depth(16);
/// assert!(nbtree::from_bytes_with_opts(&[0x0A, 0, 0, 0], opts).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeOpts {
    pub(crate) max_seq_len: usize,
    pub(crate) max_depth: usize,
}

impl DeOpts {
    pub fn new() -> Self {
        Self {
            max_seq_len: i32::MAX as usize,
            max_depth: 512,
        }
    }

    /// Maximum number of elements a list or array may declare.
    pub fn max_seq_len(mut self, value: usize) -> Self {
        self.max_seq_len = value;
        self
    }

    /// Maximum nesting of lists and compounds. The root container counts as
    /// depth one.
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }

    pub fn depth_limit(&self) -> usize {
        self.max_depth
    }
}

impl Default for DeOpts {
    fn default() -> Self {
        Self::new()
    }
}
