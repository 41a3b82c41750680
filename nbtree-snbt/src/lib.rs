//! Stringified NBT (SNBT) for [`nbtree`] elements. This is the text form of
//! NBT found in Minecraft commands, e.g. `{Count:1b,id:"minecraft:stone"}`.
//!
//! * [`from_str`] reads a document into an [`Element`].
//! * [`to_string`] prints an [`Element`].
//!
//! Printing then reading gives back an equal tree, including strings that
//! look like numbers, empty strings, and non-finite floats.
//!
//! ```
//! use nbtree::{Compound, Element};
//!
//! let el = nbtree_snbt::from_str(r#"{"test":"value"}"#).unwrap();
//!
//! let mut expected = Compound::new();
//! expected.insert("test", "value").unwrap();
//! assert_eq!(el, Element::Compound(expected));
//!
//! assert_eq!(nbtree_snbt::to_string(&el).unwrap(), "{test:value}");
//! ```
//!
//! See the [`de`] module for the grammar that is accepted.

use std::io::Write;

use log::trace;
use nbtree::{DeOpts, Element};

use crate::error::{Error, Result};

pub mod de;
pub mod error;
mod input;
mod parser;
mod ser;

#[cfg(test)]
mod tests;

/// Read an SNBT document with default [`DeOpts`].
pub fn from_str(input: &str) -> Result<Element> {
    from_str_with_opts(input, DeOpts::new())
}

/// Read an SNBT document. Only the depth limit of `opts` applies to text.
pub fn from_str_with_opts(input: &str, opts: DeOpts) -> Result<Element> {
    de::Decoder::new(input, opts).decode()
}

/// Print `element` as SNBT.
pub fn to_string(element: &Element) -> Result<String> {
    let vec = to_vec(element)?;
    String::from_utf8(vec).map_err(|e| Error::bespoke(e.to_string()))
}

/// Print `element` as SNBT into a byte vector.
pub fn to_vec(element: &Element) -> Result<Vec<u8>> {
    let mut printer = ser::Printer { writer: Vec::new() };
    printer.element(element)?;
    trace!(
        "printed {:?} as {} bytes of snbt",
        element.tag(),
        printer.writer.len()
    );
    Ok(printer.writer)
}

/// Print `element` as SNBT into `writer`. Nothing is written if printing
/// fails.
pub fn to_writer<W: Write>(mut writer: W, element: &Element) -> Result<()> {
    let vec = to_vec(element)?;
    writer.write_all(&vec)?;
    Ok(())
}
