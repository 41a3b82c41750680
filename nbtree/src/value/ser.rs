use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::Serialize;

use crate::{Compound, Element, List};

/// Elements serialize as their plain payload: arrays and lists become
/// sequences, compounds become maps in insertion order. The tag information is
/// not kept, so this is for handing NBT to other formats rather than for
/// round trips.
impl Serialize for Element {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Element::End => Err(S::Error::custom("end tag is not a value")),
            Element::Byte(v) => serializer.serialize_i8(*v),
            Element::Short(v) => serializer.serialize_i16(*v),
            Element::Int(v) => serializer.serialize_i32(*v),
            Element::Long(v) => serializer.serialize_i64(*v),
            Element::Float(v) => serializer.serialize_f32(*v),
            Element::Double(v) => serializer.serialize_f64(*v),
            Element::String(v) => serializer.serialize_str(v),
            Element::ByteArray(v) => v.serialize(serializer),
            Element::IntArray(v) => v.serialize(serializer),
            Element::LongArray(v) => v.serialize(serializer),
            Element::List(v) => v.serialize(serializer),
            Element::Compound(v) => v.serialize(serializer),
        }
    }
}

impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for el in self {
            seq.serialize_element(el)?;
        }
        seq.end()
    }
}

impl Serialize for Compound {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
