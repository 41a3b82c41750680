mod compound;
mod list;
mod ser;

use std::hash::{Hash, Hasher};

use crate::Tag;

pub use self::compound::Compound;
pub use self::list::List;

/// Element is a complete NBT value. It owns its data. Compounds and Lists are
/// trees of further elements.
///
/// `End` exists so that every one of the thirteen NBT tags has a variant, but
/// it is only a marker for the end of a compound in the binary format. It is
/// never a valid value: lists and compounds refuse it, and both codecs fail if
/// they meet one where a value belongs.
///
/// Equality is structural. Floats compare by bit pattern, so an element
/// holding `NaN` equals itself and `0.0` differs from `-0.0`. This keeps
/// `Eq` and `Hash` lawful.
///
/// ```
/// # use nbtree::{Compound, Element};
/// # fn main() -> nbtree::error::Result<()> {
/// let mut compound = Compound::new();
/// compound.insert("DataVersion", 3465)?;
///
/// let element = Element::Compound(compound);
/// match element.as_compound().and_then(|c| c.get("DataVersion")) {
///     Some(Element::Int(ver)) => println!("Version: {}", ver),
///     _ => {}
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub enum Element {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Element {
    /// The tag identifying this element's variant.
    pub fn tag(&self) -> Tag {
        match self {
            Element::End => Tag::End,
            Element::Byte(_) => Tag::Byte,
            Element::Short(_) => Tag::Short,
            Element::Int(_) => Tag::Int,
            Element::Long(_) => Tag::Long,
            Element::Float(_) => Tag::Float,
            Element::Double(_) => Tag::Double,
            Element::ByteArray(_) => Tag::ByteArray,
            Element::String(_) => Tag::String,
            Element::List(_) => Tag::List,
            Element::Compound(_) => Tag::Compound,
            Element::IntArray(_) => Tag::IntArray,
            Element::LongArray(_) => Tag::LongArray,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Element::Byte(v) => Some(v as i64),
            Element::Short(v) => Some(v as i64),
            Element::Int(v) => Some(v as i64),
            Element::Long(v) => Some(v),
            Element::Float(v) => Some(v as i64),
            Element::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Element::Byte(v) => Some(v as f64),
            Element::Short(v) => Some(v as f64),
            Element::Int(v) => Some(v as f64),
            Element::Long(v) => Some(v as f64),
            Element::Float(v) => Some(v as f64),
            Element::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Element::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Element::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Element::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Element::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_byte_array(&self) -> Option<&[i8]> {
        match self {
            Element::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            Element::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_long_array(&self) -> Option<&[i64]> {
        match self {
            Element::LongArray(v) => Some(v),
            _ => None,
        }
    }
}

// NaN has many bit patterns, all of them should be the same element.
fn f32_bits(v: f32) -> u32 {
    if v.is_nan() {
        f32::NAN.to_bits()
    } else {
        v.to_bits()
    }
}

fn f64_bits(v: f64) -> u64 {
    if v.is_nan() {
        f64::NAN.to_bits()
    } else {
        v.to_bits()
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        use Element::*;
        match (self, other) {
            (End, End) => true,
            (Byte(a), Byte(b)) => a == b,
            (Short(a), Short(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Long(a), Long(b)) => a == b,
            (Float(a), Float(b)) => f32_bits(*a) == f32_bits(*b),
            (Double(a), Double(b)) => f64_bits(*a) == f64_bits(*b),
            (ByteArray(a), ByteArray(b)) => a == b,
            (String(a), String(b)) => a == b,
            (List(a), List(b)) => a == b,
            (Compound(a), Compound(b)) => a == b,
            (IntArray(a), IntArray(b)) => a == b,
            (LongArray(a), LongArray(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        u8::from(self.tag()).hash(state);
        match self {
            Element::End => {}
            Element::Byte(v) => v.hash(state),
            Element::Short(v) => v.hash(state),
            Element::Int(v) => v.hash(state),
            Element::Long(v) => v.hash(state),
            Element::Float(v) => f32_bits(*v).hash(state),
            Element::Double(v) => f64_bits(*v).hash(state),
            Element::ByteArray(v) => v.hash(state),
            Element::String(v) => v.hash(state),
            Element::List(v) => v.hash(state),
            Element::Compound(v) => v.hash(state),
            Element::IntArray(v) => v.hash(state),
            Element::LongArray(v) => v.hash(state),
        }
    }
}

#[cfg(feature = "arbitrary1")]
fn het_list<'a, T, F>(u: &mut arbitrary::Unstructured<'a>, tag: Tag, f: F) -> arbitrary::Result<List>
where
    F: FnMut(T) -> Element,
    T: arbitrary::Arbitrary<'a>,
{
    let mut list = List::with_subtype(tag);
    for el in u
        .arbitrary_iter::<T>()?
        .collect::<arbitrary::Result<Vec<_>>>()?
        .into_iter()
        .map(f)
    {
        list.push(el)
            .map_err(|_| arbitrary::Error::IncorrectFormat)?;
    }
    Ok(list)
}

#[cfg(feature = "arbitrary1")]
fn arb_list(u: &mut arbitrary::Unstructured) -> arbitrary::Result<List> {
    Ok(match u.arbitrary::<Tag>()? {
        Tag::End => List::new(),
        Tag::Byte => het_list(u, Tag::Byte, Element::Byte)?,
        Tag::Short => het_list(u, Tag::Short, Element::Short)?,
        Tag::Int => het_list(u, Tag::Int, Element::Int)?,
        Tag::Long => het_list(u, Tag::Long, Element::Long)?,
        Tag::Float => het_list(u, Tag::Float, Element::Float)?,
        Tag::Double => het_list(u, Tag::Double, Element::Double)?,
        Tag::ByteArray => het_list(u, Tag::ByteArray, Element::ByteArray)?,
        Tag::String => het_list(u, Tag::String, Element::String)?,
        Tag::List => {
            // make a list of lists
            let len = u.arbitrary_len::<Element>()?;
            let mut list = List::with_subtype(Tag::List);
            for _ in 0..len {
                list.push(arb_list(u)?)
                    .map_err(|_| arbitrary::Error::IncorrectFormat)?;
            }
            list
        }
        Tag::Compound => het_list(u, Tag::Compound, Element::Compound)?,
        Tag::IntArray => het_list(u, Tag::IntArray, Element::IntArray)?,
        Tag::LongArray => het_list(u, Tag::LongArray, Element::LongArray)?,
    })
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Compound {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut compound = Compound::new();
        for entry in u.arbitrary_iter::<(std::string::String, Element)>()? {
            let (key, value) = entry?;
            compound
                .insert(key, value)
                .map_err(|_| arbitrary::Error::IncorrectFormat)?;
        }
        Ok(compound)
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Element {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        use Element::*;

        Ok(match u.arbitrary::<Tag>()? {
            Tag::End => return Err(arbitrary::Error::IncorrectFormat),
            Tag::Byte => Byte(u.arbitrary()?),
            Tag::Short => Short(u.arbitrary()?),
            Tag::Int => Int(u.arbitrary()?),
            Tag::Long => Long(u.arbitrary()?),
            Tag::Float => Float(u.arbitrary()?),
            Tag::Double => Double(u.arbitrary()?),
            Tag::ByteArray => ByteArray(u.arbitrary()?),
            Tag::String => String(u.arbitrary()?),
            Tag::Compound => Compound(u.arbitrary()?),
            Tag::IntArray => IntArray(u.arbitrary()?),
            Tag::LongArray => LongArray(u.arbitrary()?),

            // Lists need to all be the same type.
            Tag::List => List(arb_list(u)?),
        })
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Element {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Element {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(i16, Short);
from!(u16, Short, as i16);
from!(i32, Int);
from!(u32, Int, as i32);
from!(i64, Long);
from!(u64, Long, as i64);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(Vec<i8>, ByteArray);
from!(Vec<i32>, IntArray);
from!(Vec<i64>, LongArray);
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Element {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}
