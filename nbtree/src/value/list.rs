use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::{Element, Tag};

/// An NBT list. Every element of a list has the same tag.
///
/// A new list has no subtype. The first element pushed fixes it, and from then
/// on pushing an element with any other tag fails with
/// [`ErrorKind::TypeMismatch`][crate::error::ErrorKind::TypeMismatch], leaving
/// the list as it was. A subtype can also be given up front with
/// [`List::with_subtype`], which matters for empty lists since the binary
/// format records the subtype even when there are no elements.
///
/// Two lists are equal when their elements are equal in order. The subtype of
/// an empty list does not take part in equality.
///
/// ```
/// # use nbtree::{List, Tag};
/// let mut list = List::new();
/// list.push(1).unwrap();
/// list.push(2).unwrap();
/// assert_eq!(list.subtype(), Some(Tag::Int));
/// assert!(list.push("three").is_err());
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct List {
    subtype: Option<Tag>,
    elements: Vec<Element>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list that will only accept elements tagged `tag`.
    /// `Tag::End` is how the binary format marks a list with no type, so it
    /// gives an untyped list.
    pub fn with_subtype(tag: Tag) -> Self {
        Self {
            subtype: (tag != Tag::End).then_some(tag),
            elements: Vec::new(),
        }
    }

    /// The tag of the elements in this list, if it has been established.
    pub fn subtype(&self) -> Option<Tag> {
        self.subtype
    }

    /// The tag written to the binary format for this list. Lists with no
    /// established subtype use `Tag::End`.
    pub fn wire_subtype(&self) -> Tag {
        self.subtype.unwrap_or(Tag::End)
    }

    fn check(&self, tag: Tag) -> Result<()> {
        if tag == Tag::End {
            return Err(Error::unexpected_end_tag());
        }
        match self.subtype {
            Some(expected) if expected != tag => Err(Error::type_mismatch(expected, tag)),
            _ => Ok(()),
        }
    }

    /// Append an element, establishing the subtype if this is the first.
    pub fn push(&mut self, value: impl Into<Element>) -> Result<()> {
        let value = value.into();
        let tag = value.tag();
        self.check(tag)?;

        self.subtype.get_or_insert(tag);
        self.elements.push(value);
        Ok(())
    }

    /// Replace the element at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: impl Into<Element>) -> Result<Element> {
        let value = value.into();
        self.check(value.tag())?;

        match self.elements.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(Error::bespoke(format!(
                "index {} out of bounds for list of length {}",
                index,
                self.elements.len()
            ))),
        }
    }

    /// Remove the element at `index`. The subtype stays as it was, even if the
    /// list becomes empty.
    pub fn remove(&mut self, index: usize) -> Option<Element> {
        (index < self.elements.len()).then(|| self.elements.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.elements
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl Eq for List {}

impl Hash for List {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state)
    }
}

impl TryFrom<Vec<Element>> for List {
    type Error = Error;

    fn try_from(elements: Vec<Element>) -> Result<Self> {
        let mut list = List::new();
        for el in elements {
            list.push(el)?;
        }
        Ok(list)
    }
}

impl IntoIterator for List {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
