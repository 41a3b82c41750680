use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::{Element, List};

/// An NBT compound: string keys mapped to elements.
///
/// Iteration follows insertion order. Inserting an existing key replaces its
/// value but keeps its place. Equality ignores order entirely: two compounds
/// are equal when they hold the same keys mapped to equal elements.
///
/// ```
/// # use nbtree::{Compound, Element};
/// let mut a = Compound::new();
/// a.insert("x", 1).unwrap();
/// a.insert("y", 2).unwrap();
/// a.insert("x", 3).unwrap();
/// assert_eq!(a.keys().collect::<Vec<_>>(), ["x", "y"]);
///
/// let mut b = Compound::new();
/// b.insert("y", 2).unwrap();
/// b.insert("x", 3).unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Compound {
    entries: IndexMap<String, Element>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, returning the value it replaced. End is not
    /// a value and is refused.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Element>,
    ) -> Result<Option<Element>> {
        let value = value.into();
        if let Element::End = value {
            return Err(Error::unexpected_end_tag());
        }
        Ok(self.entries.insert(key.into(), value))
    }

    pub fn get(&self, key: &str) -> Option<&Element> {
        self.entries.get(key)
    }

    /// Mutable access to a nested compound. Values are only ever replaced
    /// through [`insert`](Self::insert), so nothing can swap an End in.
    pub fn get_compound_mut(&mut self, key: &str) -> Option<&mut Compound> {
        self.entries.get_mut(key).and_then(Element::as_compound_mut)
    }

    pub fn get_list_mut(&mut self, key: &str) -> Option<&mut List> {
        self.entries.get_mut(key).and_then(Element::as_list_mut)
    }

    /// Remove `key`. The remaining entries keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<Element> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Element> {
        self.entries.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Element> {
        self.entries.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Element> {
        self.entries.values()
    }
}

impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).map_or(false, |v| v == value))
    }
}

impl Eq for Compound {}

impl Hash for Compound {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Combine per-entry hashes commutatively so order does not matter.
        let mut sum = 0u64;
        for entry in self.iter() {
            let mut h = DefaultHasher::new();
            entry.hash(&mut h);
            sum = sum.wrapping_add(h.finish());
        }
        self.len().hash(state);
        sum.hash(state);
    }
}

impl Index<&str> for Compound {
    type Output = Element;

    /// Panics if the key is not present, like `HashMap`.
    fn index(&self, key: &str) -> &Element {
        &self.entries[key]
    }
}

impl IntoIterator for Compound {
    type Item = (String, Element);
    type IntoIter = indexmap::map::IntoIter<String, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Element);
    type IntoIter = indexmap::map::Iter<'a, String, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
