//! Equality-carrying sequences for memoizable models.
//!
//! `MemoSeq` wraps an already-materialized ordered collection together with a
//! type-level item-equality policy. Equality and hashing are defined by
//! pairwise element comparison under that policy, in order, which is what
//! allows a whole `AggregateInfo` to act as a memoization key.
//!
//! # Memory Layout
//!
//! Items live in an `Arc<[T]>`: models are cloned into and out of Salsa
//! storage on every revision, and a clone must not copy the elements.
//!
//! # Salsa Compatibility
//!
//! Has all required traits: Clone, Eq, `PartialEq`, Hash, Debug

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;
use std::sync::Arc;

use rustc_hash::FxHasher;

/// Item-equality policy for a `MemoSeq`.
///
/// Implementations must keep `eq` and `hash` consistent: items that compare
/// equal must feed identical bytes to the hasher.
pub trait ItemEq<T: ?Sized> {
    /// Compare two items.
    fn eq(a: &T, b: &T) -> bool;

    /// Feed one item into a hasher.
    fn hash<H: Hasher>(item: &T, state: &mut H);
}

/// Natural equality: defers to the item's own `Eq` and `Hash`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalEq;

impl<T: Eq + Hash + ?Sized> ItemEq<T> for NaturalEq {
    #[inline]
    fn eq(a: &T, b: &T) -> bool {
        a == b
    }

    #[inline]
    fn hash<H: Hasher>(item: &T, state: &mut H) {
        item.hash(state);
    }
}

/// ASCII case-insensitive equality for string-like items.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AsciiCaseInsensitive;

impl<S: AsRef<str> + ?Sized> ItemEq<S> for AsciiCaseInsensitive {
    fn eq(a: &S, b: &S) -> bool {
        a.as_ref().eq_ignore_ascii_case(b.as_ref())
    }

    fn hash<H: Hasher>(item: &S, state: &mut H) {
        for byte in item.as_ref().bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        // Terminator keeps ["ab", "c"] and ["a", "bc"] apart.
        state.write_u8(0xff);
    }
}

/// Ordered, length-indexed sequence with structural equality.
///
/// # Usage
///
/// ```
/// use aggen_ir::MemoSeq;
///
/// let a: MemoSeq<String> = vec!["class".to_string(), "new()".to_string()].into();
/// let b: MemoSeq<String> = ["class", "new()"].iter().map(ToString::to_string).collect();
/// assert_eq!(a, b);
/// assert_eq!(a.content_hash(), b.content_hash());
/// ```
pub struct MemoSeq<T, E = NaturalEq> {
    items: Arc<[T]>,
    /// `fn() -> E` keeps Send/Sync independent of the policy type.
    policy: PhantomData<fn() -> E>,
}

impl<T, E> MemoSeq<T, E> {
    /// Wrap an already-materialized collection.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::from(items),
            policy: PhantomData,
        }
    }

    /// Create an empty sequence.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the items as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the items in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T, E: ItemEq<T>> MemoSeq<T, E> {
    /// Deterministic structural hash of the contents.
    ///
    /// Uses `FxHasher`, so the value is stable across runs and processes
    /// (unlike `std`'s randomly seeded hasher).
    pub fn content_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl<T, E> Clone for MemoSeq<T, E> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            policy: PhantomData,
        }
    }
}

impl<T, E> Default for MemoSeq<T, E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, E> Deref for MemoSeq<T, E> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T, E> From<Vec<T>> for MemoSeq<T, E> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T, E> FromIterator<T> for MemoSeq<T, E> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T, E> IntoIterator for &'a MemoSeq<T, E> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, E: ItemEq<T>> PartialEq for MemoSeq<T, E> {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.items, &other.items) {
            return true;
        }
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(other.items.iter())
                .all(|(a, b)| E::eq(a, b))
    }
}

impl<T, E: ItemEq<T>> Eq for MemoSeq<T, E> {}

impl<T, E: ItemEq<T>> Hash for MemoSeq<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Length first so a prefix never hashes like the whole.
        state.write_usize(self.items.len());
        for item in self.items.iter() {
            E::hash(item, state);
        }
    }
}

impl<T: fmt::Debug, E> fmt::Debug for MemoSeq<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, E> serde::Serialize for MemoSeq<T, E> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>, E> serde::Deserialize<'de> for MemoSeq<T, E> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests;
