//! Cluster Type
//!
//! A [`Cluster`] groups one distinguished *primary* value with zero or more
//! *secondary* values of the same type. The primary always exists, so a
//! cluster is never empty, and the order of the secondaries is preserved by
//! every operation.
//!
//! Operations are split by capability:
//! - [`transform`]: `map`, `filter_map`, `zip_map` and the `for_each` family
//! - [`query`]: predicate checks and min/max selection
//! - [`crate::codable`]: conversion to the serializable snapshot

pub mod query;
pub mod transform;

use std::iter::{Chain, Once};

/// A primary value plus an ordered list of secondaries
///
/// Fields are private; a cluster cannot be modified after construction.
/// `Clone` is the copy constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cluster<T> {
    primary: T,
    secondaries: Vec<T>,
}

impl<T> Cluster<T> {
    /// Create a cluster from an explicit primary and secondaries
    pub fn new(primary: T, secondaries: Vec<T>) -> Self {
        Self {
            primary,
            secondaries,
        }
    }

    /// Create a cluster holding only a primary
    pub fn single(primary: T) -> Self {
        Self {
            primary,
            secondaries: Vec::new(),
        }
    }

    /// Build a cluster from a vector: the first element becomes the primary,
    /// the rest the secondaries. Returns `None` for an empty vector.
    pub fn from_vec(mut values: Vec<T>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let primary = values.remove(0);
        Some(Self::new(primary, values))
    }

    /// Build a cluster from any sequence, in iteration order.
    /// Returns `None` if the sequence yields nothing.
    pub fn try_from_iter<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = values.into_iter();
        let primary = iter.next()?;
        Some(Self::new(primary, iter.collect()))
    }

    /// The distinguished element
    pub fn primary(&self) -> &T {
        &self.primary
    }

    /// The remaining elements, in order
    pub fn secondaries(&self) -> &[T] {
        &self.secondaries
    }

    /// Decompose into `(primary, secondaries)`
    pub fn into_parts(self) -> (T, Vec<T>) {
        (self.primary, self.secondaries)
    }

    /// Total number of elements (always at least 1)
    pub fn len(&self) -> usize {
        1 + self.secondaries.len()
    }

    /// Whether the cluster has no secondaries
    pub fn has_secondaries(&self) -> bool {
        !self.secondaries.is_empty()
    }

    /// Iterate over the primary, then each secondary
    pub fn iter(&self) -> Chain<Once<&T>, std::slice::Iter<'_, T>> {
        std::iter::once(&self.primary).chain(self.secondaries.iter())
    }

    /// All elements as a vector, primary first
    pub fn into_vec(self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len());
        values.push(self.primary);
        values.extend(self.secondaries);
        values
    }
}

impl<T: Clone> Cluster<T> {
    /// All elements as a vector, primary first
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: IntoIterator> Cluster<T> {
    /// Concatenate the contents of every element, primary first
    pub fn into_flattened(self) -> Vec<T::Item> {
        self.into_iter().flatten().collect()
    }
}

impl<U: Clone> Cluster<Vec<U>> {
    /// Concatenate the contents of every element, primary first
    pub fn flatten(&self) -> Vec<U> {
        let total = self.iter().map(Vec::len).sum();
        let mut flat = Vec::with_capacity(total);
        for inner in self.iter() {
            flat.extend_from_slice(inner);
        }
        flat
    }
}

impl<T> From<T> for Cluster<T> {
    fn from(primary: T) -> Self {
        Self::single(primary)
    }
}

impl<T> IntoIterator for Cluster<T> {
    type Item = T;
    type IntoIter = Chain<Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.primary).chain(self.secondaries)
    }
}

impl<'a, T> IntoIterator for &'a Cluster<T> {
    type Item = &'a T;
    type IntoIter = Chain<Once<&'a T>, std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Turn any sequence into a cluster (`vec.into_cluster()`)
pub trait IntoCluster: IntoIterator + Sized {
    /// First element becomes the primary; `None` if the sequence is empty
    fn into_cluster(self) -> Option<Cluster<Self::Item>> {
        Cluster::try_from_iter(self)
    }
}

impl<I: IntoIterator> IntoCluster for I {}
