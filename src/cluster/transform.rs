//! Cluster Transforms
//!
//! Element-wise mapping and traversal. Every operation visits the primary
//! first and then the secondaries in order. The `try_` variants stop at the
//! first callback error and return it unchanged; no partial cluster escapes.
//!
//! Paired (`zip_`) operations require both clusters to have the same number
//! of secondaries. The check runs before any callback is invoked.

use super::Cluster;
use crate::error::{Error, Result};

impl<T> Cluster<T> {
    /// Verify that `other` can be walked in lockstep with `self`
    fn check_paired<U>(&self, other: &Cluster<U>) -> Result<()> {
        let expected = self.secondaries.len();
        let actual = other.secondaries.len();
        if expected != actual {
            tracing::debug!(
                "Paired operation rejected: {} secondaries vs {}",
                expected,
                actual
            );
            return Err(Error::MismatchedSecondaryCount { expected, actual });
        }
        Ok(())
    }

    /// Apply `f` to every element, producing a cluster of the results
    pub fn map<U, F>(&self, mut f: F) -> Cluster<U>
    where
        F: FnMut(&T) -> U,
    {
        let primary = f(&self.primary);
        let secondaries = self.secondaries.iter().map(f).collect();
        Cluster::new(primary, secondaries)
    }

    /// Fallible [`map`](Self::map)
    pub fn try_map<U, E, F>(&self, mut f: F) -> std::result::Result<Cluster<U>, E>
    where
        F: FnMut(&T) -> std::result::Result<U, E>,
    {
        let primary = f(&self.primary)?;
        let secondaries = self
            .secondaries
            .iter()
            .map(f)
            .collect::<std::result::Result<Vec<_>, E>>()?;
        Ok(Cluster::new(primary, secondaries))
    }

    /// Apply `f` to every element, keeping only the `Some` results.
    ///
    /// If `f` yields `None` for the primary the whole cluster collapses to
    /// `None` and the secondaries are never visited. Secondaries yielding
    /// `None` are dropped; the remaining ones keep their relative order.
    pub fn filter_map<U, F>(&self, mut f: F) -> Option<Cluster<U>>
    where
        F: FnMut(&T) -> Option<U>,
    {
        let primary = f(&self.primary)?;
        let secondaries = self.secondaries.iter().filter_map(f).collect();
        Some(Cluster::new(primary, secondaries))
    }

    /// Fallible [`filter_map`](Self::filter_map)
    pub fn try_filter_map<U, E, F>(&self, mut f: F) -> std::result::Result<Option<Cluster<U>>, E>
    where
        F: FnMut(&T) -> std::result::Result<Option<U>, E>,
    {
        let Some(primary) = f(&self.primary)? else {
            return Ok(None);
        };

        let mut secondaries = Vec::with_capacity(self.secondaries.len());
        for secondary in &self.secondaries {
            if let Some(mapped) = f(secondary)? {
                secondaries.push(mapped);
            }
        }
        Ok(Some(Cluster::new(primary, secondaries)))
    }

    /// Combine this cluster with `other` element by element
    pub fn zip_map<U, V, F>(&self, other: &Cluster<U>, mut f: F) -> Result<Cluster<V>>
    where
        F: FnMut(&T, &U) -> V,
    {
        self.check_paired(other)?;

        let primary = f(&self.primary, &other.primary);
        let secondaries = self
            .secondaries
            .iter()
            .zip(&other.secondaries)
            .map(|(mine, theirs)| f(mine, theirs))
            .collect();
        Ok(Cluster::new(primary, secondaries))
    }

    /// Fallible [`zip_map`](Self::zip_map). A count mismatch is reported
    /// through the caller's error type via `From<Error>`.
    pub fn try_zip_map<U, V, E, F>(
        &self,
        other: &Cluster<U>,
        mut f: F,
    ) -> std::result::Result<Cluster<V>, E>
    where
        E: From<Error>,
        F: FnMut(&T, &U) -> std::result::Result<V, E>,
    {
        self.check_paired(other)?;

        let primary = f(&self.primary, &other.primary)?;
        let secondaries = self
            .secondaries
            .iter()
            .zip(&other.secondaries)
            .map(|(mine, theirs)| f(mine, theirs))
            .collect::<std::result::Result<Vec<_>, E>>()?;
        Ok(Cluster::new(primary, secondaries))
    }

    /// Call `f` on the primary, then on each secondary
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        f(&self.primary);
        self.secondaries.iter().for_each(f);
    }

    /// Fallible [`for_each`](Self::for_each)
    pub fn try_for_each<E, F>(&self, f: F) -> std::result::Result<(), E>
    where
        F: FnMut(&T) -> std::result::Result<(), E>,
    {
        self.iter().try_for_each(f)
    }

    /// Call `f` on each pair of corresponding elements
    pub fn zip_for_each<U, F>(&self, other: &Cluster<U>, mut f: F) -> Result<()>
    where
        F: FnMut(&T, &U),
    {
        self.check_paired(other)?;

        f(&self.primary, &other.primary);
        for (mine, theirs) in self.secondaries.iter().zip(&other.secondaries) {
            f(mine, theirs);
        }
        Ok(())
    }

    /// Fallible [`zip_for_each`](Self::zip_for_each)
    pub fn try_zip_for_each<U, E, F>(&self, other: &Cluster<U>, mut f: F) -> std::result::Result<(), E>
    where
        E: From<Error>,
        F: FnMut(&T, &U) -> std::result::Result<(), E>,
    {
        self.check_paired(other)?;

        f(&self.primary, &other.primary)?;
        for (mine, theirs) in self.secondaries.iter().zip(&other.secondaries) {
            f(mine, theirs)?;
        }
        Ok(())
    }
}
