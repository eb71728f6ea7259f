//! Cluster Queries
//!
//! Predicate checks and min/max selection. The primary is always the
//! reference element: it is checked first and acts as the tie-breaker.

use super::Cluster;

impl<T> Cluster<T> {
    /// Whether `predicate` holds for the primary and every secondary
    pub fn all_satisfy<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        predicate(&self.primary) && self.secondaries.iter().all(predicate)
    }

    /// Fallible [`all_satisfy`](Self::all_satisfy)
    pub fn try_all_satisfy<E, F>(&self, mut predicate: F) -> Result<bool, E>
    where
        F: FnMut(&T) -> Result<bool, E>,
    {
        for element in self.iter() {
            if !predicate(element)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether every secondary maps to the same key as the primary.
    /// Trivially true when there are no secondaries.
    pub fn all_same_by_key<K, F>(&self, mut key: F) -> bool
    where
        K: PartialEq,
        F: FnMut(&T) -> K,
    {
        let reference = key(&self.primary);
        self.secondaries.iter().all(|s| key(s) == reference)
    }

    /// Smallest element under the strict "less than" comparator `less`.
    ///
    /// The minimum of the secondaries is found first (earliest wins ties),
    /// then the primary is returned only if it is strictly less than it.
    pub fn min_by<F>(&self, mut less: F) -> &T
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut secondaries = self.secondaries.iter();
        let Some(mut candidate) = secondaries.next() else {
            return &self.primary;
        };
        for element in secondaries {
            if less(element, candidate) {
                candidate = element;
            }
        }

        if less(&self.primary, candidate) {
            &self.primary
        } else {
            candidate
        }
    }

    /// Largest element under the strict "less than" comparator `less`.
    ///
    /// The maximum of the secondaries is found first (earliest wins ties),
    /// then it replaces the primary only if the primary is strictly less.
    pub fn max_by<F>(&self, mut less: F) -> &T
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut secondaries = self.secondaries.iter();
        let Some(mut candidate) = secondaries.next() else {
            return &self.primary;
        };
        for element in secondaries {
            if less(candidate, element) {
                candidate = element;
            }
        }

        if less(&self.primary, candidate) {
            candidate
        } else {
            &self.primary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_satisfy() {
        let cluster = Cluster::new("Hello", vec!["Worlds"]);
        assert!(!cluster.all_satisfy(|s| s.len() > 5));
        assert!(cluster.all_satisfy(|s| s.len() >= 5));
    }

    #[test]
    fn test_all_satisfy_short_circuits() {
        let cluster = Cluster::new(0, vec![1, 2]);
        let mut checked = Vec::new();

        let result = cluster.all_satisfy(|n| {
            checked.push(*n);
            *n > 0
        });
        assert!(!result);
        assert_eq!(checked, vec![0]);
    }

    #[test]
    fn test_try_all_satisfy() {
        let cluster = Cluster::new("1", vec!["2", "x"]);
        let result: anyhow::Result<bool> = cluster.try_all_satisfy(|s| Ok(s.parse::<u8>()? > 0));
        assert!(result.is_err());

        let cluster = Cluster::new("1", vec!["0", "x"]);
        let result: anyhow::Result<bool> = cluster.try_all_satisfy(|s| Ok(s.parse::<u8>()? > 0));
        assert!(!result.unwrap());
    }

    #[test]
    fn test_all_same_by_key() {
        let cluster = Cluster::new("Hello", vec!["Hello", "Boats"]);
        assert!(cluster.all_same_by_key(|s| s.len()));
        assert!(!cluster.all_same_by_key(|s| *s));

        assert!(Cluster::single("anything").all_same_by_key(|s| *s));
    }

    #[test]
    fn test_min() {
        let cluster = Cluster::new("Hello", vec!["World", ""]);
        let result = cluster.min_by(|a, b| a.len() < b.len());
        assert_eq!(*result, "");
    }

    #[test]
    fn test_max() {
        let cluster = Cluster::new("Hello", vec!["World", ""]);
        let result = cluster.max_by(|a, b| a.len() < b.len());
        assert_eq!(*result, "Hello");
    }

    #[test]
    fn test_min_max_single() {
        let cluster = Cluster::single(42);
        assert_eq!(*cluster.min_by(|a, b| a < b), 42);
        assert_eq!(*cluster.max_by(|a, b| a < b), 42);
    }

    #[test]
    fn test_tie_breaking() {
        // Equal lengths: min picks the secondary, max keeps the primary
        let cluster = Cluster::new("aa", vec!["bb", "cc"]);
        assert_eq!(*cluster.min_by(|a, b| a.len() < b.len()), "bb");
        assert_eq!(*cluster.max_by(|a, b| a.len() < b.len()), "aa");

        // Strictly smaller primary wins min, strictly larger secondary wins max
        let cluster = Cluster::new(2, vec![5, 3, 5]);
        assert_eq!(*cluster.min_by(|a, b| a < b), 2);
        assert!(std::ptr::eq(
            cluster.max_by(|a, b| a < b),
            &cluster.secondaries()[0]
        ));
    }
}
