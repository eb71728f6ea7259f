//! Cluster - Primary Plus Secondaries
//!
//! A small generic container that groups one distinguished *primary* value
//! with an ordered list of *secondary* values of the same type, such as a
//! main selection plus additional selections in an editor, or a leader plus
//! followers.
//!
//! # Features
//!
//! - Never empty: the primary always exists, empty input yields `None`
//! - Immutable after construction, cheap value semantics via `Clone`
//! - Element-wise `map`, `filter_map`, `for_each` and their fallible `try_` forms
//! - Paired `zip_` operations that reject mismatched secondary counts
//! - Predicate checks and min/max selection with the primary as tie-breaker
//! - Serializable snapshot (`CodableCluster`) in JSON, bincode or TOML
//!
//! ```
//! use cluster::prelude::*;
//!
//! let widths = Cluster::new("Hello", vec!["World", ""]).map(|s| s.len());
//! assert_eq!(widths.to_vec(), vec![5, 5, 0]);
//!
//! let empty: Vec<u8> = Vec::new();
//! assert!(empty.into_cluster().is_none());
//! ```

pub mod cluster;
pub mod codable;
pub mod config;
pub mod error;

pub use cluster::{Cluster, IntoCluster};
pub use codable::CodableCluster;
pub use config::{CodecConfig, Format};
pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::cluster::{Cluster, IntoCluster};
    pub use crate::codable::CodableCluster;
    pub use crate::config::{CodecConfig, Format};
    pub use crate::error::{Error, Result};
}
