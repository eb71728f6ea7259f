//! Serializable Cluster Snapshot
//!
//! [`CodableCluster`] is the plain serde shape of a [`Cluster`], with public
//! `primary` and `secondaries` fields. It is a copy taken at conversion
//! time, not a view.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::cluster::Cluster;
use crate::config::{CodecConfig, Format};
use crate::error::Result;

/// Serializable snapshot of a cluster
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodableCluster<T> {
    pub primary: T,
    pub secondaries: Vec<T>,
}

impl<T: Serialize> CodableCluster<T> {
    /// Encode using the configured format
    pub fn encode(&self, config: &CodecConfig) -> Result<Vec<u8>> {
        let bytes = match (config.format, config.pretty) {
            (Format::Json, false) => serde_json::to_vec(self)?,
            (Format::Json, true) => serde_json::to_vec_pretty(self)?,
            (Format::Bincode, _) => bincode::serialize(self)?,
            (Format::Toml, false) => toml::to_string(self)?.into_bytes(),
            (Format::Toml, true) => toml::to_string_pretty(self)?.into_bytes(),
        };
        tracing::trace!("Encoded cluster as {} ({} bytes)", config.format, bytes.len());
        Ok(bytes)
    }

    /// Encode as compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T: DeserializeOwned> CodableCluster<T> {
    /// Decode using the configured format
    pub fn decode(bytes: &[u8], config: &CodecConfig) -> Result<Self> {
        tracing::trace!("Decoding cluster from {} ({} bytes)", config.format, bytes.len());
        let snapshot: Self = match config.format {
            Format::Json => serde_json::from_slice(bytes)?,
            Format::Bincode => bincode::deserialize(bytes)?,
            Format::Toml => toml::from_str(std::str::from_utf8(bytes)?)?,
        };
        Ok(snapshot)
    }

    /// Decode from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<T: Clone + Serialize> Cluster<T> {
    /// Copy the cluster into its serializable snapshot
    pub fn to_codable(&self) -> CodableCluster<T> {
        CodableCluster {
            primary: self.primary().clone(),
            secondaries: self.secondaries().to_vec(),
        }
    }
}

impl<T: Serialize> Cluster<T> {
    /// Consume the cluster into its serializable snapshot
    pub fn into_codable(self) -> CodableCluster<T> {
        let (primary, secondaries) = self.into_parts();
        CodableCluster {
            primary,
            secondaries,
        }
    }
}

impl<T> From<CodableCluster<T>> for Cluster<T> {
    fn from(snapshot: CodableCluster<T>) -> Self {
        Cluster::new(snapshot.primary, snapshot.secondaries)
    }
}
