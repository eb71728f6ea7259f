//! Codec Configuration
//!
//! Selects the wire format used when a [`CodableCluster`] is encoded or
//! decoded. Configuration is plain serde data and is usually loaded from
//! TOML:
//!
//! ```toml
//! format = "json"
//! pretty = true
//! ```
//!
//! [`CodableCluster`]: crate::codable::CodableCluster

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Wire format for cluster snapshots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// JSON via serde_json
    #[default]
    Json,
    /// Compact binary via bincode
    Bincode,
    /// TOML document
    Toml,
}

impl Format {
    /// Whether the format produces human-readable text
    pub fn is_text(&self) -> bool {
        matches!(self, Format::Json | Format::Toml)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Bincode => write!(f, "bincode"),
            Format::Toml => write!(f, "toml"),
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "bincode" => Ok(Format::Bincode),
            "toml" => Ok(Format::Toml),
            other => Err(Error::Config(format!("unknown format: {}", other))),
        }
    }
}

/// Codec configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Wire format (json, bincode, toml)
    #[serde(default)]
    pub format: Format,

    /// Pretty-print text formats
    #[serde(default)]
    pub pretty: bool,
}

impl CodecConfig {
    /// Compact JSON
    pub fn json() -> Self {
        Self {
            format: Format::Json,
            pretty: false,
        }
    }

    /// Bincode
    pub fn bincode() -> Self {
        Self {
            format: Format::Bincode,
            pretty: false,
        }
    }

    /// TOML
    pub fn toml() -> Self {
        Self {
            format: Format::Toml,
            pretty: false,
        }
    }

    /// Enable or disable pretty printing
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Loading codec configuration from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: CodecConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.pretty && !self.format.is_text() {
            return Err(Error::Config(format!(
                "pretty printing is not supported for {}",
                self.format
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_config() {
        let toml = r#"
format = "toml"
pretty = true
"#;

        let config = CodecConfig::from_str(toml).unwrap();
        assert_eq!(config.format, Format::Toml);
        assert!(config.pretty);
    }

    #[test]
    fn test_defaults() {
        let config = CodecConfig::from_str("").unwrap();
        assert_eq!(config, CodecConfig::json());
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        let err = CodecConfig::from_str("format = \"bincode\"\npretty = true").unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = CodecConfig::from_str("format = \"yaml\"").unwrap_err();
        assert!(matches!(err, Error::TomlDe(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "format = \"bincode\"").unwrap();

        let config = CodecConfig::from_file(file.path()).unwrap();
        assert_eq!(config, CodecConfig::bincode());

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            CodecConfig::from_file(&missing),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_format_names() {
        for format in [Format::Json, Format::Bincode, Format::Toml] {
            assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
        }
        assert_eq!(" JSON ".parse::<Format>().unwrap(), Format::Json);
        assert!("xml".parse::<Format>().is_err());
    }
}
