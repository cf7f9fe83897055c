//! Ontology configuration: which ontology to open and how.
//!
//! Stored as TOML, e.g.
//!
//! ```toml
//! name = "robot-world"
//! iri = "http://example.org/robot-world"
//! file_path = "robot-world.json"
//! buffering = true
//! ```

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors from reading or writing configuration files.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read ontology config: {path}")]
    #[diagnostic(
        code(owloop::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse ontology config {path}: {message}")]
    #[diagnostic(
        code(owloop::config::parse),
        help("The config file must be valid TOML with at least `name` and `iri`.")
    )]
    ConfigParse { path: String, message: String },

    #[error("failed to serialize ontology config for {path}: {message}")]
    #[diagnostic(
        code(owloop::config::serialize),
        help("Config paths must be valid UTF-8 to be stored as TOML.")
    )]
    ConfigSerialize { path: String, message: String },

    #[error("failed to write ontology config: {path}")]
    #[diagnostic(
        code(owloop::config::write),
        help("Ensure you have write permissions to the config directory.")
    )]
    ConfigWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// OntologyConfig
// ---------------------------------------------------------------------------

/// How to open one ontology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyConfig {
    /// Registry key of the ontology.
    pub name: String,
    /// Base IRI; entity IRIs are `<iri>#<name>`.
    pub iri: String,
    /// Snapshot file. Loaded when it exists, otherwise the ontology starts empty.
    #[serde(default)]
    pub file_path: Option<PathBuf>,
    /// Defer reasoner synchronization until it is requested explicitly.
    #[serde(default)]
    pub buffering: bool,
}

impl OntologyConfig {
    pub fn new(name: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iri: iri.into(),
            file_path: None,
            buffering: false,
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn with_buffering(mut self, buffering: bool) -> Self {
        self.buffering = buffering;
        self
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ConfigRead {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Save to a TOML file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::ConfigSerialize {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::ConfigWrite {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::ConfigWrite {
            path: path.display().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_fields_missing() {
        let config: OntologyConfig =
            toml::from_str("name = \"robots\"\niri = \"http://example.org/robots\"\n").unwrap();
        assert_eq!(config.name, "robots");
        assert!(config.file_path.is_none());
        assert!(!config.buffering);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("conf").join("robots.toml");
        let config = OntologyConfig::new("robots", "http://example.org/robots")
            .with_file("robots.json")
            .with_buffering(true);
        config.save(&path).unwrap();
        assert_eq!(OntologyConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = OntologyConfig::load(Path::new("/nonexistent/owloop.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigRead { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn unencodable_path_is_serialize_error() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("robots.toml");
        let config = OntologyConfig::new("robots", "http://example.org/robots")
            .with_file(PathBuf::from(OsString::from_vec(vec![0x66, 0xff, 0x6f])));
        let err = config.save(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigSerialize { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn garbage_is_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "name = [").unwrap();
        let err = OntologyConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParse { .. }));
    }
}
