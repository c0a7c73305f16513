//! Error type for loading registry and known-ULR files.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse lab registry: {0}")]
    Parse(#[from] toml::de::Error),
}
