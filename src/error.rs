use std::path::PathBuf;

use thiserror::Error;

/// Failures loading pricing data or formatting configuration from disk.
/// The money and format functions themselves never fail.
#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Could not read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in {path:?}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
