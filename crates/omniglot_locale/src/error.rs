use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VariantMapError {
    #[error("failed to read variant mapping `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed variant mapping: {0}")]
    Parse(#[from] serde_yaml::Error),
}
