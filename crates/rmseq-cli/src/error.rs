use rmseq::core::motif::MotifError;
use rmseq::workflows::error::RemovalError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Removal(#[from] RemovalError),

    #[error("Invalid sequence: {0}")]
    Motif(#[from] MotifError),

    #[error("Cannot open '{path}': {source}", path = path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {input}: {source}")]
    FileParsing {
        input: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to write {output}: {source}")]
    FileWriting {
        output: String,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
