use crate::core::sequence::SequenceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemovalError {
    #[error("Sequence derivation failed: {source}")]
    DerivationFailed {
        #[from]
        source: SequenceError,
    },
}
