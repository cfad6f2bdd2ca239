use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A non-empty run of one-letter residue codes to search for.
///
/// Letters are canonicalized to uppercase on construction, matching the
/// alphabet produced by [`derive_sequence`](crate::core::sequence::derive_sequence).
/// Any other character is kept as given; a motif containing one simply never
/// matches a derived sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Motif(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MotifError {
    #[error("sequence to remove cannot be empty")]
    Empty,
}

impl Motif {
    pub fn new(letters: &str) -> Result<Self, MotifError> {
        let letters = letters.trim();
        if letters.is_empty() {
            return Err(MotifError::Empty);
        }
        Ok(Self(letters.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of residues covered by the motif.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Motif {
    type Err = MotifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
