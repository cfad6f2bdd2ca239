//! Provides input/output functionality for structure file formats.
//!
//! Reading produces an ordered [`Structure`](crate::core::models::structure::Structure)
//! plus whatever format-specific metadata must survive a round trip; writing
//! serializes a structure back together with that metadata.

pub mod pdb;
pub mod traits;
