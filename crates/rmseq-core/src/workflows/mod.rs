//! # Workflows Module
//!
//! High-level operations that tie the [`core`](crate::core) building blocks
//! together into complete structure transformations.
//!
//! - **Motif Removal** ([`remove`]) - Excise the first occurrence of a sequence
//!   motif from a structure, passing the structure through unchanged when the
//!   motif is absent.

pub mod error;
pub mod remove;
