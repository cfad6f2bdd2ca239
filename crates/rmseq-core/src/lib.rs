//! # rmseq Core Library
//!
//! A library for excising the first occurrence of an amino-acid sequence motif
//! from a protein structure, producing a new structure without the matching
//! residues and their atoms.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Structure`,
//!   `Residue`, `Atom`), PDB I/O, one-letter sequence derivation and the
//!   validated `Motif` type.
//!
//! - **[`workflows`]: The Public API.** Complete transformations built on top
//!   of `core`, such as [`workflows::remove::remove_motif`].

pub mod core;
pub mod workflows;
