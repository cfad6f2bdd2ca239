//! # Core Module
//!
//! This module provides the stateless building blocks of rmseq: the residue and
//! atom data model, structure file I/O, one-letter sequence derivation and the
//! motif type.
//!
//! - **Structure Representation** ([`models`]) - Atoms, residues and ordered structures
//! - **File I/O** ([`io`]) - Reading and writing fixed-column PDB files
//! - **Sequences** ([`sequence`]) - Residue names to one-letter codes
//! - **Motifs** ([`motif`]) - Validated, canonicalized search sequences

pub mod io;
pub mod models;
pub mod motif;
pub mod sequence;
