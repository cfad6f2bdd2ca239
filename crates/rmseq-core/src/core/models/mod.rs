//! # Core Models Module
//!
//! This module contains the data structures used to represent protein
//! structures in rmseq.
//!
//! ## Overview
//!
//! A [`structure::Structure`] is an ordered list of [`residue::Residue`]s, each
//! of which owns an ordered list of [`atom::Atom`]s. Order is always the order
//! of the source file, and a residue's position in the structure is its
//! residue index. The one-letter sequence derived from a structure has exactly
//! one character per residue index, which is what allows a match in the
//! sequence to be mapped back onto residues.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual coordinate records and the residue boundary rule
//! - [`residue`] - A contiguous run of atoms sharing one residue identity
//! - [`structure`] - The ordered residue list
//! - [`builder`] - Incremental construction from file-ordered atoms
//!
//! ## Usage
//!
//! ```ignore
//! use rmseq::core::models::{atom::Atom, builder::StructureBuilder};
//!
//! let mut builder = StructureBuilder::new();
//! builder.add_atom(Atom::new(1, "N", "ALA", 'A', 1, Point3::origin()));
//! let structure = builder.build();
//! ```

pub mod atom;
pub mod builder;
pub mod residue;
pub mod structure;
