//! Derivation of one-letter amino-acid sequences from structures.
//!
//! The derived sequence has exactly one character per residue, in residue
//! order, so that character offset `i` always names the residue at index `i`.
//! Residues without a one-letter code (ligands, waters, unknown residues) are
//! written as [`UNKNOWN_RESIDUE_CODE`] rather than skipped.

use crate::core::models::structure::Structure;
use phf::{Map, phf_map};
use std::collections::TryReserveError;
use thiserror::Error;

/// Code used for any residue name missing from the lookup table.
pub const UNKNOWN_RESIDUE_CODE: char = 'X';

static ONE_LETTER_CODES: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D', "CYS" => 'C',
    "GLN" => 'Q', "GLU" => 'E', "GLY" => 'G', "HIS" => 'H', "ILE" => 'I',
    "LEU" => 'L', "LYS" => 'K', "MET" => 'M', "PHE" => 'F', "PRO" => 'P',
    "SER" => 'S', "THR" => 'T', "TRP" => 'W', "TYR" => 'Y', "VAL" => 'V',
    // Protonation and oxidation state variants
    "HID" => 'H', "HIE" => 'H', "HIP" => 'H', "HSD" => 'H', "HSE" => 'H', "HSP" => 'H',
    "CYX" => 'C', "CYM" => 'C',
    // Non-canonical and ambiguous residues
    "MSE" => 'M', "SEC" => 'U', "PYL" => 'O', "ASX" => 'B', "GLX" => 'Z',
};

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("no memory to extract sequence: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Returns the one-letter code for a three-letter residue name.
///
/// Lookup ignores surrounding whitespace and letter case.
pub fn one_letter_code(res_name: &str) -> char {
    let name = res_name.trim().to_ascii_uppercase();
    ONE_LETTER_CODES
        .get(name.as_str())
        .copied()
        .unwrap_or(UNKNOWN_RESIDUE_CODE)
}

/// Derives the one-letter sequence of `structure`.
///
/// # Errors
///
/// Returns [`SequenceError::Allocation`] if the sequence buffer cannot be
/// allocated.
pub fn derive_sequence(structure: &Structure) -> Result<String, SequenceError> {
    let mut sequence = String::new();
    // Every code in the table is ASCII, so one byte per residue suffices.
    sequence.try_reserve_exact(structure.residue_count())?;
    sequence.extend(
        structure
            .residues()
            .iter()
            .map(|residue| one_letter_code(&residue.name)),
    );
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use nalgebra::Point3;

    fn structure_of(names: &[&str]) -> Structure {
        Structure::from_atoms(names.iter().enumerate().map(|(i, name)| {
            Atom::new(i + 1, "CA", name, 'A', i as isize + 1, Point3::origin())
        }))
    }

    #[test]
    fn standard_residues_map_to_their_codes() {
        assert_eq!(one_letter_code("ALA"), 'A');
        assert_eq!(one_letter_code("TRP"), 'W');
        assert_eq!(one_letter_code("GLU"), 'E');
        assert_eq!(one_letter_code("LYS"), 'K');
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(one_letter_code(" gly "), 'G');
        assert_eq!(one_letter_code("Tyr"), 'Y');
    }

    #[test]
    fn variants_map_to_their_parent_residue() {
        assert_eq!(one_letter_code("HSE"), 'H');
        assert_eq!(one_letter_code("HIP"), 'H');
        assert_eq!(one_letter_code("CYX"), 'C');
        assert_eq!(one_letter_code("MSE"), 'M');
        assert_eq!(one_letter_code("SEC"), 'U');
    }

    #[test]
    fn unknown_residues_map_to_x() {
        assert_eq!(one_letter_code("HOH"), 'X');
        assert_eq!(one_letter_code("HEM"), 'X');
        assert_eq!(one_letter_code(""), 'X');
    }

    #[test]
    fn derived_sequence_has_one_character_per_residue() {
        let structure = structure_of(&["MET", "LYS", "HOH", "GLY", "UNK"]);
        let sequence = derive_sequence(&structure).unwrap();
        assert_eq!(sequence, "MKXGX");
        assert_eq!(sequence.chars().count(), structure.residue_count());
    }

    #[test]
    fn empty_structure_derives_empty_sequence() {
        let sequence = derive_sequence(&Structure::new()).unwrap();
        assert!(sequence.is_empty());
    }
}
