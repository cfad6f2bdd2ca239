use crate::core::models::residue::Residue;
use crate::core::models::structure::Structure;
use crate::core::motif::Motif;
use crate::core::sequence::derive_sequence;
use crate::workflows::error::RemovalError;
use std::collections::TryReserveError;
use std::ops::Range;
use tracing::{debug, error, info, instrument, warn};

/// Outcome of a removal attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalStatus {
    /// The residues at these indices were excised.
    Removed { range: Range<usize> },
    /// The motif does not occur; the structure was passed through unchanged.
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Removal {
    pub structure: Structure,
    pub status: RemovalStatus,
}

/// Locates the first occurrence of `motif` in a derived sequence.
///
/// Returns the half-open residue index range covered by the match. Derived
/// sequences are ASCII, so byte offsets and residue indices coincide.
pub fn find_motif(sequence: &str, motif: &Motif) -> Option<Range<usize>> {
    let offset = sequence.find(motif.as_str())?;
    Some(offset..offset + motif.len())
}

/// Excises the first occurrence of `motif` from `structure`.
///
/// The input is never modified. On a match, the returned structure is a fresh
/// deep copy of every residue outside the matched range, in original order.
/// When the motif is absent the input is passed through unchanged with
/// [`RemovalStatus::NotFound`], which is a warning rather than an error.
///
/// Running out of memory while building the output terminates the process
/// with exit status 1; a partially built structure is never returned.
///
/// # Errors
///
/// Returns [`RemovalError::DerivationFailed`] if the one-letter sequence of
/// `structure` cannot be derived.
#[instrument(skip_all, name = "remove_motif", fields(motif = %motif))]
pub fn remove_motif(structure: &Structure, motif: &Motif) -> Result<Removal, RemovalError> {
    let sequence = derive_sequence(structure)?;
    debug_assert_eq!(sequence.len(), structure.residue_count());
    debug!(
        "Derived sequence of {} residues: {}",
        structure.residue_count(),
        sequence
    );

    let Some(range) = find_motif(&sequence, motif) else {
        warn!("Sequence {} not found; structure passed through unchanged.", motif);
        return Ok(Removal {
            structure: structure.clone(),
            status: RemovalStatus::NotFound,
        });
    };
    info!(
        "Removing residues {}..{} matching {}.",
        range.start, range.end, motif
    );

    let mut residues: Vec<Residue> = Vec::new();
    residues
        .try_reserve_exact(structure.residue_count() - range.len())
        .unwrap_or_else(|e| abort_on_allocation_failure(e));

    for (index, residue) in structure.residues().iter().enumerate() {
        if !range.contains(&index) {
            residues.push(copy_residue(residue));
        }
    }

    debug!("Output structure has {} residues.", residues.len());
    Ok(Removal {
        structure: Structure::from_residues(residues),
        status: RemovalStatus::Removed { range },
    })
}

fn copy_residue(residue: &Residue) -> Residue {
    let mut copy = Residue::new(
        &residue.name,
        residue.chain_id,
        residue.seq_num,
        residue.insertion_code,
    );
    copy.atoms
        .try_reserve_exact(residue.atom_count())
        .unwrap_or_else(|e| abort_on_allocation_failure(e));
    copy.atoms.extend(residue.atoms().iter().cloned());
    copy
}

fn abort_on_allocation_failure(err: TryReserveError) -> ! {
    error!("Out of memory while building the output structure: {}", err);
    eprintln!("Error: no memory for new structure");
    std::process::exit(1);
}
