use nalgebra::Point3;

/// Represents a single coordinate record of a protein structure.
///
/// An atom carries every column of the fixed-width record it was read from, so
/// that writing it back out reproduces the original record. The removal
/// workflow never inspects these fields beyond the residue identity; atoms are
/// duplicated with [`Clone`] when they are transferred to an output structure,
/// which gives the output its own storage independent of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The atom serial number from the source file.
    pub serial: usize,
    /// The name of the atom (e.g., "CA", "N", "O").
    pub name: String,
    /// Alternate location indicator (`' '` when absent).
    pub alt_loc: char,
    /// The three-letter name of the parent residue (e.g., "ALA").
    pub res_name: String,
    /// Chain identifier (`' '` when absent).
    pub chain_id: char,
    /// Residue sequence number from the source file.
    pub res_seq: isize,
    /// Residue insertion code (`' '` when absent).
    pub insertion_code: char,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Occupancy of this conformer.
    pub occupancy: f64,
    /// Isotropic temperature factor.
    pub temp_factor: f64,
    /// Element symbol, right-justified in the source columns.
    pub element: String,
    /// Formal charge column, kept verbatim (e.g., "2+").
    pub charge: String,
    /// Whether the record was a `HETATM` rather than an `ATOM`.
    pub is_hetero: bool,
}

impl Atom {
    /// Creates a new `Atom` with default values for most fields.
    ///
    /// # Arguments
    ///
    /// * `serial` - The atom serial number.
    /// * `name` - The name of the atom.
    /// * `res_name` - The name of the residue this atom belongs to.
    /// * `chain_id` - The chain identifier.
    /// * `res_seq` - The residue sequence number.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(
        serial: usize,
        name: &str,
        res_name: &str,
        chain_id: char,
        res_seq: isize,
        position: Point3<f64>,
    ) -> Self {
        Self {
            serial,
            name: name.to_string(),
            alt_loc: ' ',
            res_name: res_name.to_string(),
            chain_id,
            res_seq,
            insertion_code: ' ',
            position,
            occupancy: 1.0,
            temp_factor: 0.0,
            element: String::new(),
            charge: String::new(),
            is_hetero: false,
        }
    }

    /// Returns `true` if `other` belongs to the same residue as `self`.
    ///
    /// Two atoms share a residue when their chain, sequence number, insertion
    /// code and residue name all agree.
    pub fn same_residue(&self, other: &Atom) -> bool {
        self.chain_id == other.chain_id
            && self.res_seq == other.res_seq
            && self.insertion_code == other.insertion_code
            && self.res_name == other.res_name
    }
}

/// Reports whether `next` opens a new residue after `prev`.
///
/// This is the residue boundary used when grouping a flat, file-ordered atom
/// list into residues. The first atom of a list always opens a residue.
pub fn starts_new_residue(prev: Option<&Atom>, next: &Atom) -> bool {
    match prev {
        Some(prev) => !prev.same_residue(next),
        None => true,
    }
}
