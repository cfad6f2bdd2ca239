use super::atom::Atom;
use super::builder::StructureBuilder;
use super::residue::Residue;

/// Represents a protein structure as an ordered list of residues.
///
/// Residue order is the order in which residues appear in the source file, and
/// a residue's position in this list is its residue index. Every operation that
/// produces a new structure preserves the relative order of the residues and
/// atoms it keeps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    residues: Vec<Residue>,
}

impl Structure {
    /// Creates a new, empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a structure from residues that are already grouped and ordered.
    pub(crate) fn from_residues(residues: Vec<Residue>) -> Self {
        Self { residues }
    }

    /// Groups a flat, file-ordered atom list into residues.
    ///
    /// Consecutive atoms sharing a chain, sequence number, insertion code and
    /// residue name form one residue; see
    /// [`starts_new_residue`](super::atom::starts_new_residue).
    pub fn from_atoms(atoms: impl IntoIterator<Item = Atom>) -> Self {
        let mut builder = StructureBuilder::new();
        for atom in atoms {
            builder.add_atom(atom);
        }
        builder.build()
    }

    /// Returns the residues in traversal order.
    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    pub fn atom_count(&self) -> usize {
        self.residues.iter().map(Residue::atom_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Returns an iterator over every atom in file order.
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.residues.iter().flat_map(|residue| residue.atoms().iter())
    }

    /// Returns the distinct chain identifiers in order of first appearance.
    pub fn chain_ids(&self) -> Vec<char> {
        let mut ids: Vec<char> = Vec::new();
        for residue in &self.residues {
            if !ids.contains(&residue.chain_id) {
                ids.push(residue.chain_id);
            }
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn atom(serial: usize, name: &str, res_name: &str, chain_id: char, res_seq: isize) -> Atom {
        Atom::new(serial, name, res_name, chain_id, res_seq, Point3::origin())
    }

    fn sample_atoms() -> Vec<Atom> {
        vec![
            atom(1, "N", "ALA", 'A', 1),
            atom(2, "CA", "ALA", 'A', 1),
            atom(3, "N", "GLY", 'A', 2),
            atom(4, "N", "SER", 'B', 1),
            atom(5, "CA", "SER", 'B', 1),
            atom(6, "OG", "SER", 'B', 1),
        ]
    }

    #[test]
    fn new_structure_is_empty() {
        let structure = Structure::new();
        assert!(structure.is_empty());
        assert_eq!(structure.residue_count(), 0);
        assert_eq!(structure.atom_count(), 0);
        assert_eq!(structure.atoms().count(), 0);
        assert!(structure.chain_ids().is_empty());
    }

    #[test]
    fn from_atoms_groups_consecutive_atoms_into_residues() {
        let structure = Structure::from_atoms(sample_atoms());

        assert_eq!(structure.residue_count(), 3);
        assert_eq!(structure.atom_count(), 6);
        let names: Vec<_> = structure.residues().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["ALA", "GLY", "SER"]);
        assert_eq!(structure.residues()[2].atom_count(), 3);
    }

    #[test]
    fn atoms_iterates_in_file_order() {
        let structure = Structure::from_atoms(sample_atoms());
        let serials: Vec<_> = structure.atoms().map(|a| a.serial).collect();
        assert_eq!(serials, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn chain_ids_are_listed_once_in_order_of_appearance() {
        let mut atoms = sample_atoms();
        atoms.push(atom(7, "O", "HOH", 'A', 101));
        let structure = Structure::from_atoms(atoms);
        assert_eq!(structure.chain_ids(), vec!['A', 'B']);
    }

    #[test]
    fn non_consecutive_repeats_form_separate_residues() {
        let structure = Structure::from_atoms(vec![
            atom(1, "N", "ALA", 'A', 1),
            atom(2, "N", "GLY", 'A', 2),
            atom(3, "CA", "ALA", 'A', 1),
        ]);
        assert_eq!(structure.residue_count(), 3);
    }
}
