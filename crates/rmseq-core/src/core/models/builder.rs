use super::atom::{Atom, starts_new_residue};
use super::residue::Residue;
use super::structure::Structure;

/// Incrementally assembles a [`Structure`] from atoms delivered in file order.
///
/// A residue is opened automatically whenever an atom does not belong to the
/// residue currently being filled.
#[derive(Debug, Default)]
pub struct StructureBuilder {
    residues: Vec<Residue>,
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_atom(&mut self, atom: Atom) -> &mut Self {
        let last_atom = self.residues.last().and_then(|r| r.atoms().last());
        if starts_new_residue(last_atom, &atom) {
            self.residues.push(Residue::from_atom(&atom));
        }
        // A residue was pushed above if none existed.
        if let Some(residue) = self.residues.last_mut() {
            residue.add_atom(atom);
        }
        self
    }

    pub fn atom_count(&self) -> usize {
        self.residues.iter().map(Residue::atom_count).sum()
    }

    pub fn build(self) -> Structure {
        Structure::from_residues(self.residues)
    }
}
