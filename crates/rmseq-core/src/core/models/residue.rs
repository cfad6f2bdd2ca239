use super::atom::Atom;

#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub name: String,            // Name of the residue (e.g., "ALA", "GLY")
    pub chain_id: char,          // Chain identifier of the parent chain
    pub seq_num: isize,          // Residue sequence number from source file
    pub insertion_code: char,    // Insertion code, ' ' when absent
    pub(crate) atoms: Vec<Atom>, // Atoms of this residue in file order
}

impl Residue {
    pub(crate) fn new(name: &str, chain_id: char, seq_num: isize, insertion_code: char) -> Self {
        Self {
            name: name.to_string(),
            chain_id,
            seq_num,
            insertion_code,
            atoms: Vec::new(),
        }
    }

    /// Creates a residue whose identity is taken from its first atom.
    pub(crate) fn from_atom(atom: &Atom) -> Self {
        Self::new(&atom.res_name, atom.chain_id, atom.res_seq, atom.insertion_code)
    }

    pub(crate) fn add_atom(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}
