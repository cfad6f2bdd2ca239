use crate::core::io::traits::StructureFile;
use crate::core::models::atom::Atom;
use crate::core::models::builder::StructureBuilder;
use crate::core::models::structure::Structure;
use nalgebra::Point3;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Shortest ATOM/HETATM record that still carries all three coordinates.
const MIN_COORDINATE_RECORD_LEN: usize = 54;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdbMetadata {
    /// Non-coordinate records preceding the first atom, kept verbatim.
    pub header_lines: Vec<String>,
}

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
    #[error("No atoms read from input file")]
    NoAtoms,
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for ATOM/HETATM record (must be at least 54 chars)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn char_at(line: &str, column: usize) -> char {
    line.get(column..column + 1)
        .and_then(|s| s.chars().next())
        .unwrap_or(' ')
}

/// Column ranges are 0-based and half-open; `columns` is the 1-based label used in messages.
fn parse_int(line: &str, line_num: usize, start: usize, end: usize) -> Result<isize, PdbError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: format!("{}-{}", start + 1, end),
            value: value.into(),
        },
    })
}

fn parse_float(line: &str, line_num: usize, start: usize, end: usize) -> Result<f64, PdbError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, end),
            value: value.into(),
        },
    })
}

fn parse_optional_float(
    line: &str,
    line_num: usize,
    start: usize,
    end: usize,
    default: f64,
) -> Result<f64, PdbError> {
    if slice_and_trim(line, start, end).is_empty() {
        Ok(default)
    } else {
        parse_float(line, line_num, start, end)
    }
}

fn parse_atom_record(line: &str, line_num: usize, is_hetero: bool) -> Result<Atom, PdbError> {
    if line.len() < MIN_COORDINATE_RECORD_LEN {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::LineTooShort,
        });
    }

    let name = slice_and_trim(line, 12, 16);
    if name.is_empty() {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::MissingRequiredField {
                columns: "13-16".into(),
            },
        });
    }

    let serial = parse_int(line, line_num, 6, 11)?;
    let serial = usize::try_from(serial).map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: "7-11".into(),
            value: serial.to_string(),
        },
    })?;
    let res_seq = parse_int(line, line_num, 22, 26)?;
    let x = parse_float(line, line_num, 30, 38)?;
    let y = parse_float(line, line_num, 38, 46)?;
    let z = parse_float(line, line_num, 46, 54)?;

    Ok(Atom {
        serial,
        name: name.to_string(),
        alt_loc: char_at(line, 16),
        res_name: slice_and_trim(line, 17, 20).to_string(),
        chain_id: char_at(line, 21),
        res_seq,
        insertion_code: char_at(line, 26),
        position: Point3::new(x, y, z),
        occupancy: parse_optional_float(line, line_num, 54, 60, 1.0)?,
        temp_factor: parse_optional_float(line, line_num, 60, 66, 0.0)?,
        element: slice_and_trim(line, 76, 78).to_string(),
        charge: slice_and_trim(line, 78, 80).to_string(),
        is_hetero,
    })
}

/// Atom names shorter than four characters start in column 14, except when
/// the name begins with a two-letter element symbol (e.g., "FE").
fn format_atom_name(atom: &Atom) -> String {
    let two_letter_element = atom.element.len() == 2
        && atom
            .name
            .to_ascii_uppercase()
            .starts_with(&atom.element.to_ascii_uppercase());
    if atom.name.len() >= 4 || two_letter_element {
        format!("{:<4}", atom.name)
    } else {
        format!(" {:<3}", atom.name)
    }
}

fn format_atom_record(atom: &Atom) -> String {
    let record_type = if atom.is_hetero { "HETATM" } else { "ATOM" };
    let line = format!(
        "{:<6}{:>5} {}{}{:>3} {}{:>4}{}   {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}          {:>2}{:<2}",
        record_type,
        atom.serial,
        format_atom_name(atom),
        atom.alt_loc,
        atom.res_name,
        atom.chain_id,
        atom.res_seq,
        atom.insertion_code,
        atom.position.x,
        atom.position.y,
        atom.position.z,
        atom.occupancy,
        atom.temp_factor,
        atom.element,
        atom.charge,
    );
    line.trim_end().to_string()
}

fn format_ter_record(last: &Atom) -> String {
    format!(
        "TER   {:>5}      {:>3} {}{:>4}{}",
        last.serial + 1,
        last.res_name,
        last.chain_id,
        last.res_seq,
        last.insertion_code
    )
    .trim_end()
    .to_string()
}

/// Keeps the first alternate location seen at each residue site.
///
/// A site is identified by chain, residue number and insertion code only, so
/// microheterogeneous conformers (`ASER`/`BTHR`) collapse onto the first one.
#[derive(Debug, Default)]
struct AltLocFilter {
    first_seen: Option<((char, isize, char), char)>,
}

impl AltLocFilter {
    fn keep(&mut self, atom: &Atom) -> bool {
        if atom.alt_loc == ' ' {
            return true;
        }
        let site = (atom.chain_id, atom.res_seq, atom.insertion_code);
        match self.first_seen {
            Some((seen_site, alt_loc)) if seen_site == site => atom.alt_loc == alt_loc,
            _ => {
                self.first_seen = Some((site, atom.alt_loc));
                true
            }
        }
    }
}

pub struct PdbFile;

impl StructureFile for PdbFile {
    type Metadata = PdbMetadata;
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<(Structure, Self::Metadata), Self::Error> {
        let mut builder = StructureBuilder::new();
        let mut metadata = PdbMetadata::default();
        let mut alt_locs = AltLocFilter::default();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let record_type = slice_and_trim(&line, 0, 6);
            match record_type {
                "ATOM" | "HETATM" => {
                    let atom = parse_atom_record(&line, line_num, record_type == "HETATM")?;
                    if alt_locs.keep(&atom) {
                        builder.add_atom(atom);
                    }
                }
                "ENDMDL" => {
                    if builder.atom_count() > 0 {
                        break;
                    }
                }
                "END" => break,
                "MODEL" | "TER" | "ANISOU" | "SIGUIJ" | "SIGATM" | "CONECT" | "MASTER" => {}
                _ => {
                    if builder.atom_count() == 0 && !line.trim().is_empty() {
                        metadata.header_lines.push(line);
                    }
                }
            }
        }

        if builder.atom_count() == 0 {
            return Err(PdbError::NoAtoms);
        }
        Ok((builder.build(), metadata))
    }

    fn write_to(
        structure: &Structure,
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        for line in &metadata.header_lines {
            writeln!(writer, "{}", line)?;
        }

        // TER follows the last polymer atom of each chain, ahead of its HETATMs.
        let mut last_polymer_atom: HashMap<char, usize> = HashMap::new();
        for (index, atom) in structure.atoms().enumerate() {
            if !atom.is_hetero {
                last_polymer_atom.insert(atom.chain_id, index);
            }
        }

        for (index, atom) in structure.atoms().enumerate() {
            writeln!(writer, "{}", format_atom_record(atom))?;
            if last_polymer_atom.get(&atom.chain_id) == Some(&index) {
                writeln!(writer, "{}", format_ter_record(atom))?;
            }
        }

        writeln!(writer, "END")?;
        Ok(())
    }
}
