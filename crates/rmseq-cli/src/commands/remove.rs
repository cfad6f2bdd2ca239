use crate::config::RunConfig;
use crate::error::{CliError, Result};
use crate::utils::streams;
use rmseq::{
    core::io::{pdb::PdbFile, traits::StructureFile},
    workflows::{self, remove::RemovalStatus},
};
use tracing::info;

/// Loads the input structure, removes the motif and writes the result.
///
/// The output is opened only after the input has been parsed, so a bad input
/// never truncates an existing output file. A missing motif is not an error:
/// the structure is written unchanged and `RemovalStatus::NotFound` returned.
pub fn run(config: &RunConfig) -> Result<RemovalStatus> {
    info!("Loading input structure from {}", config.input);
    let mut reader = streams::open_input(&config.input)?;
    let (structure, metadata) =
        PdbFile::read_from(&mut reader).map_err(|e| CliError::FileParsing {
            input: config.input.to_string(),
            source: e.into(),
        })?;
    info!(
        "Loaded {} residue(s), {} atom(s) in {} chain(s).",
        structure.residue_count(),
        structure.atom_count(),
        structure.chain_ids().len()
    );

    let removal = workflows::remove::remove_motif(&structure, &config.motif)?;
    if let RemovalStatus::Removed { range } = &removal.status {
        info!(
            "Removed {} residue(s); {} remain.",
            range.len(),
            removal.structure.residue_count()
        );
    }

    let mut writer = streams::open_output(&config.output)?;
    PdbFile::write_to(&removal.structure, &metadata, &mut writer)
        .and_then(|()| writer.flush().map_err(Into::into))
        .map_err(|e| CliError::FileWriting {
            output: config.output.to_string(),
            source: e.into(),
        })?;
    info!("Wrote output structure to {}", config.output);

    Ok(removal.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Sink, Source};
    use rmseq::core::motif::Motif;
    use rmseq::workflows::error::RemovalError;
    use std::path::{Path, PathBuf};

    const INPUT: &str = "\
REMARK   1 TAGGED CONSTRUCT
ATOM      1  N   GLY A   1      11.104   6.134  -6.504  1.00 20.00           N
ATOM      2  N   SER A   2      12.000   7.000  -4.000  1.00 20.00           N
ATOM      3  N   HIS A   3      13.000   8.000  -3.000  1.00 20.00           N
ATOM      4  N   HIS A   4      14.000   9.000  -2.000  1.00 20.00           N
ATOM      5  N   MET A   5      15.000  10.000  -1.000  1.00 20.00           N
END
";

    fn config_for(dir: &Path, motif: &str) -> (RunConfig, PathBuf) {
        let input = dir.join("in.pdb");
        let output = dir.join("out.pdb");
        std::fs::write(&input, INPUT).unwrap();
        let config = RunConfig {
            motif: Motif::new(motif).unwrap(),
            input: Source::File(input),
            output: Sink::File(output.clone()),
        };
        (config, output)
    }

    fn atom_residue_names(pdb: &str) -> Vec<String> {
        pdb.lines()
            .filter(|l| l.starts_with("ATOM") || l.starts_with("HETATM"))
            .map(|l| l[17..20].to_string())
            .collect()
    }

    #[test]
    fn removes_motif_from_file_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let (config, output) = config_for(dir.path(), "GSHH");

        let status = run(&config).unwrap();
        assert_eq!(status, RemovalStatus::Removed { range: 0..4 });

        let written = std::fs::read_to_string(output).unwrap();
        assert!(written.starts_with("REMARK   1 TAGGED CONSTRUCT"));
        assert_eq!(atom_residue_names(&written), ["MET"]);
        assert!(written.ends_with("END\n"));
    }

    #[test]
    fn missing_motif_writes_structure_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let (config, output) = config_for(dir.path(), "WW");

        let status = run(&config).unwrap();
        assert_eq!(status, RemovalStatus::NotFound);

        let written = std::fs::read_to_string(output).unwrap();
        assert_eq!(
            atom_residue_names(&written),
            ["GLY", "SER", "HIS", "HIS", "MET"]
        );
    }

    #[test]
    fn motif_with_non_letters_never_matches_and_passes_through() {
        let dir = tempfile::tempdir().unwrap();
        let (config, output) = config_for(dir.path(), "gs*h");

        let status = run(&config).unwrap();
        assert_eq!(status, RemovalStatus::NotFound);

        let written = std::fs::read_to_string(output).unwrap();
        assert!(written.starts_with("REMARK   1 TAGGED CONSTRUCT"));
        assert_eq!(
            atom_residue_names(&written),
            ["GLY", "SER", "HIS", "HIS", "MET"]
        );
    }

    #[test]
    fn input_without_atoms_fails_before_output_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let (config, output) = config_for(dir.path(), "G");
        if let Source::File(input) = &config.input {
            std::fs::write(input, "HEADER    EMPTY\nEND\n").unwrap();
        }

        let err = run(&config).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
        assert!(err.to_string().contains("No atoms read from input file"));
        assert!(!output.exists());
    }

    #[test]
    fn missing_input_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, output) = config_for(dir.path(), "G");
        config.input = Source::File(dir.path().join("missing.pdb"));

        assert!(matches!(run(&config), Err(CliError::Open { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn output_may_overwrite_the_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, _) = config_for(dir.path(), "HH");
        let Source::File(input) = config.input.clone() else {
            unreachable!()
        };
        config.output = Sink::File(input.clone());

        run(&config).unwrap();
        let written = std::fs::read_to_string(input).unwrap();
        assert_eq!(atom_residue_names(&written), ["GLY", "SER", "MET"]);
    }

    #[test]
    fn removal_errors_convert_into_cli_errors() {
        let err: CliError = RemovalError::DerivationFailed {
            source: rmseq::core::sequence::SequenceError::Allocation(
                Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err(),
            ),
        }
        .into();
        assert!(matches!(err, CliError::Removal(_)));
        assert!(err.to_string().starts_with("Sequence derivation failed"));
    }
}
