use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "pdbrmseq",
    author = "Tony Kan",
    version,
    about = "pdbrmseq - Removes the first occurrence of a specified sequence from a PDB file.",
    after_help = "The sequence is given as one-letter amino acid codes (case-insensitive). \
Only the first occurrence is removed. If the sequence is not found, a warning is \
printed and the structure is written out unchanged.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Sequence of one-letter residue codes to remove
    #[arg(value_name = "SEQUENCE")]
    pub sequence: String,

    /// Input PDB file [default: standard input]
    #[arg(value_name = "INFILE")]
    pub infile: Option<PathBuf>,

    /// Output PDB file [default: standard output]
    #[arg(value_name = "OUTFILE")]
    pub outfile: Option<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output, including the not-found warning
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn sequence_alone_uses_standard_streams() {
        let cli = Cli::try_parse_from(["pdbrmseq", "HHHHHH"]).unwrap();
        assert_eq!(cli.sequence, "HHHHHH");
        assert!(cli.infile.is_none());
        assert!(cli.outfile.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn accepts_input_and_output_files() {
        let cli = Cli::try_parse_from(["pdbrmseq", "cde", "in.pdb", "out.pdb"]).unwrap();
        assert_eq!(cli.sequence, "cde");
        assert_eq!(cli.infile, Some(PathBuf::from("in.pdb")));
        assert_eq!(cli.outfile, Some(PathBuf::from("out.pdb")));
    }

    #[test]
    fn missing_sequence_is_an_error() {
        let err = Cli::try_parse_from(["pdbrmseq"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn more_than_three_positionals_is_an_error() {
        let err = Cli::try_parse_from(["pdbrmseq", "A", "in.pdb", "out.pdb", "extra"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_flag_is_reported_as_display_help() {
        let err = Cli::try_parse_from(["pdbrmseq", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let err = Cli::try_parse_from(["pdbrmseq", "-x", "A"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn logging_flags_are_parsed() {
        let cli = Cli::try_parse_from(["pdbrmseq", "-vv", "--log-file", "run.log", "A"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_file, Some(PathBuf::from("run.log")));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let err = Cli::try_parse_from(["pdbrmseq", "-q", "-v", "A"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }
}
