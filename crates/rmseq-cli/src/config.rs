use crate::cli::Cli;
use crate::error::Result;
use rmseq::core::motif::Motif;
use std::fmt;
use std::path::{Path, PathBuf};

/// Path argument that selects the standard stream instead of a file.
const STD_STREAM_PATH: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

/// Validated settings for a single removal run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub motif: Motif,
    pub input: Source,
    pub output: Sink,
}

fn is_std_stream(path: &Path) -> bool {
    path.as_os_str() == STD_STREAM_PATH
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let motif = Motif::new(&cli.sequence)?;

        let input = match &cli.infile {
            Some(path) if !is_std_stream(path) => Source::File(path.clone()),
            _ => Source::Stdin,
        };
        let output = match &cli.outfile {
            Some(path) if !is_std_stream(path) => Sink::File(path.clone()),
            _ => Sink::Stdout,
        };

        Ok(Self {
            motif,
            input,
            output,
        })
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => write!(f, "standard input"),
            Source::File(path) => write!(f, "'{}'", path.display()),
        }
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout => write!(f, "standard output"),
            Sink::File(path) => write!(f, "'{}'", path.display()),
        }
    }
}
