use crate::config::{Sink, Source};
use crate::error::{CliError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

/// Opens the input named by `source` for buffered reading.
pub fn open_input(source: &Source) -> Result<Box<dyn BufRead>> {
    match source {
        Source::Stdin => Ok(Box::new(io::stdin().lock())),
        Source::File(path) => {
            let file = File::open(path).map_err(|source| CliError::Open {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Opens (creating or truncating) the output named by `sink` for buffered writing.
pub fn open_output(sink: &Sink) -> Result<Box<dyn Write>> {
    match sink {
        Sink::Stdout => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        Sink::File(path) => {
            let file = File::create(path).map_err(|source| CliError::Open {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}
