//! Reads the integer sequences the counters work on.

use log::info;
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to open input file '{}'", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: '{token}' is not an integer")]
    Parse { line: usize, token: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Whitespace separated integers, any number per line.
pub fn parse_ints<R: BufRead>(reader: R) -> Result<Vec<i64>, LoadError> {
    let mut ints = Vec::new();
    for (text, line) in reader.lines().zip(1..) {
        for token in text?.split_whitespace() {
            let int = token.parse().map_err(|_| LoadError::Parse {
                line,
                token: token.to_owned(),
            })?;
            ints.push(int);
        }
    }
    Ok(ints)
}

pub fn load(path: impl AsRef<Path>) -> Result<Vec<i64>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_owned(),
        source,
    })?;
    let ints = parse_ints(BufReader::new(file))?;
    info!("read {} ints from input file {}", ints.len(), path.display());
    Ok(ints)
}
