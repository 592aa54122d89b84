use std::fs::File;
use std::io::{self, BufRead, BufReader};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Address list file not found: {0}")]
    FileNotFound(String),

    #[error("Error reading file: {0}")]
    ReadError(String),
}

/// Reads targets from a file, one per line. Blank lines and `#` comments are skipped.
pub fn read_from_file(file_path: &str) -> Result<Vec<String>, Error> {
    let file = File::open(file_path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            Error::FileNotFound(file_path.to_string())
        } else {
            Error::ReadError(file_path.to_string())
        }
    })?;

    read_from_reader(BufReader::new(file), file_path)
}

fn read_from_reader(reader: impl BufRead, source: &str) -> Result<Vec<String>, Error> {
    let mut targets = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|_| Error::ReadError(source.to_string()))?;
        let target = line.split('#').next().unwrap_or_default().trim();
        if !target.is_empty() {
            targets.push(target.to_string());
        }
    }

    Ok(targets)
}
