//! Turning command-line input into a pattern and a list of subjects.

use crate::cli::Cli;
use crate::error::{Error, Result};
use longview_match::Pattern;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// A `NAME=VALUE` pair from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: String,
}

/// Splits at the first `=`, so values may contain `=` themselves.
pub fn parse_assignment(arg: &str) -> Result<Assignment> {
    let Some((name, value)) = arg.split_once('=') else {
        return Err(Error::InvalidAssignment(arg.to_string()));
    };
    if name.is_empty() {
        return Err(Error::EmptyName(arg.to_string()));
    }
    Ok(Assignment {
        name: name.to_string(),
        value: value.to_string(),
    })
}

pub fn build_pattern(cli: &Cli) -> Pattern {
    let mut pattern = Pattern::new(cli.template.as_str());
    for validator in &cli.validators {
        pattern.add_validator(validator.name.as_str(), validator.value.as_str());
    }
    for default in &cli.defaults {
        pattern.add_default_value(default.name.as_str(), default.value.as_str());
    }
    pattern
}

/// Positional subjects win; otherwise lines from `--file`, otherwise stdin.
pub fn read_subjects(cli: &Cli) -> Result<Vec<String>> {
    if !cli.subjects.is_empty() {
        return Ok(cli.subjects.clone());
    }

    match &cli.file {
        Some(path) if path != Path::new("-") => {
            let file = std::fs::File::open(path).map_err(|source| Error::ReadSubjects {
                path: path.clone(),
                source,
            })?;
            read_lines(file, path)
        }
        _ => read_lines(std::io::stdin(), Path::new("<stdin>")),
    }
}

fn read_lines(reader: impl Read, path: &Path) -> Result<Vec<String>> {
    BufReader::new(reader)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|source| Error::ReadSubjects {
            path: PathBuf::from(path),
            source,
        })
}
