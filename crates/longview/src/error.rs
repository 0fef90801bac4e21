use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("expected NAME=VALUE, got '{0}'")]
    InvalidAssignment(String),

    #[error("placeholder name must not be empty in '{0}'")]
    EmptyName(String),

    #[error("Failed to read subjects from '{path}'")]
    ReadSubjects {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
