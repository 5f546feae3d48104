use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a PRD file is required: pass --prd <file>")]
    MissingPrd,

    #[error("PRD file does not exist: {}", .0.display())]
    PrdNotFound(PathBuf),

    #[error("no valid PRD path entered (up to {0} attempts allowed)")]
    PromptAborted(usize),

    #[error("cannot derive a file name from '{}'", .0.display())]
    InvalidFileName(PathBuf),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
