use std::io;
use thiserror::Error;

/// Errors raised while a drill writes its output.
#[derive(Error, Debug)]
pub enum DrillError {
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DrillError>;
