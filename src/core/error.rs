use thiserror::Error;
use std::io;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Allocation failed: {0}")]
    Allocation(String),

    #[error("Index {index} out of range for vector of size {vector_size}")]
    IndexOutOfRange { index: usize, vector_size: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
