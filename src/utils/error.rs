use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Input is not valid JSON and could not be repaired automatically")]
    MalformedInput,

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ExtractError {
    /// Process exit code the CLI layer maps this error to.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExtractError::MalformedInput => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
