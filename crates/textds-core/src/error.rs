use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid split spec '{0}': expected three integers 'train,val,test' summing to 100")]
    InvalidSplitSpec(String),

    #[error("No input files found under {0}")]
    NoInputFiles(String),

    #[error("No records survived processing")]
    NoRecords,

    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
