use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] neo4rs::Error),
    
    #[error("Failed to decode result row: {0}")]
    Decode(String),
    
    #[error("Connection error: {0}")]
    Connection(String),
    
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
