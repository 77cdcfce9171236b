use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbotError {
    /// Missing or invalid configuration; fatal at startup.
    #[error("Config error: {0}")]
    Config(String),

    /// The platform client failed to deliver a message.
    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Handler error: {0}")]
    Handler(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DbotError>;
