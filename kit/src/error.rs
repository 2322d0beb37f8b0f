use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("Settings error: {source}")]
    Settings {
        #[from]
        source: serde_json::Error,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, KitError>;
