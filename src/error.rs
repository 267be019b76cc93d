// MIT License - Copyright (c) 2026 Peter Wright
// Tapo bulb group control

/// All errors that can occur in the bulbctl library.
#[derive(Debug, thiserror::Error)]
pub enum BulbError {
    #[error("device error: {0}")]
    Device(#[from] tapo::Error),

    #[error("unknown bulb group '{name}' (known groups: {known})")]
    UnknownGroup { name: String, known: String },

    #[error("invalid groups file: {reason}")]
    InvalidGroupsFile { reason: String },

    #[error("secret store error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BulbError>;
