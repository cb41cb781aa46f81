//! Error types for wallet key generation and persistence

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("Invalid word count: {0} (expected 12, 15, 18, 21 or 24)")]
    InvalidWordCount(usize),

    #[error("Invalid wallet name: {0}")]
    InvalidWalletName(String),

    #[error("Invalid key scheme: {0}")]
    InvalidScheme(String),

    #[error("Wallet not found: {0}")]
    WalletNotFound(String),

    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Keyfile already exists (use overwrite to replace it): {0}")]
    KeyfileExists(String),
}

pub type Result<T> = std::result::Result<T, WalletError>;
