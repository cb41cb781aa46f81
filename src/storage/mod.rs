//! Storage and persistence layer
//!
//! - File system layout for coldkeys and hotkeys
//! - Key generation and derivation
//! - Keyfile data models

mod file_system;
mod keys;
mod models;

pub use file_system::Storage;
pub use keys::{
    KeyManager, KeyMaterial, KeyScheme, DEFAULT_SS58_FORMAT, VALID_WORD_COUNTS,
};
pub use models::{Keyfile, PublicKeyfile, WalletInfo};
