//! Substrate Keygen: coldkey/hotkey generation for Substrate wallets
//!
//! Generates and restores sr25519 (or ed25519) keypairs from BIP39
//! mnemonics, derives their SS58 addresses and writes them as JSON keyfiles
//! in a per-wallet directory tree.
//!
//! # Layout
//!
//! ```text
//! <wallet_path>/<name>/coldkey/keyfile
//! <wallet_path>/<name>/coldkeypub.txt
//! <wallet_path>/<name>/hotkeys/<hotkey>/keyfile
//! <wallet_path>/<name>_info.json
//! ```
//!
//! # Example
//!
//! ```no_run
//! use substrate_keygen::WalletManager;
//!
//! let manager = WalletManager::new();
//! let params = manager.create_params("alice");
//! let result = manager.create_wallet(&params);
//! assert!(result.success, "{:?}", result.error);
//! ```
//!
//! Key derivation, mnemonic handling and address encoding come from
//! `sp-core` and `bip39`.

pub mod config;
pub mod error;
pub mod manager;
pub mod storage;
pub mod wallet;

pub use config::WalletConfig;
pub use error::{Result, StorageError, WalletError};
pub use manager::{OperationResult, WalletManager};
pub use storage::{KeyManager, KeyMaterial, KeyScheme, Keyfile, PublicKeyfile, Storage, WalletInfo};
pub use wallet::{CreateParams, GeneratedKey, KeyRole, WalletOutcome, DEFAULT_HOTKEY};
