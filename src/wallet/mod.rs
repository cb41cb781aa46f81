//! Wallet operations
//!
//! Sequencing of key generation, recovery and persistence on top of
//! [`crate::storage`].

mod wallet_ops;

pub use wallet_ops::{
    create_wallet, delete_wallet, inspect_mnemonic, list_wallets, regenerate_coldkey,
    regenerate_hotkey, validate_name, wallet_info, CreateParams, GeneratedKey, KeyRole,
    WalletOutcome, DEFAULT_HOTKEY,
};
