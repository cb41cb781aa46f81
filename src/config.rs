/// Wallet configuration from environment variables
///
/// Controls where wallets are written, the SS58 network prefix and the
/// key scheme. Defaults to sr25519 keys with the generic Substrate prefix.
use std::env;
use std::path::PathBuf;

use crate::storage::{KeyScheme, DEFAULT_SS58_FORMAT, VALID_WORD_COUNTS};

#[derive(Clone, Debug)]
pub struct WalletConfig {
    /// Base directory holding one directory per wallet
    pub wallet_path: PathBuf,
    /// SS58 address prefix
    pub ss58_format: u16,
    /// Signature scheme for newly derived keys
    pub scheme: KeyScheme,
    /// Mnemonic length for generated keys
    pub mnemonic_words: usize,
    /// Write `coldkeypub.txt` next to the coldkey
    pub save_coldkeypub: bool,
}

impl WalletConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `WALLET_PATH`: base directory (default `./wallets`)
    /// - `SS58_FORMAT`: address prefix (default 42)
    /// - `KEY_SCHEME`: "sr25519" (default) or "ed25519"
    /// - `MNEMONIC_WORDS`: 12 (default), 15, 18, 21 or 24
    /// - `SAVE_COLDKEYPUB`: "true" (default) or "false"
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Polkadot addresses, ed25519 keys
    /// SS58_FORMAT=0 KEY_SCHEME=ed25519 substrate-keygen create --name alice
    /// ```
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let wallet_path = lookup("WALLET_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.wallet_path);
        log::debug!("Wallet path: {}", wallet_path.display());

        let ss58_format = match lookup("SS58_FORMAT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                log::warn!("Invalid SS58_FORMAT '{}', using {}", raw, DEFAULT_SS58_FORMAT);
                DEFAULT_SS58_FORMAT
            }),
            None => defaults.ss58_format,
        };

        let scheme = match lookup("KEY_SCHEME") {
            Some(raw) => raw.parse::<KeyScheme>().unwrap_or_else(|_| {
                log::warn!("Unknown key scheme '{}', defaulting to sr25519", raw);
                KeyScheme::Sr25519
            }),
            None => defaults.scheme,
        };

        let mnemonic_words = match lookup("MNEMONIC_WORDS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(words) if VALID_WORD_COUNTS.contains(&words) => words,
                _ => {
                    log::warn!("Invalid MNEMONIC_WORDS '{}', using 12", raw);
                    12
                }
            },
            None => defaults.mnemonic_words,
        };

        let save_coldkeypub = lookup("SAVE_COLDKEYPUB")
            .map(|raw| !matches!(raw.trim().to_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(defaults.save_coldkeypub);

        Self {
            wallet_path,
            ss58_format,
            scheme,
            mnemonic_words,
            save_coldkeypub,
        }
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            wallet_path: PathBuf::from("./wallets"),
            ss58_format: DEFAULT_SS58_FORMAT,
            scheme: KeyScheme::Sr25519,
            mnemonic_words: 12,
            save_coldkeypub: true,
        }
    }
}
