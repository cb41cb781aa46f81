/// Wallet lifecycle operations
///
/// Handles wallet creation, key recovery, inspection and listing.
use chrono::Utc;
use serde::Serialize;
use std::path::PathBuf;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::config::WalletConfig;
use crate::error::{StorageError, WalletError};
use crate::storage::{KeyManager, KeyMaterial, KeyScheme, Keyfile, PublicKeyfile, Storage, WalletInfo};

pub const DEFAULT_HOTKEY: &str = "default";

const INFO_SUFFIX: &str = "_info.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyRole {
    Coldkey,
    Hotkey,
}

/// A key produced by an operation, kept for console output.
/// The mnemonic is wiped on drop.
#[derive(Debug, Clone, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedKey {
    #[zeroize(skip)]
    pub role: KeyRole,
    pub name: String,
    pub mnemonic: String,
    pub ss58_address: String,
    pub public_key: String,
    #[zeroize(skip)]
    pub scheme: KeyScheme,
    #[zeroize(skip)]
    pub path: Option<PathBuf>,
}

impl GeneratedKey {
    fn new(role: KeyRole, name: &str, keys: &KeyMaterial, path: Option<PathBuf>) -> Self {
        Self {
            role,
            name: name.to_string(),
            mnemonic: keys.phrase.clone(),
            ss58_address: keys.ss58_address.clone(),
            public_key: keys.public_key_hex(),
            scheme: keys.scheme,
            path,
        }
    }
}

/// Summary plus the keys written by a create/regenerate call
#[derive(Debug, Clone, Serialize)]
pub struct WalletOutcome {
    pub info: WalletInfo,
    pub keys: Vec<GeneratedKey>,
}

/// Parameters for creating a wallet
#[derive(Debug, Clone)]
pub struct CreateParams {
    pub name: String,
    pub hotkey: String,
    pub words: usize,
    pub scheme: KeyScheme,
    pub overwrite: bool,
    pub save_coldkeypub: bool,
}

impl CreateParams {
    pub fn new(name: &str, config: &WalletConfig) -> Self {
        Self {
            name: name.to_string(),
            hotkey: DEFAULT_HOTKEY.to_string(),
            words: config.mnemonic_words,
            scheme: config.scheme,
            overwrite: false,
            save_coldkeypub: config.save_coldkeypub,
        }
    }
}

/// Reject names that would escape the wallet directory or collide with a
/// `<name>_info.json` summary
pub fn validate_name(name: &str) -> Result<(), WalletError> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed != name
        || name == "."
        || name.contains("..")
        || name.contains('/')
        || name.contains('\\')
        || name.ends_with(INFO_SUFFIX)
    {
        return Err(WalletError::InvalidWalletName(name.to_string()));
    }
    Ok(())
}

/// Create a wallet with a fresh coldkey and hotkey
pub fn create_wallet(
    storage: &Storage,
    config: &WalletConfig,
    params: &CreateParams,
) -> Result<WalletOutcome, WalletError> {
    validate_name(&params.name)?;
    validate_name(&params.hotkey)?;

    // Check both targets up front so a refusal leaves the tree untouched
    if !params.overwrite {
        for path in [
            storage.coldkey_path(&params.name),
            storage.hotkey_path(&params.name, &params.hotkey),
        ] {
            if path.exists() {
                return Err(StorageError::KeyfileExists(path.display().to_string()).into());
            }
        }
    }

    let coldkey = KeyManager::generate(params.words, params.scheme, config.ss58_format)?;
    let hotkey = KeyManager::generate(params.words, params.scheme, config.ss58_format)?;

    storage.create_wallet(&params.name)?;
    log::info!("Creating wallet '{}' in {}", params.name, storage.base_dir().display());

    let created_at = Utc::now();

    let cold_file = Keyfile::from_keys(&coldkey, created_at);
    let cold_path = storage.save_coldkey(&params.name, &cold_file, params.overwrite)?;
    sync_coldkeypub(storage, &params.name, &cold_file, params.save_coldkeypub)?;

    let hot_file = Keyfile::from_keys(&hotkey, created_at);
    let hot_path = storage.save_hotkey(&params.name, &params.hotkey, &hot_file, params.overwrite)?;

    let info = WalletInfo::new(
        &params.name,
        &cold_file.to_public(),
        Some((params.hotkey.as_str(), &hot_file.to_public())),
        config.ss58_format,
        created_at,
    );
    storage.save_info(&info)?;

    log::info!("Coldkey: {}", coldkey.ss58_address);
    log::info!("Hotkey '{}': {}", params.hotkey, hotkey.ss58_address);

    Ok(WalletOutcome {
        info,
        keys: vec![
            GeneratedKey::new(KeyRole::Coldkey, "coldkey", &coldkey, Some(cold_path)),
            GeneratedKey::new(KeyRole::Hotkey, &params.hotkey, &hotkey, Some(hot_path)),
        ],
    })
}

/// Restore a wallet's coldkey from its mnemonic
pub fn regenerate_coldkey(
    storage: &Storage,
    config: &WalletConfig,
    name: &str,
    mnemonic: &str,
    overwrite: bool,
) -> Result<WalletOutcome, WalletError> {
    validate_name(name)?;
    let scheme = match load_coldkey_public(storage, name) {
        Ok(existing) => existing.scheme,
        Err(WalletError::WalletNotFound(_)) => config.scheme,
        Err(e) => return Err(e),
    };
    let coldkey = KeyManager::from_mnemonic(mnemonic, scheme, config.ss58_format)?;

    storage.create_wallet(name)?;
    let cold_file = Keyfile::from_keys(&coldkey, Utc::now());
    let path = storage.save_coldkey(name, &cold_file, overwrite)?;
    sync_coldkeypub(storage, name, &cold_file, config.save_coldkeypub)?;
    log::info!("Restored coldkey for '{}': {}", name, coldkey.ss58_address);

    let info = refresh_info(storage, config, name, Some(cold_file.to_public()))?;
    Ok(WalletOutcome {
        info,
        keys: vec![GeneratedKey::new(KeyRole::Coldkey, "coldkey", &coldkey, Some(path))],
    })
}

/// Restore a hotkey from its mnemonic. The wallet's coldkey must already exist.
pub fn regenerate_hotkey(
    storage: &Storage,
    config: &WalletConfig,
    name: &str,
    hotkey: &str,
    mnemonic: &str,
    overwrite: bool,
) -> Result<WalletOutcome, WalletError> {
    validate_name(name)?;
    validate_name(hotkey)?;
    if !storage.coldkey_exists(name) {
        return Err(WalletError::WalletNotFound(name.to_string()));
    }

    // Keys in one wallet share a scheme; an existing hotkey record wins
    let scheme = match storage.load_hotkey(name, hotkey) {
        Ok(existing) => existing.scheme,
        Err(StorageError::FileNotFound(_)) => load_coldkey_public(storage, name)?.scheme,
        Err(e) => return Err(e.into()),
    };
    let keys = KeyManager::from_mnemonic(mnemonic, scheme, config.ss58_format)?;
    let path = storage.save_hotkey(name, hotkey, &Keyfile::from_keys(&keys, Utc::now()), overwrite)?;
    log::info!("Restored hotkey '{}' for '{}': {}", hotkey, name, keys.ss58_address);

    let mut info = refresh_info(storage, config, name, None)?;
    if info.hotkey_name.as_deref() != Some(hotkey) {
        info.hotkey_name = Some(hotkey.to_string());
        info.hotkey_address = Some(keys.ss58_address.clone());
        info.hotkey_public_key = Some(keys.public_key_hex());
        storage.save_info(&info)?;
    }

    Ok(WalletOutcome {
        info,
        keys: vec![GeneratedKey::new(KeyRole::Hotkey, hotkey, &keys, Some(path))],
    })
}

/// Derive keys from a mnemonic without touching the file tree
pub fn inspect_mnemonic(
    config: &WalletConfig,
    mnemonic: &str,
) -> Result<GeneratedKey, WalletError> {
    let keys = KeyManager::from_mnemonic(mnemonic, config.scheme, config.ss58_format)?;
    Ok(GeneratedKey::new(KeyRole::Coldkey, "inspect", &keys, None))
}

/// Read a wallet's summary, rebuilding it from keyfiles when missing
pub fn wallet_info(
    storage: &Storage,
    config: &WalletConfig,
    name: &str,
) -> Result<WalletInfo, WalletError> {
    validate_name(name)?;
    if !storage.wallet_exists(name) {
        return Err(WalletError::WalletNotFound(name.to_string()));
    }

    match storage.load_info(name) {
        Ok(info) => Ok(info),
        Err(StorageError::FileNotFound(_)) => {
            log::debug!("No summary for '{}', rebuilding from keyfiles", name);
            refresh_info(storage, config, name, None)
        }
        Err(e) => Err(e.into()),
    }
}

/// List all wallets
pub fn list_wallets(storage: &Storage) -> Result<Vec<String>, WalletError> {
    Ok(storage.list_wallets()?)
}

/// Delete a wallet and all its keys
pub fn delete_wallet(storage: &Storage, name: &str) -> Result<(), WalletError> {
    validate_name(name)?;
    if !storage.wallet_exists(name) {
        return Err(WalletError::WalletNotFound(name.to_string()));
    }

    log::warn!("Deleting wallet: {}", name);
    storage.delete_wallet(name)?;

    Ok(())
}

/// Write or remove `coldkeypub.txt` so it never disagrees with the coldkey keyfile
fn sync_coldkeypub(
    storage: &Storage,
    name: &str,
    cold_file: &Keyfile,
    save: bool,
) -> Result<(), WalletError> {
    if save {
        storage.save_coldkeypub(name, &cold_file.to_public(), true)?;
    } else if storage.remove_coldkeypub(name)? {
        log::info!("Removed stale coldkeypub for '{}'", name);
    }
    Ok(())
}

/// Recompute `<name>_info.json` from the coldkey and the first hotkey on disk.
/// A coldkey that was just written is passed in rather than re-read.
fn refresh_info(
    storage: &Storage,
    config: &WalletConfig,
    name: &str,
    coldkey: Option<PublicKeyfile>,
) -> Result<WalletInfo, WalletError> {
    let coldkey = match coldkey {
        Some(coldkey) => coldkey,
        None => load_coldkey_public(storage, name)?,
    };

    let hotkeys = storage.list_hotkeys(name)?;
    let hotkey_name = if hotkeys.iter().any(|h| h == DEFAULT_HOTKEY) {
        Some(DEFAULT_HOTKEY.to_string())
    } else {
        hotkeys.into_iter().next()
    };
    let hotkey = match hotkey_name {
        Some(hotkey_name) => {
            let file = storage.load_hotkey(name, &hotkey_name)?.to_public();
            Some((hotkey_name, file))
        }
        None => None,
    };

    let info = WalletInfo::new(
        name,
        &coldkey,
        hotkey.as_ref().map(|(n, f)| (n.as_str(), f)),
        config.ss58_format,
        coldkey.created_at,
    );
    storage.save_info(&info)?;
    Ok(info)
}

/// Public half of the coldkey. The keyfile is authoritative; coldkeypub.txt
/// is only used when the keyfile is absent.
fn load_coldkey_public(storage: &Storage, name: &str) -> Result<PublicKeyfile, WalletError> {
    match storage.load_coldkey(name) {
        Ok(keyfile) => Ok(keyfile.to_public()),
        Err(StorageError::FileNotFound(_)) => match storage.load_coldkeypub(name) {
            Ok(public) => Ok(public),
            Err(StorageError::FileNotFound(_)) => {
                Err(WalletError::WalletNotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        },
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("alice").is_ok());
        assert!(validate_name("my-wallet_2").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("  ").is_err());
        assert!(validate_name(" alice").is_err());
        assert!(validate_name("../etc").is_err());
        assert!(validate_name("a/b").is_err());
        assert!(validate_name(".").is_err());
        assert!(validate_name("alice_info.json").is_err());
        assert!(validate_name("alice_info").is_ok());
    }

    #[test]
    fn test_create_params_follow_config() {
        let config = WalletConfig {
            mnemonic_words: 24,
            scheme: KeyScheme::Ed25519,
            save_coldkeypub: false,
            ..Default::default()
        };
        let params = CreateParams::new("alice", &config);
        assert_eq!(params.hotkey, DEFAULT_HOTKEY);
        assert_eq!(params.words, 24);
        assert_eq!(params.scheme, KeyScheme::Ed25519);
        assert!(!params.overwrite);
        assert!(!params.save_coldkeypub);
    }
}
