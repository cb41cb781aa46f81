use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::models::{Keyfile, PublicKeyfile, WalletInfo};
use crate::error::StorageError;

const COLDKEY_DIR: &str = "coldkey";
const HOTKEYS_DIR: &str = "hotkeys";
const KEYFILE: &str = "keyfile";
const COLDKEYPUB: &str = "coldkeypub.txt";

/// Wallet file tree rooted at a base directory:
///
/// ```text
/// <base>/<name>/coldkey/keyfile
/// <base>/<name>/coldkeypub.txt
/// <base>/<name>/hotkeys/<hotkey>/keyfile
/// <base>/<name>_info.json
/// ```
#[derive(Clone, Debug)]
pub struct Storage {
    base_path: PathBuf,
}

impl Storage {
    /// Create a new storage instance with the default base directory ("./wallets")
    pub fn new() -> Self {
        Self {
            base_path: PathBuf::from("./wallets"),
        }
    }

    /// Create storage with custom base directory
    pub fn new_with_base_dir(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_path
    }

    pub fn wallet_dir(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    pub fn coldkey_path(&self, name: &str) -> PathBuf {
        self.wallet_dir(name).join(COLDKEY_DIR).join(KEYFILE)
    }

    pub fn coldkeypub_path(&self, name: &str) -> PathBuf {
        self.wallet_dir(name).join(COLDKEYPUB)
    }

    pub fn hotkey_path(&self, name: &str, hotkey: &str) -> PathBuf {
        self.wallet_dir(name)
            .join(HOTKEYS_DIR)
            .join(hotkey)
            .join(KEYFILE)
    }

    pub fn info_path(&self, name: &str) -> PathBuf {
        self.base_path.join(format!("{}_info.json", name))
    }

    /// Create the wallet directory (and the base directory if missing)
    pub fn create_wallet(&self, name: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path)?;
        fs::create_dir_all(self.wallet_dir(name))?;
        Ok(())
    }

    pub fn wallet_exists(&self, name: &str) -> bool {
        self.wallet_dir(name).is_dir()
    }

    pub fn coldkey_exists(&self, name: &str) -> bool {
        self.coldkey_path(name).exists()
    }

    pub fn hotkey_exists(&self, name: &str, hotkey: &str) -> bool {
        self.hotkey_path(name, hotkey).exists()
    }

    pub fn save_coldkey(
        &self,
        name: &str,
        keyfile: &Keyfile,
        overwrite: bool,
    ) -> Result<PathBuf, StorageError> {
        let path = self.coldkey_path(name);
        write_json(&path, keyfile, overwrite, true)?;
        Ok(path)
    }

    pub fn load_coldkey(&self, name: &str) -> Result<Keyfile, StorageError> {
        read_json(&self.coldkey_path(name))
    }

    pub fn save_coldkeypub(
        &self,
        name: &str,
        keyfile: &PublicKeyfile,
        overwrite: bool,
    ) -> Result<PathBuf, StorageError> {
        let path = self.coldkeypub_path(name);
        write_json(&path, keyfile, overwrite, false)?;
        Ok(path)
    }

    pub fn load_coldkeypub(&self, name: &str) -> Result<PublicKeyfile, StorageError> {
        read_json(&self.coldkeypub_path(name))
    }

    /// Remove coldkeypub.txt if present. Returns whether a file was removed.
    pub fn remove_coldkeypub(&self, name: &str) -> Result<bool, StorageError> {
        let path = self.coldkeypub_path(name);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    pub fn save_hotkey(
        &self,
        name: &str,
        hotkey: &str,
        keyfile: &Keyfile,
        overwrite: bool,
    ) -> Result<PathBuf, StorageError> {
        let path = self.hotkey_path(name, hotkey);
        write_json(&path, keyfile, overwrite, true)?;
        Ok(path)
    }

    pub fn load_hotkey(&self, name: &str, hotkey: &str) -> Result<Keyfile, StorageError> {
        read_json(&self.hotkey_path(name, hotkey))
    }

    /// The summary is derived data, so it is always rewritten
    pub fn save_info(&self, info: &WalletInfo) -> Result<PathBuf, StorageError> {
        let path = self.info_path(&info.name);
        write_json(&path, info, true, false)?;
        Ok(path)
    }

    pub fn load_info(&self, name: &str) -> Result<WalletInfo, StorageError> {
        read_json(&self.info_path(name))
    }

    /// List all wallet names in the storage directory
    pub fn list_wallets(&self) -> Result<Vec<String>, StorageError> {
        list_dirs(&self.base_path)
    }

    /// List hotkey names that have a keyfile on disk
    pub fn list_hotkeys(&self, name: &str) -> Result<Vec<String>, StorageError> {
        let hotkeys = list_dirs(&self.wallet_dir(name).join(HOTKEYS_DIR))?
            .into_iter()
            .filter(|hotkey| self.hotkey_exists(name, hotkey))
            .collect();
        Ok(hotkeys)
    }

    /// Delete a wallet directory and its summary
    pub fn delete_wallet(&self, name: &str) -> Result<(), StorageError> {
        let wallet_dir = self.wallet_dir(name);

        if !wallet_dir.exists() {
            return Err(StorageError::FileNotFound(wallet_dir.display().to_string()));
        }

        log::warn!("Deleting wallet directory: {:?}", wallet_dir);
        fs::remove_dir_all(&wallet_dir)?;

        let info_path = self.info_path(name);
        if info_path.exists() {
            fs::remove_file(info_path)?;
        }
        log::info!("Wallet '{}' deleted successfully", name);

        Ok(())
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}

fn write_json<T: Serialize>(
    path: &Path,
    value: &T,
    overwrite: bool,
    secret: bool,
) -> Result<(), StorageError> {
    if path.exists() && !overwrite {
        return Err(StorageError::KeyfileExists(path.display().to_string()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    if secret {
        restrict_permissions(path)?;
    }

    log::debug!("Wrote {}", path.display());
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    if !path.exists() {
        return Err(StorageError::FileNotFound(path.display().to_string()));
    }
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn list_dirs(path: &Path) -> Result<Vec<String>, StorageError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
