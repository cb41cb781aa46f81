//! Data models for wallet storage
//!
//! Keyfiles use the same camelCase layout as `subkey --output-type json`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::keys::{KeyMaterial, KeyScheme};

/// Full keyfile for a coldkey or hotkey, including secret material.
/// The strings are wiped on drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct Keyfile {
    pub account_id: String,
    pub public_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    pub secret_phrase: String,
    pub secret_seed: String,
    pub ss58_address: String,
    #[serde(default)]
    #[zeroize(skip)]
    pub scheme: KeyScheme,
    #[zeroize(skip)]
    pub created_at: DateTime<Utc>,
}

impl Keyfile {
    pub fn from_keys(keys: &KeyMaterial, created_at: DateTime<Utc>) -> Self {
        let public_key = keys.public_key_hex();
        Self {
            account_id: public_key.clone(),
            public_key,
            private_key: Some(keys.secret_key_hex()),
            secret_phrase: keys.phrase.clone(),
            secret_seed: keys.seed_hex(),
            ss58_address: keys.ss58_address.clone(),
            scheme: keys.scheme,
            created_at,
        }
    }

    /// Public half of this keyfile
    pub fn to_public(&self) -> PublicKeyfile {
        PublicKeyfile {
            account_id: self.account_id.clone(),
            public_key: self.public_key.clone(),
            ss58_address: self.ss58_address.clone(),
            scheme: self.scheme,
            created_at: self.created_at,
        }
    }
}

/// Non-secret view of a key, stored as `coldkeypub.txt`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyfile {
    pub account_id: String,
    pub public_key: String,
    pub ss58_address: String,
    #[serde(default)]
    pub scheme: KeyScheme,
    pub created_at: DateTime<Utc>,
}

/// Wallet summary written next to the wallet directory as `<name>_info.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletInfo {
    pub name: String,
    pub coldkey_address: String,
    pub coldkey_public_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotkey_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotkey_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotkey_public_key: Option<String>,
    pub scheme: KeyScheme,
    pub ss58_format: u16,
    pub created_at: DateTime<Utc>,
}

impl WalletInfo {
    pub fn new(
        name: &str,
        coldkey: &PublicKeyfile,
        hotkey: Option<(&str, &PublicKeyfile)>,
        ss58_format: u16,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.to_string(),
            coldkey_address: coldkey.ss58_address.clone(),
            coldkey_public_key: coldkey.public_key.clone(),
            hotkey_name: hotkey.map(|(name, _)| name.to_string()),
            hotkey_address: hotkey.map(|(_, key)| key.ss58_address.clone()),
            hotkey_public_key: hotkey.map(|(_, key)| key.public_key.clone()),
            scheme: coldkey.scheme,
            ss58_format,
            created_at,
        }
    }
}
