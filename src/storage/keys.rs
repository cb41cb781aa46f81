use bip39::Mnemonic;
use serde::{Deserialize, Serialize};
use sp_core::crypto::{AccountId32, ByteArray, Ss58AddressFormat, Ss58Codec};
use sp_core::{ed25519, sr25519, Pair};
use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::WalletError;

/// Generic Substrate SS58 prefix
pub const DEFAULT_SS58_FORMAT: u16 = 42;

/// Mnemonic lengths accepted by BIP39
pub const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Signature scheme used to derive a keypair from a phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyScheme {
    #[default]
    Sr25519,
    Ed25519,
}

impl KeyScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyScheme::Sr25519 => "sr25519",
            KeyScheme::Ed25519 => "ed25519",
        }
    }
}

impl fmt::Display for KeyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyScheme {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sr25519" | "sr" => Ok(KeyScheme::Sr25519),
            "ed25519" | "ed" => Ok(KeyScheme::Ed25519),
            other => Err(WalletError::InvalidScheme(other.to_string())),
        }
    }
}

/// Everything derived from a single mnemonic.
///
/// Secret fields are wiped when the value is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    pub phrase: String,
    pub seed: Vec<u8>,
    pub secret_key: Vec<u8>,
    pub public_key: Vec<u8>,
    pub ss58_address: String,
    #[zeroize(skip)]
    pub scheme: KeyScheme,
    #[zeroize(skip)]
    pub ss58_format: u16,
}

impl KeyMaterial {
    pub fn public_key_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.public_key))
    }

    pub fn seed_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.seed))
    }

    pub fn secret_key_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.secret_key))
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("public_key", &self.public_key_hex())
            .field("ss58_address", &self.ss58_address)
            .field("scheme", &self.scheme)
            .finish_non_exhaustive()
    }
}

pub struct KeyManager;

impl KeyManager {
    /// Generate a fresh BIP39 mnemonic with the given number of words
    pub fn generate_mnemonic(words: usize) -> Result<Mnemonic, WalletError> {
        if !VALID_WORD_COUNTS.contains(&words) {
            return Err(WalletError::InvalidWordCount(words));
        }
        Mnemonic::generate(words).map_err(|e| WalletError::InvalidMnemonic(e.to_string()))
    }

    /// Check a phrase against the BIP39 English wordlist and checksum
    pub fn validate_mnemonic(phrase: &str) -> bool {
        Mnemonic::parse(phrase).is_ok()
    }

    /// Generate a new mnemonic and derive its keypair
    pub fn generate(
        words: usize,
        scheme: KeyScheme,
        ss58_format: u16,
    ) -> Result<KeyMaterial, WalletError> {
        let mnemonic = Self::generate_mnemonic(words)?;
        Self::derive_keys(&mnemonic, scheme, ss58_format)
    }

    /// Restore a keypair from an existing mnemonic phrase
    pub fn from_mnemonic(
        phrase: &str,
        scheme: KeyScheme,
        ss58_format: u16,
    ) -> Result<KeyMaterial, WalletError> {
        let mnemonic = Mnemonic::parse(phrase.trim())
            .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;

        Self::derive_keys(&mnemonic, scheme, ss58_format)
    }

    fn derive_keys(
        mnemonic: &Mnemonic,
        scheme: KeyScheme,
        ss58_format: u16,
    ) -> Result<KeyMaterial, WalletError> {
        match scheme {
            KeyScheme::Sr25519 => Self::derive_pair::<sr25519::Pair>(mnemonic, scheme, ss58_format),
            KeyScheme::Ed25519 => Self::derive_pair::<ed25519::Pair>(mnemonic, scheme, ss58_format),
        }
    }

    fn derive_pair<P>(
        mnemonic: &Mnemonic,
        scheme: KeyScheme,
        ss58_format: u16,
    ) -> Result<KeyMaterial, WalletError>
    where
        P: Pair,
        P::Public: Ss58Codec,
    {
        let phrase = mnemonic.to_string();
        let (pair, seed) = P::from_phrase(&phrase, None)
            .map_err(|e| WalletError::Crypto(format!("failed to derive keypair: {:?}", e)))?;

        let public = pair.public();
        let ss58_address =
            public.to_ss58check_with_version(Ss58AddressFormat::custom(ss58_format));

        log::debug!("Derived {} keypair for {}", scheme, ss58_address);

        Ok(KeyMaterial {
            phrase,
            seed: seed.as_ref().to_vec(),
            secret_key: pair.to_raw_vec(),
            public_key: public.to_raw_vec(),
            ss58_address,
            scheme,
            ss58_format,
        })
    }

    /// Encode a raw 32-byte public key as an SS58 address
    pub fn ss58_from_public(public_key: &[u8], ss58_format: u16) -> Result<String, WalletError> {
        let account = AccountId32::try_from(public_key).map_err(|_| {
            WalletError::Crypto(format!(
                "public key must be 32 bytes, got {}",
                public_key.len()
            ))
        })?;
        Ok(account.to_ss58check_with_version(Ss58AddressFormat::custom(ss58_format)))
    }

    /// Decode an SS58 address into its public key bytes and network prefix
    pub fn public_from_ss58(address: &str) -> Result<(Vec<u8>, u16), WalletError> {
        let (account, format) = AccountId32::from_ss58check_with_version(address)
            .map_err(|e| WalletError::Crypto(format!("invalid SS58 address: {:?}", e)))?;
        let bytes: &[u8] = account.as_ref();
        Ok((bytes.to_vec(), u16::from(format)))
    }
}
