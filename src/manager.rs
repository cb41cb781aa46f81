use serde::Serialize;

use crate::config::WalletConfig;
use crate::error::WalletError;
use crate::storage::{Storage, WalletInfo};
use crate::wallet::{self, CreateParams, GeneratedKey, WalletOutcome};

/// Outcome of a manager operation.
///
/// Errors never escape the manager; they are reported through `success`
/// and `error` instead.
#[derive(Debug, Clone, Serialize)]
pub struct OperationResult<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> OperationResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            data: None,
        }
    }

    fn from_result(operation: &str, result: Result<T, WalletError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => {
                log::error!("{} failed: {}", operation, e);
                Self::failed(e)
            }
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self.error.unwrap_or_else(|| "unknown error".to_string())),
        }
    }
}

pub struct WalletManager {
    pub storage: Storage,
    pub config: WalletConfig,
}

impl WalletManager {
    /// Manager configured from the environment
    pub fn new() -> Self {
        Self::with_config(WalletConfig::from_env())
    }

    pub fn with_config(config: WalletConfig) -> Self {
        let storage = Storage::new_with_base_dir(config.wallet_path.clone());
        Self { storage, config }
    }

    /// Manager over an existing storage root (used by tests)
    pub fn new_with_storage(storage: Storage) -> Self {
        let config = WalletConfig {
            wallet_path: storage.base_dir().clone(),
            ..WalletConfig::default()
        };
        Self { storage, config }
    }

    pub fn create_params(&self, name: &str) -> CreateParams {
        CreateParams::new(name, &self.config)
    }

    pub fn create_wallet(&self, params: &CreateParams) -> OperationResult<WalletOutcome> {
        OperationResult::from_result(
            "create_wallet",
            wallet::create_wallet(&self.storage, &self.config, params),
        )
    }

    pub fn regenerate_coldkey(
        &self,
        name: &str,
        mnemonic: &str,
        overwrite: bool,
    ) -> OperationResult<WalletOutcome> {
        OperationResult::from_result(
            "regenerate_coldkey",
            wallet::regenerate_coldkey(&self.storage, &self.config, name, mnemonic, overwrite),
        )
    }

    pub fn regenerate_hotkey(
        &self,
        name: &str,
        hotkey: &str,
        mnemonic: &str,
        overwrite: bool,
    ) -> OperationResult<WalletOutcome> {
        OperationResult::from_result(
            "regenerate_hotkey",
            wallet::regenerate_hotkey(
                &self.storage,
                &self.config,
                name,
                hotkey,
                mnemonic,
                overwrite,
            ),
        )
    }

    pub fn inspect_mnemonic(&self, mnemonic: &str) -> OperationResult<GeneratedKey> {
        OperationResult::from_result(
            "inspect_mnemonic",
            wallet::inspect_mnemonic(&self.config, mnemonic),
        )
    }

    pub fn wallet_info(&self, name: &str) -> OperationResult<WalletInfo> {
        OperationResult::from_result(
            "wallet_info",
            wallet::wallet_info(&self.storage, &self.config, name),
        )
    }

    pub fn list_wallets(&self) -> OperationResult<Vec<String>> {
        OperationResult::from_result("list_wallets", wallet::list_wallets(&self.storage))
    }

    pub fn delete_wallet(&self, name: &str) -> OperationResult<()> {
        OperationResult::from_result(
            "delete_wallet",
            wallet::delete_wallet(&self.storage, name),
        )
    }
}

impl Default for WalletManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_result_shape() {
        let ok = OperationResult::ok(7u32);
        assert!(ok.success);
        assert_eq!(ok.into_result(), Ok(7));

        let failed: OperationResult<u32> =
            OperationResult::failed(WalletError::WalletNotFound("alice".into()));
        assert!(!failed.success);
        assert_eq!(
            failed.error.as_deref(),
            Some("Wallet not found: alice")
        );

        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("data").is_none());
    }
}
