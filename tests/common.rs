/// Common test utilities for wallet integration tests
///
/// Provides an isolated wallet root in a temporary directory and
/// logger setup shared by all test files.
use substrate_keygen::storage::Storage;
use substrate_keygen::WalletManager;
use tempfile::TempDir;

/// Phrase from the `subkey` documentation, with its known sr25519 address
pub const KNOWN_PHRASE: &str =
    "hotel forest jar hover kite book view eight stuff angle legend defense";
pub const KNOWN_SS58: &str = "5Hpm9fq3W3dQgwWpAwDS2ZHKAdnk86QRCu7iX4GnmDxycrte";

/// Test environment with automatic cleanup
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub manager: WalletManager,
}

impl TestEnvironment {
    pub fn new() -> anyhow::Result<Self> {
        init_logger();

        let temp_dir = TempDir::new()?;
        log::info!("📁 Test directory: {:?}", temp_dir.path());

        let storage = Storage::new_with_base_dir(temp_dir.path().to_path_buf());
        let manager = WalletManager::new_with_storage(storage);

        Ok(Self { temp_dir, manager })
    }

    pub fn storage(&self) -> &Storage {
        &self.manager.storage
    }
}

pub fn init_logger() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}
