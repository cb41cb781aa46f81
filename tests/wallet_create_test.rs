mod common;

use common::TestEnvironment;
use std::fs;
use substrate_keygen::{KeyManager, KeyRole, KeyScheme, Keyfile, PublicKeyfile, WalletInfo};

#[test]
fn test_create_wallet_writes_tree() {
    let env = TestEnvironment::new().unwrap();
    let params = env.manager.create_params("alice");

    let result = env.manager.create_wallet(&params);
    assert!(result.success, "create failed: {:?}", result.error);
    let outcome = result.data.unwrap();

    let storage = env.storage();
    assert!(storage.coldkey_path("alice").is_file());
    assert!(storage.coldkeypub_path("alice").is_file());
    assert!(storage.hotkey_path("alice", "default").is_file());
    assert!(env.temp_dir.path().join("alice_info.json").is_file());

    assert_eq!(outcome.keys.len(), 2);
    assert_eq!(outcome.keys[0].role, KeyRole::Coldkey);
    assert_eq!(outcome.keys[1].role, KeyRole::Hotkey);
    assert_eq!(outcome.info.coldkey_address, outcome.keys[0].ss58_address);
    assert_eq!(
        outcome.info.hotkey_address.as_deref(),
        Some(outcome.keys[1].ss58_address.as_str())
    );
    assert_ne!(outcome.keys[0].mnemonic, outcome.keys[1].mnemonic);
    log::info!("✅ Created wallet {}", outcome.info.coldkey_address);
}

#[test]
fn test_keyfiles_are_consistent_json() {
    let env = TestEnvironment::new().unwrap();
    let params = env.manager.create_params("alice");
    assert!(env.manager.create_wallet(&params).success);

    let storage = env.storage();
    let raw = fs::read_to_string(storage.coldkey_path("alice")).unwrap();
    let coldkey: Keyfile = serde_json::from_str(&raw).unwrap();
    assert!(KeyManager::validate_mnemonic(&coldkey.secret_phrase));
    assert_eq!(coldkey.secret_phrase.split_whitespace().count(), 12);

    // The stored phrase reproduces the stored address
    let restored =
        KeyManager::from_mnemonic(&coldkey.secret_phrase, KeyScheme::Sr25519, 42).unwrap();
    assert_eq!(restored.ss58_address, coldkey.ss58_address);
    assert_eq!(restored.public_key_hex(), coldkey.public_key);

    let raw = fs::read_to_string(storage.coldkeypub_path("alice")).unwrap();
    assert!(!raw.contains(&coldkey.secret_phrase));
    let public: PublicKeyfile = serde_json::from_str(&raw).unwrap();
    assert_eq!(public, coldkey.to_public());

    let raw = fs::read_to_string(storage.info_path("alice")).unwrap();
    assert!(!raw.contains("secretPhrase"));
    let info: WalletInfo = serde_json::from_str(&raw).unwrap();
    assert_eq!(info.coldkey_address, coldkey.ss58_address);
    assert_eq!(info.hotkey_name.as_deref(), Some("default"));
}

#[test]
fn test_create_without_overwrite_keeps_existing_keys() {
    let env = TestEnvironment::new().unwrap();
    let params = env.manager.create_params("alice");
    assert!(env.manager.create_wallet(&params).success);

    let storage = env.storage();
    let cold_before = fs::read(storage.coldkey_path("alice")).unwrap();
    let hot_before = fs::read(storage.hotkey_path("alice", "default")).unwrap();

    let again = env.manager.create_wallet(&params);
    assert!(!again.success);
    assert!(again.error.unwrap().contains("already exists"));

    assert_eq!(fs::read(storage.coldkey_path("alice")).unwrap(), cold_before);
    assert_eq!(
        fs::read(storage.hotkey_path("alice", "default")).unwrap(),
        hot_before
    );
}

#[test]
fn test_create_with_overwrite_replaces_keys() {
    let env = TestEnvironment::new().unwrap();
    let mut params = env.manager.create_params("alice");
    let first = env.manager.create_wallet(&params).data.unwrap();

    params.overwrite = true;
    let second = env.manager.create_wallet(&params).data.unwrap();
    assert_ne!(first.info.coldkey_address, second.info.coldkey_address);

    let stored = env.storage().load_coldkey("alice").unwrap();
    assert_eq!(stored.ss58_address, second.info.coldkey_address);
}

#[test]
fn test_create_options() {
    let env = TestEnvironment::new().unwrap();
    let mut params = env.manager.create_params("bob");
    params.hotkey = "miner".to_string();
    params.words = 24;
    params.scheme = KeyScheme::Ed25519;
    params.save_coldkeypub = false;

    let outcome = env.manager.create_wallet(&params).data.unwrap();
    let storage = env.storage();
    assert!(!storage.coldkeypub_path("bob").exists());
    assert!(storage.hotkey_path("bob", "miner").is_file());
    assert_eq!(outcome.keys[0].mnemonic.split_whitespace().count(), 24);
    assert_eq!(outcome.info.scheme, KeyScheme::Ed25519);

    let hotkey = storage.load_hotkey("bob", "miner").unwrap();
    assert_eq!(hotkey.scheme, KeyScheme::Ed25519);
}

#[test]
fn test_invalid_parameters_fail_cleanly() {
    let env = TestEnvironment::new().unwrap();

    let params = env.manager.create_params("../escape");
    let result = env.manager.create_wallet(&params);
    assert!(!result.success);
    assert!(result.error.unwrap().contains("Invalid wallet name"));

    let mut params = env.manager.create_params("carol");
    params.words = 11;
    let result = env.manager.create_wallet(&params);
    assert!(!result.success);
    assert!(result.data.is_none());
    assert!(!env.storage().coldkey_exists("carol"));
}

#[test]
fn test_name_cannot_shadow_summary_file() {
    let env = TestEnvironment::new().unwrap();
    let params = env.manager.create_params("alice");
    let created = env.manager.create_wallet(&params).data.unwrap();

    let params = env.manager.create_params("alice_info.json");
    let result = env.manager.create_wallet(&params);
    assert!(!result.success);
    assert!(result.error.unwrap().contains("Invalid wallet name"));

    // alice's summary is still a file with alice's coldkey
    let storage = env.storage();
    assert!(storage.info_path("alice").is_file());
    assert_eq!(env.manager.list_wallets().data.unwrap(), vec!["alice"]);
    let info = env.manager.wallet_info("alice").data.unwrap();
    assert_eq!(info.coldkey_address, created.info.coldkey_address);
}

#[test]
fn test_list_show_delete() {
    let env = TestEnvironment::new().unwrap();
    for name in ["bob", "alice"] {
        let params = env.manager.create_params(name);
        assert!(env.manager.create_wallet(&params).success);
    }

    let wallets = env.manager.list_wallets().data.unwrap();
    assert_eq!(wallets, vec!["alice", "bob"]);

    let info = env.manager.wallet_info("alice").data.unwrap();
    assert_eq!(info.name, "alice");

    // Summary is rebuilt when missing
    fs::remove_file(env.storage().info_path("alice")).unwrap();
    let rebuilt = env.manager.wallet_info("alice").data.unwrap();
    assert_eq!(rebuilt.coldkey_address, info.coldkey_address);
    assert_eq!(rebuilt.hotkey_address, info.hotkey_address);
    assert!(env.storage().info_path("alice").is_file());

    assert!(env.manager.delete_wallet("alice").success);
    assert_eq!(env.manager.list_wallets().data.unwrap(), vec!["bob"]);
    assert!(!env.manager.wallet_info("alice").success);
    assert!(!env.manager.delete_wallet("alice").success);
}
