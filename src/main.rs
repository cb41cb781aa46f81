use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use substrate_keygen::{
    GeneratedKey, KeyScheme, OperationResult, WalletConfig, WalletInfo, WalletManager,
    WalletOutcome, DEFAULT_HOTKEY,
};

/// Generate and restore Substrate coldkeys and hotkeys
#[derive(Parser)]
#[command(name = "substrate-keygen", version, about)]
struct Cli {
    /// Base directory for wallets (overrides WALLET_PATH)
    #[arg(long, global = true)]
    wallet_path: Option<PathBuf>,

    /// SS58 address prefix (overrides SS58_FORMAT)
    #[arg(long, global = true)]
    ss58_format: Option<u16>,

    /// Key scheme: sr25519 or ed25519 (overrides KEY_SCHEME)
    #[arg(long, global = true)]
    scheme: Option<KeyScheme>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new wallet with a coldkey and a hotkey
    Create {
        /// Wallet name (prompted for when omitted)
        #[arg(short, long)]
        name: Option<String>,
        /// Hotkey name
        #[arg(short = 'k', long, default_value = DEFAULT_HOTKEY)]
        hotkey: String,
        /// Number of mnemonic words (12, 15, 18, 21, 24)
        #[arg(long)]
        words: Option<usize>,
        /// Replace existing keyfiles
        #[arg(long)]
        overwrite: bool,
        /// Skip writing coldkeypub.txt
        #[arg(long)]
        no_coldkeypub: bool,
    },

    /// Restore a coldkey from its mnemonic
    RegenColdkey {
        #[arg(short, long)]
        name: String,
        #[arg(long)]
        mnemonic: String,
        #[arg(long)]
        overwrite: bool,
    },

    /// Restore a hotkey from its mnemonic
    RegenHotkey {
        #[arg(short, long)]
        name: String,
        #[arg(short = 'k', long, default_value = DEFAULT_HOTKEY)]
        hotkey: String,
        #[arg(long)]
        mnemonic: String,
        #[arg(long)]
        overwrite: bool,
    },

    /// Derive and print keys for a mnemonic without writing anything
    Inspect {
        #[arg(long)]
        mnemonic: String,
    },

    /// List wallets
    List,

    /// Show a wallet's addresses
    Show {
        #[arg(short, long)]
        name: String,
    },

    /// Delete a wallet and all of its keyfiles
    Delete {
        #[arg(short, long)]
        name: String,
    },
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = WalletConfig::from_env();
    if let Some(path) = cli.wallet_path {
        config.wallet_path = path;
    }
    if let Some(format) = cli.ss58_format {
        config.ss58_format = format;
    }
    if let Some(scheme) = cli.scheme {
        config.scheme = scheme;
    }
    let manager = WalletManager::with_config(config);

    match cli.command {
        None => {
            let name = prompt_wallet_name()?;
            let params = manager.create_params(&name);
            print_outcome(manager.create_wallet(&params))
        }
        Some(Command::Create {
            name,
            hotkey,
            words,
            overwrite,
            no_coldkeypub,
        }) => {
            let name = match name {
                Some(name) => name,
                None => prompt_wallet_name()?,
            };
            let mut params = manager.create_params(&name);
            params.hotkey = hotkey;
            params.overwrite = overwrite;
            if let Some(words) = words {
                params.words = words;
            }
            if no_coldkeypub {
                params.save_coldkeypub = false;
            }
            print_outcome(manager.create_wallet(&params))
        }
        Some(Command::RegenColdkey {
            name,
            mnemonic,
            overwrite,
        }) => print_outcome(manager.regenerate_coldkey(&name, &mnemonic, overwrite)),
        Some(Command::RegenHotkey {
            name,
            hotkey,
            mnemonic,
            overwrite,
        }) => print_outcome(manager.regenerate_hotkey(&name, &hotkey, &mnemonic, overwrite)),
        Some(Command::Inspect { mnemonic }) => {
            let key = finish(manager.inspect_mnemonic(&mnemonic))?;
            print_key(&key);
            Ok(())
        }
        Some(Command::List) => {
            let wallets = finish(manager.list_wallets())?;
            if wallets.is_empty() {
                println!("No wallets in {}", manager.storage.base_dir().display());
            }
            for name in wallets {
                match manager.wallet_info(&name).data {
                    Some(info) => println!("{:<20} {}", name, info.coldkey_address),
                    None => println!("{:<20} (no coldkey)", name),
                }
            }
            Ok(())
        }
        Some(Command::Show { name }) => {
            let info = finish(manager.wallet_info(&name))?;
            print_info(&info);
            Ok(())
        }
        Some(Command::Delete { name }) => {
            finish(manager.delete_wallet(&name))?;
            println!("🗑️  Wallet '{}' deleted", name);
            Ok(())
        }
    }
}

fn prompt_wallet_name() -> Result<String> {
    print!("Enter wallet name [default]: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read wallet name")?;

    let name = line.trim();
    Ok(if name.is_empty() { "default" } else { name }.to_string())
}

/// A failed operation becomes the process error (exit status 1)
fn finish<T>(result: OperationResult<T>) -> Result<T> {
    result.into_result().map_err(|e| anyhow!("❌ {}", e))
}

fn print_outcome(result: OperationResult<WalletOutcome>) -> Result<()> {
    let outcome = finish(result)?;

    println!("\n🔑 Wallet '{}'", outcome.info.name);
    println!("{}", "=".repeat(70));
    for key in &outcome.keys {
        print_key(key);
    }
    println!("{}", "=".repeat(70));
    print_info(&outcome.info);

    println!("\n⚠️  Store the mnemonics above somewhere safe. They are the only way to recover these keys.\n");
    Ok(())
}

fn print_key(key: &GeneratedKey) {
    println!("\n📝 {:?} '{}' ({})", key.role, key.name, key.scheme);
    println!("   Mnemonic:     {}", key.mnemonic);
    println!("   SS58 address: {}", key.ss58_address);
    println!("   Public key:   {}", key.public_key);
    if let Some(path) = &key.path {
        println!("   Keyfile:      {}", path.display());
    }
}

fn print_info(info: &WalletInfo) {
    println!("\n📍 {} (ss58 format {})", info.name, info.ss58_format);
    println!("   Coldkey: {}", info.coldkey_address);
    if let (Some(name), Some(address)) = (&info.hotkey_name, &info.hotkey_address) {
        println!("   Hotkey '{}': {}", name, address);
    }
    println!("   Created: {}", info.created_at.to_rfc3339());
}
