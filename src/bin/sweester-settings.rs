// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line settings lookup.
//!
//! Resolves keys the same way application code does: environment override,
//! then the YAML file, then the given default, with secret decryption when a
//! vault key is supplied.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use sweester_config::prelude::*;
use sweester_config::service::global;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "sweester-settings", version, about = "Resolve application settings")]
struct Cli {
    /// Settings file (defaults to $SWEESTER_CONFIG, then ./config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Which keys may be decrypted: secret-keys or all-keys
    #[arg(long, global = true, default_value_t = DecryptionGate::SecretKeysOnly)]
    gate: DecryptionGate,

    /// Environment variable holding the base64 vault key
    #[cfg(feature = "vault")]
    #[arg(long, global = true)]
    vault_key_env: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the resolved value of a key
    Get {
        /// Dotted settings key, e.g. db.user
        key: String,
        /// Value printed when the key resolves to nothing
        #[arg(long, default_value = "")]
        default: String,
    },
    /// Print every setting from the file as flattened YAML
    Dump,
    /// Print a key interpreted as a boolean
    Bool {
        /// Dotted settings key
        key: String,
        /// Value used when the key resolves to nothing
        #[arg(long, default_value_t = false)]
        default: bool,
    },
    /// Print a key interpreted as a positive integer
    Uint {
        /// Dotted settings key
        key: String,
        /// Value used when the key resolves to nothing or zero
        #[arg(long, default_value_t = 0)]
        default: u64,
    },
    /// Encrypt a value for pasting into a settings file
    #[cfg(feature = "vault")]
    Encrypt {
        /// Value to encrypt
        plaintext: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let resolver = || -> Result<SettingsResolver> {
        let resolver = build_resolver(&cli)?;
        tracing::debug!("Resolving with {:?}", resolver);
        Ok(resolver)
    };

    match &cli.command {
        Command::Get { key, default } => Ok(resolver()?.resolve(key, default)?.into()),
        Command::Dump => serde_yaml::to_string(&resolver()?.all()?).map_err(|e| {
            ConfigError::ParseError {
                message: format!("Failed to render settings: {}", e),
                source: Some(Box::new(e)),
            }
        }),
        Command::Bool { key, default } => Ok(resolver()?.get_boolean(key, *default)?.to_string()),
        Command::Uint { key, default } => Ok(resolver()?.get_uint(key, *default)?.to_string()),
        #[cfg(feature = "vault")]
        Command::Encrypt { plaintext } => {
            vault_from(cli.vault_key_env.as_deref())?.encrypt_to_base64(plaintext.as_bytes())
        }
    }
}

fn build_resolver(cli: &Cli) -> Result<SettingsResolver> {
    let path = cli.config.clone().unwrap_or_else(global::default_path);
    #[allow(unused_mut)]
    let mut builder = SettingsResolver::builder()
        .with_yaml_file(path)
        .with_decryption_gate(cli.gate);

    #[cfg(feature = "vault")]
    if cli.vault_key_env.is_some() {
        builder = builder.with_decryptor(vault_from(cli.vault_key_env.as_deref())?);
    }

    builder.build()
}

#[cfg(feature = "vault")]
fn vault_from(var: Option<&str>) -> Result<VaultDecryptor> {
    let var = var.ok_or_else(|| ConfigError::SourceError {
        source_name: "vault".to_string(),
        message: "--vault-key-env is required".to_string(),
        source: None,
    })?;
    VaultDecryptor::from_env_var(var)
}
