//! filekv CLI
//!
//! Inspect and edit a store directory from the command line.

use std::fs;
use std::process;

use clap::{Parser, Subcommand};
use filekv::{Config, JsonStore, RawStore, Result};
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

/// filekv CLI
#[derive(Parser, Debug)]
#[command(name = "filekv-cli")]
#[command(about = "CLI for filekv directory stores")]
#[command(version)]
struct Args {
    /// Store directory
    #[arg(short, long, default_value = "./filekv_data")]
    dir: String,

    /// Use JSON mode (`.json` files, values parsed as JSON)
    #[arg(short, long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Set {
        /// The key to set
        key: String,

        /// The value to set (JSON text in JSON mode)
        value: String,
    },

    /// Delete a key
    Del {
        /// The key to delete
        key: String,
    },

    /// List all keys
    Keys,

    /// Delete every key
    Clear,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,filekv=info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    // restore needs an existing directory
    fs::create_dir_all(&args.dir)
        .map_err(|e| filekv::StoreError::Config(format!("cannot create {}: {}", args.dir, e)))?;

    let config = Config::builder().directory(&args.dir).restore(true).build();

    if args.json {
        let store = JsonStore::<Value>::open(config)?;
        match args.command {
            Commands::Get { key } => match store.get_item(&key)? {
                Some(value) => println!("{}", value),
                None => println!("(nil)"),
            },
            Commands::Set { key, value } => {
                let value: Value = serde_json::from_str(&value)?;
                store.set_item(&key, value)?;
                println!("OK");
            }
            Commands::Del { key } => {
                store.remove_item(&key)?;
                println!("OK");
            }
            Commands::Keys => print_keys(store.keys()),
            Commands::Clear => {
                store.clear()?;
                println!("OK");
            }
        }
    } else {
        let store = RawStore::open(config)?;
        match args.command {
            Commands::Get { key } => match store.get_item(&key)? {
                Some(value) => println!("{}", value),
                None => println!("(nil)"),
            },
            Commands::Set { key, value } => {
                store.set_item(&key, value)?;
                println!("OK");
            }
            Commands::Del { key } => {
                store.remove_item(&key)?;
                println!("OK");
            }
            Commands::Keys => print_keys(store.keys()),
            Commands::Clear => {
                store.clear()?;
                println!("OK");
            }
        }
    }

    Ok(())
}

fn print_keys(keys: Vec<String>) {
    for (i, key) in keys.iter().enumerate() {
        println!("{}) {}", i, key);
    }
}
