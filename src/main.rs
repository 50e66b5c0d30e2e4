use std::path::PathBuf;

use clap::{Parser, Subcommand};
use heimdall_signer::ZoneKey;
use heimdall_signer::dnssec::dnskey::{KSK_FLAGS, ZSK_FLAGS};
use heimdall_signer::dnssec::{nsec3_hash, step_hash};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "heimdall-signer", version, about = "Heimdall online DNSSEC signing tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the successor of a base32hex NSEC3 hash
    Step { hash: String },

    /// Print the NSEC3 hash of a name
    Nsec3Hash {
        name: String,
        /// Salt in hex, "-" for none
        #[arg(short, long, default_value = "-")]
        salt: String,
        #[arg(short, long, default_value_t = 0)]
        iterations: u16,
    },

    /// Print the DNSKEY and key tag for a PKCS#8 RSA key
    KeyTag {
        key: PathBuf,
        /// Publish as a key-signing key (flags 257)
        #[arg(long)]
        ksk: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Step { hash } => {
            println!("{}", step_hash(&hash)?);
        }
        Command::Nsec3Hash {
            name,
            salt,
            iterations,
        } => {
            let salt = if salt == "-" {
                Vec::new()
            } else {
                hex::decode(&salt)?
            };
            println!("{}", nsec3_hash(&name, &salt, iterations)?);
        }
        Command::KeyTag { key, ksk } => {
            let flags = if ksk { KSK_FLAGS } else { ZSK_FLAGS };
            let zone_key = ZoneKey::from_pkcs8_file(&key, flags)?;
            let dnskey = zone_key.dnskey();
            println!(
                "DNSKEY {} {} {} ; key tag {}",
                dnskey.flags,
                dnskey.protocol,
                dnskey.algorithm,
                zone_key.key_tag()
            );
        }
    }
    Ok(())
}
