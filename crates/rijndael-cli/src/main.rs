//! Command-line interface for `rijndael-rs`.

#![forbid(unsafe_code)]

mod format;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael_core::{CipherContext, KeySize};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::format::{parse_bytes, OutputFormat};

/// AES (Rijndael) CLI: zero-padded, independent-block encryption of a message.
#[derive(Parser)]
#[command(name = "rijndael", version, about)]
struct Cli {
    /// Key size in bits (128, 192 or 256).
    #[arg(
        short = 's',
        long,
        value_name = "BITS",
        default_value = "256",
        value_parser = parse_key_size
    )]
    key_size: KeySize,
    /// Raw key string; its length must match the key size.
    #[arg(
        short = 'k',
        long,
        value_name = "KEY",
        conflicts_with_all = ["key_hex", "random_key"]
    )]
    key: Option<String>,
    /// Key as hex characters; its length must match the key size.
    #[arg(long, value_name = "HEX", conflicts_with = "random_key")]
    key_hex: Option<String>,
    /// Generate a random key of the selected size and print it.
    #[arg(long, default_value_t = false)]
    random_key: bool,
    /// Optional RNG seed for a reproducible random key.
    #[arg(long, requires = "random_key")]
    seed: Option<u64>,
    /// Message to encrypt, or ciphertext bytes when only decrypting.
    #[arg(short = 'm', long, value_name = "MSG")]
    message: String,
    /// Encrypt the message.
    #[arg(short = 'e', long)]
    encrypt: bool,
    /// Decrypt the message (or the ciphertext just produced by `-e`).
    #[arg(short = 'd', long)]
    decrypt: bool,
    /// Print bytes as an escaped C string instead of hex pairs.
    #[arg(short = 'c', long = "c-str")]
    c_str: bool,
    /// Print only the bytes, without labels.
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    for line in run(&cli)? {
        println!("{line}");
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_key_size(value: &str) -> Result<KeySize, String> {
    value
        .parse::<usize>()
        .ok()
        .and_then(KeySize::from_bits)
        .ok_or_else(|| format!("invalid key size `{value}` (valid sizes: 128/192/256)"))
}

fn run(cli: &Cli) -> Result<Vec<String>> {
    let key = resolve_key(cli)?;
    let mut lines = Vec::new();
    if cli.random_key {
        lines.push(labeled(cli.quiet, "Key[HEX]........: ", &hex::encode(&key)));
    }
    let mut ctx = CipherContext::new(&key).context("create cipher context")?;
    let format = if cli.c_str {
        OutputFormat::CString
    } else {
        OutputFormat::HexBytes
    };
    let (encrypt, decrypt) = if cli.encrypt || cli.decrypt {
        (cli.encrypt, cli.decrypt)
    } else {
        (true, true)
    };
    debug!(key_bits = cli.key_size.bits(), encrypt, decrypt, "running");

    let ciphertext = if encrypt {
        let ct = ctx
            .encrypt_buffer(cli.message.as_bytes())
            .context("encrypt message")?;
        lines.push(labeled(cli.quiet, "Encrypted[HEX]..: ", &format.render(&ct)));
        ct
    } else {
        parse_bytes(&cli.message).context("parse ciphertext")?
    };

    if decrypt {
        let plaintext = ctx
            .decrypt_buffer(&ciphertext)
            .context("decrypt ciphertext")?;
        lines.push(labeled(cli.quiet, "Decrypted[HEX]..: ", &format.render(&plaintext)));

        if encrypt {
            let message = cli.message.as_bytes();
            if !matches_with_zero_tail(message, &plaintext) {
                bail!("message differs from original; encryption or decryption failed");
            }
            lines.push(labeled(
                cli.quiet,
                "Decrypted[ASCII]: ",
                &String::from_utf8_lossy(message),
            ));
        }
    }

    ctx.release();
    Ok(lines)
}

fn resolve_key(cli: &Cli) -> Result<Vec<u8>> {
    let size = cli.key_size;
    let key = if let Some(raw) = &cli.key {
        raw.as_bytes().to_vec()
    } else if let Some(hex_str) = &cli.key_hex {
        hex::decode(hex_str.trim()).context("decode key hex")?
    } else if cli.random_key {
        random_key(size, cli.seed)
    } else {
        bail!("missing key: pass --key, --key-hex or --random-key");
    };
    if key.len() != size.key_len() {
        bail!(
            "key is {} bytes but the {}-bit key size needs {} bytes",
            key.len(),
            size.bits(),
            size.key_len()
        );
    }
    Ok(key)
}

fn random_key(size: KeySize, seed: Option<u64>) -> Vec<u8> {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    let mut rng = ChaCha20Rng::from_seed(seed_bytes);
    let mut key = vec![0u8; size.key_len()];
    rng.fill_bytes(&mut key);
    key
}

fn matches_with_zero_tail(message: &[u8], plaintext: &[u8]) -> bool {
    plaintext.len() >= message.len()
        && &plaintext[..message.len()] == message
        && plaintext[message.len()..].iter().all(|&b| b == 0)
}

fn labeled(quiet: bool, label: &str, body: &str) -> String {
    if quiet {
        body.to_string()
    } else {
        format!("{label}{body}")
    }
}
