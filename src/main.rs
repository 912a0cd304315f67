use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use rsa_text::rsa::bigint::parse_integer;
use rsa_text::rsa::DEFAULT_PACKET_SIZE;
use rsa_text::{logging, Cipher, CipherConfig, KeyTriple};

#[derive(Parser, Debug)]
#[command(author, version, about = "Textbook RSA with decimal codewords", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive a key triple from two primes and print it as "n e d"
    Keygen {
        /// First prime (decimal or 0x-prefixed hex)
        p: String,
        /// Second prime (decimal or 0x-prefixed hex)
        q: String,
    },
    /// Encrypt a message into a codeword sequence
    Encrypt {
        /// Key triple "n e d"
        #[arg(short, long)]
        key: String,
        /// Message bytes per packet
        #[arg(short = 's', long, default_value_t = DEFAULT_PACKET_SIZE)]
        packet_size: usize,
        message: String,
    },
    /// Decrypt a codeword sequence
    Decrypt {
        #[arg(short, long)]
        key: String,
        codewords: String,
    },
    /// Sign a message
    Sign {
        #[arg(short, long)]
        key: String,
        message: String,
    },
    /// Sign the contents of a file
    SignFile {
        #[arg(short, long)]
        key: String,
        path: PathBuf,
    },
    /// Verify a message signature; exits non-zero when invalid
    Verify {
        #[arg(short, long)]
        key: String,
        message: String,
        signature: String,
    },
    /// Verify a file signature; exits non-zero when invalid
    VerifyFile {
        #[arg(short, long)]
        key: String,
        path: PathBuf,
        signature: String,
    },
}

fn load_cipher(key: &str, packet_size: usize) -> Result<Cipher> {
    let keys: KeyTriple = key.parse().context("could not parse --key")?;
    Ok(Cipher::with_keys(keys).with_config(CipherConfig::default().with_packet_size(packet_size)))
}

fn parse_prime(text: &str) -> Result<rsa_text::rsa::bigint::RsaBigInt> {
    parse_integer(text).ok_or_else(|| anyhow!("not a non-negative integer: {:?}", text))
}

fn report(valid: bool) -> bool {
    println!("{}", if valid { "valid" } else { "invalid" });
    valid
}

/// Returns whether the command succeeded; only verification can fail softly.
fn run(args: Args) -> Result<bool> {
    match args.command {
        Command::Keygen { p, q } => {
            let (p, q) = (parse_prime(&p)?, parse_prime(&q)?);
            let mut cipher = Cipher::new();
            let keys = cipher.generate_keys(&p, &q);
            info!(bits = keys.bit_length(), "generated keys");
            println!("{}", keys);
        }
        Command::Encrypt {
            key,
            packet_size,
            message,
        } => {
            let cipher = load_cipher(&key, packet_size)?;
            println!("{}", cipher.encrypt(message.as_bytes())?);
        }
        Command::Decrypt { key, codewords } => {
            let cipher = load_cipher(&key, DEFAULT_PACKET_SIZE)?;
            let message = cipher.decrypt(&codewords)?;
            println!("{}", String::from_utf8_lossy(&message));
        }
        Command::Sign { key, message } => {
            let cipher = load_cipher(&key, DEFAULT_PACKET_SIZE)?;
            println!("{}", cipher.sign(message.as_bytes())?);
        }
        Command::SignFile { key, path } => {
            let cipher = load_cipher(&key, DEFAULT_PACKET_SIZE)?;
            let signature = cipher
                .sign_file(&path)
                .with_context(|| format!("could not sign {}", path.display()))?;
            println!("{}", signature);
        }
        Command::Verify {
            key,
            message,
            signature,
        } => {
            let cipher = load_cipher(&key, DEFAULT_PACKET_SIZE)?;
            return Ok(report(cipher.verify(message.as_bytes(), &signature)?));
        }
        Command::VerifyFile {
            key,
            path,
            signature,
        } => {
            let cipher = load_cipher(&key, DEFAULT_PACKET_SIZE)?;
            let valid = cipher
                .verify_file(&path, &signature)
                .with_context(|| format!("could not verify {}", path.display()))?;
            return Ok(report(valid));
        }
    }

    Ok(true)
}

fn main() {
    logging::init();

    match run(Args::parse()) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    }
}
