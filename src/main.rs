use anyhow::Context;
use clap::Parser;
use log::{debug, warn};

use ark_ledger_apdu::{
    ApduError, Bip32Path, Config, Frame, RequestKind, SignatureAlgo, DEFAULT_PATH,
};

/// Wraps ARK transactions and messages into APDU frames for the ARK Ledger
/// app and prints them as hex.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Serializes a hex-encoded message
    #[arg(long, value_name = "HEX")]
    message: Option<String>,

    /// Serializes a hex-encoded transaction
    #[arg(long, value_name = "HEX")]
    tx: Option<String>,

    /// BIP32 signing path
    #[arg(long, default_value = DEFAULT_PATH)]
    path: String,

    /// Creates a public key request
    #[arg(long, alias = "publicKey")]
    public_key: bool,

    /// Creates an extended public key request (public key and chain code)
    #[arg(long, alias = "extPublicKey")]
    ext_public_key: bool,

    /// Creates an app version request
    #[arg(long)]
    app_version: bool,

    /// Sign with ECDSA instead of Schnorr
    #[arg(long)]
    ecdsa: bool,

    /// Ask for confirmation on the device (public key requests)
    #[arg(long)]
    confirm: bool,

    /// Require a BIP44 path and an ASCII message
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn into_config(self) -> Result<Config, ApduError> {
        let flags = [
            (self.public_key, RequestKind::PublicKey),
            (self.ext_public_key, RequestKind::ExtendedPublicKey),
            (self.app_version, RequestKind::AppVersion),
            (self.message.is_some(), RequestKind::Message),
            (self.tx.is_some(), RequestKind::Transaction),
        ];
        let selected: Vec<RequestKind> = flags
            .iter()
            .filter(|(set, _)| *set)
            .map(|&(_, kind)| kind)
            .collect();

        let kind = match selected.as_slice() {
            [kind] => *kind,
            [] => {
                return Err(ApduError::InvalidRequest(
                    "no request type selected - use --public-key, --ext-public-key, \
                     --app-version, --message or --tx"
                        .into(),
                ))
            }
            many => {
                return Err(ApduError::InvalidRequest(format!(
                    "select one request type, got {many:?}"
                )))
            }
        };

        let payload = match kind {
            RequestKind::Message => self.message.as_deref().map(decode_hex).transpose()?,
            RequestKind::Transaction => self.tx.as_deref().map(decode_hex).transpose()?,
            _ => None,
        };

        let path: Bip32Path = self.path.parse()?;
        if !path.is_bip44() && !self.strict {
            warn!("{path} is not a BIP44 path");
        }

        Ok(Config {
            kind,
            path,
            payload,
            algorithm: if self.ecdsa {
                SignatureAlgo::Ecdsa
            } else {
                SignatureAlgo::SchnorrLegacy
            },
            confirm: self.confirm,
            strict: self.strict,
        })
    }
}

fn decode_hex(s: &str) -> Result<Vec<u8>, ApduError> {
    let cleaned: String = s.split_whitespace().collect();
    Ok(hex::decode(cleaned)?)
}

fn render(kind: RequestKind, frames: &[Frame]) -> String {
    let title = match kind {
        RequestKind::PublicKey => Some("PublicKey Request Payload"),
        RequestKind::ExtendedPublicKey => Some("Extended PublicKey Request Payload"),
        RequestKind::AppVersion => Some("Version Request Payload"),
        RequestKind::Message | RequestKind::Transaction => None,
    };

    let mut out = String::new();
    for (i, frame) in frames.iter().enumerate() {
        match title {
            Some(title) => out.push_str(&format!("\n{title}:\n{frame}\n")),
            None => out.push_str(&format!(
                "\nPayload Chunk {} of {}:\n{frame}\n",
                i + 1,
                frames.len()
            )),
        }
    }
    out
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Cli::parse().into_config()?;
    let frames = config
        .frames()
        .map_err(|e| {
            debug!("status word 0x{:04X}", e.status_word() as u16);
            e
        })
        .with_context(|| format!("failed to build {:?} request", config.kind))?;

    print!("{}", render(config.kind, &frames));
    Ok(())
}
