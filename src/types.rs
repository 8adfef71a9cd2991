//! Core types: BIP32 derivation paths.

use std::str::FromStr;

use byteorder::{BigEndian, ByteOrder};

use crate::error::ApduError;

pub(crate) const HARDENED: u32 = 0x8000_0000;

/// Path used when none is given: ARK devnet, first address.
pub const DEFAULT_PATH: &str = "44'/1'/0'/0/0";

/// Most levels that still leave room for the path section (length byte
/// included) inside a single frame.
pub const MAX_LEVELS: usize = (crate::protocol::chunks::CHUNK_SIZE - 1) / 4;

/// BIP32 derivation path.
///
/// Parsed from `44'/1'/0'/0/0` (an `m/` prefix is accepted), where an
/// apostrophe marks a hardened level. Each level is kept with the
/// hardened bit already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bip32Path(Vec<u32>);

impl Bip32Path {
    /// Hardened levels must already have bit 31 set.
    pub fn new(components: Vec<u32>) -> Result<Self, ApduError> {
        if components.len() > MAX_LEVELS {
            return Err(ApduError::InvalidPath(format!(
                "{} levels given, at most {MAX_LEVELS} fit in a frame",
                components.len()
            )));
        }
        Ok(Self(components))
    }

    /// `44'/coin'/account'/change/index`
    #[must_use]
    pub fn bip44(coin: u32, account: u32, change: u32, index: u32) -> Self {
        Self(vec![
            44 | HARDENED,
            coin | HARDENED,
            account | HARDENED,
            change & !HARDENED,
            index & !HARDENED,
        ])
    }

    /// ARK devnet: `44'/1'/0'/0/0`
    #[must_use]
    pub fn ark_devnet() -> Self {
        Self::bip44(1, 0, 0, 0)
    }

    /// Wire format: `[path[0]: u32 BE]...[path[n-1]: u32 BE]`, no count prefix.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = vec![0u8; self.0.len() * 4];
        for (word, &component) in buf.chunks_exact_mut(4).zip(&self.0) {
            BigEndian::write_u32(word, component);
        }
        buf
    }

    /// Inverse of [`encode`](Self::encode).
    pub fn decode(bytes: &[u8]) -> Result<Self, ApduError> {
        if bytes.len() % 4 != 0 {
            return Err(ApduError::InvalidPath(format!(
                "encoded path length {} is not a multiple of 4",
                bytes.len()
            )));
        }
        Self::new(bytes.chunks_exact(4).map(BigEndian::read_u32).collect())
    }

    pub fn components(&self) -> &[u32] {
        &self.0
    }

    /// `(index, hardened)` pairs in derivation order.
    pub fn levels(&self) -> impl Iterator<Item = (u32, bool)> + '_ {
        self.0.iter().map(|&c| (c & !HARDENED, c & HARDENED != 0))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Matches `44['] / coin['] / account['] / change / index`.
    pub fn is_bip44(&self) -> bool {
        match self.0.as_slice() {
            [purpose, _, _, change, index] => {
                *purpose & !HARDENED == 44 && change & HARDENED == 0 && index & HARDENED == 0
            }
            _ => false,
        }
    }
}

impl Default for Bip32Path {
    fn default() -> Self {
        Self::ark_devnet()
    }
}

impl FromStr for Bip32Path {
    type Err = ApduError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = match s.trim() {
            "" | "m" => return Ok(Self(Vec::new())),
            trimmed => trimmed.strip_prefix("m/").unwrap_or(trimmed),
        };

        let components = body
            .split('/')
            .map(parse_level)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(components)
    }
}

fn parse_level(level: &str) -> Result<u32, ApduError> {
    let (digits, hardened) = match level.strip_suffix('\'') {
        Some(digits) => (digits, true),
        None => (level, false),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApduError::InvalidPath(format!(
            "level '{level}' is not a number"
        )));
    }

    let value: u32 = digits
        .parse()
        .map_err(|_| ApduError::InvalidPath(format!("level '{level}' is out of range")))?;
    if value & HARDENED != 0 {
        return Err(ApduError::InvalidPath(format!(
            "level '{level}' does not fit in 31 bits"
        )));
    }

    Ok(if hardened { value | HARDENED } else { value })
}

impl std::fmt::Display for Bip32Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "m")?;
        for (val, hardened) in self.levels() {
            let h = if hardened { "'" } else { "" };
            write!(f, "/{val}{h}")?;
        }
        Ok(())
    }
}
