//! APDU header constants and the [`Frame`] wire type.
//!
//! The ARK app uses CLA `0xE0`. For key requests P1 asks for on-device
//! confirmation and P2 for the chain code; for signing requests P1 marks
//! the frame's position in the sequence and P2 picks the algorithm.

/// Instruction class for every ARK app command.
pub const CLA: u8 = 0xE0;

pub const P1_NON_CONFIRM: u8 = 0x00;
pub const P1_CONFIRM: u8 = 0x01;

pub const P2_NO_CHAINCODE: u8 = 0x00;
pub const P2_USE_CHAINCODE: u8 = 0x01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Instruction {
    GetPublicKey = 0x02,
    SignTransaction = 0x04,
    GetVersion = 0x06,
    SignMessage = 0x08,
}

/// P1 of a signing frame: where it sits in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Segment {
    /// Only frame (N == 1).
    Single = 0x80,
    /// First of N > 1.
    First = 0x00,
    /// Frames 2..N-1 of N > 2.
    More = 0x01,
    /// Nth of N > 1.
    Last = 0x81,
}

/// P2 of a signing frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum SignatureAlgo {
    Ecdsa = 0x40,
    #[default]
    SchnorrLegacy = 0x50,
}

/// One APDU ready to send.
///
/// The first frame of a request carries the encoded derivation path
/// ahead of its data; continuation frames carry data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub cla: u8,
    pub ins: u8,
    pub p1: u8,
    pub p2: u8,
    pub path: Option<Vec<u8>>,
    pub data: Vec<u8>,
}

impl Frame {
    pub fn new(ins: Instruction, p1: u8, p2: u8) -> Self {
        Self {
            cla: CLA,
            ins: ins as u8,
            p1,
            p2,
            path: None,
            data: Vec::new(),
        }
    }

    pub fn with_path(mut self, path: Vec<u8>) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_data(mut self, data: Vec<u8>) -> Self {
        self.data = data;
        self
    }

    /// Bytes after the length byte.
    pub fn body_len(&self) -> usize {
        match &self.path {
            Some(path) => 1 + path.len() + self.data.len(),
            None => self.data.len(),
        }
    }

    /// Wire format:
    /// - with path: `[CLA][INS][P1][P2][path_len + data_len][path_len / 4][PATH][DATA]`
    /// - without:   `[CLA][INS][P1][P2][data_len][DATA]`
    ///
    /// # Panics
    ///
    /// Panics if the body exceeds 255 bytes. Frames built by this crate
    /// are checked before they are returned.
    pub fn serialize(&self) -> Vec<u8> {
        assert!(
            self.body_len() <= 255,
            "APDU body too long: {} bytes (max 255)",
            self.body_len()
        );
        let mut buf = Vec::with_capacity(5 + self.body_len());
        buf.push(self.cla);
        buf.push(self.ins);
        buf.push(self.p1);
        buf.push(self.p2);
        match &self.path {
            Some(path) => {
                buf.push((path.len() + self.data.len()) as u8);
                buf.push((path.len() / 4) as u8);
                buf.extend_from_slice(path);
            }
            None => buf.push(self.data.len() as u8),
        }
        buf.extend_from_slice(&self.data);
        buf
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.serialize())
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
