use crate::apdu::{Frame, Instruction, SignatureAlgo};
use crate::error::ApduError;
use crate::protocol;
use crate::types::Bip32Path;

/// Message bytes, split across as many frames as needed.
///
/// With `ascii_only` set, messages containing bytes above `0x7F` are
/// refused, as the app only displays 7-bit text.
pub fn build(
    message: &[u8],
    path: &Bip32Path,
    algo: SignatureAlgo,
    ascii_only: bool,
) -> Result<Vec<Frame>, ApduError> {
    if ascii_only && !message.is_ascii() {
        return Err(ApduError::NonAsciiMessage);
    }
    protocol::build_frames(Instruction::SignMessage, message, path, algo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_uses_message_instruction() {
        let frames = build(
            b"What we know is a drop",
            &Bip32Path::ark_devnet(),
            SignatureAlgo::SchnorrLegacy,
            true,
        )
        .unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].ins, 0x08);
        assert_eq!(frames[0].data, b"What we know is a drop");
    }

    #[test]
    fn non_ascii_allowed_unless_requested() {
        let message = "caf\u{e9}".as_bytes();
        let path = Bip32Path::ark_devnet();
        assert!(build(message, &path, SignatureAlgo::SchnorrLegacy, false).is_ok());
        assert!(matches!(
            build(message, &path, SignatureAlgo::SchnorrLegacy, true),
            Err(ApduError::NonAsciiMessage)
        ));
    }

    #[test]
    fn empty_message_is_one_frame() {
        let frames = build(
            &[],
            &Bip32Path::ark_devnet(),
            SignatureAlgo::SchnorrLegacy,
            false,
        )
        .unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].p1, 0x80);
        assert!(frames[0].data.is_empty());
    }
}
