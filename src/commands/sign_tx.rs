use crate::apdu::{Frame, Instruction, SignatureAlgo};
use crate::error::ApduError;
use crate::protocol;
use crate::types::Bip32Path;

/// Serialized transaction bytes, split across as many frames as needed.
pub fn build(
    tx: &[u8],
    path: &Bip32Path,
    algo: SignatureAlgo,
) -> Result<Vec<Frame>, ApduError> {
    protocol::build_frames(Instruction::SignTransaction, tx, path, algo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_uses_tx_instruction() {
        let frames =
            build(&[0xFF, 0x02], &Bip32Path::ark_devnet(), SignatureAlgo::default()).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].ins, 0x04);
        assert_eq!(frames[0].p1, 0x80);
        assert_eq!(frames[0].p2, 0x50);
    }

    #[test]
    fn oversized_transaction_rejected() {
        let tx = vec![0xFF; 2551];
        let err = build(&tx, &Bip32Path::ark_devnet(), SignatureAlgo::default()).unwrap_err();
        assert!(matches!(err, ApduError::PayloadTooLarge { len: 2551, .. }));
    }
}
