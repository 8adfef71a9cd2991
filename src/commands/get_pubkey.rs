use crate::apdu::{
    Frame, Instruction, P1_CONFIRM, P1_NON_CONFIRM, P2_NO_CHAINCODE, P2_USE_CHAINCODE,
};
use crate::types::Bip32Path;

/// Always a single frame: the encoded path is the whole body.
///
/// Wire: `[CLA][0x02][confirm][chain_code][path_len][path_len / 4][PATH]`
pub fn build(path: &Bip32Path, chain_code: bool, confirm: bool) -> Frame {
    let p1 = if confirm { P1_CONFIRM } else { P1_NON_CONFIRM };
    let p2 = if chain_code {
        P2_USE_CHAINCODE
    } else {
        P2_NO_CHAINCODE
    };
    Frame::new(Instruction::GetPublicKey, p1, p2).with_path(path.encode())
}
