use crate::apdu::{Frame, Instruction, P1_NON_CONFIRM, P2_NO_CHAINCODE};

/// Header only, no body: `[CLA][0x06][0x00][0x00][0x00]`
pub fn build() -> Frame {
    Frame::new(Instruction::GetVersion, P1_NON_CONFIRM, P2_NO_CHAINCODE)
}
