//! Framing for signing requests.
//!
//! A transaction or message is split into at most ten frames. The first
//! frame carries the derivation path ahead of its slice of the payload,
//! so its share of the payload shrinks by the size of the path section.
//! P1 of every frame marks whether it is the single, first, a middle or
//! the last frame of the request.

pub mod chunks;

use log::debug;

use crate::apdu::{Frame, Instruction, Segment, SignatureAlgo};
use crate::error::ApduError;
use crate::types::Bip32Path;
use chunks::{split_payload, CHUNK_SIZE};

/// Split `payload` into signing frames for `ins`, embedding `path` in the
/// first one.
pub fn build_frames(
    ins: Instruction,
    payload: &[u8],
    path: &Bip32Path,
    algo: SignatureAlgo,
) -> Result<Vec<Frame>, ApduError> {
    let encoded_path = path.encode();
    // path bytes plus the level-count byte
    let path_section = encoded_path.len() + 1;

    let slices = split_payload(payload, path_section)?;
    let count = slices.len();
    debug!(
        "{ins:?}: {} payload bytes, path {path}, {count} frame(s)",
        payload.len()
    );

    let mut frames = Vec::with_capacity(count);
    for (index, slice) in slices.into_iter().enumerate() {
        let segment = Segment::for_position(index, count);
        let mut frame = Frame::new(ins, segment as u8, algo as u8).with_data(slice.to_vec());
        if index == 0 {
            frame = frame.with_path(encoded_path.clone());
        }

        let body_len = frame.body_len();
        if body_len > CHUNK_SIZE {
            return Err(ApduError::FrameOverflow {
                index,
                len: body_len,
            });
        }

        debug!("frame {}/{count}: {segment:?}, {body_len} body bytes", index + 1);
        frames.push(frame);
    }

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    fn empty_path() -> Bip32Path {
        "".parse().unwrap()
    }

    #[test]
    fn single_frame_carries_path() {
        let path = Bip32Path::ark_devnet();
        let frames = build_frames(
            Instruction::SignMessage,
            b"hello",
            &path,
            SignatureAlgo::SchnorrLegacy,
        )
        .unwrap();

        assert_eq!(frames.len(), 1);
        let bytes = frames[0].serialize();
        assert_eq!(&bytes[..4], &[0xE0, 0x08, 0x80, 0x50]);
        assert_eq!(bytes[4], 20 + 5);
        assert_eq!(bytes[5], 5);
        assert_eq!(&bytes[6..26], path.encode().as_slice());
        assert_eq!(&bytes[26..], b"hello");
    }

    #[test]
    fn two_frames_first_and_last() {
        let data = payload(300);
        let frames = build_frames(
            Instruction::SignTransaction,
            &data,
            &Bip32Path::ark_devnet(),
            SignatureAlgo::SchnorrLegacy,
        )
        .unwrap();

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].p1, Segment::First as u8);
        assert_eq!(frames[1].p1, Segment::Last as u8);
        assert_eq!(frames[0].data.len(), 234);
        assert!(frames[1].path.is_none());

        let second = frames[1].serialize();
        assert_eq!(&second[..5], &[0xE0, 0x04, 0x81, 0x50, 66]);
        assert_eq!(&second[5..], &data[234..]);
    }

    #[test]
    fn many_frames_use_more_markers() {
        let data = payload(1200);
        let frames = build_frames(
            Instruction::SignTransaction,
            &data,
            &Bip32Path::ark_devnet(),
            SignatureAlgo::Ecdsa,
        )
        .unwrap();

        let markers: Vec<u8> = frames.iter().map(|f| f.p1).collect();
        assert_eq!(markers, vec![0x00, 0x01, 0x01, 0x01, 0x81]);
        assert!(frames.iter().all(|f| f.p2 == 0x40));
        assert!(frames.iter().skip(1).all(|f| f.path.is_none()));
    }

    #[test]
    fn frame_data_reassembles_payload() {
        for len in (0..2550).step_by(17).chain([254, 255, 509, 2549]) {
            let data = payload(len);
            let frames = build_frames(
                Instruction::SignMessage,
                &data,
                &empty_path(),
                SignatureAlgo::SchnorrLegacy,
            )
            .unwrap();
            assert_eq!(frames.len(), chunks::chunk_count(len));

            let joined: Vec<u8> = frames.iter().flat_map(|f| f.data.clone()).collect();
            assert_eq!(joined, data, "len {len}");
        }
    }

    #[test]
    fn empty_path_gives_zero_length_bytes() {
        let frames = build_frames(
            Instruction::SignMessage,
            &[],
            &empty_path(),
            SignatureAlgo::SchnorrLegacy,
        )
        .unwrap();
        assert_eq!(frames[0].to_hex(), "e00880500000");
    }

    #[test]
    fn exact_chunk_spills_into_second_frame() {
        let data = payload(255);
        let frames = build_frames(
            Instruction::SignTransaction,
            &data,
            &empty_path(),
            SignatureAlgo::SchnorrLegacy,
        )
        .unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].data.len(), 254);
        assert_eq!(frames[1].data.len(), 1);
    }

    #[test]
    fn payload_of_2550_rejected() {
        let data = payload(2550);
        let err = build_frames(
            Instruction::SignTransaction,
            &data,
            &Bip32Path::ark_devnet(),
            SignatureAlgo::SchnorrLegacy,
        )
        .unwrap_err();
        assert!(matches!(err, ApduError::TooManyChunks { count: 11, .. }));
    }

    #[test]
    fn open_ended_last_frame_overflow_rejected() {
        // 250 bytes is one frame, but only 234 fit next to a 5-level path
        let data = payload(250);
        let err = build_frames(
            Instruction::SignTransaction,
            &data,
            &Bip32Path::ark_devnet(),
            SignatureAlgo::SchnorrLegacy,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ApduError::FrameOverflow { index: 0, len: 271 }
        ));
    }

    #[test]
    fn every_frame_fits() {
        for len in (0..2550).step_by(13) {
            let data = payload(len);
            if let Ok(frames) = build_frames(
                Instruction::SignTransaction,
                &data,
                &Bip32Path::ark_devnet(),
                SignatureAlgo::SchnorrLegacy,
            ) {
                for frame in &frames {
                    assert!(frame.serialize().len() <= 5 + CHUNK_SIZE);
                }
            }
        }
    }
}
