use crate::apdu::Segment;
use crate::error::ApduError;

/// Most payload bytes a single frame can carry.
pub const CHUNK_SIZE: usize = 255;
/// Most frames a signing request may be split into.
pub const CHUNK_MAX: usize = 10;
pub const PAYLOAD_MAX: usize = CHUNK_MAX * CHUNK_SIZE;

/// Frames needed for a payload of `len` bytes.
///
/// Always one more than the number of whole chunks, so a payload that is an
/// exact multiple of [`CHUNK_SIZE`] still gets a trailing frame. The app
/// expects this count.
pub fn chunk_count(len: usize) -> usize {
    len / CHUNK_SIZE + 1
}

/// Split `payload` into consecutive slices, one per frame.
///
/// The first slice is shortened by `first_offset` bytes to leave room for
/// the path section of the first frame; every later boundary shifts back by
/// the same amount. The last slice runs to the end of the payload.
pub fn split_payload(payload: &[u8], first_offset: usize) -> Result<Vec<&[u8]>, ApduError> {
    let len = payload.len();
    if len > PAYLOAD_MAX {
        return Err(ApduError::PayloadTooLarge {
            len,
            max: PAYLOAD_MAX,
        });
    }

    let count = chunk_count(len);
    if count > CHUNK_MAX {
        return Err(ApduError::TooManyChunks {
            count,
            max: CHUNK_MAX,
        });
    }

    if first_offset >= CHUNK_SIZE {
        return Err(ApduError::InvalidPath(format!(
            "path section of {first_offset} bytes leaves no room in the first frame"
        )));
    }

    let mut slices = Vec::with_capacity(count);
    let mut start = 0;
    for i in 0..count {
        let end = if i + 1 == count {
            len
        } else {
            ((i + 1) * CHUNK_SIZE - first_offset).min(len)
        };
        slices.push(&payload[start..end]);
        start = end;
    }

    Ok(slices)
}

impl Segment {
    /// Marker for frame `index` of `count`.
    pub fn for_position(index: usize, count: usize) -> Self {
        let has_next = index + 1 < count;
        match (index, has_next) {
            _ if count == 1 => Segment::Single,
            (0, true) => Segment::First,
            (_, true) => Segment::More,
            (_, false) => Segment::Last,
        }
    }
}
