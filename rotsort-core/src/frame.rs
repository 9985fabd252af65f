//! Fixed-width block framing.
//!
//! A framed block is a 32-bit big-endian integer followed by the raw payload:
//!
//! ```text
//! +--------+--------+--------+--------+=================+
//! |  first (u32, big-endian)          |  payload bytes  |
//! +--------+--------+--------+--------+=================+
//! ```

use crate::error::{Result, RotsortError};

/// Size of the frame header in bytes.
pub const HEADER_LEN: usize = 4;

/// Largest payload a frame can index with its 32-bit header.
pub const MAX_PAYLOAD_LEN: usize = u32::MAX as usize;

/// Write `header` followed by `payload` into a new buffer.
pub fn write_frame(header: u32, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
    out.extend_from_slice(&header.to_be_bytes());
    out.extend_from_slice(payload);
    out
}

/// Split a framed block into its header value and payload.
pub fn read_frame(data: &[u8]) -> Result<(u32, &[u8])> {
    let Some((header, payload)) = data.split_first_chunk::<HEADER_LEN>() else {
        return Err(RotsortError::truncated(HEADER_LEN, data.len()));
    };
    Ok((u32::from_be_bytes(*header), payload))
}

/// Check that a payload length fits the frame header.
pub fn check_payload_len(len: usize) -> Result<()> {
    if len > MAX_PAYLOAD_LEN {
        return Err(RotsortError::too_large(len, MAX_PAYLOAD_LEN));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_big_endian() {
        let framed = write_frame(3, b"xy");
        assert_eq!(framed, [0, 0, 0, 3, b'x', b'y']);
    }

    #[test]
    fn test_read_frame() {
        let (header, payload) = read_frame(&[0x01, 0x02, 0x03, 0x04, 0xFF]).unwrap();
        assert_eq!(header, 0x0102_0304);
        assert_eq!(payload, &[0xFF]);
    }

    #[test]
    fn test_empty_payload() {
        let framed = write_frame(0, b"");
        assert_eq!(framed.len(), HEADER_LEN);
        let (header, payload) = read_frame(&framed).unwrap();
        assert_eq!(header, 0);
        assert!(payload.is_empty());
    }

    #[test]
    fn test_truncated_header() {
        let err = read_frame(&[0, 0, 1]).unwrap_err();
        assert!(matches!(
            err,
            RotsortError::TruncatedFrame {
                needed: 4,
                available: 3
            }
        ));
    }

    #[test]
    fn test_payload_len_limit() {
        assert!(check_payload_len(0).is_ok());
        assert!(check_payload_len(MAX_PAYLOAD_LEN).is_ok());
    }
}
