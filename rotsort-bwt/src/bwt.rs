//! Burrows-Wheeler Transform.
//!
//! The forward transform sorts all rotations of a block and keeps the last
//! column of the sorted matrix, plus the row holding the unrotated block.
//! The inverse walks the successor mapping built by a stable counting sort of
//! that column.

use crate::config::RankerConfig;
use crate::suffix::CircularSuffixArray;
use rotsort_core::frame::{self, check_payload_len};
use rotsort_core::{Result, RotsortError};

/// A block after the forward transform.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BwtBlock {
    /// Row of the sorted rotation matrix holding the original block.
    pub first: u32,
    /// Last column of the sorted rotation matrix.
    pub data: Vec<u8>,
}

impl BwtBlock {
    /// Serialize as a 32-bit big-endian `first` followed by the column bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        frame::write_frame(self.first, &self.data)
    }

    /// Parse a framed block. `first` is range-checked by [`BwtBlock::inverse`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (first, payload) = frame::read_frame(bytes)?;
        Ok(Self {
            first,
            data: payload.to_vec(),
        })
    }

    /// Reconstruct the original block.
    pub fn inverse(&self) -> Result<Vec<u8>> {
        inverse_transform(&self.data, self.first)
    }

    /// Block length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the block is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Perform the Burrows-Wheeler Transform.
pub fn transform(data: &[u8]) -> Result<BwtBlock> {
    transform_with_config(data, RankerConfig::DEFAULT)
}

/// Perform the Burrows-Wheeler Transform with explicit ranker tuning.
pub fn transform_with_config(data: &[u8], config: RankerConfig) -> Result<BwtBlock> {
    check_payload_len(data.len())?;
    if data.is_empty() {
        return Ok(BwtBlock::default());
    }

    let n = data.len();
    let csa = CircularSuffixArray::with_config(data, config);

    let mut first = 0;
    let mut last = Vec::with_capacity(n);
    for (row, &start) in csa.as_slice().iter().enumerate() {
        if start == 0 {
            first = row;
        }
        // byte circularly preceding the rotation
        last.push(data[(start + n - 1) % n]);
    }

    tracing::debug!(len = n, first, "forward BWT");
    Ok(BwtBlock {
        first: first as u32,
        data: last,
    })
}

/// Perform inverse Burrows-Wheeler Transform.
///
/// `first` must name a row of `data`; for an empty block only `0` is accepted.
/// A `data` column that no forward transform could have produced yields
/// arbitrary bytes, never a panic.
pub fn inverse_transform(data: &[u8], first: u32) -> Result<Vec<u8>> {
    let n = data.len();
    let mut cursor = first as usize;
    if cursor >= n.max(1) {
        return Err(RotsortError::invalid_first(first, n));
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut counts = [0usize; 256];
    for &byte in data {
        counts[byte as usize] += 1;
    }

    // Starting row of each byte value in the first column
    let mut starts = [0usize; 256];
    let mut total = 0;
    for (start, &count) in starts.iter_mut().zip(counts.iter()) {
        *start = total;
        total += count;
    }

    // Stable placement: equal bytes keep ascending source order
    let mut sorted = vec![0u8; n];
    let mut next = vec![0usize; n];
    for (i, &byte) in data.iter().enumerate() {
        let row = starts[byte as usize];
        sorted[row] = byte;
        next[row] = i;
        starts[byte as usize] += 1;
    }

    let mut result = Vec::with_capacity(n);
    for _ in 0..n {
        result.push(sorted[cursor]);
        cursor = next[cursor];
    }

    tracing::debug!(len = n, first, "inverse BWT");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bwt_empty() {
        let block = transform(b"").unwrap();
        assert!(block.is_empty());
        assert_eq!(block.first, 0);
        assert!(inverse_transform(&block.data, 0).unwrap().is_empty());
    }

    #[test]
    fn test_bwt_single() {
        let block = transform(b"a").unwrap();
        assert_eq!(block.data, b"a");
        assert_eq!(block.first, 0);
    }

    #[test]
    fn test_bwt_abracadabra() {
        let block = transform(b"ABRACADABRA!").unwrap();
        assert_eq!(block.first, 3);
        assert_eq!(block.data, b"ARD!RCAAAABB");

        let recovered = inverse_transform(b"ARD!RCAAAABB", 3).unwrap();
        assert_eq!(recovered, b"ABRACADABRA!");
    }

    #[test]
    fn test_bwt_banana() {
        let block = transform(b"banana").unwrap();
        assert_eq!(block.data, b"nnbaaa");
        assert_eq!(block.first, 3);
        assert_eq!(block.inverse().unwrap(), b"banana");
    }

    #[test]
    fn test_bwt_constant() {
        let block = transform(b"AAAA").unwrap();
        assert_eq!(block.data, b"AAAA");
        assert!(block.first < 4);
        assert_eq!(block.inverse().unwrap(), b"AAAA");
    }

    #[test]
    fn test_bwt_roundtrip() {
        let test_cases = [
            b"hello world".as_slice(),
            b"abracadabra",
            b"mississippi",
            b"aaaaa",
            b"abcde",
            b"abcabcabc",
            b"\x00\x00\xff\x00\x80",
            b"the quick brown fox jumps over the lazy dog",
        ];

        for data in test_cases {
            let block = transform(data).unwrap();
            let recovered = inverse_transform(&block.data, block.first).unwrap();
            assert_eq!(recovered, data, "Failed for: {:?}", data);
        }
    }

    #[test]
    fn test_bwt_groups_similar() {
        let data = b"abababab";
        let block = transform(data).unwrap();

        let runs = 1 + block.data.windows(2).filter(|w| w[0] != w[1]).count();
        assert!(runs <= 4, "BWT should group similar bytes");
    }

    #[test]
    fn test_invalid_first() {
        let err = inverse_transform(b"ARD!RCAAAABB", 12).unwrap_err();
        assert!(matches!(
            err,
            RotsortError::InvalidFirstIndex { first: 12, len: 12 }
        ));

        let err = inverse_transform(b"", 1).unwrap_err();
        assert!(matches!(err, RotsortError::InvalidFirstIndex { .. }));
    }

    #[test]
    fn test_malformed_column_does_not_panic() {
        // no forward transform produces this column with first = 0
        let out = inverse_transform(b"zzzz", 0).unwrap();
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_block_framing() {
        let block = transform(b"ABRACADABRA!").unwrap();
        let bytes = block.to_bytes();
        assert_eq!(&bytes[..4], &[0, 0, 0, 3]);
        assert_eq!(&bytes[4..], b"ARD!RCAAAABB");

        let parsed = BwtBlock::from_bytes(&bytes).unwrap();
        assert_eq!(parsed, block);
        assert_eq!(parsed.inverse().unwrap(), b"ABRACADABRA!");
    }

    #[test]
    fn test_truncated_frame() {
        let err = BwtBlock::from_bytes(&[0, 0]).unwrap_err();
        assert!(matches!(err, RotsortError::TruncatedFrame { .. }));
    }
}
