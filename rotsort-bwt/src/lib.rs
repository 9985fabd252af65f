//! Block-sorting transforms for rotsort.
//!
//! This crate provides the reversible front end of a block-sorting
//! compressor:
//! 1. Circular suffix ranking - sorted order of all rotations of a block
//! 2. Burrows-Wheeler Transform (BWT) - last column of the sorted rotations
//! 3. Move-to-Front Transform (MTF) - recodes clustered bytes as small indices
//!
//! Entropy coding of the MTF output is left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use rotsort_bwt::{bwt, compress, decompress};
//!
//! let block = bwt::transform(b"ABRACADABRA!").unwrap();
//! assert_eq!(block.first, 3);
//! assert_eq!(block.data, b"ARD!RCAAAABB");
//!
//! let packed = compress(b"ABRACADABRA!").unwrap();
//! assert_eq!(decompress(&packed).unwrap(), b"ABRACADABRA!");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Burrows-Wheeler Transform implementation.
pub mod bwt;
mod config;
/// Move-to-Front Transform implementation.
pub mod mtf;
mod pipeline;
/// Circular suffix array construction.
pub mod suffix;

pub use bwt::BwtBlock;
pub use config::RankerConfig;
pub use mtf::MoveToFront;
pub use pipeline::{BwtStage, MtfStage, Pipeline, compress, decompress};
pub use suffix::CircularSuffixArray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_single() {
        let original = b"a";
        let compressed = compress(original).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, original.as_slice());
    }

    #[test]
    fn test_roundtrip_repeated() {
        let original = b"aaaaaaaaaabbbbbbbbbbcccccccccc";
        let compressed = compress(original).unwrap();
        assert_eq!(compressed.len(), original.len() + 4);
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, original.as_slice());
    }

    #[test]
    fn test_roundtrip_empty() {
        let compressed = compress(b"").unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert!(decompressed.is_empty());
    }
}
