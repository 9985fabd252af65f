//! Move-to-Front Transform.
//!
//! MTF transforms a stream by replacing each byte with its position
//! in a dynamic list. After each byte, that byte is moved to the front
//! of the list. This converts local byte clusters into many zeros.

/// Number of symbols in the list.
pub const ALPHABET_SIZE: usize = 256;

/// The ordered symbol list shared by the encoder and decoder.
///
/// Always a permutation of `0..=255`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveToFront {
    list: [u8; ALPHABET_SIZE],
}

impl MoveToFront {
    /// Create a list in ascending byte order.
    pub fn new() -> Self {
        Self {
            list: std::array::from_fn(|i| i as u8),
        }
    }

    /// Restore ascending byte order.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Current list contents, front first.
    pub fn symbols(&self) -> &[u8; ALPHABET_SIZE] {
        &self.list
    }

    /// Output the position of `byte`, then move it to the front.
    pub fn encode_byte(&mut self, byte: u8) -> u8 {
        // every byte value is present
        let pos = self.list.iter().position(|&b| b == byte).unwrap_or(0);
        self.promote(pos, byte);
        pos as u8
    }

    /// Output the byte at position `index`, then move it to the front.
    pub fn decode_index(&mut self, index: u8) -> u8 {
        let pos = index as usize;
        let byte = self.list[pos];
        self.promote(pos, byte);
        byte
    }

    fn promote(&mut self, pos: usize, byte: u8) {
        if pos > 0 {
            self.list.copy_within(..pos, 1);
            self.list[0] = byte;
        }
    }
}

impl Default for MoveToFront {
    fn default() -> Self {
        Self::new()
    }
}

/// Perform Move-to-Front transform.
pub fn transform(data: &[u8]) -> Vec<u8> {
    let mut mtf = MoveToFront::new();
    data.iter().map(|&byte| mtf.encode_byte(byte)).collect()
}

/// Perform inverse Move-to-Front transform.
pub fn inverse_transform(data: &[u8]) -> Vec<u8> {
    let mut mtf = MoveToFront::new();
    data.iter().map(|&index| mtf.decode_index(index)).collect()
}
