//! Tuning for the circular suffix ranker.

/// Suffix ranker configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankerConfig {
    /// Ranges with fewer than this many rotations are finished with an
    /// insertion sort instead of further radix partitioning.
    /// Zero disables the fallback.
    pub insertion_cutoff: usize,
}

impl RankerConfig {
    /// Standard configuration.
    ///
    /// - Insertion sort below 16 rotations
    pub const DEFAULT: Self = Self {
        insertion_cutoff: 16,
    };

    /// Pure 3-way radix quicksort, partitioning down to single elements.
    pub const NO_CUTOFF: Self = Self {
        insertion_cutoff: 0,
    };

    /// Create a configuration with the given insertion sort cutoff.
    pub fn new(insertion_cutoff: usize) -> Self {
        Self { insertion_cutoff }
    }
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
