//! Circular suffix array construction.
//!
//! Sorts the `n` rotations of a byte block with a 3-way radix quicksort
//! (Bentley-McIlroy partitioning on one byte at a time). Rotations that agree
//! on all `n` bytes are fully equal and are left in whatever order the
//! partitioning produced.
//!
//! ```text
//!   i   rotation    sorted    index[i]
//!   0   Kira        Kira      0
//!   1   iraK        aKir      3
//!   2   raKi        iraK      1
//!   3   aKir        raKi      2
//! ```

use crate::config::RankerConfig;
use rotsort_core::{Result, RotsortError};
use std::cmp::Ordering;

/// Blocks smaller than this are ranked on the calling thread even when the
/// `parallel` feature is enabled.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 64 * 1024;

/// The sorted order of all circular suffixes of a byte block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularSuffixArray {
    index: Vec<usize>,
}

impl CircularSuffixArray {
    /// Rank the circular suffixes of `text`.
    pub fn new(text: &[u8]) -> Self {
        Self::with_config(text, RankerConfig::DEFAULT)
    }

    /// Rank the circular suffixes of `text` with explicit tuning.
    pub fn with_config(text: &[u8], config: RankerConfig) -> Self {
        let mut index: Vec<usize> = (0..text.len()).collect();
        sort_rotations(text, &mut index, config);
        tracing::trace!(len = text.len(), "ranked circular suffixes");
        Self { index }
    }

    /// Number of rotations (the block length).
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the block was empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Start position of the rotation ranked `i`-th.
    pub fn index(&self, i: usize) -> Result<usize> {
        self.index.get(i).copied().ok_or_else(|| {
            RotsortError::invalid_argument(format!(
                "row {} out of range for {} rotations",
                i,
                self.index.len()
            ))
        })
    }

    /// The full permutation, in sorted order.
    pub fn as_slice(&self) -> &[usize] {
        &self.index
    }

    /// Take ownership of the permutation.
    pub fn into_inner(self) -> Vec<usize> {
        self.index
    }
}

/// Sorted permutation of rotation start positions of `text`.
pub fn rank(text: &[u8]) -> Vec<usize> {
    CircularSuffixArray::new(text).into_inner()
}

/// Byte `depth` positions into the rotation starting at `start`.
///
/// Both `start` and `depth` are below `text.len()`.
#[inline]
fn char_at(text: &[u8], start: usize, depth: usize) -> u8 {
    let pos = start + depth;
    if pos >= text.len() {
        text[pos - text.len()]
    } else {
        text[pos]
    }
}

/// Compare two rotations, skipping the first `depth` bytes already known equal.
fn compare_rotations(text: &[u8], a: usize, b: usize, depth: usize) -> Ordering {
    for d in depth..text.len() {
        match char_at(text, a, d).cmp(&char_at(text, b, d)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

fn insertion_sort(text: &[u8], index: &mut [usize], depth: usize) {
    for i in 1..index.len() {
        let mut j = i;
        while j > 0 && compare_rotations(text, index[j], index[j - 1], depth) == Ordering::Less {
            index.swap(j, j - 1);
            j -= 1;
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn sort_rotations(text: &[u8], index: &mut [usize], config: RankerConfig) {
    sort_range(text, index, 0, config);
}

/// Bucket by first byte, then rank each bucket on the rayon pool.
#[cfg(feature = "parallel")]
fn sort_rotations(text: &[u8], index: &mut [usize], config: RankerConfig) {
    use rayon::prelude::*;

    if text.len() < PARALLEL_THRESHOLD {
        sort_range(text, index, 0, config);
        return;
    }

    let mut counts = [0usize; 256];
    for &byte in text {
        counts[byte as usize] += 1;
    }

    let mut next = [0usize; 256];
    let mut total = 0;
    for (slot, &count) in next.iter_mut().zip(counts.iter()) {
        *slot = total;
        total += count;
    }
    for (pos, &byte) in text.iter().enumerate() {
        index[next[byte as usize]] = pos;
        next[byte as usize] += 1;
    }

    let mut buckets: Vec<&mut [usize]> = Vec::new();
    let mut rest = index;
    for &count in counts.iter().filter(|&&c| c > 0) {
        let (bucket, tail) = std::mem::take(&mut rest).split_at_mut(count);
        buckets.push(bucket);
        rest = tail;
    }

    buckets
        .into_par_iter()
        .for_each(|bucket| sort_range(text, bucket, 1, config));
}

/// 3-way radix quicksort of `index`, whose rotations already agree on their
/// first `depth` bytes.
///
/// Pending ranges live on an explicit stack: the `=v` chain can be as deep as
/// the block itself.
fn sort_range(text: &[u8], index: &mut [usize], depth: usize, config: RankerConfig) {
    let n = text.len();
    let mut pending = vec![(0, index.len(), depth)];

    while let Some((lo, hi, d)) = pending.pop() {
        if hi - lo <= 1 || d >= n {
            continue;
        }
        if hi - lo < config.insertion_cutoff {
            insertion_sort(text, &mut index[lo..hi], d);
            continue;
        }

        // [lo, lt) < v, [lt, i) == v, [gt, hi) > v
        let v = char_at(text, index[lo], d);
        let mut lt = lo;
        let mut gt = hi;
        let mut i = lo + 1;
        while i < gt {
            match char_at(text, index[i], d).cmp(&v) {
                Ordering::Less => {
                    index.swap(lt, i);
                    lt += 1;
                    i += 1;
                }
                Ordering::Greater => {
                    gt -= 1;
                    index.swap(i, gt);
                }
                Ordering::Equal => i += 1,
            }
        }

        pending.push((gt, hi, d));
        if d + 1 < n {
            pending.push((lt, gt, d + 1));
        }
        pending.push((lo, lt, d));
    }
}
