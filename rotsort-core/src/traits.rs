//! Core traits for reversible transform stages.
//!
//! Every stage of the pipeline (BWT, MTF, and their composition) implements
//! [`Transform`], so callers such as the CLI can drive any of them the same way.

use crate::error::Result;

/// Direction a stage is run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Apply the transform.
    #[default]
    Forward,
    /// Undo the transform.
    Inverse,
}

impl Direction {
    /// Pick a direction from an "inverse" flag.
    pub fn from_inverse(inverse: bool) -> Self {
        if inverse { Self::Inverse } else { Self::Forward }
    }
}

/// A reversible whole-buffer byte transform.
///
/// Implementations are stateless between calls: every invocation builds its
/// working arrays from scratch and drops them before returning.
pub trait Transform {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Apply the transform to `input`.
    fn forward(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Undo the transform. `inverse(forward(x)) == x` for every `x`.
    fn inverse(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Run the stage in the given direction.
    fn apply(&self, input: &[u8], direction: Direction) -> Result<Vec<u8>> {
        match direction {
            Direction::Forward => self.forward(input),
            Direction::Inverse => self.inverse(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Reverse;

    impl Transform for Reverse {
        fn name(&self) -> &'static str {
            "reverse"
        }

        fn forward(&self, input: &[u8]) -> Result<Vec<u8>> {
            Ok(input.iter().rev().copied().collect())
        }

        fn inverse(&self, input: &[u8]) -> Result<Vec<u8>> {
            self.forward(input)
        }
    }

    #[test]
    fn test_direction_default() {
        assert_eq!(Direction::default(), Direction::Forward);
        assert_eq!(Direction::from_inverse(true), Direction::Inverse);
        assert_eq!(Direction::from_inverse(false), Direction::Forward);
    }

    #[test]
    fn test_apply_dispatch() {
        let stage = Reverse;
        let out = stage.apply(b"abc", Direction::Forward).unwrap();
        assert_eq!(out, b"cba");
        let back = stage.apply(&out, Direction::Inverse).unwrap();
        assert_eq!(back, b"abc");
    }
}
