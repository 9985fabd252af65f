//! # rotsort Core
//!
//! Core components shared by the rotsort crates:
//!
//! - [`error`]: Error types
//! - [`traits`]: The [`Transform`] stage trait
//! - [`frame`]: Fixed-width block framing (32-bit big-endian header + payload)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: CLI                                                 │
//! │     rotsort bwt | mtf | pipe | info                     │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Transforms                                          │
//! │     Suffix ranker, BWT, MTF, Pipeline                   │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     Errors, Transform trait, framing                    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rotsort_core::frame::{read_frame, write_frame};
//!
//! let framed = write_frame(3, b"ARD!RCAAAABB");
//! let (first, payload) = read_frame(&framed).unwrap();
//! assert_eq!(first, 3);
//! assert_eq!(payload, b"ARD!RCAAAABB");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod frame;
pub mod traits;

pub use error::{Result, RotsortError};
pub use traits::{Direction, Transform};
