//! Command implementations for the rotsort CLI.

pub mod info;
pub mod transform;

pub use info::cmd_info;
pub use transform::cmd_transform;
