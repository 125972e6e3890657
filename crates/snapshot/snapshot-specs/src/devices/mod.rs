//! Pre-configured device profiles
//!
//! Fixed configurations for the devices snapshot tests render against.

pub mod ipad;
pub mod iphone;

pub use ipad::*;
pub use iphone::*;
