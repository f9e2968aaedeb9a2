//! # arcanum-radix
//!
//! Positional numeral decoding for Arcanum.
//!
//! Share values arrive as digit strings in a declared base (2..=36). This
//! crate converts them into arbitrary precision integers and back:
//! - [`decode`]: digit string + base → `UBig`
//! - [`encode`]: `UBig` + base → canonical digit string
//!
//! Decoding is case-insensitive over the alphabet `0-9A-Z`; encoding
//! produces the canonical uppercase form without leading zeros.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod decode;
pub mod encode;

#[cfg(test)]
mod proptests;

pub use decode::{decode, RadixError, MAX_BASE};
pub use encode::encode;
