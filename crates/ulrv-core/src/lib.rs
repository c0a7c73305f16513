//! ULR decoding, report field extraction and lab registry verdicts.

pub mod config;
pub mod extract;
pub mod logging;
pub mod registry;
pub mod ulr;

pub use ulr::{canonical, decode, format, Decoded, ScopeStatus, UlrCode, UlrRecord};
