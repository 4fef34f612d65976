//! Unified error types for picdeck.
//!
//! The writer layers (`ooxml::opc`, `ooxml`) keep their own error enums; this
//! module provides the single type the deck builder and the binary work with.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
