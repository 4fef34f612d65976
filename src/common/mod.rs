//! Common types and utilities shared by the writer and the deck builder.

// Submodule declarations
pub mod error;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
