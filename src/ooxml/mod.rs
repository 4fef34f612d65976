//! Office Open XML (OOXML) writer.
//!
//! The module is organized in two layers:
//!
//! 1. **OPC Layer** (`opc`): package handling (ZIP, parts, relationships,
//!    content types)
//! 2. **PresentationML** (`pptx`): presentation, slide, shape and media
//!    serialization on top of the OPC layer
pub mod error;
pub mod opc;
pub mod pptx;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

pub use error::{OoxmlError, Result};
