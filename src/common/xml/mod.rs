//! XML text helpers used when serializing package parts.

mod escape;

pub use escape::escape_xml;
