//! Picdeck - build slideshow presentations from a folder of images
//!
//! Picdeck walks an images folder and writes a PowerPoint presentation
//! (.pptx) with one slide per picture. Pictures are scaled to the largest
//! size that fits the slide with their aspect ratio kept, and centered.
//!
//! # Features
//!
//! - **Two-level traversal**: root images first, then one section per
//!   subfolder, each opened by a title slide
//! - **Sorted, filtered input**: entries in file-name order, matched against
//!   a case-insensitive extension allow-list
//! - **Background music**: the first audio file of a music folder embedded
//!   on slide 1
//! - **Auto-advance**: every slide advances on a timer
//! - **Self-contained writer**: an OPC package writer with just the
//!   PresentationML a slideshow needs
//!
//! # Example - Building a deck
//!
//! ```no_run
//! use picdeck::deck::{DeckOverrides, Profile, build_deck};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DeckOverrides {
//!     profile: Some(Profile::Show),
//!     images_dir: Some("holiday".into()),
//!     output: Some("holiday.pptx".into()),
//!     ..Default::default()
//! }
//! .resolve()?;
//!
//! let report = build_deck(&config)?;
//! println!("Wrote {} slides", report.slides);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Writing slides directly
//!
//! ```no_run
//! use picdeck::ooxml::pptx::{MutablePresentation, SlideLayout};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pres = MutablePresentation::new();
//! pres.add_slide(SlideLayout::TitleOnly).set_title("Summer")?;
//! pres.save("summer.pptx")?;
//! # Ok(())
//! # }
//! ```

/// Common types shared by the writer and the deck builder
pub mod common;

/// Image-folder slideshow builder
pub mod deck;

/// OOXML (Office Open XML) presentation writer
///
/// Writes .pptx packages: the OPC container, presentation, slides, and media.
pub mod ooxml;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use deck::{DeckBuilder, DeckConfig, DeckOverrides, DeckReport, Profile, build_deck};
