//! Image-folder slideshow builder.
//!
//! Walks an images folder two levels deep and turns it into a presentation:
//! one slide per root-level image, then for each subfolder a title slide
//! followed by one slide per image in it. A background track can be embedded
//! on the first slide and every slide can be set to advance on a timer.
//!
//! # Example
//!
//! ```no_run
//! use picdeck::deck::{DeckConfig, Profile, build_deck};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DeckConfig::for_profile(Profile::Show);
//! let report = build_deck(&config)?;
//! println!("{} slides, {} skipped", report.slides, report.failed_items);
//! # Ok(())
//! # }
//! ```

/// Background track lookup
pub mod audio;

/// Slide emission
pub mod builder;

/// Profiles and YAML overrides
pub mod config;

/// Fit-to-canvas placement in EMU
pub mod geometry;

/// Orchestration of a complete run
pub mod run;

/// Directory traversal and extension filtering
pub mod scan;

/// End-to-end tests writing real packages
#[cfg(test)]
mod tests;

pub use audio::find_audio_file;
pub use builder::DeckBuilder;
pub use config::{DeckConfig, DeckOverrides, Profile, TitleLayout};
pub use geometry::{Canvas, Placement, fit_to_canvas};
pub use run::{DeckReport, build_deck};
pub use scan::{EntryKind, ExtensionFilter, RootListing, scan_root, scan_section};
