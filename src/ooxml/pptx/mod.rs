//! PowerPoint (.pptx) presentation writer.
//!
//! Builds presentations from scratch in the Office Open XML (OOXML) format.
//! The writer covers what a picture slideshow needs: title-only and blank
//! slides, text boxes, pictures, one embedded audio clip and timed advance.
//!
//! # Example
//!
//! ```rust,no_run
//! use picdeck::ooxml::pptx::{MutablePresentation, SlideLayout, SlideTransition};
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide(SlideLayout::TitleOnly);
//! slide.set_title("Summer 2024")?;
//! slide.set_transition(SlideTransition::auto_advance(1000));
//!
//! pres.save("summer.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod format;
pub mod media;
pub(crate) mod package;
pub mod template;
pub mod transitions;
pub mod writer;

pub use format::{ImageFormat, TextFormat};
pub use media::{Media, MediaFormat};
pub use template::SlideLayout;
pub use transitions::SlideTransition;
pub use writer::{MutablePresentation, MutableShape, MutableSlide};
