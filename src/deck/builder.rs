//! Slide emission.
//!
//! [`DeckBuilder`] owns the presentation under construction and appends image
//! and title slides to it. Each `add_*` call either appends one complete
//! slide or leaves the presentation untouched.

use super::geometry::{Canvas, fit_to_canvas, inches};
use crate::common::{Error, Result};
use crate::ooxml::pptx::{
    ImageFormat, MediaFormat, MutablePresentation, MutableSlide, SlideLayout, SlideTransition,
    TextFormat,
};
use std::io::Cursor;
use std::path::Path;

/// Point size of text in a title placeholder.
const TITLE_PLACEHOLDER_PT: f64 = 44.0;

/// Point size of the fallback title text box.
const TITLE_TEXT_BOX_PT: f64 = 40.0;

/// Builds a slideshow one slide at a time.
#[derive(Debug)]
pub struct DeckBuilder {
    pres: MutablePresentation,
    canvas: Canvas,
    title_layout: SlideLayout,
    transition: Option<SlideTransition>,
    image_slides: usize,
    title_slides: usize,
}

impl DeckBuilder {
    /// Create a builder for an empty deck on `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            pres: MutablePresentation::with_size(canvas.width, canvas.height),
            canvas,
            title_layout: SlideLayout::TitleOnly,
            transition: None,
            image_slides: 0,
            title_slides: 0,
        }
    }

    /// Layout used by [`add_title_slide`](Self::add_title_slide).
    pub fn with_title_layout(mut self, layout: SlideLayout) -> Self {
        self.title_layout = layout;
        self
    }

    /// Give every slide added from now on a timed advance after `delay_ms`.
    pub fn with_auto_advance(mut self, delay_ms: u32) -> Self {
        self.transition = Some(SlideTransition::auto_advance(delay_ms));
        self
    }

    /// Set the document title written to the core properties.
    pub fn set_document_title(&mut self, title: impl Into<String>) {
        self.pres.set_title(title);
    }

    /// Total number of slides so far.
    pub fn slide_count(&self) -> usize {
        self.pres.slide_count()
    }

    pub fn image_slide_count(&self) -> usize {
        self.image_slides
    }

    pub fn title_slide_count(&self) -> usize {
        self.title_slides
    }

    /// Add a slide showing the image at `path`, scaled to fit and centered.
    pub fn add_image_slide(&mut self, path: &Path) -> Result<()> {
        let data = std::fs::read(path)?;
        let description = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        self.add_image_bytes(path, data, description)
    }

    /// Add an image slide from bytes already in memory. `path` is only used
    /// in error messages.
    pub(crate) fn add_image_bytes(
        &mut self,
        path: &Path,
        data: Vec<u8>,
        description: Option<String>,
    ) -> Result<()> {
        if ImageFormat::detect_from_bytes(&data).is_none() {
            return Err(Error::InvalidFormat(format!(
                "'{}' is not a PNG, JPEG, GIF, BMP or TIFF image",
                path.display()
            )));
        }

        let (width, height) = image::ImageReader::new(Cursor::new(&data))
            .with_guessed_format()?
            .into_dimensions()?;

        let placement =
            fit_to_canvas(self.canvas, width, height).ok_or_else(|| Error::DegenerateImage {
                path: path.to_path_buf(),
                width,
                height,
            })?;

        let transition = self.transition.clone();
        let slide = self.pres.add_slide(SlideLayout::Blank);
        let added = slide.add_picture_from_bytes(
            data,
            placement.left,
            placement.top,
            placement.width,
            placement.height,
            description,
        );
        if let Err(e) = added {
            self.pop_slide();
            return Err(e.into());
        }
        if let Some(transition) = transition {
            slide.set_transition(transition);
        }

        self.image_slides += 1;
        Ok(())
    }

    /// Add a slide labelled with `text`.
    ///
    /// On a layout with a title placeholder the text fills the placeholder;
    /// otherwise it goes into a bold text box near the top of the slide.
    pub fn add_title_slide(&mut self, text: &str) -> Result<()> {
        let layout = self.title_layout;
        let transition = self.transition.clone();
        let canvas = self.canvas;

        let slide = self.pres.add_slide(layout);
        if let Err(e) = fill_title(slide, layout, canvas, text) {
            self.pop_slide();
            return Err(e);
        }
        if let Some(transition) = transition {
            slide.set_transition(transition);
        }

        self.title_slides += 1;
        Ok(())
    }

    /// Embed the audio file at `path` on the first slide.
    ///
    /// The clip is drawn as a small icon in the top-left corner. Playback
    /// options (loop, play across slides) are left at their defaults.
    pub fn attach_audio(&mut self, path: &Path) -> Result<()> {
        let format = path
            .extension()
            .map(|ext| MediaFormat::from_extension(&ext.to_string_lossy()))
            .unwrap_or(MediaFormat::Unknown);
        if format == MediaFormat::Unknown {
            return Err(Error::InvalidFormat(format!(
                "'{}' is not an MP3, WAV or WMA file",
                path.display()
            )));
        }

        let first = self.pres.slide_mut(0).ok_or(Error::NoSlides)?;
        let data = std::fs::read(path)?;
        let media = first.add_audio(data, format, inches(0.1), inches(0.1), inches(0.2), inches(0.2))?;
        if let Some(name) = path.file_name() {
            media.set_name(name.to_string_lossy());
        }
        Ok(())
    }

    /// Borrow the presentation built so far.
    pub fn presentation(&self) -> &MutablePresentation {
        &self.pres
    }

    /// Write the deck to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.pres.save(path)?;
        Ok(())
    }

    fn pop_slide(&mut self) {
        self.pres.slides.pop();
    }
}

fn fill_title(slide: &mut MutableSlide, layout: SlideLayout, canvas: Canvas, text: &str) -> Result<()> {
    if layout.has_title_placeholder() {
        let format = TextFormat {
            shrink_to_fit: true,
            ..TextFormat::bold_pt(TITLE_PLACEHOLDER_PT)
        };
        slide.set_title_with_format(text, format)?;
    } else {
        slide
            .add_text_box(
                text,
                inches(0.5),
                inches(0.5),
                canvas.width - inches(1.0),
                inches(1.5),
            )
            .font_size(TITLE_TEXT_BOX_PT)
            .bold(true)
            .word_wrap(true);
    }
    Ok(())
}
