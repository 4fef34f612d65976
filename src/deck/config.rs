//! Deck configuration.
//!
//! A run starts from one of two presets ([`Profile`]), optionally refined by
//! a YAML file and then by command-line flags. Both refinements are expressed
//! as [`DeckOverrides`] so they merge the same way.

use super::geometry::Canvas;
use crate::common::{Error, Result};
use crate::ooxml::pptx::SlideLayout;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Preset configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Images only, 4:3 canvas, no transitions
    #[default]
    Basic,
    /// 16:9 canvas, background music on slide 1, one-second auto-advance
    Show,
}

/// Layout used for per-folder title slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleLayout {
    /// Title-only layout, text in the title placeholder
    #[default]
    TitleOnly,
    /// Blank layout with a bold text box
    Blank,
}

impl From<TitleLayout> for SlideLayout {
    fn from(layout: TitleLayout) -> Self {
        match layout {
            TitleLayout::TitleOnly => SlideLayout::TitleOnly,
            TitleLayout::Blank => SlideLayout::Blank,
        }
    }
}

const BASIC_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tiff"];
const SHOW_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tiff", "tif"];
const SHOW_AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "wma"];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Fully resolved settings for one deck build.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckConfig {
    /// Root folder of the image tree
    pub images_dir: PathBuf,
    /// Folder searched for the background track; `None` disables music
    pub music_dir: Option<PathBuf>,
    /// Output .pptx path, overwritten if present
    pub output: PathBuf,
    /// Slide size shared by every slide
    pub canvas: Canvas,
    /// Image extensions, without the leading period
    pub image_extensions: Vec<String>,
    /// Audio extensions, without the leading period
    pub audio_extensions: Vec<String>,
    /// Auto-advance delay applied to every slide
    pub advance_after_ms: Option<u32>,
    /// Layout of the per-folder title slides
    pub title_layout: SlideLayout,
}

impl DeckConfig {
    /// Settings of a preset profile.
    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Basic => Self {
                images_dir: PathBuf::from("images"),
                music_dir: None,
                output: PathBuf::from("presentation_from_images.pptx"),
                canvas: Canvas::STANDARD_4_3,
                image_extensions: strings(BASIC_IMAGE_EXTENSIONS),
                audio_extensions: Vec::new(),
                advance_after_ms: None,
                title_layout: SlideLayout::TitleOnly,
            },
            Profile::Show => Self {
                images_dir: PathBuf::from("images"),
                music_dir: Some(PathBuf::from("music")),
                output: PathBuf::from("presentation.pptx"),
                canvas: Canvas::WIDE_16_9,
                image_extensions: strings(SHOW_IMAGE_EXTENSIONS),
                audio_extensions: strings(SHOW_AUDIO_EXTENSIONS),
                advance_after_ms: Some(1000),
                title_layout: SlideLayout::TitleOnly,
            },
        }
    }

    /// Check settings that would make every slide fail.
    pub fn validate(&self) -> Result<()> {
        if !self.canvas.is_valid_slide_size() {
            return Err(Error::Config(format!(
                "canvas sides must be between {} and {} EMU (1 to 56 in), got {}x{}",
                Canvas::MIN_SIDE,
                Canvas::MAX_SIDE,
                self.canvas.width,
                self.canvas.height
            )));
        }
        if self.image_extensions.is_empty() {
            return Err(Error::Config(
                "at least one image extension is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self::for_profile(Profile::default())
    }
}

/// Partial settings layered over a profile.
///
/// Every field is optional; absent fields leave the profile's value alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckOverrides {
    /// Profile to start from
    pub profile: Option<Profile>,
    pub images_dir: Option<PathBuf>,
    pub music_dir: Option<PathBuf>,
    /// Disable music even if the profile or `music_dir` enables it
    pub no_music: bool,
    pub output: Option<PathBuf>,
    /// Canvas width in inches
    pub canvas_width_in: Option<f64>,
    /// Canvas height in inches
    pub canvas_height_in: Option<f64>,
    pub image_extensions: Option<Vec<String>>,
    pub audio_extensions: Option<Vec<String>>,
    /// Auto-advance delay in milliseconds; 0 turns auto-advance off
    pub advance_after_ms: Option<u32>,
    pub title_layout: Option<TitleLayout>,
}

impl DeckOverrides {
    /// Parse overrides from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_saphyr::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load overrides from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read '{}': {}", path.display(), e)))?;
        Self::from_yaml_str(&text)
            .map_err(|e| Error::Config(format!("'{}': {}", path.display(), e)))
    }

    /// Merge `other` on top of `self`; fields set in `other` win.
    ///
    /// A `music_dir` in `other` also clears a `no_music` coming from `self`.
    pub fn merge(self, other: DeckOverrides) -> Self {
        let other_sets_music = other.music_dir.is_some();
        Self {
            profile: other.profile.or(self.profile),
            images_dir: other.images_dir.or(self.images_dir),
            music_dir: other.music_dir.or(self.music_dir),
            no_music: if other_sets_music {
                other.no_music
            } else {
                self.no_music || other.no_music
            },
            output: other.output.or(self.output),
            canvas_width_in: other.canvas_width_in.or(self.canvas_width_in),
            canvas_height_in: other.canvas_height_in.or(self.canvas_height_in),
            image_extensions: other.image_extensions.or(self.image_extensions),
            audio_extensions: other.audio_extensions.or(self.audio_extensions),
            advance_after_ms: other.advance_after_ms.or(self.advance_after_ms),
            title_layout: other.title_layout.or(self.title_layout),
        }
    }

    /// Resolve to a full configuration, starting from the selected profile.
    pub fn resolve(self) -> Result<DeckConfig> {
        let mut config = DeckConfig::for_profile(self.profile.unwrap_or_default());

        if let Some(dir) = self.images_dir {
            config.images_dir = dir;
        }
        if let Some(dir) = self.music_dir {
            config.music_dir = Some(dir);
        }
        if self.no_music {
            config.music_dir = None;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.canvas_width_in.is_some() || self.canvas_height_in.is_some() {
            let width = self
                .canvas_width_in
                .unwrap_or(config.canvas.width as f64 / super::geometry::EMU_PER_INCH as f64);
            let height = self
                .canvas_height_in
                .unwrap_or(config.canvas.height as f64 / super::geometry::EMU_PER_INCH as f64);
            config.canvas = Canvas::from_inches(width, height);
        }
        if let Some(exts) = self.image_extensions {
            config.image_extensions = exts;
        }
        if let Some(exts) = self.audio_extensions {
            config.audio_extensions = exts;
        }
        if config.music_dir.is_some() && config.audio_extensions.is_empty() {
            config.audio_extensions = strings(SHOW_AUDIO_EXTENSIONS);
        }
        match self.advance_after_ms {
            Some(0) => config.advance_after_ms = None,
            Some(ms) => config.advance_after_ms = Some(ms),
            None => {},
        }
        if let Some(layout) = self.title_layout {
            config.title_layout = layout.into();
        }

        config.validate()?;
        Ok(config)
    }
}
