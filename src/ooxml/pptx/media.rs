//! Audio media support for PPTX presentations.
//!
//! This module provides the types used to embed an audio clip in a slide.
//! PowerPoint draws embedded media as a picture, so every clip also carries a
//! poster image.

use crate::ooxml::error::{OoxmlError, Result};
use std::io::Cursor;

/// Audio format enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFormat {
    /// MP3 audio
    Mp3,
    /// WAV audio
    Wav,
    /// WMA audio
    Wma,
    /// Unknown format
    Unknown,
}

impl MediaFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "mp3" => MediaFormat::Mp3,
            "wav" => MediaFormat::Wav,
            "wma" => MediaFormat::Wma,
            _ => MediaFormat::Unknown,
        }
    }

    /// Get the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            MediaFormat::Mp3 => "audio/mpeg",
            MediaFormat::Wav => "audio/wav",
            MediaFormat::Wma => "audio/x-ms-wma",
            MediaFormat::Unknown => "application/octet-stream",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            MediaFormat::Mp3 => "mp3",
            MediaFormat::Wav => "wav",
            MediaFormat::Wma => "wma",
            MediaFormat::Unknown => "bin",
        }
    }
}

/// An audio element that can be embedded in a slide.
#[derive(Debug, Clone)]
pub struct Media {
    /// Media data (file content)
    pub data: Vec<u8>,
    /// Media format
    pub format: MediaFormat,
    /// X position in EMUs
    pub x: i64,
    /// Y position in EMUs
    pub y: i64,
    /// Width in EMUs
    pub width: i64,
    /// Height in EMUs
    pub height: i64,
    /// Optional name/description
    pub name: Option<String>,
    /// PNG poster frame shown in place of the clip
    pub poster: Vec<u8>,
}

impl Media {
    /// Create a new media element with explicit format and the default poster.
    pub fn with_format(
        data: Vec<u8>,
        format: MediaFormat,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> Result<Self> {
        Ok(Self {
            data,
            format,
            x,
            y,
            width,
            height,
            name: None,
            poster: default_poster_png()?,
        })
    }

    /// Set the name/description.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }
}

/// Encode the 1x1 transparent PNG used as the poster frame of audio clips.
pub fn default_poster_png() -> Result<Vec<u8>> {
    let pixel = image::RgbaImage::from_pixel(1, 1, image::Rgba([0, 0, 0, 0]));
    let mut out = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(pixel)
        .write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| OoxmlError::Other(format!("poster encoding failed: {}", e)))?;
    Ok(out.into_inner())
}
