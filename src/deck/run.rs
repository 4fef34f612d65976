//! End-to-end deck build.

use super::audio::find_audio_file;
use super::builder::DeckBuilder;
use super::config::DeckConfig;
use super::scan::{ExtensionFilter, scan_root, scan_section};
use crate::common::Result;
use std::path::{Path, PathBuf};

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckReport {
    /// Total slides in the deck
    pub slides: usize,
    /// Slides showing one picture each
    pub image_slides: usize,
    /// Folder label slides
    pub title_slides: usize,
    /// Images, folders and the audio track that were skipped because of an error
    pub failed_items: usize,
    /// Audio file embedded on slide 1
    pub audio: Option<PathBuf>,
    /// Whether the output file was written
    pub saved: bool,
    /// Destination of the .pptx, set even when nothing was saved
    pub output: PathBuf,
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Build the deck described by `config` and write it to `config.output`.
///
/// Only a missing or unlistable images root is an error. Every other failure
/// is logged, counted in [`DeckReport::failed_items`], and skipped.
pub fn build_deck(config: &DeckConfig) -> Result<DeckReport> {
    let images = ExtensionFilter::new(&config.image_extensions);

    log::info!("Scanning directory: '{}'", config.images_dir.display());
    let listing = scan_root(&config.images_dir, &images)?;

    let mut deck = DeckBuilder::new(config.canvas).with_title_layout(config.title_layout);
    if let Some(ms) = config.advance_after_ms {
        deck = deck.with_auto_advance(ms);
    }
    if let Some(name) = config.output.file_stem() {
        deck.set_document_title(name.to_string_lossy());
    }

    let mut report = DeckReport {
        output: config.output.clone(),
        ..Default::default()
    };

    for name in &listing.ignored {
        log::debug!("Skipping '{}'", name);
    }

    for path in &listing.images {
        add_image(&mut deck, path, &mut report);
    }

    for dir in &listing.subdirs {
        let name = display_name(dir);
        log::info!("Processing subdirectory: '{}'", name);

        match deck.add_title_slide(&name) {
            Ok(()) => log::info!("Added title slide for: {}", name),
            Err(e) => {
                log::error!("Error adding title slide for '{}': {}", name, e);
                report.failed_items += 1;
            },
        }

        match scan_section(dir, &images) {
            Ok(section) => {
                for path in &section {
                    add_image(&mut deck, path, &mut report);
                }
            },
            Err(e) => {
                log::error!("Could not list items in '{}': {}", dir.display(), e);
                report.failed_items += 1;
            },
        }
    }

    if let Some(music_dir) = &config.music_dir {
        let audio = ExtensionFilter::new(&config.audio_extensions);
        if let Some(track) = find_audio_file(music_dir, &audio) {
            match deck.attach_audio(&track) {
                Ok(()) => {
                    log::info!("Added music '{}' to slide 1", display_name(&track));
                    log::info!(
                        "Loop and 'Play Across Slides' are not set; configure them in the presentation editor"
                    );
                    report.audio = Some(track);
                },
                Err(e) => {
                    log::error!("Could not add music '{}': {}", track.display(), e);
                    report.failed_items += 1;
                },
            }
        }
    }

    report.slides = deck.slide_count();
    report.image_slides = deck.image_slide_count();
    report.title_slides = deck.title_slide_count();

    if report.slides == 0 {
        log::warn!(
            "No slides were created; '{}' was not written",
            config.output.display()
        );
        return Ok(report);
    }

    match deck.save(&config.output) {
        Ok(()) => {
            report.saved = true;
            log::info!(
                "Presentation saved as '{}' with {} slides",
                config.output.display(),
                report.slides
            );
        },
        Err(e) => {
            log::error!("Error saving presentation '{}': {}", config.output.display(), e);
            report.failed_items += 1;
        },
    }

    Ok(report)
}

fn add_image(deck: &mut DeckBuilder, path: &Path, report: &mut DeckReport) {
    match deck.add_image_slide(path) {
        Ok(()) => log::info!("Added image: {}", display_name(path)),
        Err(e) => {
            log::error!("Error adding image {}: {}", display_name(path), e);
            report.failed_items += 1;
        },
    }
}
