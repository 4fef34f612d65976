//! Directory traversal and extension filtering.
//!
//! The image tree is exactly two levels deep: files directly under the root,
//! and files inside each immediate subdirectory. Anything nested deeper is
//! ignored. Every listing is sorted by file name so slide order is stable.

use crate::common::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Case-insensitive allow-list of file extensions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtensionFilter {
    /// Lowercased suffixes including the leading period, e.g. ".png"
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    /// Build a filter from extensions given with or without a leading period.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.as_ref().trim().to_lowercase();
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{}", ext)
                }
            })
            .filter(|ext| ext.len() > 1)
            .collect();
        Self { suffixes }
    }

    /// Check whether a file name ends with one of the allowed extensions.
    pub fn matches(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.suffixes.iter().any(|suffix| lower.ends_with(suffix.as_str()))
    }

    /// Whether the filter accepts nothing.
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

/// What a directory entry is, as far as the deck is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Image,
    Audio,
    Directory,
    Ignored,
}

/// Classify an entry by file type and name.
///
/// Symlinks are followed. Only regular files can be images or audio.
pub fn classify(
    path: &Path,
    name: &str,
    images: &ExtensionFilter,
    audio: &ExtensionFilter,
) -> EntryKind {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => EntryKind::Directory,
        Ok(meta) if meta.is_file() => {
            if images.matches(name) {
                EntryKind::Image
            } else if audio.matches(name) {
                EntryKind::Audio
            } else {
                EntryKind::Ignored
            }
        },
        _ => EntryKind::Ignored,
    }
}

/// List a directory's entries sorted by file name.
pub fn list_sorted(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Top level of the image tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootListing {
    /// Image files directly under the root, sorted
    pub images: Vec<PathBuf>,
    /// Immediate subdirectories, sorted
    pub subdirs: Vec<PathBuf>,
    /// Names of entries that are neither images nor directories
    pub ignored: Vec<String>,
}

/// Scan the root image directory.
///
/// A missing root or one that cannot be listed is fatal.
pub fn scan_root(dir: &Path, images: &ExtensionFilter) -> Result<RootListing> {
    if !dir.is_dir() {
        return Err(Error::RootNotFound(dir.to_path_buf()));
    }

    let entries = list_sorted(dir).map_err(|source| Error::RootUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let no_audio = ExtensionFilter::default();
    let mut listing = RootListing::default();
    for path in entries {
        let name = file_name_of(&path);
        match classify(&path, &name, images, &no_audio) {
            EntryKind::Image => listing.images.push(path),
            EntryKind::Directory => listing.subdirs.push(path),
            EntryKind::Audio | EntryKind::Ignored => listing.ignored.push(name),
        }
    }

    log::debug!(
        "{}: {} image(s), {} subdirectories, {} ignored",
        dir.display(),
        listing.images.len(),
        listing.subdirs.len(),
        listing.ignored.len()
    );

    Ok(listing)
}

/// List the images of one subdirectory. Nested directories are skipped.
pub fn scan_section(dir: &Path, images: &ExtensionFilter) -> io::Result<Vec<PathBuf>> {
    let no_audio = ExtensionFilter::default();
    Ok(list_sorted(dir)?
        .into_iter()
        .filter(|path| {
            let name = file_name_of(path);
            classify(path, &name, images, &no_audio) == EntryKind::Image
        })
        .collect())
}
