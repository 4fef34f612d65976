//! Background track lookup.

use super::scan::{EntryKind, ExtensionFilter, classify, list_sorted};
use std::path::{Path, PathBuf};

/// Find the audio file to embed: the first regular file in sorted listing
/// order whose name matches `audio`.
///
/// A missing directory, an unreadable one, or no match yields `None`.
pub fn find_audio_file(dir: &Path, audio: &ExtensionFilter) -> Option<PathBuf> {
    if !dir.is_dir() {
        log::warn!("Music directory '{}' not found, no music added", dir.display());
        return None;
    }

    let entries = match list_sorted(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Could not list music directory '{}': {}", dir.display(), e);
            return None;
        },
    };

    let no_images = ExtensionFilter::default();
    let found = entries.into_iter().find(|path| {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        classify(path, &name, &no_images, audio) == EntryKind::Audio
    });

    match &found {
        Some(path) => log::info!("Found music file: {}", path.display()),
        None => log::warn!("No supported music file found in '{}'", dir.display()),
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn audio() -> ExtensionFilter {
        ExtensionFilter::new(["mp3", "wav", "wma"])
    }

    #[test]
    fn test_first_sorted_match_wins() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b_track.wav"), b"RIFF").unwrap();
        fs::write(tmp.path().join("a_track.mp3"), b"ID3").unwrap();
        fs::write(tmp.path().join("0_cover.jpg"), b"x").unwrap();

        let found = find_audio_file(tmp.path(), &audio()).unwrap();
        assert_eq!(found.file_name().unwrap(), "a_track.mp3");
    }

    #[test]
    fn test_directory_named_like_audio_is_skipped() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("a.mp3")).unwrap();
        fs::write(tmp.path().join("b.WAV"), b"RIFF").unwrap();

        let found = find_audio_file(tmp.path(), &audio()).unwrap();
        assert_eq!(found.file_name().unwrap(), "b.WAV");
    }

    #[test]
    fn test_missing_dir_or_no_match() {
        let tmp = TempDir::new().unwrap();
        assert!(find_audio_file(&tmp.path().join("music"), &audio()).is_none());

        fs::write(tmp.path().join("notes.txt"), b"x").unwrap();
        assert!(find_audio_file(tmp.path(), &audio()).is_none());
    }
}
