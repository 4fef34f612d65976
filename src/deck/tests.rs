//! End-to-end tests: build decks from real folders and read the written
//! package back.

use super::*;
use crate::common::Error;
use image::{ImageFormat as Codec, RgbImage};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs::{self, File};
use std::io::{Cursor, Read};
use std::path::Path;
use tempfile::TempDir;

fn write_image(path: &Path, width: u32, height: u32) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(RgbImage::new(width, height));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, Codec::Png).unwrap();
    let bytes = out.into_inner();
    fs::write(path, &bytes).unwrap();
    bytes
}

fn config_in(tmp: &TempDir, profile: Profile) -> DeckConfig {
    let mut config = DeckConfig::for_profile(profile);
    config.images_dir = tmp.path().join("images");
    config.music_dir = config.music_dir.map(|_| tmp.path().join("music"));
    config.output = tmp.path().join("out.pptx");
    config
}

struct Package {
    archive: zip::ZipArchive<File>,
}

impl Package {
    fn open(path: &Path) -> Self {
        let archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
        Self { archive }
    }

    fn names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    fn bytes(&mut self, name: &str) -> Vec<u8> {
        let mut entry = self
            .archive
            .by_name(name)
            .unwrap_or_else(|_| panic!("missing part {}", name));
        let mut buf = Vec::new();
        entry.read_to_end(&mut buf).unwrap();
        buf
    }

    fn text(&mut self, name: &str) -> String {
        String::from_utf8(self.bytes(name)).unwrap()
    }
}

fn assert_well_formed(name: &str, xml: &str) {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                assert!(depth > 0, "{}: unbalanced end tag", name);
                depth -= 1;
            },
            Ok(Event::Eof) => break,
            Ok(_) => {},
            Err(e) => panic!("{}: {}", name, e),
        }
    }
    assert_eq!(depth, 0, "{}: unclosed elements", name);
}

/// images/{b.png, a.png, notes.txt, sub/{c.png, deeper/d.png}}
fn sample_tree(tmp: &TempDir) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let root = tmp.path().join("images");
    let sub = root.join("sub");
    fs::create_dir_all(sub.join("deeper")).unwrap();

    let b = write_image(&root.join("b.png"), 30, 40);
    let a = write_image(&root.join("a.png"), 40, 30);
    fs::write(root.join("notes.txt"), b"not a slide").unwrap();
    let c = write_image(&sub.join("c.png"), 16, 9);
    write_image(&sub.join("deeper").join("d.png"), 8, 8);
    (a, b, c)
}

#[test]
fn test_slide_order_follows_sorted_tree() {
    let tmp = TempDir::new().unwrap();
    let (a, b, c) = sample_tree(&tmp);
    let config = config_in(&tmp, Profile::Basic);

    let report = build_deck(&config).unwrap();

    assert!(report.saved);
    assert_eq!(report.slides, 4);
    assert_eq!(report.image_slides, 3);
    assert_eq!(report.title_slides, 1);
    assert_eq!(report.failed_items, 0);

    let mut pkg = Package::open(&config.output);
    assert_eq!(pkg.bytes("ppt/media/image1.png"), a);
    assert_eq!(pkg.bytes("ppt/media/image2.png"), b);
    assert_eq!(pkg.bytes("ppt/media/image3.png"), c);
    assert!(!pkg.names().iter().any(|n| n == "ppt/media/image4.png"));
    assert!(!pkg.names().iter().any(|n| n == "ppt/slides/slide5.xml"));

    let title = pkg.text("ppt/slides/slide3.xml");
    assert!(title.contains(r#"<p:ph type="title"/>"#));
    assert!(title.contains("<a:t>sub</a:t>"));
    assert!(pkg.text("ppt/slides/slide4.xml").contains("<p:pic>"));
}

#[test]
fn test_missing_root_is_fatal_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(&tmp, Profile::Basic);

    match build_deck(&config) {
        Err(Error::RootNotFound(path)) => assert_eq!(path, config.images_dir),
        other => panic!("expected RootNotFound, got {:?}", other),
    }
    assert!(!config.output.exists());
}

#[test]
fn test_empty_root_skips_save() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("images")).unwrap();
    fs::write(tmp.path().join("images").join("readme.md"), b"#").unwrap();
    let config = config_in(&tmp, Profile::Basic);

    let report = build_deck(&config).unwrap();

    assert_eq!(report.slides, 0);
    assert!(!report.saved);
    assert!(!config.output.exists());
}

#[test]
fn test_bad_images_are_skipped_and_counted() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("images");
    fs::create_dir(&root).unwrap();
    write_image(&root.join("good.png"), 10, 10);
    fs::write(root.join("broken.jpg"), b"definitely not a jpeg").unwrap();
    let config = config_in(&tmp, Profile::Basic);

    let report = build_deck(&config).unwrap();

    assert_eq!(report.slides, 1);
    assert_eq!(report.failed_items, 1);
    assert!(report.saved);
}

#[cfg(unix)]
#[test]
fn test_unlistable_subdirectory_keeps_title_and_is_counted() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("images");
    let locked = root.join("locked");
    let open = root.join("open");
    fs::create_dir_all(&locked).unwrap();
    fs::create_dir(&open).unwrap();
    write_image(&root.join("a.png"), 8, 8);
    write_image(&locked.join("hidden.png"), 8, 8);
    write_image(&open.join("seen.png"), 8, 8);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(&locked).is_ok() {
        // Permission bits do not bind this user (e.g. root)
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let config = config_in(&tmp, Profile::Basic);
    let report = build_deck(&config);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    let report = report.unwrap();

    // a.png, "locked" title, "open" title, seen.png
    assert_eq!(report.slides, 4);
    assert_eq!(report.title_slides, 2);
    assert_eq!(report.image_slides, 2);
    assert_eq!(report.failed_items, 1);
    assert!(report.saved);

    let mut pkg = Package::open(&config.output);
    assert!(pkg.text("ppt/slides/slide2.xml").contains("<a:t>locked</a:t>"));
    assert!(pkg.text("ppt/slides/slide3.xml").contains("<a:t>open</a:t>"));
}

#[test]
fn test_save_failure_is_counted_not_fatal() {
    let tmp = TempDir::new().unwrap();
    sample_tree(&tmp);
    let config = config_in(&tmp, Profile::Basic);
    // A directory cannot be overwritten with the package
    fs::create_dir(&config.output).unwrap();

    let report = build_deck(&config).unwrap();

    assert_eq!(report.slides, 4);
    assert_eq!(report.failed_items, 1);
    assert!(!report.saved);
    assert!(config.output.is_dir());
}

#[test]
fn test_show_profile_embeds_first_sorted_track_on_slide_one() {
    let tmp = TempDir::new().unwrap();
    sample_tree(&tmp);
    let music = tmp.path().join("music");
    fs::create_dir(&music).unwrap();
    fs::write(music.join("b_theme.wav"), b"RIFF\0\0\0\0WAVE").unwrap();
    fs::write(music.join("a_theme.mp3"), b"ID3\x04\0\0\0\0\0\0").unwrap();
    let config = config_in(&tmp, Profile::Show);

    let report = build_deck(&config).unwrap();
    assert_eq!(report.audio, Some(music.join("a_theme.mp3")));

    let mut pkg = Package::open(&config.output);
    let names = pkg.names();
    assert!(names.iter().any(|n| n == "ppt/media/media1.mp3"));
    assert!(!names.iter().any(|n| n.ends_with(".wav")));

    let slide1 = pkg.text("ppt/slides/slide1.xml");
    assert!(slide1.contains("<a:audioFile"));
    for idx in 2..=report.slides {
        let slide = pkg.text(&format!("ppt/slides/slide{}.xml", idx));
        assert!(!slide.contains("<a:audioFile"), "audio on slide {}", idx);
    }

    let content_types = pkg.text("[Content_Types].xml");
    assert!(content_types.contains(r#"Extension="mp3" ContentType="audio/mpeg""#));
}

#[test]
fn test_show_profile_auto_advances_every_slide() {
    let tmp = TempDir::new().unwrap();
    sample_tree(&tmp);
    let mut config = config_in(&tmp, Profile::Show);
    config.music_dir = None;

    let report = build_deck(&config).unwrap();
    assert!(report.audio.is_none());

    let mut pkg = Package::open(&config.output);
    let pres = pkg.text("ppt/presentation.xml");
    assert!(pres.contains(r#"<p:sldSz cx="14630400" cy="8229600"/>"#));
    for idx in 1..=report.slides {
        let slide = pkg.text(&format!("ppt/slides/slide{}.xml", idx));
        assert!(slide.contains(r#"advClick="0" advTm="1000""#), "slide {}", idx);
    }
}

#[test]
fn test_every_xml_part_is_well_formed() {
    let tmp = TempDir::new().unwrap();
    sample_tree(&tmp);
    let music = tmp.path().join("music");
    fs::create_dir(&music).unwrap();
    fs::write(music.join("theme.mp3"), b"ID3\x04\0\0\0\0\0\0").unwrap();
    let mut config = config_in(&tmp, Profile::Show);
    config.title_layout = crate::ooxml::pptx::SlideLayout::Blank;

    build_deck(&config).unwrap();

    let mut pkg = Package::open(&config.output);
    assert_eq!(
        pkg.archive.by_index(0).unwrap().name(),
        "[Content_Types].xml"
    );
    for name in pkg.names() {
        if name.ends_with(".xml") || name.ends_with(".rels") {
            let text = pkg.text(&name);
            assert_well_formed(&name, &text);
        }
    }
}
