//! Package assembly for PowerPoint presentations.
//!
//! Turns a `MutablePresentation` into an `OpcPackage` holding every part a
//! presentation needs: the presentation part, one slide master with its
//! layouts and theme, property parts, slides and their media.

use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{BlobPart, OpcPackage, PackURI, Relationships};
use crate::ooxml::pptx::template::{self, SlideLayout};
use crate::ooxml::pptx::writer::MutablePresentation;
use crate::ooxml::pptx::writer::relmap::{MediaRelIds, RelationshipMapper};

const PRESENTATION_URI: &str = "/ppt/presentation.xml";
const SLIDE_MASTER_URI: &str = "/ppt/slideMasters/slideMaster1.xml";
const THEME_URI: &str = "/ppt/theme/theme1.xml";
const PRES_PROPS_URI: &str = "/ppt/presProps.xml";
const VIEW_PROPS_URI: &str = "/ppt/viewProps.xml";
const TABLE_STYLES_URI: &str = "/ppt/tableStyles.xml";
const CORE_PROPS_URI: &str = "/docProps/core.xml";
const APP_PROPS_URI: &str = "/docProps/app.xml";

fn pack_uri(uri: &str) -> Result<PackURI> {
    PackURI::new(uri).map_err(OoxmlError::InvalidFormat)
}

fn layout_uri(layout: SlideLayout) -> Result<PackURI> {
    PackURI::indexed("/ppt/slideLayouts/slideLayout", layout.number(), "xml")
        .map_err(OoxmlError::InvalidFormat)
}

/// Counters for partnames under /ppt/media, shared by all slides.
#[derive(Default)]
struct MediaNames {
    images: usize,
    media: usize,
}

impl MediaNames {
    fn next_image(&mut self, ext: &str) -> Result<PackURI> {
        self.images += 1;
        PackURI::indexed("/ppt/media/image", self.images, ext).map_err(OoxmlError::InvalidFormat)
    }

    fn next_media(&mut self, ext: &str) -> Result<PackURI> {
        self.media += 1;
        PackURI::indexed("/ppt/media/media", self.media, ext).map_err(OoxmlError::InvalidFormat)
    }
}

/// Build the complete OPC package for a presentation.
pub(crate) fn build_package(pres: &MutablePresentation) -> Result<OpcPackage> {
    let mut pkg = OpcPackage::new();

    let pres_uri = pack_uri(PRESENTATION_URI)?;
    let master_uri = pack_uri(SLIDE_MASTER_URI)?;
    let theme_uri = pack_uri(THEME_URI)?;

    // Package relationships
    pkg.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
    let core_uri = pack_uri(CORE_PROPS_URI)?;
    pkg.relate_to(&core_uri, rt::CORE_PROPERTIES);
    let app_uri = pack_uri(APP_PROPS_URI)?;
    pkg.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

    // Presentation relationships: master first, slides last
    let mut pres_rels = Relationships::new(pres_uri.base_uri().to_string());
    let master_rel_id = pres_rels.relate_to(&master_uri, rt::SLIDE_MASTER);
    pres_rels.relate_to(&theme_uri, rt::THEME);
    pres_rels.relate_to(&pack_uri(PRES_PROPS_URI)?, rt::PRES_PROPS);
    pres_rels.relate_to(&pack_uri(VIEW_PROPS_URI)?, rt::VIEW_PROPS);
    pres_rels.relate_to(&pack_uri(TABLE_STYLES_URI)?, rt::TABLE_STYLES);

    let mut slide_rel_ids = Vec::with_capacity(pres.slide_count());
    for idx in 1..=pres.slide_count() {
        let slide_uri = PackURI::indexed("/ppt/slides/slide", idx, "xml")
            .map_err(OoxmlError::InvalidFormat)?;
        slide_rel_ids.push(pres_rels.relate_to(&slide_uri, rt::SLIDE));
    }

    let pres_xml = pres.generate_presentation_xml_with_rels(&master_rel_id, &slide_rel_ids)?;
    pkg.add_part(Box::new(BlobPart::with_rels(
        pres_uri,
        ct::PML_PRESENTATION_MAIN,
        pres_xml.into_bytes(),
        pres_rels,
    )))?;

    add_master_parts(&mut pkg, &master_uri, &theme_uri)?;
    add_slide_parts(&mut pkg, pres)?;

    add_static_part(&mut pkg, PRES_PROPS_URI, ct::PML_PRES_PROPS, template::default_pres_props_xml())?;
    add_static_part(&mut pkg, VIEW_PROPS_URI, ct::PML_VIEW_PROPS, template::default_view_props_xml())?;
    add_static_part(
        &mut pkg,
        TABLE_STYLES_URI,
        ct::PML_TABLE_STYLES,
        template::default_table_styles_xml(),
    )?;

    let core_xml = template::core_props_xml(pres.title(), chrono::Utc::now())?;
    pkg.add_part(Box::new(BlobPart::from_xml(
        core_uri,
        ct::OPC_CORE_PROPERTIES,
        core_xml,
    )))?;
    let app_xml = template::app_props_xml(pres.slide_count())?;
    pkg.add_part(Box::new(BlobPart::from_xml(
        app_uri,
        ct::OFC_EXTENDED_PROPERTIES,
        app_xml,
    )))?;

    Ok(pkg)
}

fn add_static_part(
    pkg: &mut OpcPackage,
    uri: &str,
    content_type: &str,
    xml: &'static str,
) -> Result<()> {
    pkg.add_part(Box::new(BlobPart::new(
        pack_uri(uri)?,
        content_type,
        xml.as_bytes().to_vec(),
    )))?;
    Ok(())
}

/// Add the slide master, its layouts and the theme.
fn add_master_parts(pkg: &mut OpcPackage, master_uri: &PackURI, theme_uri: &PackURI) -> Result<()> {
    // The master's layout id list expects the layouts at rId1.. in order
    let mut master_rels = Relationships::new(master_uri.base_uri().to_string());
    for layout in SlideLayout::ALL {
        master_rels.relate_to(&layout_uri(layout)?, rt::SLIDE_LAYOUT);
    }
    master_rels.relate_to(theme_uri, rt::THEME);

    pkg.add_part(Box::new(BlobPart::with_rels(
        master_uri.clone(),
        ct::PML_SLIDE_MASTER,
        template::default_slide_master_xml().as_bytes().to_vec(),
        master_rels,
    )))?;

    for layout in SlideLayout::ALL {
        let uri = layout_uri(layout)?;
        let mut rels = Relationships::new(uri.base_uri().to_string());
        rels.relate_to(master_uri, rt::SLIDE_MASTER);
        pkg.add_part(Box::new(BlobPart::with_rels(
            uri,
            ct::PML_SLIDE_LAYOUT,
            layout.xml().as_bytes().to_vec(),
            rels,
        )))?;
    }

    pkg.add_part(Box::new(BlobPart::new(
        theme_uri.clone(),
        ct::OFC_THEME,
        template::default_theme_xml().as_bytes().to_vec(),
    )))?;

    Ok(())
}

/// Add every slide together with the image and media parts it references.
fn add_slide_parts(pkg: &mut OpcPackage, pres: &MutablePresentation) -> Result<()> {
    let mut names = MediaNames::default();
    let mut mapper = RelationshipMapper::new();

    for (slide_index, slide) in pres.slides().enumerate() {
        let slide_uri = PackURI::indexed("/ppt/slides/slide", slide_index + 1, "xml")
            .map_err(OoxmlError::InvalidFormat)?;
        let mut rels = Relationships::new(slide_uri.base_uri().to_string());
        rels.relate_to(&layout_uri(slide.layout())?, rt::SLIDE_LAYOUT);

        for (image_index, (data, format)) in slide.collect_images().into_iter().enumerate() {
            let image_uri = names.next_image(format.extension())?;
            let rid = rels.relate_to(&image_uri, rt::IMAGE);
            mapper.add_image(slide_index, image_index, rid);
            pkg.add_part(Box::new(BlobPart::new(
                image_uri,
                format.mime_type(),
                data.to_vec(),
            )))?;
        }

        for (media_index, media) in slide.media().iter().enumerate() {
            let media_uri = names.next_media(media.format.extension())?;
            let link = rels.relate_to(&media_uri, rt::AUDIO);
            let embed = rels.relate_to(&media_uri, rt::MEDIA);
            let poster_uri = names.next_image("png")?;
            let poster = rels.relate_to(&poster_uri, rt::IMAGE);
            mapper.add_media(slide_index, media_index, MediaRelIds {
                link,
                embed,
                poster,
            });

            pkg.add_part(Box::new(BlobPart::new(
                media_uri,
                media.format.mime_type(),
                media.data.clone(),
            )))?;
            pkg.add_part(Box::new(BlobPart::new(
                poster_uri,
                ct::PNG,
                media.poster.clone(),
            )))?;
        }

        let xml = slide.to_xml_with_rels(slide_index, &mapper)?;
        pkg.add_part(Box::new(BlobPart::with_rels(
            slide_uri,
            ct::PML_SLIDE,
            xml.into_bytes(),
            rels,
        )))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::media::MediaFormat;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn part_text(pkg: &OpcPackage, uri: &str) -> String {
        let part = pkg.part(&PackURI::new(uri).unwrap()).unwrap();
        String::from_utf8(part.blob().to_vec()).unwrap()
    }

    #[test]
    fn test_empty_presentation_has_skeleton_parts() {
        let pres = MutablePresentation::new();
        let pkg = build_package(&pres).unwrap();

        for uri in [
            PRESENTATION_URI,
            SLIDE_MASTER_URI,
            "/ppt/slideLayouts/slideLayout1.xml",
            "/ppt/slideLayouts/slideLayout2.xml",
            THEME_URI,
            PRES_PROPS_URI,
            VIEW_PROPS_URI,
            TABLE_STYLES_URI,
            CORE_PROPS_URI,
            APP_PROPS_URI,
        ] {
            assert!(pkg.contains(&PackURI::new(uri).unwrap()), "missing {}", uri);
        }
        assert_eq!(pkg.rels().len(), 3);
    }

    #[test]
    fn test_slide_rels_match_slide_xml() {
        let mut pres = MutablePresentation::new();
        pres.add_slide(SlideLayout::Blank)
            .add_picture_from_bytes(PNG_MAGIC.to_vec(), 0, 0, 10, 10, None)
            .unwrap();
        pres.add_slide(SlideLayout::TitleOnly)
            .set_title("Beach")
            .unwrap();

        let pkg = build_package(&pres).unwrap();

        let slide1 = pkg
            .part(&PackURI::new("/ppt/slides/slide1.xml").unwrap())
            .unwrap();
        let layout_rel = slide1.rels().get("rId1").unwrap();
        assert_eq!(layout_rel.target_ref(), "../slideLayouts/slideLayout2.xml");
        let image_rel = slide1.rels().get("rId2").unwrap();
        assert_eq!(image_rel.target_ref(), "../media/image1.png");
        assert!(part_text(&pkg, "/ppt/slides/slide1.xml").contains(r#"r:embed="rId2""#));

        let slide2 = pkg
            .part(&PackURI::new("/ppt/slides/slide2.xml").unwrap())
            .unwrap();
        assert_eq!(
            slide2.rels().get("rId1").unwrap().target_ref(),
            "../slideLayouts/slideLayout1.xml"
        );

        let pres_xml = part_text(&pkg, PRESENTATION_URI);
        assert!(pres_xml.contains(r#"<p:sldId id="256" r:id="rId6"/>"#));
        assert!(pres_xml.contains(r#"<p:sldId id="257" r:id="rId7"/>"#));
    }

    #[test]
    fn test_audio_adds_media_and_poster_parts() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide(SlideLayout::Blank);
        slide
            .add_picture_from_bytes(PNG_MAGIC.to_vec(), 0, 0, 10, 10, None)
            .unwrap();
        slide
            .add_audio(b"ID3\x04\0\0\0\0\0\0\0\0".to_vec(), MediaFormat::Mp3, 1, 1, 2, 2)
            .unwrap();

        let pkg = build_package(&pres).unwrap();

        let media = pkg
            .part(&PackURI::new("/ppt/media/media1.mp3").unwrap())
            .unwrap();
        assert_eq!(media.content_type(), "audio/mpeg");
        assert!(pkg.contains(&PackURI::new("/ppt/media/image2.png").unwrap()));

        let slide1 = pkg
            .part(&PackURI::new("/ppt/slides/slide1.xml").unwrap())
            .unwrap();
        let reltypes: Vec<&str> = slide1.rels().iter().map(|r| r.reltype()).collect();
        assert_eq!(
            reltypes,
            vec![rt::SLIDE_LAYOUT, rt::IMAGE, rt::AUDIO, rt::MEDIA, rt::IMAGE]
        );
    }
}
