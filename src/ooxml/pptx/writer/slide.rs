/// Slide types and implementation for PPTX presentations.
use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::media::{Media, MediaFormat};
use crate::ooxml::pptx::template::SlideLayout;
use crate::ooxml::pptx::transitions::SlideTransition;
use std::fmt::Write as FmtWrite;

// Import shared format types
use super::super::format::{ImageFormat, TextFormat};
use super::relmap::{MediaRelIds, RelationshipMapper};
use super::shape::{MutableShape, write_xfrm};

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier)
    pub(crate) slide_id: u32,
    /// Layout the slide is based on
    pub(crate) layout: SlideLayout,
    /// Slide title (stored in title placeholder)
    pub(crate) title: Option<String>,
    /// Run formatting of the title
    pub(crate) title_format: TextFormat,
    /// Explicit bounds of the title placeholder
    pub(crate) title_bounds: Option<(i64, i64, i64, i64)>,
    /// Shapes on the slide
    pub(crate) shapes: Vec<MutableShape>,
    /// Slide transition effect
    pub(crate) transition: Option<SlideTransition>,
    /// Media elements (audio) on the slide
    pub(crate) media: Vec<Media>,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32, layout: SlideLayout) -> Self {
        Self {
            slide_id,
            layout,
            title: None,
            title_format: TextFormat::default(),
            title_bounds: None,
            shapes: Vec::new(),
            transition: None,
            media: Vec::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Get the layout this slide uses.
    pub fn layout(&self) -> SlideLayout {
        self.layout
    }

    /// Set the slide title.
    ///
    /// Fails if the slide's layout has no title placeholder.
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.set_title_with_format(title, TextFormat::default())
    }

    /// Set the slide title with explicit run formatting.
    pub fn set_title_with_format(&mut self, title: &str, format: TextFormat) -> Result<()> {
        if !self.layout.has_title_placeholder() {
            return Err(OoxmlError::InvalidFormat(format!(
                "layout {:?} has no title placeholder",
                self.layout
            )));
        }
        self.title = Some(title.to_string());
        self.title_format = format;
        Ok(())
    }

    /// Get the slide title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set a transition effect for the slide.
    ///
    /// # Arguments
    /// * `transition` - The transition configuration
    ///
    /// # Examples
    ///
    /// ```rust
    /// use picdeck::ooxml::pptx::{MutablePresentation, SlideLayout, SlideTransition};
    ///
    /// let mut pres = MutablePresentation::new();
    /// let slide = pres.add_slide(SlideLayout::Blank);
    ///
    /// // Advance after three seconds, ignoring clicks
    /// slide.set_transition(SlideTransition::auto_advance(3000));
    /// ```
    pub fn set_transition(&mut self, transition: SlideTransition) {
        self.transition = Some(transition);
    }

    /// Get the transition effect for the slide.
    ///
    /// Returns `None` if no transition is set.
    pub fn transition(&self) -> Option<&SlideTransition> {
        self.transition.as_ref()
    }

    /// Add a text box to the slide, returning it for formatting.
    pub fn add_text_box(
        &mut self,
        text: &str,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> &mut MutableShape {
        let shape_id = (self.shapes.len() + 3) as u32;
        let shape = MutableShape::new_text_box(shape_id, text.to_string(), x, y, width, height);
        self.shapes.push(shape);
        let idx = self.shapes.len() - 1;
        &mut self.shapes[idx]
    }

    /// Add a picture to the slide from bytes.
    pub fn add_picture_from_bytes(
        &mut self,
        data: Vec<u8>,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        description: Option<String>,
    ) -> Result<()> {
        let format = ImageFormat::detect_from_bytes(&data)
            .ok_or_else(|| OoxmlError::InvalidFormat("Unknown image format".to_string()))?;

        let shape_id = (self.shapes.len() + 3) as u32;
        let desc = description.unwrap_or_else(|| "Picture".to_string());
        let shape = MutableShape::new_picture(shape_id, data, format, x, y, width, height, desc);
        self.shapes.push(shape);

        Ok(())
    }

    /// Add an audio clip to the slide.
    ///
    /// # Arguments
    /// * `data` - Audio file data
    /// * `format` - Audio format, which decides the media part's content type
    /// * `x` - X position in EMUs
    /// * `y` - Y position in EMUs
    /// * `width` - Width in EMUs (for the audio icon)
    /// * `height` - Height in EMUs (for the audio icon)
    pub fn add_audio(
        &mut self,
        data: Vec<u8>,
        format: MediaFormat,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> Result<&mut Media> {
        if format == MediaFormat::Unknown {
            return Err(OoxmlError::InvalidFormat(
                "Unknown audio format".to_string(),
            ));
        }
        let media = Media::with_format(data, format, x, y, width, height)?;
        self.media.push(media);
        let idx = self.media.len() - 1;
        Ok(&mut self.media[idx])
    }

    /// Get the shapes on this slide.
    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Get the number of shapes on the slide (title placeholder excluded).
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Get all media elements on this slide.
    pub fn media(&self) -> &[Media] {
        &self.media
    }

    /// Get the number of media elements on this slide.
    pub fn media_count(&self) -> usize {
        self.media.len()
    }

    /// Collect all images from this slide's picture shapes.
    pub(crate) fn collect_images(&self) -> Vec<(&[u8], ImageFormat)> {
        self.shapes
            .iter()
            .filter_map(|shape| shape.get_image_data())
            .collect()
    }

    /// Generate slide XML content with relationship IDs from the mapper.
    ///
    /// # Arguments
    /// * `slide_index` - The index of this slide (used to look up relationships)
    /// * `rel_mapper` - The relationship mapper containing actual relationship IDs
    pub(crate) fn to_xml_with_rels(
        &self,
        slide_index: usize,
        rel_mapper: &RelationshipMapper,
    ) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);

        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Write group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        if let Some(ref title) = self.title {
            self.write_title_shape(&mut xml, title)?;
        }

        let mut image_counter = 0;
        for shape in &self.shapes {
            let rid = if shape.get_image_data().is_some() {
                let rid = rel_mapper.get_image_id(slide_index, image_counter);
                image_counter += 1;
                rid
            } else {
                None
            };
            shape.to_xml(&mut xml, rid)?;
        }

        // Media shapes come after regular shapes
        let base_shape_id = self.shapes.len() as u32 + 3;
        for (media_idx, media) in self.media.iter().enumerate() {
            let ids = rel_mapper
                .get_media_ids(slide_index, media_idx)
                .ok_or_else(|| {
                    OoxmlError::Xml(format!(
                        "media {} on slide {} has no relationships",
                        media_idx,
                        slide_index + 1
                    ))
                })?;
            self.write_media_shape(&mut xml, media, base_shape_id + media_idx as u32, ids)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");

        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);

        if let Some(ref transition) = self.transition {
            xml.push_str(&transition.to_xml()?);
        }

        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Write the title placeholder shape.
    fn write_title_shape(&self, xml: &mut String, title: &str) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        // Group shape uses id=1, so title uses id=2.
        xml.push_str(r#"<p:cNvPr id="2" name="Title 1"/>"#);
        xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
        xml.push_str(r#"<p:nvPr><p:ph type="title"/></p:nvPr>"#);
        xml.push_str("</p:nvSpPr>");

        match self.title_bounds {
            Some((x, y, width, height)) => {
                xml.push_str("<p:spPr>");
                write_xfrm(xml, x, y, width, height)?;
                xml.push_str("</p:spPr>");
            },
            None => xml.push_str("<p:spPr/>"),
        }

        xml.push_str("<p:txBody>");
        if self.title_format.shrink_to_fit {
            xml.push_str("<a:bodyPr><a:normAutofit/></a:bodyPr>");
        } else {
            xml.push_str("<a:bodyPr/>");
        }
        xml.push_str("<a:lstStyle/>");
        xml.push_str("<a:p>");
        xml.push_str("<a:r>");
        self.title_format.write_run_props(xml);
        write!(xml, "<a:t>{}</a:t>", escape_xml(title))
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        xml.push_str("</a:r>");
        xml.push_str("</a:p>");
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");

        Ok(())
    }

    /// Write a media (audio) shape to XML.
    ///
    /// Media is a `<p:pic>` whose non-visual properties reference the clip:
    /// - `<a:audioFile r:link="..."/>` references the OOXML audio relationship
    /// - `<p14:media r:embed="..."/>` references the Microsoft media relationship
    /// - `<a:blip r:embed="..."/>` references the poster frame image
    fn write_media_shape(
        &self,
        xml: &mut String,
        media: &Media,
        shape_id: u32,
        ids: &MediaRelIds,
    ) -> Result<()> {
        let name = media.name.as_deref().unwrap_or("Audio");

        xml.push_str("<p:pic>");

        xml.push_str("<p:nvPicPr>");

        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}">"#,
            shape_id,
            escape_xml(name)
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        // Click action for media playback
        xml.push_str(r#"<a:hlinkClick r:id="" action="ppaction://media"/>"#);
        xml.push_str("</p:cNvPr>");

        xml.push_str("<p:cNvPicPr>");
        xml.push_str(r#"<a:picLocks noChangeAspect="1"/>"#);
        xml.push_str("</p:cNvPicPr>");

        xml.push_str("<p:nvPr>");
        write!(xml, r#"<a:audioFile r:link="{}"/>"#, ids.link)
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;

        // p14:media is required by PowerPoint 2010+ to play embedded media
        xml.push_str("<p:extLst>");
        xml.push_str(r#"<p:ext uri="{DAA4B4D4-6D71-4841-9C94-3DE7FCFB9230}">"#);
        write!(
            xml,
            r#"<p14:media xmlns:p14="http://schemas.microsoft.com/office/powerpoint/2010/main" r:embed="{}"/>"#,
            ids.embed
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        xml.push_str("</p:ext>");
        xml.push_str("</p:extLst>");

        xml.push_str("</p:nvPr>");
        xml.push_str("</p:nvPicPr>");

        xml.push_str("<p:blipFill>");
        write!(xml, r#"<a:blip r:embed="{}"/>"#, ids.poster)
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
        xml.push_str("</p:blipFill>");

        xml.push_str("<p:spPr>");
        write_xfrm(xml, media.x, media.y, media.width, media.height)?;
        xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
        xml.push_str("</p:spPr>");

        xml.push_str("</p:pic>");

        Ok(())
    }
}
