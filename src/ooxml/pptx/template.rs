//! Presentation template module.
//!
//! Provides the fixed parts every generated presentation carries: one slide
//! master, two slide layouts, the theme and the presentation-level property
//! parts. Document properties are generated per save.

use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write as FmtWrite;

macro_rules! resource {
    ($path:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/", $path))
    };
}

/// Slide layouts available to generated slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideLayout {
    /// Title-only layout; its title placeholder receives slide titles
    TitleOnly,
    /// Blank layout with no placeholders
    #[default]
    Blank,
}

impl SlideLayout {
    /// All layouts in master order.
    pub const ALL: [SlideLayout; 2] = [SlideLayout::TitleOnly, SlideLayout::Blank];

    /// 1-based layout number used in the layout partname.
    pub fn number(&self) -> usize {
        match self {
            SlideLayout::TitleOnly => 1,
            SlideLayout::Blank => 2,
        }
    }

    /// Whether slides on this layout can fill a title placeholder.
    pub fn has_title_placeholder(&self) -> bool {
        matches!(self, SlideLayout::TitleOnly)
    }

    /// Layout part XML.
    pub fn xml(&self) -> &'static str {
        match self {
            SlideLayout::TitleOnly => resource!("slideLayouts/slideLayout1.xml"),
            SlideLayout::Blank => resource!("slideLayouts/slideLayout2.xml"),
        }
    }
}

/// Slide master XML; its layout id list points at rId1 and rId2.
pub fn default_slide_master_xml() -> &'static str {
    resource!("slideMasters/slideMaster1.xml")
}

/// Theme part XML.
pub fn default_theme_xml() -> &'static str {
    resource!("theme/theme1.xml")
}

/// Table styles part XML with no custom styles.
pub fn default_table_styles_xml() -> &'static str {
    resource!("tableStyles.xml")
}

/// View properties part XML.
pub fn default_view_props_xml() -> &'static str {
    resource!("viewProps.xml")
}

/// Presentation properties part XML.
pub fn default_pres_props_xml() -> &'static str {
    resource!("presProps.xml")
}

/// Core properties part XML stamped with `now`.
pub fn core_props_xml(title: Option<&str>, now: DateTime<Utc>) -> Result<String> {
    let stamp = now.to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut xml = String::with_capacity(1024);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
    if let Some(title) = title {
        write!(xml, "<dc:title>{}</dc:title>", escape_xml(title))
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    }
    write!(
        xml,
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{0}</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">{0}</dcterms:modified>"#,
        stamp
    )
    .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    xml.push_str("</cp:coreProperties>");

    Ok(xml)
}

/// Extended properties part XML for a deck of `slide_count` slides.
pub fn app_props_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(512);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    write!(
        xml,
        "<Application>{}</Application><PresentationFormat>Custom</PresentationFormat><Slides>{}</Slides>",
        env!("CARGO_PKG_NAME"),
        slide_count
    )
    .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    xml.push_str("</Properties>");

    Ok(xml)
}
