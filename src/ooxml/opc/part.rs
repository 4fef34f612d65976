//! Open Packaging Convention (OPC) objects related to package parts.
//!
//! Parts are the fundamental units of content in an OPC package, each with a
//! unique partname, a content type, and optional relationships.
use crate::ooxml::opc::constants::content_type as ct;
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

/// Trait representing a part in an OPC package.
pub trait Part {
    /// Get the partname of this part.
    fn partname(&self) -> &PackURI;

    /// Get the content type of this part.
    fn content_type(&self) -> &str;

    /// Get the binary content of this part.
    fn blob(&self) -> &[u8];

    /// Get the relationships for this part.
    fn rels(&self) -> &Relationships;

    /// Get mutable access to the relationships for this part.
    fn rels_mut(&mut self) -> &mut Relationships;

    /// Add or get a relationship to another part, returning its rId.
    fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels_mut().relate_to(target, reltype)
    }

    /// Whether the part holds media in an already-compressed encoding.
    fn is_precompressed(&self) -> bool {
        matches!(
            self.content_type(),
            ct::PNG | ct::JPEG | ct::GIF | ct::MP3 | ct::WMA
        )
    }
}

/// A basic implementation of a Part that stores binary content.
///
/// Used for every part the presentation writer emits: XML parts are
/// serialized up front and stored as bytes like media.
#[derive(Debug)]
pub struct BlobPart {
    /// The partname (URI) of this part
    partname: PackURI,

    /// The content type of this part
    content_type: String,

    /// The binary content of this part
    blob: Vec<u8>,

    /// Relationships from this part to other parts
    rels: Relationships,
}

impl BlobPart {
    /// Create a new BlobPart.
    pub fn new(partname: PackURI, content_type: &str, blob: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            content_type: content_type.to_string(),
            blob,
            rels,
        }
    }

    /// Create a part whose content is an XML string.
    pub fn from_xml(partname: PackURI, content_type: &str, xml: String) -> Self {
        Self::new(partname, content_type, xml.into_bytes())
    }

    /// Create a part with relationships that were built before its content.
    ///
    /// Used when the content references rIds, which must exist first.
    pub fn with_rels(
        partname: PackURI,
        content_type: &str,
        blob: Vec<u8>,
        rels: Relationships,
    ) -> Self {
        Self {
            partname,
            content_type: content_type.to_string(),
            blob,
            rels,
        }
    }
}

impl Part for BlobPart {
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn blob(&self) -> &[u8] {
        &self.blob
    }

    fn rels(&self) -> &Relationships {
        &self.rels
    }

    fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_blob_part_rels_resolve_from_part_directory() {
        let mut slide = BlobPart::from_xml(
            PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            ct::PML_SLIDE,
            "<p:sld/>".to_string(),
        );
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout7.xml").unwrap();

        let r_id = slide.relate_to(&layout, rt::SLIDE_LAYOUT);
        assert_eq!(r_id, "rId1");
        assert_eq!(
            slide.rels().get("rId1").unwrap().target_ref(),
            "../slideLayouts/slideLayout7.xml"
        );
    }

    #[test]
    fn test_precompressed_detection() {
        let png = BlobPart::new(
            PackURI::new("/ppt/media/image1.png").unwrap(),
            ct::PNG,
            vec![0x89, b'P', b'N', b'G'],
        );
        let xml = BlobPart::from_xml(
            PackURI::new("/ppt/presentation.xml").unwrap(),
            ct::PML_PRESENTATION_MAIN,
            String::new(),
        );
        let bmp = BlobPart::new(
            PackURI::new("/ppt/media/image2.bmp").unwrap(),
            ct::BMP,
            vec![b'B', b'M'],
        );
        assert!(png.is_precompressed());
        assert!(!bmp.is_precompressed());
        assert!(!xml.is_precompressed());
    }
}
