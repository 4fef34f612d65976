/// Relationship ID mapper for tracking relationships during presentation generation.
///
/// Slide relationships are created before the slide XML is generated, so the
/// XML can reference the actual IDs rather than placeholders.
use std::collections::HashMap;

/// Relationship IDs of one embedded media element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRelIds {
    /// ID of the OOXML audio relationship, referenced by `a:audioFile r:link`
    pub link: String,
    /// ID of the Microsoft media relationship, referenced by `p14:media r:embed`
    pub embed: String,
    /// ID of the poster frame image relationship
    pub poster: String,
}

/// Maps presentation elements to their relationship IDs.
///
/// The mapper is organized per-slide, as each slide has its own set of relationships.
#[derive(Debug, Default)]
pub struct RelationshipMapper {
    /// Maps (slide_index, image_index_in_slide) to relationship ID
    image_ids: HashMap<(usize, usize), String>,
    /// Maps (slide_index, media_index_in_slide) to its relationship IDs
    media_ids: HashMap<(usize, usize), MediaRelIds>,
}

impl RelationshipMapper {
    /// Create a new empty relationship mapper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an image relationship mapping for a specific slide.
    ///
    /// # Arguments
    /// * `slide_index` - The index of the slide (0-based)
    /// * `image_index_in_slide` - The index of the image within that slide (0-based)
    /// * `rel_id` - The relationship ID (e.g., "rId2")
    pub fn add_image(&mut self, slide_index: usize, image_index_in_slide: usize, rel_id: String) {
        self.image_ids
            .insert((slide_index, image_index_in_slide), rel_id);
    }

    /// Get the relationship ID for an image in a specific slide.
    pub fn get_image_id(&self, slide_index: usize, image_index_in_slide: usize) -> Option<&str> {
        self.image_ids
            .get(&(slide_index, image_index_in_slide))
            .map(|s| s.as_str())
    }

    /// Add the relationship IDs of a media element on a specific slide.
    pub fn add_media(&mut self, slide_index: usize, media_index_in_slide: usize, ids: MediaRelIds) {
        self.media_ids
            .insert((slide_index, media_index_in_slide), ids);
    }

    /// Get the relationship IDs of a media element on a specific slide.
    pub fn get_media_ids(&self, slide_index: usize, media_index_in_slide: usize) -> Option<&MediaRelIds> {
        self.media_ids.get(&(slide_index, media_index_in_slide))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_scoped_per_slide() {
        let mut mapper = RelationshipMapper::new();
        mapper.add_image(0, 0, "rId2".to_string());
        mapper.add_image(1, 0, "rId2".to_string());
        mapper.add_media(
            0,
            0,
            MediaRelIds {
                link: "rId3".to_string(),
                embed: "rId4".to_string(),
                poster: "rId5".to_string(),
            },
        );

        assert_eq!(mapper.get_image_id(1, 0), Some("rId2"));
        assert_eq!(mapper.get_image_id(2, 0), None);
        assert_eq!(mapper.get_media_ids(0, 0).map(|m| m.poster.as_str()), Some("rId5"));
        assert!(mapper.get_media_ids(1, 0).is_none());
    }
}
