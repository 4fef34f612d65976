//! In-memory OPC package under construction.
//!
//! OpcPackage holds the package-level relationships and the ordered list of
//! parts that `PackageWriter` serializes. Parts keep their insertion order so
//! the written archive is deterministic.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;

/// Main API type for assembling OPC packages.
pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    /// All parts in the package, in insertion order
    parts: Vec<Box<dyn Part>>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: Vec::new(),
        }
    }

    /// Add a part to the package.
    ///
    /// Fails if a part with the same partname is already present.
    pub fn add_part(&mut self, part: Box<dyn Part>) -> Result<()> {
        if self.contains(part.partname()) {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Relate the package itself to one of its parts, returning the rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.relate_to(target, reltype)
    }

    /// Check whether a part with the given partname exists.
    pub fn contains(&self, partname: &PackURI) -> bool {
        self.parts.iter().any(|p| p.partname() == partname)
    }

    /// Get a part by its partname.
    pub fn part(&self, partname: &PackURI) -> Result<&dyn Part> {
        self.parts
            .iter()
            .find(|p| p.partname() == partname)
            .map(|p| p.as_ref())
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Get the package-level relationships.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Iterate over all parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.iter().map(|p| p.as_ref())
    }

    /// Number of parts in the package.
    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
    use crate::ooxml::opc::part::BlobPart;

    fn pres_part() -> Box<dyn Part> {
        Box::new(BlobPart::from_xml(
            PackURI::new("/ppt/presentation.xml").unwrap(),
            ct::PML_PRESENTATION_MAIN,
            "<p:presentation/>".to_string(),
        ))
    }

    #[test]
    fn test_add_and_lookup_part() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(pres_part()).unwrap();

        let uri = PackURI::new("/ppt/presentation.xml").unwrap();
        assert!(pkg.contains(&uri));
        assert_eq!(pkg.part(&uri).unwrap().content_type(), ct::PML_PRESENTATION_MAIN);
        assert_eq!(pkg.part_count(), 1);
    }

    #[test]
    fn test_duplicate_part_rejected() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(pres_part()).unwrap();
        assert!(matches!(
            pkg.add_part(pres_part()),
            Err(OpcError::DuplicatePart(_))
        ));
    }

    #[test]
    fn test_package_relationship_target_is_membername() {
        let mut pkg = OpcPackage::new();
        let uri = PackURI::new("/ppt/presentation.xml").unwrap();
        let r_id = pkg.relate_to(&uri, rt::OFFICE_DOCUMENT);
        assert_eq!(pkg.rels().get(&r_id).unwrap().target_ref(), "ppt/presentation.xml");
    }
}
