//! Slide advance timing for PowerPoint presentations.
//!
//! PresentationML stores a slide's advance timing on its `p:transition`
//! element, so a timed slideshow is a transition with no visual effect.

use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as FmtWrite;

/// Advance timing of a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideTransition {
    /// Whether to advance slide on mouse click
    pub advance_on_click: bool,
    /// Auto-advance after delay in milliseconds (None = no auto-advance)
    pub advance_after_ms: Option<u32>,
}

impl SlideTransition {
    /// Timed advance with mouse clicks ignored.
    ///
    /// This is the kiosk-style timing applied to every slide of a slideshow.
    pub fn auto_advance(delay_ms: u32) -> Self {
        Self {
            advance_on_click: false,
            advance_after_ms: Some(delay_ms),
        }
    }

    /// Generate the `p:transition` element.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(64);
        xml.push_str(r#"<p:transition spd="med""#);

        if !self.advance_on_click {
            xml.push_str(r#" advClick="0""#);
        }

        if let Some(adv) = self.advance_after_ms {
            write!(xml, r#" advTm="{}""#, adv).map_err(|e| OoxmlError::Xml(e.to_string()))?;
        }

        xml.push_str("/>");
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_advance_xml() {
        let trans = SlideTransition::auto_advance(1000);

        assert!(!trans.advance_on_click);
        assert_eq!(
            trans.to_xml().unwrap(),
            r#"<p:transition spd="med" advClick="0" advTm="1000"/>"#
        );
    }

    #[test]
    fn test_click_advance_omits_attribute() {
        let trans = SlideTransition {
            advance_on_click: true,
            advance_after_ms: None,
        };
        assert_eq!(trans.to_xml().unwrap(), r#"<p:transition spd="med"/>"#);
    }
}
