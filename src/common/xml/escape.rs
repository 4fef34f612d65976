use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters for use in text nodes and attribute values.
///
/// # Examples
///
/// ```
/// use picdeck::common::xml::escape_xml;
/// assert_eq!(escape_xml("Rock & Roll"), "Rock &amp; Roll");
/// assert_eq!(escape_xml("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_xml("Summer 2024"), "Summer 2024");
    }

    #[test]
    fn test_escape_folder_names() {
        assert_eq!(escape_xml("Tom's <trip>"), "Tom&apos;s &lt;trip&gt;");
        assert_eq!(escape_xml("a&&b"), "a&amp;&amp;b");
    }
}
