use std::sync::LazyLock;

use regex::Regex;

/// `<a ... href="podcast/...">inner</a>`, non-greedy up to the first closing tag.
static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a[^>]+href="(podcast/[^"]+)"[^>]*>(.*?)</a>"#).unwrap()
});

#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub href: String,
    pub inner: String,
}

/// Collect every podcast anchor in document order. Duplicates are kept;
/// collapsing them is the aggregator's job.
pub fn extract_anchors(html: &str) -> Vec<Anchor> {
    ANCHOR_RE
        .captures_iter(html)
        .map(|caps| Anchor {
            href: caps[1].to_string(),
            inner: caps[2].to_string(),
        })
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_podcast_anchors_only() {
        let html = r#"
            <a href="/nieuws/123">News</a>
            <a class="card" href="podcast/boekestijn">Boekestijn</a>
            <a href="https://example.com/podcast/x">Elsewhere</a>
        "#;
        let anchors = extract_anchors(html);
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].href, "podcast/boekestijn");
        assert_eq!(anchors[0].inner, "Boekestijn");
    }

    #[test]
    fn inner_markup_spans_lines() {
        let html = "<a href=\"podcast/foo\">\n  <h2>Show</h2>\n  <span>Desc</span>\n</a>";
        let anchors = extract_anchors(html);
        assert_eq!(anchors.len(), 1);
        assert!(anchors[0].inner.contains("<h2>Show</h2>"));
        assert!(anchors[0].inner.contains("<span>Desc</span>"));
    }

    #[test]
    fn tag_and_attribute_names_case_insensitive() {
        let html = r#"<A HREF="podcast/upper"><H2>Loud</H2></A>"#;
        let anchors = extract_anchors(html);
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].href, "podcast/upper");
    }

    #[test]
    fn keeps_duplicates_in_document_order() {
        let html = r#"<a href="podcast/b">1</a><a href="podcast/a">2</a><a href="podcast/b">3</a>"#;
        let hrefs: Vec<_> = extract_anchors(html).into_iter().map(|a| a.href).collect();
        assert_eq!(hrefs, ["podcast/b", "podcast/a", "podcast/b"]);
    }

    #[test]
    fn unclosed_anchor_runs_to_next_close() {
        let html = r#"<a href="podcast/open"><h2>Open</h2><a href="podcast/next"><h2>Next</h2></a>"#;
        let anchors = extract_anchors(html);
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].href, "podcast/open");
        assert!(anchors[0].inner.contains("Next"));
    }

    #[test]
    fn no_anchors_in_empty_page() {
        assert!(extract_anchors("").is_empty());
    }
}
