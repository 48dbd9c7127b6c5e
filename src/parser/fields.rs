use std::sync::LazyLock;

use regex::Regex;

use super::anchors::Anchor;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h2[^>]*>([^<]+)</h2>").unwrap());
static CARD_DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<span[^>]*class="[^"]*VerticalCard2_description[^"]*"[^>]*>([^<]+)</span>"#,
    )
    .unwrap()
});
static SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<span[^>]*>([^<]+)</span>").unwrap());
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<img[^>]*src="([^"]+)""#).unwrap());

/// Fields pulled from a single anchor, before dedup and filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub href: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

pub fn extract_fields(anchor: &Anchor) -> Candidate {
    let inner = anchor.inner.as_str();
    Candidate {
        href: anchor.href.clone(),
        title: first_capture(&TITLE_RE, inner).filter(|t| !t.is_empty()),
        description: first_capture(&CARD_DESCRIPTION_RE, inner)
            .or_else(|| first_capture(&SPAN_RE, inner)),
        image: first_capture(&IMAGE_RE, inner),
    }
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

// ── Tests ──
