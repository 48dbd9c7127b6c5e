pub mod aggregate;
pub mod anchors;
pub mod fields;

use tracing::debug;

use crate::store::PodcastRecord;
use aggregate::AggregateStats;

pub struct Extraction {
    pub records: Vec<PodcastRecord>,
    pub anchors: usize,
    pub stats: AggregateStats,
}

/// Three-stage pipeline: html → anchors → candidates → sorted, deduplicated records.
pub fn process_page(html: &str, base_url: &str) -> Extraction {
    let anchors = anchors::extract_anchors(html);
    debug!("Found {} podcast anchors", anchors.len());

    let candidates: Vec<_> = anchors.iter().map(fields::extract_fields).collect();
    let (records, stats) = aggregate::aggregate(candidates, base_url);

    Extraction {
        records,
        anchors: anchors.len(),
        stats,
    }
}

// ── Tests ──
