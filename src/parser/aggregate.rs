use std::collections::HashSet;

use tracing::trace;

use super::fields::Candidate;
use crate::store::PodcastRecord;

/// Counts gathered while collapsing candidates into records.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AggregateStats {
    pub duplicates: usize,
    pub untitled: usize,
}

/// Dedup by href (first seen wins), drop untitled records, sort by title.
pub fn aggregate(
    candidates: Vec<Candidate>,
    base_url: &str,
) -> (Vec<PodcastRecord>, AggregateStats) {
    let mut seen = HashSet::new();
    let mut stats = AggregateStats::default();
    let mut records = Vec::new();

    for candidate in candidates {
        if !seen.insert(candidate.href.clone()) {
            trace!("Duplicate href skipped: {}", candidate.href);
            stats.duplicates += 1;
            continue;
        }
        // The href stays claimed even when the first occurrence has no title.
        let Some(title) = candidate.title.filter(|t| !t.is_empty()) else {
            trace!("Untitled record dropped: {}", candidate.href);
            stats.untitled += 1;
            continue;
        };
        records.push(PodcastRecord {
            title,
            absolute_url: format!("{}{}", base_url, candidate.href),
            href: candidate.href,
            description: candidate.description,
            image: candidate.image,
        });
    }

    records.sort_by(|a, b| a.title.cmp(&b.title));
    (records, stats)
}

// ── Tests ──
