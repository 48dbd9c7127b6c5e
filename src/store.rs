use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodcastRecord {
    pub title: String,
    pub href: String,
    pub absolute_url: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Catalog {
    pub podcasts: Vec<PodcastRecord>,
}

/// Read the saved page as text. Invalid UTF-8 sequences are dropped.
pub fn load_html(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let mut html = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        html.push_str(chunk.valid());
    }
    debug!("Loaded {} bytes from {}", bytes.len(), path.display());
    Ok(html)
}

/// Pretty-printed `{"podcasts": [...]}` with two-space indentation.
pub fn render(records: Vec<PodcastRecord>) -> Result<String> {
    let catalog = Catalog { podcasts: records };
    Ok(serde_json::to_string_pretty(&catalog)?)
}

/// Write the catalog, creating parent directories. Overwrites any existing file.
pub fn write_catalog(path: &Path, json: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("Wrote {} bytes to {}", json.len(), path.display());
    Ok(())
}

// ── Tests ──
