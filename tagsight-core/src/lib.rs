#![deny(dead_code)]

pub mod cache;
pub mod descriptor;
pub mod document;
pub mod finder;
pub mod jsdoc;
pub mod matcher;
pub mod output;
pub mod report;
pub mod visitor;

use std::path::Path;

use anyhow::Context;

use cache::Cache;
use document::JavaScriptDocument;
use finder::ElementFinder;
use report::{ScanMetadata, ScanReport};

/// Scan a JavaScript source string for custom element definitions.
pub fn scan(source: &str) -> anyhow::Result<ScanReport> {
    let document = JavaScriptDocument::parse(source)?;
    let elements = ElementFinder::new().find_elements(&document);
    let element_count = elements.len();
    Ok(ScanReport {
        elements,
        metadata: ScanMetadata {
            file_path: None,
            lines_of_code: source.lines().count(),
            element_count,
        },
    })
}

/// Scan a file, using the content-addressed cache to skip re-scanning of
/// unchanged files.
pub fn scan_file(path: &Path) -> anyhow::Result<ScanReport> {
    let bytes =
        std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    let hash = Cache::hash_content(&bytes);

    let cache = Cache::open(&Cache::default_path()).ok();

    if let Some(ref c) = cache {
        if let Some(mut cached) = c.get(&hash) {
            // Always use the caller's path, not the path stored when the cache entry was written.
            cached.metadata.file_path = Some(path.to_path_buf());
            return Ok(cached);
        }
    }

    let source = String::from_utf8(bytes)
        .map_err(|e| anyhow::anyhow!("non-UTF-8 file {}: {e}", path.display()))?;
    let mut report = scan(&source)?;
    report.metadata.file_path = Some(path.to_path_buf());

    if let Some(ref c) = cache {
        let _ = c.put(&hash, &report);
    }

    Ok(report)
}

/// Scan a file without consulting or updating the cache.
pub fn scan_file_no_cache(path: &Path) -> anyhow::Result<ScanReport> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let mut report = scan(&source)?;
    report.metadata.file_path = Some(path.to_path_buf());
    Ok(report)
}
