use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::descriptor::ElementDescriptor;

/// Metadata about the scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanMetadata {
    pub file_path: Option<PathBuf>,
    pub lines_of_code: usize,
    pub element_count: usize,
}

/// The full scan result for a single source input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub elements: Vec<ElementDescriptor>,
    pub metadata: ScanMetadata,
}
