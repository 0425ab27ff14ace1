use std::path::{Path, PathBuf};

use redb::{Database, TableDefinition};
use sha2::{Digest, Sha256};

use crate::report::ScanReport;

/// Stores JSON-serialised `ScanReport`s keyed by the SHA-256 hash of the
/// file content they were produced from.
const CACHE_TABLE: TableDefinition<&[u8], &str> = TableDefinition::new("cache");

pub struct Cache {
    db: Database,
}

impl Cache {
    /// Open (or create) the cache database at `dir/cache.redb`.
    pub fn open(dir: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        std::fs::create_dir_all(dir)?;
        let db_path = dir.join("cache.redb");
        let db = Database::create(&db_path)?;
        Ok(Self { db })
    }

    /// Default cache directory: `$CACHE_DIR/tagsight/`.
    pub fn default_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from(".cache"))
            .join("tagsight")
    }

    /// Compute the SHA-256 hash of `content`.
    pub fn hash_content(content: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(content);
        let result = hasher.finalize();
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        hash
    }

    /// Look up a cached `ScanReport` by file-content hash.
    pub fn get(&self, hash: &[u8; 32]) -> Option<ScanReport> {
        let read_txn = self.db.begin_read().ok()?;
        let table = read_txn.open_table(CACHE_TABLE).ok()?;
        let guard = table.get(hash.as_slice()).ok()??;
        serde_json::from_str(guard.value()).ok()
    }

    /// Store a `ScanReport` under the given file-content hash.
    pub fn put(
        &self,
        hash: &[u8; 32],
        report: &ScanReport,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let json = serde_json::to_string(report)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CACHE_TABLE)?;
            table.insert(hash.as_slice(), json.as_str())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ElementDescriptor, SourceLocation};
    use crate::report::{ScanMetadata, ScanReport};

    fn make_report() -> ScanReport {
        ScanReport {
            elements: vec![ElementDescriptor {
                tag_name: "my-element".to_string(),
                class_name: Some("MyElement".to_string()),
                super_class: Some("HTMLElement".to_string()),
                description: None,
                attributes: vec![],
                source_location: SourceLocation { line: 1, column: 0 },
            }],
            metadata: ScanMetadata {
                file_path: None,
                lines_of_code: 3,
                element_count: 1,
            },
        }
    }

    #[test]
    fn cache_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Cache::open(dir.path()).unwrap();

        let hash = [7u8; 32];
        cache.put(&hash, &make_report()).unwrap();

        let retrieved = cache.get(&hash).unwrap();
        assert_eq!(retrieved.metadata.element_count, 1);
        assert_eq!(retrieved.elements[0].tag_name, "my-element");
    }

    #[test]
    fn cache_miss_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Cache::open(dir.path()).unwrap();
        assert!(cache.get(&[0u8; 32]).is_none());
    }

    #[test]
    fn distinct_hashes_are_distinct_entries() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Cache::open(dir.path()).unwrap();

        cache.put(&[1u8; 32], &make_report()).unwrap();
        assert!(cache.get(&[2u8; 32]).is_none());
        assert!(cache.get(&[1u8; 32]).is_some());
    }

    #[test]
    fn hash_is_stable_and_content_sensitive() {
        let a = Cache::hash_content(b"class A {}");
        let b = Cache::hash_content(b"class A {}");
        let c = Cache::hash_content(b"class B {}");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
