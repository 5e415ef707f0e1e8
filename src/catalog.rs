//! The avatar catalog: an ordered, immutable table mapping source filenames to
//! output identifiers. A default table is embedded in the binary; an alternate
//! JSON file can be supplied at runtime.
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One configured source-image-to-output-identifier record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarEntry {
    pub id: String,
    pub name: String,
    pub category: String,
    pub source_file: String,
}

/// Ordered table of avatar entries. Ids are unique; the invariant is checked
/// on every load path and violation is a hard error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<AvatarEntry>,
}

const EMBEDDED_CATALOG: &str = include_str!("../assets/avatars.json");

impl Catalog {
    /// The built-in avatar table shipped with the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.check_unique_ids()?;
        Ok(catalog)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn from_entries(entries: Vec<AvatarEntry>) -> Result<Self> {
        let catalog = Catalog { entries };
        catalog.check_unique_ids()?;
        Ok(catalog)
    }

    pub fn entries(&self) -> &[AvatarEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_unique_ids(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(Error::DuplicateId {
                    id: entry.id.clone(),
                });
            }
        }
        Ok(())
    }
}
