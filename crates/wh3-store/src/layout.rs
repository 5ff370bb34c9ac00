//! Data directory layout
//!
//! ```text
//! data/
//!   agents.ndjson
//!   characters.ndjson
//!   factions.ndjson          (optional)
//!   db/frontend_faction_leaders_tables/data__.tsv
//! ```

use std::path::{Path, PathBuf};

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data";

/// Resolves every input table from a single root directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn agents(&self) -> PathBuf {
        self.root.join("agents.ndjson")
    }

    pub fn characters(&self) -> PathBuf {
        self.root.join("characters.ndjson")
    }

    /// Not needed for the catalog; only the faction browser reads it
    pub fn factions(&self) -> PathBuf {
        self.root.join("factions.ndjson")
    }

    pub fn faction_leaders(&self) -> PathBuf {
        self.root
            .join("db")
            .join("frontend_faction_leaders_tables")
            .join("data__.tsv")
    }
}

impl Default for DataLayout {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}
