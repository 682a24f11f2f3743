//! Ordered collection of parsed art blocks.

use std::path::Path;

use ordermap::OrderMap;
use tracing::debug;

use crate::{ArtBlock, ArtError, Result, parse};

/// Art shipped with the crate.
const BUNDLED_ART: &str = include_str!("../assets/art.txt");

/// Art blocks keyed by lowercase name, in order of first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtLibrary {
    blocks: OrderMap<String, ArtBlock>,
}

impl ArtLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library parsed from the built-in art file.
    pub fn bundled() -> Self {
        parse(BUNDLED_ART)
    }

    /// Insert a block. A block with the same name replaces the old content
    /// but keeps the old position.
    pub fn insert(&mut self, block: ArtBlock) {
        if let Some(old) = self.blocks.insert(block.name.clone(), block) {
            debug!(name = %old.name, "art block redefined");
        }
    }

    /// Exact lookup, case-insensitive.
    pub fn get(&self, name: &str) -> Option<&ArtBlock> {
        self.blocks.get(name.to_lowercase().as_str())
    }

    /// Blocks whose name contains `query`, case-insensitive, in library
    /// order.
    pub fn search(&self, query: &str) -> Vec<&ArtBlock> {
        let query = query.trim().to_lowercase();
        self.blocks
            .values()
            .filter(|b| b.name.contains(query.as_str()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtBlock> {
        self.blocks.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Load and parse an art file.
pub fn load(path: impl AsRef<Path>) -> Result<ArtLibrary> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => ArtError::ResourceNotFound {
            path: path.to_path_buf(),
        },
        _ => ArtError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ArtError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let library = parse(&text);
    debug!(path = %path.display(), blocks = library.len(), "loaded art file");
    Ok(library)
}
