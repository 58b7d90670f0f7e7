// SPDX-License-Identifier: MPL-2.0
//! Quilt gallery document: the ordered set of blocks the gallery renders.
//!
//! A document is read once at startup, either from a TOML file passed on the
//! command line or from the embedded default gallery. Blocks are never
//! created or destroyed at runtime; the application only reads their
//! attributes and generates their decorative cell grids.

use crate::cells::{grid_size_or_default, CellGrid};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/gallery/"]
struct Asset;

const DEFAULT_GALLERY: &str = "digital_thread.toml";

/// Raw size attribute as written in the document.
///
/// Authors may write `grid_size = 5` or `grid_size = "5"`; anything else is
/// treated as absent and falls back to the default size.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SizeAttr {
    Number(i64),
    Text(String),
    Other(toml::Value),
}

impl SizeAttr {
    /// Renders the attribute as the string form the sizing rule consumes.
    #[must_use]
    pub fn as_attribute(&self) -> Option<String> {
        match self {
            SizeAttr::Number(n) => Some(n.to_string()),
            SizeAttr::Text(s) => Some(s.clone()),
            SizeAttr::Other(_) => None,
        }
    }
}

/// One gallery entry: a name, a description, and a decorative cell grid.
#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub grid_size: Option<SizeAttr>,
    /// Generated at startup by [`QuiltDocument::generate_cells`].
    #[serde(skip)]
    pub grid: CellGrid,
}

impl Block {
    /// Effective grid side length after applying the sizing rule.
    #[must_use]
    pub fn effective_grid_size(&self) -> u32 {
        let raw = self.grid_size.as_ref().and_then(SizeAttr::as_attribute);
        grid_size_or_default(raw.as_deref())
    }
}

/// The loaded gallery document.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct QuiltDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl QuiltDocument {
    /// Loads a document from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut document: QuiltDocument = toml::from_str(&content)?;
        document.generate_cells();
        Ok(document)
    }

    /// Loads the embedded default gallery.
    ///
    /// The default document ships inside the binary, so a parse failure here
    /// is a build defect rather than a runtime condition.
    pub fn load_embedded() -> Result<Self> {
        let asset = Asset::get(DEFAULT_GALLERY)
            .ok_or_else(|| Error::Gallery(format!("missing embedded gallery {DEFAULT_GALLERY}")))?;
        let content = String::from_utf8_lossy(asset.data.as_ref()).to_string();
        let mut document: QuiltDocument = toml::from_str(&content)?;
        document.generate_cells();
        Ok(document)
    }

    /// Loads from `path` when given, degrading to the embedded default on
    /// any I/O or parse failure.
    #[must_use]
    pub fn load_or_default(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            match Self::load_from_path(path) {
                Ok(document) => return document,
                Err(err) => {
                    eprintln!("Failed to load gallery from {}: {}", path.display(), err);
                }
            }
        }
        Self::load_embedded().unwrap_or_default()
    }

    /// Populates every block's cell grid from its size attribute.
    ///
    /// Idempotent: prior cells are discarded before regeneration.
    pub fn generate_cells(&mut self) {
        for block in &mut self.blocks {
            block.grid = CellGrid::generate(block.effective_grid_size());
        }
    }

    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::DEFAULT_GRID_SIZE;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_document(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(content.as_bytes())
            .expect("failed to write test file");
        path
    }

    #[test]
    fn embedded_gallery_loads_with_blocks() {
        let document = QuiltDocument::load_embedded().expect("embedded gallery should parse");
        assert!(!document.is_empty());
        assert!(!document.title.is_empty());
        for block in &document.blocks {
            assert!(!block.grid.is_empty());
        }
    }

    #[test]
    fn load_from_path_reads_blocks_in_order() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_document(
            temp_dir.path(),
            "gallery.toml",
            r#"
title = "Test Quilt"

[[blocks]]
name = "First"
description = "first block"
grid_size = 3

[[blocks]]
name = "Second"
description = "second block"
grid_size = "5"
"#,
        );

        let document = QuiltDocument::load_from_path(&path).expect("load failed");
        assert_eq!(document.block_count(), 2);
        assert_eq!(document.blocks[0].name, "First");
        assert_eq!(document.blocks[0].grid.len(), 9);
        assert_eq!(document.blocks[1].grid.len(), 25);
    }

    #[test]
    fn malformed_grid_size_falls_back_to_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_document(
            temp_dir.path(),
            "gallery.toml",
            r#"
[[blocks]]
name = "Odd"
description = "size is a float"
grid_size = 4.5

[[blocks]]
name = "Wordy"
description = "size is prose"
grid_size = "plenty"
"#,
        );

        let document = QuiltDocument::load_from_path(&path).expect("load failed");
        for block in &document.blocks {
            assert_eq!(block.effective_grid_size(), DEFAULT_GRID_SIZE);
            assert_eq!(block.grid.len(), 16);
        }
    }

    #[test]
    fn missing_grid_size_falls_back_to_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_document(
            temp_dir.path(),
            "gallery.toml",
            "[[blocks]]\nname = \"Plain\"\ndescription = \"no size\"\n",
        );

        let document = QuiltDocument::load_from_path(&path).expect("load failed");
        assert_eq!(document.blocks[0].grid.len(), 16);
    }

    #[test]
    fn load_or_default_degrades_to_embedded_on_missing_file() {
        let document = QuiltDocument::load_or_default(Some(Path::new("/nonexistent/quilt.toml")));
        assert!(!document.is_empty());
    }

    #[test]
    fn generate_cells_is_idempotent() {
        let mut document = QuiltDocument::load_embedded().expect("embedded gallery should parse");
        let before: Vec<usize> = document.blocks.iter().map(|b| b.grid.len()).collect();
        document.generate_cells();
        let after: Vec<usize> = document.blocks.iter().map(|b| b.grid.len()).collect();
        assert_eq!(before, after);
    }
}
