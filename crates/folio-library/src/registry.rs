//! Section library for loading and looking up section variants

use crate::meta::{SectionFile, SectionMeta};
use folio_core::{FolioError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const BUILTIN_SECTIONS: &str = include_str!("../library/sections.toml");

/// Registry of every known section variant, keyed by `"{kind}-{variant}"`.
///
/// Insertion order is preserved and is part of the search tie-break, so
/// lookups go through the index but iteration always walks `sections`.
#[derive(Debug, Default, Clone)]
pub struct SectionLibrary {
    sections: Vec<SectionMeta>,
    index: HashMap<String, usize>,
}

impl SectionLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// The library shipped with Folio
    pub fn builtin() -> Result<Self> {
        let mut library = Self::new();
        library.load_string(BUILTIN_SECTIONS)?;
        Ok(library)
    }

    /// Load sections from a directory of TOML files
    ///
    /// Expects `path/sections/*.toml` files
    pub fn load_from_directory<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut library = Self::new();
        library.load_directory(path)?;
        Ok(library)
    }

    /// Load a directory into this library (additive/override).
    ///
    /// Files are read in file-name order so registry order does not depend
    /// on the file system.
    pub fn load_directory<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let sections_path = path.as_ref().join("sections");
        if !sections_path.exists() {
            return Ok(());
        }

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(&sections_path)? {
            let file_path = entry?.path();
            if file_path.extension().map(|e| e == "toml").unwrap_or(false) {
                files.push(file_path);
            }
        }
        files.sort();

        for file_path in files {
            self.load_file(&file_path)?;
        }

        info!(
            path = %sections_path.display(),
            sections = self.len(),
            "loaded section library"
        );
        Ok(())
    }

    /// Load sections from a TOML file
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let content = fs::read_to_string(path)?;
        self.load_string(&content)
    }

    /// Load sections from a TOML string
    pub fn load_string(&mut self, content: &str) -> Result<()> {
        let file: SectionFile = toml::from_str(content).map_err(|e| {
            FolioError::LibraryLoadError(format!("Failed to parse section TOML: {}", e))
        })?;

        for definition in file.section {
            self.register(definition.into_meta());
        }

        Ok(())
    }

    /// Register a section directly. Re-registering a key replaces the
    /// entry but keeps its original position.
    pub fn register(&mut self, meta: SectionMeta) {
        let key = meta.key();
        match self.index.get(&key) {
            Some(&slot) => {
                debug!(key = %key, "replacing section variant");
                self.sections[slot] = meta;
            }
            None => {
                self.index.insert(key, self.sections.len());
                self.sections.push(meta);
            }
        }
    }

    /// Get a section by `"{kind}-{variant}"` key
    pub fn get(&self, key: &str) -> Option<&SectionMeta> {
        self.index.get(key).map(|&i| &self.sections[i])
    }

    pub fn get_variant(&self, kind: &str, variant: &str) -> Option<&SectionMeta> {
        self.get(&format!("{}-{}", kind, variant))
    }

    /// Insertion index of a key
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Variants of a kind, in registry order
    pub fn variants_of(&self, kind: &str) -> Vec<&SectionMeta> {
        self.sections.iter().filter(|m| m.kind == kind).collect()
    }

    pub fn has_kind(&self, kind: &str) -> bool {
        self.sections.iter().any(|m| m.kind == kind)
    }

    /// Distinct kinds, in first-registered order
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = Vec::new();
        for meta in &self.sections {
            if !kinds.contains(&meta.kind.as_str()) {
                kinds.push(&meta.kind);
            }
        }
        kinds
    }

    /// All sections in registry order
    pub fn all(&self) -> &[SectionMeta] {
        &self.sections
    }

    /// Get the number of registered variants
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the library is empty
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
