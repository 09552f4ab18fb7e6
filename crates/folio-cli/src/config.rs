//! folio.toml configuration

use anyhow::{Context, Result};
use folio_assemble::AssembleOptions;
use folio_library::SectionLibrary;
use folio_score::ScoreWeights;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const DEFAULT_CONFIG: &str = "folio.toml";

/// Project configuration. Every table and field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub assemble: AssembleOptions,
    pub weights: ScoreWeights,
    pub library: LibraryConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Library directories, loaded in order; later keys replace earlier ones
    pub dirs: Vec<String>,
}

impl FolioConfig {
    /// Load `path`, or `./folio.toml` when it exists, or the defaults
    pub fn load(path: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG).exists() => DEFAULT_CONFIG,
            None => return Ok(Self::default()),
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path))?;
        let config = Self::parse(&text).with_context(|| format!("Invalid config: {}", path))?;
        debug!(path, "loaded config");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// The `--library` directory if given, else the configured directories,
    /// else the built-in library
    pub fn load_library(&self, dir: Option<&str>) -> Result<SectionLibrary> {
        let dirs: Vec<&str> = match dir {
            Some(dir) => vec![dir],
            None => self.library.dirs.iter().map(String::as_str).collect(),
        };
        if dirs.is_empty() {
            return SectionLibrary::builtin().context("Failed to load built-in library");
        }

        let mut library = SectionLibrary::new();
        for path in dirs {
            library
                .load_directory(path)
                .with_context(|| format!("Failed to load section library: {}", path))?;
        }
        if library.is_empty() {
            anyhow::bail!("No sections found under {}/sections", dirs_label(dir, &self.library.dirs));
        }
        Ok(library)
    }
}

fn dirs_label(dir: Option<&str>, configured: &[String]) -> String {
    match dir {
        Some(dir) => dir.to_string(),
        None => configured.join(", "),
    }
}
