use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::domain::ItemPaths;
use crate::error::{LosscheckError, Result};

/// File naming conventions used to derive an item's three paths.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Naming {
    pub original_ext: String,
    pub codestream_ext: String,
    /// Appended to the item name; the reconstruction keeps the original's extension.
    pub reconstructed_suffix: String,
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            original_ext: "pgm".into(),
            codestream_ext: "codestream".into(),
            reconstructed_suffix: "-rec".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub input_root: PathBuf,
    pub results_root: PathBuf,
    pub items: Vec<String>,
    pub naming: Naming,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from("input"),
            results_root: PathBuf::from("results"),
            items: vec![
                "lena_ascii".into(),
                "baboon_ascii".into(),
                "quadrado_ascii".into(),
            ],
            naming: Naming::default(),
        }
    }
}

impl RunConfig {
    /// Load from a JSON file; absent fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let cfg: RunConfig = serde_json::from_str(&raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.naming.original_ext.is_empty() {
            return Err(LosscheckError::Config("original_ext must not be empty".into()));
        }
        if self.naming.codestream_ext.is_empty() {
            return Err(LosscheckError::Config("codestream_ext must not be empty".into()));
        }
        if self.naming.reconstructed_suffix.is_empty() {
            // would make the reconstruction path equal to the original's file name
            return Err(LosscheckError::Config(
                "reconstructed_suffix must not be empty".into(),
            ));
        }
        if let Some(bad) = self.items.iter().find(|n| n.is_empty() || n.contains(['/', '\\'])) {
            return Err(LosscheckError::Config(format!("invalid item name: {bad:?}")));
        }
        Ok(())
    }

    pub fn paths_for(&self, name: &str) -> ItemPaths {
        let n = &self.naming;
        ItemPaths {
            original: self.input_root.join(format!("{name}.{}", n.original_ext)),
            codestream: self.results_root.join(format!("{name}.{}", n.codestream_ext)),
            reconstructed: self.results_root.join(format!(
                "{name}{}.{}",
                n.reconstructed_suffix, n.original_ext
            )),
        }
    }

    /// Replace `items` with every original found directly under `input_root`.
    pub fn discover_items(&mut self) -> Result<()> {
        let ext = self.naming.original_ext.as_str();
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.input_root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                LosscheckError::Io(e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::other(format!(
                        "cannot walk {}",
                        self.input_root.display()
                    ))
                }))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let p = entry.path();
            if p.extension().and_then(|e| e.to_str()) != Some(ext) {
                continue;
            }
            match p.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => names.push(stem.to_string()),
                None => {
                    tracing::warn!(path = %p.display(), "skipping original with non-UTF-8 name")
                }
            }
        }
        names.sort();
        tracing::debug!(
            count = names.len(),
            root = %self.input_root.display(),
            "discovered items"
        );
        self.items = names;
        Ok(())
    }
}
