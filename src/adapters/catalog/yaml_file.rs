//! YAML catalog file adapter
//!
//! Reads a skill list from disk:
//!
//! ```yaml
//! - name: Connector
//!   emoji: "🤝"
//!   description: Be the bridge between people or groups.
//! - name: Maker
//! ```
//!
//! `emoji` and `description` are optional.

use std::path::{Path, PathBuf};

use crate::domain::catalog::{Catalog, Skill};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::CatalogSource;

/// Catalog read from a YAML file
#[derive(Debug, Clone)]
pub struct YamlCatalogFile {
    path: PathBuf,
}

impl YamlCatalogFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for YamlCatalogFile {
    fn load(&self) -> Result<Catalog, DomainError> {
        let path = self.path.display().to_string();

        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            DomainError::new(ErrorCode::CatalogUnavailable, e.to_string())
                .with_detail("path", path.clone())
        })?;

        let skills: Vec<Skill> = serde_yaml::from_str(&text).map_err(|e| {
            DomainError::new(ErrorCode::CatalogMalformed, e.to_string())
                .with_detail("path", path.clone())
        })?;

        let catalog = Catalog::new(skills)
            .map_err(|e| DomainError::from(e).with_detail("path", path.clone()))?;

        tracing::debug!(path = %path, skills = catalog.len(), "Catalog file loaded");
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
