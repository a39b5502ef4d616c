use std::path::Path;

use crate::error::Error;

/// Default allowlist shipped with the crate, used when no
/// `airflow_extras.txt` is present in the working directory.
const BUILTIN_EXTRAS: &str = include_str!("../assets/airflow_extras.txt");

/// The set of Airflow extras a request may select from.
///
/// Backed by a line-delimited resource: one extra per line, `#` starts a
/// comment line, blanks are skipped, file order is preserved.
#[derive(Debug, Clone)]
pub struct ExtrasCatalog {
    extras: Vec<String>,
}

impl ExtrasCatalog {
    pub fn parse(content: &str) -> Self {
        let extras = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_owned)
            .collect();
        Self { extras }
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::CatalogRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::parse(&content))
    }

    /// Load `<dir>/airflow_extras.txt` when present, else fall back to the
    /// embedded default list.
    pub fn load_or_builtin(dir: &Path) -> Result<Self, Error> {
        let path = dir.join("airflow_extras.txt");
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading extras catalog");
            Self::load(&path)
        } else {
            Ok(Self::builtin())
        }
    }

    pub fn builtin() -> Self {
        Self::parse(BUILTIN_EXTRAS)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.extras.iter().any(|e| e == name)
    }

    pub fn names(&self) -> &[String] {
        &self.extras
    }

    pub fn len(&self) -> usize {
        self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extras.is_empty()
    }
}
