use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::defaults;
use crate::error::{Error, Result};

/// Run-time settings for a header rewrite.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteConfig {
    /// Directory the fixed target paths are resolved against.
    pub root: PathBuf,
    /// Transform in memory without writing anything back.
    pub dry_run: bool,
}

/// A target file: its fixed relative path and where it lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub relative: String,
    pub path: PathBuf,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            dry_run: false,
        }
    }
}

impl RewriteConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Reject a root that is not an existing directory.
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_dir() {
            return Err(Error::validation_invalid_argument(
                "root",
                format!("Root '{}' is not a directory", self.root.display()),
                Some(self.root.display().to_string()),
            ));
        }
        Ok(())
    }

    /// The two fixed target files, resolved against `root`.
    pub fn targets(&self) -> Vec<Target> {
        defaults::TARGET_FILES
            .iter()
            .map(|relative| Target {
                relative: relative.to_string(),
                path: resolve(&self.root, relative),
            })
            .collect()
    }
}

fn resolve(root: &Path, relative: &str) -> PathBuf {
    if root == Path::new(".") {
        PathBuf::from(relative)
    } else {
        root.join(relative)
    }
}
