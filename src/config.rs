//! Resolver configuration loaded from a JSON file next to the server project.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::manifest::DEFAULT_MANIFEST_FILE;
use crate::messages::Locale;

/// Configuration file searched for by [`ResolverConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "manifest-html.config.json";

/// Settings shared by every resolution in a project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
  /// Build directory containing the manifest.
  pub out_dir: String,
  /// Prefix prepended to every emitted URL.
  pub public_path: String,
  /// Serve entries from the dev server instead of reading the manifest.
  pub dev: bool,
  /// Manifest file name relative to `out_dir`.
  pub manifest_file: String,
  /// Language used for diagnostics.
  pub locale: Locale,
}

impl Default for ResolverConfig {
  fn default() -> Self {
    Self {
      out_dir: String::new(),
      public_path: "/".into(),
      dev: false,
      manifest_file: DEFAULT_MANIFEST_FILE.into(),
      locale: Locale::En,
    }
  }
}

impl ResolverConfig {
  /// Attempt to load configuration from the provided directory.
  ///
  /// Missing or unparsable files fall back to the defaults. A relative `outDir`
  /// is taken relative to `dir`.
  pub fn discover(dir: &Path) -> Self {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    match Self::from_path(&candidate) {
      Some(config) => config.relative_to(dir),
      None => {
        tracing::debug!(path = %candidate.display(), "no resolver config, using defaults");
        Self::default()
      }
    }
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
      Ok(config) => Some(config),
      Err(err) => {
        tracing::warn!(path = %path.display(), error = %err, "ignoring invalid resolver config");
        None
      }
    }
  }

  /// Anchor a relative, non-empty `out_dir` at `base`.
  pub fn relative_to(mut self, base: &Path) -> Self {
    if !self.out_dir.is_empty() && Path::new(&self.out_dir).is_relative() {
      self.out_dir = base.join(&self.out_dir).to_string_lossy().into_owned();
    }
    self
  }

  /// Path of the manifest this configuration points at.
  pub fn manifest_path(&self) -> PathBuf {
    Path::new(&self.out_dir).join(&self.manifest_file)
  }
}
