//! Error types returned while resolving manifest entries.

use std::path::PathBuf;

use thiserror::Error;

use crate::messages::{Locale, Message};

/// Result alias used across the crate.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Why the underlying manifest could not be loaded.
#[derive(Debug, Error)]
pub enum ManifestLoadError {
  /// The file could not be read.
  #[error("failed to read {path}: {source}")]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// The file was read but is not a valid manifest.
  #[error("failed to parse {path}: {source}")]
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
}

impl ManifestLoadError {
  /// Path of the manifest that failed to load.
  pub fn path(&self) -> &PathBuf {
    match self {
      ManifestLoadError::Io { path, .. } | ManifestLoadError::Parse { path, .. } => path,
    }
  }
}

/// Failures surfaced by [`crate::ManifestResolver`].
#[derive(Debug, Error)]
pub enum ResolveError {
  /// `input` or `public_path` was empty.
  #[error("Invalid parameters: {0}")]
  InvalidArgument(&'static str),

  /// The manifest could not be read or parsed.
  #[error("In the production environment, the manifest.json file was not found")]
  ManifestNotFound(#[source] ManifestLoadError),

  /// The requested entry has no usable descriptor in the manifest.
  #[error("Entry not found in the manifest.json file: {entry}")]
  EntryNotFound {
    /// Entry key that was looked up.
    entry: String,
  },
}

impl ResolveError {
  fn message(&self) -> Message {
    match self {
      ResolveError::InvalidArgument(_) => Message::InvalidArgument,
      ResolveError::ManifestNotFound(_) => Message::ManifestNotFound,
      ResolveError::EntryNotFound { .. } => Message::EntryNotFound,
    }
  }

  /// Short user-facing message in the requested locale.
  pub fn localized(&self, locale: Locale) -> &'static str {
    self.message().text(locale)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn localizes_entry_not_found() {
    let err = ResolveError::EntryNotFound {
      entry: "src/app/main.ts".into(),
    };
    assert_eq!(err.localized(Locale::ZhCn), "manifest.json文件中未发现入口");
    assert!(err.to_string().contains("src/app/main.ts"));
  }

  #[test]
  fn manifest_not_found_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err = ResolveError::ManifestNotFound(ManifestLoadError::Io {
      path: PathBuf::from("dist/manifest.json"),
      source: io,
    });
    let source = std::error::Error::source(&err).expect("source is kept");
    assert!(source.to_string().contains("dist/manifest.json"));
    assert_eq!(err.localized(Locale::En), Message::ManifestNotFound.text(Locale::En));
  }
}
