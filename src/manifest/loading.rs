//! Loading the Vite manifest from the build directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ManifestLoadError;
use crate::models::ViteManifest;

/// File name Vite writes its manifest to inside the build directory.
pub const DEFAULT_MANIFEST_FILE: &str = "manifest.json";

/// Location of the manifest file for a build directory.
///
/// An empty `out_dir` resolves relative to the current working directory.
pub fn manifest_path(out_dir: &Path, manifest_file: &str) -> PathBuf {
  out_dir.join(manifest_file)
}

/// Parse manifest JSON that was already read from `path`.
pub fn parse_manifest(path: &Path, content: &str) -> Result<ViteManifest, ManifestLoadError> {
  serde_json::from_str(content).map_err(|source| ManifestLoadError::Parse {
    path: path.to_path_buf(),
    source,
  })
}

/// Read and parse the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<ViteManifest, ManifestLoadError> {
  let content = fs::read_to_string(path).map_err(|source| ManifestLoadError::Io {
    path: path.to_path_buf(),
    source,
  })?;
  parse_manifest(path, &content)
}

/// Read and parse the manifest at `path` without blocking the runtime.
#[cfg(feature = "async")]
pub async fn load_manifest_async(path: &Path) -> Result<ViteManifest, ManifestLoadError> {
  let content = tokio::fs::read_to_string(path)
    .await
    .map_err(|source| ManifestLoadError::Io {
      path: path.to_path_buf(),
      source,
    })?;
  parse_manifest(path, &content)
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn joins_manifest_file_onto_out_dir() {
    assert_eq!(
      manifest_path(Path::new("/srv/app/dist"), DEFAULT_MANIFEST_FILE),
      PathBuf::from("/srv/app/dist/manifest.json")
    );
    assert_eq!(
      manifest_path(Path::new(""), DEFAULT_MANIFEST_FILE),
      PathBuf::from("manifest.json")
    );
  }

  #[test]
  fn loads_manifest_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DEFAULT_MANIFEST_FILE);
    fs::write(&path, r#"{ "src/main.ts": { "file": "assets/main.js" } }"#).unwrap();

    let manifest = load_manifest(&path).unwrap();
    assert_eq!(manifest["src/main.ts"].file(), Some("assets/main.js"));
  }

  #[test]
  fn reports_missing_file_as_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join(DEFAULT_MANIFEST_FILE);

    let err = load_manifest(&path).unwrap_err();
    assert!(matches!(err, ManifestLoadError::Io { .. }));
    assert_eq!(err.path(), &path);
  }

  #[test]
  fn reports_invalid_json_as_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DEFAULT_MANIFEST_FILE);
    fs::write(&path, "{ not json").unwrap();

    let err = load_manifest(&path).unwrap_err();
    assert!(matches!(err, ManifestLoadError::Parse { .. }));
  }
}
