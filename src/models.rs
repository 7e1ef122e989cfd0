//! Data structures read from the Vite manifest and produced by resolution.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Parsed `manifest.json`: entry key (source-relative path) to descriptor.
pub type ViteManifest = HashMap<String, EntryDescriptor>;

/// A single chunk description from the Vite manifest.
///
/// Parsing never fails: a value that is not an object, or fields of the wrong
/// type, leave the corresponding data empty so one malformed chunk cannot break
/// lookups of the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDescriptor {
  /// Built, hashed output path relative to the build directory.
  pub file: Option<String>,
  /// Source path the chunk was built from.
  pub src: Option<String>,
  /// Whether Vite flagged the chunk as an entry point.
  pub is_entry: bool,
  /// Stylesheet output paths, in emission order.
  pub css: Vec<String>,
  /// Other manifest keys that should be preloaded with this chunk.
  pub imports: Vec<String>,
}

impl EntryDescriptor {
  /// Output file, ignoring empty strings.
  pub fn file(&self) -> Option<&str> {
    self.file.as_deref().filter(|file| !file.is_empty())
  }

  fn from_value(value: Value) -> Self {
    let Value::Object(mut fields) = value else {
      return Self::default();
    };
    Self {
      file: fields.remove("file").and_then(string_value),
      src: fields.remove("src").and_then(string_value),
      is_entry: fields
        .get("isEntry")
        .and_then(Value::as_bool)
        .unwrap_or(false),
      css: fields.remove("css").map(string_list).unwrap_or_default(),
      imports: fields.remove("imports").map(string_list).unwrap_or_default(),
    }
  }
}

impl<'de> Deserialize<'de> for EntryDescriptor {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    Value::deserialize(deserializer).map(Self::from_value)
  }
}

fn string_value(value: Value) -> Option<String> {
  match value {
    Value::String(text) => Some(text),
    _ => None,
  }
}

/// Anything other than an array counts as an empty list; non-string items are dropped.
fn string_list(value: Value) -> Vec<String> {
  match value {
    Value::Array(items) => items.into_iter().filter_map(string_value).collect(),
    _ => Vec::new(),
  }
}

/// HTML fragments rendered for a single entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOutput {
  /// Space separated `<link rel="modulepreload">` tags.
  pub preload: String,
  /// Space separated `<link rel="stylesheet">` tags.
  pub css: String,
  /// Script markup that boots the entry.
  pub js: String,
}
