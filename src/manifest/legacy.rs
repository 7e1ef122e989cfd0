//! Lookups for the chunks emitted by `@vitejs/plugin-legacy`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::ViteManifest;

/// Manifest key under which the legacy plugin registers its polyfill bundle.
pub const LEGACY_POLYFILLS_KEY: &str = "vite/legacy-polyfills-legacy";

static SCRIPT_EXTENSION: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\.(?:jsx?|tsx?)$").expect("invalid script extension regex"));

/// Manifest key of the legacy build of `input`, e.g. `main.ts` -> `main-legacy.ts`.
///
/// Returns `None` when `input` does not end in `.js`, `.jsx`, `.ts` or `.tsx`.
pub fn legacy_entry_key(input: &str) -> Option<String> {
  if !SCRIPT_EXTENSION.is_match(input) {
    return None;
  }
  match SCRIPT_EXTENSION.replace(input, "-legacy$0") {
    Cow::Owned(key) => Some(key),
    Cow::Borrowed(_) => None,
  }
}

/// Output files needed to boot the legacy bundle of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyAssets<'a> {
  /// Legacy (SystemJS) build of the entry.
  pub entry_file: &'a str,
  /// Polyfill bundle that must load before the legacy entry.
  pub polyfills_file: &'a str,
}

impl<'a> LegacyAssets<'a> {
  /// Both the legacy entry and the polyfills must be present with a `file`.
  pub fn lookup(manifest: &'a ViteManifest, input: &str) -> Option<Self> {
    let entry_file = legacy_entry_key(input)
      .and_then(|key| manifest.get(&key))
      .and_then(|entry| entry.file())?;
    let polyfills_file = manifest
      .get(LEGACY_POLYFILLS_KEY)
      .and_then(|entry| entry.file())?;
    Some(Self {
      entry_file,
      polyfills_file,
    })
  }
}
