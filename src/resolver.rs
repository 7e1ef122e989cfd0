//! Turning a manifest entry into the HTML fragments a server template needs.

use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::config::ResolverConfig;
use crate::error::{ManifestLoadError, ResolveError, ResolveResult};
use crate::html::{join_tags, legacy_loader_script, module_script, modulepreload_link, stylesheet_link};
use crate::manifest::{DEFAULT_MANIFEST_FILE, LegacyAssets, load_manifest, manifest_path};
use crate::messages::{Locale, Message};
use crate::models::{ResolvedOutput, ViteManifest};

/// Resolve `input` with the default manifest file name and English diagnostics.
///
/// In development mode the entry is served straight from the dev server at
/// `public_path + input`; otherwise `{out_dir}/manifest.json` is read.
pub fn resolve(
  input: &str,
  out_dir: impl AsRef<Path>,
  public_path: &str,
  is_dev: bool,
) -> ResolveResult<ResolvedOutput> {
  ManifestResolver::new(out_dir.as_ref())
    .with_public_path(public_path)
    .dev(is_dev)
    .resolve(input)
}

/// Configured resolver for one build directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestResolver {
  out_dir: PathBuf,
  manifest_file: String,
  public_path: String,
  dev: bool,
  locale: Locale,
}

impl Default for ManifestResolver {
  fn default() -> Self {
    Self {
      out_dir: PathBuf::new(),
      manifest_file: DEFAULT_MANIFEST_FILE.into(),
      public_path: "/".into(),
      dev: false,
      locale: Locale::En,
    }
  }
}

impl ManifestResolver {
  /// Resolver reading the manifest from `out_dir`.
  pub fn new(out_dir: impl Into<PathBuf>) -> Self {
    Self {
      out_dir: out_dir.into(),
      ..Self::default()
    }
  }

  /// Build a resolver from loaded configuration.
  pub fn from_config(config: &ResolverConfig) -> Self {
    Self {
      out_dir: PathBuf::from(&config.out_dir),
      manifest_file: config.manifest_file.clone(),
      public_path: config.public_path.clone(),
      dev: config.dev,
      locale: config.locale,
    }
  }

  /// Prefix prepended to every emitted URL, e.g. `/public/dist/` or a CDN origin.
  pub fn with_public_path(mut self, public_path: impl Into<String>) -> Self {
    self.public_path = public_path.into();
    self
  }

  /// Switch between dev-server passthrough and manifest resolution.
  pub fn dev(mut self, dev: bool) -> Self {
    self.dev = dev;
    self
  }

  /// Override the manifest file name inside the build directory.
  pub fn with_manifest_file(mut self, manifest_file: impl Into<String>) -> Self {
    self.manifest_file = manifest_file.into();
    self
  }

  /// Language used for diagnostics.
  pub fn with_locale(mut self, locale: Locale) -> Self {
    self.locale = locale;
    self
  }

  /// Build directory holding the manifest.
  pub fn out_dir(&self) -> &Path {
    &self.out_dir
  }

  /// URL prefix for emitted tags.
  pub fn public_path(&self) -> &str {
    &self.public_path
  }

  /// Whether the resolver bypasses the manifest.
  pub fn is_dev(&self) -> bool {
    self.dev
  }

  /// Language used for diagnostics.
  pub fn locale(&self) -> Locale {
    self.locale
  }

  /// Full path of the manifest this resolver reads in production mode.
  pub fn manifest_path(&self) -> PathBuf {
    manifest_path(&self.out_dir, &self.manifest_file)
  }

  /// Produce the `preload`, `css` and `js` fragments for `input`.
  pub fn resolve(&self, input: &str) -> ResolveResult<ResolvedOutput> {
    self.validate(input)?;
    if self.dev {
      return Ok(self.dev_output(input));
    }

    let path = self.manifest_path();
    let manifest = load_manifest(&path).map_err(|err| self.manifest_failure(err))?;
    render_entry(&manifest, input, &self.public_path)
  }

  /// Same as [`ManifestResolver::resolve`], reading the manifest through `tokio::fs`.
  #[cfg(feature = "async")]
  pub async fn resolve_async(&self, input: &str) -> ResolveResult<ResolvedOutput> {
    self.validate(input)?;
    if self.dev {
      return Ok(self.dev_output(input));
    }

    let path = self.manifest_path();
    let manifest = crate::manifest::load_manifest_async(&path)
      .await
      .map_err(|err| self.manifest_failure(err))?;
    render_entry(&manifest, input, &self.public_path)
  }

  fn validate(&self, input: &str) -> ResolveResult<()> {
    if input.is_empty() {
      return Err(ResolveError::InvalidArgument("input must not be empty"));
    }
    if self.public_path.is_empty() {
      return Err(ResolveError::InvalidArgument("public_path must not be empty"));
    }
    Ok(())
  }

  fn dev_output(&self, input: &str) -> ResolvedOutput {
    debug!(input, public_path = %self.public_path, "serving entry from dev server");
    ResolvedOutput {
      preload: String::new(),
      css: String::new(),
      js: module_script(&self.public_path, input),
    }
  }

  fn manifest_failure(&self, err: ManifestLoadError) -> ResolveError {
    error!(
      path = %err.path().display(),
      error = %err,
      "{}",
      Message::ManifestNotFound.text(self.locale)
    );
    ResolveError::ManifestNotFound(err)
  }
}

/// Render the fragments for `input` from an already loaded manifest.
pub fn render_entry(
  manifest: &ViteManifest,
  input: &str,
  public_path: &str,
) -> ResolveResult<ResolvedOutput> {
  let not_found = || ResolveError::EntryNotFound {
    entry: input.to_string(),
  };
  let entry = manifest.get(input).ok_or_else(not_found)?;
  let entry_file = entry.file().ok_or_else(not_found)?;
  debug!(
    input,
    src = entry.src.as_deref(),
    is_entry = entry.is_entry,
    file = entry_file,
    "resolved manifest entry"
  );

  let css = join_tags(
    entry
      .css
      .iter()
      .map(|file| stylesheet_link(public_path, file)),
  );

  let preload = join_tags(
    std::iter::once(input)
      .chain(entry.imports.iter().map(String::as_str))
      .filter_map(|key| manifest.get(key).and_then(|chunk| chunk.file()))
      .map(|file| modulepreload_link(public_path, file)),
  );

  let js = match LegacyAssets::lookup(manifest, input) {
    Some(legacy) => {
      debug!(
        input,
        legacy_entry = legacy.entry_file,
        polyfills = legacy.polyfills_file,
        "emitting legacy loader"
      );
      legacy_loader_script(public_path, entry_file, &legacy)
    }
    None => module_script(public_path, entry_file),
  };

  Ok(ResolvedOutput { preload, css, js })
}
