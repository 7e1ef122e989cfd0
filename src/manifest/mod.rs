//! Reading `manifest.json` and the lookups performed against it.

mod legacy;
mod loading;

pub use legacy::{LEGACY_POLYFILLS_KEY, LegacyAssets, legacy_entry_key};
#[cfg(feature = "async")]
pub use loading::load_manifest_async;
pub use loading::{DEFAULT_MANIFEST_FILE, load_manifest, manifest_path, parse_manifest};
