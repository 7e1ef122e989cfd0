#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod html;
pub mod manifest;
pub mod messages;
pub mod models;
pub mod resolver;

pub use config::ResolverConfig;
pub use error::{ManifestLoadError, ResolveError, ResolveResult};
pub use messages::Locale;
pub use models::{EntryDescriptor, ResolvedOutput, ViteManifest};
pub use resolver::{ManifestResolver, render_entry, resolve};
