//! HTML fragments emitted for template injection. Nothing here is escaped.

mod legacy_loader;
mod tags;

pub use legacy_loader::legacy_loader_script;
pub use tags::{join_tags, modulepreload_link, module_script, stylesheet_link};
