//! Build settings shared by the plan generator and the transform pipeline.

mod assets;
mod helpers;
mod replace;
mod templates;

pub use assets::AssetOptions;
pub use replace::ReplaceOptions;
pub use templates::{EntryTemplates, NAME_PLACEHOLDER};

pub(crate) use helpers::{default_entries, default_external_suffix};
