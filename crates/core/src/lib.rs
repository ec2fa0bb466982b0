pub mod config;
pub mod error;
pub mod manifest;
pub mod path;
pub mod types;

pub use config::{load_or_default, parse_site_toml};
pub use error::{Error, Result};
pub use manifest::{Manifest, ManifestEntry, WriteResult};
pub use types::*;
