pub mod generate;
pub mod serve;
pub mod validate;

use anyhow::{Context, Result};
use clap::Args;
use florastack_core::config::{CONFIG_FILE_NAME, load_or_default, parse_site_toml};
use florastack_core::{Manifest, SiteConfig};
use std::path::PathBuf;

/// Output root and configuration shared by the site commands
#[derive(Args, Debug, Clone)]
pub struct SiteArgs {
    /// Directory the site is generated into
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Site configuration (default: <root>/florastack.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Default for SiteArgs {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            config: None,
        }
    }
}

impl SiteArgs {
    /// An explicit `--config` must exist; the implicit one is optional
    pub fn load_config(&self) -> Result<SiteConfig> {
        match &self.config {
            Some(path) => parse_site_toml(path)
                .with_context(|| format!("Failed to load {}", path.display())),
            None => {
                let path = self.root.join(CONFIG_FILE_NAME);
                load_or_default(&path)
                    .with_context(|| format!("Failed to load {}", path.display()))
            }
        }
    }

    pub fn build_manifest(&self) -> Result<(SiteConfig, Manifest)> {
        use chrono::Datelike;

        let config = self.load_config()?;
        let year = chrono::Local::now().year();
        let manifest = florastack_generator::build_manifest(&config, year)
            .context("Failed to build site manifest")?;
        Ok((config, manifest))
    }
}
