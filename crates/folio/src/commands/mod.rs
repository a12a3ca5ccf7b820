//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod dump;

use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_site::SiteConfig;

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use dump::DumpArgs;

/// Config location and overrides shared by all commands.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site title (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Base path prefixed to every link (overrides config).
    #[arg(long, env = "FOLIO_BASE")]
    base: Option<String>,

    /// Canonical site origin (overrides config).
    #[arg(long, env = "FOLIO_SITE")]
    site: Option<String>,
}

impl ConfigArgs {
    /// Load the config file and run a full build pass.
    pub(crate) fn build(self) -> Result<(Config, SiteConfig), CliError> {
        let cli_settings = CliSettings {
            title: self.title,
            base: self.base,
            site: self.site,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let site = config.build()?;

        Ok((config, site))
    }
}
