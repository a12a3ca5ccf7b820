//! Configuration loading for Folio.
//!
//! Parses `folio.toml` (or `folio.json`) site descriptions with serde and
//! provides auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `base`
//! - `site`
//! - `social[].url`

mod expand;

use std::path::{Path, PathBuf};

use folio_site::{AssemblyError, SiteConfig, SiteSpec};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site title.
    pub title: Option<String>,
    /// Override base path.
    pub base: Option<String>,
    /// Override site origin.
    pub site: Option<String>,
}

/// Configuration filenames to search for, in priority order.
const CONFIG_FILENAMES: [&str; 2] = ["folio.toml", "folio.json"];

/// Loaded site configuration source.
#[derive(Debug)]
pub struct Config {
    site: SiteSpec,
    config_path: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`social[0].url`").
        field: String,
        /// Error message (e.g., "${`DOCS_REPO`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` or `folio.json` in the current
    /// directory and its parents.
    ///
    /// CLI settings are applied after environment expansion, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if no config file is found, or reading, parsing or
    /// expansion fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir()?;
        Self::load_from(&cwd, config_path, cli_settings)
    }

    /// [`load`](Self::load) with discovery starting at `cwd`.
    fn load_from(
        cwd: &Path,
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            path.to_path_buf()
        } else {
            Self::discover_config(cwd)
                .ok_or_else(|| ConfigError::NotFound(PathBuf::from(CONFIG_FILENAMES[0])))?
        };

        let mut config = Self::load_from_file(&path)?;

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Declarative site description.
    #[must_use]
    pub fn site_spec(&self) -> &SiteSpec {
        &self.site
    }

    /// Path of the loaded config file.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Build the immutable site configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError`] if the description fails validation.
    pub fn build(&self) -> Result<SiteConfig, AssemblyError> {
        self.site.build()
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(title) = &settings.title {
            self.site.title.clone_from(title);
        }
        if let Some(base) = &settings.base {
            self.site.base = Some(base.clone());
        }
        if let Some(site) = &settings.site {
            self.site.site = Some(site.clone());
        }
    }

    /// Search for a config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_FILENAMES {
                let candidate = current.join(name);
                if candidate.exists() {
                    return Some(candidate);
                }
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut site = Self::parse(path, &content)?;

        expand_env_vars(&mut site)?;

        tracing::debug!(path = %path.display(), "Loaded site configuration");

        Ok(Self {
            site,
            config_path: path.to_path_buf(),
        })
    }

    /// Parse content by file extension (`.json` or TOML).
    fn parse(path: &Path, content: &str) -> Result<SiteSpec, ConfigError> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }
}

/// Expand environment variable references in configuration strings.
fn expand_env_vars(site: &mut SiteSpec) -> Result<(), ConfigError> {
    if let Some(ref base) = site.base {
        site.base = Some(expand::expand_env(base, "base")?);
    }
    if let Some(ref origin) = site.site {
        site.site = Some(expand::expand_env(origin, "site")?);
    }
    for (i, link) in site.social.iter_mut().enumerate() {
        link.url = expand::expand_env(&link.url, &format!("social[{i}].url"))?;
    }
    Ok(())
}
