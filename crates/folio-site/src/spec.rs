//! Declarative site input.

use folio_nav::{NodeSpec, TreeBuilder};
use folio_plugins::{PluginSpec, compose};
use serde::{Deserialize, Serialize};

use crate::site::{AssemblyError, SiteConfig, SiteMetadata, SocialLinkSpec, assemble};

/// Complete declarative site description.
///
/// Field names match the configuration file keys.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSpec {
    /// Site title.
    pub title: String,
    /// Link prefix (e.g. `/docs`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Canonical site origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    /// Social links.
    #[serde(default)]
    pub social: Vec<SocialLinkSpec>,
    /// Sidebar entries.
    #[serde(default)]
    pub navigation: Vec<NodeSpec>,
    /// Rendering plugins in application order.
    #[serde(default)]
    pub plugins: Vec<PluginSpec>,
}

impl SiteSpec {
    /// Run a full build pass with a fresh slug registry.
    ///
    /// # Errors
    ///
    /// Returns the first [`AssemblyError`] from tree building, plugin
    /// composition, or metadata validation.
    pub fn build(&self) -> Result<SiteConfig, AssemblyError> {
        self.build_with(&mut TreeBuilder::new())
    }

    /// Run a full build pass reusing a tree builder.
    ///
    /// The builder resets its registry first, so earlier passes do not
    /// affect this one.
    ///
    /// # Errors
    ///
    /// See [`build`](Self::build).
    pub fn build_with(&self, builder: &mut TreeBuilder) -> Result<SiteConfig, AssemblyError> {
        let navigation = builder.build(&self.navigation)?;
        let plugins = compose(&self.plugins)?;
        assemble(&self.metadata(), navigation, plugins)
    }

    /// Metadata portion of this `SiteSpec`.
    #[must_use]
    pub fn metadata(&self) -> SiteMetadata {
        SiteMetadata {
            title: self.title.clone(),
            base_path: self.base.clone(),
            site: self.site.clone(),
            social: self.social.clone(),
        }
    }
}
