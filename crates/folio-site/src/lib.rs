//! Site configuration assembly for Folio.
//!
//! Combines site metadata, a validated [`NavigationTree`] and a composed
//! [`PluginPipeline`] into one immutable [`SiteConfig`] for the external
//! renderer.
//!
//! # Architecture
//!
//! - [`SiteSpec`]: the whole declarative input, as loaded from configuration
//! - [`SiteSpec::build`]: one full pass (tree, pipeline, assembly)
//! - [`assemble`]: metadata validation and final composition
//!
//! A failure anywhere in the pass aborts it; no partial [`SiteConfig`] is
//! ever returned. A changed configuration is always a new build.
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), folio_site::AssemblyError> {
//! use folio_nav::NodeSpec;
//! use folio_site::SiteSpec;
//!
//! let spec = SiteSpec {
//!     title: "My Docs".to_owned(),
//!     base: Some("/docs".to_owned()),
//!     navigation: vec![NodeSpec::group(
//!         "Introduction",
//!         vec![NodeSpec::link("The Vision", "introduction/vision")],
//!     )],
//!     ..SiteSpec::default()
//! };
//! let site = spec.build()?;
//!
//! assert_eq!(
//!     site.href("introduction/vision").as_deref(),
//!     Some("/docs/introduction/vision/")
//! );
//! # Ok(())
//! # }
//! ```

mod site;
mod spec;

pub use site::{AssemblyError, SiteConfig, SiteMetadata, SocialLink, SocialLinkSpec, assemble};
pub use spec::SiteSpec;

// Re-export component types for convenience
pub use folio_nav::{NavError, NavigationNode, NavigationTree, NodeSpec};
pub use folio_plugins::{PluginConfig, PluginError, PluginPipeline, PluginSpec};
