//! Sidebar navigation for Folio.
//!
//! This crate provides:
//! - [`NodeSpec`]: Declarative sidebar entries as read from configuration
//! - [`TreeBuilder`]: Validating depth-first builder producing a [`NavigationTree`]
//! - [`SlugRegistry`]: Per-build tracking of content identifiers
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), folio_nav::NavError> {
//! use folio_nav::{NodeSpec, build_tree};
//!
//! let specs = vec![NodeSpec::group(
//!     "Introduction",
//!     vec![NodeSpec::link("The Vision", "introduction/vision")],
//! )];
//! let tree = build_tree(&specs)?;
//!
//! assert_eq!(tree.slugs(), vec!["introduction/vision"]);
//! # Ok(())
//! # }
//! ```
//!
//! Declared order is rendering order: the builder never sorts siblings.

mod builder;
mod node;
mod registry;

pub use builder::{NavError, NodeSpec, TreeBuilder, build_tree, normalize_slug};
pub use node::{Autogenerate, NavGroup, NavLink, NavigationNode, NavigationTree};
pub use registry::{DuplicateSlugError, SlugRegistry};
