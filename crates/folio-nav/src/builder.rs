//! Navigation tree building from declarative sidebar entries.
//!
//! [`TreeBuilder`] walks a list of [`NodeSpec`] depth-first, validating each
//! entry and registering link slugs in its [`SlugRegistry`]. The first
//! failure aborts the build; no partial tree is returned.

use serde::{Deserialize, Serialize};

use crate::node::{Autogenerate, NavGroup, NavLink, NavigationNode, NavigationTree};
use crate::registry::{DuplicateSlugError, SlugRegistry};

/// Declarative sidebar entry as read from configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeSpec {
    /// Link to a content document.
    Link {
        /// Display label.
        label: String,
        /// Content identifier.
        slug: String,
    },
    /// Group of nested entries.
    Group {
        /// Display label.
        label: String,
        /// Start collapsed.
        #[serde(default)]
        collapsed: bool,
        /// Child entries.
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
    /// Entries generated from a content directory by the renderer.
    Autogenerate {
        /// Directory to scan.
        directory: String,
        /// Start collapsed.
        #[serde(default)]
        collapsed: bool,
    },
}

impl NodeSpec {
    /// Link entry.
    pub fn link(label: impl Into<String>, slug: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            slug: slug.into(),
        }
    }

    /// Expanded group entry.
    pub fn group(label: impl Into<String>, children: Vec<NodeSpec>) -> Self {
        Self::Group {
            label: label.into(),
            collapsed: false,
            children,
        }
    }

    /// Autogenerated directory entry.
    pub fn autogenerate(directory: impl Into<String>) -> Self {
        Self::Autogenerate {
            directory: directory.into(),
            collapsed: false,
        }
    }
}

/// Error returned when a navigation tree fails validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// Two links share a slug.
    #[error(transparent)]
    DuplicateSlug(#[from] DuplicateSlugError),
    /// Group declared without children.
    #[error("Navigation group '{label}' has no entries")]
    EmptyGroup {
        /// Label of the empty group.
        label: String,
    },
    /// Autogenerate entry without a directory.
    #[error("Autogenerate entry has invalid directory '{path}'")]
    InvalidAutogenerate {
        /// Directory as declared.
        path: String,
    },
    /// Link or group declared without a label.
    #[error("Navigation {kind} is missing a label")]
    EmptyLabel {
        /// Entry kind (`link` or `group`).
        kind: &'static str,
    },
    /// Link declared without a slug.
    #[error("Navigation link '{label}' is missing a slug")]
    EmptySlug {
        /// Label of the link.
        label: String,
    },
}

/// Builder for validated [`NavigationTree`] instances.
///
/// Owns the [`SlugRegistry`] for its passes. The registry is reset at the
/// start of every [`build`](Self::build), so one builder can be reused for
/// independent builds but must not be shared between concurrent ones.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    registry: SlugRegistry,
}

impl TreeBuilder {
    /// Create a builder with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from declarative entries.
    ///
    /// # Errors
    ///
    /// Returns the first [`NavError`] found in depth-first declared order.
    pub fn build(&mut self, specs: &[NodeSpec]) -> Result<NavigationTree, NavError> {
        self.registry.reset();

        let nodes = self.build_nodes(specs)?;
        let tree = NavigationTree::new(nodes);

        tracing::debug!(
            entries = tree.nodes().len(),
            links = self.registry.len(),
            "Built navigation tree"
        );

        Ok(tree)
    }

    fn build_nodes(&mut self, specs: &[NodeSpec]) -> Result<Vec<NavigationNode>, NavError> {
        specs.iter().map(|spec| self.build_node(spec)).collect()
    }

    fn build_node(&mut self, spec: &NodeSpec) -> Result<NavigationNode, NavError> {
        match spec {
            NodeSpec::Link { label, slug } => {
                if label.trim().is_empty() {
                    return Err(NavError::EmptyLabel { kind: "link" });
                }
                let slug = normalize_slug(slug);
                if slug.is_empty() {
                    return Err(NavError::EmptySlug {
                        label: label.clone(),
                    });
                }
                self.registry.register(slug)?;

                Ok(NavigationNode::Link(NavLink {
                    label: label.clone(),
                    slug: slug.to_owned(),
                }))
            }
            NodeSpec::Group {
                label,
                collapsed,
                children,
            } => {
                if label.trim().is_empty() {
                    return Err(NavError::EmptyLabel { kind: "group" });
                }
                if children.is_empty() {
                    return Err(NavError::EmptyGroup {
                        label: label.clone(),
                    });
                }

                Ok(NavigationNode::Group(NavGroup {
                    label: label.clone(),
                    collapsed: *collapsed,
                    children: self.build_nodes(children)?,
                }))
            }
            NodeSpec::Autogenerate {
                directory,
                collapsed,
            } => {
                if directory.trim().is_empty() {
                    return Err(NavError::InvalidAutogenerate {
                        path: directory.clone(),
                    });
                }

                Ok(NavigationNode::Autogenerate(Autogenerate {
                    directory: directory.clone(),
                    collapsed: *collapsed,
                }))
            }
        }
    }
}

/// Canonical form of a slug: surrounding whitespace and `/` removed.
///
/// `" glossary "`, `"/glossary"` and `"glossary/"` all name `"glossary"`.
#[must_use]
pub fn normalize_slug(slug: &str) -> &str {
    slug.trim().trim_matches('/').trim()
}

/// Build a tree with a fresh registry.
///
/// # Errors
///
/// See [`TreeBuilder::build`].
pub fn build_tree(specs: &[NodeSpec]) -> Result<NavigationTree, NavError> {
    TreeBuilder::new().build(specs)
}
