//! Validated navigation tree.
//!
//! Nodes are owned exclusively by their parent, so the structure is always a
//! tree. Children keep the order in which they were declared.

use serde::Serialize;

use crate::builder::normalize_slug;

/// Sidebar link to a content document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Display label.
    pub label: String,
    /// Content identifier, unique across the tree.
    pub slug: String,
}

/// Labelled group of child entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Display label.
    pub label: String,
    /// Whether the renderer should show the group collapsed by default.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub collapsed: bool,
    /// Child entries in declared order (never empty).
    pub children: Vec<NavigationNode>,
}

/// Placeholder whose entries come from a directory scan at render time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Autogenerate {
    /// Content directory to scan, relative to the docs root.
    pub directory: String,
    /// Whether generated groups start collapsed.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub collapsed: bool,
}

/// Sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavigationNode {
    /// Link to a document.
    Link(NavLink),
    /// Nested group.
    Group(NavGroup),
    /// Directory placeholder resolved by the renderer.
    Autogenerate(Autogenerate),
}

impl NavigationNode {
    /// Display label, if the node has one.
    ///
    /// Autogenerate placeholders are labelled by the renderer.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Link(link) => Some(&link.label),
            Self::Group(group) => Some(&group.label),
            Self::Autogenerate(_) => None,
        }
    }
}

/// Ordered sidebar tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationTree {
    nodes: Vec<NavigationNode>,
}

impl NavigationTree {
    /// Wrap already validated nodes.
    pub(crate) fn new(nodes: Vec<NavigationNode>) -> Self {
        Self { nodes }
    }

    /// Top-level entries in declared order.
    #[must_use]
    pub fn nodes(&self) -> &[NavigationNode] {
        &self.nodes
    }

    /// Whether the tree has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All link slugs in depth-first declared order.
    #[must_use]
    pub fn slugs(&self) -> Vec<&str> {
        let mut slugs = Vec::new();
        self.walk_links(&mut |link| slugs.push(link.slug.as_str()));
        slugs
    }

    /// Number of links in the tree.
    #[must_use]
    pub fn link_count(&self) -> usize {
        let mut count = 0;
        self.walk_links(&mut |_| count += 1);
        count
    }

    /// Find the link declared for a slug.
    ///
    /// The slug is compared in normalized form, so `"/glossary/"` finds the
    /// link declared as `"glossary"`.
    #[must_use]
    pub fn find_link(&self, slug: &str) -> Option<&NavLink> {
        self.find_with_trail(slug).map(|(link, _)| link)
    }

    /// Labels of the groups enclosing a link, outermost first.
    ///
    /// Returns `None` when the slug is not in the tree and an empty list for
    /// top-level links.
    #[must_use]
    pub fn group_trail(&self, slug: &str) -> Option<Vec<&str>> {
        self.find_with_trail(slug).map(|(_, trail)| trail)
    }

    fn find_with_trail(&self, slug: &str) -> Option<(&NavLink, Vec<&str>)> {
        fn search<'a>(
            nodes: &'a [NavigationNode],
            slug: &str,
            trail: &mut Vec<&'a str>,
        ) -> Option<&'a NavLink> {
            for node in nodes {
                match node {
                    NavigationNode::Link(link) if link.slug == slug => return Some(link),
                    NavigationNode::Group(group) => {
                        trail.push(&group.label);
                        if let Some(link) = search(&group.children, slug, trail) {
                            return Some(link);
                        }
                        trail.pop();
                    }
                    _ => {}
                }
            }
            None
        }

        let mut trail = Vec::new();
        search(&self.nodes, normalize_slug(slug), &mut trail).map(|link| (link, trail))
    }

    /// Visit every link depth-first.
    fn walk_links<'a>(&'a self, visit: &mut impl FnMut(&'a NavLink)) {
        fn walk<'a>(nodes: &'a [NavigationNode], visit: &mut impl FnMut(&'a NavLink)) {
            for node in nodes {
                match node {
                    NavigationNode::Link(link) => visit(link),
                    NavigationNode::Group(group) => walk(&group.children, visit),
                    NavigationNode::Autogenerate(_) => {}
                }
            }
        }

        walk(&self.nodes, visit);
    }
}
