//! Slug registry for a single build pass.

use std::collections::HashSet;

/// Error returned when a slug is registered twice in one pass.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Duplicate slug: {slug}")]
pub struct DuplicateSlugError {
    /// The slug that was already registered.
    pub slug: String,
}

/// Set of content identifiers declared during one navigation build.
///
/// A registry is scoped to a single build pass. Call [`reset`](Self::reset)
/// (or create a fresh instance) before each independent build; concurrent
/// builds need independent registries.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    slugs: HashSet<String>,
}

impl SlugRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a slug.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateSlugError`] if `slug` was already registered since
    /// the last reset.
    pub fn register(&mut self, slug: &str) -> Result<(), DuplicateSlugError> {
        if self.slugs.contains(slug) {
            return Err(DuplicateSlugError {
                slug: slug.to_owned(),
            });
        }
        self.slugs.insert(slug.to_owned());
        Ok(())
    }

    /// Forget every registered slug.
    pub fn reset(&mut self) {
        self.slugs.clear();
    }

    /// Check whether a slug is registered.
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.contains(slug)
    }

    /// Number of registered slugs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    /// Whether nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}
