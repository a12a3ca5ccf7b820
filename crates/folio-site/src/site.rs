//! Immutable site configuration and its assembly.

use folio_nav::NavigationTree;
use folio_plugins::PluginPipeline;
use serde::{Deserialize, Serialize};
use url::Url;

/// Declarative social link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinkSpec {
    /// Icon identifier understood by the theme (e.g. `github`).
    pub icon: String,
    /// Accessible label.
    pub label: String,
    /// Link target; must be an absolute URL.
    pub url: String,
}

/// Validated social link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Icon identifier.
    pub icon: String,
    /// Accessible label.
    pub label: String,
    /// Parsed absolute URL.
    pub url: Url,
}

/// Site metadata awaiting validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteMetadata {
    /// Site title.
    pub title: String,
    /// Path prefix for every link (e.g. `/docs`).
    pub base_path: Option<String>,
    /// Canonical site origin (e.g. `https://docs.example.com`).
    pub site: Option<String>,
    /// Social links in declared order.
    pub social: Vec<SocialLinkSpec>,
}

/// Error returned when site assembly fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssemblyError {
    /// Site title missing or blank.
    #[error("Site title cannot be empty")]
    EmptyTitle,
    /// URL that is not a well-formed absolute URL.
    #[error("Invalid URL: {url}")]
    InvalidUrl {
        /// URL as declared.
        url: String,
    },
    /// Base path that does not start with `/`, ends with `/`, or has empty segments.
    #[error("Invalid base path '{base_path}': must start with '/' and not end with '/'")]
    InvalidBasePath {
        /// Base path as declared.
        base_path: String,
    },
    /// Social link with a blank icon or label.
    #[error("Social link {position} has an empty {field}")]
    EmptySocialField {
        /// Zero-based position in the declared list.
        position: usize,
        /// Field name (`icon` or `label`).
        field: &'static str,
    },
    /// Navigation tree failed validation.
    #[error("Navigation error: {0}")]
    Navigation(#[from] folio_nav::NavError),
    /// Plugin pipeline failed validation.
    #[error("Plugin error: {0}")]
    Plugins(#[from] folio_plugins::PluginError),
}

/// Immutable site configuration consumed by the renderer.
///
/// Only constructed by [`assemble`]; there is no mutation API.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SiteConfig {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    base_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    site: Option<Url>,
    social: Vec<SocialLink>,
    navigation: NavigationTree,
    plugins: PluginPipeline,
}

impl SiteConfig {
    /// Site title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Link prefix without trailing separator, if any.
    #[must_use]
    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    /// Canonical site origin, if any.
    #[must_use]
    pub fn site(&self) -> Option<&Url> {
        self.site.as_ref()
    }

    /// Social links in declared order.
    #[must_use]
    pub fn social(&self) -> &[SocialLink] {
        &self.social
    }

    /// Sidebar tree.
    #[must_use]
    pub fn navigation(&self) -> &NavigationTree {
        &self.navigation
    }

    /// Plugins in application order.
    #[must_use]
    pub fn plugins(&self) -> &PluginPipeline {
        &self.plugins
    }

    /// Link target for a slug, prefixed with the base path.
    ///
    /// Returns `None` if no link in the tree declares `slug`.
    #[must_use]
    pub fn href(&self, slug: &str) -> Option<String> {
        let link = self.navigation.find_link(slug)?;
        let base = self.base_path.as_deref().unwrap_or("");
        Some(format!("{base}/{}/", link.slug))
    }
}

/// Validate site metadata and combine it with a built tree and pipeline.
///
/// # Errors
///
/// Returns [`AssemblyError`] for a blank title, a malformed base path, a
/// malformed or relative URL, or a social link with a blank field.
pub fn assemble(
    metadata: &SiteMetadata,
    navigation: NavigationTree,
    plugins: PluginPipeline,
) -> Result<SiteConfig, AssemblyError> {
    let title = metadata.title.trim();
    if title.is_empty() {
        return Err(AssemblyError::EmptyTitle);
    }

    let base_path = metadata
        .base_path
        .as_deref()
        .map(normalize_base_path)
        .transpose()?;

    let site = metadata.site.as_deref().map(parse_site_url).transpose()?;

    let social = metadata
        .social
        .iter()
        .enumerate()
        .map(|(position, spec)| validate_social_link(position, spec))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(
        title,
        links = navigation.link_count(),
        plugins = plugins.len(),
        "Assembled site configuration"
    );

    Ok(SiteConfig {
        title: title.to_owned(),
        base_path,
        site,
        social,
        navigation,
        plugins,
    })
}

/// Validate a base path: leading `/`, no trailing `/`, no empty segments.
fn normalize_base_path(base_path: &str) -> Result<String, AssemblyError> {
    let trimmed = base_path.trim();
    let invalid = || AssemblyError::InvalidBasePath {
        base_path: base_path.to_owned(),
    };

    let rest = trimmed.strip_prefix('/').ok_or_else(invalid)?;
    if rest.is_empty() || rest.split('/').any(str::is_empty) {
        return Err(invalid());
    }

    Ok(trimmed.to_owned())
}

/// Parse an absolute URL.
fn parse_absolute_url(url: &str) -> Result<Url, AssemblyError> {
    Url::parse(url.trim()).map_err(|_| AssemblyError::InvalidUrl {
        url: url.to_owned(),
    })
}

/// Parse the site origin, which must be served over http or https.
fn parse_site_url(url: &str) -> Result<Url, AssemblyError> {
    let parsed = parse_absolute_url(url)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AssemblyError::InvalidUrl {
            url: url.to_owned(),
        });
    }
    Ok(parsed)
}

fn validate_social_link(
    position: usize,
    spec: &SocialLinkSpec,
) -> Result<SocialLink, AssemblyError> {
    if spec.icon.trim().is_empty() {
        return Err(AssemblyError::EmptySocialField {
            position,
            field: "icon",
        });
    }
    if spec.label.trim().is_empty() {
        return Err(AssemblyError::EmptySocialField {
            position,
            field: "label",
        });
    }

    Ok(SocialLink {
        icon: spec.icon.clone(),
        label: spec.label.clone(),
        url: parse_social_url(&spec.url)?,
    })
}

/// Parse a social link target: a URL with a host, or a `mailto:` address.
///
/// Rejects host-less forms such as `github.com:withastro`, which parse with
/// `github.com` as the scheme.
fn parse_social_url(url: &str) -> Result<Url, AssemblyError> {
    let parsed = parse_absolute_url(url)?;
    if !parsed.has_host() && parsed.scheme() != "mailto" {
        return Err(AssemblyError::InvalidUrl {
            url: url.to_owned(),
        });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use folio_nav::{NodeSpec, build_tree};
    use folio_plugins::{PluginSpec, compose};
    use pretty_assertions::assert_eq;

    use super::*;

    fn metadata(title: &str) -> SiteMetadata {
        SiteMetadata {
            title: title.to_owned(),
            ..SiteMetadata::default()
        }
    }

    fn github(url: &str) -> SocialLinkSpec {
        SocialLinkSpec {
            icon: "github".to_owned(),
            label: "GitHub".to_owned(),
            url: url.to_owned(),
        }
    }

    fn sample_tree() -> NavigationTree {
        build_tree(&[NodeSpec::group(
            "Introduction",
            vec![NodeSpec::link("The Vision", "introduction/vision")],
        )])
        .unwrap()
    }

    /// Assemble with an empty tree and pipeline.
    fn assemble_metadata(metadata: &SiteMetadata) -> Result<SiteConfig, AssemblyError> {
        assemble(
            metadata,
            NavigationTree::default(),
            PluginPipeline::default(),
        )
    }

    #[test]
    fn test_assemble_minimal() {
        let site = assemble_metadata(&metadata("My Docs")).unwrap();

        assert_eq!(site.title(), "My Docs");
        assert!(site.base_path().is_none());
        assert!(site.site().is_none());
        assert!(site.social().is_empty());
    }

    #[test]
    fn test_assemble_trims_title() {
        let site = assemble_metadata(&metadata("  My Docs \n")).unwrap();

        assert_eq!(site.title(), "My Docs");
    }

    #[test]
    fn test_assemble_empty_title_fails() {
        let err = assemble_metadata(&metadata("   ")).unwrap_err();

        assert_eq!(err, AssemblyError::EmptyTitle);
    }

    #[test]
    fn test_assemble_social_link_invalid_url() {
        let meta = SiteMetadata {
            social: vec![github("not-a-url")],
            ..metadata("My Docs")
        };

        let err = assemble_metadata(&meta).unwrap_err();

        assert_eq!(
            err,
            AssemblyError::InvalidUrl {
                url: "not-a-url".to_owned()
            }
        );
    }

    #[test]
    fn test_assemble_social_link_valid_url() {
        let meta = SiteMetadata {
            social: vec![github("https://github.com/withastro/starlight")],
            ..metadata("My Docs")
        };

        let site = assemble_metadata(&meta).unwrap();

        assert_eq!(site.social().len(), 1);
        assert_eq!(site.social()[0].url.host_str(), Some("github.com"));
        assert_eq!(site.social()[0].icon, "github");
    }

    #[test]
    fn test_assemble_social_link_relative_url_fails() {
        let meta = SiteMetadata {
            social: vec![github("/about")],
            ..metadata("My Docs")
        };

        let err = assemble_metadata(&meta).unwrap_err();

        assert!(matches!(err, AssemblyError::InvalidUrl { ref url } if url == "/about"));
    }

    #[test]
    fn test_assemble_social_link_without_host_fails() {
        let meta = SiteMetadata {
            social: vec![github("github.com:withastro")],
            ..metadata("My Docs")
        };

        let err = assemble_metadata(&meta).unwrap_err();

        assert_eq!(
            err,
            AssemblyError::InvalidUrl {
                url: "github.com:withastro".to_owned()
            }
        );
    }

    #[test]
    fn test_assemble_social_link_mailto() {
        let meta = SiteMetadata {
            social: vec![SocialLinkSpec {
                icon: "email".to_owned(),
                label: "Contact".to_owned(),
                url: "mailto:docs@example.com".to_owned(),
            }],
            ..metadata("My Docs")
        };

        let site = assemble_metadata(&meta).unwrap();

        assert_eq!(site.social()[0].url.scheme(), "mailto");
    }

    #[test]
    fn test_assemble_social_link_empty_label_fails() {
        let meta = SiteMetadata {
            social: vec![
                github("https://github.com/example"),
                SocialLinkSpec {
                    label: String::new(),
                    ..github("https://github.com/example")
                },
            ],
            ..metadata("My Docs")
        };

        let err = assemble_metadata(&meta).unwrap_err();

        assert_eq!(
            err,
            AssemblyError::EmptySocialField {
                position: 1,
                field: "label"
            }
        );
    }

    #[test]
    fn test_base_path_valid() {
        assert_eq!(normalize_base_path("/docs").unwrap(), "/docs");
        assert_eq!(normalize_base_path("/team/docs").unwrap(), "/team/docs");
        assert_eq!(normalize_base_path(" /docs ").unwrap(), "/docs");
    }

    #[test]
    fn test_base_path_invalid() {
        for bad in ["docs", "/docs/", "/", "", "//docs", "/team//docs"] {
            let err = normalize_base_path(bad).unwrap_err();
            assert_eq!(
                err,
                AssemblyError::InvalidBasePath {
                    base_path: bad.to_owned()
                },
                "Expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn test_assemble_site_origin() {
        let meta = SiteMetadata {
            site: Some("https://docs.example.com".to_owned()),
            ..metadata("My Docs")
        };

        let site = assemble_metadata(&meta).unwrap();

        assert_eq!(
            site.site().map(Url::as_str),
            Some("https://docs.example.com/")
        );
    }

    #[test]
    fn test_assemble_site_origin_requires_http() {
        let meta = SiteMetadata {
            site: Some("ftp://docs.example.com".to_owned()),
            ..metadata("My Docs")
        };

        let err = assemble_metadata(&meta).unwrap_err();

        assert!(matches!(err, AssemblyError::InvalidUrl { .. }));
    }

    #[test]
    fn test_href_without_base_path() {
        let site = assemble(&metadata("My Docs"), sample_tree(), PluginPipeline::default()).unwrap();

        assert_eq!(
            site.href("introduction/vision").as_deref(),
            Some("/introduction/vision/")
        );
        assert!(site.href("missing").is_none());
    }

    #[test]
    fn test_href_normalizes_requested_slug() {
        let meta = SiteMetadata {
            base_path: Some("/docs".to_owned()),
            ..metadata("My Docs")
        };
        let tree = build_tree(&[NodeSpec::link("Glossary", "/glossary")]).unwrap();

        let site = assemble(&meta, tree, PluginPipeline::default()).unwrap();

        assert_eq!(site.href("glossary").as_deref(), Some("/docs/glossary/"));
        assert_eq!(site.href("/glossary/").as_deref(), Some("/docs/glossary/"));
        assert!(site.href("/").is_none());
    }

    #[test]
    fn test_href_with_base_path() {
        let meta = SiteMetadata {
            base_path: Some("/docs".to_owned()),
            ..metadata("My Docs")
        };

        let site = assemble(&meta, sample_tree(), PluginPipeline::default()).unwrap();

        assert_eq!(
            site.href("introduction/vision").as_deref(),
            Some("/docs/introduction/vision/")
        );
    }

    #[test]
    fn test_serialize_site_config() {
        let meta = SiteMetadata {
            social: vec![github("https://github.com/example")],
            ..metadata("My Docs")
        };
        let plugins = compose(&[PluginSpec::new("catppuccin")]).unwrap();

        let site = assemble(&meta, sample_tree(), plugins).unwrap();
        let json = serde_json::to_value(&site).unwrap();

        assert_eq!(json["title"], "My Docs");
        assert!(json.get("base_path").is_none());
        assert_eq!(json["social"][0]["url"], "https://github.com/example");
        assert_eq!(json["navigation"][0]["label"], "Introduction");
        assert_eq!(json["plugins"][0]["id"], "catppuccin");
    }

    static_assertions::assert_impl_all!(SiteConfig: Send, Sync, Clone);
}
