//! `folio check` command implementation.

use clap::Args;
use folio_site::{NavigationNode, SiteConfig};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Print the sidebar outline.
    #[arg(long)]
    outline: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (config, site) = self.config.build()?;

        output.info(&format!("Config: {}", config.config_path().display()));
        output.highlight(site.title());
        if let Some(base) = site.base_path() {
            output.info(&format!("Base path: {base}"));
        }
        if let Some(origin) = site.site() {
            output.info(&format!("Site: {origin}"));
        }
        output.info(&format!(
            "Navigation: {} entries, {} links",
            site.navigation().nodes().len(),
            site.navigation().link_count()
        ));
        output.info(&plugin_summary(&site));

        if self.outline {
            for line in outline(&site) {
                output.detail(&line);
            }
        }

        output.success("Configuration is valid");
        Ok(())
    }
}

/// One-line plugin summary in application order.
fn plugin_summary(site: &SiteConfig) -> String {
    if site.plugins().is_empty() {
        "Plugins: none".to_owned()
    } else {
        format!("Plugins: {}", site.plugins().ids().join(" -> "))
    }
}

/// Indented sidebar outline with resolved link targets.
fn outline(site: &SiteConfig) -> Vec<String> {
    fn walk(site: &SiteConfig, nodes: &[NavigationNode], depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        for node in nodes {
            match node {
                NavigationNode::Link(link) => {
                    let href = site.href(&link.slug).unwrap_or_default();
                    lines.push(format!("{indent}{} -> {href}", link.label));
                }
                NavigationNode::Group(group) => {
                    lines.push(format!("{indent}{}/", group.label));
                    walk(site, &group.children, depth + 1, lines);
                }
                NavigationNode::Autogenerate(auto) => {
                    lines.push(format!("{indent}[autogenerate] {}", auto.directory));
                }
            }
        }
    }

    let mut lines = Vec::new();
    walk(site, site.navigation().nodes(), 0, &mut lines);
    lines
}
