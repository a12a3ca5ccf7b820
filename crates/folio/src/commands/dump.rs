//! `folio dump` command implementation.

use clap::Args;
use folio_site::SiteConfig;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the dump command.
#[derive(Args)]
pub(crate) struct DumpArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl DumpArgs {
    /// Execute the dump command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading, validation or serialization fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let (_, site) = self.config.build()?;
        let json = render_json(&site, self.pretty)?;

        Output::new().data(&json)?;
        Ok(())
    }
}

/// Serialize the assembled site for the external renderer.
fn render_json(site: &SiteConfig, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(site)?
    } else {
        serde_json::to_string(site)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use folio_site::{NodeSpec, PluginSpec, SiteSpec};
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_site() -> SiteConfig {
        SiteSpec {
            title: "My Docs".to_owned(),
            base: Some("/docs".to_owned()),
            navigation: vec![NodeSpec::group(
                "Introduction",
                vec![NodeSpec::link("The Vision", "introduction/vision")],
            )],
            plugins: vec![PluginSpec::new("catppuccin").with_option("flavor", "frappe".into())],
            ..SiteSpec::default()
        }
        .build()
        .unwrap()
    }

    #[test]
    fn test_render_json_compact() {
        let json = render_json(&sample_site(), false).unwrap();

        assert!(!json.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "My Docs");
        assert_eq!(value["navigation"][0]["kind"], "group");
        assert_eq!(
            value["navigation"][0]["children"][0]["slug"],
            "introduction/vision"
        );
        assert_eq!(value["plugins"][0]["id"], "catppuccin");
        assert_eq!(value["plugins"][0]["options"]["flavor"], "frappe");
    }

    #[test]
    fn test_render_json_pretty_matches_compact() {
        let site = sample_site();

        let pretty = render_json(&site, true).unwrap();
        let compact = render_json(&site, false).unwrap();

        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&pretty).unwrap(),
            serde_json::from_str::<serde_json::Value>(&compact).unwrap()
        );
    }
}
