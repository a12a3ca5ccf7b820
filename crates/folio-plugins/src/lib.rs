//! Rendering plugin pipeline for Folio.
//!
//! Validates an ordered list of [`PluginSpec`] entries and composes them into
//! a [`PluginPipeline`]. Pipeline order is application order: the renderer
//! applies the first entry first, and later entries may wrap or post-process
//! earlier output. The composer never reorders entries.
//!
//! Plugin options are opaque structured data. The composer only checks that
//! keys are unique; interpreting them is up to the renderer.
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), folio_plugins::PluginError> {
//! use folio_plugins::{PluginSpec, compose};
//! use serde_json::json;
//!
//! let specs = vec![
//!     PluginSpec::new("catppuccin").with_option("dark", json!({"flavor": "frappe"})),
//!     PluginSpec::new("mermaid"),
//! ];
//! let pipeline = compose(&specs)?;
//!
//! assert_eq!(pipeline.ids(), vec!["catppuccin", "mermaid"]);
//! # Ok(())
//! # }
//! ```

mod options;
mod pipeline;

pub use options::PluginOptions;
pub use pipeline::{PluginConfig, PluginError, PluginPipeline, PluginSpec, compose};
