//! Command execution glue between parsed arguments and the core
//! pipeline.
//!
//! The CLI stands in for the dashboard's collaborators: it plays the
//! query layer by loading the tree from a file or stdin, and the
//! rendering layer by printing the filtered tree.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use spyglass_core::display::FilteredProjects;
use spyglass_core::models::projects_from_json;
use spyglass_core::pipeline::{FilterOptions, FilterPipeline};

use crate::renderer::TerminalRenderer;

/// Output format for the filtered tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Markdown via the terminal renderer
    Markdown,
    /// Pretty-printed JSON on stdout
    Json,
}

/// Command handler tying the pipeline to terminal output.
pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a command handler with the given renderer.
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Load a tree, filter it, and print the result.
    pub fn run(
        &self,
        input: Option<&Path>,
        options: &FilterOptions,
        format: OutputFormat,
    ) -> Result<()> {
        let raw = read_input(input)?;
        let projects = projects_from_json(&raw).context("Failed to parse project tree")?;
        debug!("Loaded {} projects", projects.len());

        let filtered = FilterPipeline::build(options).run(&projects);
        info!(
            "{} of {} projects matched (search: {:?}, active_only: {})",
            filtered.len(),
            projects.len(),
            options.search_term,
            options.active_only
        );

        match format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&filtered)
                    .context("Failed to serialize filtered tree")?;
                println!("{json}");
            }
            OutputFormat::Markdown => {
                self.renderer
                    .render(&format!("{}", FilteredProjects(filtered)))?;
            }
        }
        Ok(())
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read project tree from stdin")?;
            Ok(buffer)
        }
    }
}
