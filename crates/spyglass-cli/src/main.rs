//! Spyglass CLI Application
//!
//! Command-line interface for the spyglass dashboard filter.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::Args;
use clap::Parser;
use cli::{Cli, OutputFormat};
use log::info;
use renderer::TerminalRenderer;
use spyglass_core::pipeline::FilterOptions;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        input,
        search,
        active_only,
        json,
        no_color,
    } = Args::parse();

    let options = FilterOptions {
        search_term: search,
        active_only,
    };
    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Markdown
    };
    let renderer = TerminalRenderer::new(!no_color);

    info!("Spyglass started");

    Cli::new(renderer).run(input.as_deref(), &options, format)
}
