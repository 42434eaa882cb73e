//! Ptytsch - a static site generator for the ptytsch trilingual cultural digest.

#![allow(dead_code)]

mod art;
mod cli;
mod config;
mod content;
mod core;
mod embed;
mod i18n;
mod logger;
mod render;
mod seo;
mod subscribe;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};
use content::ContentStore;
use seo::{feed::build_feeds, sitemap::build_sitemap};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = init_config(SiteConfig::load(cli)?);

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&config, name.is_some(), *dry),
        Commands::Build { .. } => build_all(&config).map(|_| ()),
        Commands::Serve { .. } => cli::serve::serve_site(&config),
        Commands::Validate { args } => cli::validate::validate_data(&config, args),
    }
}

// =============================================================================
// Build Command
// =============================================================================

/// Build site and generate feeds/sitemap in parallel.
fn build_all(config: &SiteConfig) -> Result<ContentStore> {
    let store = cli::build::build_site(config, false)?;

    // Generate feeds and sitemap in parallel
    let (feed_result, sitemap_result) = rayon::join(
        || build_feeds(config, &store),
        || build_sitemap(config, &store),
    );

    feed_result?;
    sitemap_result?;
    Ok(store)
}
