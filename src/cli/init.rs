//! Init command: scaffold a new site directory.
//!
//! Writes `ptytsch.toml` with every section commented, the data layout
//! the pipeline drops records into, and one sample event/article pair
//! so the first build shows a page.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::config::section::{
    BuildSectionConfig, FeedConfig, ServeConfig, SiteInfoConfig, SitemapConfig, SubscribeConfig,
};
use crate::config::SiteConfig;
use crate::log;

/// Default config filename.
const CONFIG_FILE: &str = "ptytsch.toml";

/// Files to write ignore patterns to.
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Data subdirectories the pipeline writes records into.
const DATA_DIRS: &[&str] = &["data/events", "data/articles", "data/reflections"];

/// Create a new site with default structure.
///
/// If `dry_run` is true, only prints the config template to stdout.
pub fn new_site(config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config_template());
        return Ok(());
    }

    let root = config.get_root();
    if let Err(e) = validate_target(root, has_name) {
        log!("error"; "{}", e);
        std::process::exit(1);
    }

    create_structure(root)?;
    write_config(root)?;
    write_ignore_files(root, &config.root_relative(&config.build.output))?;
    write_sample_data(root)?;

    log!("init"; "Site initialized: run 'ptytsch serve' to preview");
    Ok(())
}

/// Generate ptytsch.toml content with comments.
fn config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Ptytsch configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    for section in [
        SiteInfoConfig::template_with_header(),
        BuildSectionConfig::template_with_header(),
        FeedConfig::template_with_header(),
        SitemapConfig::template_with_header(),
        ServeConfig::template_with_header(),
        SubscribeConfig::template_with_header(),
    ] {
        out.push_str(&section);
        out.push('\n');
    }

    out
}

/// Target must be empty (no name) or not exist yet (with name).
fn validate_target(root: &Path, has_name: bool) -> Result<()> {
    if has_name {
        if root.exists() {
            bail!(
                "Directory '{}' already exists.\n\
                 Choose a different name or remove the existing directory.",
                root.display()
            );
        }
        return Ok(());
    }

    let occupied = root.exists()
        && fs::read_dir(root)
            .with_context(|| format!("reading {}", root.display()))?
            .next()
            .is_some();
    if occupied {
        bail!(
            "Current directory is not empty.\n\
             Use `ptytsch init <name>` to create in a new subdirectory."
        );
    }
    Ok(())
}

fn create_structure(root: &Path) -> Result<()> {
    for dir in DATA_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("creating directory '{}'", path.display()))?;
    }
    Ok(())
}

fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    fs::write(&path, config_template())
        .with_context(|| format!("writing '{}'", path.display()))?;
    Ok(())
}

/// Write .gitignore and .ignore with the output directory and the
/// subscriber list, which holds reader emails and never belongs in git.
fn write_ignore_files(root: &Path, output_dir: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output_dir);
    let content = format!(
        "{}/\nsubscribers.jsonl\n.DS_Store\n",
        output_pattern.display()
    );

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Don't overwrite user's ignore files
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("writing '{}'", path.display()))?;
        }
    }
    Ok(())
}

/// One sample event/article pair so `serve` has something to show.
fn write_sample_data(root: &Path) -> Result<()> {
    let event = serde_json::json!({
        "id": "sample-event",
        "name": "Long Night of the Archives",
        "start_date": "2025-09-20",
        "venue": "Silent Green",
        "city": "Berlin",
        "category": "exhibition",
        "event_url": "https://example.org/event",
        "scouted_at": "2025-09-01T08:00:00"
    });
    let article = serde_json::json!({
        "id": "sample-article",
        "event_id": "sample-event",
        "title": "A Night Among Forgotten Reels",
        "slug": "a-night-among-forgotten-reels",
        "lead": "The former crematorium opens its vaults for one night, and the city's film history flickers back to life.",
        "body": "This is a sample article. Replace it with records from the writing pipeline.\n\nEach paragraph is separated by a blank line.",
        "language": "en",
        "word_count": 32,
        "written_at": "2025-09-02T09:00:00",
        "event": event.clone()
    });

    write_json(&root.join("data/events/sample-event.json"), &event)?;
    write_json(&root.join("data/articles/sample-article.json"), &article)?;
    Ok(())
}

fn write_json(path: &Path, value: &serde_json::Value) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content).with_context(|| format!("writing '{}'", path.display()))?;
    Ok(())
}
