//! Build command: load the data directory and render the site.

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::utils::plural_count;
use crate::{log, render};

/// Build the whole site. Returns the loaded store so callers (feeds,
/// sitemap, serve) can reuse it without a second disk pass.
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<ContentStore> {
    let started = Instant::now();

    let store = ContentStore::load(&config.build.data)?;

    if config.build.clean {
        clean_output(config)?;
    }
    render::render_site(config, &store)?;

    if !quiet {
        log!(
            "build";
            "{}, {} in {:.2}s -> {}",
            plural_count(store.articles().len(), "article"),
            plural_count(store.reflections().len(), "reflection"),
            started.elapsed().as_secs_f32(),
            config.root_relative(&config.build.output).display()
        );
    }

    Ok(store)
}

/// Remove the output directory entirely before building.
fn clean_output(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;
    if output.is_dir() {
        fs::remove_dir_all(output)
            .with_context(|| format!("cleaning {}", output.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::test_ctx;

    #[test]
    fn test_build_site_writes_pages() {
        let (_tmp, config, _store) = test_ctx();

        let store = build_site(&config, true).unwrap();
        assert_eq!(store.articles().len(), 2);

        let output = &config.build.output;
        assert!(output.join("index.html").is_file());
        assert!(output.join("en/index.html").is_file());
        assert!(output.join("de/index.html").is_file());
        assert!(output.join("ru/index.html").is_file());
        assert!(output.join("en/article/archive-night/index.html").is_file());
        assert!(output.join("de/article/archivnacht/index.html").is_file());
        assert!(output.join("en/reflections/first-month/index.html").is_file());
        assert!(output.join("en/about/index.html").is_file());
        assert!(output.join("en/impressum/index.html").is_file());
        assert!(output.join("ru/privacy/index.html").is_file());
        assert!(output.join("404.html").is_file());

        // One fingerprinted stylesheet and script
        let assets: Vec<_> = fs::read_dir(output.join("assets"))
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert!(assets.iter().any(|n| n.starts_with("site.") && n.ends_with(".css")));
        assert!(assets.iter().any(|n| n.starts_with("site.") && n.ends_with(".js")));
    }

    #[test]
    fn test_clean_removes_stale_files() {
        let (_tmp, mut config, _store) = test_ctx();
        config.build.clean = true;

        let stale = config.build.output.join("stale/old.html");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "old").unwrap();

        build_site(&config, true).unwrap();
        assert!(!stale.exists());
        assert!(config.build.output.join("en/index.html").is_file());
    }
}
