//! Configuration section definitions.
//!
//! Each module corresponds to a section in `ptytsch.toml`:
//!
//! | Module  | TOML Section | Purpose                             |
//! |---------|--------------|-------------------------------------|
//! | `build` | `[build]`    | Data/output paths, feed, sitemap    |
//! | `serve` | `[serve]`    | Local server and subscribe endpoint |
//! | `site`  | `[site]`     | Site metadata                       |

mod build;
mod serve;
mod site;

pub use build::{BuildSectionConfig, FeedConfig, SitemapConfig};
pub use serve::{ServeConfig, SubscribeConfig};
pub use site::{SiteInfoConfig, SiteSectionConfig};
