//! Search-facing outputs: feeds, sitemap, structured data.
//!
//! | Module    | Output                                       |
//! |-----------|----------------------------------------------|
//! | `feed`    | `feed.xml` at the site root and per language |
//! | `jsonld`  | schema.org `Article` blobs for page heads    |
//! | `sitemap` | `sitemap.xml` over every rendered page       |

pub mod feed;
pub mod jsonld;
pub mod sitemap;
