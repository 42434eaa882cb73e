//! Pipeline content: record types, disk loading, category palette.
//!
//! | Module     | Purpose                                      |
//! |------------|----------------------------------------------|
//! | `model`    | Serde types for the pipeline's JSON records  |
//! | `store`    | [`ContentStore`]: load + index everything    |
//! | `category` | Category slugs and brand colors              |

mod category;
mod model;
mod store;

pub use category::{CATEGORIES, category_color};
pub use model::{Analysis, Article, CritiqueIssue, Event, Reflection, Trace, excerpt};
pub use store::ContentStore;
