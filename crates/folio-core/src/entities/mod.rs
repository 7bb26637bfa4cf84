//! Render-facing entity structs.
//!
//! Entities are plain value records: a normalizer builds them once from a
//! remote query and nothing mutates them afterwards. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` and use camelCase field names,
//! the shape page renderers consume.

mod post;
mod project;
mod resource;
mod stats;

pub use post::{DEFAULT_AUTHOR, DEFAULT_TITLE, Post};
pub use project::Project;
pub use resource::Resource;
pub use stats::BlogStats;
