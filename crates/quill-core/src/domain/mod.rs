//! Domain entities and the pure functions over them.

mod post;
mod search;
mod tags;

pub use post::{NewPost, Post, PostChanges, PostFields, PostId, PostInput, sort_by_recency};
pub use search::{SearchQuery, search};
pub use tags::normalize_tags;
