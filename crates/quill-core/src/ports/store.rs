use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostChanges, PostId};
use crate::error::RepoError;

/// Backing document store for posts.
///
/// Implementations persist synchronously before returning and never retry.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persist a new post under a freshly generated id.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Every stored post, in insertion order.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Overwrite the mutable fields of a post. `None` if no post has this id.
    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Option<Post>, RepoError>;

    /// Remove a post. Returns whether anything was removed.
    async fn delete(&self, id: PostId) -> Result<bool, RepoError>;
}
