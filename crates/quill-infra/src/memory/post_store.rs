//! In-memory post store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::RepoError;
use quill_core::domain::{NewPost, Post, PostChanges, PostId};
use quill_core::ports::PostStore;

/// Post store backed by an insertion-ordered `Vec` behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        let mut id = PostId::generate();
        while posts.iter().any(|p| p.id == id) {
            id = PostId::generate();
        }

        let post = post.into_post(id);
        posts.push(post.clone());
        tracing::debug!(post_id = %id, "Post inserted");
        Ok(post)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.write().await;

        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(post_id = %id, "No post to update");
            return Ok(None);
        };

        post.apply(changes);
        tracing::debug!(post_id = %id, "Post updated");
        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: PostId) -> Result<bool, RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        // `retain` preserves the order of the remaining posts.
        posts.retain(|p| p.id != id);
        let removed = posts.len() != before;
        tracing::debug!(post_id = %id, removed, "Post delete");
        Ok(removed)
    }
}
