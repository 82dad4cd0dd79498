//! The post repository - every operation the transport layer can call.

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostChanges, PostId, PostInput, search, sort_by_recency};
use crate::error::DomainError;
use crate::ports::{Clock, PostStore, SystemClock};

/// Post operations over an explicitly owned store handle.
///
/// Cheap to clone; clones share the same store and clock.
#[derive(Clone)]
pub struct PostRepository {
    store: Arc<dyn PostStore>,
    clock: Arc<dyn Clock>,
}

impl PostRepository {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn PostStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Validate and persist a new post.
    ///
    /// Nothing is written when validation fails.
    pub async fn create(&self, input: PostInput) -> Result<Post, DomainError> {
        let fields = input.validate()?;
        let post = self
            .store
            .insert(NewPost::new(fields, self.clock.now()))
            .await?;
        Ok(post)
    }

    pub async fn get(&self, id: &str) -> Result<Post, DomainError> {
        let id = PostId::parse(id)?;
        self.store
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })
    }

    /// All posts, newest first.
    pub async fn list_recent(&self) -> Result<Vec<Post>, DomainError> {
        let mut posts = self.store.find_all().await?;
        sort_by_recency(&mut posts);
        Ok(posts)
    }

    /// Overwrite title, content, author and tags of an existing post.
    ///
    /// A well-formed id with no post behind it is always `NotFound`.
    pub async fn update(&self, id: &str, input: PostInput) -> Result<Post, DomainError> {
        let id = PostId::parse(id)?;
        let fields = input.validate()?;

        let existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })?;

        // updated_at must never precede created_at, even if the clock stepped back.
        let updated_at = self.clock.now().max(existing.created_at);

        self.store
            .update(id, PostChanges { fields, updated_at })
            .await?
            .ok_or(DomainError::NotFound { id })
    }

    /// Remove a post. Deleting a post that does not exist succeeds.
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let id = PostId::parse(id)?;
        self.store.delete(id).await?;
        Ok(())
    }

    /// Posts matching `query`, newest first. Empty when there is no query.
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<Post>, DomainError> {
        if query.is_none_or(str::is_empty) {
            return Ok(Vec::new());
        }
        let corpus = self.store.find_all().await?;
        Ok(search(query, corpus))
    }
}
