//! PostgreSQL post store.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, QueryOrder};

use quill_core::RepoError;
use quill_core::domain::{NewPost, Post, PostChanges, PostId};
use quill_core::ports::PostStore;

use super::entity::post::{self, Entity as PostEntity, insert_model, update_model};

/// Post store over a SeaORM connection pool.
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn store_error(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(e.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let id = PostId::generate();
        let model = insert_model(id, post)
            .insert(&self.db)
            .await
            .map_err(store_error)?;

        tracing::debug!(post_id = %id, "Post inserted");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = %id, "Finding post by id");

        let result = PostEntity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(store_error)?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Seq)
            .all(&self.db)
            .await
            .map_err(store_error)?;

        tracing::debug!(count = result.len(), "Loaded all posts");
        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Option<Post>, RepoError> {
        match update_model(id, changes).update(&self.db).await {
            Ok(model) => {
                tracing::debug!(post_id = %id, "Post updated");
                Ok(Some(model.into()))
            }
            Err(DbErr::RecordNotUpdated) => {
                tracing::debug!(post_id = %id, "No post to update");
                Ok(None)
            }
            Err(e) => Err(store_error(e)),
        }
    }

    async fn delete(&self, id: PostId) -> Result<bool, RepoError> {
        let result = PostEntity::delete_by_id(id.as_uuid())
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        tracing::debug!(post_id = %id, rows = result.rows_affected, "Post delete");
        Ok(result.rows_affected > 0)
    }
}
