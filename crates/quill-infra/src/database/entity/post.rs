//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use quill_core::domain::{NewPost, Post, PostChanges, PostId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Insertion sequence, assigned by the database.
    pub seq: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author: String,
    /// JSON array of strings, in submission order.
    pub tags: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
///
/// Non-string entries in `tags` are skipped.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        let tags = match model.tags {
            Json::Array(values) => values
                .into_iter()
                .filter_map(|v| match v {
                    Json::String(tag) => Some(tag),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };

        Self {
            id: PostId::from(model.id),
            title: model.title,
            content: model.content,
            author: model.author,
            tags,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

fn tags_json(tags: Vec<String>) -> Json {
    Json::Array(tags.into_iter().map(Json::String).collect())
}

/// Active model for an insert under `id`. `seq` is left to the database.
pub fn insert_model(id: PostId, post: NewPost) -> ActiveModel {
    ActiveModel {
        id: Set(id.as_uuid()),
        seq: NotSet,
        title: Set(post.fields.title),
        content: Set(post.fields.content),
        author: Set(post.fields.author),
        tags: Set(tags_json(post.fields.tags)),
        created_at: Set(post.created_at.into()),
        updated_at: Set(post.created_at.into()),
    }
}

/// Active model for an update. `created_at` and `seq` stay untouched.
pub fn update_model(id: PostId, changes: PostChanges) -> ActiveModel {
    ActiveModel {
        id: Set(id.as_uuid()),
        seq: NotSet,
        title: Set(changes.fields.title),
        content: Set(changes.fields.content),
        author: Set(changes.fields.author),
        tags: Set(tags_json(changes.fields.tags)),
        created_at: NotSet,
        updated_at: Set(changes.updated_at.into()),
    }
}
