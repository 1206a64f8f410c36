//! PostgreSQL repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, SqlErr};

use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::connections::DocumentStore;
use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    store: Arc<DocumentStore>,
}

impl PostgresPostRepository {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }
}

/// Sort a driver error into the repository taxonomy.
fn classify(err: DbErr, slug: &str) -> RepoError {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return RepoError::DuplicateSlug(slug.to_string());
    }

    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::StoreUnavailable(err.to_string()),
        other => {
            // Backends that don't surface a typed SQL error still say so in the message.
            let msg = other.to_string();
            if msg.contains("duplicate key") {
                RepoError::DuplicateSlug(slug.to_string())
            } else {
                RepoError::Persistence(msg)
            }
        }
    }
}

fn read_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::StoreUnavailable(err.to_string()),
        other => RepoError::Persistence(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let db = self.store.connection().await?;

        let result = PostEntity::find().all(db).await.map_err(read_err)?;
        tracing::debug!(count = result.len(), "Listed posts");

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        tracing::debug!(slug = %slug, "Finding post by slug");
        let db = self.store.connection().await?;

        let result = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(db)
            .await
            .map_err(read_err)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, title: String, content: String) -> Result<Post, RepoError> {
        let db = self.store.connection().await?;

        let post = Post::new(title, content);
        let slug = post.slug.clone();
        let active_model: post::ActiveModel = post.into();

        let model = active_model
            .insert(db)
            .await
            .map_err(|e| classify(e, &slug))?;
        tracing::debug!(slug = %model.slug, id = %model.id, "Post inserted");

        Ok(model.into())
    }
}
