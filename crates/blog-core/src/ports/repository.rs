use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;

/// Post repository. Posts are only ever inserted and read.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in the store's natural order.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;

    /// `Ok(None)` when no post carries this slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// Insert a new post. Fails with [`RepoError::DuplicateSlug`] when the
    /// derived slug is already taken.
    async fn create(&self, title: String, content: String) -> Result<Post, RepoError>;
}
