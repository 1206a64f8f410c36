//! In-memory post repository - used by the `minimal` build and in tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

/// Posts kept in insertion order behind an async RwLock.
///
/// The slug check and the insert happen under one write lock, which gives the
/// same guarantee as a unique index: of several concurrent creates with the
/// same slug, exactly one wins.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
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

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn create(&self, title: String, content: String) -> Result<Post, RepoError> {
        let post = Post::new(title, content);

        let mut posts = self.posts.write().await;
        if posts.iter().any(|p| p.slug == post.slug) {
            return Err(RepoError::DuplicateSlug(post.slug));
        }
        posts.push(post.clone());

        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryPostRepository::new();
        let created = repo
            .create("My First Post".to_string(), "Hello".to_string())
            .await
            .unwrap();

        let found = repo.find_by_slug("my-first-post").await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.content, "Hello");
    }

    #[tokio::test]
    async fn test_duplicate_slug_rejected() {
        let repo = InMemoryPostRepository::new();
        repo.create("Hello World".to_string(), "a".to_string())
            .await
            .unwrap();

        // Different title, same slug.
        let err = repo
            .create("hello world".to_string(), "b".to_string())
            .await
            .unwrap_err();
        assert!(err.is_duplicate_slug());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let repo = InMemoryPostRepository::new();
        assert!(repo.list_all().await.unwrap().is_empty());
        assert!(repo.find_by_slug("anything").await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_single_winner() {
        let repo = Arc::new(InMemoryPostRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create("Race".to_string(), format!("#{i}")).await })
            })
            .collect();

        let mut ok = 0;
        let mut dup = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => ok += 1,
                Err(e) if e.is_duplicate_slug() => dup += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(ok, 1);
        assert_eq!(dup, 15);
        assert_eq!(repo.len().await, 1);
    }
}
