//! In-memory post store - the process-lifetime collection of posts.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{NewPost, Post, PostId, PostPatch, next_post_id};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

/// In-memory post repository using an ordered Vec with async RwLock.
///
/// Every mutation holds the write lock for its whole read-modify-write,
/// so concurrent creates never hand out the same id.
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
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.clone())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        let post = Post::new(next_post_id(&posts), new_post);
        posts.push(post.clone());

        tracing::debug!(post_id = post.id, total = posts.len(), "Post created");
        Ok(post)
    }

    async fn update(&self, id: PostId, patch: PostPatch) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        post.apply(patch);

        tracing::debug!(post_id = id, "Post updated");
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;

        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        posts.remove(index);

        tracing::debug!(post_id = id, total = posts.len(), "Post deleted");
        Ok(())
    }

    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.posts.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    fn new_post(title: &str) -> NewPost {
        NewPost::new(title, "content", "author")
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryPostRepository::new();
        let first = repo.create(new_post("first")).await.unwrap();
        let second = repo.create(new_post("second")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = InMemoryPostRepository::new();
        for title in ["a", "b", "c"] {
            repo.create(new_post(title)).await.unwrap();
        }

        let titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryPostRepository::new();
        repo.create(new_post("a")).await.unwrap();
        repo.create(new_post("b")).await.unwrap();
        repo.delete(1).await.unwrap();

        // length + 1 would hand out 2 again
        let post = repo.create(new_post("c")).await.unwrap();
        assert_eq!(post.id, 3);

        let ids: Vec<PostId> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_update_keeps_date_and_unsupplied_fields() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(NewPost::new("A", "B", "C")).await.unwrap();

        let updated = repo
            .update(
                created.id,
                PostPatch {
                    content: Some("D".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "A");
        assert_eq!(updated.content, "D");
        assert_eq!(updated.author, "C");
        assert_eq!(updated.date, created.date);
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let result = repo.update(42, PostPatch::default()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_removes_post() {
        let repo = InMemoryPostRepository::new();
        let post = repo.create(new_post("a")).await.unwrap();
        repo.create(new_post("b")).await.unwrap();

        repo.delete(post.id).await.unwrap();

        assert_eq!(repo.find_by_id(post.id).await.unwrap(), None);
        assert_eq!(repo.count().await.unwrap(), 1);
        assert!(matches!(repo.delete(post.id).await, Err(RepoError::NotFound)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_unique_ids() {
        let repo = Arc::new(InMemoryPostRepository::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(new_post(&i.to_string())).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let post = handle.await.unwrap().unwrap();
            assert!(ids.insert(post.id), "duplicate id {}", post.id);
        }
        assert_eq!(repo.count().await.unwrap(), 50);
    }
}
