use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId, PostPatch};
use crate::error::RepoError;

/// Post repository - the single owner of every post held by the service.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, in insertion order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Store a new post, assigning its id and date.
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError>;

    /// Apply a partial update. Fails with `RepoError::NotFound` for an unknown id.
    async fn update(&self, id: PostId, patch: PostPatch) -> Result<Post, RepoError>;

    /// Remove a post. Fails with `RepoError::NotFound` for an unknown id.
    async fn delete(&self, id: PostId) -> Result<(), RepoError>;

    /// Number of posts currently held.
    async fn count(&self) -> Result<usize, RepoError>;
}
