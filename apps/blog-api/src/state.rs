//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// State backed by an empty process-lifetime store.
    pub fn in_memory() -> Self {
        tracing::info!("Using in-memory post store - data is lost on restart");
        Self::with_repository(Arc::new(InMemoryPostRepository::new()))
    }

    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}
