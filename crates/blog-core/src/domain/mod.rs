//! Domain entities - the core business objects.

mod post;

pub use post::{NewPost, Post, PostId, PostPatch, next_post_id};
