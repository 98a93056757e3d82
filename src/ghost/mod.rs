//! Ghost Content API client
//!
//! Talks to a headless Ghost install over HTTP. The [`ContentSource`] trait is
//! the seam the post feed fetches through, so tests can stand in for the
//! remote service.

mod client;
mod error;
mod types;

pub use client::{ApiPath, GhostClient};
pub use error::GhostError;
pub use types::{BrowseParams, Limit, Meta, Pagination, Post, PostsResponse, Tag};

use async_trait::async_trait;

/// Anything that can list posts the way the Ghost Content API does
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Browse posts, returned in the service's native order
    async fn browse_posts(&self, params: &BrowseParams) -> Result<Vec<Post>, GhostError>;
}

#[async_trait]
impl ContentSource for GhostClient {
    async fn browse_posts(&self, params: &BrowseParams) -> Result<Vec<Post>, GhostError> {
        GhostClient::browse_posts(self, params).await
    }
}
