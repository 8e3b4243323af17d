//! Client-side building blocks for the BlogSphere posts API.
//!
//! The crate is shared by the browser front end (`blog-wasm`) and the
//! command-line client (`blog-cli`). Everything except [`BlogClientHttp`] and
//! [`ClientConfig::from_env`] is platform-agnostic; those two live behind the
//! `native` feature.

use async_trait::async_trait;

mod cache;
mod config;
mod error;
#[cfg(feature = "native")]
mod http_client;
mod model;
pub mod pages;
pub mod render;
#[cfg(test)]
mod testing;

pub use cache::{CacheKey, CachedClient};
pub use config::{BASE_URL_ENV, ClientConfig, ConfigError, DEFAULT_BASE_URL};
pub use error::BlogClientError;
#[cfg(feature = "native")]
pub use http_client::BlogClientHttp;
pub use model::{ANONYMOUS, DeleteConfirmation, NewPost, Post, PostId, PostPatch};

/// The five operations of the posts API.
///
/// Every failure, whatever its cause, surfaces as
/// [`BlogClientError::RequestFailed`]. Implementations make exactly one
/// attempt per call.
#[async_trait(?Send)]
pub trait BlogClientTrait {
    async fn list_posts(&self) -> Result<Vec<Post>, BlogClientError>;
    async fn get_post_by_id(&self, id: &PostId) -> Result<Post, BlogClientError>;
    async fn create_post(&self, post: NewPost) -> Result<Post, BlogClientError>;
    async fn update_post(&self, id: &PostId, patch: PostPatch) -> Result<Post, BlogClientError>;
    async fn delete_post(&self, id: &PostId) -> Result<DeleteConfirmation, BlogClientError>;
}
