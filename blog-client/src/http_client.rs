use crate::error::BlogClientError;
use crate::{BlogClientTrait, ClientConfig, DeleteConfirmation, NewPost, Post, PostId, PostPatch};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct BlogClientHttp {
    client: Arc<Client>,
    base_url: String,
}

impl BlogClientHttp {
    pub fn connect(config: &ClientConfig) -> Result<Self, BlogClientError> {
        let client = Client::builder()
            .build()
            .map_err(|e| BlogClientError::request_failed("build http client", e))?;

        Ok(Self {
            client: Arc::new(client),
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn post_url(&self, id: &PostId) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }

    // Single attempt; any non-2xx status becomes RequestFailed without reading the body.
    async fn send<T: DeserializeOwned>(
        action: &'static str,
        request: RequestBuilder,
    ) -> Result<T, BlogClientError> {
        let resp = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!(action, error = %e, "request could not be completed");
                BlogClientError::request_failed(action, e)
            })?;

        let status = resp.status();
        debug!(action, url = %resp.url(), %status, "response received");

        if !status.is_success() {
            warn!(action, %status, "request rejected by server");
            return Err(BlogClientError::request_failed(
                action,
                format!("unexpected status {status}"),
            ));
        }

        resp.json()
            .await
            .map_err(|e| BlogClientError::request_failed(action, e))
    }
}

#[async_trait(?Send)]
impl BlogClientTrait for BlogClientHttp {
    async fn list_posts(&self) -> Result<Vec<Post>, BlogClientError> {
        let req = self.client.get(self.posts_url());
        Self::send("fetch posts", req).await
    }

    async fn get_post_by_id(&self, id: &PostId) -> Result<Post, BlogClientError> {
        let req = self.client.get(self.post_url(id));
        Self::send("fetch post", req).await
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, BlogClientError> {
        // `.json()` sets Content-Type: application/json
        let req = self.client.post(self.posts_url()).json(&post);
        Self::send("create post", req).await
    }

    async fn update_post(&self, id: &PostId, patch: PostPatch) -> Result<Post, BlogClientError> {
        let req = self.client.put(self.post_url(id)).json(&patch);
        Self::send("update post", req).await
    }

    async fn delete_post(&self, id: &PostId) -> Result<DeleteConfirmation, BlogClientError> {
        let req = self.client.delete(self.post_url(id));
        Self::send("delete post", req).await
    }
}
