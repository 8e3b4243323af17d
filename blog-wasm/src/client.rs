use async_trait::async_trait;
use blog_client::{
    BlogClientError, BlogClientTrait, ClientConfig, DeleteConfirmation, NewPost, Post, PostId,
    PostPatch,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// `fetch`-backed implementation of the posts API.
#[derive(Clone)]
pub struct BlogClientHttp {
    base_url: String,
}

impl BlogClientHttp {
    pub fn connect(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
        }
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn post_url(&self, id: &PostId) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }

    // Универсальная отправка запроса
    async fn send<T: DeserializeOwned>(
        action: &'static str,
        request: Request,
    ) -> Result<T, BlogClientError> {
        let response = request.send().await.map_err(|e| {
            warn!(action, error = %e, "request could not be completed");
            BlogClientError::request_failed(action, e)
        })?;

        let status = response.status();
        debug!(action, url = %response.url(), status, "response received");

        if response.ok() {
            response
                .json()
                .await
                .map_err(|e| BlogClientError::request_failed(action, e))
        } else {
            warn!(action, status, "request rejected by server");
            Err(BlogClientError::request_failed(
                action,
                format!("unexpected status {status}"),
            ))
        }
    }
}

fn build_failed(action: &'static str) -> impl FnOnce(gloo_net::Error) -> BlogClientError {
    move |e| BlogClientError::request_failed(action, e)
}

#[async_trait(?Send)]
impl BlogClientTrait for BlogClientHttp {
    async fn list_posts(&self) -> Result<Vec<Post>, BlogClientError> {
        let action = "fetch posts";
        let request = Request::get(&self.posts_url())
            .header("Accept", "application/json")
            .build()
            .map_err(build_failed(action))?;
        Self::send(action, request).await
    }

    async fn get_post_by_id(&self, id: &PostId) -> Result<Post, BlogClientError> {
        let action = "fetch post";
        let request = Request::get(&self.post_url(id))
            .header("Accept", "application/json")
            .build()
            .map_err(build_failed(action))?;
        Self::send(action, request).await
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, BlogClientError> {
        let action = "create post";
        let request = Request::post(&self.posts_url())
            .header("Content-Type", "application/json")
            .json(&post)
            .map_err(build_failed(action))?;
        Self::send(action, request).await
    }

    async fn update_post(&self, id: &PostId, patch: PostPatch) -> Result<Post, BlogClientError> {
        let action = "update post";
        let request = Request::put(&self.post_url(id))
            .header("Content-Type", "application/json")
            .json(&patch)
            .map_err(build_failed(action))?;
        Self::send(action, request).await
    }

    async fn delete_post(&self, id: &PostId) -> Result<DeleteConfirmation, BlogClientError> {
        let action = "delete post";
        let request = Request::delete(&self.post_url(id))
            .build()
            .map_err(build_failed(action))?;
        Self::send(action, request).await
    }
}
