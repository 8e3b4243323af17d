use tracing::warn;

use super::{LoadState, Notification};
use crate::{BlogClientError, BlogClientTrait, Post};

const LOAD_FAILED: &str = "Failed to load posts. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView<'a> {
    Loading,
    Empty,
    Posts(&'a [Post]),
    Failed,
}

/// Controller for the post index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPage {
    state: LoadState<Vec<Post>>,
    pub(super) deferred: Option<Notification>,
}

impl ListPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<C: BlogClientTrait + ?Sized>(&mut self, client: &C) {
        self.state = LoadState::Loading;
        let result = client.list_posts().await;
        self.resolve(result);
    }

    pub fn resolve(&mut self, result: Result<Vec<Post>, BlogClientError>) {
        if let Err(e) = &result {
            warn!(error = %e, "failed to load posts");
            self.deferred = Some(Notification::error(LOAD_FAILED));
        }
        self.state = LoadState::from_result(result);
    }

    pub fn view(&self) -> ListView<'_> {
        match &self.state {
            LoadState::Loading => ListView::Loading,
            LoadState::Ready(posts) if posts.is_empty() => ListView::Empty,
            LoadState::Ready(posts) => ListView::Posts(posts),
            LoadState::Errored => ListView::Failed,
        }
    }
}
