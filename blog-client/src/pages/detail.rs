use tracing::{info, warn};

use super::{Destination, Effects, LoadState, Notification};
use crate::{BlogClientError, BlogClientTrait, DeleteConfirmation, Post, PostId};

const LOAD_FAILED: &str = "Failed to load post. It may have been deleted or does not exist.";
const DELETED: &str = "Post has been deleted";
const DELETE_FAILED: &str = "Failed to delete post";

/// Progress of the guarded delete action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteState {
    #[default]
    Idle,
    Confirming,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailView<'a> {
    Loading,
    Found(&'a Post),
    NotFound,
}

/// Controller for a single post, including its delete action.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPage {
    id: PostId,
    state: LoadState<Post>,
    delete: DeleteState,
    pub(super) deferred: Option<Notification>,
}

impl DetailPage {
    pub fn new(id: PostId) -> Self {
        Self {
            id,
            state: LoadState::Loading,
            delete: DeleteState::Idle,
            deferred: None,
        }
    }

    pub fn id(&self) -> &PostId {
        &self.id
    }

    pub async fn load<C: BlogClientTrait + ?Sized>(&mut self, client: &C) {
        self.state = LoadState::Loading;
        let result = client.get_post_by_id(&self.id).await;
        self.resolve(result);
    }

    pub fn resolve(&mut self, result: Result<Post, BlogClientError>) {
        if let Err(e) = &result {
            warn!(id = %self.id, error = %e, "failed to load post");
            self.deferred = Some(Notification::error(LOAD_FAILED));
        }
        self.state = LoadState::from_result(result);
    }

    pub fn view(&self) -> DetailView<'_> {
        match &self.state {
            LoadState::Loading => DetailView::Loading,
            LoadState::Ready(post) => DetailView::Found(post),
            LoadState::Errored => DetailView::NotFound,
        }
    }

    pub fn delete_state(&self) -> DeleteState {
        self.delete
    }

    /// Opens the confirm step. Ignored until the post has loaded.
    pub fn request_delete(&mut self) {
        if self.delete == DeleteState::Idle && self.state.ready().is_some() {
            self.delete = DeleteState::Confirming;
        }
    }

    pub fn cancel_delete(&mut self) {
        if self.delete == DeleteState::Confirming {
            self.delete = DeleteState::Idle;
        }
    }

    /// Affirms the confirm step and returns the id to delete. Returns `None`,
    /// meaning no request may be sent, unless the confirm step is open.
    pub fn confirm_delete(&mut self) -> Option<PostId> {
        if self.delete != DeleteState::Confirming {
            return None;
        }
        self.delete = DeleteState::Deleting;
        Some(self.id.clone())
    }

    pub fn finish_delete(&mut self, result: Result<DeleteConfirmation, BlogClientError>) -> Effects {
        self.delete = DeleteState::Idle;
        match result {
            Ok(confirmation) => {
                info!(id = %self.id, message = %confirmation.message, "post deleted");
                Effects::notify(Notification::success(DELETED)).then_navigate(Destination::List)
            }
            Err(e) => {
                warn!(id = %self.id, error = %e, "failed to delete post");
                Effects::notify(Notification::error(DELETE_FAILED))
            }
        }
    }

    pub async fn delete<C: BlogClientTrait + ?Sized>(&mut self, client: &C) -> Effects {
        let Some(id) = self.confirm_delete() else {
            return Effects::none();
        };
        let result = client.delete_post(&id).await;
        self.finish_delete(result)
    }
}
