use tracing::{info, warn};

use super::{Destination, Effects, Field, FormError, Notification, PostForm};
use crate::{BlogClientError, BlogClientTrait, NewPost, Post};

const CREATED: &str = "Post has been created";
const CREATE_FAILED: &str = "Failed to create post. Please try again later.";

/// Controller for the new-post form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatePage {
    form: PostForm,
}

impl CreatePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &PostForm {
        &self.form
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Validates the draft and enters the submitting state. On error nothing
    /// may be sent.
    pub fn begin_submit(&mut self) -> Result<NewPost, FormError> {
        self.form.begin()
    }

    pub fn finish_submit(&mut self, result: Result<Post, BlogClientError>) -> Effects {
        match result {
            Ok(post) => {
                info!(id = %post.id, "post created");
                Effects::notify(Notification::success(CREATED))
                    .then_navigate(Destination::Detail(post.id))
            }
            Err(e) => {
                warn!(error = %e, "failed to create post");
                self.form.finish();
                Effects::notify(Notification::error(CREATE_FAILED))
            }
        }
    }

    pub async fn submit<C: BlogClientTrait + ?Sized>(&mut self, client: &C) -> Effects {
        let post = match self.begin_submit() {
            Ok(post) => post,
            Err(e) => {
                return Effects {
                    notification: e.notification(),
                    navigate: None,
                };
            }
        };
        let result = client.create_post(post).await;
        self.finish_submit(result)
    }
}
