use tracing::{info, warn};

use super::{Destination, Effects, Field, FormError, LoadState, Notification, PostForm};
use crate::{BlogClientError, BlogClientTrait, Post, PostId, PostPatch};

const LOAD_FAILED: &str = "Failed to load post. It may have been deleted or does not exist.";
const UPDATED: &str = "Post has been updated";
const UPDATE_FAILED: &str = "Failed to update post. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditView<'a> {
    Loading,
    Editing(&'a PostForm),
    NotFound,
}

/// Controller for the edit form of an existing post.
#[derive(Debug, Clone, PartialEq)]
pub struct EditPage {
    id: PostId,
    state: LoadState<Post>,
    form: PostForm,
    pub(super) deferred: Option<Notification>,
}

impl EditPage {
    pub fn new(id: PostId) -> Self {
        Self {
            id,
            state: LoadState::Loading,
            form: PostForm::default(),
            deferred: None,
        }
    }

    pub fn id(&self) -> &PostId {
        &self.id
    }

    pub fn form(&self) -> &PostForm {
        &self.form
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub async fn load<C: BlogClientTrait + ?Sized>(&mut self, client: &C) {
        self.state = LoadState::Loading;
        let result = client.get_post_by_id(&self.id).await;
        self.resolve(result);
    }

    /// A successful fetch overwrites the draft, discarding local edits.
    pub fn resolve(&mut self, result: Result<Post, BlogClientError>) {
        match &result {
            Ok(post) => self.form.seed(post),
            Err(e) => {
                warn!(id = %self.id, error = %e, "failed to load post for editing");
                self.deferred = Some(Notification::error(LOAD_FAILED));
            }
        }
        self.state = LoadState::from_result(result);
    }

    pub fn view(&self) -> EditView<'_> {
        match self.state {
            LoadState::Loading => EditView::Loading,
            LoadState::Ready(_) => EditView::Editing(&self.form),
            LoadState::Errored => EditView::NotFound,
        }
    }

    pub fn begin_submit(&mut self) -> Result<PostPatch, FormError> {
        self.form.begin().map(PostPatch::from)
    }

    pub fn finish_submit(&mut self, result: Result<Post, BlogClientError>) -> Effects {
        self.form.finish();
        match result {
            Ok(post) => {
                info!(id = %post.id, "post updated");
                self.state = LoadState::Ready(post);
                Effects::notify(Notification::success(UPDATED))
                    .then_navigate(Destination::Detail(self.id.clone()))
            }
            Err(e) => {
                warn!(id = %self.id, error = %e, "failed to update post");
                Effects::notify(Notification::error(UPDATE_FAILED))
            }
        }
    }

    pub async fn submit<C: BlogClientTrait + ?Sized>(&mut self, client: &C) -> Effects {
        let patch = match self.begin_submit() {
            Ok(patch) => patch,
            Err(e) => {
                return Effects {
                    notification: e.notification(),
                    navigate: None,
                };
            }
        };
        let result = client.update_post(&self.id, patch).await;
        self.finish_submit(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::DeferredNotification;
    use crate::testing::FakeClient;

    async fn loaded(client: &FakeClient) -> EditPage {
        let mut page = EditPage::new(PostId::from("seed-0"));
        page.load(client).await;
        page
    }

    #[tokio::test]
    async fn fetch_seeds_the_draft() {
        let client = FakeClient::with_posts(1);
        let page = loaded(&client).await;

        let EditView::Editing(form) = page.view() else {
            panic!("expected the form");
        };
        assert_eq!(form.get(Field::Title), "Post 0");
        assert_eq!(form.get(Field::Content), "Body of post 0");
        assert_eq!(form.get(Field::Author), "Ada");
    }

    #[tokio::test]
    async fn refetch_overwrites_local_edits() {
        let client = FakeClient::with_posts(1);
        let mut page = loaded(&client).await;
        page.set(Field::Title, "Local edit");

        page.load(&client).await;

        assert_eq!(page.form().get(Field::Title), "Post 0");
    }

    #[tokio::test]
    async fn save_updates_and_returns_to_detail() {
        let client = FakeClient::with_posts(1);
        let mut page = loaded(&client).await;
        page.set(Field::Title, "Renamed");
        page.set(Field::Author, "   ");

        let effects = page.submit(&client).await;

        assert_eq!(effects.navigate, Some(Destination::Detail(PostId::from("seed-0"))));
        assert_eq!(effects.notification, Some(Notification::success(UPDATED)));
        let posts = client.posts();
        let stored = &posts[0];
        assert_eq!(stored.title, "Renamed");
        assert_eq!(stored.author, "Anonymous");
    }

    #[tokio::test]
    async fn invalid_draft_is_rejected_locally() {
        let client = FakeClient::with_posts(1);
        let mut page = loaded(&client).await;
        page.set(Field::Content, "");

        let effects = page.submit(&client).await;

        assert!(effects.notification.is_some_and(|n| n.title == "Validation Error"));
        assert_eq!(client.calls(), vec!["get"]);
    }

    #[tokio::test]
    async fn failed_save_re_enables_the_form() {
        let client = FakeClient::with_posts(1);
        let mut page = loaded(&client).await;
        client.fail_requests(true);

        let effects = page.submit(&client).await;

        assert_eq!(effects, Effects::notify(Notification::error(UPDATE_FAILED)));
        assert!(!page.form().is_submitting());
    }

    #[tokio::test]
    async fn missing_post_shows_not_found() {
        let client = FakeClient::default();
        let mut page = EditPage::new(PostId::from("gone"));

        page.load(&client).await;

        assert_eq!(page.view(), EditView::NotFound);
        assert_eq!(page.take_notification(), Some(Notification::error(LOAD_FAILED)));
    }
}
