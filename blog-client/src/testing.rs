//! In-memory stand-in for the posts API used by unit tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::{BlogClientError, BlogClientTrait, DeleteConfirmation, NewPost, Post, PostId, PostPatch};

#[derive(Default)]
pub(crate) struct FakeClient {
    posts: RefCell<Vec<Post>>,
    calls: RefCell<Vec<&'static str>>,
    fail: Cell<bool>,
    next_id: Cell<u32>,
}

impl FakeClient {
    pub(crate) fn with_posts(count: u32) -> Self {
        let fake = Self::default();
        for n in 0..count {
            fake.insert(Post {
                id: PostId::new(format!("seed-{n}")),
                title: format!("Post {n}"),
                content: format!("Body of post {n}"),
                author: "Ada".into(),
            });
        }
        fake
    }

    pub(crate) fn insert(&self, post: Post) {
        self.posts.borrow_mut().push(post);
    }

    pub(crate) fn fail_requests(&self, fail: bool) {
        self.fail.set(fail);
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub(crate) fn posts(&self) -> Vec<Post> {
        self.posts.borrow().clone()
    }

    fn record(&self, call: &'static str, action: &'static str) -> Result<(), BlogClientError> {
        self.calls.borrow_mut().push(call);
        if self.fail.get() {
            Err(BlogClientError::request_failed(action, "unexpected status 500"))
        } else {
            Ok(())
        }
    }

    fn find(&self, id: &PostId, action: &'static str) -> Result<Post, BlogClientError> {
        self.posts
            .borrow()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| BlogClientError::request_failed(action, "unexpected status 404"))
    }
}

#[async_trait(?Send)]
impl BlogClientTrait for FakeClient {
    async fn list_posts(&self) -> Result<Vec<Post>, BlogClientError> {
        self.record("list", "fetch posts")?;
        Ok(self.posts())
    }

    async fn get_post_by_id(&self, id: &PostId) -> Result<Post, BlogClientError> {
        self.record("get", "fetch post")?;
        self.find(id, "fetch post")
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, BlogClientError> {
        self.record("create", "create post")?;
        let n = self.next_id.get();
        self.next_id.set(n + 1);

        let created = Post {
            id: PostId::new(format!("new-{n}")),
            title: post.title,
            content: post.content,
            author: post.author,
        };
        self.insert(created.clone());
        Ok(created)
    }

    async fn update_post(&self, id: &PostId, patch: PostPatch) -> Result<Post, BlogClientError> {
        self.record("update", "update post")?;
        let mut posts = self.posts.borrow_mut();
        let post = posts
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| BlogClientError::request_failed("update post", "unexpected status 404"))?;

        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        if let Some(author) = patch.author {
            post.author = author;
        }
        Ok(post.clone())
    }

    async fn delete_post(&self, id: &PostId) -> Result<DeleteConfirmation, BlogClientError> {
        self.record("delete", "delete post")?;
        self.find(id, "delete post")?;
        self.posts.borrow_mut().retain(|p| &p.id != id);
        Ok(DeleteConfirmation {
            message: "Post deleted successfully".into(),
        })
    }
}
