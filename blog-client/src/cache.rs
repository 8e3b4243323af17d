//! Memoizing wrapper around any [`BlogClientTrait`].
//!
//! Reads are served from memory once a resource has been fetched; every
//! mutation invalidates the entries it can affect. Only successful responses
//! are stored, so a failed fetch is retried on the next activation.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use tracing::trace;

use crate::{BlogClientError, BlogClientTrait, DeleteConfirmation, NewPost, Post, PostId, PostPatch};

/// Resource identity: `(kind, id)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Posts,
    Post(PostId),
}

#[derive(Debug, Clone)]
enum Entry {
    Posts(Vec<Post>),
    Post(Post),
}

pub struct CachedClient<C> {
    inner: C,
    entries: RefCell<HashMap<CacheKey, Entry>>,
}

impl<C> CachedClient<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            entries: RefCell::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn invalidate(&self, key: &CacheKey) {
        trace!(?key, "cache invalidated");
        self.entries.borrow_mut().remove(key);
    }

    fn cached_posts(&self) -> Option<Vec<Post>> {
        match self.entries.borrow().get(&CacheKey::Posts) {
            Some(Entry::Posts(posts)) => Some(posts.clone()),
            _ => None,
        }
    }

    fn cached_post(&self, id: &PostId) -> Option<Post> {
        match self.entries.borrow().get(&CacheKey::Post(id.clone())) {
            Some(Entry::Post(post)) => Some(post.clone()),
            _ => None,
        }
    }

    fn store_post(&self, post: &Post) {
        self.entries
            .borrow_mut()
            .insert(CacheKey::Post(post.id.clone()), Entry::Post(post.clone()));
    }
}

#[async_trait(?Send)]
impl<C: BlogClientTrait> BlogClientTrait for CachedClient<C> {
    async fn list_posts(&self) -> Result<Vec<Post>, BlogClientError> {
        if let Some(posts) = self.cached_posts() {
            trace!("serving posts from cache");
            return Ok(posts);
        }

        let posts = self.inner.list_posts().await?;
        for post in &posts {
            self.store_post(post);
        }
        self.entries
            .borrow_mut()
            .insert(CacheKey::Posts, Entry::Posts(posts.clone()));
        Ok(posts)
    }

    async fn get_post_by_id(&self, id: &PostId) -> Result<Post, BlogClientError> {
        if let Some(post) = self.cached_post(id) {
            trace!(%id, "serving post from cache");
            return Ok(post);
        }

        let post = self.inner.get_post_by_id(id).await?;
        self.store_post(&post);
        Ok(post)
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, BlogClientError> {
        let result = self.inner.create_post(post).await;
        self.invalidate(&CacheKey::Posts);

        let created = result?;
        self.store_post(&created);
        Ok(created)
    }

    async fn update_post(&self, id: &PostId, patch: PostPatch) -> Result<Post, BlogClientError> {
        let result = self.inner.update_post(id, patch).await;
        self.invalidate(&CacheKey::Posts);
        self.invalidate(&CacheKey::Post(id.clone()));

        let updated = result?;
        self.store_post(&updated);
        Ok(updated)
    }

    async fn delete_post(&self, id: &PostId) -> Result<DeleteConfirmation, BlogClientError> {
        let result = self.inner.delete_post(id).await;
        self.invalidate(&CacheKey::Posts);
        self.invalidate(&CacheKey::Post(id.clone()));
        result
    }
}
