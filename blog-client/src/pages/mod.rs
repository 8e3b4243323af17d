//! View-state owners for the four routes of the blog.
//!
//! A page controller holds its route's state exclusively and never touches
//! the network on its own: the caller runs the request between a `begin_*`
//! and a `finish_*`/`resolve` step, or uses the async convenience method
//! (`load`, `submit`, `delete`) that does both. Transitions hand back
//! [`Effects`] describing the notification to show and where to navigate.
//!
//! Fetch failures are not reported through [`Effects`]. They are queued on
//! the controller and drained with [`DeferredNotification::take_notification`]
//! after the render pass that observed them.

mod create;
mod detail;
mod edit;
mod form;
mod list;

pub use create::CreatePage;
pub use detail::{DeleteState, DetailPage, DetailView};
pub use edit::{EditPage, EditView};
pub use form::{Field, FormError, PostForm, resolve_author};
pub use list::{ListPage, ListView};

use crate::PostId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Errored,
}

impl<T> LoadState<T> {
    pub fn from_result<E>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(_) => Self::Errored,
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Success,
    Destructive,
}

/// A non-blocking, user-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: Variant,
}

impl Notification {
    pub const fn success(description: &'static str) -> Self {
        Self {
            title: "Success",
            description,
            variant: Variant::Success,
        }
    }

    pub const fn error(description: &'static str) -> Self {
        Self {
            title: "Error",
            description,
            variant: Variant::Destructive,
        }
    }

    pub const fn validation(description: &'static str) -> Self {
        Self {
            title: "Validation Error",
            description,
            variant: Variant::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

/// Navigation requests, mapped by each front end onto its own router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    List,
    Detail(PostId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct Effects {
    pub notification: Option<Notification>,
    pub navigate: Option<Destination>,
}

impl Effects {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn notify(notification: Notification) -> Self {
        Self {
            notification: Some(notification),
            navigate: None,
        }
    }

    pub fn then_navigate(mut self, destination: Destination) -> Self {
        self.navigate = Some(destination);
        self
    }
}

/// Controllers that queue a notification when a fetch fails.
pub trait DeferredNotification {
    fn pending_notification(&self) -> Option<Notification>;
    fn take_notification(&mut self) -> Option<Notification>;
}

macro_rules! impl_deferred_notification {
    ($($page:ty),+) => {
        $(
            impl DeferredNotification for $page {
                fn pending_notification(&self) -> Option<Notification> {
                    self.deferred
                }

                fn take_notification(&mut self) -> Option<Notification> {
                    self.deferred.take()
                }
            }
        )+
    };
}

impl_deferred_notification!(ListPage, DetailPage, EditPage);
