use blog_client::pages::{Field, Notification, PostForm, Variant};
use blog_client::render::{display_author, paragraphs, preview};
use blog_client::Post;
use dioxus::prelude::*;

use crate::Route;

const MAX_TOASTS: usize = 3;

#[derive(Clone, Copy, PartialEq)]
pub struct Toast {
    id: u64,
    notification: Notification,
}

impl Toast {
    fn class(&self) -> &'static str {
        match self.notification.variant {
            Variant::Destructive => "toast destructive",
            Variant::Success => "toast",
        }
    }
}

/// Queue of visible notifications, shared through context.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn push(&mut self, notification: Notification) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);

        let mut toasts = self.toasts.write();
        toasts.push(Toast { id, notification });
        if toasts.len() > MAX_TOASTS {
            toasts.remove(0);
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|t| t.id != id);
    }
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

#[component]
fn Toasts() -> Element {
    let mut toaster = use_toaster();
    let toasts = toaster.toasts.read().clone();

    rsx! {
        div { class: "toasts",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: toast.class(),
                    div {
                        p { class: "toast-title", "{toast.notification.title}" }
                        p { class: "toast-description", "{toast.notification.description}" }
                    }
                    button {
                        class: "toast-close",
                        onclick: move |_| toaster.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "container main", Outlet::<Route> {} }
            Footer {}
            Toasts {}
        }
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        header { class: "navbar",
            div { class: "container navbar-inner",
                Link { to: Route::Home {}, class: "brand", "BlogSphere" }
                Link { to: Route::CreatePost {}, class: "button primary", "✎ New Post" }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "container footer-inner",
                div {
                    Link { to: Route::Home {}, class: "brand", "BlogSphere" }
                    p { class: "muted small", "Crafting stories, one post at a time" }
                }
                nav { class: "footer-links",
                    Link { to: Route::Home {}, "Home" }
                    Link { to: Route::CreatePost {}, "Create Post" }
                }
            }
        }
    }
}

/// Summary of a post for the index grid.
#[component]
pub fn PostCard(post: Post) -> Element {
    rsx! {
        article { class: "card",
            Link { to: Route::PostDetail { id: post.id.clone() }, class: "card-body",
                h2 { class: "card-title", "{post.title}" }
                p { class: "muted", "{preview(&post.content)}" }
            }
            div { class: "card-footer muted small", "By {display_author(&post.author)}" }
        }
    }
}

/// Post content, one paragraph per line.
#[component]
pub fn PostBody(content: String) -> Element {
    rsx! {
        div { class: "prose",
            for (i, paragraph) in paragraphs(&content).enumerate() {
                p { key: "{i}", "{paragraph}" }
            }
        }
    }
}

#[component]
pub fn EmptyState() -> Element {
    rsx! {
        div { class: "empty",
            h3 { "No posts found" }
            p { class: "muted", "Be the first to create a post!" }
        }
    }
}

#[component]
pub fn PostMissing() -> Element {
    rsx! {
        div { class: "empty",
            h3 { "Post not found" }
            p { class: "muted", "The post you're looking for doesn't exist or has been removed." }
            Link { to: Route::Home {}, class: "button primary", "Go to Homepage" }
        }
    }
}

#[component]
pub fn CardSkeleton() -> Element {
    rsx! {
        div { class: "skeleton-card",
            div { class: "skeleton", style: "height: 2rem; width: 75%" }
            div { class: "skeleton", style: "height: 5rem" }
            div { class: "skeleton", style: "height: 1rem; width: 33%" }
        }
    }
}

#[component]
pub fn DetailSkeleton() -> Element {
    rsx! {
        div { class: "stack",
            div { class: "skeleton", style: "height: 3rem; width: 75%" }
            div { class: "skeleton", style: "height: 1.5rem; width: 25%" }
            div { class: "skeleton", style: "height: 8rem" }
            div { class: "skeleton", style: "height: 8rem" }
        }
    }
}

#[component]
pub fn FormSkeleton() -> Element {
    rsx! {
        div { class: "stack",
            div { class: "skeleton", style: "height: 2.5rem" }
            div { class: "skeleton", style: "height: 2.5rem" }
            div { class: "skeleton", style: "height: 10rem" }
        }
    }
}

/// The explicit confirm step in front of a destructive action.
#[component]
pub fn ConfirmDialog(busy: bool, on_cancel: EventHandler<MouseEvent>, on_confirm: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "overlay",
            div { class: "dialog", role: "alertdialog",
                h2 { "Are you sure?" }
                p { class: "muted", "This action cannot be undone. This will permanently delete the post." }
                div { class: "dialog-actions",
                    button {
                        class: "button outline",
                        disabled: busy,
                        onclick: move |evt| on_cancel.call(evt),
                        "Cancel"
                    }
                    button {
                        class: "button danger",
                        disabled: busy,
                        onclick: move |evt| on_confirm.call(evt),
                        if busy { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}

/// Title, author and content inputs plus the submit/cancel row. The caller
/// owns the enclosing `form` element.
#[component]
pub fn PostFormFields(
    form: PostForm,
    submit_label: &'static str,
    busy_label: &'static str,
    cancel_to: Route,
    on_input: EventHandler<(Field, String)>,
) -> Element {
    let busy = form.is_submitting();

    rsx! {
        div { class: "field",
            label { r#for: "title", "Title" }
            input {
                id: "title",
                name: "title",
                r#type: "text",
                placeholder: "Enter post title",
                required: true,
                value: "{form.title}",
                oninput: move |evt| on_input.call((Field::Title, evt.value())),
            }
        }
        div { class: "field",
            label { r#for: "author", "Author" }
            input {
                id: "author",
                name: "author",
                r#type: "text",
                placeholder: "Anonymous",
                value: "{form.author}",
                oninput: move |evt| on_input.call((Field::Author, evt.value())),
            }
        }
        div { class: "field",
            label { r#for: "content", "Content" }
            textarea {
                id: "content",
                name: "content",
                placeholder: "Write your blog post here...",
                required: true,
                rows: "12",
                value: "{form.content}",
                oninput: move |evt| on_input.call((Field::Content, evt.value())),
            }
        }
        div { class: "form-actions",
            Link { to: cancel_to, class: "button outline", "Cancel" }
            button {
                r#type: "submit",
                class: "button primary",
                disabled: busy,
                if busy { "{busy_label}" } else { "{submit_label}" }
            }
        }
    }
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "no route matched");

    rsx! {
        div { class: "not-found",
            h1 { "404" }
            p { class: "muted", "The page you're looking for doesn't exist" }
            Link { to: Route::Home {}, class: "button primary", "Return to Home" }
        }
    }
}
