use blog_client::pages::{
    CreatePage, DeferredNotification, DeleteState, DetailPage, DetailView, EditPage, EditView,
    Effects, Field, ListPage, ListView,
};
use blog_client::render::display_author;
use blog_client::{BlogClientTrait, PostId};
use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::components::{
    use_toaster, CardSkeleton, ConfirmDialog, DetailSkeleton, EmptyState, FormSkeleton, PostBody,
    PostCard, PostFormFields, PostMissing, Toaster,
};
use crate::{Api, Route};

fn apply_effects(effects: Effects, mut toaster: Toaster, navigator: Navigator) {
    if let Some(notification) = effects.notification {
        toaster.push(notification);
    }
    if let Some(destination) = effects.navigate {
        navigator.push(Route::from(destination));
    }
}

/// Raises a controller's queued fetch-failure notification after render,
/// never during the render pass that discovered it.
fn use_deferred_notification<P: DeferredNotification + 'static>(mut page: Signal<P>) {
    let mut toaster = use_toaster();

    use_effect(move || {
        if page.read().pending_notification().is_none() {
            return;
        }
        if let Some(notification) = page.write().take_notification() {
            toaster.push(notification);
        }
    });
}

#[component]
pub fn Home() -> Element {
    let api = use_context::<Api>();
    let mut page = use_signal(ListPage::new);

    use_future(move || {
        let api = api.clone();
        async move {
            let result = api.list_posts().await;
            page.write().resolve(result);
        }
    });
    use_deferred_notification(page);

    rsx! {
        div { class: "fade-in",
            h1 { class: "page-title", "Recent Posts" }

            match page.read().view() {
                ListView::Loading => rsx! {
                    div { class: "post-grid",
                        for i in 0..6 {
                            CardSkeleton { key: "{i}" }
                        }
                    }
                },
                ListView::Posts(posts) => rsx! {
                    div { class: "post-grid",
                        for post in posts {
                            PostCard { key: "{post.id}", post: post.clone() }
                        }
                    }
                },
                ListView::Empty | ListView::Failed => rsx! { EmptyState {} },
            }
        }
    }
}

#[component]
pub fn PostDetail(id: PostId) -> Element {
    let api = use_context::<Api>();
    let navigator = use_navigator();
    let toaster = use_toaster();
    let mut page = use_signal(|| DetailPage::new(id.clone()));

    let loader_api = api.clone();
    let _loader = use_resource(use_reactive!(|(id,)| {
        let api = loader_api.clone();
        async move {
            if page.peek().id() != &id {
                page.set(DetailPage::new(id.clone()));
            }
            let result = api.get_post_by_id(&id).await;
            page.write().resolve(result);
        }
    }));
    use_deferred_notification(page);

    let on_confirm = move |_: MouseEvent| {
        let Some(id) = page.write().confirm_delete() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            let result = api.delete_post(&id).await;
            let effects = page.write().finish_delete(result);
            apply_effects(effects, toaster, navigator);
        });
    };

    let delete_state = page.read().delete_state();

    rsx! {
        div { class: "narrow fade-in",
            Link { to: Route::Home {}, class: "back-link", "← Back to all posts" }

            match page.read().view() {
                DetailView::Loading => rsx! { DetailSkeleton {} },
                DetailView::Found(post) => rsx! {
                    div { class: "post-header",
                        div {
                            h1 { class: "post-title", "{post.title}" }
                            p { class: "muted", "By {display_author(&post.author)}" }
                        }
                        div { class: "actions",
                            Link {
                                to: Route::EditPost { id: post.id.clone() },
                                class: "button outline",
                                "Edit"
                            }
                            button {
                                class: "button outline",
                                onclick: move |_| page.write().request_delete(),
                                "Delete"
                            }
                        }
                    }
                    PostBody { content: post.content.clone() }

                    if delete_state != DeleteState::Idle {
                        ConfirmDialog {
                            busy: delete_state == DeleteState::Deleting,
                            on_cancel: move |_| page.write().cancel_delete(),
                            on_confirm,
                        }
                    }
                },
                DetailView::NotFound => rsx! { PostMissing {} },
            }
        }
    }
}

#[component]
pub fn CreatePost() -> Element {
    let api = use_context::<Api>();
    let navigator = use_navigator();
    let mut toaster = use_toaster();
    let mut page = use_signal(CreatePage::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let draft = page.write().begin_submit();
        let post = match draft {
            Ok(post) => post,
            Err(e) => {
                if let Some(notification) = e.notification() {
                    toaster.push(notification);
                }
                return;
            }
        };

        let api = api.clone();
        spawn(async move {
            let result = api.create_post(post).await;
            let effects = page.write().finish_submit(result);
            apply_effects(effects, toaster, navigator);
        });
    };

    rsx! {
        div { class: "narrow fade-in",
            h1 { class: "page-title", "Create New Post" }

            form { class: "stack", onsubmit: on_submit,
                PostFormFields {
                    form: page.read().form().clone(),
                    submit_label: "Create Post",
                    busy_label: "Creating...",
                    cancel_to: Route::Home {},
                    on_input: move |(field, value): (Field, String)| page.write().set(field, value),
                }
            }
        }
    }
}

#[component]
pub fn EditPost(id: PostId) -> Element {
    let api = use_context::<Api>();
    let navigator = use_navigator();
    let mut toaster = use_toaster();
    let mut page = use_signal(|| EditPage::new(id.clone()));

    let route_id = id.clone();
    let loader_api = api.clone();
    let _loader = use_resource(use_reactive!(|(id,)| {
        let api = loader_api.clone();
        async move {
            if page.peek().id() != &id {
                page.set(EditPage::new(id.clone()));
            }
            let result = api.get_post_by_id(&id).await;
            page.write().resolve(result);
        }
    }));
    use_deferred_notification(page);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let draft = page.write().begin_submit();
        let patch = match draft {
            Ok(patch) => patch,
            Err(e) => {
                if let Some(notification) = e.notification() {
                    toaster.push(notification);
                }
                return;
            }
        };

        let api = api.clone();
        spawn(async move {
            let id = page.peek().id().clone();
            let result = api.update_post(&id, patch).await;
            let effects = page.write().finish_submit(result);
            apply_effects(effects, toaster, navigator);
        });
    };

    rsx! {
        div { class: "narrow fade-in",
            Link { to: Route::PostDetail { id: route_id.clone() }, class: "back-link", "← Back to post" }

            div { class: "page-header",
                h1 { class: "page-title", "Edit Post" }
                p { class: "muted", "Refine and improve your story. Make it shine!" }
            }

            match page.read().view() {
                EditView::Loading => rsx! { FormSkeleton {} },
                EditView::Editing(form) => rsx! {
                    form { class: "stack", onsubmit: on_submit,
                        PostFormFields {
                            form: form.clone(),
                            submit_label: "Save Changes",
                            busy_label: "Saving...",
                            cancel_to: Route::PostDetail { id: route_id.clone() },
                            on_input: move |(field, value): (Field, String)| page.write().set(field, value),
                        }
                    }
                },
                EditView::NotFound => rsx! { PostMissing {} },
            }
        }
    }
}
