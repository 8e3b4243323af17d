use std::rc::Rc;

use blog_client::pages::Destination;
use blog_client::{CachedClient, ClientConfig, PostId, DEFAULT_BASE_URL};
use dioxus::prelude::*;

use crate::client::BlogClientHttp;
use crate::components::{Layout, PageNotFound, Toaster};
use crate::pages::{CreatePost, EditPost, Home, PostDetail};

mod client;
mod components;
mod pages;

/// Shared, cached API handle provided to every page through context.
pub type Api = Rc<CachedClient<BlogClientHttp>>;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/posts/:id")]
        PostDetail { id: PostId },
        #[route("/create")]
        CreatePost {},
        #[route("/edit/:id")]
        EditPost { id: PostId },
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::List => Route::Home {},
            Destination::Detail(id) => Route::PostDetail { id },
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn api_config() -> ClientConfig {
    let base_url = option_env!("BLOG_API_URL").unwrap_or(DEFAULT_BASE_URL);
    ClientConfig::new(base_url).unwrap_or_else(|e| {
        tracing::error!(error = %e, "falling back to the default api url");
        ClientConfig::default()
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| -> Api { Rc::new(CachedClient::new(BlogClientHttp::connect(&api_config()))) });
    use_context_provider(Toaster::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
