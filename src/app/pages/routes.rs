use dioxus::document;
use dioxus::prelude::*;

use crate::app::layouts::SiteHeader;
use crate::server_fns::get_site_settings;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/blog")]
    Blog {},
    #[route("/blog/:slug")]
    BlogPost { slug: String },
    #[route("/contact")]
    Contact {},
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Site shell app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn SiteLayout() -> Element {
    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    // Header settings come from the content file on the server; the
    // header itself treats their absence as a valid fallback state.
    let settings = use_server_future(move || async move { get_site_settings().await })?;
    let data = match &*settings.read() {
        Some(Ok(data)) => data.clone(),
        Some(Err(e)) => {
            tracing::error!("Failed to load site settings: {e}");
            None
        }
        None => None,
    };

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            SiteHeader { data }

            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Welcome" }
            p { class: "c-page__lead", "A small site shell with clipped corners." }
        }
    }
}

#[component]
fn About() -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "About" }
            p { "Who we are and what we do." }
        }
    }
}

#[component]
fn Blog() -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Blog" }
            ul { class: "c-page__list",
                li {
                    Link { to: Route::BlogPost { slug: "hello-world".to_string() }, "Hello, world" }
                }
            }
        }
    }
}

#[component]
fn BlogPost(slug: String) -> Element {
    rsx! {
        article { class: "c-page",
            h1 { class: "c-page__title", "{slug}" }
            p { "Post body goes here." }
        }
    }
}

#[component]
fn Contact() -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Contact" }
            p { "Drop us a line." }
        }
    }
}
