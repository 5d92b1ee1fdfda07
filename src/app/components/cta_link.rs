use dioxus::prelude::*;

use crate::domain::models::CallToAction;

/// Call-to-action rendered as a primary button. External targets open in
/// a new tab with noopener/noreferrer; internal targets go through the
/// router.
#[component]
pub fn CtaLink(
    cta: CallToAction,
    /// Extra class for placement variants (desktop bar vs mobile menu).
    #[props(into)]
    class: Option<String>,
    /// Fired when the CTA is activated (the mobile menu collapses on it).
    onselect: Option<EventHandler<()>>,
) -> Element {
    let extra = class.unwrap_or_default();
    let btn_class = format!("c-button c-button--primary {extra}");

    rsx! {
        if cta.is_external {
            a {
                class: "{btn_class}",
                href: "{cta.url}",
                target: "_blank",
                rel: "noopener noreferrer",
                onclick: move |_| {
                    if let Some(handler) = &onselect {
                        handler.call(());
                    }
                },
                "{cta.text}"
            }
        } else {
            Link {
                class: "{btn_class}",
                to: cta.url.clone(),
                onclick: move |_| {
                    if let Some(handler) = &onselect {
                        handler.call(());
                    }
                },
                "{cta.text}"
            }
        }
    }
}
