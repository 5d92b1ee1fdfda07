//! Site header: logo, navigation with active-route highlighting, CTA and
//! the mobile dropdown menu, decorated with clipped-corner accents.

use dioxus::prelude::*;

use crate::app::components::{Corner, CtaLink, RotatePosition};
use crate::app::pages::routes::Route;
use crate::domain::models::{NavLink, SiteSettings};
use crate::shared::hooks::use_mobile_menu;
use crate::shared::utils::is_active;

/// Viewport width below which the container corner accents are hidden.
const CORNER_HIDE_WIDTH: u32 = 1050;

fn menu_link_class(active: bool) -> &'static str {
    if active {
        "c-header__menu-link c-header__menu-link--active"
    } else {
        "c-header__menu-link"
    }
}

fn mobile_link_class(active: bool) -> &'static str {
    if active {
        "c-header__mobile-link c-header__mobile-link--active"
    } else {
        "c-header__mobile-link"
    }
}

#[component]
pub fn SiteHeader(data: Option<SiteSettings>) -> Element {
    // Current route, re-read on every render - active flags follow
    // navigation without caching.
    let route: Route = use_route();
    let current_path = route.to_string();

    let mut menu = use_mobile_menu();
    let menu_open = menu.read().is_open();

    // Missing settings degrade to a minimal shell instead of failing
    let Some(data) = data else {
        return rsx! {
            header { class: "c-header",
                div { class: "c-header__container",
                    div { class: "c-header__logo",
                        Link { to: Route::Home {}, span { "Logo" } }
                    }
                }
            }
        };
    };

    let SiteSettings { logo, menu_items, cta_button } = data;
    let has_menu = !menu_items.is_empty();

    let mobile_menu_class = if menu_open {
        "c-header__mobile-menu c-header__mobile-menu--open"
    } else {
        "c-header__mobile-menu"
    };

    rsx! {
        header { class: "c-header",
            div { class: "c-header__container",
                Corner {
                    top: 20,
                    left: -12,
                    rotate_position: RotatePosition::RightTop,
                    size: 12,
                    hide_below_width: CORNER_HIDE_WIDTH,
                }
                Corner {
                    top: 20,
                    left: 1030,
                    rotate_position: RotatePosition::LeftTop,
                    size: 12,
                    hide_below_width: CORNER_HIDE_WIDTH,
                }

                // Logo
                div { class: "c-header__logo",
                    Link { to: Route::Home {},
                        if let Some(logo) = &logo {
                            img {
                                src: "{logo.url}",
                                alt: logo.alt_text.as_deref().unwrap_or("Site Logo"),
                                width: "66",
                                height: "22",
                            }
                        } else {
                            span { "Logo" }
                        }
                    }
                }

                // Navigation menu
                if has_menu {
                    nav { class: "c-header__nav",
                        ul { class: "c-header__menu",
                            for item in menu_items.iter().cloned() {
                                li { class: "c-header__menu-item",
                                    MenuLink {
                                        item: item.clone(),
                                        class: menu_link_class(is_active(&item.url, &current_path)),
                                    }
                                }
                            }
                        }
                    }
                }

                // CTA button
                if let Some(cta) = cta_button.clone() {
                    div { class: "c-header__cta",
                        CtaLink { cta }
                    }
                }

                // Mobile menu button
                button {
                    class: "c-header__mobile-btn",
                    aria_label: "Toggle mobile menu",
                    onclick: move |_| menu.write().toggle(),
                    "Menu"
                }
            }

            // Mobile dropdown
            div { class: "{mobile_menu_class}",
                Corner {
                    top: -10,
                    left: 100,
                    rotate_position: RotatePosition::RightBottom,
                    size: 12,
                }
                if has_menu {
                    nav { class: "c-header__mobile-nav",
                        ul { class: "c-header__mobile-list",
                            for item in menu_items.iter().cloned() {
                                li { class: "c-header__mobile-item",
                                    MenuLink {
                                        item: item.clone(),
                                        class: mobile_link_class(is_active(&item.url, &current_path)),
                                        onselect: move |_| menu.write().select_link(),
                                    }
                                }
                            }
                        }
                    }
                }
                if let Some(cta) = cta_button {
                    div { class: "c-header__mobile-cta",
                        CtaLink {
                            cta,
                            class: "c-header__mobile-cta-btn",
                            onselect: move |_| menu.write().select_link(),
                        }
                    }
                }
            }
        }
    }
}

/// One navigation entry. External links leave the router; internal links
/// navigate in place.
#[component]
fn MenuLink(
    item: NavLink,
    #[props(into)] class: String,
    onselect: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        if item.is_external {
            a {
                class: "{class}",
                href: "{item.url}",
                target: "_blank",
                rel: "noopener noreferrer",
                onclick: move |_| {
                    if let Some(handler) = &onselect {
                        handler.call(());
                    }
                },
                "{item.label}"
            }
        } else {
            Link {
                class: "{class}",
                to: item.url.clone(),
                onclick: move |_| {
                    if let Some(handler) = &onselect {
                        handler.call(());
                    }
                },
                "{item.label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_link_classes() {
        assert_eq!(menu_link_class(false), "c-header__menu-link");
        assert!(menu_link_class(true).ends_with("--active"));
        assert!(mobile_link_class(true).ends_with("--active"));
    }

    #[test]
    fn test_active_flags_for_menu() {
        let menu_items = vec![
            NavLink { label: "Home".into(), url: "/".into(), is_external: false },
            NavLink { label: "Blog".into(), url: "/blog".into(), is_external: false },
        ];
        let current_path = "/blog/";

        let flags: Vec<bool> = menu_items
            .iter()
            .map(|item| is_active(&item.url, current_path))
            .collect();
        assert_eq!(flags, vec![false, true]);
    }
}
