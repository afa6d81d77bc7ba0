use dioxus::prelude::*;

use crate::theme::ThemeToggle;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("stats", "Stats"),
    ("skills", "Skills"),
    ("certificates", "Certificates"),
    ("contact", "Contact"),
];

pub fn scroll_to_section(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            if let Some(element) = document.get_element_by_id(id) {
                element.scroll_into_view();
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

#[component]
pub fn Navbar() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        nav { class: "navbar",
            div { class: "nav-container",
                button {
                    r#type: "button",
                    class: "nav-logo",
                    onclick: move |_| {
                        menu_open.set(false);
                        scroll_to_section("home");
                    },
                    span { class: "gradient-text", "Franz Kingstein" }
                }
                div {
                    class: if menu_open() { "nav-menu active" } else { "nav-menu" },
                    for (id, label) in NAV_ITEMS.iter() {
                        button {
                            r#type: "button",
                            class: "nav-link",
                            onclick: move |_| {
                                menu_open.set(false);
                                scroll_to_section(id);
                            },
                            "{label}"
                        }
                    }
                }
                div { class: "nav-actions",
                    ThemeToggle { floating: None }
                    button {
                        r#type: "button",
                        class: "nav-toggle",
                        aria_label: "Toggle navigation",
                        onclick: move |_| menu_open.set(!menu_open()),
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }
        }
    }
}
