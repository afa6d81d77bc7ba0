use dioxus::prelude::*;

use crate::content::use_content;
use crate::navbar::scroll_to_section;

/// The last word of the title gets the gradient treatment.
fn split_title(title: &str) -> (String, String) {
    match title.trim().rsplit_once(' ') {
        Some((head, last)) => (head.to_string(), last.to_string()),
        None => (String::new(), title.trim().to_string()),
    }
}

#[component]
pub fn HeroSection() -> Element {
    let content = use_content();
    let snapshot = content();
    let (title_head, title_accent) = split_title(&snapshot.hero_title);

    rsx! {
        section { id: "home", class: "hero",
            div { class: "container",
                div { class: "hero-content",
                    h1 { class: "hero-title",
                        "{title_head} "
                        span { class: "gradient-text", "{title_accent}" }
                    }
                    p { class: "hero-subtitle", "{snapshot.hero_subtitle}" }
                    div { class: "hero-buttons",
                        button {
                            r#type: "button",
                            class: "btn btn-primary",
                            onclick: move |_| scroll_to_section("projects"),
                            "View My Work"
                        }
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            onclick: move |_| scroll_to_section("contact"),
                            "Get In Touch"
                        }
                    }
                    div { class: "social-links",
                        a {
                            href: "{snapshot.social_links.github}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "GitHub",
                            "GitHub"
                        }
                        a {
                            href: "{snapshot.social_links.linkedin}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "LinkedIn",
                            "LinkedIn"
                        }
                        a { href: "{snapshot.social_links.email}", aria_label: "Email", "Email" }
                        a {
                            href: "{snapshot.social_links.medium}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "Medium",
                            "Medium"
                        }
                    }
                }
            }
            button {
                r#type: "button",
                class: "scroll-indicator",
                aria_label: "Scroll to next section",
                onclick: move |_| scroll_to_section("about"),
                "▼"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn last_word_becomes_the_accent() {
        assert_eq!(
            split_title("Hello, I'm Franz"),
            ("Hello, I'm".to_string(), "Franz".to_string())
        );
    }

    #[test]
    fn single_word_titles_are_all_accent() {
        assert_eq!(split_title("Franz"), (String::new(), "Franz".to_string()));
    }
}
