use dioxus::prelude::*;

use crate::content::use_content;

const HEADLINE_STATS: &[(&str, &str)] = &[
    ("3+", "Years Experience"),
    ("10+", "Projects Completed"),
    ("100%", "Client Satisfaction"),
];

#[component]
pub fn AboutSection() -> Element {
    let content = use_content();
    let snapshot = content();

    rsx! {
        section { id: "about", class: "about",
            div { class: "container",
                div { class: "about-card",
                    h2 { class: "section-title", "About Me" }
                    p { class: "about-description", "{snapshot.about_text}" }
                    p { class: "about-description",
                        "I specialize in "
                        span { class: "highlight", "Machine Learning" }
                        ", "
                        span { class: "highlight", "AI" }
                        ", "
                        span { class: "highlight", "Frontend Engineering" }
                        ", and "
                        span { class: "highlight", "Data Analysis" }
                        ", building intelligent, performant, and human-centered products."
                    }
                    div { class: "about-stats",
                        for (value, label) in HEADLINE_STATS.iter() {
                            div { class: "stat",
                                h3 { "{value}" }
                                p { "{label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
