use dioxus::prelude::*;
use dioxus_router::{Link, Routable, Router};

use crate::about::AboutSection;
use crate::admin::{provide_admin_visibility, AdminLayer};
use crate::certificates::CertificatesSection;
use crate::config::use_runtime_config;
use crate::contact::ContactSection;
use crate::content::provide_content_store;
use crate::hero::HeroSection;
use crate::navbar::Navbar;
use crate::projects::ProjectsSection;
use crate::skills::SkillsSection;
use crate::stats::StatsDashboard;
use crate::theme::{provide_theme, use_theme};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config_resource = use_runtime_config();
    let config = match config_resource() {
        None => {
            return rsx! {
                document::Title { "Franz Kingstein | Portfolio" }
                div { class: "page loading",
                    h1 { "Loading..." }
                }
            }
        }
        Some(Ok(config)) => config,
        Some(Err(message)) => {
            return rsx! {
                document::Title { "Franz Kingstein | Portfolio" }
                div { class: "page loading",
                    h1 { "Config load failed" }
                    p { "{message}" }
                }
            }
        }
    };

    use_context_provider(|| config);
    provide_theme();
    provide_content_store();
    provide_admin_visibility();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "description", content: "Portfolio of Franz Kingstein: data science, AI, and frontend work." }
        Router::<Route> {}
    }
}

#[derive(Clone, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Home() -> Element {
    let theme = use_theme();
    rsx! {
        document::Title { "Franz Kingstein | Portfolio" }
        div { class: "{theme().class()}",
            Navbar {}
            main {
                HeroSection {}
                AboutSection {}
                ProjectsSection {}
                StatsDashboard {}
                SkillsSection {}
                CertificatesSection {}
                ContactSection {}
            }
            AdminLayer {}
        }
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        document::Title { "Not Found | Franz Kingstein" }
        div { class: "page not-found",
            h1 { "Page not found" }
            p { "Missing: /{path}" }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back home" }
        }
    }
}
