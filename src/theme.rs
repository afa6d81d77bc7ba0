use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};

const THEME_STORAGE_KEY: &str = "portfolio.theme";

/// Dark/light flag shared with every visual component. Dark is the default;
/// the last choice survives reloads via local storage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub is_dark: bool,
}

impl Theme {
    pub fn class(&self) -> &'static str {
        if self.is_dark {
            "app theme-dark"
        } else {
            "app theme-light"
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.is_dark {
            "Switch to light theme"
        } else {
            "Switch to dark theme"
        }
    }
}

pub fn provide_theme() -> Signal<Theme> {
    use_context_provider(|| Signal::new(Theme { is_dark: stored_is_dark() }))
}

pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

pub fn toggle_theme(mut theme: Signal<Theme>) {
    let next = Theme {
        is_dark: !theme().is_dark,
    };
    theme.set(next);
    let value = if next.is_dark { "dark" } else { "light" };
    let _ = LocalStorage::set(THEME_STORAGE_KEY, value);
}

fn stored_is_dark() -> bool {
    match LocalStorage::get::<String>(THEME_STORAGE_KEY) {
        Ok(value) => value != "light",
        Err(_) => true,
    }
}

#[component]
pub fn ThemeToggle(floating: Option<bool>) -> Element {
    let theme = use_theme();
    let class = if floating.unwrap_or(false) {
        "theme-toggle theme-toggle-floating"
    } else {
        "theme-toggle theme-toggle-inline"
    };
    let label = theme().toggle_label();
    let glyph = if theme().is_dark { "☀" } else { "☾" };
    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            aria_label: "{label}",
            title: "{label}",
            onclick: move |_| toggle_theme(theme),
            "{glyph}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn class_and_label_track_the_flag() {
        let dark = Theme { is_dark: true };
        let light = Theme { is_dark: false };
        assert_eq!(dark.class(), "app theme-dark");
        assert_eq!(light.class(), "app theme-light");
        assert_eq!(dark.toggle_label(), "Switch to light theme");
        assert_eq!(light.toggle_label(), "Switch to dark theme");
    }
}
