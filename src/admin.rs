use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::content::{commit_update, use_content, ContentUpdate, PortfolioContent, SocialLinksUpdate};

/// The editor is gated by a keyboard chord alone; anyone at the keyboard
/// can open it. Edits die with the page.
pub fn provide_admin_visibility() -> Signal<bool> {
    use_context_provider(|| Signal::new(false))
}

pub fn use_admin_visibility() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

pub fn toggle_admin(mut visible: Signal<bool>) {
    let next = toggle_flag(visible());
    visible.set(next);
    tracing::debug!("admin editor {}", if next { "opened" } else { "closed" });
}

fn toggle_flag(value: bool) -> bool {
    !value
}

fn is_admin_chord(ctrl: bool, shift: bool, key: &str) -> bool {
    ctrl && shift && key == "#"
}

fn edit_field(mut draft: Signal<EditorDraft>, name: &str, value: String) {
    let mut next = draft();
    next.apply_field(name, value);
    draft.set(next);
}

/// Working copy of the content store while the editor is open. Discarded
/// wholesale on close-without-save.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorDraft {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub about_text: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_location: String,
    pub social_github: String,
    pub social_linkedin: String,
    pub social_email: String,
    pub social_medium: String,
}

impl EditorDraft {
    pub fn from_content(content: &PortfolioContent) -> Self {
        Self {
            hero_title: content.hero_title.clone(),
            hero_subtitle: content.hero_subtitle.clone(),
            about_text: content.about_text.clone(),
            contact_email: content.contact_email.clone(),
            contact_phone: content.contact_phone.clone(),
            contact_location: content.contact_location.clone(),
            social_github: content.social_links.github.clone(),
            social_linkedin: content.social_links.linkedin.clone(),
            social_email: content.social_links.email.clone(),
            social_medium: content.social_links.medium.clone(),
        }
    }

    /// Dotted `social.*` names route into the nested links; unknown names
    /// are ignored.
    pub fn apply_field(&mut self, name: &str, value: String) {
        match name {
            "hero_title" => self.hero_title = value,
            "hero_subtitle" => self.hero_subtitle = value,
            "about_text" => self.about_text = value,
            "contact_email" => self.contact_email = value,
            "contact_phone" => self.contact_phone = value,
            "contact_location" => self.contact_location = value,
            "social.github" => self.social_github = value,
            "social.linkedin" => self.social_linkedin = value,
            "social.email" => self.social_email = value,
            "social.medium" => self.social_medium = value,
            other => tracing::debug!("ignoring unknown editor field {other}"),
        }
    }

    /// Save commits the whole draft, so every field is present.
    pub fn into_update(self) -> ContentUpdate {
        ContentUpdate {
            hero_title: Some(self.hero_title),
            hero_subtitle: Some(self.hero_subtitle),
            about_text: Some(self.about_text),
            contact_email: Some(self.contact_email),
            contact_phone: Some(self.contact_phone),
            contact_location: Some(self.contact_location),
            social_links: Some(SocialLinksUpdate {
                github: Some(self.social_github),
                linkedin: Some(self.social_linkedin),
                email: Some(self.social_email),
                medium: Some(self.social_medium),
            }),
        }
    }
}

#[cfg(target_arch = "wasm32")]
struct HotkeyListener {
    handler: Rc<Closure<dyn FnMut(web_sys::KeyboardEvent)>>,
}

/// Installs the document-level chord for the provider's lifetime and
/// renders the editor overlay while it is open.
#[component]
pub fn AdminLayer() -> Element {
    let visible = use_admin_visibility();
    #[cfg(not(target_arch = "wasm32"))]
    let _visible = visible;
    #[cfg(target_arch = "wasm32")]
    let mut listener = use_signal(|| None::<HotkeyListener>);

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        if listener.read().is_some() {
            return;
        }
        let document = match web_sys::window().and_then(|window| window.document()) {
            Some(document) => document,
            None => return,
        };

        let handler = Rc::new(Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            if is_admin_chord(event.ctrl_key(), event.shift_key(), &event.key()) {
                event.prevent_default();
                toggle_admin(visible);
            }
        }) as Box<dyn FnMut(_)>));

        let _ = document.add_event_listener_with_callback(
            "keydown",
            handler.as_ref().as_ref().unchecked_ref(),
        );
        listener.set(Some(HotkeyListener { handler }));
    });

    #[cfg(target_arch = "wasm32")]
    {
        let listener = listener;
        use_drop(move || {
            let binding = listener.read();
            let Some(listener) = binding.as_ref() else {
                return;
            };
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    listener.handler.as_ref().as_ref().unchecked_ref(),
                );
            }
        });
    }

    rsx! {
        AdminPanel {}
    }
}

#[component]
fn AdminPanel() -> Element {
    let visible = use_admin_visibility();
    let content = use_content();
    let mut draft = use_signal(EditorDraft::default);
    let mut seeded = use_signal(|| false);
    let mut flash = use_signal(|| None::<String>);

    use_effect(move || {
        if visible() && !seeded() {
            draft.set(EditorDraft::from_content(&content()));
            seeded.set(true);
        } else if !visible() && seeded() {
            seeded.set(false);
        }
    });

    if !visible() {
        return rsx! {};
    }

    rsx! {
        div { class: "admin-overlay",
            div { class: "admin-panel", role: "dialog", aria_label: "Content editor",
                div { class: "admin-header",
                    h2 { "Content Editor" }
                    button {
                        r#type: "button",
                        class: "admin-close",
                        aria_label: "Close editor",
                        onclick: move |_| {
                            flash.set(None);
                            toggle_admin(visible);
                        },
                        "✕"
                    }
                }
                div { class: "admin-body",
                    div { class: "admin-section",
                        h3 { "Hero Section" }
                        label { r#for: "hero_title", "Hero Title" }
                        input {
                            id: "hero_title",
                            r#type: "text",
                            value: "{draft().hero_title}",
                            oninput: move |event| edit_field(draft, "hero_title", event.value()),
                        }
                        label { r#for: "hero_subtitle", "Hero Subtitle" }
                        input {
                            id: "hero_subtitle",
                            r#type: "text",
                            value: "{draft().hero_subtitle}",
                            oninput: move |event| edit_field(draft, "hero_subtitle", event.value()),
                        }
                    }
                    div { class: "admin-section",
                        h3 { "About Section" }
                        label { r#for: "about_text", "About Text" }
                        textarea {
                            id: "about_text",
                            rows: "4",
                            value: "{draft().about_text}",
                            oninput: move |event| edit_field(draft, "about_text", event.value()),
                        }
                    }
                    div { class: "admin-section",
                        h3 { "Contact Information" }
                        label { r#for: "contact_email", "Email" }
                        input {
                            id: "contact_email",
                            r#type: "email",
                            value: "{draft().contact_email}",
                            oninput: move |event| edit_field(draft, "contact_email", event.value()),
                        }
                        label { r#for: "contact_phone", "Phone" }
                        input {
                            id: "contact_phone",
                            r#type: "text",
                            value: "{draft().contact_phone}",
                            oninput: move |event| edit_field(draft, "contact_phone", event.value()),
                        }
                        label { r#for: "contact_location", "Location" }
                        input {
                            id: "contact_location",
                            r#type: "text",
                            value: "{draft().contact_location}",
                            oninput: move |event| edit_field(draft, "contact_location", event.value()),
                        }
                    }
                    div { class: "admin-section",
                        h3 { "Social Links" }
                        label { r#for: "social_github", "GitHub" }
                        input {
                            id: "social_github",
                            r#type: "url",
                            value: "{draft().social_github}",
                            oninput: move |event| edit_field(draft, "social.github", event.value()),
                        }
                        label { r#for: "social_linkedin", "LinkedIn" }
                        input {
                            id: "social_linkedin",
                            r#type: "url",
                            value: "{draft().social_linkedin}",
                            oninput: move |event| edit_field(draft, "social.linkedin", event.value()),
                        }
                        label { r#for: "social_email", "Email" }
                        input {
                            id: "social_email",
                            r#type: "email",
                            value: "{draft().social_email}",
                            oninput: move |event| edit_field(draft, "social.email", event.value()),
                        }
                        label { r#for: "social_medium", "Medium" }
                        input {
                            id: "social_medium",
                            r#type: "url",
                            value: "{draft().social_medium}",
                            oninput: move |event| edit_field(draft, "social.medium", event.value()),
                        }
                    }
                    if let Some(message) = flash() {
                        p { class: "admin-flash", "{message}" }
                    }
                }
                div { class: "admin-footer",
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            draft.set(EditorDraft::from_content(&content()));
                            flash.set(None);
                        },
                        "Reset"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-primary",
                        onclick: move |_| {
                            commit_update(content, draft().into_update());
                            flash.set(Some("Portfolio data updated successfully!".to_string()));
                        },
                        "Save Changes"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggling_twice_restores_the_original_state() {
        assert_eq!(toggle_flag(toggle_flag(false)), false);
        assert_eq!(toggle_flag(toggle_flag(true)), true);
    }

    #[test]
    fn chord_requires_ctrl_shift_and_hash() {
        assert!(is_admin_chord(true, true, "#"));
        assert!(!is_admin_chord(true, false, "#"));
        assert!(!is_admin_chord(false, true, "#"));
        assert!(!is_admin_chord(true, true, "3"));
    }

    #[test]
    fn dotted_names_route_into_social_links() {
        let mut draft = EditorDraft::default();
        draft.apply_field("social.github", "https://github.com/someone".to_string());
        draft.apply_field("hero_title", "Hi".to_string());
        assert_eq!(draft.social_github, "https://github.com/someone");
        assert_eq!(draft.hero_title, "Hi");
    }

    #[test]
    fn unknown_field_names_are_ignored() {
        let mut draft = EditorDraft::default();
        let before = draft.clone();
        draft.apply_field("does_not_exist", "value".to_string());
        assert_eq!(draft, before);
    }

    #[test]
    fn saving_the_draft_carries_every_field_into_the_store() {
        let content = PortfolioContent::default();
        let mut draft = EditorDraft::from_content(&content);
        draft.apply_field("hero_title", "New Title".to_string());
        draft.apply_field("social.medium", "https://medium.com/@new".to_string());

        let mut updated = content.clone();
        updated.merge(draft.into_update());
        assert_eq!(updated.hero_title, "New Title");
        assert_eq!(updated.social_links.medium, "https://medium.com/@new");
        assert_eq!(updated.hero_subtitle, content.hero_subtitle);
        assert_eq!(updated.social_links.github, content.social_links.github);
    }
}
