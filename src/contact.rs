use dioxus::prelude::*;

use crate::config::RuntimeConfig;
use crate::content::use_content;
use crate::delivery::{attempt, select_strategy, ContactDraft, DeliveryAck};

fn ack_message(ack: &DeliveryAck) -> String {
    match ack {
        DeliveryAck::Sent(message) => message.clone(),
        DeliveryAck::Receipt => "Delivery receipt opened in a new tab.".to_string(),
        DeliveryAck::MailHandoff => "Opening your mail client to finish sending.".to_string(),
    }
}

#[component]
pub fn ContactSection() -> Element {
    let config = use_context::<RuntimeConfig>();
    let content = use_content();
    let mut draft = use_signal(ContactDraft::default);
    let submitting = use_signal(|| false);
    let flash_success = use_signal(|| None::<String>);
    let flash_error = use_signal(|| None::<String>);

    let snapshot = content();
    let submit_disabled = submitting()
        || draft().name.trim().is_empty()
        || draft().email.trim().is_empty()
        || draft().subject.trim().is_empty()
        || draft().message.trim().is_empty();

    rsx! {
        section { id: "contact", class: "contact",
            div { class: "container",
                div { class: "contact-header",
                    h2 { class: "section-title", "Get In Touch" }
                    p { class: "contact-subtitle", "Let's collaborate on something amazing together" }
                }
                div { class: "contact-layout",
                    div { class: "contact-info",
                        div { class: "info-card",
                            span { class: "info-label", "Email" }
                            a { href: "mailto:{snapshot.contact_email}", class: "info-value",
                                "{snapshot.contact_email}"
                            }
                        }
                        div { class: "info-card",
                            span { class: "info-label", "Phone" }
                            a { href: "tel:{snapshot.contact_phone}", class: "info-value",
                                "{snapshot.contact_phone}"
                            }
                        }
                        div { class: "info-card",
                            span { class: "info-label", "Location" }
                            span { class: "info-value", "{snapshot.contact_location}" }
                        }
                        div { class: "social-section",
                            h3 { "Find me elsewhere" }
                            div { class: "social-grid",
                                a {
                                    href: "{snapshot.social_links.github}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "social-link",
                                    "GitHub"
                                }
                                a {
                                    href: "{snapshot.social_links.linkedin}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "social-link",
                                    "LinkedIn"
                                }
                                a {
                                    href: "{snapshot.social_links.medium}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "social-link",
                                    "Medium"
                                }
                            }
                        }
                    }
                    div { class: "contact-form-container",
                        form {
                            class: "contact-form",
                            onsubmit: move |event| {
                                event.prevent_default();
                                if submit_disabled {
                                    return;
                                }
                                let strategy = select_strategy(&config, &content().contact_email);
                                let outgoing = draft();
                                let mut submitting = submitting;
                                let mut draft = draft;
                                let mut flash_success = flash_success;
                                let mut flash_error = flash_error;
                                spawn(async move {
                                    submitting.set(true);
                                    flash_success.set(None);
                                    flash_error.set(None);
                                    match attempt(&strategy, &outgoing).await {
                                        Ok(ack) => flash_success.set(Some(ack_message(&ack))),
                                        Err(err) => flash_error.set(Some(err.user_message())),
                                    }
                                    // The draft is cleared whether or not delivery
                                    // succeeded; the flash is the only record.
                                    draft.set(ContactDraft::default());
                                    submitting.set(false);
                                });
                            },
                            div { class: "form-row",
                                div { class: "form-field",
                                    label { r#for: "contact-name", "Name" }
                                    input {
                                        id: "contact-name",
                                        r#type: "text",
                                        value: "{draft().name}",
                                        placeholder: "Your name",
                                        disabled: submitting(),
                                        oninput: move |event| {
                                            let mut next = draft();
                                            next.name = event.value();
                                            draft.set(next);
                                        },
                                    }
                                }
                                div { class: "form-field",
                                    label { r#for: "contact-email-field", "Email" }
                                    input {
                                        id: "contact-email-field",
                                        r#type: "email",
                                        value: "{draft().email}",
                                        placeholder: "your@email.com",
                                        disabled: submitting(),
                                        oninput: move |event| {
                                            let mut next = draft();
                                            next.email = event.value();
                                            draft.set(next);
                                        },
                                    }
                                }
                            }
                            div { class: "form-field",
                                label { r#for: "contact-subject", "Subject" }
                                input {
                                    id: "contact-subject",
                                    r#type: "text",
                                    value: "{draft().subject}",
                                    placeholder: "What's this about?",
                                    disabled: submitting(),
                                    oninput: move |event| {
                                        let mut next = draft();
                                        next.subject = event.value();
                                        draft.set(next);
                                    },
                                }
                            }
                            div { class: "form-field",
                                label { r#for: "contact-message", "Message" }
                                textarea {
                                    id: "contact-message",
                                    rows: "6",
                                    value: "{draft().message}",
                                    placeholder: "Tell me about your project...",
                                    disabled: submitting(),
                                    oninput: move |event| {
                                        let mut next = draft();
                                        next.message = event.value();
                                        draft.set(next);
                                    },
                                }
                            }
                            if let Some(message) = flash_error() {
                                div { class: "form-flash form-flash-error", role: "alert", "{message}" }
                            }
                            if let Some(message) = flash_success() {
                                div { class: "form-flash form-flash-success", "{message}" }
                            }
                            button {
                                r#type: "submit",
                                class: "submit-btn",
                                disabled: submit_disabled,
                                if submitting() { "Sending..." } else { "Send message" }
                            }
                        }
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
    fn ack_messages_cover_every_delivery_outcome() {
        assert_eq!(ack_message(&DeliveryAck::Sent("queued".to_string())), "queued");
        assert_eq!(
            ack_message(&DeliveryAck::Receipt),
            "Delivery receipt opened in a new tab."
        );
        assert_eq!(
            ack_message(&DeliveryAck::MailHandoff),
            "Opening your mail client to finish sending."
        );
    }
}
