use serde::{Deserialize, Serialize};

use crate::config::RuntimeConfig;

/// Fixed third-party relay used by the direct strategy.
const RELAY_URL: &str = "https://api.hlomail.in/v1/contact-mail";
/// Relay template selector sent with proxied messages.
const PROXY_TEMPLATE_ID: &str = "5";
const DEFAULT_ACK: &str = "Message sent successfully!";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// The three mutually exclusive delivery mechanisms, in priority order.
/// Selection happens at submit time and picks the first applicable one,
/// not the first that succeeds.
#[derive(Clone, Debug, PartialEq)]
pub enum DeliveryStrategy {
    Proxy { url: String },
    Direct { api_key: String, recipient: String },
    MailClient { recipient: String },
}

#[derive(Clone, Debug, PartialEq)]
pub enum DeliveryAck {
    Sent(String),
    /// The relay answered with an HTML receipt; it is left showing in the
    /// pre-opened tab.
    Receipt,
    /// Handed to the environment's mail client. Delivery cannot be observed
    /// on this path, so it always acks.
    MailHandoff,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DeliveryError {
    Transport(String),
    Status(u16, String),
    Rejected(String),
}

impl DeliveryError {
    pub fn user_message(&self) -> String {
        match self {
            DeliveryError::Transport(detail) => format!("request failed: {detail}"),
            DeliveryError::Status(status, body) => {
                format!("delivery failed with status {status}: {body}")
            }
            DeliveryError::Rejected(message) => message.clone(),
        }
    }
}

pub fn select_strategy(config: &RuntimeConfig, contact_email: &str) -> DeliveryStrategy {
    let recipient = config
        .contact_recipient
        .clone()
        .unwrap_or_else(|| contact_email.to_string());
    if let Some(url) = &config.contact_proxy_url {
        return DeliveryStrategy::Proxy { url: url.clone() };
    }
    if let Some(api_key) = &config.contact_api_key {
        return DeliveryStrategy::Direct {
            api_key: api_key.clone(),
            recipient,
        };
    }
    DeliveryStrategy::MailClient { recipient }
}

#[derive(Clone, Debug, Serialize)]
struct ProxyPayload {
    name: String,
    email: String,
    message: String,
    subject: String,
    template: String,
}

#[derive(Clone, Debug, Serialize)]
struct DirectPayload {
    api_key: String,
    recipient_email: String,
    subject: String,
    body: String,
}

#[derive(Clone, Debug, Deserialize)]
struct RelayReply {
    #[serde(default)]
    valid: bool,
    #[serde(default)]
    success: bool,
    message: Option<String>,
}

fn proxy_payload(draft: &ContactDraft) -> ProxyPayload {
    ProxyPayload {
        name: draft.name.clone(),
        email: draft.email.clone(),
        message: proxy_message(draft),
        subject: draft.subject.clone(),
        template: PROXY_TEMPLATE_ID.to_string(),
    }
}

/// The proxy receives one combined message body; a subject line is folded
/// in above the text.
fn proxy_message(draft: &ContactDraft) -> String {
    if draft.subject.is_empty() {
        draft.message.clone()
    } else {
        format!("Subject: {}\n\n{}", draft.subject, draft.message)
    }
}

fn direct_payload(draft: &ContactDraft, api_key: &str, recipient: &str) -> DirectPayload {
    DirectPayload {
        api_key: api_key.to_string(),
        recipient_email: recipient.to_string(),
        subject: direct_subject(draft),
        body: draft.message.clone(),
    }
}

fn direct_subject(draft: &ContactDraft) -> String {
    format!(
        "Portfolio contact: {} — {} <{}>",
        draft.subject, draft.name, draft.email
    )
}

pub fn mailto_uri(recipient: &str, draft: &ContactDraft) -> String {
    let body = format!(
        "Name: {}\nEmail: {}\n\n{}",
        draft.name, draft.email, draft.message
    );
    format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(&draft.subject),
        urlencoding::encode(&body)
    )
}

enum RelayOutcome {
    Ack(String),
    HtmlReceipt(String),
}

/// Relay responses are either an HTML receipt or JSON carrying a truthy
/// `valid`/`success` flag. Anything else is a rejection.
fn classify_response(content_type: &str, body: String) -> Result<RelayOutcome, DeliveryError> {
    if content_type.to_ascii_lowercase().contains("text/html") {
        return Ok(RelayOutcome::HtmlReceipt(body));
    }
    match serde_json::from_str::<RelayReply>(&body) {
        Ok(reply) if reply.valid || reply.success => Ok(RelayOutcome::Ack(
            reply.message.unwrap_or_else(|| DEFAULT_ACK.to_string()),
        )),
        Ok(reply) => Err(DeliveryError::Rejected(
            reply.message.unwrap_or_else(|| "Failed".to_string()),
        )),
        Err(_) if !body.is_empty() => Err(DeliveryError::Rejected(body)),
        Err(_) => Err(DeliveryError::Rejected("Failed".to_string())),
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn attempt(
    strategy: &DeliveryStrategy,
    draft: &ContactDraft,
) -> Result<DeliveryAck, DeliveryError> {
    match strategy {
        DeliveryStrategy::Proxy { url } => {
            let body = serde_json::to_string(&proxy_payload(draft))
                .map_err(|err| DeliveryError::Transport(format!("encode failed: {err}")))?;
            post_relay(url, body).await
        }
        DeliveryStrategy::Direct { api_key, recipient } => {
            let body = serde_json::to_string(&direct_payload(draft, api_key, recipient))
                .map_err(|err| DeliveryError::Transport(format!("encode failed: {err}")))?;
            post_relay(RELAY_URL, body).await
        }
        DeliveryStrategy::MailClient { recipient } => {
            hand_off_to_mail_client(&mailto_uri(recipient, draft))?;
            Ok(DeliveryAck::MailHandoff)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn attempt(
    strategy: &DeliveryStrategy,
    _draft: &ContactDraft,
) -> Result<DeliveryAck, DeliveryError> {
    match strategy {
        DeliveryStrategy::MailClient { .. } => Ok(DeliveryAck::MailHandoff),
        _ => Err(DeliveryError::Transport(
            "network delivery requires the browser runtime".to_string(),
        )),
    }
}

#[cfg(target_arch = "wasm32")]
async fn post_relay(url: &str, body: String) -> Result<DeliveryAck, DeliveryError> {
    use gloo_net::http::Request;

    // Opened before the request so an HTML receipt is not eaten by the
    // popup blocker.
    let receipt_tab = open_receipt_tab();

    let response = match Request::post(url)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|err| DeliveryError::Transport(format!("{err}")))
    {
        Ok(request) => request.send().await.map_err(|err| {
            tracing::warn!("contact delivery transport failure: {err}");
            DeliveryError::Transport(format!("{err}"))
        }),
        Err(err) => Err(err),
    };

    let response = match response {
        Ok(response) => response,
        Err(err) => {
            close_receipt_tab(receipt_tab.as_ref());
            return Err(err);
        }
    };

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap_or_default();

    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        close_receipt_tab(receipt_tab.as_ref());
        return Err(DeliveryError::Status(status, text));
    }

    let text = response
        .text()
        .await
        .map_err(|err| DeliveryError::Transport(format!("{err}")));
    let text = match text {
        Ok(text) => text,
        Err(err) => {
            close_receipt_tab(receipt_tab.as_ref());
            return Err(err);
        }
    };

    match classify_response(&content_type, text) {
        Ok(RelayOutcome::Ack(message)) => {
            close_receipt_tab(receipt_tab.as_ref());
            Ok(DeliveryAck::Sent(message))
        }
        Ok(RelayOutcome::HtmlReceipt(html)) => {
            if let Some(tab) = receipt_tab.as_ref() {
                write_receipt(tab, &html);
            }
            Ok(DeliveryAck::Receipt)
        }
        Err(err) => {
            close_receipt_tab(receipt_tab.as_ref());
            Err(err)
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn open_receipt_tab() -> Option<web_sys::Window> {
    let window = web_sys::window()?;
    window.open_with_url_and_target("", "_blank").ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn close_receipt_tab(tab: Option<&web_sys::Window>) {
    if let Some(tab) = tab {
        let _ = tab.close();
    }
}

#[cfg(target_arch = "wasm32")]
fn write_receipt(tab: &web_sys::Window, html: &str) {
    use wasm_bindgen::{JsCast, JsValue};

    let Some(document) = tab.document() else {
        return;
    };
    let document: JsValue = document.into();
    let Ok(write_fn) = js_sys::Reflect::get(&document, &JsValue::from_str("write")) else {
        return;
    };
    if let Some(write_fn) = write_fn.dyn_ref::<js_sys::Function>() {
        let _ = write_fn.call1(&document, &JsValue::from_str(html));
    }
    if let Ok(close_fn) = js_sys::Reflect::get(&document, &JsValue::from_str("close")) {
        if let Some(close_fn) = close_fn.dyn_ref::<js_sys::Function>() {
            let _ = close_fn.call0(&document);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn hand_off_to_mail_client(uri: &str) -> Result<(), DeliveryError> {
    let window = web_sys::window()
        .ok_or_else(|| DeliveryError::Transport("window unavailable".to_string()))?;
    window
        .location()
        .set_href(uri)
        .map_err(|_| DeliveryError::Transport("mail client handoff failed".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft() -> ContactDraft {
        ContactDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site".to_string(),
        }
    }

    #[test]
    fn unconfigured_delivery_falls_back_to_mail_handoff() {
        let config = RuntimeConfig::default();
        let strategy = select_strategy(&config, "owner@example.com");
        assert_eq!(
            strategy,
            DeliveryStrategy::MailClient {
                recipient: "owner@example.com".to_string()
            }
        );
    }

    #[test]
    fn proxy_wins_over_direct_api_key() {
        let config = RuntimeConfig {
            contact_proxy_url: Some("https://proxy.example/send".to_string()),
            contact_api_key: Some("key".to_string()),
            ..RuntimeConfig::default()
        };
        assert_eq!(
            select_strategy(&config, "owner@example.com"),
            DeliveryStrategy::Proxy {
                url: "https://proxy.example/send".to_string()
            }
        );
    }

    #[test]
    fn recipient_override_beats_store_email() {
        let config = RuntimeConfig {
            contact_api_key: Some("key".to_string()),
            contact_recipient: Some("inbox@example.com".to_string()),
            ..RuntimeConfig::default()
        };
        assert_eq!(
            select_strategy(&config, "owner@example.com"),
            DeliveryStrategy::Direct {
                api_key: "key".to_string(),
                recipient: "inbox@example.com".to_string()
            }
        );
    }

    #[test]
    fn proxy_payload_serializes_the_documented_shape() {
        let json = serde_json::to_value(proxy_payload(&draft())).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["subject"], "Hello");
        assert_eq!(json["message"], "Subject: Hello\n\nNice site");
        assert_eq!(json["template"], "5");
    }

    #[test]
    fn direct_payload_carries_key_recipient_and_body() {
        let json =
            serde_json::to_value(direct_payload(&draft(), "key", "inbox@example.com")).unwrap();
        assert_eq!(json["api_key"], "key");
        assert_eq!(json["recipient_email"], "inbox@example.com");
        assert_eq!(json["subject"], "Portfolio contact: Hello — Ada <ada@example.com>");
        assert_eq!(json["body"], "Nice site");
    }

    #[test]
    fn proxy_message_folds_subject_above_body() {
        assert_eq!(proxy_message(&draft()), "Subject: Hello\n\nNice site");
        let mut no_subject = draft();
        no_subject.subject.clear();
        assert_eq!(proxy_message(&no_subject), "Nice site");
    }

    #[test]
    fn direct_subject_names_the_sender() {
        assert_eq!(
            direct_subject(&draft()),
            "Portfolio contact: Hello — Ada <ada@example.com>"
        );
    }

    #[test]
    fn mailto_uri_percent_encodes_fields() {
        let uri = mailto_uri("owner@example.com", &draft());
        assert_eq!(
            uri,
            "mailto:owner@example.com?subject=Hello&body=Name%3A%20Ada%0AEmail%3A%20ada%40example.com%0A%0ANice%20site"
        );
    }

    #[test]
    fn truthy_success_flag_acks_with_default_message() {
        let outcome = classify_response("application/json", r#"{"success":true}"#.to_string());
        match outcome {
            Ok(RelayOutcome::Ack(message)) => assert_eq!(message, DEFAULT_ACK),
            _ => panic!("expected ack"),
        }
    }

    #[test]
    fn truthy_valid_flag_acks_with_relay_message() {
        let outcome = classify_response(
            "application/json",
            r#"{"valid":true,"message":"queued"}"#.to_string(),
        );
        match outcome {
            Ok(RelayOutcome::Ack(message)) => assert_eq!(message, "queued"),
            _ => panic!("expected ack"),
        }
    }

    #[test]
    fn falsy_flags_reject_with_relay_message() {
        let outcome = classify_response(
            "application/json",
            r#"{"success":false,"message":"quota exceeded"}"#.to_string(),
        );
        assert_eq!(
            outcome.err().map(|err| err.user_message()),
            Some("quota exceeded".to_string())
        );
    }

    #[test]
    fn unparseable_body_rejects_with_the_body_text() {
        let outcome = classify_response("text/plain", "gateway timeout".to_string());
        assert_eq!(
            outcome.err().map(|err| err.user_message()),
            Some("gateway timeout".to_string())
        );
    }

    #[test]
    fn html_body_becomes_a_receipt() {
        let outcome = classify_response(
            "text/html; charset=utf-8",
            "<html><body>ok</body></html>".to_string(),
        );
        assert!(matches!(outcome, Ok(RelayOutcome::HtmlReceipt(_))));
    }

    #[test]
    fn status_errors_carry_code_and_body() {
        let err = DeliveryError::Status(500, "boom".to_string());
        assert_eq!(err.user_message(), "delivery failed with status 500: boom");
    }
}
