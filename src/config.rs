use dioxus::prelude::*;
use serde::Deserialize;

/// Deployment-selected settings: which contact delivery path is active and
/// which public profiles the stats dashboard reads.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub contact_proxy_url: Option<String>,
    pub contact_api_key: Option<String>,
    pub contact_recipient: Option<String>,
    pub github_username: String,
    pub github_token: Option<String>,
    pub leetcode_username: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            contact_proxy_url: None,
            contact_api_key: None,
            contact_recipient: None,
            github_username: "Franz-kingstein".to_string(),
            github_token: None,
            leetcode_username: "Franz_2005".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Empty strings in config.json mean "not configured".
    fn normalized(mut self) -> Self {
        self.contact_proxy_url = self.contact_proxy_url.filter(|v| !v.trim().is_empty());
        self.contact_api_key = self.contact_api_key.filter(|v| !v.trim().is_empty());
        self.contact_recipient = self.contact_recipient.filter(|v| !v.trim().is_empty());
        self.github_token = self.github_token.filter(|v| !v.trim().is_empty());
        self
    }
}

pub fn use_runtime_config() -> Resource<Result<RuntimeConfig, String>> {
    use_resource(|| async move { fetch_runtime_config().await })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    let config = match fetch_config_from("/config.json").await {
        Ok(config) => config,
        Err(_) => fetch_config_from("/assets/config.json").await?,
    };
    Ok(config.normalized())
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<RuntimeConfig, String> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| format!("config fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("config fetch failed: status {}", response.status()));
    }
    response
        .json::<RuntimeConfig>()
        .await
        .map_err(|err| format!("config decode failed: {err}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    let defaults = RuntimeConfig::default();
    let config = RuntimeConfig {
        contact_proxy_url: std::env::var("CONTACT_PROXY_URL").ok(),
        contact_api_key: std::env::var("CONTACT_API_KEY").ok(),
        contact_recipient: std::env::var("CONTACT_RECIPIENT_EMAIL").ok(),
        github_username: std::env::var("GITHUB_USERNAME").unwrap_or(defaults.github_username),
        github_token: std::env::var("GITHUB_TOKEN").ok(),
        leetcode_username: std::env::var("LEETCODE_USERNAME")
            .unwrap_or(defaults.leetcode_username),
    };
    Ok(config.normalized())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_strings_normalize_to_unconfigured() {
        let config = RuntimeConfig {
            contact_proxy_url: Some("  ".to_string()),
            contact_api_key: Some(String::new()),
            contact_recipient: Some("me@example.com".to_string()),
            github_token: Some(String::new()),
            ..RuntimeConfig::default()
        }
        .normalized();

        assert_eq!(config.contact_proxy_url, None);
        assert_eq!(config.contact_api_key, None);
        assert_eq!(config.contact_recipient, Some("me@example.com".to_string()));
        assert_eq!(config.github_token, None);
    }
}
