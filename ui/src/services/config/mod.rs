//! Sign-up configuration
//!
//! Defaults are compiled in. A JSON override can be stored in browser
//! LocalStorage under [`CONFIG_STORAGE_KEY`]; anything missing or malformed
//! falls back to the defaults.

use anyhow::{anyhow, Context, Result};
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const CONFIG_STORAGE_KEY: &str = "signup_config";

/// Configuration for the sign-up page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignUpConfig {
    /// Base URL of the auth API; a leading `/` is resolved against the page origin
    pub auth_api_base: String,

    /// Path of the account creation endpoint, appended to `auth_api_base`
    pub sign_up_path: String,

    /// Route opened after a successful sign-up
    pub post_signup_route: String,

    /// Duration of the federated sign-up placeholders
    pub federated_delay_ms: u32,
}

impl Default for SignUpConfig {
    fn default() -> Self {
        Self {
            auth_api_base: "/api".to_string(),
            sign_up_path: "/auth/sign-up".to_string(),
            post_signup_route: "/auth/pending-verification".to_string(),
            federated_delay_ms: 1000,
        }
    }
}

impl SignUpConfig {
    /// Loads the stored override, or the defaults when there is none
    pub fn load() -> Self {
        let mut config = match Self::from_storage() {
            Ok(Some(config)) => {
                debug!("Loaded sign-up config override from LocalStorage");
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("Ignoring sign-up config override: {:#}", e);
                Self::default()
            }
        };

        if let Some(origin) = page_origin() {
            config.auth_api_base = config.resolve_base(&origin);
        }
        config
    }

    fn from_storage() -> Result<Option<Self>> {
        let raw = match LocalStorage::raw().get_item(CONFIG_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            _ => return Ok(None),
        };
        Self::from_json(&raw).map(Some)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("sign-up config is not valid JSON")
    }

    pub fn store(&self) -> Result<()> {
        LocalStorage::set(CONFIG_STORAGE_KEY, self)
            .map_err(|e| anyhow!("failed to store sign-up config: {}", e))
    }

    /// `auth_api_base` made absolute against `origin` when it is origin-relative
    pub fn resolve_base(&self, origin: &str) -> String {
        if self.auth_api_base.starts_with('/') {
            format!("{}{}", origin.trim_end_matches('/'), self.auth_api_base)
        } else {
            self.auth_api_base.clone()
        }
    }

    pub fn sign_up_url(&self) -> String {
        format!(
            "{}/{}",
            self.auth_api_base.trim_end_matches('/'),
            self.sign_up_path.trim_start_matches('/')
        )
    }
}

fn page_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SignUpConfig::default();
        assert_eq!(config.post_signup_route, "/auth/pending-verification");
        assert_eq!(config.federated_delay_ms, 1000);
        assert_eq!(config.sign_up_url(), "/api/auth/sign-up");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = SignUpConfig::from_json(r#"{"auth_api_base":"https://auth.example.com/v1/"}"#)
            .unwrap();
        assert_eq!(config.sign_up_url(), "https://auth.example.com/v1/auth/sign-up");
        assert_eq!(config.post_signup_route, "/auth/pending-verification");
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        assert!(SignUpConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_resolve_base() {
        let config = SignUpConfig::default();
        assert_eq!(
            config.resolve_base("https://app.example.com/"),
            "https://app.example.com/api"
        );

        let absolute = SignUpConfig {
            auth_api_base: "https://auth.example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(
            absolute.resolve_base("https://app.example.com"),
            "https://auth.example.com"
        );
    }
}
