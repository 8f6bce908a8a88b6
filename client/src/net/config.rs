//! Backend base URL resolution.
//!
//! The host injects the configured URL into the SSR shell as a
//! `<meta name="docdesk-api-url">` tag. The browser reads it once at startup,
//! falling back to the build-time `DOCDESK_API_URL` and then to same-origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the meta tag carrying the backend URL.
pub const API_URL_META: &str = "docdesk-api-url";

/// Where REST calls are sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build from a base URL; trailing slashes are dropped.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_owned(),
        }
    }

    /// Resolve the base URL for this page.
    #[must_use]
    pub fn from_environment() -> Self {
        if let Some(url) = meta_api_url() {
            return Self::new(&url);
        }
        Self::new(option_env!("DOCDESK_API_URL").unwrap_or_default())
    }

    /// Join an API path onto the base with exactly one separator.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn meta_api_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{API_URL_META}\"]");
        let meta = document.query_selector(&selector).ok().flatten()?;
        meta.get_attribute("content").filter(|v| !v.trim().is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
