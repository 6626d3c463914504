//! Client for the static page-fragment endpoint.

use thiserror::Error;

/// Directory the page fragments are served from, relative to the site root.
const FRAGMENT_BASE: &str = "assets/pages";

/// Errors from fragment retrieval. Callers log these and keep the current
/// content; there is no retry path.
#[derive(Debug, Error)]
pub enum FragmentError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("fragment `{name}` returned HTTP {status}")]
    Status { name: String, status: u16 },
}

/// Client for the storefront's fragment endpoint.
#[derive(Debug, Clone)]
pub struct FragmentClient {
    base_path: String,
}

impl FragmentClient {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Client rooted at the document origin's fragment directory. Outside a
    /// browsing context the path stays relative and requests will fail with
    /// a logged error.
    pub fn from_origin() -> Self {
        let base = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .map(|origin| format!("{origin}/{FRAGMENT_BASE}"))
            .unwrap_or_else(|| FRAGMENT_BASE.to_string());
        Self::new(base)
    }

    /// URL of a page fragment.
    pub fn page_url(&self, name: &str) -> String {
        format!("{}/{}.html", self.base_path, name)
    }

    /// Fetch the raw markup for `name`.
    pub async fn fetch_page(&self, name: &str) -> Result<String, FragmentError> {
        let response = reqwest::get(self.page_url(name)).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FragmentError::Status {
                name: name.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_layout() {
        let client = FragmentClient::new("assets/pages");
        assert_eq!(client.page_url("home"), "assets/pages/home.html");
        assert_eq!(client.page_url("order"), "assets/pages/order.html");
    }
}
