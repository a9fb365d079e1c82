use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::time::{Instant, sleep};

pub mod webdriver;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("webdriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("in-page fetch returned an unusable value: {0}")]
    BadScriptValue(String),

    #[error("timed out after {timeout:?} waiting for {what}")]
    Timeout { what: String, timeout: Duration },

    #[error("prompt failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A link-like control on the current page. `href` is the browser-resolved
/// absolute URL, so following a link is the same as navigating to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub text: String,
    pub href: String,
}

/// The one external capability this tool needs: a controllable, already
/// authenticated browser. Navigation, address readback, link queries, and
/// same-origin network requests scoped to the page's cookies.
#[async_trait]
pub trait BrowserSession {
    async fn goto(&self, url: &str) -> Result<(), SessionError>;

    async fn current_url(&self) -> Result<String, SessionError>;

    /// All anchors matching a CSS selector, in page order.
    async fn find_links(&self, css: &str) -> Result<Vec<PageLink>, SessionError>;

    /// First link whose text contains `text`, if any.
    async fn find_link_by_text(&self, text: &str) -> Result<Option<PageLink>, SessionError>;

    /// Execute a fetch inside the page and resolve its JSON body.
    async fn fetch_json(&self, path: &str) -> Result<serde_json::Value, SessionError>;

    /// Execute a fetch inside the page and resolve its text body.
    async fn fetch_text(&self, path: &str) -> Result<String, SessionError>;
}

/// Poll `probe` every `interval` until it reports true or `timeout` elapses.
/// The timeout is an error, not a hang: callers that tolerate it match on
/// `SessionError::Timeout`.
pub async fn wait_until<F, Fut>(
    what: &str,
    timeout: Duration,
    interval: Duration,
    mut probe: F,
) -> Result<(), SessionError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, SessionError>>,
{
    let deadline = Instant::now() + timeout;
    loop {
        if probe().await? {
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(SessionError::Timeout {
                what: what.to_string(),
                timeout,
            });
        }
        sleep(interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn wait_until_resolves_once_probe_passes() {
        let mut polls = 0;
        let result = wait_until(
            "the counter",
            Duration::from_secs(5),
            Duration::from_millis(1),
            move || {
                polls += 1;
                let done = polls >= 3;
                async move { Ok(done) }
            },
        )
        .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn wait_until_reports_a_bounded_timeout() {
        let result = wait_until(
            "a page that never arrives",
            Duration::from_millis(20),
            Duration::from_millis(5),
            || async { Ok(false) },
        )
        .await;
        match result {
            Err(SessionError::Timeout { what, timeout }) => {
                assert_eq!(what, "a page that never arrives");
                assert_eq!(timeout, Duration::from_millis(20));
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }
}
