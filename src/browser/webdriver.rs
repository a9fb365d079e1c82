use std::path::Path;

use async_trait::async_trait;
use serde_json::{Value, json};
use thirtyfour::prelude::*;
use tracing::debug;

use super::{BrowserSession, PageLink, SessionError};

// Callback-style bodies for execute_async: the webdriver injects the callback
// as the trailing argument, the request path arrives as the first.
const FETCH_JSON_SCRIPT: &str = r#"
const callback = arguments[arguments.length - 1];
fetch(arguments[0])
    .then((res) => res.json())
    .then((json) => callback(json));
"#;

const FETCH_TEXT_SCRIPT: &str = r#"
const callback = arguments[arguments.length - 1];
fetch(arguments[0])
    .then((res) => res.text())
    .then((text) => callback(text));
"#;

/// Browser session spoken over the WebDriver protocol against an already
/// running chromedriver. The persistent profile directory is what carries the
/// portal login from one run to the next; the sign-in itself happens in the
/// spawned browser window, out of band.
pub struct WebDriverSession {
    driver: WebDriver,
}

impl WebDriverSession {
    pub async fn connect(server_url: &str, profile_dir: &Path) -> Result<Self, SessionError> {
        let mut caps = DesiredCapabilities::chrome();
        caps.add_arg(&format!("--user-data-dir={}", profile_dir.display()))?;
        caps.add_arg("--log-level=3")?;
        caps.add_arg("--no-sandbox")?;

        let driver = WebDriver::new(server_url, caps).await?;
        debug!("webdriver session established at {}", server_url);
        Ok(Self { driver })
    }

    pub async fn quit(self) -> Result<(), SessionError> {
        self.driver.quit().await?;
        Ok(())
    }

    // The href property (unlike the attribute) is resolved against the page,
    // so PageLink always carries an absolute URL.
    async fn link_from(elem: &WebElement) -> Result<Option<PageLink>, SessionError> {
        let text = elem.text().await?;
        match elem.prop("href").await? {
            Some(href) => Ok(Some(PageLink { text, href })),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl BrowserSession for WebDriverSession {
    async fn goto(&self, url: &str) -> Result<(), SessionError> {
        debug!("goto {}", url);
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String, SessionError> {
        Ok(self.driver.current_url().await?.to_string())
    }

    async fn find_links(&self, css: &str) -> Result<Vec<PageLink>, SessionError> {
        let mut links = Vec::new();
        for elem in self.driver.find_all(By::Css(css)).await? {
            if let Some(link) = Self::link_from(&elem).await? {
                links.push(link);
            }
        }
        Ok(links)
    }

    async fn find_link_by_text(&self, text: &str) -> Result<Option<PageLink>, SessionError> {
        let elems = self.driver.find_all(By::PartialLinkText(text)).await?;
        match elems.first() {
            Some(elem) => Self::link_from(elem).await,
            None => Ok(None),
        }
    }

    async fn fetch_json(&self, path: &str) -> Result<Value, SessionError> {
        let ret = self
            .driver
            .execute_async(FETCH_JSON_SCRIPT, vec![json!(path)])
            .await?;
        Ok(ret.json().clone())
    }

    async fn fetch_text(&self, path: &str) -> Result<String, SessionError> {
        let ret = self
            .driver
            .execute_async(FETCH_TEXT_SCRIPT, vec![json!(path)])
            .await?;
        ret.json()
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| SessionError::BadScriptValue(format!("non-text body for {path}")))
    }
}
