use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::browser::{BrowserSession, PageLink, SessionError, wait_until};
use crate::common::logger::PrettyLogger;
use crate::common::prompt::Prompter;
use crate::log_warning;
use crate::text::CourseQuery;

pub mod lectures;

/// Course listing anchors on a year page.
const COURSE_LINKS: &str = r#"a.list-group-item[href^="/leccap/site/"]"#;
/// The "previous year" pager control.
const PREV_YEAR: &str = ".previous > a:nth-child(1)";
/// Label of the link into the year-paginated view.
const BY_YEAR_TEXT: &str = "View courses by year";
/// Oldest archive year the portal still serves; pager labels at or below it
/// end the walk. Compared lexically on the label's trailing four characters.
const YEAR_FLOOR: &str = "2015";

const LOGIN_POLL: Duration = Duration::from_secs(1);

/// One course listing on a year page: its display text and the absolute URL
/// of its anchor.
#[derive(Debug, Clone)]
pub struct CourseMatch {
    pub title: String,
    pub href: String,
}

impl From<&PageLink> for CourseMatch {
    fn from(link: &PageLink) -> Self {
        Self {
            title: link.text.clone(),
            href: link.href.clone(),
        }
    }
}

/// Walks the year-paginated course directory until the query matches.
pub struct CourseResolver<'a, S, P> {
    session: &'a S,
    prompter: &'a mut P,
    portal_root: String,
    login_timeout: Duration,
}

impl<'a, S: BrowserSession, P: Prompter> CourseResolver<'a, S, P> {
    pub fn new(
        session: &'a S,
        prompter: &'a mut P,
        portal_root: &str,
        login_timeout: Duration,
    ) -> Self {
        Self {
            session,
            prompter,
            portal_root: portal_root.to_string(),
            login_timeout,
        }
    }

    /// Resolve the query to a single course, or `None` when the directory is
    /// exhausted down to the year floor.
    pub async fn resolve(&mut self, query: &CourseQuery) -> Result<Option<CourseMatch>, SessionError> {
        self.goto_home().await?;
        self.enter_by_year_view().await?;

        loop {
            let links = self.session.find_links(COURSE_LINKS).await?;
            let matches: Vec<&PageLink> =
                links.iter().filter(|link| query.matches(&link.text)).collect();
            debug!("{} course links, {} matching", links.len(), matches.len());

            match matches.len() {
                0 => {
                    if !self.goto_previous_year().await? {
                        return Ok(None);
                    }
                }
                1 => return Ok(Some(matches[0].into())),
                _ => return Ok(Some(self.choose_match(&matches)?)),
            }
        }
    }

    /// Navigate to the portal root and wait out the login redirect: the poll
    /// passes once the browser's address is back on the portal origin.
    async fn goto_home(&self) -> Result<(), SessionError> {
        self.session.goto(&self.portal_root).await?;
        PrettyLogger::waiting("Complete the portal sign-in in the browser window if prompted...");

        let session = self.session;
        let origin = portal_origin(&self.portal_root);
        wait_until("the portal after sign-in", self.login_timeout, LOGIN_POLL, move || {
            let origin = origin.clone();
            async move { Ok(session.current_url().await?.starts_with(&origin)) }
        })
        .await
    }

    /// Follow the by-year link when present; its absence means the current
    /// page already lists courses by year.
    async fn enter_by_year_view(&self) -> Result<(), SessionError> {
        match self.session.find_link_by_text(BY_YEAR_TEXT).await? {
            Some(link) => self.session.goto(&link.href).await,
            None => {
                debug!("by-year link absent, staying on current view");
                Ok(())
            }
        }
    }

    /// Step one year back. Returns false when the walk is over: the pager is
    /// missing, disabled, or already labeled at the year floor.
    async fn goto_previous_year(&self) -> Result<bool, SessionError> {
        let Some(prev) = self.session.find_links(PREV_YEAR).await?.into_iter().next() else {
            debug!("previous-year control missing");
            return Ok(false);
        };
        // A disabled pager keeps a bare "#" href, which the browser resolves
        // to the page URL plus the fragment.
        if prev.href.ends_with('#') {
            return Ok(false);
        }
        if trailing_year(&prev.text) <= YEAR_FLOOR {
            return Ok(false);
        }
        debug!("no matches, moving to {}", prev.text.trim());
        self.session.goto(&prev.href).await?;
        Ok(true)
    }

    /// Several courses matched in one year: list them and block for a 1-based
    /// pick. The accepted bound includes 0, which wraps to the last entry.
    fn choose_match(&mut self, matches: &[&PageLink]) -> Result<CourseMatch, SessionError> {
        PrettyLogger::info("Multiple matches found in one year - select one:");
        for (i, m) in matches.iter().enumerate() {
            PrettyLogger::option(i + 1, &m.text);
        }
        loop {
            let answer = self.prompter.ask(&format!("Choose 1-{}", matches.len()))?;
            if let Ok(n) = answer.parse::<usize>() {
                if n <= matches.len() {
                    let index = if n == 0 { matches.len() - 1 } else { n - 1 };
                    return Ok(matches[index].into());
                }
            }
            log_warning!("Please choose a valid option.");
        }
    }
}

fn portal_origin(root: &str) -> String {
    Url::parse(root)
        .map(|url| url.origin().ascii_serialization())
        .unwrap_or_else(|_| root.trim_end_matches('/').to_string())
}

/// Trailing four characters of a pager label, the part holding the year.
fn trailing_year(label: &str) -> &str {
    let label = label.trim();
    match label.char_indices().nth_back(3) {
        Some((index, _)) => &label[index..],
        None => label,
    }
}
