use std::time::Duration;

use tracing::debug;

use super::CourseMatch;
use crate::browser::{BrowserSession, SessionError, wait_until};

/// Play controls on a course page.
const PLAY_LINKS: &str = r#".play-link > a.btn[href^="/leccap/player/r/"]"#;

const RENDER_TIMEOUT: Duration = Duration::from_secs(10);
const RENDER_POLL: Duration = Duration::from_millis(500);

/// One play control on the course page.
#[derive(Debug, Clone)]
pub struct LectureHandle {
    pub href: String,
}

impl LectureHandle {
    /// Opaque recording key: the last path segment of the play control.
    pub fn recording_key(&self) -> &str {
        self.href.rsplit('/').next().unwrap_or(&self.href)
    }
}

/// Collects the play controls of a resolved course, in page order. That order
/// is what the 1-based indices shown to the user refer to.
pub struct LectureEnumerator<'a, S> {
    session: &'a S,
}

impl<'a, S: BrowserSession> LectureEnumerator<'a, S> {
    pub fn new(session: &'a S) -> Self {
        Self { session }
    }

    pub async fn enumerate(&self, course: &CourseMatch) -> Result<Vec<LectureHandle>, SessionError> {
        self.session.goto(&course.href).await?;

        // The recording list renders client-side; give it a bounded head
        // start. A course with nothing published simply runs the clock out.
        let session = self.session;
        let rendered = wait_until("recordings to render", RENDER_TIMEOUT, RENDER_POLL, move || async move {
            Ok(!session.find_links(PLAY_LINKS).await?.is_empty())
        })
        .await;
        match rendered {
            Ok(()) => {}
            Err(SessionError::Timeout { .. }) => debug!("no play controls after render wait"),
            Err(e) => return Err(e),
        }

        let links = self.session.find_links(PLAY_LINKS).await?;
        Ok(links
            .into_iter()
            .map(|link| LectureHandle { href: link.href })
            .collect())
    }
}
