use tracing::info;
use url::Url;

use crate::browser::BrowserSession;
use crate::log_error;
use crate::metadata::LectureMetadata;
use crate::output::OutputLayout;

pub mod core;
pub mod error;

pub use error::DownloadError;

/// Outcome counts for one download batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DownloadSummary {
    pub completed: usize,
    pub failed: usize,
}

/// Downloads each lecture's video over plain HTTP and its subtitle through
/// the authenticated browser context, strictly in sequence.
pub struct AssetDownloader<'a, S> {
    session: &'a S,
    http: reqwest::Client,
    layout: &'a OutputLayout,
}

impl<'a, S: BrowserSession> AssetDownloader<'a, S> {
    pub fn new(session: &'a S, layout: &'a OutputLayout) -> Self {
        Self {
            session,
            http: reqwest::Client::new(),
            layout,
        }
    }

    /// Walk the records in sequence order. A fault in one lecture's assets is
    /// logged with its sequence number and the batch moves on to the next.
    pub async fn download_all(
        &self,
        records: &[LectureMetadata],
    ) -> Result<DownloadSummary, DownloadError> {
        tokio::fs::create_dir_all(self.layout.videos_dir()).await?;

        let mut summary = DownloadSummary::default();
        for (i, record) in records.iter().enumerate() {
            let seq = i + 1;
            match self.download_one(seq, record).await {
                Ok(bytes) => {
                    info!("lecture {:03} ({}): {} bytes", seq, record.title(), bytes);
                    summary.completed += 1;
                }
                Err(e) => {
                    log_error!("Lecture {:03} failed: {}", seq, e);
                    summary.failed += 1;
                }
            }
        }
        Ok(summary)
    }

    /// Video first, then the subtitle track beside it under the same stem.
    async fn download_one(&self, seq: usize, record: &LectureMetadata) -> Result<u64, DownloadError> {
        let url = record.video_url();
        Url::parse(&url).map_err(|_| DownloadError::InvalidUrl(url.clone()))?;

        let video_path = self.layout.video_path(seq, record);
        let label = video_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let bytes = core::stream_to_file(&self.http, &url, &video_path, &label).await?;

        let subtitle = self
            .session
            .fetch_text(&format!(
                "/leccap/player/api/webvtt/?rk={}",
                record.recording_key()
            ))
            .await?;
        tokio::fs::write(self.layout.subtitle_path(seq, record), subtitle).await?;

        Ok(bytes)
    }
}
