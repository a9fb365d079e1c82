use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use super::{LectureMetadata, MetadataError};
use crate::browser::BrowserSession;
use crate::output::OutputLayout;
use crate::resolver::lectures::LectureHandle;

/// Retrieves product records through the authenticated browser context.
pub struct MetadataFetcher<'a, S> {
    session: &'a S,
}

impl<'a, S: BrowserSession> MetadataFetcher<'a, S> {
    pub fn new(session: &'a S) -> Self {
        Self { session }
    }

    /// Fetch metadata for the selected handles, in enumeration order. The
    /// position in the returned sequence, not the original lecture index, is
    /// what numbers the output files. Any fault here aborts the whole run.
    pub async fn fetch_selected(
        &self,
        handles: &[LectureHandle],
        selection: &[usize],
    ) -> Result<Vec<LectureMetadata>, MetadataError> {
        let pb = ProgressBar::new(selection.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message("metadata");

        let mut records = Vec::with_capacity(selection.len());
        for &index in selection {
            let key = handles[index].recording_key();
            debug!("fetching product record for {}", key);
            let value = self
                .session
                .fetch_json(&format!("/leccap/player/api/product/?rk={key}"))
                .await?;
            records.push(LectureMetadata::from_value(value)?);
            pb.inc(1);
        }
        pb.finish_and_clear();
        Ok(records)
    }

    /// Write each raw record under json/, numbered by its position in the
    /// download sequence.
    pub async fn save_records(
        &self,
        records: &[LectureMetadata],
        layout: &OutputLayout,
    ) -> Result<(), MetadataError> {
        tokio::fs::create_dir_all(layout.json_dir()).await?;
        for (i, record) in records.iter().enumerate() {
            let path = layout.json_path(i + 1, record);
            tokio::fs::write(&path, serde_json::to_string(record.raw())?).await?;
        }
        Ok(())
    }
}
