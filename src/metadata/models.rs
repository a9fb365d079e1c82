use serde_derive::Deserialize;
use serde_json::Value;

use super::MetadataError;
use crate::text::slugify;

// Wire shape of the product API response. Only the fields the pipeline
// consumes are validated; everything else rides along in the raw value.
#[derive(Debug, Clone, Deserialize)]
struct ProductRecord {
    date: String,
    title: String,
    #[serde(rename = "mediaPrefix")]
    media_prefix: String,
    sitekey: String,
    recordingkey: String,
    info: ProductInfo,
}

#[derive(Debug, Clone, Deserialize)]
struct ProductInfo {
    products: Vec<ProductEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct ProductEntry {
    movie_exported_name: String,
}

/// One lecture's product record, validated up front. The raw JSON is kept
/// for verbatim persistence.
#[derive(Debug, Clone)]
pub struct LectureMetadata {
    raw: Value,
    record: ProductRecord,
}

impl LectureMetadata {
    /// Validate a product API response. A missing or ill-typed required
    /// field fails here, not at first use.
    pub fn from_value(raw: Value) -> Result<Self, MetadataError> {
        let record: ProductRecord = serde_json::from_value(raw.clone())?;
        if record.info.products.is_empty() {
            return Err(MetadataError::NoProducts {
                title: record.title,
            });
        }
        Ok(Self { raw, record })
    }

    pub fn title(&self) -> &str {
        &self.record.title
    }

    pub fn recording_key(&self) -> &str {
        &self.record.recordingkey
    }

    /// The record exactly as the portal returned it.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Compose the video location from the media prefix, the site key, and
    /// the first product's exported movie name. Protocol-relative prefixes
    /// get the https scheme.
    pub fn video_url(&self) -> String {
        let prefix = &self.record.media_prefix;
        let scheme = if prefix.starts_with("//") { "https:" } else { "" };
        format!(
            "{}{}{}/{}.mp4",
            scheme, prefix, self.record.sitekey, self.record.info.products[0].movie_exported_name
        )
    }

    /// Slug of "year-month-day title". The portal date is slash-delimited
    /// month/day/year; the pieces are rearranged as strings, never parsed.
    pub fn file_stem(&self) -> String {
        let parts: Vec<&str> = self.record.date.split('/').collect();
        let date = match parts.as_slice() {
            [month, day, year] => format!("{year}-{month}-{day}"),
            _ => self.record.date.clone(),
        };
        slugify(&format!("{} {}", date, self.record.title))
    }
}
