use std::path::Path;

use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use super::error::DownloadError;

// Classify the response status before touching the body. 401/403/429 point
// at the session or the host throttling rather than the recording itself.
fn check_response_status(response: &reqwest::Response, url: &str) -> Result<(), DownloadError> {
    let status = response.status();
    match status {
        reqwest::StatusCode::UNAUTHORIZED
        | reqwest::StatusCode::FORBIDDEN
        | reqwest::StatusCode::TOO_MANY_REQUESTS => {
            warn!("access refused ({}) for {}", status, url);
            Err(DownloadError::AccessDenied {
                status: status.as_u16(),
                url: url.to_string(),
            })
        }
        status if status.is_success() => Ok(()),
        _ => Err(DownloadError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        }),
    }
}

/// Stream a GET response to `path` chunk by chunk, with a byte progress bar
/// sized from Content-Length when the server sends one. An existing file is
/// overwritten. Returns the number of bytes written.
pub async fn stream_to_file(
    client: &reqwest::Client,
    url: &str,
    path: &Path,
    label: &str,
) -> Result<u64, DownloadError> {
    let response = client.get(url).send().await?;
    check_response_status(&response, url)?;

    let total_size = response
        .headers()
        .get(reqwest::header::CONTENT_LENGTH)
        .and_then(|ct_len| ct_len.to_str().ok())
        .and_then(|ct_len| ct_len.parse().ok())
        .unwrap_or(0u64);

    let pb = ProgressBar::new(total_size);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta}) {msg}",
        )
        .unwrap()
        .progress_chars("#>-"),
    );
    pb.set_message(label.to_string());

    debug!("streaming {} -> {}", url, path.display());
    let mut file = tokio::fs::File::create(path).await?;
    let mut stream = response.bytes_stream();

    let mut downloaded = 0u64;
    while let Some(chunk_result) = stream.next().await {
        let chunk = match chunk_result {
            Ok(chunk) => chunk,
            Err(error) => {
                pb.finish_and_clear();
                return Err(DownloadError::Http(error));
            }
        };
        tokio::io::AsyncWriteExt::write_all(&mut file, &chunk).await?;
        downloaded += chunk.len() as u64;
        pb.set_position(downloaded);
    }

    pb.finish_and_clear();
    Ok(downloaded)
}
