//! Single-video download with streaming copy and progress reporting

use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use super::{DownloadError, DownloadResult, ItemProgress};
use crate::api::ApiClient;
use crate::{output, DownloadOptions};

/// Downloads one video: metadata, variant choice, stream copy.
pub struct VideoDownloader<'a> {
    client: &'a ApiClient,
    opts: &'a DownloadOptions,
}

impl<'a> VideoDownloader<'a> {
    /// Create a downloader borrowing the shared client and options.
    pub fn new(client: &'a ApiClient, opts: &'a DownloadOptions) -> Self {
        Self { client, opts }
    }

    /// Download a video to its sanitized target path.
    ///
    /// With `check_exists` set, existing files go through the
    /// skip/force/prompt policy before any bytes are fetched. The channel
    /// downloader passes `false` because it already ran that check while
    /// preparing the batch.
    pub async fn download(
        &self,
        video_id: &str,
        check_exists: bool,
        progress: ItemProgress,
    ) -> DownloadResult<()> {
        let video = self.client.video(video_id).await?;
        let variants = self.client.video_variants(video_id).await?;

        let Some(variant) = variants.first() else {
            return Err(DownloadError::NoVariants(video.title));
        };

        let path = output::build_filename(&video.title, &variant.media_type, &video.episode, self.opts);
        if check_exists && output::should_skip(&path, self.opts) {
            debug!(path = %path.display(), "skipping existing file");
            return Ok(());
        }

        let mut file = output::create_video_file(&path).await?;

        let response = self.client.get_stream(&variant.path).await?;
        let total_bytes = response.content_length().unwrap_or(0);

        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let bar = byte_progress_bar(total_bytes, &label, progress);

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(crate::api::ApiError::Network)?;
            file.write_all(&chunk).await?;
            bar.inc(chunk.len() as u64);
        }

        file.flush().await?;
        bar.finish();

        Ok(())
    }
}

fn byte_progress_bar(total_bytes: u64, filename: &str, progress: ItemProgress) -> ProgressBar {
    let bar = ProgressBar::new(total_bytes);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:30.green/black}] {percent:>3}% {bytes_per_sec}")
            .expect("hardcoded template is valid")
            .progress_chars("━╸─"),
    );
    bar.set_message(format!(
        "[{}/{}] {}",
        progress.current, progress.total, filename
    ));

    bar
}
