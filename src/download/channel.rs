//! Channel download: listing, selection, batch download with summary

use tracing::debug;

use super::video::VideoDownloader;
use super::{DownloadResult, ItemProgress};
use crate::api::ApiClient;
use crate::{output, select, DownloadOptions, Video};

/// Downloads a channel: fetches the listing, asks which videos to take and
/// streams them one by one.
pub struct ChannelDownloader<'a> {
    client: &'a ApiClient,
    opts: &'a DownloadOptions,
}

impl<'a> ChannelDownloader<'a> {
    /// Create a downloader borrowing the shared client and options.
    pub fn new(client: &'a ApiClient, opts: &'a DownloadOptions) -> Self {
        Self { client, opts }
    }

    /// Download the selected videos of a channel into its own folder.
    pub async fn download(&self, channel_id: &str) -> DownloadResult<()> {
        let info = self.client.channel(channel_id).await?;
        let videos = self.client.channel_videos(channel_id).await?;

        if videos.is_empty() {
            println!("No videos found in this channel");
            return Ok(());
        }

        println!("Found {} videos in channel: {}", videos.len(), info.name);

        let selected = select::select_videos(&videos, self.opts.all, self.opts.use_episode)?;
        if selected.is_empty() {
            println!("No videos selected for download");
            return Ok(());
        }

        let folder = output::channel_folder(&info.name, self.opts)?;
        println!("\nDownloading to folder: {}\n", folder.display());

        // Downloads below land inside the channel folder.
        let opts = DownloadOptions {
            output_dir: Some(folder),
            ..self.opts.clone()
        };

        let mut failed = Vec::new();
        let to_download = self.prepare(&videos, &selected, &opts, &mut failed).await;
        let prepare_failures = failed.len();

        self.process(&videos, &to_download, &opts, &mut failed).await;
        let download_failures = failed.len() - prepare_failures;

        print_summary(
            to_download.len() - download_failures,
            selected.len(),
            &failed,
        );

        Ok(())
    }

    /// Run the exists/skip policy up front and weed out videos without
    /// variants, so the batch only contains downloads that will be tried.
    async fn prepare(
        &self,
        videos: &[Video],
        selected: &[usize],
        opts: &DownloadOptions,
        failed: &mut Vec<String>,
    ) -> Vec<usize> {
        let mut to_download = Vec::new();

        for &index in selected {
            let video = &videos[index];

            let variants = match self.client.video_variants(&video.id).await {
                Ok(variants) => variants,
                Err(err) => {
                    println!("\nFailed to get video variants for {}: {err}", video.title);
                    failed.push(video.title.clone());
                    continue;
                }
            };

            let Some(variant) = variants.first() else {
                println!("\nNo variants found for {}", video.title);
                failed.push(video.title.clone());
                continue;
            };

            let path =
                output::build_filename(&video.title, &variant.media_type, &video.episode, opts);
            if output::should_skip(&path, opts) {
                debug!(path = %path.display(), "skipping existing file");
                continue;
            }

            to_download.push(index);
        }

        to_download
    }

    /// Download the prepared batch sequentially, collecting failed titles.
    async fn process(
        &self,
        videos: &[Video],
        to_download: &[usize],
        opts: &DownloadOptions,
        failed: &mut Vec<String>,
    ) {
        let downloader = VideoDownloader::new(self.client, opts);

        for (i, &index) in to_download.iter().enumerate() {
            let video = &videos[index];
            let progress = ItemProgress {
                current: i + 1,
                total: to_download.len(),
            };

            if let Err(err) = downloader.download(&video.id, false, progress).await {
                println!("\nFailed: {} - {err}", video.title);
                failed.push(video.title.clone());
            }
        }
    }
}

fn print_summary(success_count: usize, selected_count: usize, failed: &[String]) {
    println!(
        "\nDownload complete! {success_count}/{selected_count} videos successful"
    );

    if !failed.is_empty() {
        println!("Failed downloads:");
        for title in failed {
            println!("  - {title}");
        }
    }
}
