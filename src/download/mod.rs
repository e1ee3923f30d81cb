//! Download orchestration for videos and channels
//!
//! The orchestrator resolves what the user passed on the command line,
//! authenticates, and hands off to the right downloader:
//!
//! 1. **Identify**: [`crate::identifier`] classifies the input as a video,
//!    a channel, or a bare ID of unknown kind
//! 2. **Authenticate**: the stored token is fetched from the keyring
//! 3. **Download**: [`video`] streams a single file, [`channel`] fetches the
//!    listing, runs the selector and downloads the chosen videos one by one
//!
//! Bare IDs are probed as a video first; when that fails for anything other
//! than a file-creation problem the channel endpoint is tried, and only if
//! both fail is the ID reported as invalid.

use tracing::info;

use crate::api::{ApiClient, ApiError};
use crate::identifier::{IdentifierError, MediaIdentifier, MediaKind};
use crate::output::OutputError;
use crate::select::SelectError;
use crate::token::{TokenError, TokenManager};
use crate::DownloadOptions;

pub mod channel;
pub mod video;

/// Result alias for download operations.
pub type DownloadResult<T> = Result<T, DownloadError>;

/// Errors from the download workflow.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// The input was neither a valid video nor channel ID
    #[error("invalid id: {0}")]
    InvalidId(String),

    /// A video has no downloadable variants
    #[error("no video variants found for {0}")]
    NoVariants(String),

    /// Identifier parsing failed
    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    /// Token retrieval failed
    #[error("failed to get token: {0}")]
    Token(#[from] TokenError),

    /// An API call failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Video selection failed or was aborted
    #[error("failed to select videos: {0}")]
    Select(#[from] SelectError),

    /// File or folder creation failed
    #[error(transparent)]
    Output(#[from] OutputError),

    /// Writing the downloaded stream to disk failed
    #[error("failed to copy video data: {0}")]
    Io(#[from] std::io::Error),
}

/// Position of one download within a batch, shown as `[current/total]`.
#[derive(Debug, Clone, Copy)]
pub struct ItemProgress {
    /// 1-based position within the batch
    pub current: usize,
    /// Batch size
    pub total: usize,
}

impl ItemProgress {
    /// Progress for a standalone single-video download.
    pub fn single() -> Self {
        Self {
            current: 1,
            total: 1,
        }
    }
}

/// Run a download based on the provided options.
pub async fn run(opts: DownloadOptions) -> DownloadResult<()> {
    let media = MediaIdentifier::parse(&opts.media)?;

    let token = TokenManager::new().get().await?;
    let client = ApiClient::new(token);

    match media.kind() {
        MediaKind::Video => {
            video::VideoDownloader::new(&client, &opts)
                .download(media.id(), true, ItemProgress::single())
                .await
        }
        MediaKind::Channel => {
            channel::ChannelDownloader::new(&client, &opts)
                .download(media.id())
                .await
        }
        MediaKind::Unknown => {
            // Probe as a video first; fall back to the channel endpoint.
            let err = match video::VideoDownloader::new(&client, &opts)
                .download(media.id(), true, ItemProgress::single())
                .await
            {
                Ok(()) => return Ok(()),
                Err(err) => err,
            };

            if matches!(err, DownloadError::Output(OutputError::CreateFile { .. })) {
                return Err(err);
            }

            info!(id = media.id(), "not a video, retrying as channel");

            channel::ChannelDownloader::new(&client, &opts)
                .download(media.id())
                .await
                .map_err(|err| fallback_error(err, media.id()))
        }
    }
}

/// Map a failed channel probe for a bare ID to `InvalidId`.
///
/// Selection errors keep their identity: Ctrl-C in the selector must stay
/// [`SelectError::Aborted`] so callers can exit quietly instead of reporting
/// the ID as invalid.
fn fallback_error(err: DownloadError, id: &str) -> DownloadError {
    match err {
        DownloadError::Select(_) => err,
        _ => DownloadError::InvalidId(id.to_string()),
    }
}
