//! # SwitchTube Downloader
//!
//! A command-line tool for downloading videos and whole channels from
//! SwitchTube (<https://tube.switch.ch>). Authentication uses a personal
//! access token stored in the operating system keyring.
//!
//! ## Features
//!
//! - **Video and channel downloads**: pass a bare ID or the full URL; the
//!   media type is detected automatically
//! - **Interactive selection**: channels open a checkbox selector in the
//!   terminal, with a `1-3,5`-style text fallback for piped input
//! - **Token management**: `token get/set/delete/validate` subcommands backed
//!   by the system keyring
//! - **Progress reporting**: per-file progress bars with byte rates
//!
//! ## Architecture
//!
//! - [`identifier`] - Media identifier parsing (bare ID vs. full URL)
//! - [`api`] - Authenticated SwitchTube API client
//! - [`token`] - Access token storage and validation
//! - [`select`] - Interactive and text-based video selection
//! - [`download`] - Download orchestration for videos and channels
//! - [`output`] - Filename sanitization and directory handling
//!
//! ## Quick Start
//!
//! ```no_run
//! use switchtube_dl::download;
//! use switchtube_dl::DownloadOptions;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = DownloadOptions {
//!     media: "https://tube.switch.ch/videos/abc123".to_string(),
//!     ..Default::default()
//! };
//! download::run(opts).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use serde::Deserialize;
use std::path::PathBuf;

/// Authenticated SwitchTube API client
pub mod api;

/// CLI command implementations
pub mod cli;

/// Download orchestration for videos and channels
pub mod download;

/// Media identifier parsing and validation
pub mod identifier;

/// Filename sanitization and directory handling
pub mod output;

/// Interactive and text-based video selection
pub mod select;

/// Access token storage and validation
pub mod token;

/// Terminal prompts shared across commands
pub mod ui;

/// A single video as returned by the browse API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Video {
    /// Opaque video ID used in API paths
    pub id: String,
    /// Display title
    pub title: String,
    /// Episode tag, often a number like "01"; empty when unset
    #[serde(default)]
    pub episode: String,
}

/// A downloadable rendition of a video.
///
/// The first variant in the API response is the preferred one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoVariant {
    /// Server-relative path of the binary stream
    pub path: String,
    /// MIME type, e.g. `video/mp4`; decides the file extension
    pub media_type: String,
}

/// Channel metadata as returned by the browse API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChannelInfo {
    /// Channel display name, used for the download folder
    pub name: String,
}

/// Options controlling a download run, built from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct DownloadOptions {
    /// Video or channel ID, or the full SwitchTube URL
    pub media: String,
    /// Directory downloads are placed under; current directory when `None`
    pub output_dir: Option<PathBuf>,
    /// Prefix filenames with the episode tag, e.g. `01_OR_Mapping.mp4`
    pub use_episode: bool,
    /// Skip files that already exist instead of prompting
    pub skip: bool,
    /// Overwrite existing files without prompting
    pub force: bool,
    /// Download the whole channel without asking for a selection
    pub all: bool,
}
