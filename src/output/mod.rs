//! Filename sanitization and directory handling
//!
//! Video titles and channel names come from the API and routinely contain
//! characters that filesystems reject. This module turns them into safe
//! paths, creates the directories downloads land in, and implements the
//! skip/force/prompt policy for existing files.

use std::path::{Path, PathBuf};
use tracing::warn;

use crate::ui;
use crate::DownloadOptions;

const DEFAULT_EXTENSION: &str = "mp4";

/// Result alias for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Errors from creating files and folders.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// A directory could not be created
    #[error("failed to create folder {path}: {source}")]
    CreateDir {
        /// The directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The target file could not be created
    #[error("failed to create file {path}: {source}")]
    CreateFile {
        /// The file that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Build the sanitized target path for a video.
///
/// The extension comes from the variant's MIME type (`video/mp4` -> `mp4`,
/// fallback `mp4`). With the episode flag set and a non-empty episode tag,
/// the tag is prefixed: `01_OR_Mapping.mp4`.
pub fn build_filename(
    title: &str,
    media_type: &str,
    episode: &str,
    opts: &DownloadOptions,
) -> PathBuf {
    let parts: Vec<&str> = media_type.split('/').collect();
    let extension = match parts.as_slice() {
        [_, subtype] => *subtype,
        _ => DEFAULT_EXTENSION,
    };

    let stem = sanitize_title(title).replace(' ', "_");

    let filename = if opts.use_episode && !episode.is_empty() {
        format!("{episode}_{stem}.{extension}")
    } else {
        format!("{stem}.{extension}")
    };

    match &opts.output_dir {
        Some(dir) => dir.join(filename),
        None => PathBuf::from(filename),
    }
}

/// Create the folder a channel downloads into and return its path.
///
/// Slashes in channel names become ` - ` so the name stays a single
/// directory level.
pub fn channel_folder(channel_name: &str, opts: &DownloadOptions) -> OutputResult<PathBuf> {
    let name = channel_name.replace('/', " - ");

    let folder = match &opts.output_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    };

    std::fs::create_dir_all(&folder).map_err(|source| OutputError::CreateDir {
        path: folder.clone(),
        source,
    })?;

    Ok(folder)
}

/// Decide whether an existing file should be skipped.
///
/// `--force` always downloads. Otherwise an existing file is skipped either
/// because `--skip` is set or because the user declines the overwrite
/// prompt. Missing files are never skipped.
pub fn should_skip(path: &Path, opts: &DownloadOptions) -> bool {
    if opts.force || !path.exists() {
        return false;
    }

    if opts.skip {
        return true;
    }

    !ui::confirm(&format!("File {} already exists. Overwrite?", path.display()))
}

/// Create the target file, making sure its parent directory exists.
pub async fn create_video_file(path: &Path) -> OutputResult<tokio::fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| OutputError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
    }

    tokio::fs::File::create(path)
        .await
        .map_err(|source| OutputError::CreateFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Strip or replace characters that filesystems reject in filenames.
fn sanitize_title(title: &str) -> String {
    let mut sanitized = String::with_capacity(title.len());

    for c in title.chars() {
        match c {
            '/' | '\\' | ':' | '|' => sanitized.push('-'),
            '*' | '?' | '"' | '<' | '>' => {}
            _ => sanitized.push(c),
        }
    }

    let mut sanitized = sanitized.trim().to_string();
    while sanitized.contains("--") {
        sanitized = sanitized.replace("--", "-");
    }

    if sanitized.is_empty() {
        warn!(title, "title sanitized down to nothing");
    }

    sanitized
}
