//! Media identifier parsing and validation
//!
//! Users may pass either a bare ID or the full SwitchTube URL. A bare ID
//! carries no type information, so it is classified as [`MediaKind::Unknown`]
//! and the orchestrator probes the video endpoint before falling back to the
//! channel endpoint.

use crate::api::BASE_URL;
use std::fmt;

const VIDEO_PREFIX: &str = "videos/";
const CHANNEL_PREFIX: &str = "channels/";

/// What kind of media an identifier refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// A single video
    Video,
    /// A channel containing videos
    Channel,
    /// A bare ID whose type must be probed against the API
    Unknown,
}

/// A parsed media identifier: the raw ID plus its detected kind.
///
/// # Examples
///
/// ```
/// use switchtube_dl::identifier::{MediaIdentifier, MediaKind};
///
/// let media = MediaIdentifier::parse("https://tube.switch.ch/videos/abc123").unwrap();
/// assert_eq!(media.id(), "abc123");
/// assert_eq!(media.kind(), MediaKind::Video);
///
/// let media = MediaIdentifier::parse("abc123").unwrap();
/// assert_eq!(media.kind(), MediaKind::Unknown);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaIdentifier {
    id: String,
    kind: MediaKind,
}

impl MediaIdentifier {
    /// Parse user input into an identifier.
    ///
    /// Input that does not start with the SwitchTube base URL is taken
    /// verbatim as a bare ID of unknown kind. URLs under the base must point
    /// at `videos/<id>` or `channels/<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::UnrecognizedPath`] for base URLs that point
    /// at anything else.
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        let input = input.trim();

        let Some(rest) = input.strip_prefix(BASE_URL) else {
            return Ok(Self {
                id: input.to_string(),
                kind: MediaKind::Unknown,
            });
        };

        if let Some(id) = rest.strip_prefix(VIDEO_PREFIX) {
            return Ok(Self {
                id: id.to_string(),
                kind: MediaKind::Video,
            });
        }

        if let Some(id) = rest.strip_prefix(CHANNEL_PREFIX) {
            return Ok(Self {
                id: id.to_string(),
                kind: MediaKind::Channel,
            });
        }

        Err(IdentifierError::UnrecognizedPath(rest.to_string()))
    }

    /// The raw ID used in API paths.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The detected media kind.
    pub fn kind(&self) -> MediaKind {
        self.kind
    }
}

impl fmt::Display for MediaIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Identifier parsing errors.
#[derive(Debug, thiserror::Error)]
pub enum IdentifierError {
    /// A SwitchTube URL that is neither a video nor a channel link
    #[error("unrecognized SwitchTube URL path: {0}")]
    UnrecognizedPath(String),
}
