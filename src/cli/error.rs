//! CLI error types and conversions

use crate::download::DownloadError;
use crate::select::SelectError;
use crate::token::TokenError;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Download error
    #[error("download failed: {0}")]
    Download(#[from] DownloadError),

    /// Token error
    #[error("token operation failed: {0}")]
    Token(#[from] TokenError),
}

impl CliError {
    /// The user pressed Ctrl-C in the selector; exit quietly with 130.
    pub fn is_user_abort(&self) -> bool {
        matches!(
            self,
            CliError::Download(DownloadError::Select(SelectError::Aborted))
        )
    }

    /// `token set` was declined; the cancellation message is already
    /// printed, so exit quietly with success.
    pub fn is_declined_replace(&self) -> bool {
        matches!(self, CliError::Token(TokenError::AlreadyExists))
    }
}
