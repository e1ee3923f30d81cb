//! Access token storage and validation
//!
//! The personal access token lives in the operating system keyring under the
//! service name `SwitchTube`, keyed by the current OS username. `set` walks
//! the user through creating a token in the web UI, validates it against the
//! profile endpoint and stores it; `get` refuses to hand out a token that no
//! longer authenticates.

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

use crate::api::BASE_URL;
use crate::ui;

const SERVICE_NAME: &str = "SwitchTube";
const CREATE_TOKEN_URL: &str = "https://tube.switch.ch/access_tokens";
const PROFILE_API: &str = "api/v1/profiles/me";
const VALIDATION_TIMEOUT: Duration = Duration::from_secs(10);

const MASK_THRESHOLD: usize = 10;
const MASK_VISIBLE_CHARS: usize = 5;

/// Result alias for token operations.
pub type TokenResult<T> = Result<T, TokenError>;

/// Errors from token management.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// No token stored yet
    #[error("no token found in keyring - run 'token set' first")]
    NotFound,

    /// `token set` declined replacing an existing token; callers exit quietly
    #[error("token already exists in keyring")]
    AlreadyExists,

    /// The user entered an empty token
    #[error("token cannot be empty")]
    Empty,

    /// The server rejected the token
    #[error("token authentication failed")]
    Invalid,

    /// The stored token no longer authenticates
    #[error("stored token is invalid: {0}")]
    StoredInvalid(#[source] Box<TokenError>),

    /// Keyring access failed
    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    /// The validation request itself failed
    #[error("failed to validate token: {0}")]
    Validation(#[from] reqwest::Error),

    /// Reading user input failed
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Manages the access token in the system keyring.
pub struct TokenManager {
    service: String,
    base_url: String,
}

impl TokenManager {
    /// Create a manager against the production API.
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Create a manager validating against a custom base URL (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            service: SERVICE_NAME.to_string(),
            base_url,
        }
    }

    /// Retrieve the stored token, verifying it still authenticates.
    ///
    /// # Errors
    ///
    /// [`TokenError::NotFound`] when nothing is stored,
    /// [`TokenError::StoredInvalid`] when the stored token fails validation.
    pub async fn get(&self) -> TokenResult<String> {
        let token = self.read_stored()?;

        if let Err(err) = self.validate_remote(&token).await {
            return Err(TokenError::StoredInvalid(Box::new(err)));
        }

        Ok(token)
    }

    /// Interactively create and store a new token.
    pub async fn set(&self) -> TokenResult<()> {
        self.check_existing().await?;

        print_instructions();

        let token = ui::input("\nEnter your access token: ")?;
        if token.is_empty() {
            return Err(TokenError::Empty);
        }

        println!("\nValidating token with SwitchTube API...");

        if let Err(err) = self.validate_remote(&token).await {
            println!("\nToken validation failed");
            self.print_token_info(&token, false);

            return Err(err);
        }

        self.entry()?.set_password(&token)?;

        self.print_token_info(&token, true);
        println!("Token is valid and successfully stored in keyring");

        Ok(())
    }

    /// Delete the stored token after a confirmation prompt.
    pub fn delete(&self) -> TokenResult<()> {
        if !ui::confirm("Are you sure you want to delete the stored token?") {
            println!("Token deletion cancelled");

            return Ok(());
        }

        match self.entry()?.delete_password() {
            Ok(()) => {
                println!("Token successfully deleted from keyring");
                Ok(())
            }
            Err(keyring::Error::NoEntry) => Err(TokenError::NotFound),
            Err(err) => Err(err.into()),
        }
    }

    /// Validate the stored token and print its status.
    pub async fn validate(&self) -> TokenResult<()> {
        println!("\nValidating token...");

        match self.get().await {
            Ok(token) => {
                self.print_token_info(&token, true);
                Ok(())
            }
            Err(err) => {
                // Show whatever is stored, even if it failed validation.
                if let Ok(token) = self.read_stored() {
                    self.print_token_info(&token, false);
                }

                Err(err)
            }
        }
    }

    /// Read the token from the keyring without validating it remotely.
    fn read_stored(&self) -> TokenResult<String> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(token),
            Err(keyring::Error::NoEntry) => Err(TokenError::NotFound),
            Err(err) => Err(err.into()),
        }
    }

    /// Before storing, show any existing token and ask about replacing it.
    async fn check_existing(&self) -> TokenResult<()> {
        let existing = match self.read_stored() {
            Err(TokenError::NotFound) => return Ok(()),
            Err(err) => return Err(err),
            Ok(token) => token,
        };

        let valid = self.validate_remote(&existing).await.is_ok();
        self.print_token_info(&existing, valid);
        println!();

        if !ui::confirm("Do you want to replace it?") {
            println!("Operation cancelled");

            return Err(TokenError::AlreadyExists);
        }

        Ok(())
    }

    /// Check the token against the profile endpoint.
    async fn validate_remote(&self, token: &str) -> TokenResult<()> {
        let url = format!("{}{}", self.base_url, PROFILE_API);
        debug!(%url, "validating token");

        let client = reqwest::Client::builder()
            .timeout(VALIDATION_TIMEOUT)
            .build()?;

        let response = client
            .get(&url)
            .header(AUTHORIZATION, format!("Token {token}"))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(TokenError::Invalid);
        }

        Ok(())
    }

    fn entry(&self) -> TokenResult<keyring::Entry> {
        Ok(keyring::Entry::new(&self.service, &username())?)
    }

    fn print_token_info(&self, token: &str, valid: bool) {
        let status = if valid { "Valid" } else { "Invalid" };

        println!("\nToken Information");
        println!("-----------------");
        println!("{:>8}: {}", "Service", self.service);
        println!("{:>8}: {}", "User", username());
        println!("{:>8}: {}", "Token", mask_token(token));
        println!("{:>8}: {} characters", "Length", token.len());
        println!("{:>8}: {}", "Status", status);
    }
}

impl Default for TokenManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Current OS username, used as the keyring account name.
fn username() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "default".to_string())
}

fn print_instructions() {
    println!();
    println!("Token Creation Instructions");
    println!("---------------------------");
    println!("1. Visit: {CREATE_TOKEN_URL}");
    println!("2. Click 'Create New Token'");
    println!("3. Copy the generated token");
    println!("4. Paste it below");
}

/// Mask the middle of a token for display. Short tokens are fully masked.
fn mask_token(token: &str) -> String {
    if token.len() <= MASK_THRESHOLD {
        return "*".repeat(token.len());
    }

    format!(
        "{}{}{}",
        &token[..MASK_VISIBLE_CHARS],
        "*".repeat(token.len() - 2 * MASK_VISIBLE_CHARS),
        &token[token.len() - MASK_VISIBLE_CHARS..]
    )
}
