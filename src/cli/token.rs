//! Token management subcommands

use clap::Subcommand;

use super::CliError;
use crate::token::TokenManager;

/// Operations on the stored access token
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Check whether an access token is stored and print it
    Get,

    /// Create and store a new SwitchTube access token
    Set,

    /// Delete the access token from the keyring
    Delete,

    /// Validate the currently stored access token
    Validate,
}

impl TokenCommand {
    /// Run the token operation.
    pub async fn execute(self) -> Result<(), CliError> {
        let manager = TokenManager::new();

        match self {
            TokenCommand::Get => {
                let token = manager.get().await?;
                println!("Token: {token}");
            }
            TokenCommand::Set => manager.set().await?,
            TokenCommand::Delete => manager.delete()?,
            TokenCommand::Validate => manager.validate().await?,
        }

        Ok(())
    }
}
