//! Download command and top-level CLI definition

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::token::TokenCommand;
use super::CliError;
use crate::{download, DownloadOptions};

/// Download videos and channels from SwitchTube
#[derive(Debug, Parser)]
#[command(name = "switchtube-dl", version, about)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download a video or channel.
    ///
    /// Automatically detects if the input is a video or channel. You can
    /// also pass the whole URL instead of the ID for convenience.
    Download(DownloadArgs),

    /// Manage the SwitchTube access token stored in the system keyring
    Token {
        /// Token operation to run
        #[command(subcommand)]
        command: TokenCommand,
    },

    /// Print the version number
    Version,
}

/// Arguments for the download command
#[derive(Debug, Args)]
pub struct DownloadArgs {
    /// Video or channel ID, or the full SwitchTube URL
    pub media: String,

    /// Prefix the video with its episode number, e.g. 01_OR_Mapping.mp4
    #[arg(short, long)]
    pub episode: bool,

    /// Skip a video if it already exists
    #[arg(short, long)]
    pub skip: bool,

    /// Force overwrite if a file already exists
    #[arg(short, long)]
    pub force: bool,

    /// Download the whole content of a channel
    #[arg(short, long)]
    pub all: bool,

    /// Output directory for downloaded files
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl DownloadArgs {
    /// Run the download with these arguments.
    pub async fn execute(self) -> Result<(), CliError> {
        download::run(self.into_options()).await?;

        Ok(())
    }

    fn into_options(self) -> DownloadOptions {
        DownloadOptions {
            media: self.media,
            output_dir: self.output,
            use_episode: self.episode,
            skip: self.skip,
            force: self.force,
            all: self.all,
        }
    }
}
