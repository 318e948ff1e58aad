use clap::{Args, Parser, Subcommand};

use crate::config::PromptSettings;

pub const DEFAULT_MESSAGE: &str = "Select a directory";

#[derive(Parser)]
#[command(name = "dir-prompt")]
#[command(about = "Pick a directory interactively with tab completion")]
pub struct Cli {
    #[command(flatten)]
    pub prompt: PromptArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PromptArgs {
    /// Question shown in front of the input
    #[arg(short, long, global = true)]
    pub message: Option<String>,
    /// Directory the typed path is relative to (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub base_path: Option<String>,
    /// Number of candidates shown at once
    #[arg(short, long, global = true)]
    pub page_size: Option<usize>,
    /// Text shown when no directory matches
    #[arg(long, global = true)]
    pub empty_text: Option<String>,
    /// Directory name to leave out of the candidates (repeatable)
    #[arg(long, global = true)]
    pub exclude: Vec<String>,
    /// JSON settings file; command line flags take precedence
    #[arg(long, global = true)]
    pub config: Option<String>,
}

impl PromptArgs {
    /// Settings given on the command line, without the settings file
    pub fn to_settings(&self) -> PromptSettings {
        PromptSettings {
            message: self.message.clone(),
            base_path: self.base_path.clone(),
            page_size: self.page_size,
            empty_text: self.empty_text.clone(),
            exclude: self.exclude.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive prompt (default)
    Run,
    /// Run a scripted session without a terminal
    Test {
        /// Path to the script file
        #[arg(short, long)]
        script: String,
        /// Log to stderr while the script runs
        #[arg(short, long)]
        verbose: bool,
        /// Write screenshots instead of comparing them
        #[arg(long)]
        overwrite: bool,
    },
    /// Render the prompt as text, optionally after replaying a script
    Screenshot {
        /// Script to replay before rendering
        #[arg(short, long)]
        script: Option<String>,
        /// Output file for the screenshot (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
        /// Terminal width for rendering
        #[arg(long, default_value = "80")]
        width: u16,
        /// Terminal height for rendering
        #[arg(long, default_value = "16")]
        height: u16,
    },
}
