use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Spoken descriptions of educational images
#[derive(Debug, Parser)]
#[command(name = "seewrite", about = "Describe images, answer follow-up questions, and narrate the results")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "seewrite.toml", env = "SEEWRITE_CONFIG")]
    pub config: PathBuf,

    /// Log filter directive
    #[arg(long, default_value = "info", env = "SEEWRITE_LOG")]
    pub log_filter: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Describe an image file
    Describe {
        /// Image to describe
        #[arg(long)]
        image: PathBuf,

        /// Also synthesize the description
        #[arg(long)]
        narrate: bool,

        /// Voice used for narration
        #[arg(long)]
        voice: Option<String>,
    },

    /// Answer a follow-up question about a description
    Ask {
        /// Description the question refers to
        #[arg(long, default_value = "")]
        description: String,

        /// The learner's question
        #[arg(long)]
        question: String,

        /// Also synthesize the answer
        #[arg(long)]
        narrate: bool,

        /// Voice used for narration
        #[arg(long)]
        voice: Option<String>,
    },

    /// Synthesize text to speech
    Speak {
        /// Text to speak
        #[arg(long)]
        text: String,

        /// Voice to use
        #[arg(long)]
        voice: Option<String>,

        /// Write the decoded MP3 here
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
