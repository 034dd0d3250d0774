use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "emojipick",
    about = "Search a directory of emoji images and stage the best matches"
)]
pub struct Cli {
    /// Override the emoji directory
    #[arg(long, global = true)]
    pub emoji_dir: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank emoji files against a term without loading them
    Search(SearchArgs),
    /// Search, then load and deduplicate the top matches for a picker
    Stage(StageArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Search --

#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// The search term
    pub term: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Stage --

#[derive(Debug, Parser)]
pub struct StageArgs {
    /// The search term; an empty term stages nothing
    pub term: String,

    /// Maximum number of emojis to stage
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,

    /// Output staged records as JSON, payloads base64 encoded
    #[arg(long)]
    pub json: bool,

    /// Also write each payload to DIR as <index>.<extension>
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "emojipick",
            &mut std::io::stdout(),
        );
    }
}
