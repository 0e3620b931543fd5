use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "neuron-tag")]
#[command(about = "Applies-to tagging for documentation trees")]
#[command(version)]
pub struct Cli {
    /// Base directory (default: ~/.neuron-tag)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve applies-to tags for one or more document paths
    Resolve {
        /// Document paths (slash-separated, extension-free)
        #[arg(required = true)]
        docnames: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Also show the document nodes the directive would emit
        #[arg(long)]
        nodes: bool,
    },

    /// Scan a documentation tree and report tags for every page
    Scan {
        /// Root of the documentation sources
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Only show pages with no applicable platform
        #[arg(long)]
        untagged: bool,

        /// Scan directories that are excluded by default (e.g., --include=_build)
        #[arg(long, value_name = "DIR")]
        include: Vec<String>,

        /// Skip additional directories (e.g., --exclude=archive)
        #[arg(long, value_name = "DIR")]
        exclude: Vec<String>,
    },

    /// Lint the builtin rule tables
    Check,

    /// Print the builtin rule tables
    Tables {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get { key: String },

    /// Set a config value
    Set { key: String, value: String },

    /// List all config keys and values
    List,

    /// Print the config file path
    Path,

    /// Initialize the config file with the default template
    Init,
}
