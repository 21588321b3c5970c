//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Validate and resolve localized documentation sidebars
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the working directory
    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = crate::config::CONFIG_FILE,
        value_hint = clap::ValueHint::FilePath
    )]
    pub config: PathBuf,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the config and report every violation
    #[command(visible_alias = "c")]
    Check,

    /// Print the sidebar resolved for one locale as JSON
    #[command(visible_alias = "s")]
    Sidebar {
        /// Locale id (default: the default locale)
        #[arg(short, long)]
        locale: Option<String>,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// List registered locales
    #[command(visible_alias = "l")]
    Locales,

    /// Revalidate whenever the config file changes
    #[command(visible_alias = "w")]
    Watch,
}
