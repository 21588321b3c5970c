//! navtree - validate and resolve localized documentation sidebars.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use navtree::cli::{self, Cli, Commands};
use navtree::config::{ConfigError, resolve_config_path};
use navtree::{log, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config_path = match resolve_config_path(&cli.config) {
        Ok(path) => path,
        Err(ConfigError::NotFound(name)) => {
            log!(
                "error";
                "config file '{}' not found in this directory or any parent",
                name.display()
            );
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    match &cli.command {
        Commands::Check => cli::check::check_config(&config_path),
        Commands::Sidebar { locale, pretty } => {
            cli::sidebar::print_sidebar(&config_path, locale.as_deref(), *pretty)
        }
        Commands::Locales => cli::locales::list_locales(&config_path),
        Commands::Watch => cli::watch::watch_config(&config_path),
    }
}
