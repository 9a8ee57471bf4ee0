//! sitenav - Shared site header companion CLI

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sitenav_core::{HeaderConfig, NavSet, Presentation};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sitenav",
    version,
    about = "Pre-render, inspect and check the shared site header",
    long_about = "Companion CLI for the site header widget.\n\
                  \n\
                  The same header logic that runs in the browser can be rendered to static HTML,\n\
                  and a site directory can be checked against the navigation contract\n\
                  (every destination page exists, pages carry the mount point).\n\
                  \n\
                  Examples:\n\
                    sitenav render --path /graph.html        # Header HTML for graph.html\n\
                    sitenav render --variant drawer --with-styles\n\
                    sitenav css --variant dock               # Stylesheet only\n\
                    sitenav links --live --json              # Navigation contract as JSON\n\
                    sitenav check ./public                   # Verify a built site\n\
                  \n\
                  Environment Variables:\n\
                    SITENAV_CONFIG                           # Path to config TOML\n\
                    SITENAV_NO_COLOR                         # Disable ANSI colors\n\
                    RUST_LOG                                 # Log filter (default: warn)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file (default: <config dir>/sitenav/config.toml when present)
    #[arg(long, global = true, env = "SITENAV_CONFIG")]
    config: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "SITENAV_NO_COLOR")]
    no_color: bool,
}

/// Options shared by commands that build a header
#[derive(clap::Args)]
struct HeaderArgs {
    /// Presentation variant: bar, overlay, dock, sheet, drawer
    #[arg(long)]
    variant: Option<Presentation>,

    /// Include the live page in the navigation
    #[arg(long)]
    live: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the header HTML for a page
    Render {
        /// Document path of the page (e.g. /graph.html)
        #[arg(long, default_value = "/")]
        path: String,
        /// Prepend the stylesheet as a <style> element
        #[arg(long)]
        with_styles: bool,
        #[command(flatten)]
        header: HeaderArgs,
    },
    /// Print the stylesheet injected with the header
    Css {
        #[command(flatten)]
        header: HeaderArgs,
    },
    /// List the navigation contract
    Links {
        #[command(flatten)]
        header: HeaderArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a static site directory against the navigation contract
    Check {
        /// Site root containing the HTML pages
        site: PathBuf,
        #[command(flatten)]
        header: HeaderArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let base = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Render {
            path,
            with_styles,
            header,
        } => {
            let config = apply_args(base, &header);
            let html = cli::render_header(&config, &path, with_styles)?;
            print!("{}", html);
        }
        Command::Css { header } => {
            let config = apply_args(base, &header);
            print!("{}", sitenav_core::styles::stylesheet(config.variant));
        }
        Command::Links { header, json } => {
            let config = apply_args(base, &header);
            println!(
                "{}",
                cli::format_links(&config.nav_links(), json, cli.no_color)
            );
        }
        Command::Check { site, header, json } => {
            let config = apply_args(base, &header);
            let report = cli::check_site(&site, &config)?;
            println!("{}", cli::format_report(&report, json));
            if !report.is_ok() {
                return Err(cli::CliError::ContractViolation {
                    site,
                    missing: report.missing,
                }
                .into());
            }
        }
    }

    Ok(())
}

/// Explicit config must load; the default location is optional
fn load_config(explicit: Option<&Path>) -> Result<HeaderConfig> {
    if let Some(path) = explicit {
        return HeaderConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    match dirs::config_dir() {
        Some(dir) => {
            let path = dir.join("sitenav").join("config.toml");
            HeaderConfig::load_or_default(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        }
        None => Ok(HeaderConfig::default()),
    }
}

/// Command-line flags win over the config file
fn apply_args(mut config: HeaderConfig, args: &HeaderArgs) -> HeaderConfig {
    if let Some(variant) = args.variant {
        config.variant = variant;
    }
    if args.live {
        config.links = NavSet::Live;
    }
    config
}
