//! CLI entry point for inkpress

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "inkpress")]
#[command(version = "0.1.0")]
#[command(about = "A markdown blog engine with cached article loading", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List visible articles, newest first
    #[command(alias = "l")]
    List,

    /// Render the listing page, or a single article page
    #[command(alias = "r")]
    Render {
        /// Article slug; renders the listing page when omitted
        slug: Option<String>,

        /// Write HTML to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or change the saved theme
    Theme {
        /// light, dark, or toggle (prints the current theme when omitted)
        value: Option<String>,
    },

    /// Drop cached article entries
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "inkpress=debug,info"
    } else {
        "inkpress=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List => {
            let blog = inkpress::Blog::new(&base_dir)?;
            inkpress::commands::list::run(&blog).await?;
        }

        Commands::Render { slug, output } => {
            let blog = inkpress::Blog::new(&base_dir)?;
            inkpress::commands::render::run(&blog, slug.as_deref(), output.as_deref()).await?;
        }

        Commands::Theme { value } => {
            let blog = inkpress::Blog::new(&base_dir)?;
            inkpress::commands::theme::run(&blog, value.as_deref())?;
        }

        Commands::Clean => {
            let blog = inkpress::Blog::new(&base_dir)?;
            inkpress::commands::clean::run(&blog).await?;
        }

        Commands::Version => {
            println!("inkpress version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
