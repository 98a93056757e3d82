//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_rs::commands::button::ButtonArgs;

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(version)]
#[command(about = "Button components and a Ghost-backed post feed for static sites", long_about = None)]
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
    /// Fetch content from Ghost and list it
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Render a button as HTML
    Button {
        /// Accent colour shown on hover
        #[arg(long)]
        color: String,

        /// Button text
        #[arg(long)]
        label: Option<String>,

        /// Destination; without it the button is an action button
        #[arg(long)]
        link: Option<String>,

        /// Open the link in a new tab
        #[arg(long)]
        external: bool,

        /// Download the link target
        #[arg(long)]
        download: bool,

        /// Render the static disabled variant
        #[arg(long)]
        disabled: bool,

        /// Use white text on hover
        #[arg(long)]
        white_text_hover: bool,

        /// Extra CSS class
        #[arg(long)]
        class: Option<String>,
    },

    /// Print the button stylesheet for the configured theme
    Stylesheet,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { r#type } => {
            let site = folio_rs::Site::new(&base_dir)?;
            tracing::info!("Fetching posts from {}", site.config.ghost.url);
            folio_rs::commands::list::run(&site, &r#type).await?;
        }

        Commands::Button {
            color,
            label,
            link,
            external,
            download,
            disabled,
            white_text_hover,
            class,
        } => {
            let html = folio_rs::commands::button::run(ButtonArgs {
                color,
                label,
                link,
                external,
                download,
                disabled,
                white_text_hover,
                class,
            });
            println!("{}", html);
        }

        Commands::Stylesheet => {
            let site = folio_rs::Site::new(&base_dir)?;
            print!("{}", site.button_stylesheet());
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
