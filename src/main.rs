//! Command-line entry point.
//!
//! # Usage
//!
//! ```bash
//! # Start the HTTP server (default command)
//! corebox-login serve
//!
//! # Print the login page to stdout
//! corebox-login render
//!
//! # Write the login page to a file
//! corebox-login render --output dist/login.html
//! ```

use corebox_login::config::{self, Config};
use corebox_login::web::{export::write_login_screen, handlers::render_login_screen};
use corebox_login::{logging, server};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Owner sign-in screen for CoreBox Systems.
#[derive(Parser)]
#[command(name = "corebox-login")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the login page over HTTP
    Serve,

    /// Render the login page to a static HTML document
    Render {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let config = config::load_from_env().context("Invalid configuration")?;
            logging::init(&config);
            config.print_summary();
            server::run(config).await
        }
        Commands::Render { output } => {
            // Server settings do not affect the exported page.
            logging::init(&Config::default());
            render(output)
        }
    }
}

fn render(output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => write_login_screen(&path),
        None => {
            let html = render_login_screen()?;
            std::io::stdout()
                .write_all(html.as_bytes())
                .context("Failed to write to stdout")
        }
    }
}
