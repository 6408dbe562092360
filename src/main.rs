//! Notes MCP Server - Main Entry Point
//!
//! This is the main entry point for the notes MCP server application.
//! The actual implementation is in the `notes_mcp` library.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use mcp_attr::server::serve_stdio;
use notes_mcp::NotesServerHandler;
use notes_mcp::config::DEFAULT_CONFIG_FILE;
use notes_mcp::notes::directory::check_directory;
use notes_mcp::summary;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Notes MCP Server - read-only access to a markdown vault via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the note catalog over MCP stdio
    Serve {
        /// Path to the TOML configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
    /// Scan a directory and write its .llm_summary.json
    Scan {
        /// Directory containing markdown notes
        directory: PathBuf,
    },
}

fn init_logging() {
    // stdout carries the MCP protocol, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    init_logging();

    match args.command {
        Command::Serve { config } => {
            let handler = NotesServerHandler::new(&config)?;
            serve_stdio(handler).await?;
        }
        Command::Scan { directory } => {
            if let Err(e) = check_directory(&directory) {
                tracing::error!("{}", e);
                std::process::exit(1);
            }
            match summary::write_summary(&directory) {
                Ok(path) => println!("Summary saved to: {}", path.display()),
                Err(e) => {
                    tracing::error!("Error saving summary: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
