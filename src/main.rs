mod commands;
mod mailbox;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use paws_core::PawsConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "paws")]
#[command(about = "Extract meeting invitations from calendar attachments in stored mail")]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse .ics files and print one JSON document per meeting
    Parse {
        /// Calendar files to parse
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Scan stored messages for invitation attachments
    Scan {
        /// Directory of messages (defaults to mailbox_dir from config)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Attachment filename to look for (defaults to attachment_name from config)
        #[arg(short, long)]
        attachment: Option<String>,

        /// Echo each matching attachment's raw text to stderr
        #[arg(long)]
        echo: bool,
    },
    /// Show the effective configuration
    Config {
        /// Write a commented default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn init_logging(cfg: &PawsConfig, verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { cfg.log_level.as_str() };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = PawsConfig::load()?;

    init_logging(&cfg, cli.verbose);

    match cli.command {
        Commands::Parse { files } => commands::parse::run(&cfg, files, cli.pretty).await,
        Commands::Scan {
            dir,
            attachment,
            echo,
        } => commands::scan::run(&cfg, dir, attachment, echo, cli.pretty).await,
        Commands::Config { init } => commands::config::run(&cfg, init),
    }
}
