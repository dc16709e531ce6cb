//! Binary entrypoint for the Letterchain CLI.
//!
//! Commands:
//! - `run` - play over stdin/stdout; each line is `[#channel] message`
//! - `init` - create a starter `config.toml`
//!
//! See the library crate docs for module-level details: `letterchain::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};

use letterchain::bot::console::run_console;
use letterchain::bot::ChatBot;
use letterchain::config::Config;
use letterchain::metrics;

#[derive(Parser)]
#[command(name = "letterchain")]
#[command(about = "Word-building games for chat channels")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Read chat lines from stdin and print the bot's replies
    Run {
        /// Fixed RNG seed (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Write a default configuration file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { seed } => {
            let loaded = Config::load_if_present(&cli.config).await?;
            let missing = loaded.is_none();
            let mut config = loaded.unwrap_or_default();
            init_logging(&Some(config.clone()), cli.verbose);
            if missing {
                warn!("Config file {} not found (using defaults)", cli.config);
            }
            if seed.is_some() {
                config.games.seed = seed;
            }
            info!(
                "Starting {} v{} (prefix {})",
                config.bot.name,
                env!("CARGO_PKG_VERSION"),
                config.bot.effective_prefix()
            );

            let bot = ChatBot::from_config(&config);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let stats = run_console(&bot, stdin, tokio::io::stdout()).await?;

            let counts = metrics::submission_snapshot();
            info!(
                "Session over: lines={} replies={} accepted={} rejected={} words_completed={} games_left={}",
                stats.lines,
                stats.replies,
                counts.accepted,
                counts.rejected,
                counts.words_completed,
                bot.registry().len()
            );
        }
        Commands::Init => {
            init_logging(&None, cli.verbose);
            info!("Initializing new configuration");
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
    }

    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .map(|cfg| cfg.logging.level_filter())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    // Replies go to stdout, so log records go to stderr.
    builder.target(env_logger::Target::Stderr);
    let log_file = config
        .as_ref()
        .and_then(|cfg| cfg.logging.file.clone())
        .and_then(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });
    if let Some(f) = log_file {
        let file = std::sync::Mutex::new(f);
        // Mirror to the terminal only when someone is watching it
        let is_tty = atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = file.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}
