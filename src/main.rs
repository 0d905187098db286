//! fixgrade: interactive repairability score browser

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use fixgrade::cli;
use fixgrade::config::file as config_file;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with data source info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nData sources:",
        "\n  devices_with_scores.json  device records with repairability scores",
        "\n  rubric.json               scoring methodology (optional)",
        "\n\nExport formats:",
        "\n  csv, json, structured"
    )
}

#[derive(Parser)]
#[command(name = "fixgrade")]
#[command(version, long_version = build_long_version())]
#[command(about = "Interactive repairability score browser", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  The requested view matched no devices
    3  Error occurred

EXAMPLES:
    # Browse interactively (the default)
    fixgrade

    # Restore a shared view
    fixgrade browse --state 'q=pixel&brand=Google&sort=repairability_score:desc'

    # Refresh the local cache
    fixgrade fetch

    # Export the filtered view as CSV
    fixgrade export --format csv --state 'brand=Fairphone' -o fairphone.csv")]
struct Cli {
    /// Path to a config file (default: .fixgrade.yaml or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the dataset base URL
    #[arg(long, global = true, env = "FIXGRADE_DATA_URL")]
    data_url: Option<String>,

    /// Never touch the network; rely on the local cache
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the dataset interactively (default)
    Browse {
        /// Share string restoring a saved view (q, brand, sort, score, noscore)
        #[arg(long)]
        state: Option<String>,
    },

    /// Export the (optionally filtered) dataset
    Export {
        /// Output format: csv, json, or structured
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Share string selecting the view to export
        #[arg(long)]
        state: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fetch the dataset and refresh the local cache
    Fetch {
        /// Drop the cached copy before fetching
        #[arg(long)]
        clear_cache: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("FIXGRADE_LOG").unwrap_or_else(|_| "warn".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    match run() {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX)),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(cli::exit_codes::ERROR as u8)
        }
    }
}

fn run() -> Result<i32> {
    let args = Cli::parse();

    let (mut config, loaded_from) = config_file::load_or_default(args.config.as_deref())?;
    if let Some(path) = &loaded_from {
        tracing::debug!(path = %path.display(), "loaded config");
    }
    if let Some(url) = args.data_url {
        config.data.base_url = url;
    }
    if args.offline {
        config.data.offline = true;
    }
    config.validate()?;

    match args.command {
        None => cli::run_browse(&config, None),
        Some(Commands::Browse { state }) => cli::run_browse(&config, state.as_deref()),
        Some(Commands::Export {
            format,
            state,
            output,
        }) => cli::run_export(&config, &format, state.as_deref(), output.as_ref()),
        Some(Commands::Fetch { clear_cache }) => cli::run_fetch(&config, clear_cache),
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(cli::exit_codes::SUCCESS)
        }
    }
}
