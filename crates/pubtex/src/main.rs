//! pubtex - Entry Point
//!
//! Reads a JSON publication list and writes the LaTeX fragment.

use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser, error::ErrorKind};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pubtex::config::{Config, DEFAULT_OUTPUT};
use pubtex::models::InitialStyle;

/// Exit status after printing help.
const EXIT_HELP: i32 = 1;

/// Exit status when the input file argument is missing.
const EXIT_MISSING_INPUT: i32 = 2;

const INPUT_FORMAT: &str = "\
The input is a JSON list of publications:

[
    {
        \"title\": \"string\",
        \"named_authors\": \"comma-separated string\",
        \"extra_authors\": \"any value\",
        \"collaboration\": \"string\",
        \"how_published\": \"journal ref\",
        \"year\": integer
    }
]

Every field is optional.";

#[derive(Parser, Debug)]
#[command(name = "pubtex")]
#[command(about = "Render a JSON list of publications as a LaTeX fragment")]
#[command(after_long_help = INPUT_FORMAT)]
#[command(version)]
struct Cli {
    /// JSON file holding the publication list
    input: PathBuf,

    /// Output LaTeX file (created or truncated)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Only tie periods after a single-letter initial ("St. Louis" stays as is)
    #[arg(long)]
    anchor_initials: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let style = if self.anchor_initials {
            InitialStyle::Anchored
        } else {
            InitialStyle::Literal
        };

        Config::new(&self.input)
            .with_output(&self.output)
            .with_initial_style(style)
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    if json {
        subscriber.with(layer.json()).init();
    } else {
        subscriber.with(layer.compact()).init();
    }
}

/// Map argument errors onto the exit statuses scripts rely on.
fn exit_on_parse_error(err: &clap::Error) -> ! {
    match err.kind() {
        ErrorKind::DisplayHelp => {
            err.print().ok();
            process::exit(EXIT_HELP);
        }
        ErrorKind::MissingRequiredArgument => {
            println!("This script requires a filename argument.\n");
            println!("{}", Cli::command().render_long_help());
            process::exit(EXIT_MISSING_INPUT);
        }
        _ => err.exit(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::try_parse().unwrap_or_else(|err| exit_on_parse_error(&err));

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        input = %cli.input.display(),
        output = %cli.output.display(),
        "Starting pubtex"
    );

    let config = cli.config();
    pubtex::run(&config).map_err(|err| {
        let context = if err.is_input_error() {
            format!("could not load publications from {}", err.path().display())
        } else {
            format!("could not write publications to {}", err.path().display())
        };
        anyhow::Error::new(err).context(context)
    })?;

    Ok(())
}
