//! Distill CLI - Pattern-based text digests
//!
//! The summarization logic is contained in lib.rs, and this file is responsible
//! for parsing arguments, loading input and handling top-level errors.

use anyhow::{bail, Context};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use distill::augment::generate_stats;
use distill::{analyze, source, summarize, Config, Mode, OutputFormat, SummaryInput};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "distill")]
#[command(author, version, about = "Pattern-based text digests", long_about = None)]
struct Cli {
    /// Path to a config file (default: ./distill.toml, then ~/.config/distill/distill.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Where to read text from. Standard input is used when neither is given.
#[derive(Args)]
struct InputArgs {
    /// Text to process
    #[arg(long)]
    text: Option<String>,
    /// File to process, relative to the working directory
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[derive(Args)]
struct SummariseArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Summary style
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,
    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Extra guidance, e.g. "keep it short"
    #[arg(long)]
    instructions: Option<String>,
    /// Maximum number of words in the output (0 for unlimited)
    #[arg(long)]
    max_length: Option<usize>,
    /// Language label reported with the result
    #[arg(long)]
    language: Option<String>,
    /// Append supporting quotes from the source
    #[arg(long)]
    quotes: bool,
    /// Append reading statistics
    #[arg(long)]
    stats: bool,
    /// Keep the summary on this topic
    #[arg(long)]
    focus: Option<String>,
    /// 1 (concrete) to 5 (abstract)
    #[arg(long, allow_negative_numbers = true)]
    abstraction_level: Option<i32>,
    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise text, a file or standard input
    #[command(alias = "summarize")]
    Summarise(SummariseArgs),
    /// Print the facts extracted from the input as JSON
    #[command(alias = "analyze")]
    Analyse {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print reading statistics for the input as JSON
    Stats {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let level = config
        .as_ref()
        .map(|c| c.logging.level.as_str())
        .unwrap_or("warn");
    init_logging(level, cli.verbose);
    let config = config.context("failed to load configuration")?;

    match cli.command {
        Commands::Summarise(args) => {
            let ok = run_summarise(args, &config)?;
            if !ok {
                std::process::exit(1);
            }
        }
        Commands::Analyse { input } => {
            let text = read_single_input(&input)?;
            println!("{}", serde_json::to_string_pretty(&analyze(&text))?);
        }
        Commands::Stats { input } => {
            let text = read_single_input(&input)?;
            println!("{}", serde_json::to_string_pretty(&generate_stats(&text))?);
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "distill", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Run a summarisation and print it. Returns false if the engine reported a failure.
fn run_summarise(args: SummariseArgs, config: &Config) -> anyhow::Result<bool> {
    let mut options = config.defaults.clone();
    if let Some(mode) = args.mode {
        options.mode = mode;
    }
    if let Some(format) = args.format {
        options.format = format;
    }
    if args.instructions.is_some() {
        options.instructions = args.instructions;
    }
    if let Some(max_length) = args.max_length {
        options.max_length = max_length;
    }
    if let Some(language) = args.language {
        options.language = language;
    }
    if args.focus.is_some() {
        options.focus = args.focus;
    }
    if let Some(level) = args.abstraction_level {
        options.abstraction_level = level;
    }
    options.include_quotes |= args.quotes;
    options.include_stats |= args.stats;

    // Both sources are forwarded as given; the engine rejects conflicts.
    let mut input = SummaryInput {
        text: args.input.text,
        file: None,
    };
    if let Some(path) = &args.input.file {
        input.file = Some(source::load_file(path)?);
    }
    if input.text.is_none() && input.file.is_none() && !atty::is(atty::Stream::Stdin) {
        input.text = Some(source::read_stdin()?);
    }

    let result = summarize(&input, &options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(output) = &result.output {
        println!("{}", output);
    }

    if let Some(error) = &result.error {
        if !args.json {
            eprintln!("{} {}", "error:".red().bold(), error);
        }
        return Ok(false);
    }
    Ok(true)
}

/// Read exactly one input source for the analysis commands.
fn read_single_input(input: &InputArgs) -> anyhow::Result<String> {
    match (&input.text, &input.file) {
        (Some(_), Some(_)) => bail!("Provide either --text or --file, not both"),
        (Some(text), None) => Ok(text.clone()),
        (None, Some(path)) => Ok(source::load_file(path)?.content),
        (None, None) if !atty::is(atty::Stream::Stdin) => Ok(source::read_stdin()?),
        (None, None) => bail!("Either --text or --file must be provided"),
    }
}

fn init_logging(level: &str, verbose: bool) {
    let default = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
