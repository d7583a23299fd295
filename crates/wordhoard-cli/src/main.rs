use anyhow::Result;
use clap::{Parser, Subcommand};
use std::time::Duration;
use wordhoard_acquire::SourceConfig;
use wordhoard_lookup::{FieldFilter, Lexicon};
use wordhoard_model::Field;

mod report;

#[derive(Parser)]
#[command(name = "wordhoard")]
#[command(about = "Dictionary and thesaurus lookup tool")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a word on the dictionary and thesaurus sources
    Lookup {
        /// The word to look up
        word: String,

        /// Print the record as pretty JSON instead of a text report
        #[arg(long)]
        json: bool,

        /// Write the record as JSON to a file instead of stdout
        #[arg(short = 'O', long)]
        output: Option<String>,

        /// Override the dictionary source base URL
        #[arg(long)]
        dictionary_url: Option<String>,

        /// Override the thesaurus source base URL
        #[arg(long)]
        thesaurus_url: Option<String>,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,

        /// Fields to leave out of the output (comma-separated)
        #[arg(long, value_enum, value_delimiter = ',')]
        exclude: Vec<FieldArg>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum FieldArg {
    Definitions,
    Origin,
    Synonyms,
    Antonyms,
    RelatedWords,
    Rhymes,
}

impl From<FieldArg> for Field {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Definitions => Field::Definitions,
            FieldArg::Origin => Field::Origin,
            FieldArg::Synonyms => Field::Synonyms,
            FieldArg::Antonyms => Field::Antonyms,
            FieldArg::RelatedWords => Field::RelatedWords,
            FieldArg::Rhymes => Field::Rhymes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";
    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(
                time_format.to_string(),
            ))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(
                time_format.to_string(),
            ))
            .init();
    }

    match cli.command {
        Commands::Lookup {
            word,
            json,
            output,
            dictionary_url,
            thesaurus_url,
            timeout_secs,
            exclude,
        } => {
            let mut config = SourceConfig::default();
            if let Some(url) = dictionary_url {
                config.dictionary_base = url;
            }
            if let Some(url) = thesaurus_url {
                config.thesaurus_base = url;
            }
            config.timeout = Duration::from_secs(timeout_secs);

            let filter: FieldFilter = exclude.into_iter().map(Field::from).collect();
            let lexicon = Lexicon::with_config(config);
            let record = lexicon.lookup_filtered(&word, &filter).await?;

            if let Some(path) = output {
                let json = serde_json::to_string_pretty(&record)?;
                std::fs::write(&path, &json)?;
                tracing::info!(
                    path = %path,
                    definitions = record.definitions.len(),
                    synonyms = record.synonyms.len(),
                    "Wrote word record"
                );
            } else if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print!("{}", report::render_text(&record));
            }
        }
    }

    Ok(())
}
