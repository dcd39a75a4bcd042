use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tango_config::Config;
use tango_lang_japanese::JlptLevel;
use tracing_subscriber::EnvFilter;

mod commands;
mod profile;
mod summary;


#[derive(Parser)]
#[command(name = "tango")]
#[command(about = "Build the JLPT vocabulary dataset from Jisho lookups or CSV word lists")]
#[command(version)]
struct Cli {
    /// JSON config profile; environment variables are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Look up seed words on Jisho and write validated records
    Scrape {
        /// Seed file: JSON array of {"category", "keys"}; embedded lists when omitted
        #[arg(long)]
        seeds: Option<PathBuf>,
        /// Jisho search endpoint
        #[arg(long)]
        api_url: Option<String>,
        /// Pause after every lookup
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Per-request timeout
        #[arg(long)]
        timeout_secs: Option<u64>,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Convert n5.csv .. n1.csv word lists into records
    ImportCsv {
        /// Directory holding the per-level CSV files
        #[arg(long)]
        dir: Option<PathBuf>,
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Comma separated JLPT levels, e.g. N5,N4
    #[arg(long, value_delimiter = ',')]
    levels: Vec<JlptLevel>,
    /// Output file, `-` for stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Drop repeated (expression, level) records, keeping the first
    #[arg(long)]
    dedupe: bool,
    /// Write single-line JSON
    #[arg(long)]
    compact: bool,
}

impl CommonArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if self.compact {
            config.output.pretty = false;
        }
    }

    fn levels(&self) -> Option<&[JlptLevel]> {
        (!self.levels.is_empty()).then_some(self.levels.as_slice())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(cli.log_format);

    let mut config = profile::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Scrape {
            seeds,
            api_url,
            delay_ms,
            timeout_secs,
            common,
        } => {
            common.apply(&mut config);
            if let Some(api_url) = api_url {
                config.lookup.api_url = api_url;
            }
            if let Some(delay_ms) = delay_ms {
                config.lookup.delay_ms = delay_ms;
            }
            if let Some(timeout_secs) = timeout_secs {
                config.lookup.timeout_seconds = timeout_secs;
            }

            let seeds_path = seeds.or_else(|| config.seeds_path.clone());
            let groups = profile::load_seeds(seeds_path.as_deref(), common.levels())?;

            commands::handle_scrape(&config, &groups, common.dedupe).await?;
        }
        Command::ImportCsv { dir, common } => {
            common.apply(&mut config);

            let dir = dir
                .or_else(|| config.csv_dir.clone())
                .context("No CSV directory: pass --dir or set CSV_DIR")?;
            let levels = common.levels().unwrap_or(&JlptLevel::ALL);

            commands::handle_import_csv(&dir, levels, &config.output, common.dedupe)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so `--output -` keeps stdout clean
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
