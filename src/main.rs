// Command line front end: run a crawl, or show the tail of the latest run log.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use district_scrape::config::CrawlConfig;
use district_scrape::utils::{
    DEFAULT_FILE_PREFIX, DEFAULT_LOG_TAIL_LINES, DEFAULT_PAGE_DELAY_MS, DEFAULT_PAGE_SIZE,
    DEFAULT_STATES_URL,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "district-scrape")]
#[command(about = "Crawl the state/district directory into subdistrict and block tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl every state not yet checkpointed
    Run(RunArgs),

    /// Print the tail of the most recent run log
    Status {
        /// Directory holding the run files
        #[arg(long, env = "DISTRICT_SCRAPE_OUTPUT_DIR", default_value = ".")]
        output_dir: PathBuf,
        /// Prefix of the run files
        #[arg(long, default_value = DEFAULT_FILE_PREFIX)]
        prefix: String,
        /// Number of lines to show
        #[arg(long, default_value_t = DEFAULT_LOG_TAIL_LINES)]
        lines: usize,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Directory receiving tables, checkpoints and the run log
    #[arg(long, env = "DISTRICT_SCRAPE_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,
    /// Index page listing every state
    #[arg(long, env = "DISTRICT_SCRAPE_STATES_URL", default_value = DEFAULT_STATES_URL)]
    states_url: String,
    /// Prefix of the run files
    #[arg(long, default_value = DEFAULT_FILE_PREFIX)]
    prefix: String,
    /// Date stamp of the run files (defaults to today, YYYYMMDD)
    #[arg(long)]
    stamp: Option<String>,
    /// Rows per district listing page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,
    /// Pause between district listing pages, in milliseconds
    #[arg(long, default_value_t = DEFAULT_PAGE_DELAY_MS)]
    page_delay_ms: u64,
    /// Show the browser window
    #[arg(long)]
    headful: bool,
    /// Browser profile directory to reuse (kept after the run)
    #[arg(long, env = "DISTRICT_SCRAPE_CHROME_DATA_DIR")]
    chrome_data_dir: Option<PathBuf>,
    /// Treat count mismatches and render timeouts as fatal
    #[arg(long)]
    strict: bool,
    /// Keep going when a state fails; it is retried by the next run
    #[arg(long)]
    isolate_state_failures: bool,
}

impl RunArgs {
    fn into_config(self) -> Result<CrawlConfig> {
        let mut builder = CrawlConfig::builder()
            .output_dir(self.output_dir)
            .states_url(self.states_url)
            .file_prefix(self.prefix)
            .page_size(self.page_size)
            .page_delay_ms(self.page_delay_ms)
            .headless(!self.headful)
            .strict(self.strict)
            .isolate_state_failures(self.isolate_state_failures);
        if let Some(stamp) = self.stamp {
            builder = builder.run_stamp(stamp);
        }
        if let Some(dir) = self.chrome_data_dir {
            builder = builder.chrome_data_dir(dir);
        }
        builder.build()
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    match execute(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Run(args) => {
            let config = args.into_config()?;
            let summary = district_scrape::crawl(config).await?;
            println!(
                "states: {} seen, {} completed, {} skipped, {} failed",
                summary.states_seen,
                summary.states_completed,
                summary.states_skipped,
                summary.states_failed
            );
            println!(
                "rows: {} subdistrict, {} block; warnings: {}",
                summary.subdistrict_rows, summary.block_rows, summary.warnings
            );
            if summary.states_failed > 0 {
                anyhow::bail!("{} state(s) failed", summary.states_failed);
            }
            Ok(())
        }
        Commands::Status {
            output_dir,
            prefix,
            lines,
        } => {
            let tail = district_scrape::latest_log_tail(&output_dir, &prefix, lines)?;
            if tail.is_empty() {
                println!("No run log found in {}", output_dir.display());
            } else {
                print!("{tail}");
            }
            Ok(())
        }
    }
}
