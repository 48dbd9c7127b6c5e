mod parser;
mod store;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use tracing::info;

const DEFAULT_INPUT: &str = "www.bnr.nl/podcasts.html";
const DEFAULT_OUTPUT: &str = "assets/podcasts.json";
const DEFAULT_BASE_URL: &str = "https://www.bnr.nl/";

#[derive(Parser)]
#[command(
    name = "bnr_podcasts",
    about = "Extract the BNR podcast catalog from a saved overview page into JSON"
)]
struct Cli {
    /// Saved podcast overview page
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Destination JSON file (parent directories are created)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Prefix joined with each relative href to form absolute_url
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Print the JSON document instead of writing the output file
    #[arg(long)]
    stdout: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let html = store::load_html(&cli.input)?;
    let extraction = parser::process_page(&html, &cli.base_url);
    let written = extraction.records.len();
    let json = store::render(extraction.records)?;

    if cli.stdout {
        println!("{}", json);
    } else {
        store::write_catalog(&cli.output, &json)?;
    }

    info!(
        "{} anchors, {} podcasts written ({} duplicates, {} untitled skipped) in {}",
        extraction.anchors,
        written,
        extraction.stats.duplicates,
        extraction.stats.untitled,
        format_duration(t0.elapsed()),
    );
    Ok(())
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 1 {
        format!("{}ms", d.as_millis())
    } else if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

// ── Tests ──
