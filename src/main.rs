//! `license-matchr` — classify license texts, names, URLs and record batches.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and install logging.
//! 2. Load config ([`config::load_config`]) and apply CLI overrides.
//! 3. Build the shared [`LicenseMatcher`] from the corpus and registry.
//! 4. Run the subcommand through the matcher or the [`Pipeline`].
//! 5. Render the requested report.
//! 6. Exit `1` when a single lookup found no license.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use license_matchr::cli::{Cli, Command, ReportFormat};
use license_matchr::config::{self, load_config};
use license_matchr::license::preprocess::decode_text;
use license_matchr::license::similarity::ScoredDocument;
use license_matchr::license::LicenseMatcher;
use license_matchr::logging::init_tracing;
use license_matchr::models::Detection;
use license_matchr::pipeline::cache::DetectionCache;
use license_matchr::pipeline::fetch::HttpFetcher;
use license_matchr::pipeline::store::{load_records, JsonFileStore};
use license_matchr::pipeline::Pipeline;
use license_matchr::report;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let mut config = load_config(&cwd, cli.config.as_deref())?;
    cli.overrides.apply(&mut config);

    let matcher = Arc::new(
        LicenseMatcher::load(
            &config.corpus.spdx_dir,
            &config.corpus.custom_dir,
            &config.corpus.registry,
        )
        .context("failed to initialize the license matcher")?,
    );

    let pipeline = build_pipeline(Arc::clone(&matcher), &config)?;

    match cli.command {
        Command::Text { ref file } => {
            let text = read_input(file)?;
            let scores = matcher.match_text(&text, config.detection.top_n);
            print_scores(&cli.report, file, &scores, config.detection.min_confidence)?;
        }
        Command::Html { ref file } => {
            let html = read_input(file)?;
            let scores = matcher.match_html(&html, config.detection.top_n);
            print_scores(&cli.report, file, &scores, config.detection.min_confidence)?;
        }
        Command::Name { ref name } => {
            let detection = pipeline.detect_name(name);
            print_detection(&cli.report, name, &detection)?;
            exit_if_unknown(&detection);
        }
        Command::Url { ref url } => {
            let detection = pipeline.detect_url(url).await;
            print_detection(&cli.report, url, &detection)?;
            exit_if_unknown(&detection);
        }
        Command::Batch { ref file, update } => {
            let records = load_records(file)
                .await
                .with_context(|| format!("failed to read records from {}", file.display()))?;

            let pipeline = if update {
                let store = JsonFileStore::open(file.clone()).await?;
                pipeline.with_store(Arc::new(store))
            } else {
                pipeline
            };

            let show_progress = !cli.quiet && matches!(cli.report, ReportFormat::Terminal);
            let (reports, summary) = pipeline
                .run_batch(records, config.fetch.concurrency, show_progress)
                .await?;

            match cli.report {
                ReportFormat::Terminal => {
                    report::terminal::render_batch(&reports, &summary, file, cli.verbose, cli.quiet)?;
                }
                ReportFormat::Json => {
                    let out = serde_json::json!({ "summary": summary, "records": reports });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
            }
        }
    }

    Ok(())
}

fn build_pipeline(matcher: Arc<LicenseMatcher>, config: &config::Config) -> Result<Pipeline> {
    let fetcher = HttpFetcher::new(config.fetch.timeout()).context("failed to build http client")?;
    let cache = DetectionCache::new(config.cache.ttl());
    Ok(Pipeline::new(
        matcher,
        Arc::new(fetcher),
        Arc::new(cache),
        config.detection.clone(),
    ))
}

/// Read a file, or stdin for `-`, tolerating invalid UTF-8.
fn read_input(path: &Path) -> Result<String> {
    let bytes = if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    Ok(decode_text(&bytes))
}

fn print_scores(
    format: &ReportFormat,
    file: &Path,
    scores: &[ScoredDocument],
    min_confidence: f64,
) -> Result<()> {
    match format {
        ReportFormat::Terminal => {
            report::terminal::render_scores(&file.display().to_string(), scores, min_confidence)
        }
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(scores)?),
    }
    Ok(())
}

fn print_detection(format: &ReportFormat, input: &str, detection: &Detection) -> Result<()> {
    match format {
        ReportFormat::Terminal => report::terminal::render_detection(input, detection),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(detection)?),
    }
    Ok(())
}

fn exit_if_unknown(detection: &Detection) {
    if detection.is_unknown() {
        std::process::exit(1);
    }
}
