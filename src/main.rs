//! Local invoker (CLI binary).
//!
//! Stands in for the serverless platform: builds the invocation event from
//! `--shid`, an event file, or stdin, runs one invocation, and prints the
//! result envelope as JSON on stdout. A failed invocation exits with status 1.

use std::io::Read;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{json, Value};

use jobserve_scraper::config::Opt;
use jobserve_scraper::initialization::init_logger_with;
use jobserve_scraper::{handle_event, init_context, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables (RUST_LOG etc.) from .env if present
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();
    let config = Config::from(&opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let ctx = init_context(&config).context("Failed to initialize scraper")?;
    let event = build_event(&opt)?;

    match handle_event(&ctx, event).await {
        Ok(envelope) => {
            let output =
                serde_json::to_string(&envelope).context("Failed to serialize result envelope")?;
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("jobserve_scraper error: {:#}", anyhow::Error::from(e));
            process::exit(1);
        }
    }
}

fn build_event(opt: &Opt) -> Result<Value> {
    if let Some(shid) = &opt.shid {
        return Ok(json!({ "shid": shid }));
    }
    match &opt.event {
        None => Ok(json!({})),
        Some(path) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read event from stdin")?;
            serde_json::from_str(&buf).context("Event on stdin is not valid JSON")
        }
        Some(path) => read_event_file(path),
    }
}

fn read_event_file(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Event file {} is not valid JSON", path.display()))
}
