mod cli;
mod config;
mod main_lib;
mod render;

use std::io::Write;
use std::time::Duration;

use capmap_core::companies::catalog_listing;
use capmap_core::{Error, ReportServiceTrait};
use clap::Parser;

use cli::Cli;
use config::Config;
use main_lib::{build_report_service, init_tracing, write_map_layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = Config::from_env();
    init_tracing(&config.log_format);
    let cli = Cli::parse();

    if cli.list {
        println!("{}", catalog_listing());
        return Ok(());
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.request_timeout = Duration::from_millis(timeout_ms);
    }
    if let Some(map_out) = cli.map_out.clone() {
        config.map_out = Some(map_out);
    }

    let selection = cli.selection()?;
    let service = build_report_service(&config)?;

    let report = match service.compare(&selection).await {
        Ok(report) => report,
        Err(Error::EmptySelection) => {
            tracing::warn!("Empty selection, nothing to compare");
            eprintln!("Select at least one company ({})", catalog_listing());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        writeln!(out, "{}", report.to_json()?)?;
    } else {
        render::render_report(&mut out, &report)?;
    }

    if let Some(path) = &config.map_out {
        write_map_layer(path, &report.map)?;
        tracing::info!("Map layer written to {}", path.display());
    }
    Ok(())
}
