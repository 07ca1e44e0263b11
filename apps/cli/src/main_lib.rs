use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use capmap_core::presentation::MapLayer;
use capmap_core::{ReportService, ValuationService};
use capmap_market_data::{YahooConfig, YahooProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

/// Install the global subscriber. Logs go to stderr; stdout is for output.
pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Wire the Yahoo provider into the valuation and report services.
pub fn build_report_service(config: &Config) -> anyhow::Result<ReportService> {
    let provider = YahooProvider::with_config(YahooConfig {
        timeout: config.request_timeout,
        user_agent: config.user_agent.clone(),
    })?;
    let valuation_service = Arc::new(ValuationService::new(Arc::new(provider)));
    Ok(ReportService::new(valuation_service))
}

/// Write the choropleth layer as pretty JSON, creating parent directories.
pub fn write_map_layer(path: &Path, layer: &MapLayer) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(layer)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
