use std::path::PathBuf;

use capmap_core::companies::{parse_selection, Company, CATALOG};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "capmap")]
#[command(about = "Compare Big Tech market capitalization with the GDP of 50 economies")]
pub struct Cli {
    /// Companies to compare, by name or ticker (default: all five)
    #[arg(value_name = "COMPANY", conflicts_with = "none")]
    pub companies: Vec<String>,

    /// Run with an empty selection
    #[arg(long)]
    pub none: bool,

    /// Print the full report as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Write the choropleth layer as JSON to this path (overrides CM_MAP_OUT)
    #[arg(long, value_name = "PATH")]
    pub map_out: Option<PathBuf>,

    /// HTTP timeout in milliseconds (overrides CM_REQUEST_TIMEOUT_MS)
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// List the selectable companies and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    /// Resolve the requested companies; no arguments means the whole catalog.
    pub fn selection(&self) -> capmap_core::Result<Vec<Company>> {
        if self.none {
            return Ok(Vec::new());
        }
        if self.companies.is_empty() {
            return Ok(CATALOG.to_vec());
        }
        parse_selection(&self.companies)
    }
}
