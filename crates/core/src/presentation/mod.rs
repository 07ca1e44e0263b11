//! Presentation adapter.
//!
//! Turns comparison rows and valuations into display-ready tables, a
//! choropleth layer and summary counts. Inputs are only read; sorting
//! happens on copies.

mod format;
mod map_layer;
mod summary;
mod tables;

pub use format::{format_signed_millions, format_usd_trillions, millions_to_trillions};
pub use map_layer::{map_layer, map_title, MapFeature, MapLayer, MapTooltip};
pub use summary::{header_metrics, summarize, HeaderMetrics, StateSummary};
pub use tables::{company_table, country_table, CompanyTableRow, CountryTableRow};
