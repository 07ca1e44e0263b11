//! Plain-text rendering of a comparison report.

use std::io::{self, Write};

use capmap_core::presentation::{
    format_usd_trillions, CompanyTableRow, CountryTableRow, HeaderMetrics, StateSummary,
};
use capmap_core::{ComparisonReport, ValuationStatus};

pub fn render_report(out: &mut impl Write, report: &ComparisonReport) -> io::Result<()> {
    render_header(out, &report.header)?;
    writeln!(out)?;
    render_company_table(out, &report.companies)?;
    writeln!(out)?;
    render_country_table(out, &report.countries)?;
    writeln!(out)?;
    render_summary(out, &report.summary)
}

fn render_header(out: &mut impl Write, header: &HeaderMetrics) -> io::Result<()> {
    writeln!(out, "Big Tech vs World GDP")?;
    writeln!(
        out,
        "Market cap total: {} | Companies: {} / {} countries | Base year: {}",
        header.total_market_cap_display,
        header.company_count,
        header.country_count,
        header.base_year
    )
}

fn render_company_table(out: &mut impl Write, rows: &[CompanyTableRow]) -> io::Result<()> {
    writeln!(out, "Market cap by company")?;
    writeln!(out, "{:<20} {:>10}", "Company", "Market cap")?;
    for row in rows {
        let note = match row.status {
            ValuationStatus::Available => "",
            ValuationStatus::Unavailable => "  (unavailable)",
        };
        writeln!(out, "{:<20} {:>10}{}", row.company, row.market_cap, note)?;
    }
    Ok(())
}

fn render_country_table(out: &mut impl Write, rows: &[CountryTableRow]) -> io::Result<()> {
    writeln!(out, "Full comparison")?;
    writeln!(
        out,
        "{:<16} {:>9} {:>9} {:>18}  {}",
        "Country", "GDP", "Big Tech", "Difference", "Result"
    )?;
    for row in rows {
        writeln!(
            out,
            "{:<16} {:>9} {:>9} {:>18}  {}",
            row.country,
            format_usd_trillions(row.gdp_trillions, 2),
            format_usd_trillions(row.big_tech_trillions, 2),
            row.difference,
            row.result
        )?;
    }
    Ok(())
}

fn render_summary(out: &mut impl Write, summary: &StateSummary) -> io::Result<()> {
    writeln!(
        out,
        "Companies > GDP: {}/{} (+{})",
        summary.valuation_exceeds_gdp, summary.total, summary.valuation_exceeds_gdp
    )?;
    writeln!(
        out,
        "GDP > Companies: {}/{}",
        summary.gdp_exceeds_valuation, summary.total
    )
}
