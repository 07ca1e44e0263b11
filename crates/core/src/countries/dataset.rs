//! The embedded fifty-economy GDP table.

use lazy_static::lazy_static;
use rust_decimal::Decimal;

use super::countries_model::CountryRecord;

/// (ISO-3 code, display name, GDP in millions of USD) for the base year.
const GDP_TABLE: [(&str, &str, i64); 50] = [
    ("USA", "United States", 28_840_000),
    ("CHN", "China", 18_940_000),
    ("JPN", "Japan", 4_090_000),
    ("DEU", "Germany", 4_560_000),
    ("IND", "India", 3_920_000),
    ("GBR", "United Kingdom", 3_390_000),
    ("FRA", "France", 3_050_000),
    ("ITA", "Italy", 2_270_000),
    ("CAN", "Canada", 2_220_000),
    ("KOR", "South Korea", 1_760_000),
    ("AUS", "Australia", 1_790_000),
    ("BRA", "Brazil", 2_270_000),
    ("MEX", "Mexico", 2_000_000),
    ("ESP", "Spain", 1_600_000),
    ("RUS", "Russia", 2_030_000),
    ("NLD", "Netherlands", 1_110_000),
    ("TUR", "Turkey", 1_180_000),
    ("SAU", "Saudi Arabia", 1_100_000),
    ("IDN", "Indonesia", 1_420_000),
    ("ZAF", "South Africa", 420_000),
    ("ARG", "Argentina", 650_000),
    ("THA", "Thailand", 520_000),
    ("POL", "Poland", 840_000),
    ("BEL", "Belgium", 630_000),
    ("SWE", "Sweden", 620_000),
    ("AUT", "Austria", 540_000),
    ("NOR", "Norway", 590_000),
    ("DNK", "Denmark", 410_000),
    ("FIN", "Finland", 300_000),
    ("IRL", "Ireland", 560_000),
    ("SGP", "Singapore", 520_000),
    ("CHE", "Switzerland", 938_000),
    ("ARE", "UAE", 510_000),
    ("PHL", "Philippines", 450_000),
    ("COL", "Colombia", 360_000),
    ("MYS", "Malaysia", 430_000),
    ("ROU", "Romania", 350_000),
    ("CHL", "Chile", 344_000),
    ("VNM", "Vietnam", 450_000),
    ("PER", "Peru", 260_000),
    ("CZE", "Czechia", 330_000),
    ("GRC", "Greece", 240_000),
    ("HUN", "Hungary", 210_000),
    ("BGD", "Bangladesh", 460_000),
    ("KAZ", "Kazakhstan", 290_000),
    ("UKR", "Ukraine", 240_000),
    ("QAT", "Qatar", 200_000),
    ("NGA", "Nigeria", 347_000),
    ("IRN", "Iran", 398_000),
    ("MAR", "Morocco", 347_000),
];

lazy_static! {
    static ref REFERENCE_DATASET: Vec<CountryRecord> = GDP_TABLE
        .iter()
        .map(|(code, name, gdp)| CountryRecord::new(*code, *name, Decimal::from(*gdp)))
        .collect();
}

/// The fifty reference economies, in table order.
pub fn reference_dataset() -> &'static [CountryRecord] {
    REFERENCE_DATASET.as_slice()
}

/// Look up an economy by ISO-3 code, ignoring case.
pub fn find_country(code: &str) -> Option<&'static CountryRecord> {
    reference_dataset()
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COUNTRY_COUNT;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    #[test]
    fn test_dataset_has_fifty_unique_codes() {
        let dataset = reference_dataset();
        assert_eq!(dataset.len(), COUNTRY_COUNT);

        let codes: HashSet<&str> = dataset.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes.len(), COUNTRY_COUNT);
        assert!(dataset.iter().all(|c| c.code.len() == 3));
    }

    #[test]
    fn test_dataset_gdp_strictly_positive() {
        assert!(reference_dataset().iter().all(|c| c.gdp > Decimal::ZERO));
    }

    #[test]
    fn test_dataset_is_shared() {
        let a = reference_dataset();
        let b = reference_dataset();
        assert!(std::ptr::eq(a.as_ptr(), b.as_ptr()));
    }

    #[test]
    fn test_dataset_order_and_values() {
        let dataset = reference_dataset();
        assert_eq!(dataset[0].code, "USA");
        assert_eq!(dataset[0].gdp, dec!(28840000));
        assert_eq!(dataset[49].code, "MAR");
    }

    #[test]
    fn test_find_country() {
        let zaf = find_country("zaf").unwrap();
        assert_eq!(zaf.name, "South Africa");
        assert_eq!(zaf.gdp, dec!(420000));

        assert_eq!(find_country("ARE").unwrap().gdp, dec!(510000));
        assert!(find_country("XXX").is_none());
    }
}
