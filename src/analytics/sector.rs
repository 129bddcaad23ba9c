use std::collections::HashMap;

use serde::Serialize;

use crate::data::model::Company;

/// Mean tentative hires of the companies declaring a sector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorAverage {
    pub sector: String,
    pub average_hires: f64,
}

#[derive(Default)]
struct Tally {
    total: u64,
    count: u32,
}

/// Average hires per sector, in first-occurrence order of sector labels.
///
/// Every sector a company declares receives that company's full hire count;
/// nothing is split between sectors. Companies without sectors contribute
/// nothing.
pub fn aggregate_by_sector(companies: &[Company]) -> Vec<SectorAverage> {
    let mut order: Vec<&str> = Vec::new();
    let mut tallies: HashMap<&str, Tally> = HashMap::new();

    for company in companies {
        let hires = company.total_hires();
        for sector in &company.organisation.sectors {
            let tally = tallies.entry(sector.as_str()).or_insert_with(|| {
                order.push(sector.as_str());
                Tally::default()
            });
            tally.total += hires;
            tally.count += 1;
        }
    }

    log::debug!("{} sectors from {} companies", order.len(), companies.len());

    order
        .into_iter()
        .map(|sector| {
            let tally = &tallies[sector];
            SectorAverage {
                sector: sector.to_string(),
                // count >= 1: a key only exists once some company declared it.
                average_hires: tally.total as f64 / f64::from(tally.count),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::analytics::testing::{arb_companies, company};

    fn averages(rows: &[SectorAverage]) -> Vec<(&str, f64)> {
        rows.iter().map(|r| (r.sector.as_str(), r.average_hires)).collect()
    }

    #[test]
    fn multi_sector_company_counts_fully_in_each() {
        let companies = vec![
            company("A", "IT", &["Finance", "Tech"], &[5, 3]),
            company("B", "IT", &["Tech"], &[4]),
        ];
        let rows = aggregate_by_sector(&companies);
        assert_eq!(averages(&rows), [("Finance", 8.0), ("Tech", 6.0)]);
    }

    #[test]
    fn averages_are_fractional() {
        let companies = vec![
            company("A", "IT", &["Tech"], &[1]),
            company("B", "IT", &["Tech"], &[2]),
        ];
        assert_eq!(averages(&aggregate_by_sector(&companies)), [("Tech", 1.5)]);
    }

    #[test]
    fn order_follows_first_declaration() {
        let companies = vec![
            company("A", "IT", &["Tech"], &[100]),
            company("B", "IT", &["Health", "Tech"], &[1]),
            company("C", "IT", &["Energy", "Health"], &[0]),
        ];
        let rows = aggregate_by_sector(&companies);
        let labels: Vec<&str> = rows.iter().map(|r| r.sector.as_str()).collect();
        assert_eq!(labels, ["Tech", "Health", "Energy"]);
    }

    #[test]
    fn company_without_sectors_is_skipped() {
        let companies = vec![
            company("A", "IT", &[], &[50]),
            company("B", "IT", &["Tech"], &[2]),
        ];
        assert_eq!(averages(&aggregate_by_sector(&companies)), [("Tech", 2.0)]);
    }

    #[test]
    fn company_without_offers_lowers_the_mean() {
        let companies = vec![
            company("A", "IT", &["Tech"], &[6]),
            company("B", "IT", &["Tech"], &[]),
        ];
        assert_eq!(averages(&aggregate_by_sector(&companies)), [("Tech", 3.0)]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(aggregate_by_sector(&[]).is_empty());
    }

    #[test]
    fn rows_serialize_with_field_names() {
        let rows = aggregate_by_sector(&[company("A", "IT", &["Tech"], &[3])]);
        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json, serde_json::json!([{ "sector": "Tech", "average_hires": 3.0 }]));
    }

    proptest! {
        #[test]
        fn every_declared_sector_appears_once(companies in arb_companies()) {
            let rows = aggregate_by_sector(&companies);
            let declared: HashSet<&str> = companies
                .iter()
                .flat_map(|c| c.organisation.sectors.iter().map(String::as_str))
                .collect();
            let reported: Vec<&str> = rows.iter().map(|r| r.sector.as_str()).collect();
            let unique: HashSet<&str> = reported.iter().copied().collect();
            prop_assert_eq!(reported.len(), unique.len());
            prop_assert_eq!(unique, declared);
        }

        #[test]
        fn average_is_bounded_by_member_hires(companies in arb_companies()) {
            for row in aggregate_by_sector(&companies) {
                let members: Vec<u64> = companies
                    .iter()
                    .filter(|c| c.organisation.sectors.contains(&row.sector))
                    .map(Company::total_hires)
                    .collect();
                let min = *members.iter().min().unwrap() as f64;
                let max = *members.iter().max().unwrap() as f64;
                prop_assert!(row.average_hires >= min && row.average_hires <= max);
            }
        }
    }
}
