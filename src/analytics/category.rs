use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::data::model::Company;

// ---------------------------------------------------------------------------
// CategoryTotals – insertion-ordered category → hires map
// ---------------------------------------------------------------------------

/// Total tentative hires per category, in first-occurrence order.
/// Labels are compared exactly: `"IT"`, `"it"` and `"IT "` are three buckets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `hires` to `category`, creating the bucket on first sight.
    pub fn add(&mut self, category: &str, hires: u64) {
        match self.index.get(category) {
            Some(&i) => self.entries[i].1 += hires,
            None => {
                self.index.insert(category.to_string(), self.entries.len());
                self.entries.push((category.to_string(), hires));
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<u64> {
        self.index.get(category).map(|&i| self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(c, n)| (c.as_str(), *n))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over every category.
    pub fn grand_total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Sum each company's tentative hires into its category bucket.
pub fn aggregate_by_category(companies: &[Company]) -> CategoryTotals {
    let mut totals = CategoryTotals::new();
    for company in companies {
        totals.add(&company.organisation.category, company.total_hires());
    }
    log::debug!("{} categories from {} companies", totals.len(), companies.len());
    totals
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::analytics::testing::{arb_companies, company};

    #[test]
    fn sums_offers_within_a_category() {
        let companies = vec![
            company("A", "IT", &["Tech"], &[10]),
            company("B", "IT", &["Tech"], &[5]),
        ];
        let totals = aggregate_by_category(&companies);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get("IT"), Some(15));
    }

    #[test]
    fn sums_every_offer_of_a_company() {
        let companies = vec![company("A", "Core", &[], &[2, 3, 0, 7])];
        assert_eq!(aggregate_by_category(&companies).get("Core"), Some(12));
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let companies = vec![
            company("A", "Finance", &[], &[1]),
            company("B", "IT", &[], &[2]),
            company("C", "Finance", &[], &[3]),
            company("D", "Core", &[], &[0]),
        ];
        let totals = aggregate_by_category(&companies);
        let entries: Vec<(&str, u64)> = totals.iter().collect();
        assert_eq!(entries, [("Finance", 4), ("IT", 2), ("Core", 0)]);
    }

    #[test]
    fn labels_are_not_normalized() {
        let companies = vec![
            company("A", "IT", &[], &[1]),
            company("B", "it", &[], &[2]),
            company("C", "IT ", &[], &[4]),
        ];
        let totals = aggregate_by_category(&companies);
        assert_eq!(totals.len(), 3);
        assert_eq!(totals.get("IT"), Some(1));
        assert_eq!(totals.get("it"), Some(2));
        assert_eq!(totals.get("IT "), Some(4));
        assert_eq!(totals.get("Core"), None);
    }

    #[test]
    fn empty_input_gives_empty_mapping() {
        let totals = aggregate_by_category(&[]);
        assert!(totals.is_empty());
        assert_eq!(totals.grand_total(), 0);
    }

    #[test]
    fn serializes_as_map_in_first_occurrence_order() {
        let companies = vec![
            company("A", "Finance", &[], &[1]),
            company("B", "Core", &[], &[2]),
            company("C", "Analytics", &[], &[3]),
        ];
        let json = serde_json::to_string(&aggregate_by_category(&companies)).unwrap();
        assert_eq!(json, r#"{"Finance":1,"Core":2,"Analytics":3}"#);
    }

    proptest! {
        #[test]
        fn total_hires_are_conserved(companies in arb_companies()) {
            let totals = aggregate_by_category(&companies);
            let expected: u64 = companies.iter().map(Company::total_hires).sum();
            prop_assert_eq!(totals.grand_total(), expected);
        }

        #[test]
        fn one_bucket_per_distinct_label(companies in arb_companies()) {
            let totals = aggregate_by_category(&companies);
            let labels: Vec<&str> = totals.iter().map(|(c, _)| c).collect();
            let dataset = crate::data::model::Dataset::new(companies.clone());
            prop_assert_eq!(labels, dataset.categories());
        }
    }
}
