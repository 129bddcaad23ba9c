//! Fixtures shared by the analytics tests.

use proptest::prelude::*;

use crate::data::model::{Company, JobOffer, Organisation, Program, SalaryBreakup};

const CATEGORIES: &[&str] = &["IT", "Core", "Finance", "it", "IT "];
const SECTORS: &[&str] = &["Tech", "Finance", "Energy", "Health", "Consulting"];

/// A company with one offer per entry of `hires` and no salary data.
pub(crate) fn company(name: &str, category: &str, sectors: &[&str], hires: &[u32]) -> Company {
    Company {
        organisation: Organisation {
            name: name.to_string(),
            sectors: sectors.iter().map(|s| s.to_string()).collect(),
            category: category.to_string(),
            website: format!("{name}.example"),
            postal_address: None,
        },
        job_offers: hires
            .iter()
            .map(|&hire_count| JobOffer {
                designation: "Engineer".to_string(),
                hire_count,
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

pub(crate) fn arb_company() -> impl Strategy<Value = Company> {
    (
        "[a-z]{1,8}",
        prop::sample::select(CATEGORIES.to_vec()),
        prop::sample::subsequence(SECTORS.to_vec(), 0..=SECTORS.len()).prop_shuffle(),
        prop::collection::vec(0u32..50, 0..4),
        prop::collection::vec(
            prop::option::of(prop_oneof![Just(0.0), 0.0f64..200.0]),
            Program::ALL.len(),
        ),
    )
        .prop_map(|(name, category, sectors, hires, ctcs)| {
            let mut c = company(&name, category, &sectors, &hires);
            for (program, ctc) in Program::ALL.into_iter().zip(ctcs) {
                c.program_salaries.set(
                    program,
                    ctc.map(|cost_to_company| SalaryBreakup {
                        base: cost_to_company * 0.6,
                        gross: cost_to_company * 0.9,
                        cost_to_company,
                        ..Default::default()
                    }),
                );
            }
            c
        })
}

pub(crate) fn arb_companies() -> impl Strategy<Value = Vec<Company>> {
    prop::collection::vec(arb_company(), 0..12)
}
