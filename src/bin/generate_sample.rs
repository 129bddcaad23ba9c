use anyhow::{Context, Result};
use cdc_insights::data::model::{Company, JobOffer, Organisation, Program, SalaryBreakup};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Fixed seed so repeated runs write the same dataset.
const SEED: u64 = 42;

const CATEGORIES: &[&str] = &["IT", "Core", "Finance", "Consulting", "Analytics"];
const SECTORS: &[&str] = &[
    "Software", "Finance", "Energy", "Manufacturing", "Healthcare", "Consulting", "E-commerce",
];
const DESIGNATIONS: &[&str] = &["Software Engineer", "Analyst", "Graduate Engineer Trainee", "Data Scientist", "Associate"];
const LOCATIONS: &[&str] = &["Bengaluru", "Pune", "Hyderabad", "Mumbai", "Gurugram", "Remote"];

fn pick(rng: &mut StdRng, items: &[&str]) -> String {
    items.choose(rng).copied().unwrap_or_default().to_string()
}

/// Base CTC (in lakhs) per programme before the per-company multiplier.
fn base_ctc(program: Program) -> f64 {
    match program {
        Program::Btech => 12.0,
        Program::Mtech => 15.0,
        Program::Msc => 9.0,
        Program::Phd => 20.0,
        Program::Mba => 18.0,
    }
}

fn salary(rng: &mut StdRng, program: Program, multiplier: f64) -> SalaryBreakup {
    let ctc = (base_ctc(program) * multiplier * 100_000.0).round();
    let gross = (ctc * 0.85).round();
    let variable = (ctc * 0.1 * rng.random::<f64>()).round();
    let base = gross - variable;
    SalaryBreakup {
        base,
        monthly_fixed: (base / 12.0).round(),
        variable,
        gross,
        cost_to_company: ctc,
    }
}

fn company(rng: &mut StdRng, idx: usize) -> Company {
    let name = format!("Company {:03}", idx + 1);
    let slug = name.to_lowercase().replace(' ', "-");

    let n_sectors = rng.random_range(1..=3);
    let sectors: Vec<String> = SECTORS
        .choose_multiple(rng, n_sectors)
        .map(|s| s.to_string())
        .collect();

    let job_offers = (0..rng.random_range(1..=3))
        .map(|_| JobOffer {
            designation: pick(rng, DESIGNATIONS),
            hire_count: rng.random_range(0..=25),
            joining_date: format!("2025-{:02}-01", rng.random_range(6..=8)),
            location: pick(rng, LOCATIONS),
            description: "Campus hire".to_string(),
        })
        .collect();

    let multiplier = 0.5 + 2.5 * rng.random::<f64>();
    let mut company = Company {
        organisation: Organisation {
            name,
            sectors,
            category: pick(rng, CATEGORIES),
            website: format!("https://{slug}.example.com"),
            postal_address: None,
        },
        job_offers,
        ..Default::default()
    };

    for program in Program::ALL {
        // Roughly 60% of companies recruit from each programme; a few list it at zero.
        let roll = rng.random::<f64>();
        let breakup = if roll < 0.05 {
            Some(SalaryBreakup::default())
        } else if roll < 0.6 {
            Some(salary(rng, program, multiplier))
        } else {
            None
        };
        company.program_salaries.set(program, breakup);
    }
    company
}

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let count = std::env::args()
        .nth(1)
        .map(|s| s.parse::<usize>())
        .transpose()
        .context("company count must be a positive integer")?
        .unwrap_or(60);

    let companies: Vec<Company> = (0..count).map(|i| company(&mut rng, i)).collect();

    let output_path = "cdc.json";
    let file = std::fs::File::create(output_path).context("creating output file")?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), &companies)
        .context("writing dataset")?;

    println!("Wrote {} companies to {output_path}", companies.len());
    Ok(())
}
