use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Program – the academic track used to key salary data
// ---------------------------------------------------------------------------

/// Academic programme offered a salary breakdown by a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Program {
    #[serde(rename = "btech")]
    Btech,
    #[serde(rename = "mtech")]
    Mtech,
    #[serde(rename = "msc")]
    Msc,
    #[serde(rename = "PhD")]
    Phd,
    #[serde(rename = "MBA")]
    Mba,
}

impl Program {
    pub const ALL: [Program; 5] = [
        Program::Btech,
        Program::Mtech,
        Program::Msc,
        Program::Phd,
        Program::Mba,
    ];

    /// The key used for this programme in the dataset file.
    pub fn key(self) -> &'static str {
        match self {
            Program::Btech => "btech",
            Program::Mtech => "mtech",
            Program::Msc => "msc",
            Program::Phd => "PhD",
            Program::Mba => "MBA",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Program::Btech => "BTech",
            Program::Mtech => "MTech",
            Program::Msc => "MSc",
            Program::Phd => "PhD",
            Program::Mba => "MBA",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown program '{0}' (expected one of btech, mtech, msc, PhD, MBA)")]
pub struct UnknownProgram(pub String);

impl FromStr for Program {
    type Err = UnknownProgram;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Program::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownProgram(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Salary data
// ---------------------------------------------------------------------------

/// Compensation figures for one programme at one company.
/// Fields missing from the source default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryBreakup {
    #[serde(rename = "Base")]
    pub base: f64,
    #[serde(rename = "MonthlyFixedSalary")]
    pub monthly_fixed: f64,
    #[serde(rename = "Variables")]
    pub variable: f64,
    #[serde(rename = "GrossSalary")]
    pub gross: f64,
    #[serde(rename = "CostToCompany")]
    pub cost_to_company: f64,
}

impl SalaryBreakup {
    /// Named view over the numeric fields, used by validation.
    pub fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("Base", self.base),
            ("MonthlyFixedSalary", self.monthly_fixed),
            ("Variables", self.variable),
            ("GrossSalary", self.gross),
            ("CostToCompany", self.cost_to_company),
        ]
    }
}

/// Per-programme salary breakdowns. `None` means the programme was not
/// offered, which is distinct from an all-zero breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramSalaries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub btech: Option<SalaryBreakup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtech: Option<SalaryBreakup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msc: Option<SalaryBreakup>,
    #[serde(rename = "PhD", skip_serializing_if = "Option::is_none")]
    pub phd: Option<SalaryBreakup>,
    #[serde(rename = "MBA", skip_serializing_if = "Option::is_none")]
    pub mba: Option<SalaryBreakup>,
}

impl ProgramSalaries {
    pub fn get(&self, program: Program) -> Option<&SalaryBreakup> {
        match program {
            Program::Btech => self.btech.as_ref(),
            Program::Mtech => self.mtech.as_ref(),
            Program::Msc => self.msc.as_ref(),
            Program::Phd => self.phd.as_ref(),
            Program::Mba => self.mba.as_ref(),
        }
    }

    pub fn set(&mut self, program: Program, breakup: Option<SalaryBreakup>) {
        let slot = match program {
            Program::Btech => &mut self.btech,
            Program::Mtech => &mut self.mtech,
            Program::Msc => &mut self.msc,
            Program::Phd => &mut self.phd,
            Program::Mba => &mut self.mba,
        };
        *slot = breakup;
    }

    /// Programmes that have a breakdown, in [`Program::ALL`] order.
    pub fn offered(&self) -> impl Iterator<Item = (Program, &SalaryBreakup)> + '_ {
        Program::ALL
            .into_iter()
            .filter_map(move |p| self.get(p).map(|s| (p, s)))
    }
}

// ---------------------------------------------------------------------------
// Company – one entry of the dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organisation {
    #[serde(rename = "Name")]
    pub name: String,
    /// Sector labels; a company may belong to several.
    #[serde(rename = "Sector", default)]
    pub sectors: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub website: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobOffer {
    #[serde(rename = "Designation", default)]
    pub designation: String,
    #[serde(rename = "tentative_no_of_hires", default)]
    pub hire_count: u32,
    #[serde(rename = "TentativeJoiningDate", default)]
    pub joining_date: String,
    #[serde(rename = "TentativeJobLocation", default)]
    pub location: String,
    #[serde(rename = "JobDescription", default)]
    pub description: String,
}

/// A single recruiting organisation with its offers and salary data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(rename = "Organisation")]
    pub organisation: Organisation,
    #[serde(rename = "JobOffer", default)]
    pub job_offers: Vec<JobOffer>,
    #[serde(rename = "ProgramWiseSalaryBreakup", default)]
    pub program_salaries: ProgramSalaries,
}

impl Company {
    /// Sum of tentative hires over all of this company's offers.
    pub fn total_hires(&self) -> u64 {
        self.job_offers.iter().map(|o| u64::from(o.hire_count)).sum()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded snapshot
// ---------------------------------------------------------------------------

/// The loaded dataset. Treated as read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub companies: Vec<Company>,
}

impl Dataset {
    pub fn new(companies: Vec<Company>) -> Self {
        Self { companies }
    }

    /// Number of companies.
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Distinct sector labels in first-occurrence order.
    pub fn sectors(&self) -> Vec<&str> {
        first_occurrence(
            self.companies
                .iter()
                .flat_map(|c| c.organisation.sectors.iter().map(String::as_str)),
        )
    }

    /// Distinct category labels in first-occurrence order.
    pub fn categories(&self) -> Vec<&str> {
        first_occurrence(self.companies.iter().map(|c| c.organisation.category.as_str()))
    }
}

fn first_occurrence<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    labels.filter(|l| seen.insert(*l)).collect()
}
