use serde::Serialize;

use crate::data::model::{Company, Program};

// ---------------------------------------------------------------------------
// Ranked rows
// ---------------------------------------------------------------------------

/// One company in the highest-package ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCompany {
    pub name: String,
    /// Cost to company for the ranked programme.
    pub amount: f64,
    pub website: String,
}

/// A ranking row for the salary table: the ranked amount plus base and gross.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryRow {
    pub name: String,
    pub amount: f64,
    pub base: f64,
    pub gross: f64,
    pub website: String,
}

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

/// Companies paying a positive cost to company for `program`, highest first.
///
/// A programme the company does not offer counts as zero, so "not offered"
/// and "offered at zero" are both left out. Ties keep dataset order.
pub fn rank(program: Program, companies: &[Company]) -> Vec<RankedCompany> {
    ranked_by_ctc(program, companies, |company, amount, _| RankedCompany {
        name: company.organisation.name.clone(),
        amount,
        website: company.organisation.website.clone(),
    })
}

/// Same filter and ordering as [`rank`], also carrying base and gross salary.
pub fn rank_table(program: Program, companies: &[Company]) -> Vec<SalaryRow> {
    ranked_by_ctc(program, companies, |company, amount, (base, gross)| SalaryRow {
        name: company.organisation.name.clone(),
        amount,
        base,
        gross,
        website: company.organisation.website.clone(),
    })
}

/// The first `n` entries of [`rank`].
pub fn top(program: Program, companies: &[Company], n: usize) -> Vec<RankedCompany> {
    let mut ranked = rank(program, companies);
    ranked.truncate(n);
    ranked
}

fn ranked_by_ctc<T>(
    program: Program,
    companies: &[Company],
    project: impl Fn(&Company, f64, (f64, f64)) -> T,
) -> Vec<T> {
    let mut keyed: Vec<(f64, T)> = companies
        .iter()
        .filter_map(|company| {
            let salary = company.program_salaries.get(program).copied().unwrap_or_default();
            let amount = salary.cost_to_company;
            (amount > 0.0).then(|| (amount, project(company, amount, (salary.base, salary.gross))))
        })
        .collect();

    // sort_by is stable; total_cmp keeps NaN from panicking the comparator.
    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));

    log::debug!("ranked {} of {} companies for {program}", keyed.len(), companies.len());
    keyed.into_iter().map(|(_, row)| row).collect()
}
