use crate::analytics::{
    aggregate_by_category, aggregate_by_sector, rank, rank_table, top, CategoryTotals,
    RankedCompany, SalaryRow, SectorAverage,
};
use crate::data::model::{Dataset, Program};

// ---------------------------------------------------------------------------
// Dashboard state
// ---------------------------------------------------------------------------

/// What a dashboard surface holds: the loaded dataset and the programme
/// picked by the user. Views are derived on demand and never cached.
#[derive(Debug, Clone)]
pub struct DashboardState {
    dataset: Dataset,
    program: Program,
}

impl DashboardState {
    /// Starts on BTech, the default selection of the package views.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            program: Program::Btech,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn program(&self) -> Program {
        self.program
    }

    /// Change the programme used by the package views.
    pub fn set_program(&mut self, program: Program) {
        if program != self.program {
            log::debug!("program changed: {} -> {program}", self.program);
        }
        self.program = program;
    }

    /// Highest cost-to-company ranking for the selected programme.
    pub fn highest_packages(&self) -> Vec<RankedCompany> {
        rank(self.program, &self.dataset.companies)
    }

    /// The `n` highest packages for the selected programme.
    pub fn top_packages(&self, n: usize) -> Vec<RankedCompany> {
        top(self.program, &self.dataset.companies, n)
    }

    /// Ranking rows with base and gross salary for the selected programme.
    pub fn salary_table(&self) -> Vec<SalaryRow> {
        rank_table(self.program, &self.dataset.companies)
    }

    pub fn category_offers(&self) -> CategoryTotals {
        aggregate_by_category(&self.dataset.companies)
    }

    pub fn sector_averages(&self) -> Vec<SectorAverage> {
        aggregate_by_sector(&self.dataset.companies)
    }
}
