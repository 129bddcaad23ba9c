//! Derived views over a [`Dataset`](crate::data::model::Dataset).
//!
//! Each projection is a pure function of the company slice (and, for the
//! rankings, the selected programme). Results are fully materialized and
//! recomputed on every call.
//!
//! ```text
//!   &[Company] ──┬── ranking::rank / rank_table   → Vec<RankedCompany> / Vec<SalaryRow>
//!                ├── category::aggregate_by_category → CategoryTotals
//!                └── sector::aggregate_by_sector     → Vec<SectorAverage>
//! ```

pub mod category;
pub mod ranking;
pub mod sector;

#[cfg(test)]
pub(crate) mod testing;

pub use category::{aggregate_by_category, CategoryTotals};
pub use ranking::{rank, rank_table, top, RankedCompany, SalaryRow};
pub use sector::{aggregate_by_sector, SectorAverage};
