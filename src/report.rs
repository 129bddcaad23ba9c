use std::io::{self, Write};

use crate::analytics::{CategoryTotals, RankedCompany, SalaryRow, SectorAverage};
use crate::data::model::Program;

// ---------------------------------------------------------------------------
// Plain-text rendering of the derived views
// ---------------------------------------------------------------------------

/// Integral amounts print without a fractional part, others with two places.
pub fn format_amount(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

pub fn write_ranking(out: &mut impl Write, program: Program, rows: &[RankedCompany]) -> io::Result<()> {
    writeln!(out, "Highest CTC by Program ({program})")?;
    if rows.is_empty() {
        return writeln!(out, "  (no company offers a package for {program})");
    }
    let name_w = column_width("Company Name", rows.iter().map(|r| r.name.as_str()));
    writeln!(out, "  {:<name_w$}  {:>12}  Website", "Company Name", "CTC")?;
    for row in rows {
        writeln!(
            out,
            "  {:<name_w$}  {:>12}  {}",
            row.name,
            format_amount(row.amount),
            row.website
        )?;
    }
    Ok(())
}

pub fn write_salary_table(out: &mut impl Write, program: Program, rows: &[SalaryRow]) -> io::Result<()> {
    writeln!(out, "Top Companies by CTC ({})", program.key().to_uppercase())?;
    if rows.is_empty() {
        return writeln!(out, "  (no company offers a package for {program})");
    }
    let name_w = column_width("Company", rows.iter().map(|r| r.name.as_str()));
    writeln!(
        out,
        "  {:<name_w$}  {:>12}  {:>12}  {:>12}",
        "Company", "CTC", "Base Salary", "Gross Salary"
    )?;
    for row in rows {
        writeln!(
            out,
            "  {:<name_w$}  {:>12}  {:>12}  {:>12}",
            row.name,
            format_amount(row.amount),
            format_amount(row.base),
            format_amount(row.gross)
        )?;
    }
    Ok(())
}

pub fn write_categories(out: &mut impl Write, totals: &CategoryTotals) -> io::Result<()> {
    writeln!(out, "Category vs Number of Job Offers")?;
    if totals.is_empty() {
        return writeln!(out, "  (no categories)");
    }
    let label_w = column_width("Category", totals.iter().map(|(c, _)| c));
    for (category, hires) in totals.iter() {
        writeln!(out, "  {category:<label_w$}  {hires:>8}")?;
    }
    writeln!(out, "  {:<label_w$}  {:>8}", "Total", totals.grand_total())
}

pub fn write_sectors(out: &mut impl Write, rows: &[SectorAverage]) -> io::Result<()> {
    writeln!(out, "Average Sector-wise Job Offers")?;
    if rows.is_empty() {
        return writeln!(out, "  (no sectors)");
    }
    let label_w = column_width("Sector", rows.iter().map(|r| r.sector.as_str()));
    for row in rows {
        writeln!(out, "  {:<label_w$}  {:>8.2}", row.sector, row.average_hires)?;
    }
    Ok(())
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(|c| c.chars().count()).fold(header.chars().count(), usize::max)
}
