use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Company, Dataset};

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// Malformed content detected after parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("company '{company}': {program} {field} is {value}, expected a finite non-negative amount")]
    InvalidAmount {
        company: String,
        program: String,
        field: &'static str,
        value: f64,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a recruitment dataset from a file. Dispatch by extension.
///
/// Only `.json` is supported: either the bare `cdc.json` array of companies
/// or an object wrapping it as `{ "companies": [...] }`.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_json(&text).with_context(|| format!("loading {}", path.display()))
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Parse and validate a dataset from JSON text.
pub fn parse_json(text: &str) -> Result<Dataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let records = match root {
        JsonValue::Array(records) => records,
        JsonValue::Object(mut obj) => match obj.remove("companies") {
            Some(JsonValue::Array(records)) => records,
            _ => bail!("Expected top-level JSON array or an object with a 'companies' array"),
        },
        _ => bail!("Expected top-level JSON array"),
    };

    let mut companies = Vec::with_capacity(records.len());
    for (i, rec) in records.into_iter().enumerate() {
        let company: Company = serde_json::from_value(rec)
            .with_context(|| format!("Entry {i} is not a valid company record"))?;
        companies.push(company);
    }

    let dataset = Dataset::new(companies);
    validate(&dataset)?;

    log::info!(
        "loaded {} companies ({} sectors, {} categories)",
        dataset.len(),
        dataset.sectors().len(),
        dataset.categories().len()
    );
    Ok(dataset)
}

/// Reject content the projections assume never occurs.
///
/// Blank names and companies without any sector are accepted and only
/// reported; the projections still count them.
pub fn validate(dataset: &Dataset) -> std::result::Result<(), DatasetError> {
    for (index, company) in dataset.companies.iter().enumerate() {
        let org = &company.organisation;
        if org.name.trim().is_empty() {
            log::warn!("company #{index} has an empty name");
        }

        for (program, salary) in company.program_salaries.offered() {
            for (field, value) in salary.fields() {
                if !value.is_finite() || value < 0.0 {
                    return Err(DatasetError::InvalidAmount {
                        company: org.name.clone(),
                        program: program.to_string(),
                        field,
                        value,
                    });
                }
            }
        }

        if org.sectors.is_empty() {
            log::warn!("company '{}' declares no sector; it is left out of sector averages", org.name);
        }
    }
    Ok(())
}
