//! Campus recruitment statistics.
//!
//! Loads a `cdc.json` recruitment dataset and derives the dashboard views:
//! highest package per programme, job offers per category and average
//! offers per sector.

pub mod analytics;
pub mod data;
pub mod report;
pub mod state;

pub use data::model::{Company, Dataset, Program};
