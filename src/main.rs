use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use cdc_insights::data::loader;
use cdc_insights::data::model::Program;
use cdc_insights::report;
use cdc_insights::state::DashboardState;
use clap::{Parser, ValueEnum};

/// Campus recruitment statistics from a cdc.json dataset
#[derive(Parser, Debug)]
#[command(name = "cdc-insights", version, about, long_about = None)]
struct Cli {
    /// Dataset file (JSON)
    data: PathBuf,

    /// Programme used by the package views (btech, mtech, msc, PhD, MBA)
    #[arg(short, long, default_value = "btech")]
    program: Program,

    /// Which view to print
    #[arg(long, value_enum, default_value_t = View::All)]
    view: View,

    /// Only show the first N rows of package views
    #[arg(long)]
    top: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum View {
    Ranking,
    Table,
    Categories,
    Sectors,
    All,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let dataset = loader::load_file(&cli.data)?;

    let mut state = DashboardState::new(dataset);
    state.set_program(cli.program);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_views(&mut out, &state, cli.view, cli.top).context("writing report")?;
    out.flush()?;
    Ok(())
}

fn print_views(out: &mut impl Write, state: &DashboardState, view: View, top: Option<usize>) -> io::Result<()> {
    let program = state.program();
    let all = view == View::All;

    if all || view == View::Ranking {
        let rows = match top {
            Some(n) => state.top_packages(n),
            None => state.highest_packages(),
        };
        report::write_ranking(out, program, &rows)?;
        writeln!(out)?;
    }
    if all || view == View::Table {
        let mut rows = state.salary_table();
        if let Some(n) = top {
            rows.truncate(n);
        }
        report::write_salary_table(out, program, &rows)?;
        writeln!(out)?;
    }
    if all || view == View::Categories {
        report::write_categories(out, &state.category_offers())?;
        writeln!(out)?;
    }
    if all || view == View::Sectors {
        report::write_sectors(out, &state.sector_averages())?;
    }
    Ok(())
}
