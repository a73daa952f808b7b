#![forbid(unsafe_code)]

//! # Teagrid Demo
//!
//! Loads JSON records into a [`teagrid`] grid and either prints one page or
//! runs an interactive terminal session over it.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p teagrid-demo -- --records people.json --print --sort age
//! ```

mod app;
mod cli;
mod logging;
mod records;

use anyhow::Context;
use teagrid::column::ColumnRegistry;
use teagrid::config::GridConfig;
use teagrid::grid::DataGrid;

use app::App;
use cli::Cli;
use records::{DemoMsg, Record};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    logging::init(cli.log_level(), cli.log_file.as_deref(), !cli.print)?;

    let config = match &cli.config {
        Some(path) => GridConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GridConfig::default(),
    };

    let records = match &cli.records {
        Some(path) => records::load_records(path)?,
        None => records::sample_records(),
    };

    let grid = build_grid(&cli, config, &records)?;

    if cli.print {
        println!("{}", grid.view(&records));
        return Ok(());
    }

    app::run(App::new(grid, records))
}

fn build_grid(cli: &Cli, config: GridConfig, records: &[Record]) -> anyhow::Result<DataGrid<Record, DemoMsg>> {
    let columns = records
        .first()
        .map(|first| records::infer_columns(first, config.column_width))
        .unwrap_or_default();
    let columns = ColumnRegistry::new(columns)?;

    let mut grid = DataGrid::with_config(columns, config);
    for msg in cli.initial_messages() {
        grid.update(msg);
    }
    tracing::debug!(state = ?grid.state(), "initial grid state");
    Ok(grid)
}
