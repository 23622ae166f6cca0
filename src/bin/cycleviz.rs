use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};

use cycleviz_rs::{
    ChartConfig, Dataset, Error, YearView, monthly_totals_chart, setup_logging, spawn_load,
    wait_for_dataset, weekly_totals_chart,
};

/// Computes calendar heatmap and circular diagram geometry from a CSV of
/// daily bicycle hires and prints it as JSON.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the CSV with `date` and `amount` columns.
    #[arg(long)]
    data: PathBuf,

    /// The year to build charts for. Defaults to the first year in the data.
    #[arg(short, long)]
    year: Option<i32>,

    /// File path to a JSON chart configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the JSON to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// What to output.
    #[arg(long, value_enum, default_value_t = Format::Geometry)]
    format: Format,

    /// Print the years in the data and exit.
    #[arg(long)]
    list_years: bool,

    /// Also append debug logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// The geometry of every chart for the selected year.
    Geometry,
    /// ECharts options for the month totals.
    EchartsMonthly,
    /// ECharts options for the week totals.
    EchartsWeekly,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = setup_logging(args.log_file.as_deref()) {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let config = match &args.config {
        Some(path) => ChartConfig::load(path).await?,
        None => ChartConfig::default(),
    };

    tracing::debug!("Loading dataset from {}", args.data.display());
    let dataset = wait_for_dataset(spawn_load(args.data.clone())).await?;

    if args.list_years {
        let years = serde_json::to_string(&dataset.years())?;
        return write_output(&args, &years).await;
    }

    let year = select_year(&dataset, args.year)?;
    let view = YearView::select(&dataset, year, &config)?;

    let json = match args.format {
        Format::Geometry => view.to_json()?,
        Format::EchartsMonthly => monthly_totals_chart(&view, &config.palette).to_string(),
        Format::EchartsWeekly => weekly_totals_chart(&view, &config.palette).to_string(),
    };

    write_output(&args, &json).await
}

fn select_year(dataset: &Dataset, requested: Option<i32>) -> Result<i32, Error> {
    match requested {
        Some(year) => Ok(year),
        None => dataset.years().first().copied().ok_or(Error::EmptyDataset),
    }
}

async fn write_output(args: &Args, json: &str) -> Result<(), Error> {
    match &args.output {
        Some(path) => {
            tokio::fs::write(path, json).await.map_err(|error| {
                Error::InvalidConfig(format!("could not write {}: {error}", path.display()))
            })?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
