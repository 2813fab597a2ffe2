use std::path::Path;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod models;
mod services;
mod utils;

use utils::ChartError;

/// Benchmark summary written by the prime generator.
const INPUT_PATH: &str = "data/primos.txt";
/// Rendered chart, overwritten on every run.
const OUTPUT_PATH: &str = "data/primos.png";

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("primochart=info".parse().unwrap()),
        )
        .with_target(true)
        .init();

    if let Err(e) = run(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH)) {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Full pipeline: load the benchmark file, render the chart, save it.
fn run(input: &Path, output: &Path) -> Result<(), ChartError> {
    let samples = services::dataset_service::load_dataset(input)?;
    info!(
        "Loaded {} benchmark records from {}",
        samples.len(),
        input.display()
    );

    services::chart_service::render_chart(&samples, output)?;
    info!("Chart saved to {}", output.display());

    Ok(())
}
