//! Error types for the chart pipeline

use thiserror::Error;

/// Everything that can go wrong between reading the benchmark file and
/// saving the rendered chart
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Cannot read input file '{path}': {reason}")]
    InputAccess { path: String, reason: String },
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
    #[error("Input file has no benchmark records to chart")]
    EmptyDataset,
    #[error("Chart rendering failed: {0}")]
    Render(String),
    #[error("Cannot write chart to '{path}': {reason}")]
    OutputWrite { path: String, reason: String },
}
