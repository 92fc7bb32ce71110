use std::path::PathBuf;

use cbs_generate::{GenerationConfig, GenerationStats};
use cbs_output::OutputFormat;

#[derive(Debug)]
pub struct GenerateResult {
    pub config: GenerationConfig,
    pub format: OutputFormat,
    /// `None` for dry runs.
    pub output_path: Option<PathBuf>,
    pub rows_written: usize,
    pub payer_pool_size: usize,
    pub stats: GenerationStats,
}
