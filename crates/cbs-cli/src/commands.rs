use std::time::Instant;

use anyhow::{Context, Result};
use cbs_generate::{GenerationConfig, assemble};
use cbs_model::{Department, validate_profiles};
use cbs_output::{OutputFormat, write_dataset};
use chrono::Local;
use comfy_table::Table;
use tracing::{info, info_span};

use crate::cli::{GenerateArgs, OutputFormatArg};
use crate::summary::apply_table_style;
use crate::types::GenerateResult;

pub fn run_departments() -> Result<()> {
    validate_profiles().context("validate department profiles")?;
    let mut table = Table::new();
    table.set_header(vec![
        "Department",
        "Ages",
        "Charges (USD)",
        "Diagnoses",
        "Visit reasons",
    ]);
    apply_table_style(&mut table);
    for department in Department::ALL {
        let profile = department.profile();
        table.add_row(vec![
            department.to_string(),
            format!("{}-{}", profile.age_range.min, profile.age_range.max),
            format!("{}-{}", profile.charge_range.min, profile.charge_range.max),
            profile.diagnoses.join(", "),
            profile.visit_reasons.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let config = generation_config(args);
    let format = output_format(args);
    let run_span = info_span!("run", seed = config.seed, output = %args.output.display());
    let _run_guard = run_span.enter();

    let dataset = assemble(&config).context("generate dataset")?;

    let (output_path, rows_written) = if args.dry_run {
        info!(records = dataset.records.len(), "dry run, output not written");
        (None, 0)
    } else {
        let write_start = Instant::now();
        let rows = write_dataset(&args.output, format, &dataset.records)?;
        info!(
            rows,
            duration_ms = write_start.elapsed().as_millis(),
            "output complete"
        );
        (Some(args.output.clone()), rows)
    };

    Ok(GenerateResult {
        config,
        format,
        output_path,
        rows_written,
        payer_pool_size: dataset.payers.len(),
        stats: dataset.stats,
    })
}

/// Build generation settings from CLI flags.
pub fn generation_config(args: &GenerateArgs) -> GenerationConfig {
    let reference_date = args
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    GenerationConfig::new(reference_date)
        .with_seed(args.seed)
        .with_record_count(args.records)
        .with_null_rate(args.null_rate)
        .with_outlier_rate(args.outlier_rate)
}

/// Explicit `--format` wins, then the output extension, then CSV.
pub fn output_format(args: &GenerateArgs) -> OutputFormat {
    match args.format {
        Some(OutputFormatArg::Csv) => OutputFormat::Csv,
        Some(OutputFormatArg::Jsonl) => OutputFormat::JsonLines,
        None => OutputFormat::from_path(&args.output).unwrap_or_default(),
    }
}
