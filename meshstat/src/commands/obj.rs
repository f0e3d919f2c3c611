//! OBJ mesh command implementations

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Subcommand, ValueEnum};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use obj_stat::{Accumulator, BoundingBoxStats};

use crate::utils::{
    NOT_AVAILABLE, bounds_table, format_report, format_report_timestamp, report_path,
    write_report,
};

/// Console output format
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable summary
    Text,
    /// JSON document
    Json,
}

#[derive(Subcommand)]
pub enum ObjCommands {
    /// Count vertices and compute the bounding box of an OBJ file
    Stat {
        /// Path to the OBJ file
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Directory the statistics report is written to
        #[arg(
            short,
            long,
            value_name = "DIR",
            env = "MESHSTAT_OUTPUT_DIR",
            default_value = "."
        )]
        output_dir: PathBuf,

        /// Print the statistics without writing a report file
        #[arg(long)]
        no_report: bool,

        /// Console output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

pub fn execute(command: ObjCommands) -> Result<()> {
    match command {
        ObjCommands::Stat {
            input,
            output_dir,
            no_report,
            format,
        } => execute_stat(&input, &output_dir, no_report, format),
    }
}

fn execute_stat(
    input: &Path,
    output_dir: &Path,
    no_report: bool,
    format: OutputFormat,
) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let stats = scan(input)?;

    // The report is only written after a successful scan
    let report = if no_report {
        None
    } else {
        let timestamp = format_report_timestamp(&Local::now());
        let path = report_path(output_dir, input, &timestamp);
        write_report(&path, &format_report(&stats))?;
        info!("Wrote report to {}", path.display());
        Some(path)
    };

    match format {
        OutputFormat::Text => print_text(input, &stats, report.as_deref()),
        OutputFormat::Json => print_json(input, &stats, report.as_deref())?,
    }

    Ok(())
}

fn scan(input: &Path) -> Result<BoundingBoxStats> {
    let reader = obj_stat::open_input(input)
        .with_context(|| format!("Failed to open file: {}", input.display()))?;

    let mut acc = Accumulator::new();
    acc.read_from(reader)
        .with_context(|| format!("Failed to scan OBJ file: {}", input.display()))?;

    debug!("Examined {} lines of {}", acc.lines_read(), input.display());
    if let Some(stop) = acc.stopped_at() {
        info!(
            "Scan ended at line {} on '{}' record; later vertex records are not counted",
            stop.line, stop.tag
        );
        if acc.stats().is_empty() {
            warn!(
                "No vertex records before line {} ('{}' record) in {}",
                stop.line,
                stop.tag,
                input.display()
            );
        }
    }

    Ok(acc.finish())
}

fn print_text(input: &Path, stats: &BoundingBoxStats, report: Option<&Path>) {
    use console::style;

    println!("\n{}", style("OBJ Statistics").bold().underlined());
    println!("File: {}", style(input.display()).cyan());
    println!("Vertices: {}", style(stats.count()).green());

    match stats.bounds() {
        Some(bounds) => {
            println!();
            bounds_table(bounds).printstd();
        }
        None => {
            println!("Bounds: {}", style(NOT_AVAILABLE).dim());
        }
    }

    if let Some(path) = report {
        println!("\n✓ Report written to {}", style(path.display()).cyan());
    }
}

fn print_json(input: &Path, stats: &BoundingBoxStats, report: Option<&Path>) -> Result<()> {
    #[cfg(feature = "serde")]
    {
        let extents = stats.bounds().map(|b| {
            let (dx, dy, dz) = b.extents();
            [dx, dy, dz]
        });
        let document = serde_json::json!({
            "file": input.display().to_string(),
            "count": stats.count(),
            "bounds": stats.bounds(),
            "extents": extents,
            "report": report.map(|p| p.display().to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
        Ok(())
    }
    #[cfg(not(feature = "serde"))]
    {
        let _ = (input, stats, report);
        anyhow::bail!("JSON output requires the 'serde' feature to be enabled");
    }
}
