//! plotprep - plot data preparation CLI
//!
//! Command-line interface for subsampling and merging frequency/count tables.

use clap::{Parser, Subcommand};
use plotprep::data::Table;
use plotprep::error::Result;
use plotprep::extract::{extract_frequencies, ExtractConfig};
use plotprep::merge::{merge_manifest, merge_paired};
use plotprep::subsample::{subsample_counts, subsample_table, ReportFormat};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Subsample and merge frequency/count tables for plotting
#[derive(Parser)]
#[command(name = "plotprep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract marker counts from a `;`-delimited trace and subsample them
    Freq {
        /// Path to the `;`-delimited input
        input: PathBuf,

        /// Number of rows to keep
        target: usize,

        /// Output path for the `ID\tCount` TSV
        output: PathBuf,

        /// Prefix of the cell holding the count
        #[arg(long, default_value = "Freq:")]
        marker: String,

        /// Report format: text, json, or yaml
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Subsample the rows of a TSV table with a `Count` column
    Subsample {
        /// Path to the input TSV
        input: PathBuf,

        /// Number of rows to keep
        target: usize,

        /// Output path for the subsampled TSV
        output: PathBuf,

        /// Report format: text, json, or yaml
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Merge the tables listed in a manifest, labeled by file name
    Merge {
        /// Path to the manifest TSV (header, then one file per row)
        manifest: PathBuf,

        /// Output path for the `ID\tType\tCount` TSV
        output: PathBuf,
    },

    /// Interleave two equal-length tables as With/Without rows
    MergePaired {
        /// Table for the "With" rows
        with: PathBuf,

        /// Table for the "Without" rows
        without: PathBuf,

        /// Output path for the `ID\tType\tCount` TSV
        output: PathBuf,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Freq {
            input,
            target,
            output,
            marker,
            format,
        } => cmd_freq(&input, target, &output, &marker, &format),

        Commands::Subsample {
            input,
            target,
            output,
            format,
        } => cmd_subsample(&input, target, &output, &format),

        Commands::Merge { manifest, output } => cmd_merge(&manifest, &output),

        Commands::MergePaired {
            with,
            without,
            output,
        } => cmd_merge_paired(&with, &without, &output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Extract counts from a trace and subsample them
fn cmd_freq(
    input_path: &PathBuf,
    target: usize,
    output_path: &PathBuf,
    marker: &str,
    format: &str,
) -> Result<()> {
    let format: ReportFormat = format.parse()?;
    let config = ExtractConfig::with_marker(marker);

    eprintln!("Extracting '{}' counts from {:?}...", config.marker, input_path);
    let counts = extract_frequencies(input_path, &config)?;

    let (series, report) = subsample_counts(&counts, target)?;

    eprintln!("Writing {} rows to {:?}...", series.len(), output_path);
    series.to_tsv(output_path)?;

    println!("{}", report.render(format)?);
    Ok(())
}

/// Subsample an existing table
fn cmd_subsample(
    input_path: &PathBuf,
    target: usize,
    output_path: &PathBuf,
    format: &str,
) -> Result<()> {
    let format: ReportFormat = format.parse()?;

    eprintln!("Loading table from {:?}...", input_path);
    let table = Table::from_tsv(input_path)?;

    let (selected, report) = subsample_table(&table, target)?;

    eprintln!("Writing {} rows to {:?}...", selected.n_rows(), output_path);
    selected.to_tsv(output_path)?;

    println!("{}", report.render(format)?);
    Ok(())
}

/// Merge manifest-listed tables
fn cmd_merge(manifest_path: &PathBuf, output_path: &PathBuf) -> Result<()> {
    eprintln!("Loading manifest from {:?}...", manifest_path);
    let (merged, sources) = merge_manifest(manifest_path)?;

    println!("Total files: {}", sources.len());
    for source in &sources {
        println!(
            "Total rows in {}: {} (label {})",
            source.path.display(),
            source.rows,
            source.label
        );
    }

    eprintln!("Writing {} rows to {:?}...", merged.len(), output_path);
    merged.to_tsv(output_path)?;
    Ok(())
}

/// Merge a With/Without pair
fn cmd_merge_paired(
    with_path: &PathBuf,
    without_path: &PathBuf,
    output_path: &PathBuf,
) -> Result<()> {
    let with = Table::from_tsv(with_path)?;
    println!("Total rows with: {}", with.n_rows());
    let without = Table::from_tsv(without_path)?;
    println!("Total rows without: {}", without.n_rows());

    // Fails before the output file is created.
    let merged = merge_paired(&with, &without)?;

    eprintln!("Writing {} rows to {:?}...", merged.len(), output_path);
    merged.to_tsv(output_path)?;
    Ok(())
}
