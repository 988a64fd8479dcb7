//! vcf2maf-lite CLI entry point
//!
//! Lightweight VCF to MAF conversion without variant annotation.

use clap::Parser;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use vcf2maf_lite::convert::{convert_vcf_to_maf, ConvertOptions, FileOutcome};

/// Input extensions recognized during directory scans
const VCF_EXTENSIONS: [&str; 3] = [".vcf", ".vcf.gz", ".vcf.bz2"];

#[derive(Parser)]
#[command(name = "vcf2maf-lite")]
#[command(about = "Lightweight VCF to MAF conversion without variant annotation")]
#[command(version)]
struct Cli {
    /// VCF file or directory of VCF files to convert
    #[arg(short = 'i', long = "input-data")]
    input_data: PathBuf,

    /// Directory for MAF output (defaults to the input directory)
    #[arg(short = 'o', long = "output-directory")]
    output_directory: Option<PathBuf>,

    /// Value for the Center column
    #[arg(short = 'c', long = "center", default_value = "NA")]
    center: String,

    /// Value for the Sequence_Source column (e.g. WGS, WXS)
    #[arg(short = 's', long = "sequence-source", default_value = "NA")]
    sequence_source: String,

    /// Tumor sample id, overrides the VCF header (use with --normal-id)
    #[arg(short = 't', long = "tumor-id")]
    tumor_id: Option<String>,

    /// Normal sample id, overrides the VCF header (use with --tumor-id)
    #[arg(short = 'n', long = "normal-id")]
    normal_id: Option<String>,

    /// Comma-separated INFO keys to copy into output columns
    #[arg(short = 'a', long = "retain-info", value_delimiter = ',')]
    retain_info: Vec<String>,

    /// Comma-separated FORMAT subfields to copy into t_/n_ columns
    #[arg(short = 'f', long = "retain-format", value_delimiter = ',')]
    retain_format: Vec<String>,
}

fn has_vcf_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| VCF_EXTENSIONS.iter().any(|ext| name.ends_with(ext)))
}

/// Collect input files from a single path or a directory scan
fn discover_inputs(input: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if input.is_dir() {
        let mut files: Vec<PathBuf> = fs::read_dir(input)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && has_vcf_extension(path))
            .collect();
        files.sort();
        if files.is_empty() {
            anyhow::bail!("No VCF files found in {:?}", input);
        }
        Ok(files)
    } else if input.is_file() {
        Ok(vec![input.to_path_buf()])
    } else {
        anyhow::bail!("Input path {:?} does not exist", input)
    }
}

/// Derive the output MAF path from the input file name
fn maf_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let name = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("output");
    let stem = VCF_EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
        .unwrap_or_else(|| input.file_stem().and_then(|s| s.to_str()).unwrap_or(name));
    output_dir.join(format!("{stem}.maf"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    let inputs = discover_inputs(&cli.input_data)?;
    let output_dir = match cli.output_directory {
        Some(dir) => dir,
        None if cli.input_data.is_dir() => cli.input_data.clone(),
        None => cli
            .input_data
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
    };
    fs::create_dir_all(&output_dir)?;

    let options = ConvertOptions {
        center: cli.center,
        sequence_source: cli.sequence_source,
        tumor_id: cli.tumor_id,
        normal_id: cli.normal_id,
        retain_info: cli.retain_info,
        retain_format: cli.retain_format,
    };

    eprintln!("Converting {} file(s) -> {:?}", inputs.len(), output_dir);

    let outcomes: Vec<_> = inputs
        .par_iter()
        .map(|input| {
            let output = maf_output_path(input, &output_dir);
            let result = convert_vcf_to_maf(input, &output, &options);
            match &result {
                Ok(FileOutcome::Converted { rows }) => {
                    log::info!("Converted {:?} -> {:?} ({} rows)", input, output, rows);
                }
                Ok(FileOutcome::Skipped(_)) => {}
                Err(e) => log::error!("Failed to convert {:?}: {}", input, e),
            }
            result
        })
        .collect();

    let mut converted = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;
    let mut total_rows = 0usize;
    for outcome in &outcomes {
        match outcome {
            Ok(FileOutcome::Converted { rows }) => {
                converted += 1;
                total_rows += rows;
            }
            Ok(FileOutcome::Skipped(_)) => skipped += 1,
            Err(_) => failed += 1,
        }
    }

    eprintln!("\n=== Conversion Statistics ===");
    eprintln!("Total files:     {}", inputs.len());
    eprintln!("Converted:       {}", converted);
    eprintln!("Skipped:         {}", skipped);
    eprintln!("Failed:          {}", failed);
    eprintln!("Rows written:    {}", total_rows);
    eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());

    if converted == 0 {
        anyhow::bail!("No input files were converted");
    }

    Ok(())
}
