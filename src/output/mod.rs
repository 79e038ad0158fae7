// mod.rs - Probe record writers

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::core::{DesignStats, ProbeSet};
use crate::error::{ProbeError, Result};

pub const DEFAULT_PROBE_PREFIX: &str = "probe";

/// Probe record layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Fasta,
    Tsv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fasta" | "fa" => Ok(OutputFormat::Fasta),
            "tsv" => Ok(OutputFormat::Tsv),
            _ => Err(format!("Unsupported output format: {}. Use: fasta, tsv", s)),
        }
    }
}

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(file_path).parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|e| {
                ProbeError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create parent directory '{}': {}", parent.display(), e),
                ))
            })?;
        }
    }
    Ok(())
}

/// Write probes as two-line FASTA records named `{prefix}_{index}`
pub fn write_fasta<W: Write>(writer: &mut W, probes: &ProbeSet, prefix: &str) -> Result<()> {
    for (i, probe) in probes.iter().enumerate() {
        writeln!(writer, ">{}_{}", prefix, i)?;
        writeln!(writer, "{}", probe)?;
    }
    Ok(())
}

/// Write probes as a tab-separated table with a commented provenance header
pub fn write_tsv<W: Write>(
    writer: &mut W,
    probes: &ProbeSet,
    prefix: &str,
    command_line: &str,
) -> Result<()> {
    writeln!(writer, "# Command: {}", command_line)?;
    writeln!(
        writer,
        "# Generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(writer, "# capprobe v{}", env!("CARGO_PKG_VERSION"))?;

    let mut table = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);
    table.write_record(["name", "sequence", "length"])?;
    for (i, probe) in probes.iter().enumerate() {
        let name = format!("{}_{}", prefix, i);
        let length = probe.len().to_string();
        table.write_record([name.as_str(), probe.as_str(), length.as_str()])?;
    }
    table.flush()?;
    Ok(())
}

/// Write probes in the chosen format to `output`, or to stdout when no path is given
pub fn write_probes(
    output: Option<&str>,
    format: OutputFormat,
    probes: &ProbeSet,
    prefix: &str,
    command_line: &str,
) -> Result<()> {
    match output {
        Some(file_path) => {
            ensure_parent_dir(file_path)?;
            let file = File::create(file_path).map_err(|e| {
                ProbeError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create output file '{}': {}", file_path, e),
                ))
            })?;
            let mut writer = BufWriter::new(file);
            write_formatted(&mut writer, format, probes, prefix, command_line)?;
            writer.flush()?;
            log::info!("Wrote {} probes to: {}", probes.len(), file_path);
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_formatted(&mut writer, format, probes, prefix, command_line)?;
            writer.flush()?;
        }
    }
    Ok(())
}

fn write_formatted<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    probes: &ProbeSet,
    prefix: &str,
    command_line: &str,
) -> Result<()> {
    match format {
        OutputFormat::Fasta => write_fasta(writer, probes, prefix),
        OutputFormat::Tsv => write_tsv(writer, probes, prefix, command_line),
    }
}

/// Write design statistics as pretty-printed JSON
pub fn write_stats<W: Write>(writer: &mut W, stats: &DesignStats) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, stats)?;
    writeln!(writer)?;
    Ok(())
}
