//! sheet-pluck CLI - typed cell-range extraction tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sheet_pluck_core::{CellValue, RangeResult};
use sheet_pluck_xlsx::RangeReader;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pluck")]
#[command(
    author,
    version,
    about = "Extract typed values from cell ranges of an XLSX worksheet"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract cell ranges and print them as JSON or TSV
    #[command(alias = "x")]
    Extract {
        /// Input spreadsheet file (xlsx)
        input: PathBuf,

        /// Range expressions, e.g. H12-H300 or B2
        #[arg(required = true)]
        ranges: Vec<String>,

        /// Worksheet index (1-based)
        #[arg(short, long, default_value = "1")]
        sheet: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `{ "H": { "12": value } }`
    Json,
    /// One `COLUMN<TAB>ROW<TAB>VALUE` line per cell
    Tsv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            ranges,
            sheet,
            format,
            output,
        } => extract(&input, &ranges, sheet, format, output.as_deref()),
    }
}

fn extract(
    input: &Path,
    ranges: &[String],
    sheet: usize,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let result = RangeReader::read_file(input, sheet, ranges)
        .with_context(|| format!("Failed to extract from '{}'", input.display()))?;

    let rendered = match format {
        OutputFormat::Json => render_json(&result)?,
        OutputFormat::Tsv => render_tsv(&result),
    };

    if let Some(output_path) = output {
        std::fs::write(output_path, &rendered)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!(
            "Wrote {} cells to '{}'",
            result.len(),
            output_path.display()
        );
    } else {
        io::stdout()
            .write_all(rendered.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

fn render_json(result: &RangeResult) -> Result<String> {
    let mut json = serde_json::to_string_pretty(result).context("Failed to serialize result")?;
    json.push('\n');
    Ok(json)
}

fn render_tsv(result: &RangeResult) -> String {
    let mut out = String::new();

    for column in result.columns() {
        for (row, value) in column.rows() {
            out.push_str(column.name());
            out.push('\t');
            out.push_str(&row.to_string());
            out.push('\t');
            out.push_str(&cell_value_to_tsv_string(value));
            out.push('\n');
        }
    }

    out
}

/// Convert a CellValue to a TSV-safe string
fn cell_value_to_tsv_string(value: &CellValue) -> String {
    let text = match value {
        CellValue::Empty => String::new(),
        CellValue::Number(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{}", n)
            }
        }
        CellValue::Text(s) => s.clone(),
    };

    // Quote if necessary
    if text.contains('\t') || text.contains('"') || text.contains('\n') || text.contains('\r') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text
    }
}
