//! GCOS compliance report tool.
//!
//! Reads colocated observation/model documents, computes the fraction of
//! valid pairs meeting each GCOS accuracy tier and prints one report line
//! per document (or appends them to a report file).

mod config;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use config::{OutputFormat, ReportConfig};
use gcos_common::{ColocatedSeries, CriterionTable};
use gcos_stats::{append_to_file, evaluate_series, ReportLine};

#[derive(Parser, Debug)]
#[command(name = "gcos-report")]
#[command(about = "GCOS compliance percentages for colocated observation/model data")]
#[command(after_help = "Example:\n  gcos-report -f colocated_od550aer.json --header")]
struct Args {
    /// Colocated series document(s) to evaluate
    #[arg(short, long, num_args = 1..)]
    file: Vec<PathBuf>,

    /// Criterion table (YAML or JSON); defaults to $GCOS_CRITERIA_FILE or the built-in table
    #[arg(short, long)]
    criteria: Option<PathBuf>,

    /// Field delimiter for text output; defaults to $GCOS_REPORT_DELIMITER or ';'
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Output format; defaults to $GCOS_REPORT_FORMAT or text
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Append text report lines to this file instead of printing them
    #[arg(short, long)]
    outfile: Option<PathBuf>,

    /// Print a header line before text output on stdout
    #[arg(long)]
    header: bool,

    /// List the variables that have GCOS criteria and exit
    #[arg(short, long)]
    list: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    // Report lines go to stdout, logs to stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = ReportConfig::from_env().with_overrides(
        args.criteria.clone(),
        args.delimiter.clone(),
        args.format,
    );

    let criteria = load_criteria(config.criteria_file.as_deref())?;

    if args.list {
        println!("variables with GCOS criteria:");
        for variable in criteria.variables() {
            println!("\t- {}", variable);
        }
        return Ok(());
    }

    if args.file.is_empty() {
        bail!("no input files given; pass --file or use --list");
    }

    if args.outfile.is_some() && config.format == OutputFormat::Json {
        bail!("--outfile supports text output only");
    }

    // The report file gets its header when created; JSON lines have none
    if args.header && (args.outfile.is_some() || config.format == OutputFormat::Json) {
        bail!("--header applies to text output on stdout only");
    }

    let mut lines = Vec::with_capacity(args.file.len());
    let mut failed = 0usize;

    for path in &args.file {
        match report_file(path, &criteria) {
            Ok(line) => lines.push(line),
            Err(e) => {
                error!(file = %path.display(), error = ?e, "Skipping input file");
                failed += 1;
            }
        }
    }

    if let Some(outfile) = &args.outfile {
        if lines.is_empty() {
            warn!(path = %outfile.display(), "No report lines to write");
        } else {
            append_to_file(outfile, &lines, &config.delimiter)
                .with_context(|| format!("writing report to {}", outfile.display()))?;
        }
    } else {
        print_lines(&lines, &config, args.header)?;
    }

    info!(evaluated = lines.len(), failed = failed, "Finished GCOS report");

    if failed > 0 {
        bail!("{} of {} input files failed", failed, args.file.len());
    }

    Ok(())
}

/// Load the criterion table from file, or fall back to the built-in reference table.
fn load_criteria(path: Option<&Path>) -> Result<CriterionTable> {
    match path {
        Some(path) => {
            let table = CriterionTable::from_file(path)
                .with_context(|| format!("loading criterion table {}", path.display()))?;
            info!(path = %path.display(), variables = table.len(), "Loaded criterion table");
            Ok(table)
        }
        None => Ok(CriterionTable::reference()),
    }
}

/// Evaluate a single colocated series document.
fn report_file(path: &Path, criteria: &CriterionTable) -> Result<ReportLine> {
    let series = ColocatedSeries::from_file(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let fractions = evaluate_series(&series, criteria)
        .with_context(|| format!("evaluating {}", path.display()))?;

    info!(
        file = %path.display(),
        variable = %series.model_variable(),
        valid = fractions.valid_count,
        total = fractions.total_count,
        "Evaluated colocated series"
    );

    Ok(ReportLine::from_series(&series, fractions))
}

fn print_lines(lines: &[ReportLine], config: &ReportConfig, header: bool) -> Result<()> {
    match config.format {
        OutputFormat::Text => {
            if header {
                println!("{}", ReportLine::header(&config.delimiter));
            }
            for line in lines {
                println!("{}", line.to_delimited(&config.delimiter));
            }
        }
        OutputFormat::Json => {
            for line in lines {
                println!("{}", line.to_json()?);
            }
        }
    }
    Ok(())
}
