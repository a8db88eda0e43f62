mod catalog;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::{error, info, warn};

use crate::catalog::RubricCatalog;
use crate::pipeline::ExportInputs;
use crate::pipeline::stage1_validate::ExportError;
use crate::pipeline::stage3_table::to_row;
use crate::pipeline::stage4_document::{RenderError, render};
use crate::pipeline::stage5_write::{TableFormat, artifact_stem, write_document, write_table};
use crate::report::backend::BackendRegistry;
use crate::report::json::render_catalog_json;

#[derive(Debug, Parser)]
#[command(
    name = "pharm-review",
    about = "Score and export clinical pharmacist performance assessments"
)]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Export one assessment as a table row and a formatted report
    Run(RunArgs),
    /// Print the rubric catalog and rating scale as JSON
    Catalog {
        /// Catalog JSON to use instead of the built-in rubric
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Assessment record (JSON with info, ratings, narratives)
    #[arg(long)]
    input: PathBuf,

    /// Output directory
    #[arg(long)]
    out: PathBuf,

    /// Catalog JSON to use instead of the built-in rubric
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = TableFormat::Csv)]
    table_format: TableFormat,

    /// Report backend name (html, text)
    #[arg(long, default_value = "html")]
    document_format: String,
}

/// What a `run` produced. `document` is `None` when the report was skipped.
#[derive(Debug)]
struct RunOutcome {
    table: PathBuf,
    document: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(err) = run(cli.command) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Run(args) => {
            let registry = BackendRegistry::builtin();
            let outcome = run_export(&args, &registry)?;
            match outcome.document {
                Some(doc) => info!(
                    table = %outcome.table.display(),
                    document = %doc.display(),
                    "export complete"
                ),
                None => info!(table = %outcome.table.display(), "export complete without report"),
            }
            Ok(())
        }
        Command::Catalog { catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            let json = render_catalog_json(&catalog).map_err(|e| e.to_string())?;
            println!("{json}");
            Ok(())
        }
    }
}

fn load_catalog(path: Option<&Path>) -> Result<RubricCatalog, String> {
    let catalog = match path {
        Some(path) => catalog::load_from_path(path),
        None => catalog::load(),
    }
    .map_err(|e| e.to_string())?;
    info!(
        version = catalog.version(),
        domains = catalog.domains().len(),
        items = catalog.total_items(),
        "catalog loaded"
    );
    Ok(catalog)
}

fn run_export(args: &RunArgs, registry: &BackendRegistry) -> Result<RunOutcome, String> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let record = input::load_record(&args.input).map_err(|e| e.to_string())?;
    let inputs = ExportInputs::new(&record, &catalog);
    let stem = artifact_stem(&record.info);

    let row = to_row(&inputs).map_err(|e| e.to_string())?;
    let table = write_table(&args.out, &stem, &row, args.table_format)
        .map_err(|e| format!("cannot write table export: {e}"))?;

    let document = match render(&inputs, registry, &args.document_format) {
        Ok(doc) => Some(
            write_document(&args.out, &stem, &doc)
                .map_err(|e| format!("cannot write report document: {e}"))?,
        ),
        Err(err @ RenderError::BackendUnavailable { .. }) => {
            warn!("{err}; choose one with --document-format. The table export was still written.");
            None
        }
        Err(RenderError::Export(ExportError::NotAttested)) => {
            warn!(
                "report skipped: {}. The table export was still written.",
                ExportError::NotAttested
            );
            None
        }
        Err(err) => return Err(err.to_string()),
    };

    Ok(RunOutcome { table, document })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
