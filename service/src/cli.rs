//! Command-line interface for template generation.
//!
//! One subcommand, `create-template`, covers the whole workflow: load a
//! schema, optionally cut it down to a single risk component, and write
//! the XLSX template. Global flags control logging verbosity and an
//! optional configuration file.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rdls_core::error::Result;

use crate::codelist::CodelistRegistry;
use crate::config::{self, TemplateConfig};
use crate::generator::TemplateGenerator;
use crate::parser;

/// Spreadsheet template generator for the Risk Data Library Standard
#[derive(Parser, Debug)]
#[command(name = "rdls-template", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Create an XLSX template from a JSON schema
    CreateTemplate {
        /// Schema file path
        #[arg(short, long)]
        schema: PathBuf,

        /// Restrict the template to one risk component
        #[arg(short, long)]
        component: Option<String>,

        /// Directory the template is written to
        #[arg(short, long, default_value = "templates")]
        output_dir: PathBuf,

        /// Directory of codelist CSV files backing open-codelist dropdowns
        #[arg(long)]
        codelists: Option<PathBuf>,

        /// Replace the output file when it already exists
        #[arg(long)]
        overwrite: bool,
    },
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// # Errors
    ///
    /// Returns an `RdlsError` when configuration, schema loading, or
    /// template generation fails.
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let config = match &self.config {
            Some(path) => config::load_config(path)?,
            None => TemplateConfig::default(),
        };

        match &self.command {
            Commands::CreateTemplate {
                schema,
                component,
                output_dir,
                codelists,
                overwrite,
            } => create_template(
                &config,
                schema,
                component.as_deref(),
                output_dir,
                codelists.as_deref(),
                *overwrite,
            ),
        }
    }

    fn init_logging(&self) {
        let level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        // try_init keeps repeated invocations in one process harmless
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    }
}

fn create_template(
    config: &TemplateConfig,
    schema_path: &Path,
    component: Option<&str>,
    output_dir: &Path,
    codelists: Option<&Path>,
    overwrite: bool,
) -> Result<()> {
    let mut schema = parser::load_schema(schema_path)?;
    if let Some(component) = component {
        parser::select_component(&mut schema, component, &config.components)?;
    }

    let codelists = match codelists {
        Some(dir) => CodelistRegistry::from_dir(dir)?,
        None => CodelistRegistry::empty(),
    };

    let sheets = crate::build_template_sheets(config, &schema)?;

    let file_name = format!("{}.xlsx", component.unwrap_or("full"));
    let output_path = output_dir.join(file_name);

    let generator = TemplateGenerator::new(config, &codelists);
    generator.generate_file(&sheets, &output_path, overwrite)?;

    info!(
        "Wrote {} worksheet(s) to {}",
        sheets.len(),
        output_path.display()
    );
    println!(
        "{} Created {}",
        "✓".green().bold(),
        output_path.display()
    );
    Ok(())
}

/// Parse arguments and run, mapping failures to a process exit code.
#[must_use]
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
