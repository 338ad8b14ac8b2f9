mod config;
mod errors;
mod export;
mod form;
mod modal;
mod notify;
mod raster;
mod render;
mod templates;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::{ExportOutcome, Exporter};
use crate::form::JsonFormState;
use crate::notify::TracingNotifier;
use crate::raster::{Rasterizer, WkhtmltopdfRasterizer};

#[derive(Parser)]
#[command(name = "exporter", about = "Resume PDF export engine", version)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// List the template catalog.
    Templates,
    /// Render the resume as HTML to stdout.
    Render {
        /// JSON file holding the form state.
        #[arg(long)]
        data: PathBuf,
        /// Template id (modern, minimal, professional, creative).
        #[arg(long, default_value = "modern")]
        template: String,
    },
    /// Export the resume as a PDF artifact.
    Export {
        /// JSON file holding the form state.
        #[arg(long)]
        data: PathBuf,
        /// Template id (modern, minimal, professional, creative).
        #[arg(long, default_value = "modern")]
        template: String,
        /// Output directory (overrides OUTPUT_DIR).
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        CliCommand::Templates => {
            for t in templates::all() {
                println!("{:<14} {} {} — {}", t.id.to_string(), t.icon, t.name, t.description);
            }
        }
        CliCommand::Render { data, template } => {
            let form = load_form(&data)?;
            let template = templates::lookup(&template)?;
            let resume = crate::form::collect(&form);
            let html = render::render(&resume, template)?;
            println!("{html}");
        }
        CliCommand::Export {
            data,
            template,
            out,
        } => {
            let form = load_form(&data)?;
            let output_dir = out.unwrap_or_else(|| config.output_dir.clone());

            // Collaborator availability is decided here, once, not probed
            // again during the export.
            let rasterizer: Option<Arc<dyn Rasterizer>> =
                match WkhtmltopdfRasterizer::detect(config.wkhtmltopdf_bin.as_deref()) {
                    Some(r) => Some(Arc::new(r)),
                    None => {
                        warn!("wkhtmltopdf not found; export will report it as unavailable");
                        None
                    }
                };

            let mut exporter = Exporter::new(Arc::new(TracingNotifier), rasterizer, output_dir);
            exporter.modal_mut().open();
            exporter.modal_mut().select_template(&template);
            templates::lookup(&template)?; // fail fast on unknown ids

            match exporter.export_directly(&form).await {
                ExportOutcome::Completed { path } => {
                    info!("wrote {}", path.display());
                }
                ExportOutcome::Aborted(reason) => {
                    anyhow::bail!("export aborted: {reason:?}");
                }
            }
        }
    }

    Ok(())
}

fn load_form(path: &PathBuf) -> Result<JsonFormState> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read form state from {}", path.display()))?;
    JsonFormState::from_str(&raw).context("form state file is not valid JSON")
}
