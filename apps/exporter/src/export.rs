//! Export Orchestrator — validates preconditions, renders the selected
//! template, stages the markup, and delegates to the rasterization
//! collaborator.
//!
//! Collaborators are injected at construction time: the notifier is always
//! present (`NullNotifier` models an absent toast UI) and the rasterizer is
//! `Option`al — `None` is the documented unavailable case, reported as a
//! distinct error rather than probed ad hoc at call time.
//!
//! Every failure surfaces as a user-facing notification plus a typed
//! `ExportOutcome`; nothing escapes as a panic. The busy flag and the staging
//! directory are restored/removed on every exit path.

use std::path::PathBuf;
use std::sync::Arc;

use crate::errors::ExportError;
use crate::form::{self, FormState, ResumeData};
use crate::modal::ModalController;
use crate::notify::{Notifier, NotifyKind};
use crate::raster::{RasterizeOptions, Rasterizer};
use crate::render;
use crate::templates::Template;

/// Why an export attempt stopped short of producing an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// An export is already in flight; the triggering control is disabled.
    Busy,
    /// The collected resume has no name (recoverable: fix the form, retry).
    NameRequired,
    /// No rasterization collaborator was wired at construction.
    RasterizerUnavailable,
    /// The collaborator was invoked and failed.
    GenerationFailed,
}

#[derive(Debug)]
pub enum ExportOutcome {
    Completed { path: PathBuf },
    Aborted(AbortReason),
}

pub struct Exporter {
    modal: ModalController,
    notifier: Arc<dyn Notifier>,
    rasterizer: Option<Arc<dyn Rasterizer>>,
    output_dir: PathBuf,
    in_progress: bool,
}

impl Exporter {
    pub fn new(
        notifier: Arc<dyn Notifier>,
        rasterizer: Option<Arc<dyn Rasterizer>>,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            modal: ModalController::new(),
            notifier,
            rasterizer,
            output_dir,
            in_progress: false,
        }
    }

    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut ModalController {
        &mut self.modal
    }

    pub fn is_busy(&self) -> bool {
        self.in_progress
    }

    /// The single export entry point, triggered by the user's confirm action.
    pub async fn export_directly(&mut self, form: &dyn FormState) -> ExportOutcome {
        if self.in_progress {
            return ExportOutcome::Aborted(AbortReason::Busy);
        }

        let data = form::collect(form);

        if let Err(err) = validate(&data) {
            tracing::debug!(error = %err, "export precondition failed");
            self.notifier
                .notify("Please enter your name before exporting.", NotifyKind::Error);
            self.modal.close();
            self.modal.focus_name_field();
            return ExportOutcome::Aborted(AbortReason::NameRequired);
        }

        let template = self.modal.selected();

        // Busy affordance: disables re-entrant export requests for the
        // duration of the single outstanding rasterization.
        self.in_progress = true;
        let result = self.run_export(&data, template).await;
        self.in_progress = false;

        match result {
            Ok(path) => {
                tracing::info!(?path, template = %template.id, "resume exported");
                self.notifier
                    .notify("Resume exported successfully!", NotifyKind::Success);
                self.modal.close();
                ExportOutcome::Completed { path }
            }
            Err(ExportError::RasterizerUnavailable) => {
                self.notifier.notify(
                    "PDF library not loaded. Please refresh and try again.",
                    NotifyKind::Error,
                );
                ExportOutcome::Aborted(AbortReason::RasterizerUnavailable)
            }
            Err(err) => {
                tracing::error!(error = %err, "PDF generation error");
                self.notifier
                    .notify("Error generating PDF. Please try again.", NotifyKind::Error);
                ExportOutcome::Aborted(AbortReason::GenerationFailed)
            }
        }
    }

    /// Renders, stages, and rasterizes. The staging directory is a tempdir
    /// dropped when this returns, so cleanup runs on success and failure alike.
    async fn run_export(
        &self,
        data: &ResumeData,
        template: &'static Template,
    ) -> Result<PathBuf, ExportError> {
        let markup = render::render(data, template)?;

        let staging = tempfile::tempdir()?;
        let html_path = staging.path().join("resume.html");
        tokio::fs::write(&html_path, page_shell(&markup)).await?;

        let rasterizer = self
            .rasterizer
            .as_ref()
            .ok_or(ExportError::RasterizerUnavailable)?;

        let filename = format!(
            "{}_Resume_{}.{}",
            sanitize_name(&data.name),
            template.name,
            rasterizer.extension()
        );
        let opts = RasterizeOptions::export_defaults(filename, self.output_dir.clone());

        rasterizer
            .rasterize(&html_path, &opts)
            .await
            .map_err(ExportError::Generation)
    }
}

/// The only export precondition: a non-empty name.
fn validate(data: &ResumeData) -> Result<(), ExportError> {
    if data.name.is_empty() {
        return Err(ExportError::Validation("name is required".to_string()));
    }
    Ok(())
}

/// Collapses whitespace runs in the user's name into underscores for the
/// artifact filename.
fn sanitize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Wraps the rendered fragment in a complete page document — the staged,
/// off-screen container handed to the rasterizer.
fn page_shell(markup: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head>\
         <body style=\"margin:0;\">\
         <div id=\"pdf-export-container\" style=\"width:700px;\">{markup}</div>\
         </body></html>"
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
