use thiserror::Error;

use crate::templates::TemplateId;

/// Export-level error taxonomy. Every variant surfaces to the user as a
/// notification; nothing propagates out of the orchestrator as a panic.
#[derive(Debug, Error)]
pub enum ExportError {
    /// String-keyed template lookup missed the registry.
    #[error("Unknown template: {0}")]
    TemplateNotFound(String),

    /// A precondition on the collected resume data failed (recoverable —
    /// the user corrects the form and retries).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A template value reached the renderer that is not the registry entry
    /// for its id. Defensive; unreachable through the public flow.
    #[error("Template '{0}' is not a registry member")]
    InvalidTemplate(TemplateId),

    /// No rasterization collaborator was wired at construction time.
    #[error("PDF rasterizer is not available")]
    RasterizerUnavailable,

    /// The rasterization collaborator failed after being invoked.
    #[error("PDF generation failed: {0}")]
    Generation(#[source] anyhow::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
