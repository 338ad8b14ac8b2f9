#![allow(dead_code)]

//! Rasterization collaborator — converts staged HTML into a downloadable PDF.
//!
//! The orchestrator depends only on the `Rasterizer` trait; availability is
//! decided once at construction (`WkhtmltopdfRasterizer::detect`) rather than
//! probed at call time. The concrete implementation shells out to
//! `wkhtmltopdf`, mapping the fixed page configuration to CLI flags.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use tokio::process::Command;

/// Fixed page/margin/quality configuration for an export run.
#[derive(Debug, Clone)]
pub struct RasterizeOptions {
    /// Margins in inches: top, right, bottom, left.
    pub margins_in: [f32; 4],
    /// Output filename (no directory component).
    pub filename: String,
    /// JPEG quality for rasterized images, 0.0–1.0.
    pub image_quality: f32,
    /// Raster scale factor applied before PDF assembly.
    pub scale: u8,
    pub page_format: PageFormat,
    pub orientation: Orientation,
    /// Destination directory for the finished artifact.
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    Letter,
    A4,
}

impl PageFormat {
    fn flag(&self) -> &'static str {
        match self {
            PageFormat::Letter => "Letter",
            PageFormat::A4 => "A4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    fn flag(&self) -> &'static str {
        match self {
            Orientation::Portrait => "Portrait",
            Orientation::Landscape => "Landscape",
        }
    }
}

impl RasterizeOptions {
    /// The export defaults: 0.4" margins, JPEG quality 0.98, scale 2,
    /// US letter, portrait.
    pub fn export_defaults(filename: String, output_dir: PathBuf) -> Self {
        Self {
            margins_in: [0.4, 0.4, 0.4, 0.4],
            filename,
            image_quality: 0.98,
            scale: 2,
            page_format: PageFormat::Letter,
            orientation: Orientation::Portrait,
            output_dir,
        }
    }
}

/// The external rasterization capability. Implementations must resolve with
/// the path of the finished artifact or fail with context; the orchestrator
/// maps failures to its own error taxonomy.
#[async_trait]
pub trait Rasterizer: Send + Sync {
    async fn rasterize(&self, html_path: &Path, opts: &RasterizeOptions) -> Result<PathBuf>;

    /// File extension of produced artifacts (used in filename derivation).
    fn extension(&self) -> &'static str {
        "pdf"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// wkhtmltopdf backend
// ────────────────────────────────────────────────────────────────────────────

/// Rasterizer backed by the `wkhtmltopdf` binary.
pub struct WkhtmltopdfRasterizer {
    binary: PathBuf,
}

impl WkhtmltopdfRasterizer {
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }

    /// Feature detection, performed once at construction time: an explicit
    /// override path wins; otherwise the binary is resolved from `PATH`.
    /// Returns `None` when the collaborator is unavailable.
    pub fn detect(override_path: Option<&Path>) -> Option<Self> {
        if let Some(path) = override_path {
            return path.is_file().then(|| Self::new(path.to_path_buf()));
        }
        find_in_path("wkhtmltopdf").map(Self::new)
    }
}

#[async_trait]
impl Rasterizer for WkhtmltopdfRasterizer {
    async fn rasterize(&self, html_path: &Path, opts: &RasterizeOptions) -> Result<PathBuf> {
        let output = opts.output_dir.join(&opts.filename);
        let [top, right, bottom, left] = opts.margins_in;
        let quality = ((opts.image_quality * 100.0).round() as u32).min(100);

        let status = Command::new(&self.binary)
            .arg("--page-size")
            .arg(opts.page_format.flag())
            .arg("--orientation")
            .arg(opts.orientation.flag())
            .arg("--margin-top")
            .arg(format!("{top}in"))
            .arg("--margin-right")
            .arg(format!("{right}in"))
            .arg("--margin-bottom")
            .arg(format!("{bottom}in"))
            .arg("--margin-left")
            .arg(format!("{left}in"))
            .arg("--image-quality")
            .arg(quality.to_string())
            .arg("--zoom")
            .arg(opts.scale.to_string())
            .arg("--quiet")
            .arg(html_path)
            .arg(&output)
            .output()
            .await
            .with_context(|| format!("failed to spawn {}", self.binary.display()))?;

        if !status.status.success() {
            let stderr = String::from_utf8_lossy(&status.stderr);
            return Err(anyhow!(
                "wkhtmltopdf exited with {}: {}",
                status.status,
                stderr.trim()
            ));
        }

        Ok(output)
    }
}

fn find_in_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_defaults_match_fixed_configuration() {
        let opts = RasterizeOptions::export_defaults("x.pdf".into(), PathBuf::from("."));
        assert_eq!(opts.margins_in, [0.4, 0.4, 0.4, 0.4]);
        assert!((opts.image_quality - 0.98).abs() < f32::EPSILON);
        assert_eq!(opts.scale, 2);
        assert_eq!(opts.page_format, PageFormat::Letter);
        assert_eq!(opts.orientation, Orientation::Portrait);
    }

    #[test]
    fn test_detect_with_missing_override_is_none() {
        let detected =
            WkhtmltopdfRasterizer::detect(Some(Path::new("/nonexistent/wkhtmltopdf")));
        assert!(detected.is_none());
    }

    #[test]
    fn test_detect_with_existing_override_uses_it() {
        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join("wkhtmltopdf");
        std::fs::write(&fake, "#!/bin/sh\n").unwrap();
        let detected = WkhtmltopdfRasterizer::detect(Some(&fake)).unwrap();
        assert_eq!(detected.binary, fake);
    }
}
