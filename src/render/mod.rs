//! Panel rendering and export
//!
//! Draws a finished `PanelLayout` to PNG or PDF. Renderers only map panel
//! units to device space; every label decision is already in the layout.

pub mod pdf;
pub mod png;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PanelError, PanelResult};
use crate::models::PanelLayout;

pub use pdf::render_pdf;
pub use png::render_png;

/// Physical page the panel is drawn on
pub const PAGE_WIDTH_IN: f64 = 8.0;
pub const PAGE_HEIGHT_IN: f64 = 14.0;

pub const DEFAULT_DPI: u32 = 300;
/// Accepted raster resolutions
pub const DPI_RANGE: std::ops::RangeInclusive<u32> = 72..=600;

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "pdf" => Some(ExportFormat::Pdf),
            _ => None,
        }
    }

    /// Pick a format from a file path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_str)
    }
}

/// Rendering options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Raster resolution; ignored by the PDF renderer
    pub dpi: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { dpi: DEFAULT_DPI }
    }
}

impl RenderOptions {
    /// Options for a caller-supplied resolution, rejected outside `DPI_RANGE`
    pub fn with_dpi(dpi: u32) -> PanelResult<Self> {
        if !DPI_RANGE.contains(&dpi) {
            return Err(PanelError::InvalidResolution(dpi));
        }
        Ok(Self { dpi })
    }

    /// Raster size in pixels for the page at this resolution
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = self.dpi.max(1) as f64;
        (
            (PAGE_WIDTH_IN * dpi).round() as u32,
            (PAGE_HEIGHT_IN * dpi).round() as u32,
        )
    }
}

/// Result of writing a rendered panel to disk
#[derive(Debug, Clone, Serialize)]
pub struct ExportedFile {
    pub file_path: String,
    pub format: ExportFormat,
    pub mime_type: &'static str,
    pub bytes_written: usize,
}

/// File name for an exported panel, e.g. "My_Product_NFP.png"
pub fn export_file_name(product_name: &str, format: ExportFormat) -> String {
    let stem: String = product_name
        .trim()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();

    let stem = if stem.is_empty() {
        tracing::warn!("Product name '{}' has no usable file name characters", product_name);
        "nutrition".to_string()
    } else {
        stem
    };

    format!("{}_NFP.{}", stem, format.extension())
}

/// Render a layout to bytes in the requested format
pub fn render_panel(layout: &PanelLayout, format: ExportFormat, options: &RenderOptions) -> PanelResult<Vec<u8>> {
    match format {
        ExportFormat::Png => render_png(layout, options),
        ExportFormat::Pdf => render_pdf(layout),
    }
}

/// Render a layout and write it to `path`, creating parent directories
pub fn export_panel(
    layout: &PanelLayout,
    format: ExportFormat,
    options: &RenderOptions,
    path: &Path,
) -> PanelResult<ExportedFile> {
    let bytes = render_panel(layout, format, options)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes)?;
    writer.flush()?;

    tracing::info!("Exported {} panel to {} ({} bytes)", format.extension(), path.display(), bytes.len());

    Ok(ExportedFile {
        file_path: path.display().to_string(),
        format,
        mime_type: format.mime_type(),
        bytes_written: bytes.len(),
    })
}

pub(crate) fn render_error(e: impl std::fmt::Display) -> PanelError {
    PanelError::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("My Product", ExportFormat::Png), "My_Product_NFP.png");
        assert_eq!(export_file_name("Oat Bar / Honey", ExportFormat::Pdf), "Oat_Bar__Honey_NFP.pdf");
        assert_eq!(export_file_name("  ", ExportFormat::Png), "nutrition_NFP.png");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(ExportFormat::from_str("PNG"), Some(ExportFormat::Png));
        assert_eq!(ExportFormat::from_str("pdf"), Some(ExportFormat::Pdf));
        assert_eq!(ExportFormat::from_str("svg"), None);
        assert_eq!(ExportFormat::from_path(Path::new("out/label.pdf")), Some(ExportFormat::Pdf));
        assert_eq!(ExportFormat::from_path(Path::new("label")), None);
    }

    #[test]
    fn test_with_dpi_bounds() {
        assert_eq!(RenderOptions::with_dpi(72).unwrap().dpi, 72);
        assert_eq!(RenderOptions::with_dpi(600).unwrap().dpi, 600);

        let err = RenderOptions::with_dpi(5000).unwrap_err();
        assert!(matches!(err, PanelError::InvalidResolution(5000)));
        assert!(err.is_user_error());
        assert!(RenderOptions::with_dpi(0).is_err());
    }

    #[test]
    fn test_pixel_size() {
        assert_eq!(RenderOptions::default().pixel_size(), (2400, 4200));
        assert_eq!(RenderOptions { dpi: 72 }.pixel_size(), (576, 1008));
    }
}
