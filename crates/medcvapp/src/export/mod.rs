//! # Export
//!
//! Exporting hands the current [`PreviewDocument`] to a [`DocumentExporter`] together with the
//! page settings in [`ExportOptions`]. The library ships one exporter, [`HtmlFileExporter`],
//! which writes a print-ready HTML file; anything that can turn a preview into a file (a PDF
//! rasterizer, a browser print call) can implement the trait instead.
//!
//! ## File Names
//!
//! The exported file is named `{firstName}_{lastName}_Resume`. Characters other than ASCII
//! letters, digits, `-` and `_` become `_`. Blank name parts are skipped, so a resume with no
//! name at all is simply `Resume`.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{ResumeError, Result};
use crate::model::PersonalDetails;
use crate::preview::PreviewDocument;

pub mod html;

pub use html::HtmlFileExporter;

pub const FILE_SUFFIX: &str = "Resume";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = ResumeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" | "p" => Ok(Orientation::Portrait),
            "landscape" | "l" => Ok(Orientation::Landscape),
            other => Err(ResumeError::InvalidValue {
                field: "orientation".to_string(),
                reason: format!("'{}' is not portrait or landscape", other),
            }),
        }
    }
}

/// Page and raster settings handed to the exporter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportOptions {
    /// Top, right, bottom, left, in `unit`.
    pub margin: [f64; 4],
    /// File name without extension.
    pub filename: String,
    pub image_type: String,
    pub image_quality: f64,
    pub scale: f64,
    pub unit: String,
    pub format: String,
    pub orientation: Orientation,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            margin: [10.0; 4],
            filename: FILE_SUFFIX.to_string(),
            image_type: "jpeg".to_string(),
            image_quality: 0.98,
            scale: 2.0,
            unit: "mm".to_string(),
            format: "a4".to_string(),
            orientation: Orientation::Portrait,
        }
    }
}

impl ExportOptions {
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// CSS `@page` size, e.g. `a4 portrait`.
    pub fn page_size(&self) -> String {
        format!("{} {}", self.format, self.orientation)
    }

    /// CSS `@page` margin, e.g. `10mm 10mm 10mm 10mm`.
    pub fn page_margin(&self) -> String {
        self.margin
            .iter()
            .map(|m| format!("{}{}", m, self.unit))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportReceipt {
    pub path: PathBuf,
    pub filename: String,
    pub bytes: usize,
}

pub trait DocumentExporter {
    fn export(&self, preview: &PreviewDocument, options: &ExportOptions) -> Result<ExportReceipt>;
}

/// `{firstName}_{lastName}_Resume`, sanitized.
pub fn resume_file_name(personal: &PersonalDetails) -> String {
    [
        personal.first_name.as_str(),
        personal.last_name.as_str(),
        FILE_SUFFIX,
    ]
    .iter()
    .map(|part| sanitize(part))
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join("_")
}

fn sanitize(part: &str) -> String {
    part.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
