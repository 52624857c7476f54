//! # Configuration
//!
//! Medcv configuration is derived with [`confique`] and resolved in layers:
//!
//! 1. **Environment variables**: `MEDCV_TEMPLATE`, `MEDCV_EXPORT_DIR`, `MEDCV_PAGE_FORMAT`, ...
//! 2. **Config file**: `medcv.toml` in the OS config directory (via `directories`).
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! Command-line flags of the terminal client sit on top of all three.
//!
//! ## Available Settings
//!
//! | Key | Default | Env |
//! |-----|---------|-----|
//! | `template` | `professional` | `MEDCV_TEMPLATE` |
//! | `export.output_dir` | `.` | `MEDCV_EXPORT_DIR` |
//! | `export.margin` | `10` | `MEDCV_PAGE_MARGIN` |
//! | `export.unit` | `mm` | `MEDCV_PAGE_UNIT` |
//! | `export.format` | `a4` | `MEDCV_PAGE_FORMAT` |
//! | `export.orientation` | `portrait` | `MEDCV_PAGE_ORIENTATION` |
//! | `export.image_type` | `jpeg` | |
//! | `export.image_quality` | `0.98` | |
//! | `export.scale` | `2` | |
//!
//! Only settings live here. The resume itself is never written to disk.

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ResumeError, Result};
use crate::export::{ExportOptions, Orientation};
use crate::model::Template;

pub const CONFIG_FILE: &str = "medcv.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MedcvConfig {
    /// Layout used until the session picks another one.
    #[config(default = "professional", env = "MEDCV_TEMPLATE")]
    pub template: String,

    #[config(nested)]
    pub export: ExportSettings,
}

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExportSettings {
    /// Directory exported files are written to.
    #[config(default = ".", env = "MEDCV_EXPORT_DIR")]
    pub output_dir: PathBuf,

    /// Margin on every side, in `unit`.
    #[config(default = 10.0, env = "MEDCV_PAGE_MARGIN")]
    pub margin: f64,

    #[config(default = "mm", env = "MEDCV_PAGE_UNIT")]
    pub unit: String,

    #[config(default = "a4", env = "MEDCV_PAGE_FORMAT")]
    pub format: String,

    #[config(default = "portrait", env = "MEDCV_PAGE_ORIENTATION")]
    pub orientation: String,

    #[config(default = "jpeg")]
    pub image_type: String,

    #[config(default = 0.98)]
    pub image_quality: f64,

    #[config(default = 2.0)]
    pub scale: f64,
}

impl Default for MedcvConfig {
    fn default() -> Self {
        Self {
            template: Template::default().to_string(),
            export: ExportSettings::default(),
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        let options = ExportOptions::default();
        Self {
            output_dir: PathBuf::from("."),
            margin: options.margin[0],
            unit: options.unit,
            format: options.format,
            orientation: options.orientation.to_string(),
            image_type: options.image_type,
            image_quality: options.image_quality,
            scale: options.scale,
        }
    }
}

impl MedcvConfig {
    /// Loads env over `path` (or the default config file) over compiled defaults.
    /// A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path.map(Path::to_path_buf).or_else(default_path) {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| ResumeError::Config(e.to_string()))
    }

    pub fn template(&self) -> Result<Template> {
        self.template.parse()
    }
}

impl ExportSettings {
    /// Page settings for the exporter. The file name is filled in per export.
    pub fn options(&self) -> Result<ExportOptions> {
        if !(0.0..=1.0).contains(&self.image_quality) {
            return Err(ResumeError::Config(format!(
                "export.image_quality must be between 0 and 1, got {}",
                self.image_quality
            )));
        }
        Ok(ExportOptions {
            margin: [self.margin; 4],
            unit: self.unit.clone(),
            format: self.format.clone(),
            orientation: self.orientation.parse::<Orientation>()?,
            image_type: self.image_type.clone(),
            image_quality: self.image_quality,
            scale: self.scale,
            ..ExportOptions::default()
        })
    }
}

/// `medcv.toml` in the platform config directory, if the platform has one.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "medcv", "medcv").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}
