use chrono::Local;
use minijinja::{context, Environment};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::{DocumentExporter, ExportOptions, ExportReceipt};
use crate::error::Result;
use crate::model::Template;
use crate::preview::PreviewDocument;

const PROFESSIONAL: &str = include_str!("templates/professional.html");
const EXECUTIVE: &str = include_str!("templates/executive.html");

/// Writes the preview as a standalone HTML document into `out_dir`.
///
/// Page size, orientation and margins go into the `@page` rule. The raster settings have no
/// meaning for HTML itself and are carried as `<meta>` tags for whatever prints the file.
#[derive(Debug, Clone)]
pub struct HtmlFileExporter {
    out_dir: PathBuf,
}

impl HtmlFileExporter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn render(&self, preview: &PreviewDocument, options: &ExportOptions) -> Result<String> {
        let mut env = Environment::new();
        env.add_template("professional.html", PROFESSIONAL)?;
        env.add_template("executive.html", EXECUTIVE)?;

        let name = match preview.template {
            Template::Professional => "professional.html",
            Template::Executive => "executive.html",
        };
        let template = env.get_template(name)?;
        let html = template.render(context! {
            doc => preview,
            options => options,
            page_size => options.page_size(),
            page_margin => options.page_margin(),
            generated => Local::now().format("%Y-%m-%d").to_string(),
        })?;
        Ok(html)
    }
}

impl DocumentExporter for HtmlFileExporter {
    fn export(&self, preview: &PreviewDocument, options: &ExportOptions) -> Result<ExportReceipt> {
        let html = self.render(preview, options)?;

        fs::create_dir_all(&self.out_dir)?;
        let filename = format!("{}.html", options.filename);
        let path = self.out_dir.join(&filename);
        fs::write(&path, &html)?;

        info!(path = %path.display(), template = %preview.template, "exported resume");
        Ok(ExportReceipt {
            path,
            filename,
            bytes: html.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::model::{AwardRecord, Entry, PersonalDetailsPatch, Resume};
    use crate::preview::project;
    use tempfile::tempdir;

    fn sample(template: Template) -> PreviewDocument {
        let mut resume = Resume::default();
        resume.apply(Action::UpdatePersonalDetails(PersonalDetailsPatch {
            first_name: Some("Jane".into()),
            last_name: Some("Doe".into()),
            ..Default::default()
        }));
        resume.apply(Action::Add(Entry::Award(AwardRecord {
            title: "Gold <Medal>".into(),
            ..Default::default()
        })));
        resume.apply(Action::SetTemplate(template));
        project(&resume)
    }

    #[test]
    fn writes_named_file_with_page_rule() {
        let dir = tempdir().unwrap();
        let exporter = HtmlFileExporter::new(dir.path().join("out"));
        let options = ExportOptions::default().with_filename("Jane_Doe_Resume");

        let receipt = exporter
            .export(&sample(Template::Professional), &options)
            .unwrap();

        assert_eq!(receipt.filename, "Jane_Doe_Resume.html");
        let html = fs::read_to_string(&receipt.path).unwrap();
        assert_eq!(html.len(), receipt.bytes);
        assert!(html.contains("size: a4 portrait"));
        assert!(html.contains("margin: 10mm 10mm 10mm 10mm"));
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("Awards &amp; Honors"));
    }

    #[test]
    fn record_text_is_escaped() {
        let exporter = HtmlFileExporter::new(".");
        let html = exporter
            .render(&sample(Template::Professional), &ExportOptions::default())
            .unwrap();
        assert!(html.contains("Gold &lt;Medal&gt;"));
        assert!(!html.contains("Gold <Medal>"));
    }

    #[test]
    fn executive_layout_is_selected_by_template() {
        let exporter = HtmlFileExporter::new(".");
        let html = exporter
            .render(&sample(Template::Executive), &ExportOptions::default())
            .unwrap();
        assert!(html.contains("template-executive"));
        assert!(!html.contains("template-professional"));
    }

    #[test]
    fn blank_heading_renders_no_heading_div() {
        let mut resume = Resume::default();
        resume.apply(Action::Add(Entry::Award(AwardRecord {
            organization: "WHO".into(),
            ..Default::default()
        })));
        let doc = project(&resume);
        let exporter = HtmlFileExporter::new(".");
        for template in Template::ALL {
            let mut doc = doc.clone();
            doc.template = template;
            let html = exporter.render(&doc, &ExportOptions::default()).unwrap();
            assert!(html.contains("WHO"));
            assert!(!html.contains(r#"<div class="heading"></div>"#));
        }
    }
}
