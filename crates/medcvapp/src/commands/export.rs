use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::export::{resume_file_name, DocumentExporter, ExportOptions};
use crate::preview::project;
use crate::store::ResumeStore;

/// Projects the resume and hands it to `exporter`. The file name always comes from the
/// personal details; every other setting comes from `options`.
pub fn run<S: ResumeStore, E: DocumentExporter + ?Sized>(
    store: &S,
    exporter: &E,
    options: ExportOptions,
) -> Result<CmdResult> {
    let resume = store.resume()?;
    let options = options.with_filename(resume_file_name(&resume.personal));
    let document = project(resume);
    let receipt = exporter.export(&document, &options)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} ({} bytes)",
        receipt.path.display(),
        receipt.bytes
    )));
    result.preview = Some(document);
    result.export = Some(receipt);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{ExportReceipt, HtmlFileExporter};
    use crate::preview::PreviewDocument;
    use crate::store::memory::fixtures::StoreFixture;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingExporter {
        calls: RefCell<Vec<ExportOptions>>,
    }

    impl DocumentExporter for RecordingExporter {
        fn export(&self, _: &PreviewDocument, options: &ExportOptions) -> Result<ExportReceipt> {
            self.calls.borrow_mut().push(options.clone());
            Ok(ExportReceipt {
                path: PathBuf::from(&options.filename),
                filename: options.filename.clone(),
                bytes: 0,
            })
        }
    }

    #[test]
    fn exporter_receives_named_options() {
        let store = StoreFixture::new().with_name("Jane", "Doe").build();
        let exporter = RecordingExporter::default();
        run(&store, &exporter, ExportOptions::default()).unwrap();

        let calls = exporter.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].filename, "Jane_Doe_Resume");
        assert_eq!(calls[0].margin, [10.0; 4]);
    }

    #[test]
    fn html_export_lands_in_out_dir() {
        let dir = tempdir().unwrap();
        let store = StoreFixture::new()
            .with_name("Jane", "Doe")
            .with_award("Gold Medal")
            .build();
        let exporter = HtmlFileExporter::new(dir.path());

        let result = run(&store, &exporter, ExportOptions::default()).unwrap();
        let receipt = result.export.unwrap();
        assert_eq!(receipt.path, dir.path().join("Jane_Doe_Resume.html"));
        assert!(receipt.path.exists());
    }
}
