//! # Command Layer
//!
//! Each operation lives in its own submodule as a plain function over a [`ResumeStore`]
//! (and, for panel operations, the [`FormSurface`](crate::forms::FormSurface)).
//!
//! ## What Commands Do
//!
//! - Build the [`Action`](crate::actions::Action) for the operation and dispatch it
//! - Read back whatever the caller will want to show
//! - Return a structured [`CmdResult`]
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: no stdout, stderr, colors or prompts
//! - **Argument parsing**: field names and kinds arrive already typed
//! - **Exit codes**: they return `Result` and let the caller decide
//!
//! The one exception to "no I/O" is [`export`], which hands the preview to a
//! [`DocumentExporter`](crate::export::DocumentExporter) supplied by the caller.
//!
//! ## Testing Strategy
//!
//! Most tests live here, against [`InMemoryStore`](crate::store::memory::InMemoryStore).
//!
//! ## Command Modules
//!
//! - [`add`]: Append a record to its collection
//! - [`update`]: Patch a committed record
//! - [`remove`]: Drop a committed record
//! - [`personal`]: Patch the personal details
//! - [`publications`]: Replace the free-text publication list
//! - [`hobbies`]: Hobbies panel edits mirrored into the store
//! - [`template`]: Pick the layout
//! - [`list`]: Committed records, by kind
//! - [`draft`]: Edit and submit panel drafts
//! - [`preview`]: Project the resume into a document
//! - [`export`]: Write the document through an exporter

use serde::Serialize;

use crate::export::ExportReceipt;
use crate::model::Entry;
use crate::preview::PreviewDocument;

pub mod add;
pub mod draft;
pub mod export;
pub mod hobbies;
pub mod list;
pub mod personal;
pub mod preview;
pub mod publications;
pub mod remove;
pub mod template;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records written by the command, as stored afterwards.
    pub affected: Vec<Entry>,
    /// Records to display.
    pub listed: Vec<Entry>,
    pub preview: Option<PreviewDocument>,
    pub export: Option<ExportReceipt>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, entries: Vec<Entry>) -> Self {
        self.affected = entries;
        self
    }

    pub fn with_listed(mut self, entries: Vec<Entry>) -> Self {
        self.listed = entries;
        self
    }

    /// Id of the first affected record, if any.
    pub fn affected_id(&self) -> Option<&str> {
        self.affected.first().map(|e| e.id())
    }
}
