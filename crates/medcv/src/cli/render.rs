//! # Rendering Module
//!
//! Turns API results into terminal text. Handlers never format output themselves: they pass a
//! [`CmdResult`] (or a [`PreviewDocument`]) to the [`Renderer`], which shapes it into plain
//! template data and renders one of the templates in `templates/`.
//!
//! ## Color
//!
//! The `style` filter colors text only when stdout supports it, so piped output and test
//! captures stay plain. [`Renderer::with_color`] forces the choice.
//!
//! ## List Layout
//!
//! One record per line: kind (padded to the longest kind name), id, summary. The summary is
//! truncated by display width so a line never exceeds [`LINE_WIDTH`].

use console::Term;
use medcvapp::commands::{CmdMessage, CmdResult};
use medcvapp::ids::ID_LEN;
use medcvapp::model::{Entry, ProfessionalIdType, Proficiency, RecordKind, Template};
use medcvapp::preview::PreviewDocument;
use minijinja::{context, Environment, Error, Value};
use serde_json::json;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::styles;
use super::templates;

pub const LINE_WIDTH: usize = 100;
pub const ELLIPSIS: &str = "…";
pub const PROMPT: &str = "medcv> ";

/// Width of the kind column: the longest kind name.
const COL_KIND: usize = 11;
const COL_ID: usize = ID_LEN;
const COL_GAP: usize = 2;

/// Usage, description pairs shown by `help`.
const HELP_LINES: [(&str, &str); 14] = [
    ("personal <field> <value>", "set a personal-details field"),
    ("draft <kind> [<field> <value>]", "edit the panel draft, or show it"),
    ("submit <kind>", "commit the draft"),
    ("edit <kind> <id> <field> <value>", "change a committed record"),
    ("remove <kind> <id>", "delete a committed record"),
    ("list [<kind>] [--json]", "committed records"),
    ("hobby add <text>", "add a hobby"),
    ("hobby remove <text>", "remove every matching hobby"),
    ("pubtext <line>...", "replace the free-text publication list"),
    ("template <name>", "professional or executive"),
    ("preview", "show the resume as it will be exported"),
    ("export", "write the resume to the export directory"),
    ("options", "values offered for enumerated fields"),
    ("quit", "end the session"),
];

pub struct Renderer {
    env: Environment<'static>,
    use_color: bool,
}

impl Renderer {
    /// Creates a renderer that colors output when stdout supports it.
    pub fn new() -> Result<Self, Error> {
        Self::with_color(Term::stdout().features().colors_supported())
    }

    pub fn with_color(use_color: bool) -> Result<Self, Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_filter("style", move |value: Value, name: String| -> String {
            styles::apply(&name, &value.to_string(), use_color)
        });
        for (name, source) in templates::ALL {
            env.add_template(name, source)?;
        }
        Ok(Self { env, use_color })
    }

    pub fn prompt(&self) -> String {
        styles::apply(styles::names::PROMPT, PROMPT, self.use_color)
    }

    fn render(&self, name: &str, data: Value) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> Result<String, Error> {
        self.render("messages", context! { messages => messages })
    }

    /// A single error line, styled like an error message from the library.
    pub fn error(&self, text: &str) -> Result<String, Error> {
        self.messages(&[CmdMessage::error(text)])
    }

    pub fn list(&self, result: &CmdResult) -> Result<String, Error> {
        let rows: Vec<_> = result.listed.iter().map(list_row).collect();
        self.render(
            "list",
            context! { rows => rows, messages => &result.messages },
        )
    }

    /// The first listed entry as a draft, one field per line.
    pub fn draft(&self, result: &CmdResult) -> Result<String, Error> {
        let (title, fields) = match result.listed.first() {
            Some(entry) => (format!("{} draft", entry.kind()), draft_fields(entry)),
            None => (String::from("draft"), Vec::new()),
        };
        self.render(
            "draft",
            context! { title => title, fields => fields, messages => &result.messages },
        )
    }

    pub fn preview(&self, doc: &PreviewDocument, messages: &[CmdMessage]) -> Result<String, Error> {
        let header = &doc.header;
        let details: Vec<&String> = header
            .organization
            .iter()
            .chain(&header.professional_id)
            .chain(&header.accreditation)
            .chain(&header.contact)
            .collect();
        self.render(
            "preview",
            context! {
                template => doc.template.as_str(),
                header => json!({ "name": header.name, "details": details }),
                sections => &doc.sections,
                messages => messages,
            },
        )
    }

    pub fn options(&self) -> Result<String, Error> {
        let mut tables: Vec<serde_json::Value> = RecordKind::ALL
            .iter()
            .filter_map(|kind| {
                kind.choices().map(|values| {
                    let field = if *kind == RecordKind::Experience {
                        "type"
                    } else {
                        "degree"
                    };
                    json!({
                        "title": kind.title(),
                        "field": format!("draft {} {}", kind, field),
                        "values": values,
                    })
                })
            })
            .collect();
        tables.push(json!({
            "title": "Professional ID Types",
            "field": "personal idType",
            "values": ProfessionalIdType::ALL.iter().map(|t| t.as_str()).collect::<Vec<_>>(),
        }));
        tables.push(json!({
            "title": "Language Proficiency",
            "field": "draft language proficiency",
            "values": Proficiency::ALL.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
        }));
        tables.push(json!({
            "title": "Templates",
            "field": "template",
            "values": Template::ALL.iter().map(|t| t.as_str()).collect::<Vec<_>>(),
        }));
        self.render("options", context! { tables => tables })
    }

    pub fn help(&self) -> Result<String, Error> {
        let width = HELP_LINES.iter().map(|(usage, _)| usage.width()).max().unwrap_or(0);
        let lines: Vec<_> = HELP_LINES
            .iter()
            .map(|(usage, about)| {
                json!({
                    "usage": usage,
                    "pad": " ".repeat(width - usage.width() + COL_GAP),
                    "about": about,
                })
            })
            .collect();
        let kinds: Vec<&str> = RecordKind::ALL.iter().map(|k| k.as_str()).collect();
        self.render("help", context! { lines => lines, kinds => kinds })
    }
}

fn list_row(entry: &Entry) -> serde_json::Value {
    let summary_width = LINE_WIDTH.saturating_sub(COL_KIND + COL_ID + 2 * COL_GAP);
    json!({
        "kind": format!("{:<width$}", entry.kind().as_str(), width = COL_KIND),
        "id": entry.id(),
        "summary": truncate_to_width(&entry.summary(), summary_width),
    })
}

/// Field name and display value for every field of the entry's record, in name order.
fn draft_fields(entry: &Entry) -> Vec<serde_json::Value> {
    let record = serde_json::to_value(entry)
        .ok()
        .and_then(|v| v.get("record").cloned());
    let Some(serde_json::Value::Object(fields)) = record else {
        return Vec::new();
    };
    fields
        .into_iter()
        .map(|(name, value)| {
            let value = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            };
            json!({ "name": name, "value": value })
        })
        .collect()
}

/// Cuts `text` so its display width fits in `width`, marking the cut with [`ELLIPSIS`].
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(ELLIPSIS.width());
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}
