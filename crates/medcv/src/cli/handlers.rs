//! Session command handlers.
//!
//! [`handle`] takes one parsed [`SessionCommand`], makes the matching API call and renders
//! the result. Handlers return the text to print; the session loop decides where it goes.

use anyhow::Context;
use medcvapp::api::ResumeApi;
use medcvapp::commands::CmdResult;
use medcvapp::export::{ExportOptions, HtmlFileExporter};
use medcvapp::model::Template;
use medcvapp::store::memory::InMemoryStore;

use super::render::Renderer;
use super::setup::{join_words, HobbyAction, SessionCommand};

/// Everything a session works on: the resume, and where and how exports go.
pub struct AppState {
    pub api: ResumeApi<InMemoryStore>,
    pub exporter: HtmlFileExporter,
    pub export_options: ExportOptions,
}

impl AppState {
    pub fn new(
        template: Template,
        exporter: HtmlFileExporter,
        export_options: ExportOptions,
    ) -> anyhow::Result<Self> {
        let mut api = ResumeApi::default();
        if template != Template::default() {
            api.set_template(template)?;
        }
        Ok(Self {
            api,
            exporter,
            export_options,
        })
    }
}

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Output(String),
    Quit,
}

pub fn handle(
    state: &mut AppState,
    renderer: &Renderer,
    command: SessionCommand,
) -> anyhow::Result<Outcome> {
    let api = &mut state.api;
    let text = match command {
        SessionCommand::Personal { field, value } => {
            messages(renderer, api.update_personal_field(&field, &join_words(&value))?)?
        }
        SessionCommand::Draft { kind, field, value } => match field {
            Some(field) => {
                renderer.draft(&api.edit_draft_field(kind, &field, &join_words(&value))?)?
            }
            None => renderer.draft(&api.show_draft(kind))?,
        },
        SessionCommand::Submit { kind } => messages(renderer, api.submit_draft(kind)?)?,
        SessionCommand::Edit {
            kind,
            id,
            field,
            value,
        } => messages(
            renderer,
            api.update_field(kind, &id, &field, &join_words(&value))?,
        )?,
        SessionCommand::Remove { kind, id } => messages(renderer, api.remove(kind, &id)?)?,
        SessionCommand::List { kind, json } => {
            let result = api.list(kind)?;
            if json {
                let mut text = serde_json::to_string_pretty(&result.listed)
                    .context("Failed to serialize records")?;
                text.push('\n');
                text
            } else {
                renderer.list(&result)?
            }
        }
        SessionCommand::Hobby { action } => {
            let result = match action {
                HobbyAction::Add { text } => api.add_hobby(&join_words(&text))?,
                HobbyAction::Remove { text } => api.remove_hobby(&join_words(&text))?,
            };
            messages(renderer, result)?
        }
        SessionCommand::Pubtext { lines } => {
            messages(renderer, api.update_publications_text(lines.join("\n"))?)?
        }
        SessionCommand::Template { name } => messages(renderer, api.set_template_named(&name)?)?,
        SessionCommand::Preview => {
            let result = api.preview()?;
            match &result.preview {
                Some(doc) => renderer.preview(doc, &result.messages)?,
                None => renderer.messages(&result.messages)?,
            }
        }
        SessionCommand::Export => {
            let result = api.export(&state.exporter, state.export_options.clone())?;
            messages(renderer, result)?
        }
        SessionCommand::Options => renderer.options()?,
        SessionCommand::Help => renderer.help()?,
        SessionCommand::Quit => return Ok(Outcome::Quit),
    };
    Ok(Outcome::Output(text))
}

fn messages(renderer: &Renderer, result: CmdResult) -> anyhow::Result<String> {
    Ok(renderer.messages(&result.messages)?)
}
