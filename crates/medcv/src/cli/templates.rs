//! # CLI Templates Module
//!
//! Terminal output is rendered from minijinja templates kept in `templates/` as separate
//! files, so they can be edited and diffed without touching Rust code. They are embedded here
//! as string constants and registered by name in [`Renderer`](super::render::Renderer).
//!
//! The environment runs with `trim_blocks` and `lstrip_blocks`: a block tag on its own line
//! produces no output line. Every line a template prints is therefore visible in the source.
//!
//! Anything beyond picking what to print (column widths, truncation, flattening a record into
//! fields) is done in Rust before the data reaches the template.

pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.jinja");
pub const LIST_TEMPLATE: &str = include_str!("templates/list.jinja");
pub const DRAFT_TEMPLATE: &str = include_str!("templates/draft.jinja");
pub const PREVIEW_TEMPLATE: &str = include_str!("templates/preview.jinja");
pub const OPTIONS_TEMPLATE: &str = include_str!("templates/options.jinja");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.jinja");

/// Name and source of every template, for registration.
pub const ALL: [(&str, &str); 6] = [
    ("messages", MESSAGES_TEMPLATE),
    ("list", LIST_TEMPLATE),
    ("draft", DRAFT_TEMPLATE),
    ("preview", PREVIEW_TEMPLATE),
    ("options", OPTIONS_TEMPLATE),
    ("help", HELP_TEMPLATE),
];
