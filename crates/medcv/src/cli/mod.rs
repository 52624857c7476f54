//! # CLI Behavior
//!
//! This is **one possible UI client** for medcv, not the application itself. Everything it
//! knows about the resume it learns through [`medcvapp::api::ResumeApi`].
//!
//! ## Sessions
//!
//! A run of the binary is one editing session. The resume lives in memory for as long as the
//! process does and is gone when it exits; export is the only way out.
//!
//! ### Interactive (`medcv`, `medcv session`)
//!
//! Reads session lines from stdin. When stdin is a terminal a prompt is shown. A line that
//! fails is reported and the session carries on.
//!
//! ### Scripted (`medcv run <script>`)
//!
//! Reads session lines from a file. Blank lines and `#` comments are skipped. The first
//! failing line stops the run and the error names its line number.
//!
//! ## Session Lines
//!
//! ```text
//! personal <field> <value>             set a personal-details field
//! draft <kind> [<field> <value>]       edit (or show) the panel draft for <kind>
//! submit <kind>                        commit the draft
//! edit <kind> <id> <field> <value>     change a committed record
//! remove <kind> <id>                   delete a committed record
//! list [<kind>] [--json]               committed records
//! hobby add|remove <text>              hobbies panel
//! pubtext <line>...                    replace the free-text publication list
//! template <name>                      professional | executive
//! preview | export | options | help | quit
//! ```
//!
//! Values may be wrapped in single or double quotes. Several bare words after a field name
//! are joined with single spaces.
//!
//! ## Module Structure
//!
//! - `commands`: Process entry point, logging and config setup
//! - `handlers`: One function per session command, calling the API
//! - `render`: Output formatting (templates, styles)
//! - `session`: Line tokenizing and the read loop
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling
//! - `templates`: Output templates

mod commands;
mod handlers;
mod render;
mod session;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
