//! # Medcv CLI Architecture
//!
//! The binary is thin: the terminal client lives in `src/cli/`, and this file only calls
//! `cli::run()` and turns a failure into an exit code.
//!
//! ## Workspace Structure
//!
//! - `crates/medcvapp/`: UI-agnostic library: records, store, drafts, preview, export
//! - `crates/medcv/`: this terminal client
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/medcv/src/cli/)                          │
//! │  - clap parsing of process args and session lines           │
//! │  - Session loop over stdin or a script file                 │
//! │  - Terminal rendering via minijinja templates               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/medcvapp/src/api.rs)                     │
//! │  - Field names → typed patches, names → enums               │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is the presentation layer: each line it reads is one input event, exactly like
//! a keystroke or a button press would be in a graphical client. Everything the session shows
//! comes back from the API as data and is rendered here.
//!
//! ## Testing Approach
//!
//! - Library behaviour is tested in `medcvapp`.
//! - Line tokenizing and session dispatch are unit tested in `cli/`.
//! - `tests/` drives the real binary with `assert_cmd`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
