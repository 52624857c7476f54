//! # Medcv Architecture
//!
//! Medcv is a **UI-agnostic resume-building library** for medical professionals. The terminal
//! client in `crates/medcv` is one presentation layer over it; a browser or desktop shell could
//! drive the same core without changing a line here.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (crates/medcv)                                │
//! │  - Turns raw input events into API calls                    │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: one method per store/form operation         │
//! │  - Owns the store and the form surface                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation, returns `CmdResult`          │
//! │  - No I/O besides the delegated export call                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/, actions.rs)                                 │
//! │  - `ResumeStore` trait, `InMemoryStore`                     │
//! │  - Every mutation is an `Action` fed to one dispatcher      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes flow from the form surface into the store; reads flow from the store into both the
//! form surface and the preview. The two surfaces never talk to each other.
//!
//! ## Session Lifetime
//!
//! Nothing is persisted. A resume lives exactly as long as the store that holds it, and the only
//! way back to an empty resume is a fresh store.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade every client goes through
//! - [`actions`]: The `Action` enum and the reducer that applies it
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Store trait, in-memory store, id-keyed collections
//! - [`model`]: Records, patches, option tables
//! - [`forms`]: Draft state for the editing panels
//! - [`preview`]: Projection of a resume into a renderable document
//! - [`export`]: Exporter configuration and the HTML file exporter
//! - [`config`]: Layered configuration
//! - [`ids`]: Record id generation
//! - [`error`]: Error types

pub mod actions;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod forms;
pub mod ids;
pub mod model;
pub mod preview;
pub mod store;
