//! # Storage Layer
//!
//! The [`ResumeStore`] trait is the seam between the command layer and wherever the resume
//! actually lives. Commands read through [`ResumeStore::resume`] and write through
//! [`ResumeStore::dispatch`]; they never reach into a collection directly.
//!
//! ## Lifetime
//!
//! A store holds at most one resume, in memory, for as long as the process runs. There is no
//! "clear" operation. A store that was never given a resume answers every call with
//! [`ResumeError::NotInitialized`](crate::error::ResumeError::NotInitialized); that is always a
//! wiring mistake in the caller, so it surfaces immediately instead of falling back to an empty
//! resume.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: The only backend. Also used by tests, with fixtures.
//! - [`collection::Collection`]: The ordered id-keyed list every record collection is built on.

use crate::actions::{Action, Applied};
use crate::error::Result;
use crate::model::Resume;

pub mod collection;
pub mod memory;

pub trait ResumeStore {
    /// Current state of the resume.
    fn resume(&self) -> Result<&Resume>;

    /// Applies one action and reports what it did.
    fn dispatch(&mut self, action: Action) -> Result<Applied>;
}
