//! Bookkeeping for the interactive window editor.
//!
//! The composed view of an interactive session is a projection over many
//! spans. [`prompt_map::PromptLineMapping`] remembers which of those spans
//! renders the prompt that owns a given line.

pub mod errors;
pub mod prompt_map;

pub use errors::{PromptMapError, PromptMapResult};
pub use prompt_map::{PromptEntry, PromptLineMapping};
