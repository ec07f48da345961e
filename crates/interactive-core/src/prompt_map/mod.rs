pub mod entry;
pub mod mapping;

pub use entry::PromptEntry;
pub use mapping::PromptLineMapping;
