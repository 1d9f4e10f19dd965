//! Core types: Note, NoteInfo, FrontMatter, WordCount

mod front_matter;
mod note;

pub use front_matter::{FrontMatter, WordCount};
pub use note::{Note, NoteInfo};
