//! Parsers turning collaborator text formats into documents.

pub mod story;

pub use story::from_story_text;
