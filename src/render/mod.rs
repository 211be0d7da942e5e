//! Rendering module for layout results.
//!
//! Nothing here draws: the text and JSON renderers are debugging views,
//! and [`visitor::PageVisitor`] is the seam a real rendering or encoding
//! backend implements.

mod json;
mod options;
mod text;
pub mod visitor;

pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use text::to_text;
pub use visitor::{walk, PageVisitor};
