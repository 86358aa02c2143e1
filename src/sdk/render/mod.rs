pub mod map;
pub mod text;

pub use map::{MapDocument, MapError};
pub use text::{render_json, render_text};
