pub mod text;

pub use text::{truncate_text, wrap_text};
