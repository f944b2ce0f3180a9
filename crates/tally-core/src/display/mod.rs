//! Terminal text output.

pub mod table;

pub use table::{TableDisplay, class_color};
