//! Data sources feeding the record table.

pub mod source;

pub use source::{MemorySource, Page, PageSource};
