//! Backend response formats.

pub mod envelope;

pub use envelope::{EnvelopePage, load_envelope, parse_envelope};
