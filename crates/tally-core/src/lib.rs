//! # tally-core
//!
//! Generic record table for paginated list views.
//!
//! This crate provides the shared functionality used by both `tally` (CLI) and
//! `tally-tui`: the record model, the table component with its column,
//! pagination, selection, search and status-badge descriptors, plus the
//! envelope parser, page sources, configuration and text rendering.
//!
//! ## Quick Start
//!
//! ```rust
//! use tally_core::prelude::*;
//!
//! let records = vec![
//!     Record::new(1).with("vendor", "Acme").with("status", "Paid"),
//!     Record::new(2).with("vendor", "Globex").with("status", "Overdue"),
//! ];
//! let mut table = RecordTable::builder()
//!     .data(records)
//!     .columns(vec![Column::new("vendor", "Vendor"), Column::new("status", "Status")])
//!     .search_fields(["vendor"])
//!     .build()?;
//!
//! let mut selection = SelectionController::new();
//! table.handle(TableEvent::Search("acm".to_string()), &mut selection);
//! table.handle(TableEvent::ToggleAll(true), &mut selection);
//!
//! let view = table.view(&selection);
//! assert_eq!(view.visible_len(), 1);
//! assert_eq!(selection.len(), 2);
//! # Ok::<(), tally_core::error::TableError>(())
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   api / core::source                │  Envelope parsing, page sources
//! ├─────────────────────────────────────┤
//! │   table / record                    │  Component, descriptors, view model
//! ├─────────────────────────────────────┤
//! │   storage / display                 │  TOML config, comfy-table output
//! ├─────────────────────────────────────┤
//! │   utils                             │  Text helpers
//! └─────────────────────────────────────┘
//! ```

pub use error::AppError;

/// Prelude module for convenient imports.
///
/// ```rust
/// use tally_core::prelude::*;
/// ```
pub mod prelude {
    // Error handling
    pub use crate::Result;
    pub use crate::error::AppError;

    // Records
    pub use crate::record::{FieldValue, Fragment, Record, RecordId, TableRecord};

    // Table component
    pub use crate::table::{
        Column, DropdownAction, PaginationDescriptor, RecordTable, SelectionController,
        StatusStyles, TableEvent, TableHandler, TableView,
    };

    // Data sources
    pub use crate::api::envelope::{EnvelopePage, load_envelope};
    pub use crate::core::source::{MemorySource, PageSource};

    // Storage and display
    pub use crate::display::TableDisplay;
    pub use crate::storage::config::Config;
}

/// Backend response parsing.
pub mod api;

/// Page sources answering page-change requests.
pub mod core;

/// Hierarchical errors with severity levels and troubleshooting hints.
pub mod error;

/// Record model: ids, field values and the [`record::TableRecord`] trait.
pub mod record;

/// Terminal text rendering of table views.
pub mod display;

/// TOML configuration with view presets.
pub mod storage;

/// The generic record table component.
pub mod table;

pub mod utils;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
