//! Generic record table: columns, pagination, selection, search, status
//! badges and row actions over any [`TableRecord`](crate::record::TableRecord).

pub mod actions;
pub mod column;
pub mod component;
pub mod pagination;
pub mod search;
pub mod selection;
pub mod status;
pub mod view;

pub use actions::DropdownAction;
pub use column::{Column, ColumnSpec, Renderer};
pub use component::{ItemRenderer, RecordTable, RecordTableBuilder, TableEvent, TableHandler};
pub use pagination::PaginationDescriptor;
pub use search::{SearchState, filter_records};
pub use selection::{CheckState, SelectionController, SelectionScope, SelectionSet};
pub use status::{Badge, DEFAULT_STATUS_CLASS, StatusStyles, StyleClass};
pub use view::{CardView, CellView, HeaderCell, PagerView, RowView, SearchBar, TableBody, TableView};
