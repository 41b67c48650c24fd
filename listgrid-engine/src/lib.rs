//! Tabular list/grid data engine
//!
//! The data/state core behind a generic list component: a pluggable
//! cell-converter pipeline, a column renderer producing a display-ready
//! matrix, a tri-state column sort machine, a hybrid client/server
//! pagination model with durable page-size persistence, a substring filter,
//! and a pointer-driven row-reorder protocol. The view layer is an external
//! collaborator: it feeds rows, columns and pointer input, and renders the
//! state the [`controller::ListController`] produces.

pub mod column;
pub mod controller;
pub mod convert;
pub mod fields;
pub mod filter;
pub mod locale;
pub mod pagination;
pub mod render;
pub mod reorder;
pub mod row;
pub mod sort;

pub mod prelude {
    pub use crate::column::ColumnConfig;
    pub use crate::controller::{DataMode, HeaderCell, ListController, ListEvent, ListViewState};
    pub use crate::convert::{CellConverter, ConvertContext, ConverterRegistry, EMPTY_CELL};
    pub use crate::fields::resolve_path;
    pub use crate::filter::{FILTER_DEBOUNCE, filter_rows};
    pub use crate::locale::{DefaultTranslator, Locale, Translator};
    pub use crate::pagination::{DEFAULT_PAGE_SIZE, PaginationModel, PaginationState};
    pub use crate::render::{
        ColumnRenderer, ListOptions, RenderedCell, RenderedRow, StructuralCell, StructuralKind,
    };
    pub use crate::reorder::{
        ReorderResult, RowBand, RowReorder, apply_move, uniform_bands,
    };
    pub use crate::row::RowItem;
    pub use crate::sort::{SortDirection, SortState};

    pub use listgrid_store::{
        MemoryBackend, SettingsBackend, SettingsProvider, SqliteBackend,
    };
}
