//! List controller: composes rendering, sorting, pagination, filtering and
//! reordering into the single reactive state consumed by the view.

use std::sync::Arc;

use log::debug;

use listgrid_store::SettingsProvider;

use crate::column::ColumnConfig;
use crate::filter::filter_rows;
use crate::locale::{Locale, Translator};
use crate::pagination::{DEFAULT_PAGE_SIZE, PaginationModel, PaginationState};
use crate::render::{ColumnRenderer, ListOptions, RenderedRow};
use crate::reorder::{ReorderResult, RowBand, RowReorder, apply_move};
use crate::row::RowItem;
use crate::sort::{SortDirection, SortState};

/// Where the collection lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataMode {
    /// The full collection is held locally; the controller filters and
    /// page-slices it and derives the collection size.
    #[default]
    Client,
    /// Rows are the current page as delivered by a server-side query; the
    /// caller reports the total collection size.
    Server,
}

/// Events emitted by the controller, drained in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// Sort intent for the external data source. The controller never
    /// reorders data itself.
    SortChanged(SortState),
    PageChanged(usize),
    PageSizeChanged(usize),
    /// A drag completed and the row set was respliced.
    RowsReordered { from_index: usize, to_index: usize },
}

/// One header cell for the view.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    /// Arrow to show: present whenever this is the sort column, armed in
    /// descending order even through the off state.
    pub direction: Option<SortDirection>,
}

/// The full renderable state of the list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewState {
    pub header: Vec<HeaderCell>,
    /// The visible page of the filtered, rendered matrix.
    pub rows: Vec<RenderedRow>,
    pub pagination: PaginationState,
    pub sort: SortState,
    pub filter: String,
}

/// Composes the tabular engine pieces for one list instance.
pub struct ListController {
    mode: DataMode,
    columns: Vec<ColumnConfig>,
    rows: Vec<RowItem>,
    options: ListOptions,
    renderer: ColumnRenderer,
    filter: String,
    sort: SortState,
    pagination: PaginationModel,
    reorder: RowReorder,
    events: Vec<ListEvent>,
}

impl ListController {
    /// Create a controller for the list identified by `list_id`.
    ///
    /// The identifier keys the durable page-size entry; pass `None` for
    /// `settings` to skip persistence entirely.
    pub fn new(list_id: impl Into<String>, settings: Option<SettingsProvider>) -> Self {
        Self {
            mode: DataMode::default(),
            columns: Vec::new(),
            rows: Vec::new(),
            options: ListOptions::default(),
            renderer: ColumnRenderer::new(),
            filter: String::new(),
            sort: SortState::default(),
            pagination: PaginationModel::new(list_id, settings, DEFAULT_PAGE_SIZE),
            reorder: RowReorder::new(),
            events: Vec::new(),
        }
    }

    /// Set the data mode.
    pub fn with_mode(mut self, mode: DataMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the column configuration.
    pub fn with_columns(mut self, columns: Vec<ColumnConfig>) -> Self {
        self.columns = columns;
        self
    }

    /// Set the structural trailer options.
    pub fn with_options(mut self, options: ListOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the translator used by the converters.
    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.renderer = std::mem::take(&mut self.renderer).with_translator(translator);
        self
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    /// Replace the row set.
    pub fn set_rows(&mut self, rows: Vec<RowItem>) {
        self.rows = rows;
        self.sync_pagination();
    }

    /// Current rows, in their logical order.
    pub fn rows(&self) -> &[RowItem] {
        &self.rows
    }

    /// Replace the column configuration.
    pub fn set_columns(&mut self, columns: Vec<ColumnConfig>) {
        self.columns = columns;
    }

    /// Set the active locale.
    pub fn set_locale(&mut self, locale: Locale) {
        self.renderer.set_locale(locale);
    }

    /// Set the filter text.
    ///
    /// The caller debounces raw input (see
    /// [`FILTER_DEBOUNCE`](crate::filter::FILTER_DEBOUNCE)); the engine
    /// recomputes synchronously.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
        self.sync_pagination();
    }

    /// Activate a column header, advancing the sort machine.
    ///
    /// Emits [`ListEvent::SortChanged`] when the state changes; the external
    /// data source applies the actual ordering.
    pub fn activate_column(&mut self, key: &str) {
        let Some(column) = self.columns.iter().find(|column| column.key == key) else {
            return;
        };
        let next = self.sort.activate(column);
        if next != self.sort {
            debug!("sort: {key} -> {next:?}");
            self.sort = next.clone();
            self.events.push(ListEvent::SortChanged(next));
        }
    }

    /// Go to a page.
    pub fn set_page(&mut self, page: usize) {
        let previous = self.pagination.page();
        self.pagination.set_page(page);
        self.emit_page_change(previous);
    }

    /// Change the page size (persisted per list identifier).
    pub fn set_page_size(&mut self, size: usize) {
        let previous_page = self.pagination.page();
        let previous_size = self.pagination.size();
        self.pagination.set_size(size);
        if self.pagination.size() != previous_size {
            self.events
                .push(ListEvent::PageSizeChanged(self.pagination.size()));
        }
        self.emit_page_change(previous_page);
    }

    /// Report the server-side collection size (server mode).
    pub fn set_collection_size(&mut self, collection_size: usize) {
        let previous = self.pagination.page();
        self.pagination.set_collection_size(collection_size);
        self.emit_page_change(previous);
    }

    // -------------------------------------------------------------------------
    // Row dragging
    // -------------------------------------------------------------------------

    /// Begin dragging the visible row at `row_index`.
    pub fn start_row_drag(&mut self, y: f64, row_index: usize, bands: Vec<RowBand>) {
        self.reorder.start_drag(y, row_index, bands);
    }

    /// Feed a pointer-move sample to the active drag.
    pub fn drag_move(&mut self, y: f64) {
        self.reorder.pointer_move(y);
    }

    /// Mark an animation-frame boundary for the active drag.
    pub fn drag_frame(&mut self) {
        self.reorder.frame();
    }

    /// Finish the active drag, resplice the row set and emit
    /// [`ListEvent::RowsReordered`].
    ///
    /// Drag indices are positions within the visible page; they are mapped
    /// back to source indices through the rendered slice, so dragging works
    /// under an active filter and on any page.
    pub fn drag_release(&mut self) -> Option<ReorderResult> {
        let result = self.reorder.release()?;
        if result.changed() {
            let visible = self.visible_slice();
            let from = visible
                .get(result.from_index)
                .map(|row| row.source_index)
                .unwrap_or(result.from_index);
            let to = visible
                .get(result.to_index)
                .map(|row| row.source_index)
                .unwrap_or(result.to_index);
            apply_move(&mut self.rows, from, to);
            self.events.push(ListEvent::RowsReordered {
                from_index: from,
                to_index: to,
            });
        }
        Some(result)
    }

    /// Release every drag resource; called on host teardown.
    pub fn teardown(&mut self) {
        self.reorder.teardown();
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.reorder.is_dragging()
    }

    // -------------------------------------------------------------------------
    // Outputs
    // -------------------------------------------------------------------------

    /// Drain the pending events, in emission order.
    pub fn take_events(&mut self) -> Vec<ListEvent> {
        std::mem::take(&mut self.events)
    }

    /// Current sort state.
    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Current pagination state.
    pub fn pagination(&self) -> PaginationState {
        self.pagination.state()
    }

    /// Current filter text.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Build the full renderable state.
    pub fn view_state(&self) -> ListViewState {
        ListViewState {
            header: self.header(),
            rows: self.visible_slice(),
            pagination: self.pagination.state(),
            sort: self.sort.clone(),
            filter: self.filter.clone(),
        }
    }

    fn header(&self) -> Vec<HeaderCell> {
        self.columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key.clone(),
                label: column.label.clone(),
                sortable: column.sortable,
                direction: (self.sort.column == column.key).then_some(self.sort.direction),
            })
            .collect()
    }

    /// Render, filter, and (in client mode) slice out the current page.
    fn visible_slice(&self) -> Vec<RenderedRow> {
        let matrix = self.renderer.render(&self.rows, &self.columns, &self.options);
        let filtered = filter_rows(&matrix, &self.filter);

        match self.mode {
            DataMode::Server => filtered.into_owned(),
            DataMode::Client => {
                let state = self.pagination.state();
                if state.size == 0 {
                    return filtered.into_owned();
                }
                let start = (state.page.saturating_sub(1)) * state.size;
                filtered
                    .iter()
                    .skip(start)
                    .take(state.size)
                    .cloned()
                    .collect()
            }
        }
    }

    /// Keep the pagination model in sync with the local collection.
    fn sync_pagination(&mut self) {
        if self.mode != DataMode::Client {
            return;
        }
        let matrix = self.renderer.render(&self.rows, &self.columns, &self.options);
        let filtered_len = filter_rows(&matrix, &self.filter).len();
        let previous = self.pagination.page();
        self.pagination.set_collection_size(filtered_len);
        self.emit_page_change(previous);
    }

    fn emit_page_change(&mut self, previous: usize) {
        let current = self.pagination.page();
        if current != previous {
            self.events.push(ListEvent::PageChanged(current));
        }
    }
}
