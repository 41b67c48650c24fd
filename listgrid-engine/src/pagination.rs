//! Pagination model with durable page-size persistence.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use listgrid_store::SettingsProvider;

/// Page size used when nothing is persisted and the caller supplies none.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Current pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// Current page, 1-based.
    pub page: usize,
    /// Rows per page.
    pub size: usize,
    /// Total number of items in the (possibly server-side) collection.
    pub collection_size: usize,
}

/// Tracks page, page size and collection size for one list.
///
/// The page size is durably persisted per list identifier; the current page
/// is clamped to the last valid page whenever the collection shrinks.
pub struct PaginationModel {
    list_id: String,
    settings: Option<SettingsProvider>,
    state: PaginationState,
    /// Re-entrancy guard: a clamp triggered from `recompute` must not
    /// trigger another clamp.
    clamping: bool,
}

impl PaginationModel {
    /// Create a model for the given list identifier.
    ///
    /// Attempts to load a previously persisted page size before falling
    /// back to `default_size`. Storage failures are logged, never fatal.
    pub fn new(
        list_id: impl Into<String>,
        settings: Option<SettingsProvider>,
        default_size: usize,
    ) -> Self {
        let list_id = list_id.into();
        let key = size_key(&list_id);

        let mut size = default_size;
        if let Some(provider) = &settings {
            match provider.get::<usize>(&key) {
                Ok(Some(persisted)) if persisted > 0 => {
                    debug!("list '{list_id}': loaded persisted page size {persisted}");
                    size = persisted;
                }
                Ok(_) => {}
                Err(error) => warn!("list '{list_id}': failed to load page size: {error}"),
            }
        }

        Self {
            list_id,
            settings,
            state: PaginationState {
                page: 1,
                size,
                collection_size: 0,
            },
            clamping: false,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> PaginationState {
        self.state
    }

    /// Current page (1-based).
    pub fn page(&self) -> usize {
        self.state.page
    }

    /// Current page size.
    pub fn size(&self) -> usize {
        self.state.size
    }

    /// Current collection size.
    pub fn collection_size(&self) -> usize {
        self.state.collection_size
    }

    /// Total number of pages; 0 while the collection or the size is 0.
    pub fn total_pages(&self) -> usize {
        if self.state.size == 0 || self.state.collection_size == 0 {
            return 0;
        }
        self.state.collection_size.div_ceil(self.state.size)
    }

    /// Set the current page (clamped to at least 1, then to the last page).
    pub fn set_page(&mut self, page: usize) {
        self.state.page = page.max(1);
        self.recompute();
    }

    /// Set the page size and persist it for this list.
    pub fn set_size(&mut self, size: usize) {
        if size == 0 || size == self.state.size {
            return;
        }
        self.state.size = size;
        if let Some(provider) = &self.settings
            && let Err(error) = provider.set(&size_key(&self.list_id), &size)
        {
            warn!(
                "list '{}': failed to persist page size: {error}",
                self.list_id
            );
        }
        self.recompute();
    }

    /// Update the collection size (e.g. after a server count response).
    pub fn set_collection_size(&mut self, collection_size: usize) {
        self.state.collection_size = collection_size;
        self.recompute();
    }

    /// Clamp the current page into the valid range, at most once.
    fn recompute(&mut self) {
        let total = self.total_pages();
        if total > 0 && self.state.page > total && !self.clamping {
            self.clamping = true;
            debug!(
                "list '{}': clamping page {} to {total}",
                self.list_id, self.state.page
            );
            self.set_page(total);
            self.clamping = false;
        }
    }
}

fn size_key(list_id: &str) -> String {
    format!("{list_id}PaginationSize")
}
