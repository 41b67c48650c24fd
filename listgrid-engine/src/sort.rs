//! Tri-state column sort machine.

use serde::{Deserialize, Serialize};

use crate::column::ColumnConfig;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Per-list sort state.
///
/// At most one column is actively sorting. The state machine never sorts
/// data itself; it emits intent for an external data source (which may be a
/// server-side query) to apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortState {
    /// Key of the column the state refers to.
    pub column: String,
    /// Direction shown in the header (kept across the off state, so the
    /// next activation re-arms in descending order).
    pub direction: SortDirection,
    /// Whether the sort is active.
    pub sorting: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: String::new(),
            direction: SortDirection::Desc,
            sorting: false,
        }
    }
}

impl SortState {
    /// Advance the machine for a header activation on `column`.
    ///
    /// Per-column cycle: descending, ascending, off — the off state keeps
    /// the descending arrow armed for the next activation. Activating a
    /// different column restarts at descending. Non-sortable columns leave
    /// the state untouched.
    #[must_use]
    pub fn activate(&self, column: &ColumnConfig) -> SortState {
        if !column.sortable {
            return self.clone();
        }

        if self.column == column.key {
            return match (self.sorting, self.direction) {
                (false, _) => SortState {
                    column: self.column.clone(),
                    direction: SortDirection::Desc,
                    sorting: true,
                },
                (true, SortDirection::Desc) => SortState {
                    column: self.column.clone(),
                    direction: SortDirection::Asc,
                    sorting: true,
                },
                (true, SortDirection::Asc) => SortState {
                    column: self.column.clone(),
                    direction: SortDirection::Desc,
                    sorting: false,
                },
            };
        }

        SortState {
            column: column.key.clone(),
            direction: SortDirection::Desc,
            sorting: true,
        }
    }
}
