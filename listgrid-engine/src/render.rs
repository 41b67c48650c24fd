//! Column renderer: raw rows + column configs -> rendered matrix.

use std::sync::Arc;

use crate::column::ColumnConfig;
use crate::convert::{ConvertContext, ConverterRegistry};
use crate::locale::{DefaultTranslator, Locale, Translator};
use crate::row::RowItem;

/// Kind of a structural (non-value) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralKind {
    /// Row action buttons.
    Actions,
    /// Lock indicator; present only when at least one row is locked.
    LockIndicator,
    /// Free-form template slot (a column override or the trailing slot).
    Template,
    /// Drag handle for row reordering.
    MoveHandle,
    /// Overflow action menu.
    OverflowMenu,
}

/// Payload of a structural cell: enough for the view layer to render the
/// slot without reaching back into engine state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralCell {
    pub kind: StructuralKind,
    /// Source index of the row within the rendered set.
    pub index: usize,
    /// Total number of rows in the rendered set.
    pub length: usize,
    /// Template slot name for column-level overrides.
    pub slot: Option<String>,
}

/// A single display-ready cell.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedCell {
    /// Converted display text.
    Text(String),
    /// Structural payload for template/action slots.
    Structural(StructuralCell),
}

impl RenderedCell {
    /// The display text, if this is a text cell.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Structural(_) => None,
        }
    }
}

/// One rendered row. Rebuilt wholesale on every render pass, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    /// Index of the source item within the input row set.
    pub source_index: usize,
    /// Lock flag copied from the source item.
    pub locked: bool,
    pub cells: Vec<RenderedCell>,
}

/// Which structural trailer columns the list renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Append an actions cell per row.
    pub actions: bool,
    /// Append a free-form trailing template cell per row.
    pub trailing_template: bool,
    /// Append a move-row handle per row.
    pub movable_rows: bool,
    /// Append an overflow action menu per row.
    pub overflow_menu: bool,
}

/// Renders raw rows through the converter registry into the display matrix.
pub struct ColumnRenderer {
    registry: ConverterRegistry,
    locale: Locale,
    translator: Arc<dyn Translator>,
}

impl ColumnRenderer {
    /// Renderer with the default converter set, English locale and
    /// fallback translator.
    pub fn new() -> Self {
        Self {
            registry: ConverterRegistry::default(),
            locale: Locale::default(),
            translator: Arc::new(DefaultTranslator),
        }
    }

    /// Replace the converter registry.
    pub fn with_registry(mut self, registry: ConverterRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the translator.
    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    /// Set the active locale.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// The active locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Render the full matrix for the given rows and columns.
    ///
    /// Deterministic: identical inputs produce a structurally equal matrix.
    /// Data cells come first in column order; structural trailer cells are
    /// appended in fixed order: actions, lock indicator (only when any row
    /// is locked), trailing template, move handle, overflow menu.
    pub fn render(
        &self,
        rows: &[RowItem],
        columns: &[ColumnConfig],
        options: &ListOptions,
    ) -> Vec<RenderedRow> {
        let cx = ConvertContext {
            locale: &self.locale,
            translator: self.translator.as_ref(),
        };
        let any_locked = rows.iter().any(|row| row.locked);
        let length = rows.len();

        rows.iter()
            .enumerate()
            .map(|(index, row)| {
                let mut cells = Vec::with_capacity(columns.len() + 5);

                for column in columns {
                    if let Some(slot) = &column.template {
                        cells.push(RenderedCell::Structural(StructuralCell {
                            kind: StructuralKind::Template,
                            index,
                            length,
                            slot: Some(slot.clone()),
                        }));
                        continue;
                    }
                    let raw = row.field(&column.key);
                    cells.push(RenderedCell::Text(self.registry.convert(raw, column, &cx)));
                }

                let structural = |kind: StructuralKind| {
                    RenderedCell::Structural(StructuralCell {
                        kind,
                        index,
                        length,
                        slot: None,
                    })
                };

                if options.actions {
                    cells.push(structural(StructuralKind::Actions));
                }
                if any_locked {
                    cells.push(structural(StructuralKind::LockIndicator));
                }
                if options.trailing_template {
                    cells.push(structural(StructuralKind::Template));
                }
                if options.movable_rows {
                    cells.push(structural(StructuralKind::MoveHandle));
                }
                if options.overflow_menu {
                    cells.push(structural(StructuralKind::OverflowMenu));
                }

                RenderedRow {
                    source_index: index,
                    locked: row.locked,
                    cells,
                }
            })
            .collect()
    }
}

impl Default for ColumnRenderer {
    fn default() -> Self {
        Self::new()
    }
}
