//! Text filter over the rendered matrix.

use std::borrow::Cow;
use std::time::Duration;

use crate::render::RenderedRow;

/// Debounce the view layer should apply to filter input before invoking
/// [`filter_rows`]. Debouncing is a caller concern, never engine state.
pub const FILTER_DEBOUNCE: Duration = Duration::from_millis(500);

/// Retain rows where any text cell contains `needle`, case-insensitively.
///
/// An empty needle returns the input unchanged (`Cow::Borrowed` — identity,
/// not a copy). The input is the full unpaginated rendered set; pagination
/// is applied by the caller afterwards. Structural cells carry no text and
/// never match.
pub fn filter_rows<'a>(rows: &'a [RenderedRow], needle: &str) -> Cow<'a, [RenderedRow]> {
    if needle.is_empty() {
        return Cow::Borrowed(rows);
    }
    let needle = needle.to_lowercase();

    let retained: Vec<RenderedRow> = rows
        .iter()
        .filter(|row| {
            row.cells
                .iter()
                .filter_map(|cell| cell.text())
                .any(|text| text.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();

    Cow::Owned(retained)
}
