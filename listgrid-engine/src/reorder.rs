//! Row reordering driven by raw pointer input.
//!
//! The protocol interprets pointer samples over a vertical stack of row
//! handles and produces "move row A before/after row B" splices on an
//! explicit order array. It owns no rendering: the caller renders from the
//! order array and reports slot geometry once, at drag start.
//!
//! Hovered handles are found by hit-testing the captured slot geometry, not
//! by index arithmetic — the physical order mutates while the drag is
//! running, so the handle occupying a slot changes from sample to sample.

use log::{debug, trace};

/// Vertical extent of one row slot, in the caller's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowBand {
    pub top: f64,
    pub height: f64,
}

impl RowBand {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Bands for `count` uniformly sized rows stacked from `top`.
pub fn uniform_bands(count: usize, top: f64, height: f64) -> Vec<RowBand> {
    (0..count)
        .map(|i| RowBand::new(top + i as f64 * height, height))
        .collect()
}

/// Pointer travel direction since the previous sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragDirection {
    Up,
    Down,
}

/// Frame boundaries a swap stays in flight before the next one is accepted.
const SWAP_SETTLE_FRAMES: u8 = 2;

/// State held only while a drag is active.
#[derive(Debug)]
struct DragSession {
    /// Handle being moved (its index in the pre-drag order).
    moved: usize,
    last_y: f64,
    direction: DragDirection,
    /// Greater than zero while a swap is settling.
    settle_frames: u8,
    /// Current physical order: handle ids by slot.
    order: Vec<usize>,
    /// Slot geometry captured at drag start.
    bands: Vec<RowBand>,
}

/// Outcome of a completed drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderResult {
    /// Original index of the moved row.
    pub from_index: usize,
    /// Final index of the moved row.
    pub to_index: usize,
    /// Final physical order (original indices by slot).
    pub order: Vec<usize>,
}

impl ReorderResult {
    /// Whether the drag actually moved the row.
    pub fn changed(&self) -> bool {
        self.from_index != self.to_index
    }
}

/// Pointer-driven row reorder protocol.
///
/// Idle until [`start_drag`](Self::start_drag); back to idle on
/// [`release`](Self::release) or [`teardown`](Self::teardown). The session
/// is the only held resource and is dropped on every exit path.
#[derive(Debug, Default)]
pub struct RowReorder {
    session: Option<DragSession>,
}

impl RowReorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Whether a swap is currently settling.
    pub fn swap_in_flight(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.settle_frames > 0)
    }

    /// Current physical order, while dragging.
    pub fn order(&self) -> Option<&[usize]> {
        self.session.as_ref().map(|session| session.order.as_slice())
    }

    /// Begin a drag of the row at `row_index`.
    ///
    /// Captures the slot geometry once; starting while a drag is already
    /// active, or with an out-of-range index, is ignored.
    pub fn start_drag(&mut self, y: f64, row_index: usize, bands: Vec<RowBand>) {
        if self.session.is_some() || row_index >= bands.len() {
            return;
        }
        debug!("drag start: row {row_index} of {}", bands.len());
        self.session = Some(DragSession {
            moved: row_index,
            last_y: y,
            direction: DragDirection::Down,
            settle_frames: 0,
            order: (0..bands.len()).collect(),
            bands,
        });
    }

    /// Feed a pointer-move sample.
    ///
    /// Updates the direction flag (up iff y decreased), hit-tests the slot
    /// under the pointer and relocates the moved handle before (up) or
    /// after (down) the hovered handle. A swap request while the previous
    /// swap is settling is dropped, not queued.
    pub fn pointer_move(&mut self, y: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if y < session.last_y {
            session.direction = DragDirection::Up;
        } else {
            session.direction = DragDirection::Down;
        }
        session.last_y = y;

        let Some(slot) = session.bands.iter().position(|band| band.contains(y)) else {
            return;
        };
        let hovered = session.order[slot];
        if hovered == session.moved {
            return;
        }

        if session.settle_frames > 0 {
            trace!("swap dropped: previous swap still in flight");
            return;
        }

        if relocate(&mut session.order, session.moved, hovered, session.direction) {
            session.settle_frames = SWAP_SETTLE_FRAMES;
            trace!("swapped: order now {:?}", session.order);
        }
    }

    /// Mark an animation-frame boundary.
    ///
    /// A swap is accepted again once two boundaries have elapsed since the
    /// previous one, guaranteeing the view has settled.
    pub fn frame(&mut self) {
        if let Some(session) = self.session.as_mut()
            && session.settle_frames > 0
        {
            session.settle_frames -= 1;
        }
    }

    /// End the drag and report the final order.
    ///
    /// Returns `None` when no drag was active. The session is destroyed
    /// unconditionally.
    pub fn release(&mut self) -> Option<ReorderResult> {
        let session = self.session.take()?;
        let to_index = session
            .order
            .iter()
            .position(|&handle| handle == session.moved)
            .unwrap_or(session.moved);
        debug!("drag release: row {} -> {}", session.moved, to_index);
        Some(ReorderResult {
            from_index: session.moved,
            to_index,
            order: session.order,
        })
    }

    /// Drop any active session without producing a result.
    ///
    /// Called on host teardown; safe when idle.
    pub fn teardown(&mut self) {
        if self.session.take().is_some() {
            debug!("drag teardown: session discarded");
        }
    }
}

/// Splice `moved` immediately before (up) or after (down) `hovered`.
///
/// Returns whether a relocation was performed. Moving down onto the last
/// handle is a no-op: there is no successor to slot in front of.
fn relocate(order: &mut Vec<usize>, moved: usize, hovered: usize, direction: DragDirection) -> bool {
    let Some(from) = order.iter().position(|&handle| handle == moved) else {
        return false;
    };
    let Some(hovered_at) = order.iter().position(|&handle| handle == hovered) else {
        return false;
    };

    match direction {
        DragDirection::Up => {
            order.remove(from);
            let insert_at = order
                .iter()
                .position(|&handle| handle == hovered)
                .unwrap_or(0);
            order.insert(insert_at, moved);
            true
        }
        DragDirection::Down => {
            if hovered_at + 1 == order.len() {
                return false;
            }
            order.remove(from);
            let insert_at = order
                .iter()
                .position(|&handle| handle == hovered)
                .map(|at| at + 1)
                .unwrap_or(order.len());
            order.insert(insert_at, moved);
            true
        }
    }
}

/// Apply a completed reorder to the caller's item array: one splice, not a
/// general permutation.
pub fn apply_move<T>(items: &mut Vec<T>, from_index: usize, to_index: usize) {
    if from_index == to_index || from_index >= items.len() || to_index >= items.len() {
        return;
    }
    let item = items.remove(from_index);
    items.insert(to_index, item);
}
