use serde::{Deserialize, Serialize};

use crate::core::StockPoint;

/// A brush rectangle in data space.
///
/// `x0..x1` spans time in unix seconds, `y0..y1` spans close values. Bounds
/// live only while a selection is active; an absent selection is modeled as
/// `Option::None` at call sites. Inverted or zero-size rectangles are legal
/// and simply match nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionBounds {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl SelectionBounds {
    #[must_use]
    pub fn new(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self { x0, x1, y0, y1 }
    }

    /// Inclusive membership test on both axes.
    #[must_use]
    pub fn contains(self, point: StockPoint) -> bool {
        self.x0 <= point.x && point.x <= self.x1 && self.y0 <= point.close && point.close <= self.y1
    }
}

/// Filters a series against an optional brush rectangle.
///
/// `None` returns the full series unchanged, same elements in the same
/// order. `Some(bounds)` returns the ordered subsequence of points sitting
/// inside the rectangle, edges included. The result may be empty; that is a
/// valid selection, not an error.
#[must_use]
pub fn apply_brush(points: &[StockPoint], bounds: Option<SelectionBounds>) -> Vec<StockPoint> {
    match bounds {
        None => points.to_vec(),
        Some(bounds) => points
            .iter()
            .copied()
            .filter(|point| bounds.contains(*point))
            .collect(),
    }
}

/// Lifecycle of the overview brush widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushPhase {
    /// No selection; the full series is shown.
    Unselected,
    /// Pointer is down and dragging; bounds update continuously.
    Selecting,
    /// Bounds are committed and the filtered series is frozen.
    Selected,
}

/// Pointer-driven selection state machine in data space.
///
/// Callers inverse-map raw pixel coordinates through the overview scales
/// before feeding events here; the machine itself never sees pixels.
/// The cycle `Unselected -> Selecting -> Selected` repeats for the lifetime
/// of the view, with `on_clear` dropping back to `Unselected` from any
/// state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushState {
    phase: BrushPhase,
    anchor: Option<(f64, f64)>,
    pending: Option<SelectionBounds>,
    committed: Option<SelectionBounds>,
}

impl Default for BrushState {
    fn default() -> Self {
        Self {
            phase: BrushPhase::Unselected,
            anchor: None,
            pending: None,
            committed: None,
        }
    }
}

impl BrushState {
    #[must_use]
    pub fn phase(self) -> BrushPhase {
        self.phase
    }

    /// Bounds of the last committed selection, if any.
    #[must_use]
    pub fn selection(self) -> Option<SelectionBounds> {
        self.committed
    }

    /// Bounds of the in-flight drag while `Selecting`.
    #[must_use]
    pub fn pending(self) -> Option<SelectionBounds> {
        self.pending
    }

    /// Begins a drag at a data-space point. Starting a new drag replaces any
    /// previously committed selection once the drag commits.
    pub fn on_pointer_down(&mut self, time: f64, value: f64) {
        self.phase = BrushPhase::Selecting;
        self.anchor = Some((time, value));
        self.pending = Some(SelectionBounds::new(time, time, value, value));
    }

    /// Extends the drag rectangle to a data-space point.
    ///
    /// Bounds are kept normalized (`x0 <= x1`, `y0 <= y1`) regardless of drag
    /// direction. Ignored outside the `Selecting` phase.
    pub fn on_pointer_move(&mut self, time: f64, value: f64) {
        let Some((anchor_time, anchor_value)) = self.anchor else {
            return;
        };
        if self.phase != BrushPhase::Selecting {
            return;
        }

        self.pending = Some(SelectionBounds::new(
            anchor_time.min(time),
            anchor_time.max(time),
            anchor_value.min(value),
            anchor_value.max(value),
        ));
    }

    /// Commits the in-flight drag and returns the final bounds.
    ///
    /// A pointer-up without a preceding pointer-down is a no-op returning
    /// `None`.
    pub fn on_pointer_up(&mut self) -> Option<SelectionBounds> {
        if self.phase != BrushPhase::Selecting {
            return None;
        }

        self.phase = BrushPhase::Selected;
        self.anchor = None;
        self.committed = self.pending.take();
        self.committed
    }

    /// Drops any selection and returns to `Unselected` from any phase.
    pub fn on_clear(&mut self) {
        *self = Self::default();
    }
}
