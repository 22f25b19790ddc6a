//! Screen-space grid layout used to hit-test inventory slot clicks.

/// Side length of a rendered inventory slot in pixels.
pub const SLOT_SIZE: f32 = 40.0;

/// Gap between adjacent slots in pixels.
pub const SLOT_PADDING: f32 = 5.0;

/// Pixel-space layout of an inventory grid on screen.
///
/// The layout owns no items; it only maps click coordinates back to
/// `(row, col)` slot indices.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    origin_x: f32,
    origin_y: f32,
    slot_size: f32,
    padding: f32,
    rows: usize,
    cols: usize,
}

impl GridLayout {
    /// Layout with an explicit top-left origin.
    pub fn new(origin_x: f32, origin_y: f32, rows: usize, cols: usize) -> Self {
        Self {
            origin_x,
            origin_y,
            slot_size: SLOT_SIZE,
            padding: SLOT_PADDING,
            rows,
            cols,
        }
    }

    /// Layout centered horizontally in a window of `window_width` pixels,
    /// with its top edge at `origin_y`.
    pub fn centered(window_width: f32, origin_y: f32, rows: usize, cols: usize) -> Self {
        let width = cols as f32 * SLOT_SIZE + (cols.saturating_sub(1)) as f32 * SLOT_PADDING;
        Self::new((window_width - width) / 2.0, origin_y, rows, cols)
    }

    /// Top-left pixel corner of the slot at `(row, col)`.
    pub fn slot_origin(&self, row: usize, col: usize) -> (f32, f32) {
        let pitch = self.slot_size + self.padding;
        (
            self.origin_x + col as f32 * pitch,
            self.origin_y + row as f32 * pitch,
        )
    }

    /// Pixel center of the slot at `(row, col)`.
    pub fn slot_center(&self, row: usize, col: usize) -> (f32, f32) {
        let (x, y) = self.slot_origin(row, col);
        (x + self.slot_size / 2.0, y + self.slot_size / 2.0)
    }

    /// Map a click at `(x, y)` to a slot index. Clicks in the padding gaps
    /// between slots and outside the grid return `None`.
    pub fn slot_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let rel_x = x - self.origin_x;
        let rel_y = y - self.origin_y;
        if rel_x < 0.0 || rel_y < 0.0 {
            return None;
        }

        let pitch = self.slot_size + self.padding;
        let col = (rel_x / pitch) as usize;
        let row = (rel_y / pitch) as usize;
        if row >= self.rows || col >= self.cols {
            return None;
        }
        // Reject the padding band to the right of / below each slot.
        if rel_x - col as f32 * pitch > self.slot_size {
            return None;
        }
        if rel_y - row as f32 * pitch > self.slot_size {
            return None;
        }
        Some((row, col))
    }
}
