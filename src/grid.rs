use crate::model::{Minutes, Span};

/// Calendar grid layout, shared contractually with the client stylesheet:
/// the drag math and the rendered slot heights must use the same values.
///
/// The display grid is labelled in 30-minute rows but drag-and-drop snaps to
/// 15-minute quarter steps — half a row. That asymmetry is deliberate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub start_hour: i32,
    pub end_hour: i32,
    pub slot_minutes: Minutes,
    pub slot_height_px: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start_hour: 7,
            end_hour: 22,
            slot_minutes: 30,
            slot_height_px: 28.0,
        }
    }
}

/// Quarter-hour snap granularity for drag edits.
const SNAP_MINUTES: Minutes = 15;

impl GridConfig {
    pub fn day_start(&self) -> Minutes {
        self.start_hour * 60
    }

    pub fn day_end(&self) -> Minutes {
        self.end_hour * 60
    }

    /// The bookable window `[day_start, day_end]` the service validates
    /// against.
    pub fn service_window(&self) -> Span {
        Span::new(self.day_start(), self.day_end())
    }

    pub fn total_slots(&self) -> i32 {
        (self.day_end() - self.day_start()) / self.slot_minutes
    }

    /// Vertical offset of a booking's top edge within the day column.
    pub fn offset_to_pixel_top(&self, start_minutes: Minutes) -> f64 {
        (start_minutes - self.day_start()) as f64 / self.slot_minutes as f64 * self.slot_height_px
    }

    /// Rendered height of a booking tag.
    pub fn duration_to_pixel_height(&self, duration_minutes: Minutes) -> f64 {
        duration_minutes as f64 / self.slot_minutes as f64 * self.slot_height_px
    }

    /// Snap a drop position to a bookable start minute.
    ///
    /// The position is clamped into the day column, converted to a
    /// fractional row count, and rounded to the nearest quarter step (each
    /// display row holds two). The result is then clamped so at least one
    /// quarter step remains before the end of the day.
    pub fn snap_pixel_y(&self, pixel_y: f64) -> Minutes {
        let max_y = self.total_slots() as f64 * self.slot_height_px;
        let y = pixel_y.clamp(0.0, max_y);

        let row_fraction = y / self.slot_height_px;
        let mut quarter_steps = (row_fraction * (self.slot_minutes / SNAP_MINUTES) as f64).round()
            as Minutes;

        let max_quarter_steps = (self.day_end() - self.day_start()) / SNAP_MINUTES - 1;
        if quarter_steps > max_quarter_steps {
            quarter_steps = max_quarter_steps;
        }
        self.day_start() + quarter_steps * SNAP_MINUTES
    }

    /// Plan a drag-move: snap the new start, keep the original duration, and
    /// clamp the end to the day boundary even when that silently shortens
    /// the booking. Moves can shrink; they never re-stretch.
    pub fn plan_move(&self, current: Span, pixel_y: f64) -> Span {
        let start = self.snap_pixel_y(pixel_y);
        let end = (start + current.duration()).min(self.day_end());
        Span::new(start, end)
    }
}
