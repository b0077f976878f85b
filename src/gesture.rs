use crate::config::CELL_COLUMNS;
use crate::input::Direction;

/// Classifies a released swipe by its dominant axis.
///
/// Horizontal wins only when strictly larger; ties and zero displacement
/// fall through to the vertical branch.
#[must_use]
pub fn classify_swipe(dx: f32, dy: f32) -> Direction {
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// Tracks one mouse drag from press to release.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    origin: Option<(i32, i32)>,
}

impl SwipeTracker {
    /// Records the drag origin in terminal coordinates.
    pub fn press(&mut self, point: (i32, i32)) {
        self.origin = Some(point);
    }

    /// Finishes the drag and classifies it.
    ///
    /// Returns `None` without a matching press, or when the pointer did not
    /// move, so plain clicks never steer the snake.
    pub fn release(&mut self, point: (i32, i32)) -> Option<Direction> {
        let (x0, y0) = self.origin.take()?;
        let (dx, dy) = (point.0 - x0, point.1 - y0);
        if dx == 0 && dy == 0 {
            return None;
        }

        // Columns are half as wide as rows are tall.
        let dx = dx as f32 / f32::from(CELL_COLUMNS);
        Some(classify_swipe(dx, dy as f32))
    }
}
