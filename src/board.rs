use crate::config::GridSize;
use crate::game::GameSnapshot;
use crate::snake::Cell;

/// What occupies one grid cell, as seen by a renderer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CellKind {
    Empty,
    SnakeHead,
    SnakeBody,
    Food,
}

/// Classifies `cell`; head beats body beats food.
#[must_use]
pub fn cell_kind(snapshot: &GameSnapshot<'_>, cell: Cell) -> CellKind {
    if snapshot.snake.head() == cell {
        CellKind::SnakeHead
    } else if snapshot.snake.segments().skip(1).any(|segment| *segment == cell) {
        CellKind::SnakeBody
    } else if snapshot.food == cell {
        CellKind::Food
    } else {
        CellKind::Empty
    }
}

/// Projects the whole board row by row.
#[must_use]
pub fn project(snapshot: &GameSnapshot<'_>, bounds: GridSize) -> Vec<Vec<CellKind>> {
    (0..i32::from(bounds.height))
        .map(|y| {
            (0..i32::from(bounds.width))
                .map(|x| cell_kind(snapshot, Cell::new(x, y)))
                .collect()
        })
        .collect()
}
