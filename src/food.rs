use rand::Rng;

use crate::config::{GridSize, FOOD_RANDOM_ATTEMPTS};
use crate::snake::{Cell, Snake};

/// Picks a food cell that is not occupied by the snake.
///
/// Draws uniformly at random up to [`FOOD_RANDOM_ATTEMPTS`] times, then falls
/// back to the first free cell in row-major order. Returns `None` only when
/// the snake covers the whole board.
#[must_use]
pub fn generate_food<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Cell> {
    let width = i32::from(bounds.width);
    let height = i32::from(bounds.height);
    if width == 0 || height == 0 {
        return None;
    }

    for _ in 0..FOOD_RANDOM_ATTEMPTS {
        let candidate = Cell::new(rng.gen_range(0..width), rng.gen_range(0..height));
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    first_free_cell(bounds, snake)
}

fn first_free_cell(bounds: GridSize, snake: &Snake) -> Option<Cell> {
    (0..i32::from(bounds.height))
        .flat_map(|y| (0..i32::from(bounds.width)).map(move |x| Cell::new(x, y)))
        .find(|cell| !snake.occupies(*cell))
}
