use std::iter;

use crate::board::Cell;
use crate::error::BoardInitError;

/// Appends `count` copies of the cell named by `cell_type` at `start_pos`,
/// bumping `snake_count` for a snake run.
///
/// A snake run must cover exactly one cell. Runs are written in order, so
/// `start_pos` is always the current length of `cells`. The caller guarantees
/// the board has room for `count` more cells.
pub fn fill_cells(
    cells: &mut Vec<Cell>,
    start_pos: usize,
    count: usize,
    cell_type: char,
    snake_count: &mut usize,
) -> Result<(), BoardInitError> {
    debug_assert_eq!(cells.len(), start_pos);

    let cell = Cell::from_symbol(cell_type).ok_or(BoardInitError::BadChar)?;
    if cell.is_snake() {
        if count != 1 {
            return Err(BoardInitError::WrongSnakeCount);
        }
        *snake_count += 1;
    }

    cells.extend(iter::repeat(cell).take(count));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_a_run() {
        let mut cells = vec![Cell::plain()];
        let mut snakes = 0;
        fill_cells(&mut cells, 1, 3, 'W', &mut snakes).unwrap();
        fill_cells(&mut cells, 4, 1, 'G', &mut snakes).unwrap();
        assert_eq!(
            cells,
            vec![
                Cell::plain(),
                Cell::wall(),
                Cell::wall(),
                Cell::wall(),
                Cell::grass()
            ]
        );
        assert_eq!(snakes, 0);
    }

    #[test]
    fn test_zero_count_adds_nothing() {
        let mut cells = Vec::new();
        let mut snakes = 0;
        fill_cells(&mut cells, 0, 0, 'E', &mut snakes).unwrap();
        assert!(cells.is_empty());
    }

    #[test]
    fn test_counts_snakes() {
        let mut cells = Vec::new();
        let mut snakes = 0;
        fill_cells(&mut cells, 0, 1, 'S', &mut snakes).unwrap();
        fill_cells(&mut cells, 1, 1, 'E', &mut snakes).unwrap();
        fill_cells(&mut cells, 2, 1, 'S', &mut snakes).unwrap();
        assert_eq!(snakes, 2);
        assert!(cells[0].is_snake() && cells[2].is_snake());
    }

    #[test]
    fn test_snake_run_longer_than_one() {
        let mut cells = Vec::new();
        let mut snakes = 0;
        assert_eq!(
            fill_cells(&mut cells, 0, 2, 'S', &mut snakes),
            Err(BoardInitError::WrongSnakeCount)
        );
        assert_eq!(
            fill_cells(&mut cells, 0, 0, 'S', &mut snakes),
            Err(BoardInitError::WrongSnakeCount)
        );
        assert_eq!(snakes, 0);
        assert!(cells.is_empty());
    }

    #[test]
    fn test_unknown_symbol() {
        let mut cells = Vec::new();
        let mut snakes = 0;
        for symbol in ['X', 'w', 'e', '1', '|'] {
            assert_eq!(
                fill_cells(&mut cells, 0, 1, symbol, &mut snakes),
                Err(BoardInitError::BadChar)
            );
        }
        assert!(cells.is_empty());
    }
}
