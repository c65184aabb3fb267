//! Row-major selection cursor shared by every menu screen.
use crate::input::Direction;

/// What happens when the cursor is pushed past an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeBehavior {
    /// Reappear on the opposite edge.
    Wrap,
    /// Stay put.
    Clamp,
}

/// A `rows x cols` grid of selectable cells, indexed row-major from 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectableGrid {
    rows: usize,
    cols: usize,
    edges: EdgeBehavior,
    selected: usize,
}

impl SelectableGrid {
    /// Zero dimensions are bumped to 1 so the grid always has a selection.
    pub fn new(rows: usize, cols: usize, edges: EdgeBehavior) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
            edges,
            selected: 0,
        }
    }

    pub fn wrapping(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols, EdgeBehavior::Wrap)
    }

    pub fn clamped(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols, EdgeBehavior::Clamp)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn edges(&self) -> EdgeBehavior {
        self.edges
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// `(row, col)` of the current selection.
    pub fn position(&self) -> (usize, usize) {
        (self.selected / self.cols, self.selected % self.cols)
    }

    /// Jumps to `index`. Returns `false` and leaves the cursor alone when the
    /// index is outside the grid.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        self.selected = index;
        true
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Moves one cell in `direction`. Returns whether the selection changed.
    pub fn move_selection(&mut self, direction: Direction) -> bool {
        let (row, col) = self.position();
        let (d_row, d_col) = direction.delta();

        let Some(row) = step(row, d_row, self.rows, self.edges) else {
            return false;
        };
        let Some(col) = step(col, d_col, self.cols, self.edges) else {
            return false;
        };

        let next = row * self.cols + col;
        let changed = next != self.selected;
        self.selected = next;
        changed
    }
}

fn step(index: usize, delta: isize, extent: usize, edges: EdgeBehavior) -> Option<usize> {
    let target = index as isize + delta;
    if (0..extent as isize).contains(&target) {
        return Some(target as usize);
    }
    match edges {
        EdgeBehavior::Wrap => Some(target.rem_euclid(extent as isize) as usize),
        EdgeBehavior::Clamp => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_menu_wraps_both_ways() {
        let mut grid = SelectableGrid::wrapping(3, 1);

        assert!(grid.move_selection(Direction::Up));
        assert_eq!(grid.selected(), 2);

        assert!(grid.move_selection(Direction::Down));
        assert_eq!(grid.selected(), 0);

        grid.move_selection(Direction::Down);
        grid.move_selection(Direction::Down);
        assert_eq!(grid.selected(), 2);
    }

    #[test]
    fn single_column_ignores_horizontal_moves() {
        let mut grid = SelectableGrid::wrapping(3, 1);
        grid.select(1);

        assert!(!grid.move_selection(Direction::Left));
        assert!(!grid.move_selection(Direction::Right));
        assert_eq!(grid.selected(), 1);
    }

    #[test]
    fn two_by_two_clamps_at_edges() {
        let mut grid = SelectableGrid::clamped(2, 2);

        assert!(!grid.move_selection(Direction::Up));
        assert!(!grid.move_selection(Direction::Left));
        assert_eq!(grid.selected(), 0);

        assert!(grid.move_selection(Direction::Right));
        assert_eq!(grid.selected(), 1);
        assert!(!grid.move_selection(Direction::Right));

        assert!(grid.move_selection(Direction::Down));
        assert_eq!(grid.selected(), 3);
        assert_eq!(grid.position(), (1, 1));
        assert!(!grid.move_selection(Direction::Down));

        assert!(grid.move_selection(Direction::Left));
        assert_eq!(grid.selected(), 2);
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut grid = SelectableGrid::clamped(2, 2);
        assert!(grid.select(3));
        assert!(!grid.select(4));
        assert_eq!(grid.selected(), 3);

        grid.reset();
        assert_eq!(grid.selected(), 0);
    }

    #[test]
    fn degenerate_dimensions_still_select() {
        let mut grid = SelectableGrid::wrapping(0, 0);
        assert_eq!(grid.len(), 1);
        for direction in Direction::ALL {
            assert!(!grid.move_selection(direction));
        }
    }
}
