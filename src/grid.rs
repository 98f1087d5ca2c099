#![allow(clippy::cast_sign_loss, clippy::cast_possible_wrap, clippy::cast_possible_truncation)]

use std::ops::Add;

use crate::render::Maze;

/// Width of the wall margin around the visible maze. Every neighborhood
/// lookup stays within ±3 of an interior cell, so it never leaves the grid.
pub const PAD: i32 = 3;

/// A position in interior coordinates: `Vector(x, y)` is column `x`, row `y`
/// of the visible maze. Components may go negative inside the margin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector(pub i32, pub i32);

impl Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0, self.1 + other.1)
    }
}

impl Vector {
    /// The cell `cells` steps from here in direction `dir`.
    pub const fn toward(self, dir: Direction, cells: i32) -> Self {
        let Self(dx, dy) = dir.offset();
        Self(self.0 + dx * cells, self.1 + dy * cells)
    }

    /// Whether the position sits on the sublattice roots may start from and
    /// step onto: row and column share parity.
    pub const fn on_lattice(self) -> bool {
        (self.0 - self.1) % 2 == 0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Fixed order shared by move masks and weight vectors.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    pub const fn offset(self) -> Vector {
        match self {
            Self::Left => Vector(-1, 0),
            Self::Right => Vector(1, 0),
            Self::Up => Vector(0, -1),
            Self::Down => Vector(0, 1),
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Padded wall grid. `true` is a wall, `false` is open space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    side: i32,
    cells: Vec<bool>,
}

impl Grid {
    /// Builds the starting grid for a maze of side `size`: a solid margin,
    /// a cleared interior and the two mother walls.
    ///
    /// The mother walls are two interlocking "C" shapes. The top-left one
    /// leaves the top-right corner open as the entry, the bottom-right one
    /// leaves the bottom-left corner open as the exit. For `size == 7`:
    ///
    /// ```text
    /// x x x x x . .
    /// x . . . . . .
    /// x . . . . . x
    /// x . . . . . x
    /// x . . . . . x
    /// . . . . . . x
    /// . . x x x x x
    /// ```
    ///
    /// `size` must be odd and at least 3; that is enforced by
    /// [`Params::new`](crate::Params::new), not here.
    pub fn new(size: usize) -> Self {
        debug_assert!(size % 2 == 1 && size >= 3, "grid side must be odd");

        let size = size as i32;
        let side = size + 2 * PAD;
        let mut grid = Self {
            size,
            side,
            cells: vec![true; (side * side) as usize],
        };

        for y in 0..size {
            for x in 0..size {
                grid.set(Vector(x, y), false);
            }
        }

        for i in 0..size - 2 {
            grid.set(Vector(i, 0), true);
            grid.set(Vector(0, i), true);
        }
        for i in 2..size {
            grid.set(Vector(i, size - 1), true);
            grid.set(Vector(size - 1, i), true);
        }

        grid
    }

    /// Side length of the visible maze.
    pub const fn size(&self) -> usize {
        self.size as usize
    }

    /// Side length including the margin on both sides.
    pub const fn side(&self) -> usize {
        self.side as usize
    }

    pub const fn contains(&self, pos: Vector) -> bool {
        pos.0 >= 0 && pos.0 < self.size && pos.1 >= 0 && pos.1 < self.size
    }

    /// Cell at `pos`, margin included. `None` beyond the margin.
    pub fn get(&self, pos: Vector) -> Option<bool> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Everything beyond the margin counts as wall.
    pub fn is_wall(&self, pos: Vector) -> bool {
        self.get(pos).unwrap_or(true)
    }

    /// Writes beyond the margin are ignored.
    pub fn set(&mut self, pos: Vector, wall: bool) {
        if let Some(cell) = self.index(pos).and_then(|idx| self.cells.get_mut(idx)) {
            *cell = wall;
        }
    }

    /// Raw access in padded coordinates, `0..side` on both axes.
    pub(crate) fn get_padded(&self, px: usize, py: usize) -> bool {
        self.cells[py * self.side() + px]
    }

    /// Copies the 7×7 block centred on `center`. `center` must be an interior
    /// cell, which keeps the block inside the margin.
    pub fn window(&self, center: Vector) -> Window {
        debug_assert!(self.contains(center), "window centre {center:?} outside maze");

        let mut cells = [[false; WINDOW]; WINDOW];
        for (dy, row) in cells.iter_mut().enumerate() {
            for (dx, cell) in row.iter_mut().enumerate() {
                *cell = self.is_wall(center + Vector(dx as i32 - PAD, dy as i32 - PAD));
            }
        }
        Window(cells)
    }

    /// Strips the margin and returns the visible `size × size` snapshot.
    pub fn maze(&self) -> Maze {
        let mut cells = Vec::with_capacity(self.size() * self.size());
        for y in 0..self.size {
            for x in 0..self.size {
                cells.push(self.is_wall(Vector(x, y)));
            }
        }
        Maze::new(self.size(), cells)
    }

    /// Number of wall cells, margin included.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    const fn index(&self, pos: Vector) -> Option<usize> {
        let (px, py) = (pos.0 + PAD, pos.1 + PAD);
        if px >= 0 && px < self.side && py >= 0 && py < self.side {
            Some((py * self.side + px) as usize)
        } else {
            None
        }
    }
}

/// Side of a [`Window`].
pub const WINDOW: usize = 7;

/// Owned copy of the cells at offsets −3..=3 around one position,
/// indexed `[row][col]` with the position at `[3][3]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window(pub [[bool; WINDOW]; WINDOW]);

#[cfg(test)]
mod tests {
    use super::*;

    fn picture(grid: &Grid) -> Vec<String> {
        let size = grid.size() as i32;
        (0..size)
            .map(|y| {
                (0..size)
                    .map(|x| if grid.is_wall(Vector(x, y)) { 'x' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn mother_walls_for_size_seven() {
        let grid = Grid::new(7);
        assert_eq!(
            picture(&grid),
            vec![
                "xxxxx..", "x......", "x.....x", "x.....x", "x.....x", "......x", "..xxxxx",
            ]
        );
    }

    #[test]
    fn smallest_grid_keeps_only_corner_walls() {
        let grid = Grid::new(3);
        assert_eq!(picture(&grid), vec!["x..", "...", "..x"]);
    }

    #[test]
    fn margin_is_solid_wall() {
        let grid = Grid::new(9);
        let side = grid.side();
        assert_eq!(side, 15);
        for p in 0..side {
            for m in (0..3).chain(side - 3..side) {
                assert!(grid.get_padded(p, m), "margin row {m} col {p} is open");
                assert!(grid.get_padded(m, p), "margin col {m} row {p} is open");
            }
        }
    }

    #[test]
    fn positions_beyond_margin_do_not_alias() {
        let mut grid = Grid::new(7);
        // One past the right margin would land on the next padded row.
        assert_eq!(grid.get(Vector(7 + PAD, 2)), None);
        assert_eq!(grid.get(Vector(-PAD - 1, 2)), None);
        assert_eq!(grid.get(Vector(2, 7 + PAD)), None);
        assert_eq!(grid.get(Vector(6 + PAD, 2)), Some(true));
        assert_eq!(grid.get(Vector(2, 2)), Some(false));
        assert!(grid.is_wall(Vector(100, -100)));

        let before = grid.clone();
        grid.set(Vector(7 + PAD, 2), false);
        grid.set(Vector(-PAD - 1, 3), true);
        grid.set(Vector(3, -PAD - 1), true);
        assert_eq!(grid, before);
    }

    #[test]
    fn window_is_centred() {
        let grid = Grid::new(7);
        let window = grid.window(Vector(0, 2));
        // (0, 2) itself is on the left mother wall.
        assert!(window.0[3][3]);
        // Three columns to the left is margin.
        assert!(window.0[3][0]);
        // (2, 2) is open.
        assert!(!window.0[3][5]);
    }

    #[test]
    fn maze_strips_margin() {
        let grid = Grid::new(5);
        let maze = grid.maze();
        assert_eq!(maze.size(), 5);
        assert!(maze.is_wall(0, 0));
        assert!(!maze.is_wall(4, 0));
        assert!(!maze.is_wall(0, 4));
        assert!(maze.is_wall(4, 4));
    }

    #[test]
    fn stepping_toward_a_direction() {
        let pos = Vector(2, 4);
        assert_eq!(pos.toward(Direction::Left, 2), Vector(0, 4));
        assert_eq!(pos.toward(Direction::Right, 1), Vector(3, 4));
        assert_eq!(pos.toward(Direction::Up, 2), Vector(2, 2));
        assert_eq!(pos.toward(Direction::Down, 2), Vector(2, 6));
        assert_eq!(pos.toward(Direction::Up, 0), pos);
    }

    #[test]
    fn lattice_parity() {
        assert!(Vector(0, 0).on_lattice());
        assert!(Vector(1, 3).on_lattice());
        assert!(Vector(-1, 1).on_lattice());
        assert!(!Vector(0, 1).on_lattice());
        assert!(!Vector(-2, 1).on_lattice());
    }
}
