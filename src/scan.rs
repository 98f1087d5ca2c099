//! Neighborhood scanning: where can a wall be extended by two cells without
//! touching any other wall?
//!
//! A move from `p` in direction `d` is legal when the 3×3 box centred on
//! `p + 2d` holds no wall at all. The box covers both cells that would be
//! carved plus everything around the landing cell, so a new segment can
//! never meet another wall, which would close a loop.
//!
//! ```text
//!   left          right          up          down
//!                                              v
//!  o o o          o o o         o o o          x
//!  o c o x <-  -> x o c o       o c o        o o o
//!  o o o          o o o         o o o        o c o
//!                                 x          o o o
//!                                 ^
//! ```
//!
//! [`scan`] answers this for every cell at once, [`scan_at`] for a single
//! cell. Both give the same answer for any wall cell on the lattice.

#![allow(clippy::cast_sign_loss, clippy::cast_possible_wrap, clippy::cast_possible_truncation)]

use std::ops::Range;

use crate::grid::{Direction, Grid, Vector, Window, PAD};

/// Legal moves from one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Moves {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Moves {
    pub const fn allows(self, dir: Direction) -> bool {
        match dir {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    pub const fn any(self) -> bool {
        self.left || self.right || self.up || self.down
    }

    /// Selection weights in [`Direction::ALL`] order. Legal horizontal moves
    /// get `horizontal`, legal vertical moves `1 - horizontal`, illegal ones 0.
    pub fn weights(self, horizontal: f64) -> [f64; 4] {
        Direction::ALL.map(|dir| match (self.allows(dir), dir.is_horizontal()) {
            (false, _) => 0.0,
            (true, true) => horizontal,
            (true, false) => 1.0 - horizontal,
        })
    }
}

impl Window {
    /// Local form of the scan: checks the four 3×3 blocks two cells away from
    /// the centre for walls.
    pub fn moves(&self) -> Moves {
        Moves {
            left: self.block_clear(2..5, 0..3),
            right: self.block_clear(2..5, 4..7),
            up: self.block_clear(0..3, 2..5),
            down: self.block_clear(4..7, 2..5),
        }
    }

    fn block_clear(&self, rows: Range<usize>, cols: Range<usize>) -> bool {
        self.0[rows]
            .iter()
            .map(|row| row[cols.clone()].iter().filter(|&&wall| wall).count())
            .sum::<usize>()
            == 0
    }
}

/// Legal moves from `pos`, read from the 7×7 window around it. Does not
/// check that `pos` itself is a wall on the lattice.
pub fn scan_at(grid: &Grid, pos: Vector) -> Moves {
    grid.window(pos).moves()
}

/// Per-direction move masks over the visible `size × size` cells, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveMasks {
    size: usize,
    pub left: Vec<bool>,
    pub right: Vec<bool>,
    pub up: Vec<bool>,
    pub down: Vec<bool>,
}

impl MoveMasks {
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Legal moves from `pos`. Positions outside the maze have none.
    pub fn at(&self, pos: Vector) -> Moves {
        let size = self.size as i32;
        if pos.0 < 0 || pos.0 >= size || pos.1 < 0 || pos.1 >= size {
            return Moves::default();
        }
        let idx = pos.1 as usize * self.size + pos.0 as usize;
        Moves {
            left: self.left[idx],
            right: self.right[idx],
            up: self.up[idx],
            down: self.down[idx],
        }
    }

    /// Cells with at least one legal move, in row-major order.
    pub fn eligible(&self) -> Vec<Vector> {
        let size = self.size as i32;
        (0..size)
            .flat_map(|y| (0..size).map(move |x| Vector(x, y)))
            .filter(|&pos| self.at(pos).any())
            .collect()
    }
}

/// Full-grid form of the scan. A cell is marked only if it is a wall, lies on
/// the lattice, and the box in that direction is clear.
pub fn scan(grid: &Grid) -> MoveMasks {
    let side = grid.side();

    // line[y][x]: some wall among the three cells (x-1..=x+1, y).
    let mut line = vec![false; side * side];
    for py in 0..side {
        for px in 1..side - 1 {
            line[py * side + px] = (px - 1..=px + 1).any(|x| grid.get_padded(x, py));
        }
    }

    // clear[y][x]: the 3×3 box centred on (x, y) holds no wall.
    let mut clear = vec![false; side * side];
    for py in 1..side - 1 {
        for px in 1..side - 1 {
            clear[py * side + px] = (py - 1..=py + 1).all(|y| !line[y * side + px]);
        }
    }

    let size = grid.size();
    let mut masks = MoveMasks {
        size,
        left: vec![false; size * size],
        right: vec![false; size * size],
        up: vec![false; size * size],
        down: vec![false; size * size],
    };

    let box_clear = |pos: Vector| clear[((pos.1 + PAD) as usize) * side + (pos.0 + PAD) as usize];

    for y in 0..size as i32 {
        for x in 0..size as i32 {
            let pos = Vector(x, y);
            if !pos.on_lattice() || !grid.is_wall(pos) {
                continue;
            }
            let idx = y as usize * size + x as usize;
            masks.left[idx] = box_clear(pos.toward(Direction::Left, 2));
            masks.right[idx] = box_clear(pos.toward(Direction::Right, 2));
            masks.up[idx] = box_clear(pos.toward(Direction::Up, 2));
            masks.down[idx] = box_clear(pos.toward(Direction::Down, 2));
        }
    }

    masks
}
