#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

//! Perfect maze generation by randomized wall growth.
//!
//! Two mother walls are laid into the border of a padded grid. Roots then
//! sprout from existing walls and walk two cells at a time, but only into
//! space that has no wall nearby. Since the two wall families can never
//! meet, the result has exactly one path between the entry and the exit.
//!
//! ```
//! use labyrinth::Params;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let params = Params::new(21, 0.7, 0.0, 1.3)?;
//! let maze = labyrinth::generate(&params, ChaCha8Rng::seed_from_u64(1));
//! assert_eq!(maze.size(), 21);
//! # Ok::<(), labyrinth::ConfigError>(())
//! ```

pub mod config;
pub mod grid;
pub mod labyrinth;
pub mod render;
pub mod scan;

use rand::Rng;

pub use crate::config::{ConfigError, Params};
pub use crate::grid::{Direction, Grid, Vector};
pub use crate::labyrinth::{Growth, Labyrinth, Report, Root};
pub use crate::render::{Colormap, Maze};

/// Grows a complete maze for `params` using `rng`.
pub fn generate<R: Rng>(params: &Params, rng: R) -> Maze {
    let mut grid = Grid::new(params.size());
    Labyrinth::new(&mut grid, params, rng).generate();
    grid.maze()
}
