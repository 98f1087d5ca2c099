use rand::{
    distributions::{Distribution, WeightedIndex},
    seq::SliceRandom,
    Rng,
};

use crate::{
    config::Params,
    grid::{Direction, Grid, Vector},
    scan,
};

/// A root being grown: where its tip is, which way it last went, and how
/// many steps it has taken.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Root {
    pub at: Vector,
    pub heading: Option<Direction>,
    pub steps: usize,
}

impl Root {
    pub const fn new(at: Vector) -> Self {
        Self {
            at,
            heading: None,
            steps: 0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Growth {
    /// Looking for somewhere to plant the next root.
    Idle,
    Growing(Root),
    /// No cell admits any more growth. The grid is final.
    Done,
}

/// Totals for one generation run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub roots: usize,
    pub steps: usize,
}

/// Grows walls into a [`Grid`] until it is a perfect maze.
///
/// Roots are planted one at a time on wall cells that still have room,
/// then walk up to [`Params::max_root_len`] steps of two cells each. Every
/// step must land in a box with no walls, so the walls stay a forest hanging
/// off the two mother walls and the open space stays a tree.
pub struct Labyrinth<'a, R> {
    laziness: f64,
    horizontal_weight: f64,
    max_root_len: usize,
    state: Growth,
    report: Report,
    rng: R,
    grid: &'a mut Grid,
}

impl<'a, R: Rng> Labyrinth<'a, R> {
    pub fn new(grid: &'a mut Grid, params: &Params, rng: R) -> Self {
        debug_assert_eq!(grid.size(), params.size());
        Self {
            laziness: params.laziness(),
            horizontal_weight: params.horizontal_weight(),
            max_root_len: params.max_root_len(),
            state: Growth::Idle,
            report: Report::default(),
            rng,
            grid,
        }
    }

    /// Runs to completion.
    pub fn generate(&mut self) -> Report {
        while self.step() {}

        log::info!(
            "grew {} roots over {} steps on a {size}x{size} grid",
            self.report.roots,
            self.report.steps,
            size = self.grid.size(),
        );
        self.report
    }

    /// Performs one state transition. Returns `false` once growth is done.
    pub fn step(&mut self) -> bool {
        self.state = match self.state {
            Growth::Idle => self.plant(),
            Growth::Growing(root) => self.grow(root),
            Growth::Done => Growth::Done,
        };
        self.state != Growth::Done
    }

    pub const fn state(&self) -> Growth {
        self.state
    }

    pub const fn report(&self) -> Report {
        self.report
    }

    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    fn plant(&mut self) -> Growth {
        let eligible = scan::scan(self.grid).eligible();
        let Some(&start) = eligible.choose(&mut self.rng) else {
            return Growth::Done;
        };

        self.report.roots += 1;
        log::debug!(
            "planting root at {start:?} ({} candidate cells)",
            eligible.len()
        );
        Growth::Growing(Root::new(start))
    }

    fn grow(&mut self, mut root: Root) -> Growth {
        let moves = scan::scan_at(self.grid, root.at);

        // Fails only when every weight is zero.
        let Ok(directions) = WeightedIndex::new(moves.weights(self.horizontal_weight)) else {
            log::debug!("root stuck at {:?} after {} steps", root.at, root.steps);
            return Growth::Idle;
        };

        let dir = match root.heading {
            Some(dir)
                if root.steps > 0
                    && moves.allows(dir)
                    && self.rng.gen::<f64>() < self.laziness =>
            {
                dir
            }
            _ => Direction::ALL[directions.sample(&mut self.rng)],
        };

        self.carve(root.at, dir);
        root.at = root.at.toward(dir, 2);
        root.heading = Some(dir);
        root.steps += 1;
        self.report.steps += 1;

        if root.steps == self.max_root_len {
            log::debug!("root reached full length at {:?}", root.at);
            Growth::Idle
        } else {
            Growth::Growing(root)
        }
    }

    fn carve(&mut self, from: Vector, dir: Direction) {
        self.grid.set(from.toward(dir, 1), true);
        self.grid.set(from.toward(dir, 2), true);
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn starts_idle_and_plants_first_eligible_cell() {
        let params = Params::new(7, 0.0, 0.0, 1.3).unwrap();
        let mut grid = Grid::new(7);
        let mut labyrinth = Labyrinth::new(&mut grid, &params, StepRng::new(0, 0));

        assert_eq!(labyrinth.state(), Growth::Idle);
        assert!(labyrinth.step());
        assert_eq!(labyrinth.state(), Growth::Growing(Root::new(Vector(2, 0))));
        assert_eq!(labyrinth.report().roots, 1);
    }

    #[test]
    fn first_step_carves_two_cells() {
        let params = Params::new(7, 0.0, 0.0, 1.3).unwrap();
        let mut grid = Grid::new(7);
        let mut labyrinth = Labyrinth::new(&mut grid, &params, StepRng::new(0, 0));
        labyrinth.step();
        labyrinth.step();

        assert_eq!(
            labyrinth.state(),
            Growth::Growing(Root {
                at: Vector(2, 2),
                heading: Some(Direction::Down),
                steps: 1,
            })
        );
        assert_eq!(labyrinth.grid().get(Vector(2, 1)), Some(true));
        assert_eq!(labyrinth.grid().get(Vector(2, 2)), Some(true));
    }

    #[test]
    fn stuck_root_returns_to_idle() {
        let params = Params::new(7, 0.0, 0.0, 1.3).unwrap();
        let mut grid = Grid::new(7);
        let mut labyrinth = Labyrinth::new(&mut grid, &params, StepRng::new(0, 0));
        // The top-left corner has no room in any direction.
        labyrinth.state = Growth::Growing(Root::new(Vector(0, 0)));
        let before = labyrinth.grid().clone();

        assert!(labyrinth.step());
        assert_eq!(labyrinth.state(), Growth::Idle);
        assert_eq!(labyrinth.grid(), &before);
    }

    #[test]
    fn full_laziness_keeps_heading() {
        let params = Params::new(15, 1.0, 0.0, 10.0).unwrap();
        let mut grid = Grid::new(15);
        let mut labyrinth = Labyrinth::new(&mut grid, &params, ChaCha8Rng::seed_from_u64(3));
        labyrinth.state = Growth::Growing(Root {
            at: Vector(0, 6),
            heading: Some(Direction::Right),
            steps: 1,
        });

        for expected in [2, 4, 6, 8, 10] {
            assert!(labyrinth.step());
            match labyrinth.state() {
                Growth::Growing(root) => {
                    assert_eq!(root.heading, Some(Direction::Right));
                    assert_eq!(root.at, Vector(expected, 6));
                }
                other => panic!("unexpected state {other:?}"),
            }
        }
    }

    #[test]
    fn root_length_is_capped() {
        let params = Params::new(31, 0.5, 0.0, 0.1).unwrap();
        assert_eq!(params.max_root_len(), 1);
        let mut grid = Grid::new(31);
        let mut labyrinth = Labyrinth::new(&mut grid, &params, ChaCha8Rng::seed_from_u64(9));

        for _ in 0..50 {
            labyrinth.step();
            if let Growth::Growing(root) = labyrinth.state() {
                assert_eq!(root.steps, 0);
            }
        }
    }

    #[test]
    fn done_is_terminal() {
        let params = Params::new(3, 0.5, 0.0, 1.0).unwrap();
        let mut grid = Grid::new(3);
        let mut labyrinth = Labyrinth::new(&mut grid, &params, ChaCha8Rng::seed_from_u64(0));

        assert!(!labyrinth.step());
        assert_eq!(labyrinth.state(), Growth::Done);
        assert!(!labyrinth.step());
        assert_eq!(labyrinth.generate(), Report::default());
    }
}
