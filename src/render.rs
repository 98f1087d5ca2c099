#![allow(clippy::cast_possible_truncation)]

use std::{fmt::Display, path::Path, str::FromStr};

use image::{ImageError, Rgb, RgbImage};

use crate::config::ConfigError;

/// The finished maze without its margin. `true` is a wall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    size: usize,
    cells: Vec<bool>,
}

impl Maze {
    pub(crate) fn new(size: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    /// Whether column `x` of row `y` is a wall.
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.size + x]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.size)
    }

    /// Paints every cell as a `scale × scale` square, walls in the high end
    /// of the colormap and open cells in the low end.
    pub fn to_image(&self, colormap: Colormap, scale: u32) -> RgbImage {
        let scale = scale.max(1);
        let side = self.size as u32 * scale;
        let (open, wall) = colormap.ends();
        RgbImage::from_fn(side, side, |px, py| {
            if self.is_wall((px / scale) as usize, (py / scale) as usize) {
                Rgb(wall)
            } else {
                Rgb(open)
            }
        })
    }

    /// Saves the maze as an image. The format follows the file extension.
    pub fn save(&self, path: &Path, colormap: Colormap, scale: u32) -> Result<(), ImageError> {
        self.to_image(colormap, scale).save(path)
    }
}

impl Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for &wall in row {
                write!(f, "{}", if wall { "#I" } else { "  " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Two-colour palettes taken from the ends of the matplotlib colormaps of
/// the same name.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Colormap {
    #[default]
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    Gray,
    Binary,
}

impl Colormap {
    pub const ALL: [Self; 7] = [
        Self::Viridis,
        Self::Plasma,
        Self::Inferno,
        Self::Magma,
        Self::Cividis,
        Self::Gray,
        Self::Binary,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Inferno => "inferno",
            Self::Magma => "magma",
            Self::Cividis => "cividis",
            Self::Gray => "gray",
            Self::Binary => "binary",
        }
    }

    /// `(low, high)` end colours.
    pub const fn ends(self) -> ([u8; 3], [u8; 3]) {
        match self {
            Self::Viridis => ([68, 1, 84], [253, 231, 37]),
            Self::Plasma => ([13, 8, 135], [240, 249, 33]),
            Self::Inferno => ([0, 0, 4], [252, 255, 164]),
            Self::Magma => ([0, 0, 4], [252, 253, 191]),
            Self::Cividis => ([0, 34, 78], [254, 232, 56]),
            Self::Gray => ([0, 0, 0], [255, 255, 255]),
            Self::Binary => ([255, 255, 255], [0, 0, 0]),
        }
    }
}

impl Display for Colormap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colormap {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_ascii_lowercase();
        let name = match name.as_str() {
            "grey" => "gray",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| ConfigError::UnknownColormap { name: s.to_owned() })
    }
}
