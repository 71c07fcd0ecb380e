//! Reproducible random points and triangles on a coarse grid.
//!
//! Model
//! - Fully random coordinates almost never coincide, which would leave
//!   duplicate grouping with nothing to do. Points are instead drawn on a
//!   `cols × rows` lattice (30 × 30 by default) and mapped into `Bounds2`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{GeomError, Result};
use crate::geom2::{Point2, Triangle};

/// Attempts before `draw_triangle` gives up on a non-degenerate draw.
const TRIANGLE_ATTEMPTS: usize = 64;

/// Lattice resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCfg {
    pub cols: u32,
    pub rows: u32,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self { cols: 30, rows: 30 }
    }
}

impl GridCfg {
    fn validate(&self) -> Result<()> {
        if self.cols == 0 || self.rows == 0 {
            return Err(GeomError::invalid(format!(
                "grid must be non-empty, got {}x{}",
                self.cols, self.rows
            )));
        }
        Ok(())
    }
}

/// Axis-aligned rectangle the lattice is mapped into.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    pub min: Point2,
    pub max: Point2,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self {
            min: Vector2::new(-10.0, -10.0),
            max: Vector2::new(10.0, 10.0),
        }
    }
}

impl Bounds2 {
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    fn validate(&self) -> Result<()> {
        let finite = [self.min.x, self.min.y, self.max.x, self.max.y]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.min.x >= self.max.x || self.min.y >= self.max.y {
            return Err(GeomError::invalid(format!(
                "bounds must be finite with min < max, got {:?}..{:?}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, p: Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

#[inline]
fn grid_point<R: Rng>(rng: &mut R, grid: GridCfg, bounds: Bounds2) -> Point2 {
    let gx = rng.gen_range(0..grid.cols) as f64;
    let gy = rng.gen_range(0..grid.rows) as f64;
    let size = bounds.max - bounds.min;
    Vector2::new(
        bounds.min.x + size.x * gx / grid.cols as f64,
        bounds.min.y + size.y * gy / grid.rows as f64,
    )
}

/// Draw `count` lattice points inside `bounds`.
pub fn draw_grid_points(
    count: usize,
    grid: GridCfg,
    bounds: Bounds2,
    tok: ReplayToken,
) -> Result<Vec<Point2>> {
    grid.validate()?;
    bounds.validate()?;
    let mut rng = tok.to_std_rng();
    Ok((0..count).map(|_| grid_point(&mut rng, grid, bounds)).collect())
}

/// Draw a non-degenerate triangle with lattice vertices.
pub fn draw_triangle(grid: GridCfg, bounds: Bounds2, tok: ReplayToken) -> Result<Triangle> {
    grid.validate()?;
    bounds.validate()?;
    let mut rng = tok.to_std_rng();
    for _ in 0..TRIANGLE_ATTEMPTS {
        let t = Triangle::new(
            grid_point(&mut rng, grid, bounds),
            grid_point(&mut rng, grid, bounds),
            grid_point(&mut rng, grid, bounds),
        );
        if !t.is_degenerate() {
            return Ok(t);
        }
    }
    Err(GeomError::invalid(format!(
        "no non-degenerate triangle on a {}x{} grid after {TRIANGLE_ATTEMPTS} draws",
        grid.cols, grid.rows
    )))
}
