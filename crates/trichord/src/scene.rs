//! Scene: the caller-owned point set and triangle, plus the last solution.
//!
//! Mutations drop any stored solution. The triangle can be set directly or
//! built from three successive vertex inputs (one per click in an
//! interactive front end).

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chord::{find_longest_chord_with, ChordResult};
use crate::dupes::{group_duplicates, DuplicatePartition};
use crate::error::{GeomError, Result};
use crate::geom2::{GeomCfg, Point2, Triangle};
use crate::rand::{draw_grid_points, draw_triangle, Bounds2, GridCfg, ReplayToken};

#[derive(Clone, Debug, Default)]
pub struct Scene {
    bounds: Bounds2,
    grid: GridCfg,
    cfg: GeomCfg,
    points: Vec<Point2>,
    triangle: Option<Triangle>,
    pending: Vec<Point2>,
    solution: Option<ChordResult>,
}

impl Scene {
    pub fn new(bounds: Bounds2) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    pub fn with_cfg(mut self, cfg: GeomCfg) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn with_grid(mut self, grid: GridCfg) -> Self {
        self.grid = grid;
        self
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn triangle(&self) -> Option<&Triangle> {
        self.triangle.as_ref()
    }

    pub fn bounds(&self) -> Bounds2 {
        self.bounds
    }

    /// Vertices buffered toward the next triangle (0, 1 or 2).
    pub fn pending_vertices(&self) -> &[Point2] {
        &self.pending
    }

    pub fn add_point(&mut self, p: Point2) {
        self.solution = None;
        self.points.push(p);
        info!(x = p.x, y = p.y, total = self.points.len(), "point added");
    }

    pub fn add_points(&mut self, pts: impl IntoIterator<Item = Point2>) {
        for p in pts {
            self.add_point(p);
        }
    }

    /// Buffer one triangle vertex; the third call builds the triangle.
    ///
    /// Returns the new triangle when one was completed.
    pub fn add_triangle_point(&mut self, p: Point2) -> Option<Triangle> {
        self.pending.push(p);
        if self.pending.len() < 3 {
            return None;
        }
        let t = Triangle::new(self.pending[0], self.pending[1], self.pending[2]);
        self.pending.clear();
        self.set_triangle(t);
        Some(t)
    }

    pub fn set_triangle(&mut self, t: Triangle) {
        self.solution = None;
        self.triangle = Some(t);
        info!(triangle = ?t, "triangle set");
    }

    /// Add `count` lattice points drawn inside the scene bounds.
    pub fn add_random_points(&mut self, count: usize, tok: ReplayToken) -> Result<()> {
        let pts = draw_grid_points(count, self.grid, self.bounds, tok)?;
        self.add_points(pts);
        Ok(())
    }

    pub fn set_random_triangle(&mut self, tok: ReplayToken) -> Result<Triangle> {
        let t = draw_triangle(self.grid, self.bounds, tok)?;
        self.set_triangle(t);
        Ok(t)
    }

    /// Drop points, triangle, buffered vertices and solution.
    pub fn clear(&mut self) {
        self.points.clear();
        self.triangle = None;
        self.pending.clear();
        self.solution = None;
    }

    /// Forget the current solution, keeping the inputs.
    pub fn cancel(&mut self) {
        self.solution = None;
    }

    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    pub fn solution(&self) -> Option<&ChordResult> {
        self.solution.as_ref()
    }

    /// Run the chord search over the current snapshot and store the result.
    pub fn solve(&mut self) -> Result<&ChordResult> {
        let triangle = self
            .triangle
            .ok_or_else(|| GeomError::invalid("no triangle set"))?;
        let res = find_longest_chord_with(&triangle, &self.points, self.cfg)?;
        match &res {
            ChordResult::Found(c) => info!(length = c.length, "solved"),
            ChordResult::NoSolution => info!("no qualifying chord"),
        }
        Ok(&*self.solution.insert(res))
    }

    pub fn group_duplicates(&self) -> DuplicatePartition {
        group_duplicates(&self.points)
    }

    pub fn to_file(&self) -> SceneFile {
        SceneFile {
            triangle: self.triangle,
            points: self.points.clone(),
        }
    }
}

/// Plain serde mirror of a scene's inputs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub triangle: Option<Triangle>,
    #[serde(default)]
    pub points: Vec<Point2>,
}

impl SceneFile {
    pub fn into_scene(self, bounds: Bounds2) -> Scene {
        let mut scene = Scene::new(bounds);
        if let Some(t) = self.triangle {
            scene.set_triangle(t);
        }
        scene.add_points(self.points);
        scene
    }
}
