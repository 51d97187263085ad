//! Immutable 4-connected terrain graph.

use log::debug;
use orienteer_core::{Color, Grid, Point, Range};

use crate::cost::CostModel;
use crate::error::PathError;
use crate::neighbors::Direction;

/// Real-world distance covered by one pixel step along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelScale {
    /// Metres per column step (longitude axis).
    pub horizontal: f64,
    /// Metres per row step (latitude axis).
    pub vertical: f64,
}

impl Default for PixelScale {
    fn default() -> Self {
        Self {
            horizontal: 10.29,
            vertical: 7.55,
        }
    }
}

impl PixelScale {
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Same distance along both axes.
    pub const fn uniform(unit: f64) -> Self {
        Self::new(unit, unit)
    }

    /// Step distance for a move in `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> f64 {
        if dir.is_horizontal() {
            self.horizontal
        } else {
            self.vertical
        }
    }

    fn validate(self) -> Result<(), PathError> {
        for (axis, v) in [("horizontal", self.horizontal), ("vertical", self.vertical)] {
            if !(v.is_finite() && v > 0.0) {
                return Err(PathError::MalformedInput(format!(
                    "{axis} unit distance must be positive and finite, got {v}"
                )));
            }
        }
        Ok(())
    }
}

/// A directed edge to an orthogonal neighbour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Target cell id.
    pub to: usize,
    /// True traversal cost, never negative.
    pub weight: f64,
}

/// The terrain graph. Cell ids are `row * width + col`.
///
/// Outgoing edges are stored in one flat array, with `offsets[id]..offsets[id + 1]`
/// delimiting the edges of `id`.
#[derive(Debug, Clone)]
pub struct GridGraph {
    width: usize,
    height: usize,
    elevation: Vec<f64>,
    adjustment: Vec<f64>,
    offsets: Vec<usize>,
    edges: Vec<Edge>,
}

impl GridGraph {
    /// Build a graph with the standard cost model and nothing blocked.
    pub fn new(
        elevation: &Grid<f64>,
        terrain: &Grid<Color>,
        scale: PixelScale,
    ) -> Result<Self, PathError> {
        Self::builder(elevation, terrain).scale(scale).build()
    }

    /// Start configuring a graph over the given inputs.
    pub fn builder<'a>(elevation: &'a Grid<f64>, terrain: &'a Grid<Color>) -> GraphBuilder<'a> {
        GraphBuilder {
            elevation,
            terrain,
            scale: PixelScale::default(),
            model: CostModel::default(),
            blocked: None,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.elevation.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elevation.is_empty()
    }

    /// Total number of directed edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        Range::with_size(self.width as i32, self.height as i32)
    }

    /// Cell id of `p`, or `None` if out of bounds.
    #[inline]
    pub fn id(&self, p: Point) -> Option<usize> {
        if self.bounds().contains(p) {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    /// Like [`id`](GridGraph::id) but reports an `InvalidCoordinate` error.
    pub fn checked_id(&self, p: Point) -> Result<usize, PathError> {
        self.id(p).ok_or(PathError::InvalidCoordinate {
            point: p,
            bounds: self.bounds(),
        })
    }

    /// Position of cell `id`.
    #[inline]
    pub fn point(&self, id: usize) -> Point {
        Point::new((id % self.width) as i32, (id / self.width) as i32)
    }

    #[inline]
    pub fn elevation(&self, id: usize) -> f64 {
        self.elevation[id]
    }

    #[inline]
    pub fn terrain_adjustment(&self, id: usize) -> f64 {
        self.adjustment[id]
    }

    /// Outgoing edges of `id`, in down, up, right, left order.
    #[inline]
    pub fn neighbors(&self, id: usize) -> &[Edge] {
        &self.edges[self.offsets[id]..self.offsets[id + 1]]
    }

    /// Weight of the edge `from → to`, if it exists.
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<f64> {
        self.neighbors(from)
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.weight)
    }
}

/// Configures and builds a [`GridGraph`].
pub struct GraphBuilder<'a> {
    elevation: &'a Grid<f64>,
    terrain: &'a Grid<Color>,
    scale: PixelScale,
    model: CostModel,
    blocked: Option<Box<dyn Fn(Point) -> bool + 'a>>,
}

impl<'a> GraphBuilder<'a> {
    /// Per-axis unit distances. Defaults to [`PixelScale::default`].
    pub fn scale(mut self, scale: PixelScale) -> Self {
        self.scale = scale;
        self
    }

    /// Terrain cost model. Defaults to the standard legend.
    pub fn cost_model(mut self, model: CostModel) -> Self {
        self.model = model;
        self
    }

    /// Cells for which `blocked` returns `true` get no edges in either
    /// direction, leaving them unreachable.
    pub fn blocked(mut self, blocked: impl Fn(Point) -> bool + 'a) -> Self {
        self.blocked = Some(Box::new(blocked));
        self
    }

    pub fn build(self) -> Result<GridGraph, PathError> {
        let elevation = self.elevation;
        let terrain = self.terrain;
        if !elevation.same_shape(terrain) {
            return Err(PathError::MalformedInput(format!(
                "elevation grid is {}x{} but terrain grid is {}x{}",
                elevation.width(),
                elevation.height(),
                terrain.width(),
                terrain.height()
            )));
        }
        if elevation.is_empty() {
            return Err(PathError::MalformedInput("grid has no cells".into()));
        }
        self.scale.validate()?;
        if let Some((p, v)) = elevation.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PathError::MalformedInput(format!(
                "elevation at {p} is not finite ({v})"
            )));
        }

        let width = elevation.width();
        let height = elevation.height();
        let is_blocked = |p: Point| self.blocked.as_ref().is_some_and(|f| f(p));

        let elev = elevation.as_slice();
        let adjustment: Vec<f64> = terrain
            .as_slice()
            .iter()
            .map(|&key| self.model.lookup(key))
            .collect();

        let mut offsets = Vec::with_capacity(elev.len() + 1);
        let mut edges = Vec::with_capacity(elev.len() * 4);
        offsets.push(0);
        for (id, p) in elevation.bounds().iter().enumerate() {
            if !is_blocked(p) {
                for dir in Direction::ALL {
                    let np = p + dir.delta();
                    let Some(nid) = elevation.index(np) else {
                        continue;
                    };
                    if is_blocked(np) {
                        continue;
                    }
                    edges.push(Edge {
                        to: nid,
                        weight: (elev[id] - elev[nid]).abs() + self.scale.step(dir),
                    });
                }
            }
            offsets.push(edges.len());
        }

        debug!(
            "built terrain graph {}x{}: {} edges, scale {}/{} m",
            width,
            height,
            edges.len(),
            self.scale.horizontal,
            self.scale.vertical
        );

        Ok(GridGraph {
            width,
            height,
            elevation: elev.to_vec(),
            adjustment,
            offsets,
            edges,
        })
    }
}
