//! Terrain cost model.

use std::collections::HashMap;

use orienteer_core::Color;

/// One entry of the terrain legend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainClass {
    pub key: Color,
    pub name: &'static str,
    /// Bonus subtracted from a cell's heuristic score. Never negative.
    pub adjustment: f64,
}

const fn class(r: u8, g: u8, b: u8, name: &'static str, adjustment: f64) -> TerrainClass {
    TerrainClass {
        key: Color::from_rgb(r, g, b),
        name,
        adjustment,
    }
}

/// The orienteering map legend used by [`CostModel::default`].
pub const STANDARD_TERRAIN: [TerrainClass; 10] = [
    class(248, 148, 18, "open land", 0.0),
    class(255, 192, 0, "rough meadow", 0.5),
    class(255, 255, 255, "easy movement forest", 0.0),
    class(2, 208, 60, "slow run forest", 0.4),
    class(2, 136, 40, "walk forest", 0.3),
    class(5, 73, 24, "impassible vegetation", 0.6),
    class(0, 0, 255, "lake/swamp/marsh", 0.8),
    class(71, 51, 3, "paved road", 0.1),
    class(0, 0, 0, "footpath", 0.2),
    class(205, 0, 101, "out of bounds", 0.0),
];

/// Maps terrain classification keys to heuristic adjustments.
///
/// Unknown keys resolve to `0.0`: unrecognised terrain is neutral, not an
/// error.
#[derive(Debug, Clone, PartialEq)]
pub struct CostModel {
    table: HashMap<Color, f64>,
}

impl Default for CostModel {
    fn default() -> Self {
        Self::from_entries(STANDARD_TERRAIN.iter().map(|c| (c.key, c.adjustment)))
    }
}

impl CostModel {
    /// A model with no entries; every key resolves to zero.
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Build a model from `(key, adjustment)` pairs. Later duplicates win.
    /// Negative or non-finite adjustments are clamped to zero.
    pub fn from_entries(entries: impl IntoIterator<Item = (Color, f64)>) -> Self {
        let table = entries
            .into_iter()
            .map(|(key, adj)| (key, if adj.is_finite() { adj.max(0.0) } else { 0.0 }))
            .collect();
        Self { table }
    }

    /// Adjustment for `key`, or `0.0` when the key is not in the table.
    #[inline]
    pub fn lookup(&self, key: Color) -> f64 {
        self.table.get(&key).copied().unwrap_or(0.0)
    }

    /// Adjustment for `key` if the key is known.
    #[inline]
    pub fn get(&self, key: Color) -> Option<f64> {
        self.table.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Entries sorted by key.
    pub fn entries(&self) -> Vec<(Color, f64)> {
        let mut out: Vec<_> = self.table.iter().map(|(&k, &v)| (k, v)).collect();
        out.sort_by_key(|&(k, _)| k);
        out
    }
}

/// Legend name of a standard terrain colour.
pub fn terrain_name(key: Color) -> Option<&'static str> {
    STANDARD_TERRAIN
        .iter()
        .find(|c| c.key == key)
        .map(|c| c.name)
}
