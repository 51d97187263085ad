use log::{debug, trace};
use orienteer_core::Point;

use crate::distance::ElevationEuclidean;
use crate::error::PathError;
use crate::graph::GridGraph;
use crate::search::{NO_PARENT, NodeRef, Query, SearchState};
use crate::traits::Heuristic;

/// Result of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found,
    NotFound,
}

impl SearchOutcome {
    #[inline]
    pub fn is_found(self) -> bool {
        self == SearchOutcome::Found
    }
}

impl SearchState {
    /// Search from `from` to `to` with the [`ElevationEuclidean`] heuristic.
    pub fn astar(
        &mut self,
        graph: &GridGraph,
        from: Point,
        to: Point,
    ) -> Result<SearchOutcome, PathError> {
        self.astar_with(graph, &ElevationEuclidean, from, to)
    }

    /// Best-first search ordered by `f = g + h − terrain adjustment`.
    ///
    /// Both endpoints are validated before anything is touched. Cells are
    /// settled in increasing `f` order, ties going to the earliest insertion.
    /// A closed cell is reopened whenever a cheaper route to it is found, so
    /// the result stays correct with an inconsistent heuristic.
    pub fn astar_with<H: Heuristic>(
        &mut self,
        graph: &GridGraph,
        heuristic: &H,
        from: Point,
        to: Point,
    ) -> Result<SearchOutcome, PathError> {
        let start_idx = graph.checked_id(from)?;
        let goal_idx = graph.checked_id(to)?;

        trace!("[astar] {from} -> {to}");

        let cur_gen = self.begin(graph.len());
        self.query = Some(Query {
            source: start_idx,
            dest: goal_idx,
        });

        let score = |idx: usize, g: f64| {
            g + heuristic.estimate(graph, idx, goal_idx) - graph.terrain_adjustment(idx)
        };

        // Initialise the start node.
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0.0;
            node.f = score(start_idx, 0.0);
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.stamp = 1;
            node.open = true;
        }

        let mut open = std::mem::take(&mut self.open);
        open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
            seq: self.seq,
            stamp: 1,
        });
        self.seq += 1;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            {
                let cn = &self.nodes[ci];
                if cn.generation != cur_gen || !cn.open || cn.stamp != current.stamp {
                    continue;
                }
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            self.expanded += 1;
            let current_g = self.nodes[ci].g;

            for edge in graph.neighbors(ci) {
                let ni = edge.to;
                let tentative_g = current_g + edge.weight;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = f64::INFINITY;
                    n.stamp = 0;
                }

                n.g = tentative_g;
                n.f = score(ni, tentative_g);
                n.parent = ci;
                n.open = true;
                n.stamp = n.stamp.wrapping_add(1);

                open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    seq: self.seq,
                    stamp: n.stamp,
                });
                self.seq += 1;
            }
        };

        open.clear();
        self.open = open;
        self.found = found;

        debug!(
            "[astar] {} -> {}: {} after expanding {} cells",
            from,
            to,
            if found { "found" } else { "not found" },
            self.expanded
        );

        Ok(if found {
            SearchOutcome::Found
        } else {
            SearchOutcome::NotFound
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CostModel;
    use crate::distance::ZeroHeuristic;
    use crate::graph::PixelScale;
    use crate::search::NodeState;
    use orienteer_core::{Color, Grid, Range};
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn flat_graph(width: usize, height: usize, scale: PixelScale) -> GridGraph {
        let e = Grid::new(width, height, 0.0);
        let t = Grid::new(width, height, Color::WHITE);
        GridGraph::new(&e, &t, scale).unwrap()
    }

    fn random_graph(seed: u64, width: usize, height: usize) -> GridGraph {
        let mut rng = StdRng::seed_from_u64(seed);
        let e = Grid::from_fn(width, height, |_| rng.random_range(0.0f64..40.0)).unwrap();
        let t = Grid::new(width, height, Color::WHITE);
        GridGraph::builder(&e, &t)
            .scale(PixelScale::new(1.5, 2.5))
            .cost_model(CostModel::empty())
            .build()
            .unwrap()
    }

    /// Exact single-source distances by repeated edge relaxation.
    fn bellman_ford(graph: &GridGraph, source: usize) -> Vec<f64> {
        let mut dist = vec![f64::INFINITY; graph.len()];
        dist[source] = 0.0;
        loop {
            let mut changed = false;
            for id in 0..graph.len() {
                if dist[id].is_infinite() {
                    continue;
                }
                for e in graph.neighbors(id) {
                    if dist[id] + e.weight < dist[e.to] {
                        dist[e.to] = dist[id] + e.weight;
                        changed = true;
                    }
                }
            }
            if !changed {
                return dist;
            }
        }
    }

    /// Admissible but inconsistent: a random fraction of the true distance.
    struct Scrambled(Vec<f64>);

    impl Heuristic for Scrambled {
        fn estimate(&self, _graph: &GridGraph, from: usize, _to: usize) -> f64 {
            self.0[from]
        }
    }

    #[test]
    fn flat_three_by_three() {
        let g = flat_graph(3, 3, PixelScale::uniform(1.0));
        let mut st = SearchState::for_graph(&g);
        let outcome = st.astar(&g, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert_eq!(outcome, SearchOutcome::Found);
        assert!(st.found());
        let dest = g.id(Point::new(2, 2)).unwrap();
        assert_eq!(st.g_score(dest), 4.0);
        assert!(st.predecessor(dest).is_some());
        assert_eq!(st.last_query(), Some((0, dest)));
    }

    #[test]
    fn out_of_range_endpoints_fail_before_search() {
        let g = flat_graph(3, 3, PixelScale::uniform(1.0));
        let mut st = SearchState::for_graph(&g);
        st.astar(&g, Point::new(0, 0), Point::new(1, 1)).unwrap();

        let err = st.astar(&g, Point::new(3, 0), Point::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            PathError::InvalidCoordinate {
                point: Point::new(3, 0),
                bounds: Range::new(0, 0, 3, 3)
            }
        );
        assert!(st.astar(&g, Point::new(0, 0), Point::new(0, -1)).is_err());
        // The previous query is left untouched.
        assert!(st.found());
        assert_eq!(st.last_query(), Some((0, 4)));
    }

    #[test]
    fn isolated_destination_is_not_found() {
        let e = Grid::new(4, 4, 0.0);
        let t = Grid::new(4, 4, Color::WHITE);
        let dest = Point::new(3, 3);
        let g = GridGraph::builder(&e, &t)
            .blocked(|p| p == dest)
            .build()
            .unwrap();
        let mut st = SearchState::for_graph(&g);
        let outcome = st.astar(&g, Point::new(0, 0), dest).unwrap();
        assert_eq!(outcome, SearchOutcome::NotFound);
        assert!(!st.found());
        let di = g.id(dest).unwrap();
        assert_eq!(st.predecessor(di), None);
        assert_eq!(st.node_state(di), NodeState::Unseen);
        // every other cell was settled
        assert_eq!(st.expanded(), 15);
    }

    #[test]
    fn source_equals_destination() {
        let g = flat_graph(2, 2, PixelScale::default());
        let mut st = SearchState::for_graph(&g);
        let p = Point::new(1, 0);
        assert!(st.astar(&g, p, p).unwrap().is_found());
        assert_eq!(st.expanded(), 0);
        assert_eq!(st.g_score(1), 0.0);
    }

    #[test]
    fn start_score_subtracts_terrain_adjustment() {
        let e = Grid::new(3, 1, 0.0);
        let t = Grid::from_rows(vec![vec![
            Color::from_rgb(0, 0, 255),
            Color::WHITE,
            Color::WHITE,
        ]])
        .unwrap();
        let g = GridGraph::new(&e, &t, PixelScale::uniform(1.0)).unwrap();
        let mut st = SearchState::for_graph(&g);
        st.astar(&g, Point::new(0, 0), Point::new(2, 0)).unwrap();
        assert!((st.f_score(0) - (2.0 - 0.8)).abs() < 1e-12);
        assert_eq!(st.node_state(0), NodeState::Closed);
    }

    #[test]
    fn reused_state_matches_fresh_state() {
        let g = random_graph(11, 9, 7);
        let queries = [
            (Point::new(0, 0), Point::new(8, 6)),
            (Point::new(4, 3), Point::new(0, 6)),
            (Point::new(8, 0), Point::new(1, 1)),
        ];
        let mut shared = SearchState::new(1);
        for (a, b) in queries {
            shared.astar(&g, a, b).unwrap();
            let mut fresh = SearchState::for_graph(&g);
            fresh.astar(&g, a, b).unwrap();
            let dest = g.id(b).unwrap();
            assert_eq!(shared.g_score(dest).to_bits(), fresh.g_score(dest).to_bits());
            assert_eq!(shared.expanded(), fresh.expanded());
            for id in 0..g.len() {
                assert_eq!(shared.predecessor(id), fresh.predecessor(id));
            }
        }
    }

    #[test]
    fn zero_heuristic_finds_exact_shortest_cost() {
        for seed in 0..8 {
            let g = random_graph(seed, 8, 6);
            let src = g.id(Point::new(0, 5)).unwrap();
            let exact = bellman_ford(&g, src);
            let mut st = SearchState::for_graph(&g);
            for dest in [g.id(Point::new(7, 0)).unwrap(), g.id(Point::new(3, 2)).unwrap()] {
                st.astar_with(&g, &ZeroHeuristic, g.point(src), g.point(dest))
                    .unwrap();
                assert!((st.g_score(dest) - exact[dest]).abs() < 1e-9, "seed {seed}");
            }
        }
    }

    #[test]
    fn reopening_keeps_admissible_inconsistent_search_exact() {
        for seed in 0..8 {
            let g = random_graph(100 + seed, 8, 8);
            let goal = g.id(Point::new(7, 7)).unwrap();
            // symmetric weights: distances from the goal are distances to it
            let to_goal = bellman_ford(&g, goal);
            let mut rng = StdRng::seed_from_u64(seed);
            let h = Scrambled(to_goal.iter().map(|d| d * rng.random_range(0.0f64..1.0)).collect());

            let src = g.id(Point::new(0, 0)).unwrap();
            let mut st = SearchState::for_graph(&g);
            let outcome = st
                .astar_with(&g, &h, g.point(src), g.point(goal))
                .unwrap();
            assert!(outcome.is_found());
            assert!(
                (st.g_score(goal) - to_goal[src]).abs() < 1e-9,
                "seed {seed}: {} vs {}",
                st.g_score(goal),
                to_goal[src]
            );
        }
    }
}
