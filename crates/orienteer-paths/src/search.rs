use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::GridGraph;

/// Sentinel parent index meaning "no predecessor".
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal per-cell search record
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) f: f64,
    pub(crate) parent: usize,
    /// Query this record belongs to. Records from older queries read as unseen.
    pub(crate) generation: u32,
    /// Bumped on every push; heap entries carrying an older stamp are stale.
    pub(crate) stamp: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            f: f64::INFINITY,
            parent: NO_PARENT,
            generation: 0,
            stamp: 0,
            open: false,
        }
    }
}

/// Heap entry, ordered so that `BinaryHeap` pops the smallest `f` first and,
/// among equal `f`, the earliest pushed entry.
#[derive(Clone, Copy)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) seq: u64,
    pub(crate) stamp: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

/// Source and destination ids of the last query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Query {
    pub(crate) source: usize,
    pub(crate) dest: usize,
}

/// Where a cell stands in the current query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Unseen,
    Open,
    Closed,
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Mutable per-query search data, kept apart from the immutable graph.
///
/// A `SearchState` owns the score arrays, predecessor links and the open-set
/// heap so that repeated queries incur no allocations after the first use.
/// Starting a query bumps a generation counter instead of clearing the
/// arrays; records from older generations read as unseen.
pub struct SearchState {
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) seq: u64,
    pub(crate) query: Option<Query>,
    pub(crate) found: bool,
    pub(crate) expanded: usize,
}

impl SearchState {
    /// Create a state for graphs of up to `len` cells.
    pub fn new(len: usize) -> Self {
        Self {
            nodes: vec![Node::default(); len],
            generation: 0,
            open: BinaryHeap::new(),
            seq: 0,
            query: None,
            found: false,
            expanded: 0,
        }
    }

    /// Create a state sized for `graph`.
    pub fn for_graph(graph: &GridGraph) -> Self {
        Self::new(graph.len())
    }

    /// Number of cell records available.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Prepare for a new query over `len` cells.
    ///
    /// If `len` fits the existing arrays only the generation is bumped.
    /// Otherwise the arrays are reallocated.
    pub(crate) fn begin(&mut self, len: usize) -> u32 {
        if len > self.nodes.len() {
            self.nodes.clear();
            self.nodes.resize(len, Node::default());
            self.generation = 0;
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale records could alias the new generation.
            for n in self.nodes.iter_mut() {
                *n = Node::default();
            }
            self.generation = 1;
        }
        self.open.clear();
        self.seq = 0;
        self.query = None;
        self.found = false;
        self.expanded = 0;
        self.generation
    }

    #[inline]
    fn current(&self, id: usize) -> Option<&Node> {
        self.nodes
            .get(id)
            .filter(|n| self.generation != 0 && n.generation == self.generation)
    }

    /// Best known cost from the source to `id`; infinite if unseen.
    pub fn g_score(&self, id: usize) -> f64 {
        self.current(id).map_or(f64::INFINITY, |n| n.g)
    }

    /// Priority of `id`: `g + heuristic − terrain adjustment`; infinite if
    /// unseen.
    pub fn f_score(&self, id: usize) -> f64 {
        self.current(id).map_or(f64::INFINITY, |n| n.f)
    }

    /// Predecessor of `id` on its best known route.
    pub fn predecessor(&self, id: usize) -> Option<usize> {
        self.current(id)
            .map(|n| n.parent)
            .filter(|&p| p != NO_PARENT)
    }

    pub fn node_state(&self, id: usize) -> NodeState {
        match self.current(id) {
            None => NodeState::Unseen,
            Some(n) if n.open => NodeState::Open,
            Some(_) => NodeState::Closed,
        }
    }

    /// Whether the last query reached its destination.
    #[inline]
    pub fn found(&self) -> bool {
        self.found
    }

    /// Number of cells expanded by the last query.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// `(source, destination)` ids of the last query.
    pub fn last_query(&self) -> Option<(usize, usize)> {
        self.query.map(|q| (q.source, q.dest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_within_capacity_keeps_arrays() {
        let mut st = SearchState::new(400);
        let g1 = st.begin(25);
        assert_eq!(st.capacity(), 400);
        let g2 = st.begin(400);
        assert_eq!(st.capacity(), 400);
        assert!(g2 > g1);
    }

    #[test]
    fn begin_beyond_capacity_reallocates() {
        let mut st = SearchState::new(25);
        st.begin(400);
        assert_eq!(st.capacity(), 400);
        assert_eq!(st.generation, 1);
    }

    #[test]
    fn stale_records_read_as_unseen() {
        let mut st = SearchState::new(4);
        assert_eq!(st.node_state(0), NodeState::Unseen);
        let generation = st.begin(4);
        st.nodes[2] = Node {
            g: 3.0,
            f: 5.0,
            parent: 1,
            generation,
            stamp: 1,
            open: true,
        };
        assert_eq!(st.g_score(2), 3.0);
        assert_eq!(st.f_score(2), 5.0);
        assert_eq!(st.predecessor(2), Some(1));
        assert_eq!(st.node_state(2), NodeState::Open);
        st.nodes[2].open = false;
        assert_eq!(st.node_state(2), NodeState::Closed);

        st.begin(4);
        assert_eq!(st.node_state(2), NodeState::Unseen);
        assert_eq!(st.g_score(2), f64::INFINITY);
        assert_eq!(st.predecessor(2), None);
        assert_eq!(st.g_score(99), f64::INFINITY);
    }

    #[test]
    fn generation_wrap_resets_records() {
        let mut st = SearchState::new(2);
        st.generation = u32::MAX - 1;
        let generation = st.begin(2);
        st.nodes[0].generation = generation;
        st.nodes[0].g = 1.0;
        assert_eq!(st.begin(2), 1);
        assert_eq!(st.nodes[0].generation, 0);
        assert_eq!(st.g_score(0), f64::INFINITY);
    }

    #[test]
    fn heap_pops_lowest_f_then_fifo() {
        let mut heap = BinaryHeap::new();
        for (idx, f, seq) in [(0, 2.0, 0), (1, 1.0, 1), (2, 1.0, 2), (3, -0.5, 3)] {
            heap.push(NodeRef {
                idx,
                f,
                seq,
                stamp: 0,
            });
        }
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|r| r.idx)).collect();
        assert_eq!(order, vec![3, 1, 2, 0]);
    }
}
