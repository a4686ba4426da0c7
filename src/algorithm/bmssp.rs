use log::{debug, trace};
use num_traits::{Float, Zero};
use std::collections::HashSet;
use std::fmt::Debug;

use crate::data_structures::{AddressableHeap, BlockList};
use crate::graph::Graph;

/// Tentative path record for one vertex: scalar distance, hop depth along
/// the recorded path, and the recorded predecessor.
///
/// A relaxation replaces the record only when the candidate triple is
/// lexicographically smaller. Depth and predecessor break scalar ties, which
/// keeps effective path weights distinct even when many paths share one
/// numeric length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Label<W>
where
    W: Ord + Copy,
{
    dist: W,
    depth: u32,
    pred: Option<usize>,
}

impl<W> Label<W>
where
    W: Float + Ord + Copy,
{
    fn unset() -> Self {
        Label {
            dist: W::infinity(),
            depth: u32::MAX,
            pred: None,
        }
    }
}

/// Totally ordered comparison key for a vertex's current record.
///
/// Heap priorities, container values and every interval boundary use this
/// key. The leading component is the scalar distance; the trailing vertex id
/// makes keys of distinct vertices distinct, so boundaries cut cleanly
/// through groups of equal distances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PathKey<W>
where
    W: Ord + Copy,
{
    pub dist: W,
    pub depth: u32,
    pub vertex: usize,
}

impl<W> PathKey<W>
where
    W: Float + Ord + Copy,
{
    /// The bound that admits every reachable record
    pub fn unbounded() -> Self {
        PathKey {
            dist: W::infinity(),
            depth: u32::MAX,
            vertex: usize::MAX,
        }
    }

    /// The bound sitting just after every record of scalar distance `dist`
    pub fn at_distance(dist: W) -> Self {
        PathKey {
            dist,
            depth: u32::MAX,
            vertex: usize::MAX,
        }
    }
}

/// Result from one frame of the bounded multi-source search
#[derive(Debug)]
pub struct BmsspResult<W>
where
    W: Ord + Copy,
{
    /// Refined boundary, at most the bound the frame was called with
    pub new_bound: PathKey<W>,

    /// Vertices whose records were finalized strictly below `new_bound`
    pub completed: Vec<usize>,
}

/// Bounded Multi-Source Shortest Path engine.
///
/// Holds the per-vertex records shared by every recursion frame plus the
/// parameters `k` and `t` derived from the vertex count. One engine instance
/// serves one `solve` call.
#[derive(Debug)]
pub struct Bmssp<'a, W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    graph: &'a G,

    /// Relaxation-round and base-case budget, floor((log2 n)^(1/3))
    k: usize,

    /// Level width exponent, floor((log2 n)^(2/3))
    t: usize,

    /// Top recursion level, ceil(log2 n / t)
    max_level: usize,

    source: usize,
    labels: Vec<Label<W>>,

    /// Reused by the base case across calls
    base_heap: AddressableHeap<PathKey<W>>,
}

impl<'a, W, G> Bmssp<'a, W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    /// Creates an engine for one single-source run, with parameters derived
    /// from the vertex count and clamped to at least 1
    pub fn new(graph: &'a G, source: usize) -> Self {
        let n = graph.vertex_count();
        let log_n = (n.max(2) as f64).log2();
        let k = (log_n.powf(1.0 / 3.0).floor() as usize).max(1);
        let t = (log_n.powf(2.0 / 3.0).floor() as usize).max(1);
        let max_level = (log_n / t as f64).ceil() as usize;
        debug!("bmssp parameters for n={n}: k={k}, t={t}, levels={max_level}");

        let mut labels = vec![Label::unset(); n];
        if source < n {
            labels[source] = Label {
                dist: W::zero(),
                depth: 0,
                pred: None,
            };
        }

        Bmssp {
            graph,
            k,
            t,
            max_level,
            source,
            labels,
            base_heap: AddressableHeap::new(n),
        }
    }

    /// Runs the full search from the source
    pub fn solve(&mut self) {
        let source = self.source;
        self.execute(self.max_level, PathKey::unbounded(), &[source]);
    }

    /// Finalized distance of a vertex, `None` when unreachable
    pub fn distance(&self, vertex: usize) -> Option<W> {
        let dist = self.labels[vertex].dist;
        dist.is_finite().then_some(dist)
    }

    /// One frame of the recursion: completes the frontier's region below
    /// `bound`, up to the level's vertex budget
    pub fn execute(&mut self, level: usize, bound: PathKey<W>, frontier: &[usize]) -> BmsspResult<W> {
        if frontier.is_empty() {
            return BmsspResult {
                new_bound: bound,
                completed: Vec::new(),
            };
        }
        if level == 0 {
            return self.base_case(bound, frontier);
        }

        let (pivots, workset) = self.find_pivots(bound, frontier);

        let n = self.graph.vertex_count();
        let block_cap = pow2_saturating((level - 1).saturating_mul(self.t)).min(n.max(1));
        let budget = self
            .k
            .saturating_mul(pow2_saturating(level.saturating_mul(self.t)))
            .min(n.max(1));
        trace!(
            "level {level}: frontier={}, pivots={}, workset={}, budget={budget}",
            frontier.len(),
            pivots.len(),
            workset.len()
        );

        let mut queue = BlockList::new(block_cap, bound);
        for &pivot in &pivots {
            queue.insert(pivot, self.key_of(pivot));
        }

        let mut completed: Vec<usize> = Vec::new();
        let mut seen: HashSet<usize> = HashSet::new();
        let mut last_bound = bound;
        let graph = self.graph;

        while completed.len() < budget && !queue.is_empty() {
            let (pull_bound, subset) = queue.pull();
            if subset.is_empty() {
                break;
            }

            let sub = self.execute(level - 1, pull_bound, &subset);
            last_bound = sub.new_bound;

            let mut requeue: Vec<(usize, PathKey<W>)> = Vec::new();
            for &u in &sub.completed {
                if !seen.insert(u) {
                    continue;
                }
                completed.push(u);
                for (v, weight) in graph.outgoing_edges(u) {
                    if let Some(key) = self.relax(u, v, weight) {
                        if pull_bound <= key && key < bound {
                            queue.insert(v, key);
                        } else if sub.new_bound <= key && key < pull_bound {
                            requeue.push((v, key));
                        }
                    }
                }
            }

            // Pulled vertices the child frame left unfinished go back to the
            // very front, still below everything in the queue.
            for &x in &subset {
                let key = self.key_of(x);
                if sub.new_bound <= key && key < pull_bound {
                    requeue.push((x, key));
                }
            }
            queue.batch_prepend(requeue);
        }

        // A drained queue means the whole interval was completed; only a
        // budget exit narrows the boundary.
        let new_bound = if queue.is_empty() {
            bound
        } else {
            last_bound.min(bound)
        };
        for &x in &workset {
            if self.key_of(x) < new_bound && seen.insert(x) {
                completed.push(x);
            }
        }

        BmsspResult {
            new_bound,
            completed,
        }
    }

    /// Level-0 frame: Dijkstra from the frontier, stopped after `k + 1`
    /// extractions or at the bound, whichever comes first
    fn base_case(&mut self, bound: PathKey<W>, frontier: &[usize]) -> BmsspResult<W> {
        let mut heap = std::mem::replace(&mut self.base_heap, AddressableHeap::new(0));
        heap.clear();
        for &x in frontier {
            let key = self.key_of(x);
            if key < bound && !heap.contains(x) {
                heap.insert(x, key);
            }
        }

        let graph = self.graph;
        let mut extracted: Vec<usize> = Vec::new();
        while let Some((u, key)) = heap.extract_min() {
            if key >= bound {
                break;
            }
            extracted.push(u);
            if extracted.len() == self.k + 1 {
                break;
            }

            for (v, weight) in graph.outgoing_edges(u) {
                if self.candidate_key(u, v, weight) >= bound {
                    continue;
                }
                if let Some(key) = self.relax(u, v, weight) {
                    if !extracted.contains(&v) {
                        if heap.contains(v) {
                            heap.decrease_key(v, key);
                        } else {
                            heap.insert(v, key);
                        }
                    }
                }
            }
        }

        let result = if extracted.len() <= self.k {
            // The region below the bound reachable from here is exhausted.
            BmsspResult {
                new_bound: bound,
                completed: extracted,
            }
        } else {
            // The extraction cap was hit: the last record drawn becomes the
            // boundary and everything before it is complete.
            let cut = self.key_of(*extracted.last().expect("cap exceeds zero"));
            extracted.pop();
            BmsspResult {
                new_bound: cut,
                completed: extracted,
            }
        };
        self.base_heap = heap;
        result
    }

    /// Runs `k` rounds of synchronous relaxation from the frontier,
    /// returning `(pivots, workset)`. When the workset outgrows `k` times
    /// the frontier the expansion is cut short and every frontier vertex is
    /// a pivot; otherwise every explored vertex is.
    fn find_pivots(&mut self, bound: PathKey<W>, frontier: &[usize]) -> (Vec<usize>, Vec<usize>) {
        let mut workset: Vec<usize> = Vec::new();
        let mut in_workset: HashSet<usize> = HashSet::new();
        for &x in frontier {
            if in_workset.insert(x) {
                workset.push(x);
            }
        }

        let limit = self.k.saturating_mul(frontier.len());
        let mut layer = workset.clone();
        let graph = self.graph;

        for _ in 0..self.k {
            let mut next: Vec<usize> = Vec::new();
            let mut in_next: HashSet<usize> = HashSet::new();
            for &u in &layer {
                for (v, weight) in graph.outgoing_edges(u) {
                    // Records past the bound are still written back; only the
                    // expansion stops at the bound.
                    if let Some(key) = self.relax(u, v, weight) {
                        if key < bound {
                            if in_next.insert(v) {
                                next.push(v);
                            }
                            if in_workset.insert(v) {
                                workset.push(v);
                            }
                        }
                    }
                }
            }

            if workset.len() > limit {
                trace!(
                    "pivot search aborted: workset {} exceeds {limit}",
                    workset.len()
                );
                return (frontier.to_vec(), workset);
            }
            if next.is_empty() {
                break;
            }
            layer = next;
        }

        (workset.clone(), workset)
    }

    /// Offers the path through `u` to `v`. Rewrites the record when the
    /// candidate wins the lexicographic comparison; an exact match is also
    /// reported so callers can reschedule `v` along its recorded forest edge.
    fn relax(&mut self, u: usize, v: usize, weight: W) -> Option<PathKey<W>> {
        let from = self.labels[u];
        let candidate = Label {
            dist: from.dist + weight,
            depth: from.depth.saturating_add(1),
            pred: Some(u),
        };
        let current = self.labels[v];
        if candidate < current {
            self.labels[v] = candidate;
        } else if candidate != current {
            return None;
        }
        Some(PathKey {
            dist: candidate.dist,
            depth: candidate.depth,
            vertex: v,
        })
    }

    fn candidate_key(&self, u: usize, v: usize, weight: W) -> PathKey<W> {
        let from = self.labels[u];
        PathKey {
            dist: from.dist + weight,
            depth: from.depth.saturating_add(1),
            vertex: v,
        }
    }

    fn key_of(&self, vertex: usize) -> PathKey<W> {
        let label = self.labels[vertex];
        PathKey {
            dist: label.dist,
            depth: label.depth,
            vertex,
        }
    }
}

fn pow2_saturating(exp: usize) -> usize {
    if exp >= usize::BITS as usize {
        usize::MAX
    } else {
        1usize << exp
    }
}
