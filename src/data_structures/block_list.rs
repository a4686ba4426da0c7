use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;

/// Block-based partial-sort container from Lemma 3.3 of the paper.
///
/// Stores `(key, value)` entries with values below an upper bound `B` and a
/// capacity hint `M`, without ever sorting its contents globally:
/// - `insert` places an entry into one of the ascending-bound blocks of the
///   `sorted` sequence (D1), splitting a block at its median when it
///   overflows `M`;
/// - `batch_prepend` takes entries known to undercut everything present and
///   chunks them into blocks of at most `ceil(M/2)` at the front sequence
///   (D0);
/// - `pull` gathers whole blocks from the front until more than `M` items
///   are in hand, then hands back the `M` smallest together with a boundary
///   no remaining entry goes below.
///
/// Individual blocks are unordered. A position map gives O(1) lookup and
/// O(block) deletion per key.
#[derive(Debug)]
pub struct BlockList<V>
where
    V: Ord + Copy + Debug,
{
    /// Capacity hint `M`: block size cap and pull size
    capacity: usize,

    /// Upper bound `B` on every stored value
    bound: V,

    /// Block storage; ids are stable, emptied blocks stay behind until reset
    blocks: Vec<Block<V>>,

    /// D0 block ids, ascending by value from the front
    front: VecDeque<usize>,

    /// D1 block ids, ascending by block upper bound; the back block keeps
    /// `bound` as its upper so every value below `B` finds a home
    sorted: VecDeque<usize>,

    /// Key to `(block id, item slot)` position map
    loc: HashMap<usize, (usize, usize)>,
}

#[derive(Debug)]
struct Block<V> {
    items: Vec<(usize, V)>,
    upper: V,
}

impl<V> BlockList<V>
where
    V: Ord + Copy + Debug,
{
    /// Creates an empty container with capacity hint `capacity` and upper
    /// bound `bound`
    pub fn new(capacity: usize, bound: V) -> Self {
        let mut list = BlockList {
            capacity: capacity.max(1),
            bound,
            blocks: Vec::new(),
            front: VecDeque::new(),
            sorted: VecDeque::new(),
            loc: HashMap::new(),
        };
        list.reset();
        list
    }

    /// Returns true when no entries are stored
    pub fn is_empty(&self) -> bool {
        self.loc.is_empty()
    }

    /// Returns the number of stored keys
    pub fn len(&self) -> usize {
        self.loc.len()
    }

    /// Returns the stored value for a key, if any
    pub fn get(&self, key: usize) -> Option<V> {
        let &(block, slot) = self.loc.get(&key)?;
        Some(self.blocks[block].items[slot].1)
    }

    /// Inserts a key with a value below the bound. An existing entry with an
    /// equal or smaller value wins; a larger one is replaced.
    pub fn insert(&mut self, key: usize, value: V) {
        debug_assert!(value < self.bound, "value {value:?} reaches the bound");
        if let Some(&(block, slot)) = self.loc.get(&key) {
            if self.blocks[block].items[slot].1 <= value {
                return;
            }
            self.detach(key);
        }

        let pos = self
            .sorted
            .partition_point(|&id| self.blocks[id].upper < value)
            .min(self.sorted.len() - 1);
        let id = self.sorted[pos];
        let block = &mut self.blocks[id];
        block.items.push((key, value));
        self.loc.insert(key, (id, block.items.len() - 1));
        if block.items.len() > self.capacity {
            self.split(pos);
        }
    }

    /// Inserts a batch of entries that undercut everything currently stored.
    /// Duplicates keep their smallest value; entries weakly dominated by a
    /// present entry are dropped.
    pub fn batch_prepend(&mut self, entries: Vec<(usize, V)>) {
        let mut best: HashMap<usize, V> = HashMap::with_capacity(entries.len());
        for (key, value) in entries {
            let improves = best.get(&key).map_or(true, |&seen| value < seen);
            if improves {
                best.insert(key, value);
            }
        }

        let mut survivors: Vec<(usize, V)> = Vec::with_capacity(best.len());
        for (key, value) in best {
            if let Some(&(block, slot)) = self.loc.get(&key) {
                if self.blocks[block].items[slot].1 <= value {
                    continue;
                }
                self.detach(key);
            }
            survivors.push((key, value));
        }
        if survivors.is_empty() {
            return;
        }

        survivors.sort_by(|a, b| a.1.cmp(&b.1));
        let chunk = self.capacity.div_ceil(2);
        // Push chunks largest-first so the smallest ends up at the very front.
        for piece in survivors.chunks(chunk).rev() {
            let upper = piece.last().expect("chunks are non-empty").1;
            let id = self.blocks.len();
            self.blocks.push(Block {
                items: piece.to_vec(),
                upper,
            });
            self.front.push_front(id);
            self.reindex(id);
        }
    }

    /// Removes and returns up to `M` smallest-value keys together with a
    /// boundary value: every entry left behind is at least as large. Draining
    /// the container returns the construction bound.
    pub fn pull(&mut self) -> (V, Vec<usize>) {
        let mut gathered: Vec<(usize, V)> = Vec::new();
        for &id in self.front.iter().chain(self.sorted.iter()) {
            if gathered.len() > self.capacity {
                break;
            }
            gathered.extend(self.blocks[id].items.iter().copied());
        }

        if gathered.len() <= self.capacity {
            let keys = gathered.into_iter().map(|(key, _)| key).collect();
            self.reset();
            return (self.bound, keys);
        }

        gathered.sort_by(|a, b| a.1.cmp(&b.1));
        let next_bound = gathered[self.capacity].1;
        let mut keys = Vec::with_capacity(self.capacity);
        for &(key, _) in &gathered[..self.capacity] {
            self.detach(key);
            keys.push(key);
        }
        (next_bound, keys)
    }

    /// Removes the entry for `key`, patching the position of the item swapped
    /// into its slot
    fn detach(&mut self, key: usize) {
        if let Some((id, slot)) = self.loc.remove(&key) {
            let block = &mut self.blocks[id];
            block.items.swap_remove(slot);
            if let Some(&(moved, _)) = block.items.get(slot) {
                self.loc.insert(moved, (id, slot));
            }
        }
    }

    /// Splits the overfull block at position `pos` of the sorted sequence at
    /// its median. The lower half keeps the position with its own maximum as
    /// upper bound; the upper half inherits the old upper bound behind it.
    fn split(&mut self, pos: usize) {
        let id = self.sorted[pos];
        let mut items = std::mem::take(&mut self.blocks[id].items);
        items.sort_by(|a, b| a.1.cmp(&b.1));
        let upper_half = items.split_off(items.len() / 2);

        let inherited = self.blocks[id].upper;
        self.blocks[id].upper = items.last().expect("split block has a lower half").1;
        self.blocks[id].items = items;

        let new_id = self.blocks.len();
        self.blocks.push(Block {
            items: upper_half,
            upper: inherited,
        });
        self.sorted.insert(pos + 1, new_id);
        self.reindex(id);
        self.reindex(new_id);
    }

    fn reindex(&mut self, id: usize) {
        let Self { blocks, loc, .. } = self;
        for (slot, &(key, _)) in blocks[id].items.iter().enumerate() {
            loc.insert(key, (id, slot));
        }
    }

    fn reset(&mut self) {
        self.blocks.clear();
        self.front.clear();
        self.sorted.clear();
        self.loc.clear();
        self.blocks.push(Block {
            items: Vec::new(),
            upper: self.bound,
        });
        self.sorted.push_back(0);
    }
}
