use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry: a cell index keyed by `(f, seq)`.
#[derive(Clone, Copy, Debug)]
struct Entry {
    f: f64,
    seq: u64,
    idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the entry inserted first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Priority frontier over flat cell indices.
///
/// Pairs a binary heap with a membership table kept in lockstep: the heap
/// orders entries, the table answers "is this cell in the frontier" in O(1).
/// Pushing a cell that is already a member replaces its entry; the older
/// heap entry stays behind as stale and is discarded when it surfaces.
#[derive(Debug)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    // seq of each member's live entry, `None` when not a member.
    live: Vec<Option<u64>>,
    next_seq: u64,
    members: usize,
}

impl Frontier {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: vec![None; len],
            next_seq: 0,
            members: 0,
        }
    }

    /// Insert `idx` with priority `f`, or move it to `f` if already present.
    pub(crate) fn push(&mut self, idx: usize, f: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        if self.live[idx].replace(seq).is_none() {
            self.members += 1;
        }
        self.heap.push(Entry { f, seq, idx });
    }

    /// Remove and return the member with the lowest `(f, seq)`.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        while let Some(e) = self.heap.pop() {
            if self.live[e.idx] != Some(e.seq) {
                continue;
            }
            self.live[e.idx] = None;
            self.members -= 1;
            return Some(e.idx);
        }
        None
    }

    #[inline]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.live[idx].is_some()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.members
    }

    /// Total number of insertions so far, stale ones included.
    #[inline]
    pub(crate) fn pushed(&self) -> u64 {
        self.next_seq
    }
}
