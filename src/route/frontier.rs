use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::graph::LocationId;
use crate::route::result::SegmentCostRecord;

/// A candidate partial solution: where the search stands, what it paid to
/// get there, and the route taken.
///
/// Entries are immutable once queued; extending a path produces a fresh
/// entry and leaves the original untouched.
#[derive(Clone, Debug)]
pub struct FrontierEntry {
    pub location: LocationId,
    pub cost: f64,
    /// Locations traversed so far, origin first.
    pub path: Vec<LocationId>,
    /// Cost log of the traversed segments, in order.
    pub segments: Vec<SegmentCostRecord>,

    order: u64,
}

impl FrontierEntry {
    fn seeded(origin: LocationId) -> FrontierEntry {
        FrontierEntry {
            location: origin,
            cost: 0.0,
            path: vec![origin],
            segments: Vec::new(),
            order: 0,
        }
    }

    /// The entry one segment further along. The queue assigns its order on
    /// insertion.
    pub fn extended(&self, segment: SegmentCostRecord) -> FrontierEntry {
        let mut path = self.path.clone();
        path.push(segment.to);

        let mut segments = self.segments.clone();
        let location = segment.to;
        let cost = segment.running_total;
        segments.push(segment);

        FrontierEntry {
            location,
            cost,
            path,
            segments,
            order: 0,
        }
    }
}

/// Heap wrapper ordering entries by cost, then insertion order.
#[derive(Clone, Debug)]
struct Ranked(FrontierEntry);

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .cost
            .total_cmp(&other.0.cost)
            .then_with(|| self.0.order.cmp(&other.0.order))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

/// Min-cost priority queue with first-in-first-out tie-breaking.
///
/// Equal-cost entries are selected in insertion order, which keeps the
/// expansion sequence reproducible for identical inputs.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<Ranked>>,
    stamp: u64,
}

impl Frontier {
    /// A frontier holding only the zero-cost entry at the origin.
    pub fn seeded(origin: LocationId) -> Frontier {
        let mut frontier = Frontier::default();
        frontier.push(FrontierEntry::seeded(origin));
        frontier
    }

    pub fn push(&mut self, mut entry: FrontierEntry) {
        entry.order = self.stamp;
        self.stamp += 1;
        self.heap.push(Reverse(Ranked(entry)));
    }

    /// Removes and returns the cheapest entry, oldest first on ties.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(Ranked(entry))| entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
