//! Best-first search over the game graph.
//!
//! "Win from here" is treated as a shortest-path problem: every move is an
//! edge of cost 1 and the heuristic from [`crate::eval`] orders the
//! frontier. The search walks moves for both sides, so a discovered path
//! assumes the opponent plays along; re-searching after every real reply is
//! what keeps the engine honest.
//!
//! States are deduplicated structurally. The same board reached through two
//! move orders is one node, found through the hash index rather than a
//! linear scan.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::board::State;
use crate::eval::heuristic;
use crate::types::Side;

/// Result of one best-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AStarOutcome {
    /// First move on the discovered path, or the first legal move when the
    /// search exhausted the frontier. `None` only on a terminal start.
    pub best_move: Option<usize>,
    /// Length in plies of the discovered path, `None` when no goal was
    /// reached.
    pub cost: Option<u64>,
    /// States popped from the frontier.
    pub expanded: u64,
    /// True when the frontier emptied without reaching a goal and the
    /// fallback move was returned.
    pub exhausted: bool,
}

/// One discovered state with its path bookkeeping. Nodes live in an arena
/// and refer to each other by index.
struct Node {
    state: State,
    /// Arena index of the predecessor, `None` for the start.
    parent: Option<usize>,
    /// Column played to reach this state from the predecessor.
    step: Option<usize>,
    /// Path cost from the start, one per move.
    g: u64,
    /// Best known priority while the node is open.
    f: f64,
    /// Set once the node has been popped and expanded.
    closed: bool,
}

/// Finds a path from `start` to a state `player` has won and returns its
/// first move.
///
/// When no such path exists the frontier eventually empties; the search then
/// falls back to the first legal move, flags the result as exhausted, and
/// logs a warning. The fallback is a defensive default, not a decision
/// procedure.
pub fn search(start: &State, player: Side) -> AStarOutcome {
    let mut nodes: Vec<Node> = Vec::new();
    let mut index: HashMap<State, usize> = HashMap::new();
    let mut frontier = Frontier::new();
    let mut expanded = 0u64;

    let f0 = heuristic(start, player);
    nodes.push(Node {
        state: start.clone(),
        parent: None,
        step: None,
        g: 0,
        f: f0,
        closed: false,
    });
    index.insert(start.clone(), 0);
    frontier.push(0, f0);

    while let Some(current) = frontier.pop() {
        nodes[current].closed = true;
        expanded += 1;

        if nodes[current].state.value_for(player) > 0 {
            return AStarOutcome {
                best_move: first_move(&nodes, current),
                cost: Some(nodes[current].g),
                expanded,
                exhausted: false,
            };
        }

        let g = nodes[current].g + 1;
        let successors: Vec<(usize, State)> = nodes[current].state.successors().collect();
        for (col, next) in successors {
            let f = g as f64 + heuristic(&next, player);
            match index.get(&next) {
                None => {
                    let id = nodes.len();
                    nodes.push(Node {
                        state: next.clone(),
                        parent: Some(current),
                        step: Some(col),
                        g,
                        f,
                        closed: false,
                    });
                    index.insert(next, id);
                    frontier.push(id, f);
                }
                Some(&id) if !nodes[id].closed => {
                    // Known open state: replace only on a strictly better score.
                    if f < nodes[id].f {
                        nodes[id].parent = Some(current);
                        nodes[id].step = Some(col);
                        nodes[id].g = g;
                        nodes[id].f = f;
                        frontier.lower(id, f);
                    }
                }
                // Closed states are never reopened.
                Some(_) => {}
            }
        }
    }

    eprintln!(
        "Warning: search frontier exhausted after {} expansions; falling back to first legal move",
        expanded
    );
    AStarOutcome {
        best_move: start.legal_moves().first().copied(),
        cost: None,
        expanded,
        exhausted: true,
    }
}

/// Move out of the start state on the path ending at `goal`, recovered by
/// walking the predecessor links. `None` when the goal is the start itself.
fn first_move(nodes: &[Node], goal: usize) -> Option<usize> {
    let mut step = None;
    let mut at = goal;
    while let Some(parent) = nodes[at].parent {
        step = nodes[at].step;
        at = parent;
    }
    step
}

/// Indexed binary min-heap over `(f, insertion order)`.
///
/// A reverse map from arena index to heap slot makes priorities lowerable
/// in place, in logarithmic time. Equal priorities pop in insertion order.
struct Frontier {
    heap: Vec<Entry>,
    /// Arena index -> current heap slot.
    slots: HashMap<usize, usize>,
    seq: u64,
}

#[derive(Clone, Copy)]
struct Entry {
    node: usize,
    f: f64,
    seq: u64,
}

impl Entry {
    fn before(&self, other: &Entry) -> bool {
        match self.f.total_cmp(&other.f) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.seq < other.seq,
        }
    }
}

impl Frontier {
    fn new() -> Self {
        Self {
            heap: Vec::new(),
            slots: HashMap::new(),
            seq: 0,
        }
    }

    fn push(&mut self, node: usize, f: f64) {
        let entry = Entry {
            node,
            f,
            seq: self.seq,
        };
        self.seq += 1;
        self.heap.push(entry);
        let slot = self.heap.len() - 1;
        self.slots.insert(node, slot);
        self.sift_up(slot);
    }

    fn pop(&mut self) -> Option<usize> {
        let last = self.heap.len().checked_sub(1)?;
        self.heap.swap(0, last);
        let entry = self.heap.pop()?;
        self.slots.remove(&entry.node);
        if let Some(root) = self.heap.first() {
            self.slots.insert(root.node, 0);
            self.sift_down(0);
        }
        Some(entry.node)
    }

    /// Lowers `node`'s priority to `f`. The entry keeps its insertion stamp.
    fn lower(&mut self, node: usize, f: f64) {
        if let Some(&slot) = self.slots.get(&node) {
            self.heap[slot].f = f;
            self.sift_up(slot);
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.heap[slot].before(&self.heap[parent]) {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < self.heap.len() && self.heap[left].before(&self.heap[smallest]) {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right].before(&self.heap[smallest]) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].node, a);
        self.slots.insert(self.heap[b].node, b);
    }
}

#[cfg(test)]
#[path = "astar_tests.rs"]
mod astar_tests;
