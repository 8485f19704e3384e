//! Connected components under `Rect::adjoins`.
//!
//! Two passes:
//! 1. Adjacency lists. Rectangles are bucketed by their left and top edge
//!    coordinates, so each rectangle only tests candidates whose left edge equals
//!    its right edge, or whose top edge equals its bottom edge. Every edge pairing
//!    is reached from one of the two sides.
//! 2. Breadth-first traversal, seeded in input order, visiting neighbours in
//!    index order. Output is reproducible for a fixed input order.

use std::collections::{HashMap, VecDeque};

use crate::geom::Rect;

fn bucket_by<F>(rects: &[Rect], key: F) -> HashMap<i64, Vec<usize>>
where
    F: Fn(&Rect) -> i64,
{
    let mut buckets: HashMap<i64, Vec<usize>> = HashMap::new();
    for (i, r) in rects.iter().enumerate() {
        buckets.entry(key(r)).or_default().push(i);
    }
    buckets
}

/// Sorted, deduplicated neighbour indices per rectangle.
pub(crate) fn adjacency_lists(rects: &[Rect]) -> Vec<Vec<usize>> {
    let by_left = bucket_by(rects, Rect::left);
    let by_top = bucket_by(rects, Rect::top);
    let mut adj: Vec<Vec<usize>> = vec![Vec::new(); rects.len()];
    for (i, r) in rects.iter().enumerate() {
        let right_of = by_left.get(&r.right()).into_iter().flatten();
        let below = by_top.get(&r.bottom()).into_iter().flatten();
        for &j in right_of.chain(below) {
            if i != j && r.adjoins(&rects[j]) {
                adj[i].push(j);
                adj[j].push(i);
            }
        }
    }
    for list in &mut adj {
        list.sort_unstable();
        list.dedup();
    }
    adj
}

/// Partition of `0..rects.len()` into adjacency components (indices form).
///
/// Components are ordered by their smallest index; members in BFS order.
pub fn group_adjacent_indices(rects: &[Rect]) -> Vec<Vec<usize>> {
    let adj = adjacency_lists(rects);
    let mut seen = vec![false; rects.len()];
    let mut groups = Vec::new();
    let mut queue = VecDeque::new();
    for seed in 0..rects.len() {
        if seen[seed] {
            continue;
        }
        seen[seed] = true;
        queue.push_back(seed);
        let mut group = Vec::new();
        while let Some(k) = queue.pop_front() {
            group.push(k);
            for &n in &adj[k] {
                if !seen[n] {
                    seen[n] = true;
                    queue.push_back(n);
                }
            }
        }
        groups.push(group);
    }
    groups
}

/// Maximal groups of rectangles connected by chains of shared edges.
///
/// Duplicates are kept as distinct elements; the groups form a partition of the
/// input multiset.
pub fn group_adjacent(rects: &[Rect]) -> Vec<Vec<Rect>> {
    group_adjacent_indices(rects)
        .into_iter()
        .map(|g| g.into_iter().map(|i| rects[i]).collect())
        .collect()
}
