use std::collections::{HashMap, HashSet, VecDeque};

use hillwalk_core::Point;

use crate::traits::Pather;

/// A position with its step distance, returned from distance-map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: usize,
}

/// Breadth-first search from one or more sources to `target`.
///
/// All sources start at distance 0. Returns the cells of one fewest-steps
/// path, from the source it started at to `target` inclusive, or `None` if
/// the frontier empties first. Ties between equally short paths are broken by
/// traversal order.
///
/// Each cell is enqueued at most once: it is marked when discovered, and its
/// predecessor is recorded then and never overwritten. Expansion is also
/// guarded at dequeue time through the visited set.
pub fn bfs_path<P: Pather>(pather: &P, sources: &[Point], target: Point) -> Option<Vec<Point>> {
    log::trace!(
        "bfs: searching for {target} from {} source(s)",
        sources.len()
    );

    let mut frontier: VecDeque<Point> = VecDeque::new();
    let mut discovered: HashSet<Point> = HashSet::new();
    let mut visited: HashSet<Point> = HashSet::new();
    let mut predecessor: HashMap<Point, Point> = HashMap::new();

    for &src in sources {
        if discovered.insert(src) {
            frontier.push_back(src);
        }
    }

    let mut nbuf: Vec<Point> = Vec::with_capacity(4);

    while let Some(current) = frontier.pop_front() {
        if current == target {
            let path = reconstruct(&predecessor, target);
            log::debug!(
                "bfs: reached {target} in {} step(s), {} cell(s) expanded",
                path.len() - 1,
                visited.len()
            );
            return Some(path);
        }

        if !visited.insert(current) {
            continue;
        }

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &np in nbuf.iter() {
            if !discovered.insert(np) {
                continue;
            }
            predecessor.insert(np, current);
            frontier.push_back(np);
        }
    }

    log::debug!(
        "bfs: {target} unreachable, {} cell(s) expanded",
        visited.len()
    );
    None
}

/// Walk the predecessor map back from `target` to the source it was reached
/// from. Sources have no predecessor, which ends the walk.
fn reconstruct(predecessor: &HashMap<Point, Point>, target: Point) -> Vec<Point> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(&prev) = predecessor.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// Compute a multi-source breadth-first distance map.
///
/// Each step has cost 1. Expansion stops when the distance exceeds
/// `max_dist`. Every reached cell appears once, in non-decreasing order of
/// cost, sources first.
pub fn bfs_map<P: Pather>(pather: &P, sources: &[Point], max_dist: usize) -> Vec<PathNode> {
    let mut frontier: VecDeque<PathNode> = VecDeque::new();
    let mut discovered: HashSet<Point> = HashSet::new();
    let mut results: Vec<PathNode> = Vec::new();

    for &src in sources {
        if discovered.insert(src) {
            let node = PathNode { pos: src, cost: 0 };
            frontier.push_back(node);
            results.push(node);
        }
    }

    let mut nbuf: Vec<Point> = Vec::with_capacity(4);

    while let Some(current) = frontier.pop_front() {
        let nd = current.cost + 1;
        if nd > max_dist {
            continue;
        }

        nbuf.clear();
        pather.neighbors(current.pos, &mut nbuf);

        for &np in nbuf.iter() {
            if !discovered.insert(np) {
                continue;
            }
            let node = PathNode { pos: np, cost: nd };
            frontier.push_back(node);
            results.push(node);
        }
    }

    log::debug!(
        "bfs: distance map from {} source(s) reached {} cell(s)",
        sources.len(),
        results.len()
    );
    results
}
