//! Shortest-path queries over a [`HeightMap`].

use hillwalk_core::{HeightMap, Point};

use crate::bfs::{PathNode, bfs_map, bfs_path};
use crate::climb::{ClimbRule, Climber, Descender};

/// Find a fewest-steps path from `start` to `target` on `map`.
///
/// Returns the cells from `start` to `target` inclusive, so `len() - 1` is the
/// step count, or `None` when `target` cannot be reached under `rule`. A
/// `start` or `target` outside the map also yields `None`. The map is only
/// read.
pub fn find_shortest_path(
    map: &HeightMap,
    start: Point,
    target: Point,
    rule: ClimbRule,
) -> Option<Vec<Point>> {
    find_shortest_path_from_any(map, &[start], target, rule)
}

/// Number of steps on the shortest path from `start` to `target`.
pub fn shortest_path_len(
    map: &HeightMap,
    start: Point,
    target: Point,
    rule: ClimbRule,
) -> Option<usize> {
    find_shortest_path(map, start, target, rule).map(|path| path.len() - 1)
}

/// Find the fewest-steps path to `target` starting from whichever of `starts`
/// is closest.
///
/// Equivalent to running [`find_shortest_path`] once per start and keeping the
/// shortest result, but done in one search. The returned path begins at one of
/// `starts`. Starts outside the map are ignored.
pub fn find_shortest_path_from_any(
    map: &HeightMap,
    starts: &[Point],
    target: Point,
    rule: ClimbRule,
) -> Option<Vec<Point>> {
    if !map.contains(target) {
        return None;
    }
    let sources: Vec<Point> = starts.iter().copied().filter(|&p| map.contains(p)).collect();
    if sources.is_empty() {
        return None;
    }
    bfs_path(&Climber::new(map, rule), &sources, target)
}

/// Step distances from the nearest of `sources` to every cell reachable
/// within `max_dist` steps.
pub fn reachable_from(
    map: &HeightMap,
    sources: &[Point],
    rule: ClimbRule,
    max_dist: usize,
) -> Vec<PathNode> {
    let sources: Vec<Point> = sources.iter().copied().filter(|&p| map.contains(p)).collect();
    bfs_map(&Climber::new(map, rule), &sources, max_dist)
}

/// Step distances *to* `target` from every cell that can reach it within
/// `max_dist` steps.
///
/// The search runs over reversed edges, so a node's cost is the length of the
/// shortest forward path from that node to `target`.
pub fn distances_to(
    map: &HeightMap,
    target: Point,
    rule: ClimbRule,
    max_dist: usize,
) -> Vec<PathNode> {
    if !map.contains(target) {
        return Vec::new();
    }
    bfs_map(&Descender::new(map, rule), &[target], max_dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hillwalk_core::Elevation;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};
    use std::collections::HashMap;

    fn pt(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    /// Check that `path` runs from `start` to `target` through legal moves.
    fn assert_legal(map: &HeightMap, path: &[Point], start: Point, target: Point, rule: ClimbRule) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&target));
        for w in path.windows(2) {
            assert!(w[0].is_adjacent_4(w[1]), "{} -> {} is not adjacent", w[0], w[1]);
            let from = map.at(w[0]).unwrap();
            let to = map.at(w[1]).unwrap();
            assert!(
                to.value() <= from.value() + rule.max_step_up,
                "{} -> {} climbs {:?} -> {:?}",
                w[0],
                w[1],
                from,
                to
            );
        }
    }

    /// Exhaustive relaxation over every cell until nothing changes.
    fn oracle(map: &HeightMap, start: Point, rule: ClimbRule) -> HashMap<Point, usize> {
        let mut dist: HashMap<Point, usize> = HashMap::new();
        dist.insert(start, 0);
        loop {
            let mut changed = false;
            for p in map.bounds() {
                let Some(&d) = dist.get(&p) else {
                    continue;
                };
                let from = map.at(p).unwrap();
                for n in p.neighbors_4() {
                    let Some(to) = map.at(n) else {
                        continue;
                    };
                    if to.value() > from.value() + rule.max_step_up {
                        continue;
                    }
                    if dist.get(&n).is_none_or(|&old| d + 1 < old) {
                        dist.insert(n, d + 1);
                        changed = true;
                    }
                }
            }
            if !changed {
                return dist;
            }
        }
    }

    fn random_map(rng: &mut StdRng, w: i32, h: i32, max_elev: u32) -> HeightMap {
        HeightMap::from_fn(w, h, |_| Elevation(rng.random_range(0..=max_elev))).unwrap()
    }

    #[test]
    fn single_row_ridge() {
        let map = HeightMap::from_rows([[0, 1, 2, 1, 0]]).unwrap();
        let rule = ClimbRule::new(1);
        let path = find_shortest_path(&map, pt(0, 0), pt(4, 0), rule).unwrap();
        assert_eq!(path.len() - 1, 4);
        assert_eq!(path, (0..5).map(|x| pt(x, 0)).collect::<Vec<_>>());
    }

    #[test]
    fn flat_grid_is_manhattan() {
        let map = HeightMap::new(3, 3).unwrap();
        let path = find_shortest_path(&map, pt(0, 0), pt(2, 2), ClimbRule::new(0)).unwrap();
        assert_eq!(path.len() - 1, 4);
        assert_legal(&map, &path, pt(0, 0), pt(2, 2), ClimbRule::new(0));
        assert_eq!(
            (path.len() - 1) as i32,
            crate::manhattan(pt(0, 0), pt(2, 2))
        );
    }

    #[test]
    fn routes_around_a_peak() {
        let map = HeightMap::from_rows([[0, 0, 0], [0, 100, 0], [0, 0, 0]]).unwrap();
        let rule = ClimbRule::new(0);
        let path = find_shortest_path(&map, pt(0, 0), pt(2, 2), rule).unwrap();
        assert_eq!(path.len() - 1, 4);
        assert!(!path.contains(&pt(1, 1)));
        assert_legal(&map, &path, pt(0, 0), pt(2, 2), rule);
    }

    #[test]
    fn start_equals_target() {
        let map = HeightMap::from_rows([[5, 0], [0, 9]]).unwrap();
        for k in [0, 1, 7, u32::MAX] {
            let path = find_shortest_path(&map, pt(1, 1), pt(1, 1), ClimbRule::new(k));
            assert_eq!(path, Some(vec![pt(1, 1)]));
            assert_eq!(shortest_path_len(&map, pt(1, 1), pt(1, 1), ClimbRule::new(k)), Some(0));
        }
    }

    #[test]
    fn walled_in_target_is_not_found() {
        // Target in the middle, surrounded by a ring of 5s; start at 0.
        let map = HeightMap::from_rows([
            [0, 0, 0, 0, 0],
            [0, 5, 5, 5, 0],
            [0, 5, 0, 5, 0],
            [0, 5, 5, 5, 0],
            [0, 0, 0, 0, 0],
        ])
        .unwrap();
        assert_eq!(find_shortest_path(&map, pt(0, 0), pt(2, 2), ClimbRule::new(4)), None);
        assert_eq!(shortest_path_len(&map, pt(0, 0), pt(2, 2), ClimbRule::new(4)), None);
        // Allowing the climb opens it up: over the ring and back down.
        assert_eq!(shortest_path_len(&map, pt(0, 0), pt(2, 2), ClimbRule::new(5)), Some(4));
    }

    #[test]
    fn descents_are_unbounded() {
        let map = HeightMap::from_rows([[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0]]).unwrap();
        let rule = ClimbRule::new(1);
        assert_eq!(shortest_path_len(&map, pt(0, 0), pt(10, 0), rule), Some(10));
        // Coming back means climbing 9 at once.
        assert_eq!(shortest_path_len(&map, pt(10, 0), pt(0, 0), rule), None);
    }

    #[test]
    fn out_of_bounds_endpoints_are_not_found() {
        let map = HeightMap::new(2, 2).unwrap();
        let rule = ClimbRule::default();
        assert_eq!(find_shortest_path(&map, pt(-1, 0), pt(1, 1), rule), None);
        assert_eq!(find_shortest_path(&map, pt(0, 0), pt(2, 0), rule), None);
        assert!(distances_to(&map, pt(5, 5), rule, usize::MAX).is_empty());
    }

    #[test]
    fn matches_exhaustive_oracle_on_random_maps() {
        let mut rng = StdRng::seed_from_u64(12);
        for round in 0..200 {
            let w = rng.random_range(1..=6);
            let h = rng.random_range(1..=6);
            let map = random_map(&mut rng, w, h, 4);
            let rule = ClimbRule::new(rng.random_range(0..=2));
            let start = pt(rng.random_range(0..w), rng.random_range(0..h));
            let dist = oracle(&map, start, rule);
            for target in map.bounds() {
                let found = find_shortest_path(&map, start, target, rule);
                match (dist.get(&target), found) {
                    (Some(&d), Some(path)) => {
                        assert_eq!(path.len() - 1, d, "round {round}: {start} -> {target}");
                        assert_legal(&map, &path, start, target, rule);
                    }
                    (None, None) => {}
                    (expected, got) => {
                        panic!("round {round}: {start} -> {target}: oracle {expected:?}, bfs {got:?}")
                    }
                }
            }
        }
    }

    #[test]
    fn from_any_matches_best_single_start() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let map = random_map(&mut rng, 7, 5, 3);
            let rule = ClimbRule::default();
            let target = pt(rng.random_range(0..7), rng.random_range(0..5));
            let starts = map.points_at(Elevation(0));

            let best = starts
                .iter()
                .filter_map(|&s| shortest_path_len(&map, s, target, rule))
                .min();
            let any = find_shortest_path_from_any(&map, &starts, target, rule);

            assert_eq!(any.as_ref().map(|p| p.len() - 1), best);
            if let Some(path) = any {
                assert!(starts.contains(&path[0]));
                assert_legal(&map, &path, path[0], target, rule);
            }
        }
    }

    #[test]
    fn from_any_ignores_out_of_bounds_and_empty_starts() {
        let map = HeightMap::new(3, 1).unwrap();
        let rule = ClimbRule::default();
        assert_eq!(find_shortest_path_from_any(&map, &[], pt(2, 0), rule), None);
        assert_eq!(find_shortest_path_from_any(&map, &[pt(9, 9)], pt(2, 0), rule), None);
        let path = find_shortest_path_from_any(&map, &[pt(9, 9), pt(0, 0)], pt(2, 0), rule);
        assert_eq!(path, Some(vec![pt(0, 0), pt(1, 0), pt(2, 0)]));
    }

    #[test]
    fn distance_maps_agree_with_path_search() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let map = random_map(&mut rng, 6, 6, 5);
            let rule = ClimbRule::new(rng.random_range(0..=2));
            let p = pt(rng.random_range(0..6), rng.random_range(0..6));

            let to: HashMap<Point, usize> = distances_to(&map, p, rule, usize::MAX)
                .into_iter()
                .map(|n| (n.pos, n.cost))
                .collect();
            let from: HashMap<Point, usize> = reachable_from(&map, &[p], rule, usize::MAX)
                .into_iter()
                .map(|n| (n.pos, n.cost))
                .collect();

            for q in map.bounds() {
                assert_eq!(to.get(&q).copied(), shortest_path_len(&map, q, p, rule));
                assert_eq!(from.get(&q).copied(), shortest_path_len(&map, p, q, rule));
            }
        }
    }

    #[test]
    fn reachable_from_stops_at_max_dist() {
        let map = HeightMap::new(10, 1).unwrap();
        let nodes = reachable_from(&map, &[pt(0, 0)], ClimbRule::default(), 3);
        let cells: Vec<Point> = nodes.iter().map(|n| n.pos).collect();
        assert_eq!(cells, vec![pt(0, 0), pt(1, 0), pt(2, 0), pt(3, 0)]);
    }

    #[test]
    fn lowest_start_via_reverse_search() {
        // Summit in the corner; lowest ground far away on the left, close on the right.
        let map = HeightMap::from_rows([
            [0, 1, 2, 3, 4, 5],
            [1, 1, 2, 3, 4, 5],
            [9, 9, 9, 9, 9, 6],
            [0, 1, 2, 3, 4, 5],
        ])
        .unwrap();
        let rule = ClimbRule::default();
        let summit = pt(5, 2);
        let best = distances_to(&map, summit, rule, usize::MAX)
            .into_iter()
            .filter(|n| map.at(n.pos) == Some(Elevation(0)))
            .map(|n| n.cost)
            .min();
        let starts = map.points_at(Elevation(0));
        let direct = find_shortest_path_from_any(&map, &starts, summit, rule).map(|p| p.len() - 1);
        assert_eq!(best, direct);
        assert_eq!(best, Some(6));
    }

    #[test]
    fn parallel_searches_share_one_map() {
        let map = HeightMap::from_fn(8, 8, |p| Elevation(((p.x + p.y) % 3) as u32)).unwrap();
        let rule = ClimbRule::default();
        let sequential: Vec<_> = (0..8)
            .map(|x| shortest_path_len(&map, pt(x, 0), pt(7, 7), rule))
            .collect();
        let parallel: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|x| {
                    let map = &map;
                    s.spawn(move || shortest_path_len(map, pt(x, 0), pt(7, 7), rule))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(sequential, parallel);
    }
}
