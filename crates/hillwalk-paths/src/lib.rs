//! Shortest paths over elevation grids.
//!
//! The search is a plain breadth-first search on the 4-connected grid graph:
//! every step costs 1, so the first path to reach the target has the fewest
//! steps. Which moves are legal is decided by a [`Pather`]; for
//! [`HeightMap`](hillwalk_core::HeightMap)s that is a [`Climber`], which
//! applies a [`ClimbRule`] bounding how far one step may climb.
//!
//! - **Single path** ([`find_shortest_path`], [`shortest_path_len`])
//! - **Best of several starts** ([`find_shortest_path_from_any`])
//! - **Distance maps** ([`reachable_from`], [`distances_to`])
//!
//! Every call owns its own frontier, visited set and predecessor map, and only
//! borrows the map immutably, so independent calls may run in parallel.
//!
//! # Pathers
//!
//! | Type | Moves from `p` to neighbour `n` when |
//! |---|---|
//! | [`Climber`] | `elev(n) <= elev(p) + max_step_up` |
//! | [`Descender`] | `elev(p) <= elev(n) + max_step_up` (reversed edges) |

mod bfs;
mod climb;
mod distance;
mod search;
mod traits;

pub use bfs::{PathNode, bfs_map, bfs_path};
pub use climb::{ClimbRule, Climber, Descender};
pub use distance::manhattan;
pub use search::{
    distances_to, find_shortest_path, find_shortest_path_from_any, reachable_from,
    shortest_path_len,
};
pub use traits::Pather;
