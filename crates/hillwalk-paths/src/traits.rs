use hillwalk_core::Point;

/// Neighbour enumeration for the breadth-first searches.
///
/// Implementations push only the neighbours that may legally be entered from
/// `p`; the search treats every pushed point as one step away.
pub trait Pather {
    /// Append neighbours of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
