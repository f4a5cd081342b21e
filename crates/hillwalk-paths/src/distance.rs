use hillwalk_core::Point;

/// Manhattan (L1) distance between two points.
///
/// On a 4-connected grid this is a lower bound on the number of steps between
/// `a` and `b`, reached exactly when every move on the way is legal.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
