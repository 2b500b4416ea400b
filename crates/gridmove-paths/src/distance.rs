use gridmove_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Whether two points are orthogonally adjacent (Manhattan distance
/// exactly 1). A point is not adjacent to itself, and diagonal
/// neighbors do not count.
#[inline]
pub fn adjacent(a: Point, b: Point) -> bool {
    manhattan(a, b) == 1
}
