//! Rectangle arithmetic for paint clipping.
//!
//! Rectangles are kept in min/max-corner canonical form. Native toolkits
//! report dirty regions in origin/size form; convert at the boundary with
//! [`Rect::from_origin_size`] and do all arithmetic on corners. Mixing the
//! two forms is the classic source of off-by-a-frame clipping bugs when the
//! surface lives inside a scroll view.

/// A point in surface-local pixel coordinates (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in min/max-corner form.
///
/// `min` is inclusive, `max` is exclusive, matching pixel-region semantics:
/// a rect from (0,0) to (40,40) covers 40×40 pixels. A rect is well-formed
/// when `min.x <= max.x && min.y <= max.y`; constructors normalize, so a
/// degenerate input yields an empty rect rather than a negative extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Creates a rect from two corners, normalizing so min <= max on both
    /// axes.
    pub fn new(min: Point, max: Point) -> Self {
        Self {
            min: Point::new(min.x.min(max.x), min.y.min(max.y)),
            max: Point::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// Converts an origin/size rectangle (the form native dirty rects
    /// arrive in) to corner form: max = origin + size.
    pub fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(Point::new(x, y), Point::new(x + width, y + height))
    }

    /// The rect covering a whole surface of the given size, anchored at the
    /// origin.
    pub fn from_size(size: Size) -> Self {
        Self::from_origin_size(0, 0, size.width, size.height)
    }

    /// Width in pixels (never negative).
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height in pixels (never negative).
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Returns true if the rect covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Returns true if the point lies inside the rect (min inclusive, max
    /// exclusive).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Returns true if `other` lies entirely inside this rect.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.is_empty()
            || (other.min.x >= self.min.x
                && other.min.y >= self.min.y
                && other.max.x <= self.max.x
                && other.max.y <= self.max.y)
    }

    /// Intersects two rects, returning `None` when they share no pixels.
    ///
    /// An empty intersection is a normal outcome on the paint path (e.g. a
    /// dirty rect entirely outside the surface after a resize), not an
    /// error.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let min = Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));
        if min.x >= max.x || min.y >= max.y {
            None
        } else {
            Some(Rect { min, max })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect {
        Rect::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    // ==================== Construction ====================

    #[test]
    fn test_from_origin_size() {
        let r = Rect::from_origin_size(10, 20, 30, 40);
        assert_eq!(r.min, Point::new(10, 20));
        assert_eq!(r.max, Point::new(40, 60));
        assert_eq!(r.width(), 30);
        assert_eq!(r.height(), 40);
    }

    #[test]
    fn test_new_normalizes_swapped_corners() {
        let r = Rect::new(Point::new(5, 8), Point::new(1, 2));
        assert_eq!(r.min, Point::new(1, 2));
        assert_eq!(r.max, Point::new(5, 8));
    }

    #[test]
    fn test_zero_size_is_empty() {
        assert!(Rect::from_origin_size(10, 10, 0, 5).is_empty());
        assert!(Rect::from_origin_size(10, 10, 5, 0).is_empty());
        assert!(!Rect::from_origin_size(10, 10, 1, 1).is_empty());
    }

    // ==================== Intersection ====================

    #[test]
    fn test_intersect_overlapping() {
        let a = rect(0, 0, 100, 100);
        let b = rect(-10, -10, 40, 40);
        assert_eq!(a.intersect(&b), Some(rect(0, 0, 40, 40)));
    }

    #[test]
    fn test_intersect_disjoint() {
        let a = rect(0, 0, 100, 100);
        let b = rect(200, 200, 210, 210);
        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn test_intersect_touching_edges_is_empty() {
        // max is exclusive, so rects that only share an edge do not overlap
        let a = rect(0, 0, 10, 10);
        let b = rect(10, 0, 20, 10);
        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn test_intersect_contained() {
        let outer = rect(0, 0, 100, 100);
        let inner = rect(20, 20, 30, 30);
        assert_eq!(outer.intersect(&inner), Some(inner));
        assert!(outer.contains_rect(&inner));
    }

    #[test]
    fn test_intersect_is_commutative() {
        let a = rect(0, 0, 50, 50);
        let b = rect(25, 25, 75, 75);
        assert_eq!(a.intersect(&b), b.intersect(&a));
    }

    // ==================== Containment ====================

    #[test]
    fn test_contains_point_half_open() {
        let r = rect(0, 0, 10, 10);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(9, 9)));
        assert!(!r.contains(Point::new(10, 10)));
        assert!(!r.contains(Point::new(-1, 5)));
    }
}
