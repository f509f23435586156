//! Planar geometry kernel shared by every solver.
use nalgebra as na;

/// A planar coordinate.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0., 0.);

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, rhs: &Self) -> f64 {
        (self.x - rhs.x).hypot(self.y - rhs.y)
    }

    /// Offset by a polar vector of length `d` at angle `a`.
    pub fn polar(&self, d: f64, a: f64) -> Self {
        Self::new(self.x + d * a.cos(), self.y + d * a.sin())
    }

    /// Midpoint of two points.
    pub fn mid(&self, rhs: &Self) -> Self {
        self.lerp(rhs, 0.5)
    }

    /// Affine combination `self + t * (rhs - self)`.
    pub fn lerp(&self, rhs: &Self, t: f64) -> Self {
        Self::new(self.x + t * (rhs.x - self.x), self.y + t * (rhs.y - self.y))
    }

    /// Angle of the vector from `self` to `rhs`.
    pub fn angle_to(&self, rhs: &Self) -> f64 {
        (rhs.y - self.y).atan2(rhs.x - self.x)
    }

    /// Check that both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<na::Point2<f64>> for Point {
    fn from(p: na::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for na::Point2<f64> {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Intersection points of circle `(c0, r0)` and circle `(c1, r1)`.
///
/// Returns `None` when the circles are too far apart, one contains the other
/// without touching, or they are concentric. A tangency returns two
/// coincident points.
///
/// The order of the pair is deterministic: the "+" rotation of the half-chord
/// first, then the "-" rotation, both measured from the same center-line unit
/// vector. Assembly-mode selection between the two is the caller's business.
pub fn intersect_two_circles(c0: Point, r0: f64, c1: Point, r1: f64) -> Option<[Point; 2]> {
    let p0 = na::Point2::from(c0);
    let p1 = na::Point2::from(c1);
    let v = p1 - p0;
    let d = v.norm();
    if d > r0 + r1 || d < (r0 - r1).abs() || d < f64::EPSILON {
        return None;
    }
    let a = (r0 * r0 - r1 * r1 + d * d) / (2. * d);
    // A true tangency can drive the radicand slightly negative.
    let h = (r0 * r0 - a * a).abs().sqrt();
    let u = v / d;
    let m = p0 + a * u;
    let n = na::Vector2::new(u.y, -u.x);
    Some([Point::from(m + h * n), Point::from(m - h * n)])
}
