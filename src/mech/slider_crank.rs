//! Slider-crank: rotation to reciprocating translation along an offset line.
use super::{Joint, Link, MechState, Param};
use crate::geom::Point;

pub(crate) const PARAMS: &[Param] = &[
    Param::mm("r", "Crank Radius", 80., 20., 150.),
    Param::mm("l", "Conrod Length", 250., 100., 400.),
    Param::mm("o", "Offset", 0., -50., 50.),
];

/// Half-width of the drawn slider guide channel.
const GUIDE_GAP: f64 = 10.;

pub(crate) fn solve(theta: f64, values: &[f64]) -> MechState {
    let &[r, l, o] = values else {
        return MechState::invalid();
    };
    let center = Point::ORIGIN;
    let pa = center.polar(r, theta);
    let y_dist = (o - pa.y).abs();
    // Connecting rod too short to reach the slide line.
    if y_dist > l {
        return MechState::invalid();
    }
    let pb = Point::new(pa.x + (l * l - y_dist * y_dist).sqrt(), o);
    let joints = vec![
        Joint::ground(center, "Center"),
        Joint::pin(pa, "Crank"),
        Joint::pin(pb, "Piston"),
    ];
    let links = vec![
        Link::primary(center, pa),
        Link::primary(pa, pb),
        Link::auxiliary(Point::new(-100., o - GUIDE_GAP), Point::new(400., o - GUIDE_GAP)),
        Link::auxiliary(Point::new(-100., o + GUIDE_GAP), Point::new(400., o + GUIDE_GAP)),
    ];
    MechState::valid(joints, links, vec![pa])
}

/// Piston x-coordinate.
pub(crate) fn metric(state: &MechState) -> Option<f64> {
    Some(state.joints.get(2)?.pos.x)
}
