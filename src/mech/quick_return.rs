//! Whitworth quick-return: slotted lever driven by a crank pin, ram on a
//! horizontal guide.
use super::{Joint, Link, MechState, Param};
use crate::geom::Point;

pub(crate) const PARAMS: &[Param] = &[
    Param::mm("r", "Crank Radius", 60., 30., 100.),
    Param::mm("d", "Pivot Dist", 70., 10., 80.),
    Param::mm("l", "Lever Length", 250., 150., 400.),
    Param::mm("c", "Rod Length", 150., 100., 200.),
];

/// Fixed height of the ram guide line.
const RAM_GUIDE_Y: f64 = 150.;

pub(crate) fn solve(theta: f64, values: &[f64]) -> MechState {
    let &[r, d, l, c] = values else {
        return MechState::invalid();
    };
    let o1 = Point::ORIGIN;
    let o2 = Point::new(0., -d);
    let pa = o1.polar(r, theta);
    // The slotted lever passes through the crank pin, extended to length l.
    let pb = o2.polar(l, o2.angle_to(&pa));
    let dy = (RAM_GUIDE_Y - pb.y).abs();
    // Connecting rod cannot reach the guide line.
    if dy > c {
        return MechState::invalid();
    }
    // Forward (larger-x) root of circle(B, c) against the guide.
    let ram = Point::new(pb.x + (c * c - dy * dy).sqrt(), RAM_GUIDE_Y);
    let joints = vec![
        Joint::anchor(o1),
        Joint::ground(o2, "Pivot"),
        Joint::pin(pa, "A"),
        Joint::pin(pb, "B"),
        Joint::pin(ram, "Ram"),
    ];
    let links = vec![
        Link::primary(o1, pa),
        Link::primary(o2, pb),
        Link::primary(pb, ram),
        Link::auxiliary(
            Point::new(-200., RAM_GUIDE_Y - 10.),
            Point::new(300., RAM_GUIDE_Y - 10.),
        ),
    ];
    MechState::valid(joints, links, vec![ram])
}

/// Ram x-coordinate.
pub(crate) fn metric(state: &MechState) -> Option<f64> {
    Some(state.joints.get(4)?.pos.x)
}
