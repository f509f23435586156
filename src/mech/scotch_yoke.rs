//! Scotch yoke: a crank pin in a sliding slot, pure simple harmonic output.
use super::{Joint, Link, MechState, Param};
use crate::geom::Point;

pub(crate) const PARAMS: &[Param] = &[Param::mm("r", "Crank Radius", 100., 20., 150.)];

const YOKE_HEIGHT: f64 = 120.;
const YOKE_WIDTH: f64 = 40.;

pub(crate) fn solve(theta: f64, values: &[f64]) -> MechState {
    let &[r] = values else {
        return MechState::invalid();
    };
    let center = Point::ORIGIN;
    let pin = center.polar(r, theta);
    // The yoke is an unconstrained projection of the pin onto the x-axis;
    // there is no intersection to fail.
    let slot_x = pin.x;
    let joints = vec![Joint::anchor(center), Joint::pin(pin, "Pin")];
    let links = vec![
        Link::primary(center, pin),
        Link::primary(Point::new(slot_x, -YOKE_HEIGHT), Point::new(slot_x, YOKE_HEIGHT)),
        Link::primary(
            Point::new(slot_x - YOKE_WIDTH, -YOKE_HEIGHT),
            Point::new(slot_x + YOKE_WIDTH, -YOKE_HEIGHT),
        ),
        Link::primary(
            Point::new(slot_x - YOKE_WIDTH, YOKE_HEIGHT),
            Point::new(slot_x + YOKE_WIDTH, YOKE_HEIGHT),
        ),
        // Output rod.
        Link::primary(Point::new(slot_x - YOKE_WIDTH, 0.), Point::new(slot_x - 100., 0.)),
    ];
    MechState::valid(joints, links, vec![Point::new(slot_x, 0.)])
}

/// Pin height, the harmonic output.
pub(crate) fn metric(state: &MechState) -> Option<f64> {
    Some(state.joints.last()?.pos.y)
}
