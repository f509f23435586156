//! Elliptical trammel: a rod between two perpendicular sliders traces an
//! exact ellipse.
use super::{Joint, Link, MechState, Param};
use crate::geom::Point;

pub(crate) const PARAMS: &[Param] = &[
    Param::mm("a", "Semi-Major A", 150., 50., 200.),
    Param::mm("b", "Semi-Minor B", 80., 20., 140.),
];

/// Half-length of the drawn channel axes.
const CHANNEL: f64 = 250.;

pub(crate) fn solve(alpha: f64, values: &[f64]) -> MechState {
    let &[a, b] = values else {
        return MechState::invalid();
    };
    // Closed form; no intersection to fail. The sliders pin the rod of
    // length a + b to the axes and the tracer divides it at ratio b : a,
    // which lands exactly on (a cos, b sin).
    let rod = a + b;
    let slider_x = Point::new(rod * alpha.cos(), 0.);
    let slider_y = Point::new(0., rod * alpha.sin());
    let tracer = slider_x.lerp(&slider_y, b / rod);
    let joints = vec![
        Joint::pin(slider_y, "Slider Y"),
        Joint::pin(slider_x, "Slider X"),
        Joint::pin(tracer, "P"),
    ];
    let links = vec![
        Link::primary(slider_y, slider_x),
        Link::auxiliary(Point::new(-CHANNEL, 0.), Point::new(CHANNEL, 0.)),
        Link::auxiliary(Point::new(0., -CHANNEL), Point::new(0., CHANNEL)),
    ];
    MechState::valid(joints, links, vec![tracer])
}

/// Tracer height.
pub(crate) fn metric(state: &MechState) -> Option<f64> {
    Some(state.joints.last()?.pos.y)
}
