//! Four-bar linkage: crank, coupler and rocker over a fixed ground line.
use super::{Joint, Link, MechState, Param};
use crate::geom::{intersect_two_circles, Point};

pub(crate) const PARAMS: &[Param] = &[
    Param::mm("a", "Crank Length", 100., 20., 200.),
    Param::mm("b", "Coupler Length", 250., 50., 400.),
    Param::mm("c", "Rocker Length", 150., 50., 300.),
    Param::mm("d", "Ground Dist", 200., 50., 350.),
];

pub(crate) fn solve(theta: f64, values: &[f64]) -> MechState {
    let &[a, b, c, d] = values else {
        return MechState::invalid();
    };
    let o2 = Point::ORIGIN;
    let o4 = Point::new(d, 0.);
    let pa = o2.polar(a, theta);
    let Some([_, pb]) = intersect_two_circles(pa, b, o4, c) else {
        return MechState::invalid();
    };
    // The second branch keeps the follower on one circuit over the whole
    // revolution; flipping per-angle would snap the assembly.
    let joints = vec![
        Joint::ground(o2, "O2"),
        Joint::pin(pa, "A"),
        Joint::pin(pb, "B"),
        Joint::ground(o4, "O4"),
    ];
    let links = vec![
        Link::primary(o2, pa),
        Link::primary(pa, pb),
        Link::primary(pb, o4),
        Link::auxiliary(o4, o2),
    ];
    MechState::valid(joints, links, vec![pb])
}

/// Rocker angle relative to its ground pivot.
pub(crate) fn metric(state: &MechState) -> Option<f64> {
    let [_, _, b, o4] = state.joints[..] else {
        return None;
    };
    Some(o4.pos.angle_to(&b.pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::TAU;

    const DEFAULTS: [f64; 4] = [100., 250., 150., 200.];

    #[test]
    fn reference_position() {
        let state = solve(0., &DEFAULTS);
        assert!(state.is_valid);
        let [o2, a, b, o4] = state.joints[..] else { unreachable!() };
        assert!(o2.is_ground && o4.is_ground);
        assert_abs_diff_eq!(a.pos.x, 100., epsilon = 1e-9);
        assert_abs_diff_eq!(a.pos.y, 0., epsilon = 1e-9);
        assert_abs_diff_eq!(a.pos.distance(&b.pos), 250., epsilon = 1e-9);
        assert_abs_diff_eq!(b.pos.distance(&Point::new(200., 0.)), 150., epsilon = 1e-9);
    }

    #[test]
    fn loop_closure_over_sweep() {
        let [a, b, c, _] = DEFAULTS;
        for i in 0..360 {
            let theta = i as f64 / 360. * TAU;
            let state = solve(theta, &DEFAULTS);
            assert!(state.is_valid, "locked at {theta}");
            let [_, pa, pb, o4] = state.joints[..] else { unreachable!() };
            assert_abs_diff_eq!(pa.pos.distance(&Point::ORIGIN), a, epsilon = 1e-9);
            assert_abs_diff_eq!(pa.pos.distance(&pb.pos), b, epsilon = 1e-9);
            assert_abs_diff_eq!(pb.pos.distance(&o4.pos), c, epsilon = 1e-9);
        }
    }

    #[test]
    fn unclosable_loop_is_invalid() {
        // Crank at full stretch cannot reach the rocker circle.
        let state = solve(0., &[200., 50., 50., 350.]);
        assert!(!state.is_valid);
        assert!(state.joints.is_empty());
    }

    #[test]
    fn rocker_metric() {
        let state = solve(1.2, &DEFAULTS);
        let expected = {
            let b = state.joints[2].pos;
            let o4 = state.joints[3].pos;
            (b.y - o4.y).atan2(b.x - o4.x)
        };
        assert_abs_diff_eq!(metric(&state).unwrap(), expected);
    }
}
