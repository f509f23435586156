//! Watt's linkage: two rocking arms joined by a short coupler whose midpoint
//! approximates straight-line motion.
use super::{Joint, Link, MechState, Param};
use crate::geom::{intersect_two_circles, Point};
use std::f64::consts::FRAC_PI_2;

pub(crate) const PARAMS: &[Param] = &[
    Param::mm("l", "Arm Length", 180., 80., 200.),
    Param::mm("w", "Separation", 120., 100., 300.),
    Param::mm("c", "Coupler Len", 100., 40., 150.),
];

/// Amplitude of the driven arm oscillation in radians.
///
/// The linkage is a limited-sweep guide, not a crank: the full drive-angle
/// revolution maps onto this bounded rocking motion.
const SWEEP: f64 = 0.5;

pub(crate) fn solve(theta: f64, values: &[f64]) -> MechState {
    let &[l, w, c] = values else {
        return MechState::invalid();
    };
    let o1 = Point::new(-w / 2., 0.);
    let o2 = Point::new(w / 2., 0.);
    let pa = o1.polar(l, FRAC_PI_2 + SWEEP * theta.sin());
    let Some([p, q]) = intersect_two_circles(o2, l, pa, c) else {
        return MechState::invalid();
    };
    // Closest-y branch keeps the coupler level instead of folding it.
    let pb = if (p.y - pa.y).abs() < (q.y - pa.y).abs() { p } else { q };
    let mid = pa.mid(&pb);
    let joints = vec![
        Joint::ground(o1, "O1"),
        Joint::ground(o2, "O2"),
        Joint::pin(pa, "A"),
        Joint::pin(pb, "B"),
        Joint::pin(mid, "P"),
    ];
    let links = vec![
        Link::primary(o1, pa),
        Link::primary(o2, pb),
        Link::primary(pa, pb),
        Link::auxiliary(o1, o2),
    ];
    MechState::valid(joints, links, vec![mid])
}

/// Tracked-point x-coordinate.
pub(crate) fn metric(state: &MechState) -> Option<f64> {
    Some(state.joints.last()?.pos.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::TAU;

    const DEFAULTS: [f64; 3] = [180., 120., 100.];

    #[test]
    fn arms_and_coupler_hold_length() {
        for i in 0..360 {
            let state = solve(i as f64 / 360. * TAU, &DEFAULTS);
            assert!(state.is_valid);
            let [o1, o2, pa, pb, mid] = state.joints[..] else { unreachable!() };
            assert_abs_diff_eq!(o1.pos.distance(&pa.pos), 180., epsilon = 1e-9);
            assert_abs_diff_eq!(o2.pos.distance(&pb.pos), 180., epsilon = 1e-9);
            assert_abs_diff_eq!(pa.pos.distance(&pb.pos), 100., epsilon = 1e-9);
            assert_abs_diff_eq!(mid.pos.x, (pa.pos.x + pb.pos.x) / 2., epsilon = 1e-9);
            assert_abs_diff_eq!(mid.pos.y, (pa.pos.y + pb.pos.y) / 2., epsilon = 1e-9);
        }
    }

    #[test]
    fn picks_level_coupler_branch() {
        for i in 0..360 {
            let state = solve(i as f64 / 360. * TAU, &DEFAULTS);
            let [_, o2, pa, pb, _] = state.joints[..] else { unreachable!() };
            let [p, q] = intersect_two_circles(o2.pos, 180., pa.pos, 100.).unwrap();
            let other = if pb.pos.distance(&p) < 1e-9 { q } else { p };
            assert!((pb.pos.y - pa.pos.y).abs() <= (other.y - pa.pos.y).abs() + 1e-9);
        }
    }

    #[test]
    fn wide_separation_locks_part_of_the_sweep() {
        // With the arm upright the far pivot is out of coupler reach; only
        // the inward half of the rocking motion assembles.
        assert!(!solve(0., &[150., 200., 80.]).is_valid);
        assert!(solve(0.75 * TAU, &[150., 200., 80.]).is_valid);
    }
}
