//! Peaucellier-Lipkin cell: straight-line motion by geometric inversion.
use super::{Joint, Link, MechState, Param};
use crate::geom::{intersect_two_circles, Point};

pub(crate) const PARAMS: &[Param] = &[
    Param::mm("a", "Crank Input", 50., 30., 100.),
    Param::mm("L", "Arm Length", 120., 100., 300.),
    Param::mm("l", "Cell Link", 100., 40., 150.),
    Param::mm("e", "Pivot Dist", 160., 100., 300.),
];

/// Candidates closer than this to the input point are the input point itself;
/// the output is the other intersection of the cell circles.
const COINCIDENT_EPS: f64 = 1.;

/// Half-height of the drawn expected-line reference.
const GHOST_LINE: f64 = 200.;

pub(crate) fn solve(theta: f64, values: &[f64]) -> MechState {
    let &[a, arm, cell, e] = values else {
        return MechState::invalid();
    };
    let main = Point::ORIGIN;
    let crank = Point::new(-e, 0.);
    let pp = crank.polar(a, theta);
    // Cell joints: both branches of circle(O, L) x circle(P, l).
    let Some([pa, pb]) = intersect_two_circles(main, arm, pp, cell) else {
        return MechState::invalid();
    };
    let Some([q0, q1]) = intersect_two_circles(pa, cell, pb, cell) else {
        return MechState::invalid();
    };
    // One root of the cell circles is P itself; keep the other.
    let pq = if q0.distance(&pp) > COINCIDENT_EPS { q0 } else { q1 };
    let joints = vec![
        Joint::ground(crank, "C"),
        Joint::ground(main, "O"),
        Joint::pin(pp, "P"),
        Joint::pin(pa, "A"),
        Joint::pin(pb, "B"),
        Joint::pin(pq, "Output"),
    ];
    let links = vec![
        Link::primary(crank, pp),
        Link::primary(main, pa),
        Link::primary(main, pb),
        Link::primary(pp, pa),
        Link::primary(pp, pb),
        Link::primary(pa, pq),
        Link::primary(pb, pq),
        // Expected straight-line reference through the output.
        Link::auxiliary(Point::new(pq.x, -GHOST_LINE), Point::new(pq.x, GHOST_LINE)),
    ];
    MechState::valid(joints, links, vec![pq])
}

/// Output-point x-coordinate.
pub(crate) fn metric(state: &MechState) -> Option<f64> {
    Some(state.joints.last()?.pos.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::TAU;

    const DEFAULTS: [f64; 4] = [50., 120., 100., 160.];

    #[test]
    fn inversion_invariant_over_sweep() {
        let [_, arm, cell, _] = DEFAULTS;
        let k2 = arm * arm - cell * cell;
        for i in 0..360 {
            let state = solve(i as f64 / 360. * TAU, &DEFAULTS);
            assert!(state.is_valid);
            let [_, o, pp, _, _, pq] = state.joints[..] else { unreachable!() };
            // |OP| * |OQ| is the constant of the inversion.
            let op = o.pos.distance(&pp.pos);
            let oq = o.pos.distance(&pq.pos);
            assert_abs_diff_eq!(op * oq, k2, epsilon = 1e-6);
            // O, P, Q are collinear and Q never collapses onto P.
            assert_abs_diff_eq!(pp.pos.x * pq.pos.y, pp.pos.y * pq.pos.x, epsilon = 1e-6);
            assert!(pq.pos.distance(&pp.pos) > COINCIDENT_EPS);
        }
    }

    #[test]
    fn cell_links_hold_length() {
        let [_, arm, cell, _] = DEFAULTS;
        let state = solve(2., &DEFAULTS);
        let [_, o, pp, pa, pb, pq] = state.joints[..] else { unreachable!() };
        for p in [pa, pb] {
            assert_abs_diff_eq!(o.pos.distance(&p.pos), arm, epsilon = 1e-9);
            assert_abs_diff_eq!(pp.pos.distance(&p.pos), cell, epsilon = 1e-9);
            assert_abs_diff_eq!(pq.pos.distance(&p.pos), cell, epsilon = 1e-9);
        }
    }

    #[test]
    fn crank_through_main_pivot_degenerates() {
        // e = a puts the input point onto the main pivot at theta = 0, the
        // singular phase of the exact straight-line configuration.
        assert!(!solve(0., &[100., 120., 100., 100.]).is_valid);
        // Away from the singularity the cell assembles again.
        assert!(solve(TAU / 2., &[100., 120., 100., 100.]).is_valid);
    }
}
