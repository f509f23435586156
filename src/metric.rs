//! Derived output metrics for time-series charting.
//!
//! Every mechanism declares one "interesting output" scalar next to its own
//! solver; the dispatch below is an exhaustive match, so a new catalog entry
//! without a metric rule fails to compile rather than falling through.
use crate::mech::{MechKind, MechState};

/// One charted sample: the drive angle and the derived scalar.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MetricPoint {
    /// Drive angle the sample was taken at.
    pub angle: f64,
    /// Derived output value.
    pub value: f64,
}

impl MechKind {
    /// Extract the mechanism's derived output metric from a solved state.
    ///
    /// Per kind: four-bar reports the rocker angle about its ground pivot,
    /// slider-crank and quick-return report the output joint's x, the
    /// straight-line linkages report the tracked point's x, and the harmonic
    /// mechanisms report the last joint's height. Returns `None` for an
    /// invalid state.
    pub fn metric(&self, state: &MechState) -> Option<f64> {
        if !state.is_valid {
            return None;
        }
        self.extract_metric(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn invalid_state_yields_no_metric() {
        assert_eq!(MechKind::FourBar.metric(&MechState::invalid()), None);
    }

    #[test]
    fn every_kind_has_a_metric_at_defaults() {
        for kind in MechKind::ALL {
            let state = kind.solve(1., &kind.default_values());
            assert!(kind.metric(&state).is_some(), "{kind}");
        }
    }

    #[test]
    fn slider_crank_reports_piston_x() {
        let kind = MechKind::SliderCrank;
        let state = kind.solve(0., &kind.default_values());
        assert_abs_diff_eq!(kind.metric(&state).unwrap(), 330., epsilon = 1e-9);
    }
}
