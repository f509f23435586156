//! Mechanism catalog and solved-state types.
//!
//! The catalog is a closed enum: each [`MechKind`] pairs a static parameter
//! schema with a closed-form position solver and a derived-metric rule. The
//! definitions are process-wide constants; nothing here is mutated after
//! startup.
use crate::geom::Point;
use std::f64::consts::TAU;
use std::str::FromStr;

mod four_bar;
mod peaucellier;
mod quick_return;
mod scotch_yoke;
mod slider_crank;
mod trammel;
mod watt;

/// Role of a link in a solved state.
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "lowercase")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LinkKind {
    /// Load-bearing member.
    #[default]
    Primary,
    /// Construction or reference geometry, excluded from validity.
    Auxiliary,
}

impl LinkKind {
    /// Return true for construction/reference geometry.
    pub const fn is_auxiliary(&self) -> bool {
        matches!(self, Self::Auxiliary)
    }
}

/// A named, optionally grounded point of a solved mechanism.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Joint {
    /// Solved position.
    pub pos: Point,
    /// Display label, fixed per mechanism.
    pub label: Option<&'static str>,
    /// Ground joints are fixed anchors; the solver computes the rest.
    pub is_ground: bool,
}

impl Joint {
    /// A grounded anchor joint.
    pub const fn ground(pos: Point, label: &'static str) -> Self {
        Self { pos, label: Some(label), is_ground: true }
    }

    /// A moving pin joint.
    pub const fn pin(pos: Point, label: &'static str) -> Self {
        Self { pos, label: Some(label), is_ground: false }
    }

    /// An unlabeled grounded joint.
    pub const fn anchor(pos: Point) -> Self {
        Self { pos, label: None, is_ground: true }
    }
}

/// A structural edge between two positions.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    /// Start position.
    pub start: Point,
    /// End position.
    pub end: Point,
    /// Structural role.
    pub kind: LinkKind,
}

impl Link {
    /// A load-bearing member.
    pub const fn primary(start: Point, end: Point) -> Self {
        Self { start, end, kind: LinkKind::Primary }
    }

    /// A construction/reference segment.
    pub const fn auxiliary(start: Point, end: Point) -> Self {
        Self { start, end, kind: LinkKind::Auxiliary }
    }
}

/// Solver output for one drive angle.
///
/// An invalid state carries no joints, links, or trace points; it stands for
/// a configuration the loop equations cannot close, which is an expected and
/// recoverable condition.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MechState {
    /// Joints in the mechanism's fixed semantic order.
    pub joints: Vec<Joint>,
    /// Links, both primary and auxiliary.
    pub links: Vec<Link>,
    /// Tracked point(s) to append to a path trace.
    pub trace: Vec<Point>,
    /// False when the loop cannot be closed at this angle.
    pub is_valid: bool,
}

impl MechState {
    /// The infeasible state.
    pub const fn invalid() -> Self {
        Self { joints: Vec::new(), links: Vec::new(), trace: Vec::new(), is_valid: false }
    }

    /// A solved, feasible state.
    pub const fn valid(joints: Vec<Joint>, links: Vec<Link>, trace: Vec<Point>) -> Self {
        Self { joints, links, trace, is_valid: true }
    }

    fn is_finite(&self) -> bool {
        self.joints.iter().all(|j| j.pos.is_finite())
            && self.links.iter().all(|l| l.start.is_finite() && l.end.is_finite())
            && self.trace.iter().all(Point::is_finite)
    }
}

/// Declaration of one scalar mechanism parameter.
///
/// `min <= default <= max` holds for every schema entry; the driving code
/// clamps values to the closed interval before solving. The solver itself
/// accepts raw values and may still fail geometrically inside the range.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Param {
    /// Stable identifier, unique within one schema.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Default value.
    pub default: f64,
    /// Lower bound of the valid interval.
    pub min: f64,
    /// Upper bound of the valid interval.
    pub max: f64,
    /// UI slider step.
    pub step: f64,
    /// Display unit.
    pub unit: &'static str,
}

impl Param {
    /// Create a schema entry with a 1-unit step in millimeters.
    pub const fn mm(id: &'static str, label: &'static str, default: f64, min: f64, max: f64) -> Self {
        Self { id, label, default, min, max, step: 1., unit: "mm" }
    }

    /// Clamp a raw value to the declared interval.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Error for an unrecognized mechanism id string.
#[derive(Debug, thiserror::Error)]
#[error("unknown mechanism id {0:?}")]
pub struct KindError(pub String);

/// The mechanism catalog.
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "snake_case")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MechKind {
    /// Four-bar linkage.
    #[default]
    FourBar,
    /// Slider-crank.
    SliderCrank,
    /// Scotch yoke.
    ScotchYoke,
    /// Whitworth quick-return.
    QuickReturn,
    /// Watt's linkage.
    Watt,
    /// Peaucellier-Lipkin cell.
    Peaucellier,
    /// Elliptical trammel.
    Trammel,
}

impl MechKind {
    /// Every catalog entry, in display order.
    pub const ALL: [Self; 7] = [
        Self::FourBar,
        Self::SliderCrank,
        Self::ScotchYoke,
        Self::QuickReturn,
        Self::Watt,
        Self::Peaucellier,
        Self::Trammel,
    ];

    /// Stable string id.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::FourBar => "four_bar",
            Self::SliderCrank => "slider_crank",
            Self::ScotchYoke => "scotch_yoke",
            Self::QuickReturn => "quick_return",
            Self::Watt => "watts_linkage",
            Self::Peaucellier => "peaucellier",
            Self::Trammel => "elliptical_trammel",
        }
    }

    /// Display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FourBar => "Four-Bar Linkage",
            Self::SliderCrank => "Slider-Crank",
            Self::ScotchYoke => "Scotch Yoke",
            Self::QuickReturn => "Whitworth Quick Return",
            Self::Watt => "Watt's Linkage",
            Self::Peaucellier => "Peaucellier-Lipkin",
            Self::Trammel => "Elliptical Trammel",
        }
    }

    /// Catalog grouping.
    pub const fn category(&self) -> &'static str {
        match self {
            Self::FourBar | Self::SliderCrank => "Basic Linkages",
            Self::ScotchYoke => "Intermittent / Special",
            Self::QuickReturn => "Industrial",
            Self::Watt | Self::Peaucellier => "Straight Line",
            Self::Trammel => "Special",
        }
    }

    /// One-paragraph description.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::FourBar => {
                "The simplest closed-loop kinematic chain: four bars connected \
                 in a loop by four joints. Used in locking pliers, bicycles, \
                 and oil pump jacks."
            }
            Self::SliderCrank => {
                "Converts rotational motion into reciprocating linear motion. \
                 Found in internal combustion engines and piston pumps."
            }
            Self::ScotchYoke => {
                "Converts rotation into pure simple harmonic motion. Used in \
                 control valve actuators."
            }
            Self::QuickReturn => {
                "Produces a reciprocating motion whose return stroke is faster \
                 than the forward stroke. Common in shaper machines."
            }
            Self::Watt => {
                "Invented by James Watt to guide the piston of a steam engine; \
                 the coupler midpoint traces an approximate straight line."
            }
            Self::Peaucellier => {
                "The first planar linkage to transform rotary motion into exact \
                 straight-line motion through geometric inversion."
            }
            Self::Trammel => {
                "An instrument for drawing ellipses: two shuttles confined to \
                 perpendicular channels carry the tracing rod."
            }
        }
    }

    /// Parameter schema, consumed by parameter-editing frontends.
    pub const fn params(&self) -> &'static [Param] {
        match self {
            Self::FourBar => four_bar::PARAMS,
            Self::SliderCrank => slider_crank::PARAMS,
            Self::ScotchYoke => scotch_yoke::PARAMS,
            Self::QuickReturn => quick_return::PARAMS,
            Self::Watt => watt::PARAMS,
            Self::Peaucellier => peaucellier::PARAMS,
            Self::Trammel => trammel::PARAMS,
        }
    }

    /// Default value of every parameter, in schema order.
    pub fn default_values(&self) -> Vec<f64> {
        self.params().iter().map(|p| p.default).collect()
    }

    /// Solve the mechanism position at `angle` with raw parameter `values`
    /// aligned with [`MechKind::params`].
    ///
    /// The angle is taken modulo 2π; calls are stateless and restartable, so
    /// any out-of-sequence angle is fine. A configuration whose loop cannot
    /// close comes back as [`MechState::invalid`], never as a panic.
    pub fn solve(&self, angle: f64, values: &[f64]) -> MechState {
        let theta = angle.rem_euclid(TAU);
        let state = match self {
            Self::FourBar => four_bar::solve(theta, values),
            Self::SliderCrank => slider_crank::solve(theta, values),
            Self::ScotchYoke => scotch_yoke::solve(theta, values),
            Self::QuickReturn => quick_return::solve(theta, values),
            Self::Watt => watt::solve(theta, values),
            Self::Peaucellier => peaucellier::solve(theta, values),
            Self::Trammel => trammel::solve(theta, values),
        };
        // Degenerate raw parameters can sneak a NaN through a closed-form
        // branch; downgrade those frames to infeasible as well.
        if state.is_valid && !state.is_finite() {
            return MechState::invalid();
        }
        state
    }

    pub(crate) fn extract_metric(&self, state: &MechState) -> Option<f64> {
        match self {
            Self::FourBar => four_bar::metric(state),
            Self::SliderCrank => slider_crank::metric(state),
            Self::ScotchYoke => scotch_yoke::metric(state),
            Self::QuickReturn => quick_return::metric(state),
            Self::Watt => watt::metric(state),
            Self::Peaucellier => peaucellier::metric(state),
            Self::Trammel => trammel::metric(state),
        }
    }
}

impl std::fmt::Display for MechKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MechKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| KindError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip() {
        for kind in MechKind::ALL {
            assert_eq!(kind.id().parse::<MechKind>().unwrap(), kind);
        }
        assert!("five_bar".parse::<MechKind>().is_err());
    }

    #[test]
    fn schema_invariants() {
        for kind in MechKind::ALL {
            assert!(!kind.params().is_empty());
            for p in kind.params() {
                assert!(p.min <= p.default && p.default <= p.max, "{}/{}", kind, p.id);
                assert!(p.step > 0.);
            }
        }
    }

    #[test]
    fn clamp() {
        let p = Param::mm("a", "Crank Length", 100., 20., 200.);
        assert_eq!(p.clamp(500.), 200.);
        assert_eq!(p.clamp(-3.), 20.);
        assert_eq!(p.clamp(77.), 77.);
    }

    #[test]
    fn wrong_arity_is_invalid() {
        for kind in MechKind::ALL {
            let state = kind.solve(1., &[]);
            assert!(!state.is_valid);
            assert!(state.joints.is_empty() && state.links.is_empty() && state.trace.is_empty());
        }
    }
}
