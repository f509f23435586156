//! Linkage-sim is a position-analysis engine for classic planar mechanisms.
//!
//! Seven mechanisms are built in: four-bar, slider-crank, Scotch yoke,
//! Whitworth quick-return, Watt's linkage, Peaucellier-Lipkin and the
//! elliptical trammel. Every solver is a pure function of the drive angle and
//! the link-length parameters; an unassemblable configuration yields an
//! invalid state instead of an error.
//!
//! ```
//! use linkage_sim::{Driver, MechKind};
//!
//! let state = MechKind::FourBar.solve(0., &MechKind::FourBar.default_values());
//! assert!(state.is_valid);
//!
//! let mut driver = Driver::new(MechKind::FourBar);
//! let state = driver.advance(16.7);
//! assert!(state.is_valid);
//! ```
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]
pub use crate::geom::*;
pub use crate::mech::*;
pub use crate::metric::*;
pub use crate::sim::*;

#[cfg(feature = "csv")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "csv")))]
pub mod csv;
mod geom;
mod mech;
mod metric;
mod sim;
