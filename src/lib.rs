//! Generate the 2D cross-section profiles of interlocking **helical screw threads**.
//!
//! Given a [`HelicalThread`] parameter set (pitch, radius, included angle,
//! cutoffs, clearance, overlap), [`helical_thread`] derives the ordered
//! control points of one internal-thread tooth and one external-thread tooth
//! in the radius–axial plane. Repeated at pitch intervals and swept along a
//! helix by a downstream collaborator, the two tooth profiles interlock with
//! the requested clearance while overlapping their core solids enough to
//! union into a manifold.
//!
//! ```
//! use helical_thread::{helical_thread, HelicalThread};
//!
//! let mut ht = HelicalThread::new(8.0, 2.0, 10.0);
//! ht.angle_degs = 90.0;
//! ht.minor_cutoff = 0.5;
//! let ths = helical_thread(ht).unwrap();
//! assert_eq!(ths.int_helixes.len(), 4);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **cli**: the `helical-thread` binary plus the [`config`] defaults-file adapter
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod profile;
pub mod thread;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::ThreadError;
pub use profile::{HelixLocation, ThreadProfile};
pub use thread::{HelicalThread, ThreadHelixes, helical_thread};
