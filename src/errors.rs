//! Validation errors

use crate::float_types::Real;
use std::fmt::Display;

/// Everything that can go wrong while deriving a thread profile.
///
/// The `InvalidGeometry` family rejects parameters before any computation;
/// the `DegenerateResult` family reports derived quantities that cannot
/// describe a physically valid thread. Nothing is clamped or repaired.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThreadError {
    /// (InvalidGeometry) `radius` must be > 0
    NonPositiveRadius(Real),
    /// (InvalidGeometry) `pitch` must be > 0
    NonPositivePitch(Real),
    /// (InvalidGeometry) `angle_degs` must lie strictly between 0 and 180
    AngleOutOfRange(Real),
    /// (InvalidGeometry) a cutoff flat width is negative
    NegativeCutoff { which: &'static str, value: Real },
    /// (InvalidGeometry) `ext_clearance` is negative
    NegativeClearance(Real),
    /// (InvalidGeometry) `thread_overlap` is negative
    NegativeOverlap(Real),
    /// (InvalidGeometry) a parameter is NaN or infinite
    NonFiniteParameter(&'static str),
    /// (DegenerateResult) a tooth depth came out negative; the cutoffs
    /// and clearance are too large relative to the pitch
    NegativeThreadDepth { which: &'static str, value: Real },
    /// (DegenerateResult) the external helix radius came out non-positive;
    /// the thread depth plus clearance exceeds the nominal radius
    NonPositiveExternalRadius(Real),
}

impl Display for ThreadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThreadError::NonPositiveRadius(value) => {
                write!(f, "(NonPositiveRadius) radius must be > 0, got: {}", value)
            },
            ThreadError::NonPositivePitch(value) => {
                write!(f, "(NonPositivePitch) pitch must be > 0, got: {}", value)
            },
            ThreadError::AngleOutOfRange(value) => write!(
                f,
                "(AngleOutOfRange) angle_degs must be strictly between 0 and 180, got: {}",
                value
            ),
            ThreadError::NegativeCutoff { which, value } => {
                write!(f, "(NegativeCutoff) {} must be >= 0, got: {}", which, value)
            },
            ThreadError::NegativeClearance(value) => {
                write!(f, "(NegativeClearance) ext_clearance must be >= 0, got: {}", value)
            },
            ThreadError::NegativeOverlap(value) => {
                write!(f, "(NegativeOverlap) thread_overlap must be >= 0, got: {}", value)
            },
            ThreadError::NonFiniteParameter(which) => {
                write!(f, "(NonFiniteParameter) {} is NaN or infinite", which)
            },
            ThreadError::NegativeThreadDepth { which, value } => write!(
                f,
                "(NegativeThreadDepth) {} thread depth is negative ({}); cutoffs or clearance too large for the pitch",
                which, value
            ),
            ThreadError::NonPositiveExternalRadius(value) => write!(
                f,
                "(NonPositiveExternalRadius) external helix radius is {}; thread depth plus clearance exceeds the radius",
                value
            ),
        }
    }
}
