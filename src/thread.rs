//! Derivation of interlocking internal/external thread-tooth profiles.

use crate::errors::ThreadError;
use crate::float_types::Real;
use crate::profile::{HelixLocation, ThreadProfile};

/// Parameters of one helical thread, shared by the internal (nut) and
/// external (bolt) profiles derived from it.
///
/// `height`, `inset_offset`, `taper_out_rpos` and `taper_in_rpos` describe
/// the axial extent and tapering of the eventual sweep; they are carried
/// through untouched for the sweep collaborator and do not influence the
/// profile derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct HelicalThread {
    /// Nominal helix radius, the major radius of the internal thread (> 0)
    pub radius: Real,
    /// Axial distance between successive thread crests (> 0)
    pub pitch: Real,
    /// Axial extent of the swept thread
    pub height: Real,
    /// Axial inset of the thread from the ends of the swept solid
    pub inset_offset: Real,
    /// Relative position (0..1) where tapering out ends
    pub taper_out_rpos: Real,
    /// Relative position (0..1) where tapering in begins
    pub taper_in_rpos: Real,
    /// Included flank angle of the tooth tip, in degrees, strictly
    /// between 0 and 180
    pub angle_degs: Real,
    /// Width of the flat at the major diameter; 0 yields a pointed tip
    pub major_cutoff: Real,
    /// Width of the flat at the minor diameter; 0 yields a pointed tip
    pub minor_cutoff: Real,
    /// Perpendicular clearance reserved between mating internal and
    /// external flanks (>= 0)
    pub ext_clearance: Real,
    /// Small radial bias so the generated thread overlaps its core solid
    /// and the union is a manifold (>= 0, typically ~1e-3)
    pub thread_overlap: Real,
}

impl HelicalThread {
    /// A thread of the given dimensions with every other parameter at its
    /// customary default: 45° included angle, pointed tips, 0.1 clearance,
    /// 0.001 overlap, tapering over the outer tenths of the sweep.
    pub const fn new(radius: Real, pitch: Real, height: Real) -> Self {
        HelicalThread {
            radius,
            pitch,
            height,
            inset_offset: 0.0,
            taper_out_rpos: 0.1,
            taper_in_rpos: 0.9,
            angle_degs: 45.0,
            major_cutoff: 0.0,
            minor_cutoff: 0.0,
            ext_clearance: 0.1,
            thread_overlap: 0.001,
        }
    }

    /// Checks every precondition of [`helical_thread`], surfacing the first
    /// violation. Exposed separately so configuration layers can fail fast
    /// before constructing anything else.
    pub fn validate(&self) -> Result<(), ThreadError> {
        let fields = [
            ("radius", self.radius),
            ("pitch", self.pitch),
            ("height", self.height),
            ("inset_offset", self.inset_offset),
            ("taper_out_rpos", self.taper_out_rpos),
            ("taper_in_rpos", self.taper_in_rpos),
            ("angle_degs", self.angle_degs),
            ("major_cutoff", self.major_cutoff),
            ("minor_cutoff", self.minor_cutoff),
            ("ext_clearance", self.ext_clearance),
            ("thread_overlap", self.thread_overlap),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ThreadError::NonFiniteParameter(name));
            }
        }
        if self.radius <= 0.0 {
            return Err(ThreadError::NonPositiveRadius(self.radius));
        }
        if self.pitch <= 0.0 {
            return Err(ThreadError::NonPositivePitch(self.pitch));
        }
        if self.angle_degs <= 0.0 || self.angle_degs >= 180.0 {
            return Err(ThreadError::AngleOutOfRange(self.angle_degs));
        }
        if self.major_cutoff < 0.0 {
            return Err(ThreadError::NegativeCutoff {
                which: "major_cutoff",
                value: self.major_cutoff,
            });
        }
        if self.minor_cutoff < 0.0 {
            return Err(ThreadError::NegativeCutoff {
                which: "minor_cutoff",
                value: self.minor_cutoff,
            });
        }
        if self.ext_clearance < 0.0 {
            return Err(ThreadError::NegativeClearance(self.ext_clearance));
        }
        if self.thread_overlap < 0.0 {
            return Err(ThreadError::NegativeOverlap(self.thread_overlap));
        }
        Ok(())
    }
}

/// The profiles derived by [`helical_thread`]: the internal thread prefixed
/// `int_`, the external thread prefixed `ext_`, plus the parameters they
/// were derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadHelixes {
    /// The parameters the profiles were derived from
    pub ht: HelicalThread,
    /// Reference radius of the internal thread (its major side)
    pub int_helix_radius: Real,
    /// Outline of one internal-thread tooth
    pub int_helixes: ThreadProfile,
    /// Reference radius of the external thread (its minor side)
    pub ext_helix_radius: Real,
    /// Outline of one external-thread tooth
    pub ext_helixes: ThreadProfile,
}

/// Derives the internal and external tooth profiles for `ht`.
///
/// The internal profile sits on the major radius; the external profile sits
/// `int_thread_depth + ext_clearance` further in, on the minor side. Each
/// profile is [`Trapezoidal`](ThreadProfile::Trapezoidal) when its far side
/// keeps a flat and [`Triangular`](ThreadProfile::Triangular) when it ends
/// in a point; the two decisions are independent, because the external flat
/// shrinks with the clearance and can vanish while the internal one stays.
///
/// Pure and O(1): a fixed number of trigonometric operations, no I/O, no
/// shared state, safe to call from any number of threads.
///
/// # Errors
///
/// [`ThreadError`] for parameters outside the documented domain, or for
/// derived radii/depths that cannot describe a physical thread. No partial
/// result is produced.
pub fn helical_thread(ht: HelicalThread) -> Result<ThreadHelixes, ThreadError> {
    ht.validate()?;

    // 0 < angle_degs < 180 puts the half angle in (0, 90): tan and sin
    // are positive and finite from here on.
    let half_angle = ht.angle_degs.to_radians() / 2.0;
    let tan_hangle = half_angle.tan();
    let sin_hangle = half_angle.sin();

    // Horizontal distance from the theoretical pointed tip to a flat of
    // the given axial width, via the flank slope.
    let tip_to_major_cutoff = ((ht.pitch - ht.major_cutoff) / 2.0) / tan_hangle;
    let tip_to_minor_cutoff = (ht.minor_cutoff / 2.0) / tan_hangle;
    let int_thread_depth = tip_to_major_cutoff - tip_to_minor_cutoff;
    if int_thread_depth < 0.0 {
        return Err(ThreadError::NegativeThreadDepth {
            which: "internal",
            value: int_thread_depth,
        });
    }

    // The radial overlap bias expressed as an axial shift along the flank.
    let thread_overlap_vert_adj = ht.thread_overlap * tan_hangle;
    let half_height_at_major = (ht.pitch - ht.major_cutoff) / 2.0 + thread_overlap_vert_adj;
    let half_height_at_minor = ht.minor_cutoff / 2.0;

    // Internal thread sits on the major radius; its flank points carry the
    // overlap bias outward.
    let int_helix_radius = ht.radius;
    let int_lower = HelixLocation::new(
        int_helix_radius + ht.thread_overlap,
        0.0,
        -half_height_at_major,
    );
    let int_upper = HelixLocation::new(
        int_helix_radius + ht.thread_overlap,
        0.0,
        half_height_at_major,
    );
    let int_minor = HelixLocation::new(int_helix_radius, -int_thread_depth, half_height_at_minor);
    let int_helixes = if ht.minor_cutoff > 0.0 {
        ThreadProfile::Trapezoidal([
            int_lower,
            int_upper,
            int_minor,
            HelixLocation::new(int_helix_radius, -int_thread_depth, -half_height_at_minor),
        ])
    } else {
        ThreadProfile::Triangular([int_lower, int_upper, int_minor])
    };

    // hyp is the hypotenuse of the triangle formed by a radial line and
    // the tips of the internal and external threads at the requested
    // clearance; ext_vert_adj is the axial shift that makes the clearance
    // perpendicular to the flank rather than a naive radial subtraction.
    let hyp = ht.ext_clearance / sin_hangle;
    let ext_vert_adj = (hyp - ht.ext_clearance) * tan_hangle;

    // External thread sits on the minor side.
    let ext_helix_radius = ht.radius - int_thread_depth - ht.ext_clearance;
    if ext_helix_radius - ht.thread_overlap <= 0.0 {
        return Err(ThreadError::NonPositiveExternalRadius(ext_helix_radius));
    }

    let ext_half_height = (ht.pitch - ht.minor_cutoff) / 2.0 - ext_vert_adj;
    let ext_half_height_biased = ext_half_height + thread_overlap_vert_adj;

    // When the major cutoff is smaller than the clearance-induced shrink,
    // the external flat vanishes: clamp the opposite half-height to 0 and
    // rederive the depth from the now-triangular tooth. The clearance at
    // the clamped tip is then only "close to or greater than"
    // ext_clearance; see the clearance grid test.
    let mut ext_half_height_opposite = ht.major_cutoff / 2.0 - ext_vert_adj;
    let mut ext_thread_depth = int_thread_depth;
    if ext_half_height_opposite < 0.0 {
        ext_half_height_opposite = 0.0;
        ext_thread_depth = ext_half_height / tan_hangle;
    }
    if ext_thread_depth < 0.0 {
        return Err(ThreadError::NegativeThreadDepth {
            which: "external",
            value: ext_thread_depth,
        });
    }

    // External flank points carry the overlap bias inward, toward the core.
    let ext_lower = HelixLocation::new(
        ext_helix_radius - ht.thread_overlap,
        0.0,
        -ext_half_height_biased,
    );
    let ext_upper = HelixLocation::new(
        ext_helix_radius - ht.thread_overlap,
        0.0,
        ext_half_height_biased,
    );
    let ext_major = HelixLocation::new(ext_helix_radius, ext_thread_depth, ext_half_height_opposite);
    let ext_helixes = if ext_half_height_opposite > 0.0 {
        ThreadProfile::Trapezoidal([
            ext_lower,
            ext_upper,
            ext_major,
            HelixLocation::new(ext_helix_radius, ext_thread_depth, -ext_half_height_opposite),
        ])
    } else {
        ThreadProfile::Triangular([ext_lower, ext_upper, ext_major])
    };

    Ok(ThreadHelixes {
        ht,
        int_helix_radius,
        int_helixes,
        ext_helix_radius,
        ext_helixes,
    })
}
