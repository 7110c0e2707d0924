//! Typed defaults-file adapter for the `helical-thread` binary.
//!
//! The original workflow reads a plain key/value defaults file and then
//! applies command-line overrides before building a [`HelicalThread`].
//! Every key is optional and strictly typed; configuration text is parsed,
//! never evaluated.

use crate::float_types::Real;
use crate::thread::HelicalThread;
use serde::Deserialize;
use std::path::Path;

/// Failure to read or parse a defaults file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read defaults file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse defaults file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Optional overrides for every thread parameter, as found in a TOML
/// defaults file or on the command line.
///
/// The file speaks in terms of the major *diameter* (`dia_major`), as the
/// original defaults did; [`Defaults::to_helical_thread`] halves it into
/// the radius. Unset keys fall back to the customary defaults: pitch 2,
/// 90° included angle, major diameter 8, `major_cutoff = pitch/8`,
/// `minor_cutoff = pitch/4`, clearance 0.05, overlap 0.001,
/// `inset_offset = pitch/3` and `height = 10 + 2*inset_offset`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub pitch: Option<Real>,
    pub angle_degs: Option<Real>,
    pub dia_major: Option<Real>,
    pub height: Option<Real>,
    pub inset_offset: Option<Real>,
    pub major_cutoff: Option<Real>,
    pub minor_cutoff: Option<Real>,
    pub ext_clearance: Option<Real>,
    pub thread_overlap: Option<Real>,
    pub taper_out_rpos: Option<Real>,
    pub taper_in_rpos: Option<Real>,
}

impl Defaults {
    /// Reads a TOML defaults file. Unknown keys are rejected rather than
    /// silently ignored.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Layer `overrides` on top of `self`; any key set in `overrides` wins.
    pub fn merge(self, overrides: Defaults) -> Defaults {
        Defaults {
            pitch: overrides.pitch.or(self.pitch),
            angle_degs: overrides.angle_degs.or(self.angle_degs),
            dia_major: overrides.dia_major.or(self.dia_major),
            height: overrides.height.or(self.height),
            inset_offset: overrides.inset_offset.or(self.inset_offset),
            major_cutoff: overrides.major_cutoff.or(self.major_cutoff),
            minor_cutoff: overrides.minor_cutoff.or(self.minor_cutoff),
            ext_clearance: overrides.ext_clearance.or(self.ext_clearance),
            thread_overlap: overrides.thread_overlap.or(self.thread_overlap),
            taper_out_rpos: overrides.taper_out_rpos.or(self.taper_out_rpos),
            taper_in_rpos: overrides.taper_in_rpos.or(self.taper_in_rpos),
        }
    }

    /// Resolves every unset key to its default and builds the thread
    /// parameters. Derived defaults chain off the resolved pitch and
    /// taper, not off their own defaults.
    pub fn to_helical_thread(&self) -> HelicalThread {
        let pitch = self.pitch.unwrap_or(2.0);
        let inset_offset = self.inset_offset.unwrap_or(pitch / 3.0);
        let height = self.height.unwrap_or(10.0 + 2.0 * inset_offset);
        let dia_major = self.dia_major.unwrap_or(8.0);
        let taper_out_rpos = self.taper_out_rpos.unwrap_or(0.1);

        let mut ht = HelicalThread::new(dia_major / 2.0, pitch, height);
        ht.inset_offset = inset_offset;
        ht.taper_out_rpos = taper_out_rpos;
        ht.taper_in_rpos = self.taper_in_rpos.unwrap_or(1.0 - taper_out_rpos);
        ht.angle_degs = self.angle_degs.unwrap_or(90.0);
        ht.major_cutoff = self.major_cutoff.unwrap_or(pitch / 8.0);
        ht.minor_cutoff = self.minor_cutoff.unwrap_or(pitch / 4.0);
        ht.ext_clearance = self.ext_clearance.unwrap_or(0.05);
        ht.thread_overlap = self.thread_overlap.unwrap_or(0.001);
        ht
    }
}
