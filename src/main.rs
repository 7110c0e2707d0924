//! Command-line adapter around the thread-profile derivation.
//!
//! Resolves a TOML defaults file plus flag overrides into a
//! [`HelicalThread`], derives the profiles and prints them. Errors are
//! printed and the process exits non-zero; no partial output.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use helical_thread::config::Defaults;
use helical_thread::float_types::Real;
use helical_thread::{HelicalThread, ThreadProfile, helical_thread};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "helical-thread")]
#[command(about = "Compute interlocking internal/external screw-thread profiles", long_about = None)]
struct Cli {
    /// TOML defaults file; missing file means built-in defaults
    #[arg(short, long, default_value = "threads.toml")]
    config: PathBuf,

    /// Which thread profiles to print
    #[arg(long, value_enum, default_value_t = Show::Both)]
    show: Show,

    /// Axial distance between successive thread crests
    #[arg(long)]
    pitch: Option<Real>,

    /// Included flank angle of the tooth tip, in degrees
    #[arg(long)]
    angle_degs: Option<Real>,

    /// Major diameter; the nominal radius is half of this
    #[arg(long)]
    dia_major: Option<Real>,

    /// Axial extent of the swept thread
    #[arg(long)]
    height: Option<Real>,

    /// Axial inset of the thread from the ends of the swept solid
    #[arg(long)]
    inset_offset: Option<Real>,

    /// Width of the flat at the major diameter
    #[arg(long)]
    major_cutoff: Option<Real>,

    /// Width of the flat at the minor diameter
    #[arg(long)]
    minor_cutoff: Option<Real>,

    /// Clearance between mating internal and external flanks
    #[arg(long)]
    ext_clearance: Option<Real>,

    /// Radial bias overlapping the thread with its core solid
    #[arg(long)]
    thread_overlap: Option<Real>,

    /// Relative position (0..1) where tapering out ends
    #[arg(long)]
    taper_out_rpos: Option<Real>,

    /// Relative position (0..1) where tapering in begins
    #[arg(long)]
    taper_in_rpos: Option<Real>,
}

#[derive(Clone, Copy, PartialEq, ValueEnum)]
enum Show {
    Int,
    Ext,
    Both,
}

impl Cli {
    fn overrides(&self) -> Defaults {
        Defaults {
            pitch: self.pitch,
            angle_degs: self.angle_degs,
            dia_major: self.dia_major,
            height: self.height,
            inset_offset: self.inset_offset,
            major_cutoff: self.major_cutoff,
            minor_cutoff: self.minor_cutoff,
            ext_clearance: self.ext_clearance,
            thread_overlap: self.thread_overlap,
            taper_out_rpos: self.taper_out_rpos,
            taper_in_rpos: self.taper_in_rpos,
        }
    }
}

fn print_profile(name: &str, radius: Real, profile: &ThreadProfile) {
    let kind = if profile.is_trapezoidal() {
        "trapezoidal"
    } else {
        "triangular"
    };
    println!("{name}: radius={radius:.4} {kind}");
    for hl in profile {
        println!(
            "  radius={:.4} horz_offset={:+.4} vert_offset={:+.4}",
            hl.radius, hl.horz_offset, hl.vert_offset
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let defaults = if cli.config.exists() {
        Defaults::load(&cli.config)
            .with_context(|| format!("loading defaults from {}", cli.config.display()))?
    } else {
        Defaults::default()
    };
    let ht: HelicalThread = defaults.merge(cli.overrides()).to_helical_thread();

    let ths = helical_thread(ht).context("deriving thread profiles")?;

    println!(
        "pitch={:.4} radius={:.4} angle_degs={:.4}",
        ths.ht.pitch, ths.ht.radius, ths.ht.angle_degs
    );
    if cli.show != Show::Ext {
        print_profile("internal", ths.int_helix_radius, &ths.int_helixes);
    }
    if cli.show != Show::Int {
        print_profile("external", ths.ext_helix_radius, &ths.ext_helixes);
    }
    Ok(())
}
