use helical_thread::float_types::Real;
use helical_thread::{HelicalThread, ThreadError, helical_thread};

fn thread() -> HelicalThread {
    let mut ht = HelicalThread::new(8.0, 2.0, 10.0);
    ht.angle_degs = 90.0;
    ht
}

#[test]
fn rejects_non_positive_radius() {
    let mut ht = thread();
    ht.radius = 0.0;
    assert_eq!(
        helical_thread(ht),
        Err(ThreadError::NonPositiveRadius(0.0))
    );
}

#[test]
fn rejects_non_positive_pitch() {
    let mut ht = thread();
    ht.pitch = -1.0;
    assert_eq!(helical_thread(ht), Err(ThreadError::NonPositivePitch(-1.0)));
}

#[test]
fn rejects_angle_out_of_range() {
    for angle_degs in [0.0, -10.0, 180.0, 270.0] {
        let mut ht = thread();
        ht.angle_degs = angle_degs;
        assert_eq!(
            helical_thread(ht),
            Err(ThreadError::AngleOutOfRange(angle_degs))
        );
    }
}

#[test]
fn rejects_negative_cutoffs() {
    let mut ht = thread();
    ht.major_cutoff = -0.1;
    assert_eq!(
        helical_thread(ht),
        Err(ThreadError::NegativeCutoff {
            which: "major_cutoff",
            value: -0.1
        })
    );

    let mut ht = thread();
    ht.minor_cutoff = -0.1;
    assert_eq!(
        helical_thread(ht),
        Err(ThreadError::NegativeCutoff {
            which: "minor_cutoff",
            value: -0.1
        })
    );
}

#[test]
fn rejects_negative_clearance_and_overlap() {
    let mut ht = thread();
    ht.ext_clearance = -0.05;
    assert_eq!(
        helical_thread(ht),
        Err(ThreadError::NegativeClearance(-0.05))
    );

    let mut ht = thread();
    ht.thread_overlap = -0.001;
    assert_eq!(
        helical_thread(ht),
        Err(ThreadError::NegativeOverlap(-0.001))
    );
}

#[test]
fn rejects_non_finite_parameters() {
    let mut ht = thread();
    ht.radius = Real::NAN;
    assert_eq!(
        helical_thread(ht),
        Err(ThreadError::NonFiniteParameter("radius"))
    );

    let mut ht = thread();
    ht.pitch = Real::INFINITY;
    assert_eq!(
        helical_thread(ht),
        Err(ThreadError::NonFiniteParameter("pitch"))
    );
}

/// A radius smaller than the tooth depth plus clearance leaves no room for
/// the external thread; reported, never clamped.
#[test]
fn reports_non_positive_external_radius() {
    let mut ht = thread();
    ht.radius = 0.5; // int_thread_depth is 1.0 at pitch 2, angle 90
    ht.ext_clearance = 0.05;
    match helical_thread(ht) {
        Err(ThreadError::NonPositiveExternalRadius(value)) => assert!(value <= 0.0),
        other => panic!("expected NonPositiveExternalRadius, got {other:?}"),
    }
}

/// Cutoffs wider than the pitch allows flip the internal tooth inside out.
#[test]
fn reports_negative_internal_depth() {
    let mut ht = thread();
    ht.major_cutoff = 1.8;
    ht.minor_cutoff = 0.5;
    match helical_thread(ht) {
        Err(ThreadError::NegativeThreadDepth { which: "internal", value }) => {
            assert!(value < 0.0);
        },
        other => panic!("expected internal NegativeThreadDepth, got {other:?}"),
    }
}

/// A clearance shrink larger than the whole external half-height drives the
/// rederived triangular depth negative.
#[test]
fn reports_negative_external_depth() {
    let mut ht = thread();
    ht.radius = 10.0;
    ht.minor_cutoff = 1.9;
    ht.ext_clearance = 1.0;
    match helical_thread(ht) {
        Err(ThreadError::NegativeThreadDepth { which: "external", value }) => {
            assert!(value < 0.0);
        },
        other => panic!("expected external NegativeThreadDepth, got {other:?}"),
    }
}

#[test]
fn validate_matches_derivation() {
    let mut ht = thread();
    ht.angle_degs = 360.0;
    assert_eq!(ht.validate(), Err(ThreadError::AngleOutOfRange(360.0)));
    assert!(thread().validate().is_ok());
}

#[test]
fn errors_describe_themselves() {
    let message = ThreadError::NonPositivePitch(-1.0).to_string();
    assert!(message.contains("pitch"));
    let message = ThreadError::NegativeThreadDepth {
        which: "external",
        value: -0.5,
    }
    .to_string();
    assert!(message.contains("external"));
}
