use std::f64::consts::{FRAC_PI_2, PI};

use oasis::orbits::{
    AnomalyUnit, CartesianPosition, KeplerSolver, OrbitalElements, PositionOptions,
    compute_position, compute_position_with, perifocal_position, rotate_to_reference,
};

fn circular(a: f64, inclination: f64, raan: f64, argp: f64, mean_anomaly: f64) -> OrbitalElements {
    OrbitalElements {
        semi_major_axis_km: a,
        eccentricity: 0.0,
        inclination_deg: inclination,
        raan_deg: raan,
        arg_periapsis_deg: argp,
        mean_anomaly_rad: mean_anomaly,
    }
}

fn assert_close(p: &CartesianPosition, expected: [f64; 3], tol: f64) {
    let got = p.as_vector();
    for i in 0..3 {
        assert!(
            (got[i] - expected[i]).abs() < tol,
            "component {i}: got {got:?}, expected {expected:?}"
        );
    }
}

#[test]
fn circular_equatorial_orbit_stays_on_circle() {
    let a = 7000.0;
    for k in 0..24 {
        let m = k as f64 * PI / 12.0 - 3.0;
        let p = compute_position(&circular(a, 0.0, 0.0, 0.0, m));
        let planar = p.x * p.x + p.y * p.y;
        assert!(
            ((planar - a * a) / (a * a)).abs() < 1e-9,
            "x²+y² = {planar} for M = {m}"
        );
        assert!(p.z.abs() < 1e-9 * a);
    }
}

#[test]
fn rotation_preserves_radius_for_any_orientation() {
    let a = 26_560.0;
    let angles = [0.0, 17.5, 45.0, 63.4, 90.0, 98.7, 135.0, 180.0];
    for &inc in &angles {
        for &raan in &[0.0, 77.0, 181.0, 359.9] {
            for &argp in &[0.0, 33.3, 270.0] {
                let p = compute_position(&circular(a, inc, raan, argp, 2.2));
                assert!(
                    ((p.magnitude() - a) / a).abs() < 1e-9,
                    "|r| = {} for i={inc}, Ω={raan}, ω={argp}",
                    p.magnitude()
                );
            }
        }
    }
}

#[test]
fn identical_input_gives_bit_identical_output() {
    let elements = OrbitalElements {
        semi_major_axis_km: 7_219.5,
        eccentricity: 0.0093,
        inclination_deg: 98.7611,
        raan_deg: 15.9,
        arg_periapsis_deg: 88.4,
        mean_anomaly_rad: 2.7,
    };
    let first = compute_position(&elements);
    let second = compute_position(&elements);
    assert_eq!(first.x.to_bits(), second.x.to_bits());
    assert_eq!(first.y.to_bits(), second.y.to_bits());
    assert_eq!(first.z.to_bits(), second.z.to_bits());
}

#[test]
fn zero_inclination_keeps_orbit_in_reference_plane() {
    for &raan in &[0.0, 45.0, 200.0] {
        for &argp in &[0.0, 120.0, 300.0] {
            for &m in &[-1.0, 0.0, 0.7, 4.0] {
                let elements = OrbitalElements {
                    semi_major_axis_km: 8_000.0,
                    eccentricity: 0.2,
                    inclination_deg: 0.0,
                    raan_deg: raan,
                    arg_periapsis_deg: argp,
                    mean_anomaly_rad: m,
                };
                assert_eq!(compute_position(&elements).z, 0.0);
            }
        }
    }
}

#[test]
fn doubling_semi_major_axis_doubles_every_component() {
    let base = OrbitalElements {
        semi_major_axis_km: 7_014.4,
        eccentricity: 0.0154,
        inclination_deg: 98.3322,
        raan_deg: 330.0,
        arg_periapsis_deg: 190.1,
        mean_anomaly_rad: 0.35,
    };
    let doubled = OrbitalElements {
        semi_major_axis_km: base.semi_major_axis_km * 2.0,
        ..base
    };
    let p1 = compute_position(&base).as_vector();
    let p2 = compute_position(&doubled).as_vector();
    for i in 0..3 {
        assert!((p2[i] - 2.0 * p1[i]).abs() <= 1e-12 * p1[i].abs().max(1.0));
    }
}

#[test]
fn concrete_circular_examples() {
    let at_epoch = compute_position(&circular(7000.0, 0.0, 0.0, 0.0, 0.0));
    assert_close(&at_epoch, [7000.0, 0.0, 0.0], 1e-9);

    let quarter = compute_position(&circular(7000.0, 0.0, 0.0, 0.0, FRAC_PI_2));
    assert_close(&quarter, [0.0, 7000.0, 0.0], 1e-6);
}

#[test]
fn polar_orbit_reaches_north_at_quarter_period() {
    let p = compute_position(&circular(7000.0, 90.0, 0.0, 0.0, FRAC_PI_2));
    assert_close(&p, [0.0, 0.0, 7000.0], 1e-6);
}

#[test]
fn raan_rotates_the_node_line() {
    let p = compute_position(&circular(7000.0, 0.0, 90.0, 0.0, 0.0));
    assert_close(&p, [0.0, 7000.0, 0.0], 1e-6);
}

#[test]
fn eccentric_orbit_sits_at_periapsis_and_apoapsis() {
    let mut elements = OrbitalElements {
        semi_major_axis_km: 10_000.0,
        eccentricity: 0.5,
        inclination_deg: 0.0,
        raan_deg: 0.0,
        arg_periapsis_deg: 0.0,
        mean_anomaly_rad: 0.0,
    };
    assert_close(&compute_position(&elements), [5_000.0, 0.0, 0.0], 1e-9);

    elements.mean_anomaly_rad = PI;
    assert_close(&compute_position(&elements), [-15_000.0, 0.0, 0.0], 1e-6);
}

#[test]
fn unbound_eccentricity_degrades_to_non_finite_output() {
    let elements = OrbitalElements {
        semi_major_axis_km: 7000.0,
        eccentricity: 1.5,
        inclination_deg: 10.0,
        raan_deg: 0.0,
        arg_periapsis_deg: 0.0,
        mean_anomaly_rad: 0.4,
    };
    let p = compute_position(&elements);
    assert!(!p.is_finite(), "expected NaN components, got {p:?}");

    let nan_input = OrbitalElements {
        semi_major_axis_km: f64::NAN,
        ..circular(7000.0, 0.0, 0.0, 0.0, 0.0)
    };
    assert!(!compute_position(&nan_input).is_finite());
}

#[test]
fn degree_mean_anomaly_is_opt_in() {
    let elements = circular(7000.0, 0.0, 0.0, 0.0, 90.0);
    let degrees = PositionOptions {
        mean_anomaly_unit: AnomalyUnit::Degrees,
        ..PositionOptions::default()
    };
    assert_close(&compute_position_with(&elements, &degrees), [0.0, 7000.0, 0.0], 1e-6);

    // Radians by default: 90 rad is nowhere near a quarter orbit.
    let radians = compute_position(&elements);
    assert!((radians.y - 7000.0).abs() > 1.0);
}

#[test]
fn newton_and_fixed_point_agree_for_near_circular_orbits() {
    let elements = OrbitalElements {
        semi_major_axis_km: 6_795.0,
        eccentricity: 0.0006703,
        inclination_deg: 51.6416,
        raan_deg: 120.5,
        arg_periapsis_deg: 45.2,
        mean_anomaly_rad: 1.2,
    };
    let newton = PositionOptions {
        solver: KeplerSolver::newton(),
        ..PositionOptions::default()
    };
    let a = compute_position(&elements).as_vector();
    let b = compute_position_with(&elements, &newton).as_vector();
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() < 1e-6, "{a:?} vs {b:?}");
    }
}

#[test]
fn helpers_compose_into_compute_position() {
    let elements = OrbitalElements {
        semi_major_axis_km: 7_150.2,
        eccentricity: 0.0021,
        inclination_deg: 74.0382,
        raan_deg: 210.3,
        arg_periapsis_deg: 300.8,
        mean_anomaly_rad: 4.1,
    };
    let e_anom = KeplerSolver::default().eccentric_anomaly(4.1, 0.0021);
    let planar = perifocal_position(7_150.2, 0.0021, e_anom);
    let manual = rotate_to_reference(planar, 74.0382, 210.3, 300.8);
    assert_eq!(manual, compute_position(&elements));

    let planar_radius = (planar.0 * planar.0 + planar.1 * planar.1).sqrt();
    assert!((manual.magnitude() - planar_radius).abs() < 1e-9 * planar_radius);
}

#[test]
fn degree_conversion_multiplies_before_dividing() {
    for &deg in &[3.0, 51.6416, 210.3, 98.7611, -45.0] {
        assert_eq!(
            oasis::angles::deg_to_rad(deg).to_bits(),
            (deg * PI / 180.0).to_bits(),
            "{deg}°"
        );
    }
}
