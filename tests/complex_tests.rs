// tests/complex_tests.rs

// Value-type behaviour: construction, accessors, derived properties, operators.
use cplx::constants::math::PI;
use cplx::{dist, Complex, Complex32, Complex64, Element, Form};

const EPS: f64 = 1e-14;

// Helper: components, squared modulus and modulus all match the expected rectangular value
fn assert_rect(v: Complex64, re: f64, im: f64) {
    let n = re * re + im * im;
    assert!((v.real() - re).abs() < EPS, "real part {} != {}", v.real(), re);
    assert!((v.imag() - im).abs() < EPS, "imag part {} != {}", v.imag(), im);
    assert!((v.norm() - n).abs() < EPS, "norm {} != {}", v.norm(), n);
    assert!((v.dist() - n.sqrt()).abs() < EPS, "dist {} != {}", v.dist(), n.sqrt());
}

// Helper: as assert_rect, plus the argument
fn assert_polar(v: Complex64, re: f64, im: f64) {
    assert_rect(v, re, im);
    let expected = im.atan2(re);
    assert!(
        (v.angle_in_rads() - expected).abs() < EPS,
        "angle {} != {} for {}",
        v.angle_in_rads(),
        expected,
        v
    );
}

#[test]
fn test_named_constants() {
    assert_polar(Complex64::ONE, 1.0, 0.0);
    assert_polar(Complex64::NEG_ONE, -1.0, 0.0);
    assert_polar(Complex64::ZERO, 0.0, 0.0);
    assert_polar(Complex64::I, 0.0, 1.0);
    assert_polar(Complex64::NEG_I, 0.0, -1.0);
}

#[test]
fn test_default_is_zero() {
    let v = Complex64::default();
    assert_polar(v, 0.0, 0.0);
    assert_eq!(v.angle_in_rads(), 0.0);
}

#[test]
fn test_rect_constructors() {
    assert_polar(Complex64::from(-2.0), -2.0, 0.0);
    assert_polar(Complex64::from_real(-2.0), -2.0, 0.0);
    assert_polar(Complex64::new(-2.0, 3.0), -2.0, 3.0);
    assert_rect(Complex64::rect(-2.0, 3.0), -2.0, 3.0);
    assert_rect(Complex64::with_form(Form::Rect, 1.0, 0.0), 1.0, 0.0);
    assert_rect(Complex64::with_form(Form::Rect, 0.0, 1.0), 0.0, 1.0);
}

#[test]
fn test_polar_constructors() {
    let s = 2.0 / 2f64.sqrt();
    let cases = [
        (0.0, 2.0, 0.0),
        (PI / 2.0, 0.0, 2.0),
        (PI, -2.0, 0.0),
        (3.0 * PI / 2.0, 0.0, -2.0),
        (-PI / 2.0, 0.0, -2.0),
        (PI / 4.0, s, s),
        (3.0 * PI / 4.0, -s, s),
        (5.0 * PI / 4.0, -s, -s),
        (7.0 * PI / 4.0, s, -s),
        (-PI / 4.0, s, -s),
    ];
    for (theta, re, im) in cases {
        let v = Complex64::polar(2.0, theta);
        assert_rect(v, re, im);
        assert_eq!(v, Complex64::with_form(Form::Polar, 2.0, theta));
    }

    // Negative magnitudes rotate by π
    for i in 0..10 {
        let r = (i as f64 - 5.0) * 0.3;
        let t = 2.0 * PI * i as f64 / 5.0;
        let v = Complex64::polar(r, t);
        assert_polar(v, r * t.cos(), r * t.sin());
    }
}

#[test]
fn test_copy_and_component_rebinding() {
    let v = Complex64::new(-2.0, 3.0);
    let mut v2 = v;
    assert_rect(v2, -2.0, 3.0);

    *v2.real_mut() = 66.0;
    assert_rect(v2, 66.0, 3.0);
    assert_rect(v, -2.0, 3.0);

    let mut v3 = v;
    *v3.imag_mut() = 66.0;
    assert_rect(v3, -2.0, 66.0);
}

#[test]
fn test_angle_quadrants_and_axes() {
    let m = 8388608.0;
    let cases = [
        (m, -m, -PI / 4.0),
        (m, m, PI / 4.0),
        (-m, -m, -3.0 * PI / 4.0),
        (-m, m, 3.0 * PI / 4.0),
        (0.0, -m, -PI / 2.0),
        (0.0, m, PI / 2.0),
        (-m, 0.0, PI),
        (m, 0.0, 0.0),
        (1e-17, -m, -PI / 2.0),
        (1e-17, m, PI / 2.0),
        (-m, 1e-17, PI),
        (m, 1e-17, 0.0),
    ];
    for (re, im, expected) in cases {
        let v = Complex64::new(re, im);
        assert!(
            (v.angle_in_rads() - expected).abs() < 1e-15,
            "angle of {} was {}, expected {}",
            v,
            v.angle_in_rads(),
            expected
        );
    }
}

#[test]
fn test_conjugate() {
    assert_rect(Complex64::new(-2.0, 3.0).conjugate(), -2.0, -3.0);
    assert_rect(Complex64::new(1.0, 0.0).conjugate(), 1.0, 0.0);
    assert_rect(Complex64::new(0.0, 1.0).conjugate(), 0.0, -1.0);
}

#[test]
fn test_negative() {
    for (re, im) in [(-2.0, 3.0), (1.0, 0.0), (0.0, 1.0)] {
        let v = Complex64::new(re, im);
        assert_rect(v.negative(), -re, -im);
        assert_rect(-v, -re, -im);
    }
}

#[test]
fn test_inverse() {
    assert_rect(Complex64::new(-2.0, 3.0).inverse(), -2.0 / 13.0, -3.0 / 13.0);
    assert_rect(Complex64::new(0.0, 1.0).inverse(), 0.0, -1.0);
    assert_eq!(Complex64::new(1.0, 0.0).inverse(), Complex64::new(1.0, 0.0));
}

#[test]
fn test_addition() {
    assert_eq!(Complex64::new(-2.0, 3.0) + Complex64::new(5.0, 11.0), Complex64::new(3.0, 14.0));
    assert_rect(Complex64::new(4.0, 9.0) + Complex64::new(5.0, 11.0), 9.0, 20.0);
    assert_rect(Complex64::new(1.0, 0.0) + Complex64::new(0.0, 1.0), 1.0, 1.0);
    assert_rect(Complex64::new(0.0, -1.0) + Complex64::ZERO, 0.0, -1.0);

    // scalar on either side
    assert_rect(4.0 + Complex64::new(5.0, 11.0), 9.0, 11.0);
    assert_rect(Complex64::new(5.0, 11.0) + 4.0, 9.0, 11.0);
    assert_rect(-1.0 + Complex64::ZERO, -1.0, 0.0);
    assert_rect(Complex64::ZERO + 0.0, 0.0, 0.0);
}

#[test]
fn test_subtraction() {
    assert_rect(Complex64::new(4.0, 9.0) - Complex64::new(5.0, 11.0), -1.0, -2.0);
    assert_rect(Complex64::new(1.0, 0.0) - Complex64::new(0.0, 1.0), 1.0, -1.0);
    assert_rect(Complex64::new(-1.0, 0.0) - Complex64::ZERO, -1.0, 0.0);

    assert_rect(4.0 - Complex64::new(5.0, 11.0), -1.0, -11.0);
    assert_rect(1.0 - Complex64::new(0.0, 1.0), 1.0, -1.0);
    assert_rect(Complex64::new(5.0, 11.0) - 4.0, 1.0, 11.0);
    assert_rect(Complex64::new(0.0, 1.0) - 1.0, -1.0, 1.0);
    assert_rect(Complex64::ZERO - -1.0, 1.0, 0.0);
}

#[test]
fn test_multiplication() {
    assert_eq!(Complex64::new(4.0, 9.0) * Complex64::new(5.0, 11.0), Complex64::new(-79.0, 89.0));
    assert_rect(Complex64::new(1.0, 0.0) * Complex64::new(0.0, 1.0), 0.0, 1.0);
    assert_rect(Complex64::new(0.0, -1.0) * Complex64::ZERO, 0.0, 0.0);

    assert_rect(4.0 * Complex64::new(5.0, 11.0), 20.0, 44.0);
    assert_rect(Complex64::new(5.0, 11.0) * 4.0, 20.0, 44.0);
    assert_rect(-1.0 * Complex64::ZERO, 0.0, 0.0);
    assert_rect(Complex64::new(0.0, 1.0) * 1.0, 0.0, 1.0);
}

#[test]
fn test_division() {
    assert_rect(Complex64::new(4.0, 9.0) / Complex64::new(5.0, 11.0), 119.0 / 146.0, 1.0 / 146.0);
    assert_rect(Complex64::new(1.0, 0.0) / Complex64::new(0.0, 1.0), 0.0, -1.0);

    assert_rect(4.0 / Complex64::new(5.0, 11.0), 20.0 / 146.0, -44.0 / 146.0);
    assert_rect(1.0 / Complex64::new(0.0, 1.0), 0.0, -1.0);
    assert_rect(Complex64::new(5.0, 11.0) / 4.0, 5.0 / 4.0, 11.0 / 4.0);
    assert_rect(Complex64::ZERO / -1.0, 0.0, 0.0);
}

#[test]
fn test_division_by_zero_is_not_guarded() {
    let q = Complex64::new(4.0, 9.0) / Complex64::ZERO;
    assert!(q.real().is_nan() && q.imag().is_nan());

    let s = 1.0 / Complex64::ZERO;
    assert!(s.is_nan());
}

#[test]
fn test_distance() {
    assert!((dist(Complex64::new(0.0, 1.0), Complex64::new(1.0, 0.0)) - 2f64.sqrt()).abs() < EPS);
    assert!((dist(Complex64::new(1.0, 1.0), Complex64::new(1.0, 0.0)) - 1.0).abs() < EPS);
    assert!((dist(Complex64::new(-1.0, 1.0), Complex64::new(1.0, 0.0)) - 5f64.sqrt()).abs() < EPS);
}

#[test]
fn test_exact_equality_has_no_tolerance() {
    let a = Complex64::new(0.1 + 0.2, 0.0);
    assert_ne!(a, Complex64::new(0.3, 0.0));
    assert_eq!(Complex64::new(0.0, -0.0), Complex64::ZERO);
    assert_ne!(Complex64::new(f64::NAN, 0.0), Complex64::new(f64::NAN, 0.0));
}

#[test]
fn test_single_precision_surface() {
    let a = Complex32::new(4.0, 9.0);
    let b = Complex32::new(5.0, 11.0);
    assert_eq!(a * b, Complex32::new(-79.0, 89.0));
    assert_eq!(2.0f32 * Complex32::I, Complex32::new(0.0, 2.0));
    assert!(((a / b).real() - 119.0 / 146.0).abs() < 1e-6);
    assert!((Complex32::new(3.0, 4.0).dist() - 5.0).abs() < f32::EPSILON * 8.0);
}

// Generic code only needs the Element bound
fn unit_circle_point<T: Element>(rads: T) -> Complex<T> {
    Complex::polar(T::ONE, rads)
}

#[test]
fn test_generic_over_element_type() {
    let z64 = unit_circle_point(0.5f64);
    let z32 = unit_circle_point(0.5f32);
    assert!((z64.dist() - 1.0).abs() < 1e-15);
    assert!((z32.dist() - 1.0).abs() < 1e-6);
    assert!((z64.real() - z32.real() as f64).abs() < 1e-6);
}
