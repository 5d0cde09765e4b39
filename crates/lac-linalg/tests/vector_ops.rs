//! Integration tests for the `Vector` type.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use lac_linalg::{LinAlgError, Vector};

fn v(data: &[f64]) -> Vector {
    Vector::from_vec(data.to_vec())
}

// ---------------------------------------------------------------------------
// Construction and access
// ---------------------------------------------------------------------------

#[test]
fn vector_len_and_access() {
    let mut a = v(&[1.0, 2.0, 3.0]);
    assert_eq!(a.len(), 3);
    assert_eq!(a.get(1), Ok(2.0));
    a.set(1, 5.0).unwrap();
    assert_eq!(a[1], 5.0);
    assert_eq!(a.len(), 3);
}

#[test]
fn vector_out_of_range_access_errors() {
    let mut a = v(&[1.0, 2.0]);
    assert_eq!(
        a.get(2),
        Err(LinAlgError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert!(matches!(
        a.set(7, 0.0),
        Err(LinAlgError::IndexOutOfRange { index: 7, .. })
    ));
}

#[test]
fn vector_empty() {
    let a: Vector = Vector::from_vec(vec![]);
    assert!(a.is_empty());
    assert_eq!(a.magnitude(), 0.0);
    assert!(matches!(a.unit_vector(), Err(LinAlgError::DomainError(_))));
}

#[test]
fn vector_zeros_and_ones() {
    let z: Vector = Vector::zeros(4);
    assert!(z.iter().all(|&x| x == 0.0));
    let o: Vector = Vector::ones(2);
    assert_eq!(o.to_vec(), vec![1.0, 1.0]);
    let filled = Vector::from_elem(3, -2.5);
    assert_eq!(filled, v(&[-2.5, -2.5, -2.5]));
}

#[test]
fn vector_display_lists_components() {
    assert_eq!(v(&[1.0, 2.5, -3.0]).to_string(), "[1, 2.5, -3]");
    assert_eq!(Vector::<f64>::from_vec(vec![]).to_string(), "[]");
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn vector_add_and_subtract() {
    let a = v(&[1.0, 2.0, 3.0]);
    let b = v(&[4.0, 5.0, 6.0]);
    assert_eq!(a.add(&b).unwrap().to_vec(), vec![5.0, 7.0, 9.0]);
    assert_eq!(a.subtract(&b).unwrap().to_vec(), vec![-3.0, -3.0, -3.0]);
    assert_eq!(&a + &b, a.add(&b).unwrap());
    assert_eq!(&a - &b, a.subtract(&b).unwrap());
}

#[test]
fn vector_add_then_subtract_round_trips() {
    let a = v(&[0.5, -2.0, 8.25]);
    let b = v(&[3.0, 0.125, -1.5]);
    assert!(a.add(&b).unwrap().subtract(&b).unwrap().equals(&a));
}

#[test]
fn vector_mismatched_dimensions_error() {
    let a = v(&[1.0, 2.0, 3.0]);
    let b = v(&[1.0, 2.0]);
    assert!(matches!(a.add(&b), Err(LinAlgError::DimensionMismatch { .. })));
    assert!(matches!(a.subtract(&b), Err(LinAlgError::DimensionMismatch { .. })));
    assert!(matches!(a.dot(&b), Err(LinAlgError::DimensionMismatch { .. })));
}

#[test]
#[should_panic(expected = "equal length")]
fn vector_add_operator_panics_on_mismatch() {
    let _ = &v(&[1.0]) + &v(&[1.0, 2.0]);
}

#[test]
fn vector_scale_both_orders() {
    let a = v(&[1.0, -2.0, 3.0]);
    let expected = v(&[2.0, -4.0, 6.0]);
    assert_eq!(a.scale(2.0), expected);
    assert_eq!(&a * 2.0, expected);
    assert_eq!(2.0 * &a, expected);
    assert_eq!(2.0 * a.clone(), expected);
    assert_eq!(-a, v(&[-1.0, 2.0, -3.0]));
}

#[test]
fn vector_divide() {
    let a = v(&[2.0, 4.0]);
    assert_eq!(a.divide(2.0).unwrap(), v(&[1.0, 2.0]));
    assert_eq!(a.divide(0.0), Err(LinAlgError::DivisionByZero));
}

#[test]
fn vector_equality() {
    let a = v(&[1.0, 2.0]);
    assert!(a.equals(&v(&[1.0, 2.0])));
    assert!(a.not_equals(&v(&[1.0, 2.5])));
    // different dimensions compare unequal rather than failing
    assert!(a.not_equals(&v(&[1.0, 2.0, 0.0])));
    assert!(!a.approx_eq(&v(&[1.0]), 1.0));
    assert!(a.approx_eq(&v(&[1.0 + 1e-12, 2.0]), 1e-9));
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

#[test]
fn vector_magnitude() {
    assert_relative_eq!(v(&[1.0, 2.0, 3.0]).magnitude(), 14.0f64.sqrt());
    assert_relative_eq!(v(&[3.0, 4.0]).magnitude(), 5.0);
    assert_eq!(v(&[0.0, 0.0]).magnitude(), 0.0);
}

#[test]
fn vector_unit_vector_has_unit_length() {
    for data in [&[1.0, 2.0, 3.0][..], &[-0.001, 0.0][..], &[1e6, -3e5, 7.0][..]] {
        let u = v(data).unit_vector().unwrap();
        assert_relative_eq!(u.magnitude(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn vector_unit_vector_of_zero_is_domain_error() {
    assert!(matches!(
        v(&[0.0, 0.0, 0.0]).unit_vector(),
        Err(LinAlgError::DomainError(_))
    ));
}

#[test]
fn vector_dot_is_symmetric() {
    let a = v(&[1.0, 2.0, 3.0]);
    let b = v(&[4.0, -5.0, 6.0]);
    assert_eq!(a.dot(&b).unwrap(), 12.0);
    assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
}

#[test]
fn vector_cross_of_basis_vectors() {
    let x = v(&[1.0, 0.0, 0.0]);
    let y = v(&[0.0, 1.0, 0.0]);
    assert_eq!(x.cross(&y).unwrap(), v(&[0.0, 0.0, 1.0]));
    assert_eq!(y.cross(&x).unwrap(), v(&[0.0, 0.0, -1.0]));
}

#[test]
fn vector_cross_is_orthogonal_to_operands() {
    let a = v(&[1.0, 2.0, 3.0]);
    let b = v(&[4.0, 5.0, 6.0]);
    let c = a.cross(&b).unwrap();
    assert_eq!(c, v(&[-3.0, 6.0, -3.0]));
    assert_abs_diff_eq!(c.dot(&a).unwrap(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(c.dot(&b).unwrap(), 0.0, epsilon = 1e-12);
}

#[test]
fn vector_cross_requires_three_dimensions() {
    let a = v(&[1.0, 2.0]);
    let b = v(&[3.0, 4.0]);
    assert!(matches!(a.cross(&b), Err(LinAlgError::DimensionMismatch { .. })));
    let c = v(&[1.0, 2.0, 3.0]);
    assert!(matches!(c.cross(&a), Err(LinAlgError::DimensionMismatch { .. })));
}

#[test]
fn vector_angle_between() {
    let x = v(&[1.0, 0.0]);
    let y = v(&[0.0, 2.0]);
    assert_relative_eq!(
        x.angle_with(&y).unwrap(),
        std::f64::consts::FRAC_PI_2,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        x.angle_with(&v(&[-3.0, 0.0])).unwrap(),
        std::f64::consts::PI,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        x.angle_with(&v(&[1.0, 1.0])).unwrap(),
        std::f64::consts::FRAC_PI_4,
        epsilon = 1e-12
    );
}

#[test]
fn vector_angle_of_parallel_vectors_is_finite() {
    let a = v(&[0.1, 0.7, 0.3]);
    for k in [1.0, 3.0, 1e-3, 7.77] {
        let angle = a.angle_with(&a.scale(k)).unwrap();
        assert!(angle.is_finite());
        assert_abs_diff_eq!(angle, 0.0, epsilon = 1e-7);
    }
}

#[test]
fn vector_angle_with_zero_vector_is_domain_error() {
    let a = v(&[1.0, 2.0]);
    let z = v(&[0.0, 0.0]);
    assert!(matches!(a.angle_with(&z), Err(LinAlgError::DomainError(_))));
    assert!(matches!(z.angle_with(&a), Err(LinAlgError::DomainError(_))));
}

#[test]
fn vector_angle_with_non_finite_component_is_domain_error() {
    let x = v(&[1.0, 0.0]);
    assert!(matches!(
        v(&[f64::NAN, 1.0]).angle_with(&x),
        Err(LinAlgError::DomainError(_))
    ));
    assert!(matches!(
        v(&[f64::INFINITY, 1.0]).angle_with(&x),
        Err(LinAlgError::DomainError(_))
    ));
}

#[test]
fn vector_works_with_f32() {
    let a = Vector::from_vec(vec![3.0f32, 4.0]);
    assert_eq!(a.magnitude(), 5.0f32);
    assert_eq!(2.0f32 * &a, Vector::from_vec(vec![6.0f32, 8.0]));
}
