use super::*;

use crate::matrix::six::Matrix6;
use crate::surface::MemorySurface;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn fresh_surface_reads_identity() {
    let surface = MemorySurface::new();
    assert_eq!(get_matrix(&surface), Matrix6::IDENTITY);
}

#[test]
fn set_then_get_round_trips() {
    let mut surface = MemorySurface::new();
    let m = Matrix6::new(2.0, 0.0, 0.0, 3.0, 5.0, -7.0);
    set_matrix(&mut surface, m).unwrap();
    assert_eq!(get_matrix(&surface), m);
}

#[test]
fn all_zero_matrix_is_rejected() {
    let mut surface = MemorySurface::new();
    let err = set_matrix(&mut surface, Matrix6::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)).unwrap_err();
    assert!(err.to_string().contains("degenerate matrix"));
    // The rejected call leaves the surface untouched.
    assert_eq!(get_matrix(&surface), Matrix6::IDENTITY);
}

#[test]
fn singular_but_not_all_zero_is_accepted() {
    // The degeneracy check is deliberately narrow: a single nonzero value
    // among the six passes, zero-scale axes included.
    let mut surface = MemorySurface::new();
    let m = Matrix6::from_slice(&[1.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
    set_matrix(&mut surface, m).unwrap();
    assert_eq!(get_matrix(&surface), m);
}

#[test]
fn identity_transform_is_a_no_op() {
    let mut surface = MemorySurface::new();
    set_matrix(&mut surface, Matrix6::new(2.0, 0.5, -0.5, 3.0, 1.0, -1.0)).unwrap();
    let before = get_matrix(&surface);
    transform(&mut surface, Matrix6::IDENTITY).unwrap();
    assert_eq!(get_matrix(&surface), before);
}

#[test]
fn translate_from_identity_lands_verbatim() {
    let mut surface = MemorySurface::new();
    transform(&mut surface, Matrix6::new(1.0, 0.0, 0.0, 1.0, 10.0, 20.0)).unwrap();
    assert_eq!(get_matrix(&surface), Matrix6::new(1.0, 0.0, 0.0, 1.0, 10.0, 20.0));
}

#[test]
fn transform_applies_within_existing_space() {
    // Translate, then scale: the scale happens inside the translated space,
    // so the offset survives unchanged.
    let mut surface = MemorySurface::new();
    transform(&mut surface, Matrix6::new(1.0, 0.0, 0.0, 1.0, 10.0, 20.0)).unwrap();
    transform(&mut surface, Matrix6::new(2.0, 0.0, 0.0, 3.0, 0.0, 0.0)).unwrap();
    assert_eq!(get_matrix(&surface), Matrix6::new(2.0, 0.0, 0.0, 3.0, 10.0, 20.0));
}

#[test]
fn transform_propagates_degenerate_result() {
    // Composing the zero map over the identity yields the all-zero wire
    // matrix, which the commit rejects.
    let mut surface = MemorySurface::new();
    let err = transform(&mut surface, Matrix6::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)).unwrap_err();
    assert!(err.to_string().contains("degenerate matrix"));
}

#[test]
fn compose_matches_kurbo_product() {
    let a = Matrix6::new(0.8, 0.6, -0.6, 0.8, 3.0, -1.0);
    let b = Matrix6::new(2.0, 0.0, 0.5, 3.0, -4.0, 7.0);
    let ours = compose(a, b).to_array();
    // "b's space first, then a's change" is current * incoming in kurbo's
    // convention.
    let theirs =
        Matrix6::from(kurbo::Affine::from(b) * kurbo::Affine::from(a)).to_array();
    for (x, y) in ours.into_iter().zip(theirs) {
        assert_close(x, y);
    }
}

#[test]
fn live_decomposition_reads_the_ctm() {
    use crate::matrix::mat3::Mat3;
    use std::f64::consts::FRAC_PI_2;

    let mut surface = MemorySurface::new();
    let m = (Mat3::translate(8.0, -3.0) * Mat3::rotate(FRAC_PI_2) * Mat3::scale_non_uniform(2.0, 5.0))
        .to_matrix6();
    set_matrix(&mut surface, m).unwrap();

    assert_close(current_rotation(&surface), FRAC_PI_2);
    let (sx, sy) = current_scale(&surface);
    assert_close(sx, 2.0);
    assert_close(sy, 5.0);
    let (x0, y0) = current_translation(&surface);
    assert_close(x0, 8.0);
    assert_close(y0, -3.0);
}

#[test]
fn wire_sequence_fixture_commits() {
    // The engine-facing input form is a plain sequence of numbers.
    let values: Vec<f64> = serde_json::from_str("[1.0, 0.0, 0.0, 1.0, 5.0, -7.0]").unwrap();
    let mut surface = MemorySurface::new();
    set_matrix(&mut surface, Matrix6::from_slice(&values).unwrap()).unwrap();
    assert_eq!(get_matrix(&surface), Matrix6::new(1.0, 0.0, 0.0, 1.0, 5.0, -7.0));
}
