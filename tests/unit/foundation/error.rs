use super::*;

#[test]
fn display_prefix_is_stable() {
    assert!(
        CtmError::invalid_matrix("degenerate matrix")
            .to_string()
            .contains("invalid matrix:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CtmError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
