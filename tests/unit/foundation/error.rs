use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LedTraceError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(LedTraceError::input("x").to_string().contains("input error:"));
    assert!(
        LedTraceError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LedTraceError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
