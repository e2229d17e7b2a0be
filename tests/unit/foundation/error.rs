use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StickgenError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(StickgenError::render("x").to_string().contains("render error:"));
    assert!(StickgenError::pack("x").to_string().contains("pack error:"));
    assert!(
        StickgenError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StickgenError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
