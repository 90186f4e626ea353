use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScintillateError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ScintillateError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        ScintillateError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ScintillateError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
