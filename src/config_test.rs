use super::*;

#[test]
fn normalize_base_strips_trailing_slashes() {
    assert_eq!(normalize_base("https://api.example.com/api/"), "https://api.example.com/api");
    assert_eq!(normalize_base("/api//"), "/api");
}

#[test]
fn normalize_base_falls_back_when_blank() {
    assert_eq!(normalize_base("   "), DEFAULT_API_BASE);
    assert_eq!(normalize_base("/"), DEFAULT_API_BASE);
}

#[test]
fn api_base_has_no_trailing_slash() {
    assert!(!api_base().ends_with('/'));
    assert!(!api_base().is_empty());
}
