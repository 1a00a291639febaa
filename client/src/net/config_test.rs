use super::*;

#[test]
fn missing_base_url_uses_public_api() {
    let cfg = ApiConfig::new(None, Some("tok"));
    assert_eq!(cfg.base_url, "https://notehub-public.goit.study/api");
}

#[test]
fn blank_base_url_uses_public_api() {
    assert_eq!(ApiConfig::new(Some("  "), None).base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let cfg = ApiConfig::new(Some("http://localhost:4000/api/"), None);
    assert_eq!(cfg.base_url, "http://localhost:4000/api");
}

#[test]
fn authorization_uses_bearer_scheme() {
    let cfg = ApiConfig::new(None, Some("abc"));
    assert_eq!(cfg.authorization().as_deref(), Some("Bearer abc"));
}

#[test]
fn blank_token_means_no_authorization() {
    let cfg = ApiConfig::new(None, Some("   "));
    assert_eq!(cfg.token, None);
    assert_eq!(cfg.authorization(), None);
}
