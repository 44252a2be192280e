use super::*;

#[test]
fn base_origin_strips_path() {
    assert_eq!(
        base_origin("https://mohubudapest.hu/hulladeknaptar"),
        "https://mohubudapest.hu"
    );
}

#[test]
fn base_origin_bare_host() {
    assert_eq!(base_origin("https://mohubudapest.hu"), "https://mohubudapest.hu");
}

#[test]
fn base_origin_keeps_port() {
    assert_eq!(
        base_origin("http://127.0.0.1:8080/hulladeknaptar"),
        "http://127.0.0.1:8080"
    );
}

#[test]
fn base_origin_fallback_without_scheme() {
    // Not parseable as an absolute URL; the prefix fallback applies.
    assert_eq!(base_origin("mohubudapest.hu"), "mohubudapest.hu");
}
