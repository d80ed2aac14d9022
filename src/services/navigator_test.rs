use super::*;

#[test]
fn authorization_code_reads_code_param() {
    assert_eq!(authorization_code("http://dash.test/callback?code=abc123&state=x"), Some("abc123".to_owned()));
    assert_eq!(authorization_code("http://dash.test/?state=x&code=a%2Fb"), Some("a/b".to_owned()));
}

#[test]
fn authorization_code_absent_or_empty() {
    assert_eq!(authorization_code("http://dash.test/"), None);
    assert_eq!(authorization_code("http://dash.test/?code="), None);
    assert_eq!(authorization_code("http://dash.test/?codex=1"), None);
    assert_eq!(authorization_code("http://dash.test/#code=abc"), None);
}

#[test]
fn strip_removes_provider_params_and_callback_path() {
    assert_eq!(
        strip_auth_params("http://dash.test/callback?code=abc123&state=xyz&session_state=s1"),
        "http://dash.test/"
    );
}

#[test]
fn strip_keeps_unrelated_params_and_fragment() {
    assert_eq!(
        strip_auth_params("http://dash.test/app?tab=pools&code=abc&iss=idp#top"),
        "http://dash.test/app?tab=pools#top"
    );
}

#[test]
fn strip_is_identity_without_auth_params() {
    assert_eq!(strip_auth_params("http://dash.test/"), "http://dash.test/");
    assert_eq!(strip_auth_params("http://dash.test/?tab=free"), "http://dash.test/?tab=free");
}

#[test]
fn stripped_url_carries_no_code() {
    let url = strip_auth_params("http://dash.test/?code=abc123");
    assert_eq!(authorization_code(&url), None);
    assert_eq!(url, "http://dash.test/");
}

#[test]
fn strip_handles_nested_callback_path() {
    assert_eq!(strip_auth_params("http://dash.test/ipam/callback?code=abc&state=s"), "http://dash.test/ipam/");
}

#[test]
fn strip_leaves_encoding_alone_when_nothing_is_removed() {
    assert_eq!(strip_auth_params("http://dash.test/?q=a%20b"), "http://dash.test/?q=a%20b");
}

#[test]
fn unparseable_urls_are_left_alone() {
    assert_eq!(authorization_code("not a url?code=abc"), None);
    assert_eq!(strip_auth_params("not a url?code=abc"), "not a url?code=abc");
}
