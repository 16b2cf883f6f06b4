use super::*;

fn test_client(base_url: &str) -> YoutubeClient {
    YoutubeClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

#[test]
fn build_url_appends_endpoint_and_key() {
    let client = test_client("https://www.googleapis.com/youtube/v3");
    let url = client.build_url("videos", &[("part", "statistics"), ("id", "abc")]);
    assert_eq!(
        url.as_str(),
        "https://www.googleapis.com/youtube/v3/videos?part=statistics&id=abc&key=test-key"
    );
}

#[test]
fn build_url_tolerates_trailing_slash() {
    let client = test_client("https://www.googleapis.com/youtube/v3/");
    let url = client.build_url("search", &[("q", "fan")]);
    assert_eq!(
        url.as_str(),
        "https://www.googleapis.com/youtube/v3/search?q=fan&key=test-key"
    );
}

#[test]
fn build_url_encodes_special_characters() {
    let client = test_client("https://www.googleapis.com/youtube/v3");
    let url = client.build_url("search", &[("q", "smart fan & remote")]);
    assert!(
        url.as_str().contains("smart+fan+%26+remote"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = YoutubeClient::with_base_url("k", 5, "not a url");
    assert!(matches!(result, Err(FetchError::InvalidBaseUrl { .. })));
}

#[test]
fn api_error_maps_quota_reason() {
    let body = r#"{"error":{"code":403,"message":"The request cannot be completed because you have exceeded your quota.","errors":[{"reason":"quotaExceeded","domain":"youtube.quota"}]}}"#;
    let err = api_error(403, body);
    assert!(
        matches!(err, FetchError::QuotaExceeded(ref m) if m.contains("exceeded your quota")),
        "expected QuotaExceeded, got: {err:?}"
    );
}

#[test]
fn api_error_keeps_other_reasons() {
    let body = r#"{"error":{"code":403,"message":"Comments are disabled.","errors":[{"reason":"commentsDisabled"}]}}"#;
    let err = api_error(403, body);
    assert!(
        matches!(err, FetchError::Api { status: 403, ref reason, .. } if reason == "commentsDisabled"),
        "expected Api(commentsDisabled), got: {err:?}"
    );
}

#[test]
fn api_error_handles_non_json_body() {
    let err = api_error(502, "<html>Bad Gateway</html>");
    assert!(
        matches!(err, FetchError::Api { status: 502, ref reason, ref message } if reason == "unknown" && message.contains("Bad Gateway")),
        "expected raw Api error, got: {err:?}"
    );
}
