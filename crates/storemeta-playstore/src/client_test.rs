use super::*;

fn test_client() -> PlayStoreClient {
    PlayStoreClient::builder()
        .lang("ja")
        .build()
        .expect("client construction should not fail")
}

#[test]
fn details_url_includes_lang_and_id() {
    let url = test_client().details_url("a.b.c").unwrap();
    assert_eq!(
        url.as_str(),
        "https://play.google.com/store/apps/details?hl=ja&id=a.b.c"
    );
}

#[test]
fn details_url_without_lang() {
    let client = PlayStoreClient::new().expect("client construction should not fail");
    let url = client
        .details_url("com.cookpad.android.activities")
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://play.google.com/store/apps/details?id=com.cookpad.android.activities"
    );
}

#[test]
fn details_url_rejects_empty_bundle_id() {
    let err = test_client().details_url("").unwrap_err();
    assert!(
        matches!(err, StoreError::InvalidKey(_)),
        "expected InvalidKey, got: {err:?}"
    );
    assert_eq!(err.code(), 0);
}

#[test]
fn later_lang_overrides_earlier() {
    let client = PlayStoreClient::builder()
        .lang("en")
        .lang("ja")
        .build()
        .unwrap();
    let url = client.details_url("a.b.c").unwrap();
    assert_eq!(
        url.as_str(),
        "https://play.google.com/store/apps/details?hl=ja&id=a.b.c"
    );
}

#[test]
fn empty_lang_is_not_sent() {
    let client = PlayStoreClient::builder().lang("").build().unwrap();
    let url = client.details_url("a.b.c").unwrap();
    assert_eq!(
        url.as_str(),
        "https://play.google.com/store/apps/details?id=a.b.c"
    );
}

#[test]
fn parse_details_page_tolerates_stray_invalid_bytes() {
    let mut body = br#"<html><head><title id="main-title">Recipe Box - Apps on Google Play</title>
<meta name="description" content="Caf"#
        .to_vec();
    body.push(0xE9);
    body.extend_from_slice(
        br#" recipes"><meta name="appstore:bundle_id" content="a.b.c"></head><body></body></html>"#,
    );

    let detail = parse_details_page(&body);
    assert_eq!(detail.title, "Recipe Box");
    assert_eq!(detail.bundle_id, "a.b.c");
    assert_eq!(detail.description, "Caf\u{FFFD} recipes");
}

#[test]
fn parse_details_page_accepts_partial_documents() {
    let body = br#"<head><meta name="appstore:bundle_id" content="a.b.c"></head>"#;
    let detail = parse_details_page(body);
    assert_eq!(detail.bundle_id, "a.b.c");
    assert_eq!(detail.title, "");
}
