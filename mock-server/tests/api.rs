use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, CORRUPT_KIT, SIGNATURE};
use tower::ServiceExt;

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn form_request(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            http::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(body.to_string())
        .unwrap()
}

// --- glyphs ---

#[tokio::test]
async fn glyphs_returns_bundle_for_requested_codepoints() {
    let resp = app()
        .oneshot(form_request(
            "/g/notosansjp/100/n1.glyphs",
            "glyphs=-ab%E3%81%82",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..4], b"BSAC");
    assert_eq!(&body[4..6], &[1, 0]);
    assert_eq!(&body[8..28], &SIGNATURE);
    assert_eq!(&body[28..30], &[0, 4]);

    let codepoints: Vec<u32> = body[32..]
        .chunks_exact(4)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    assert_eq!(codepoints, vec![45, 0x61, 0x62, 0x3042]);
}

#[tokio::test]
async fn glyphs_with_empty_list_returns_header_only() {
    let resp = app()
        .oneshot(form_request("/g/notosansjp/100/n1.glyphs", "glyphs="))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(body.len(), 32);
}

#[tokio::test]
async fn glyphs_for_corrupt_kit_is_not_a_bundle() {
    let resp = app()
        .oneshot(form_request(
            &format!("/g/notosansjp/100/{CORRUPT_KIT}.glyphs"),
            "glyphs=a",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_ne!(&body[..4], b"BSAC");
}

#[tokio::test]
async fn glyphs_with_wrong_suffix_returns_404() {
    let resp = app()
        .oneshot(form_request("/g/notosansjp/100/n1.framework", "glyphs=a"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn glyphs_without_form_field_is_rejected() {
    let resp = app()
        .oneshot(form_request("/g/notosansjp/100/n1.glyphs", "other=1"))
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}

// --- framework ---

#[tokio::test]
async fn framework_returns_raw_bytes() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/t/notosansjp/100/n1.framework")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"framework:notosansjp/100/n1");
}

#[tokio::test]
async fn framework_post_is_not_allowed() {
    let resp = app()
        .oneshot(form_request("/t/notosansjp/100/n1.framework", "glyphs=a"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
