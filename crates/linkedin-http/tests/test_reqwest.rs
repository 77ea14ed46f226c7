#![cfg(feature = "client-reqwest")]

use linkedin_http::{BaseHttpClient, Headers, HttpClient, HttpError, Query};
use libs::serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_returns_status_headers_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .and(query_param("q", "vanityName"))
        .and(header("X-Restli-Protocol-Version", "2.0.0"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-li-uuid", "abc")
                .set_body_string(r#"{"elements":[]}"#),
        )
        .mount(&server)
        .await;

    let mut headers = Headers::new();
    headers.insert("X-Restli-Protocol-Version".to_owned(), "2.0.0".to_owned());
    let mut query = Query::new();
    query.insert("q", "vanityName");

    let client = HttpClient::default();
    let response = client
        .get(
            &format!("{}/v2/organizations", server.uri()),
            Some(&headers),
            &query,
        )
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.header("X-LI-UUID"), Some("abc"));
    assert_eq!(response.body, r#"{"elements":[]}"#);
}

#[tokio::test]
async fn test_post_sends_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/posts"))
        .and(body_json(json!({"commentary": "hello"})))
        .respond_with(ResponseTemplate::new(201).insert_header("x-restli-id", "urn:li:share:9"))
        .mount(&server)
        .await;

    let client = HttpClient::default();
    let response = client
        .post(
            &format!("{}/rest/posts", server.uri()),
            None,
            &json!({"commentary": "hello"}),
        )
        .await
        .unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(response.header("x-restli-id"), Some("urn:li:share:9"));
}

#[tokio::test]
async fn test_unsuccessful_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(
            ResponseTemplate::new(403).set_body_string(r#"{"status":403,"message":"denied"}"#),
        )
        .mount(&server)
        .await;

    let client = HttpClient::default();
    let err = client
        .delete(&format!("{}/rest/posts/1", server.uri()), None, &json!({}))
        .await
        .unwrap_err();

    match err {
        HttpError::StatusCode(response) => {
            assert_eq!(response.status, 403);
            assert!(response.body.contains("denied"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
