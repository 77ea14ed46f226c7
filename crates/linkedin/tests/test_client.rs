#![cfg(feature = "client-reqwest")]

use futures_util::StreamExt;
use libs::serde_json::json;
use linkedin::{
    http::HttpError,
    model::{AuthorId, ImageId, OrganizationId, Post},
    prelude::*,
    AuthCodeLinkedIn, ClientCredsLinkedIn, ClientError, Config, Credentials, Token,
};
use test_util::fixture;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> Config {
    Config {
        api_base_url: format!("{}/v2/", server.uri()),
        rest_base_url: format!("{}/rest/", server.uri()),
        auth_base_url: format!("{}/oauth/v2/", server.uri()),
        ..Default::default()
    }
}

fn client(server: &MockServer) -> AuthCodeLinkedIn {
    let token = Token {
        access_token: "test-access-token".to_owned(),
        ..Default::default()
    };
    AuthCodeLinkedIn::from_token_with_config(token, config(server))
}

fn organization() -> OrganizationId {
    OrganizationId::from_id("2414183").unwrap()
}

fn json_response(name: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(fixture(name), "application/json")
}

#[tokio::test]
async fn test_requests_carry_auth_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/organizations/2414183"))
        .and(header("authorization", "Bearer test-access-token"))
        .and(header("X-Restli-Protocol-Version", "2.0.0"))
        .and(header("LinkedIn-Version", "202401"))
        .respond_with(json_response("organization.json"))
        .expect(1)
        .mount(&server)
        .await;

    let organization = client(&server).organization(&organization()).await.unwrap();

    assert_eq!(organization.id, 2414183);
    assert_eq!(organization.localized_name, "Devtestco");
    assert_eq!(organization.vanity_name.as_deref(), Some("devtestco"));
}

#[tokio::test]
async fn test_posts_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/posts"))
        .and(query_param("q", "author"))
        .and(query_param("author", "urn:li:organization:2414183"))
        .and(query_param("start", "0"))
        .and(query_param("count", "2"))
        .respond_with(json_response("posts_first_page.json"))
        .mount(&server)
        .await;

    let author = AuthorId::from(organization());
    let page = client(&server)
        .posts_by_author(&author, 0, 2)
        .await
        .unwrap();

    assert_eq!(page.elements.len(), 2);
    assert_eq!(page.elements[0].commentary, "First post");
    assert_eq!(page.elements[1].author, author);
    assert!(page.previous.is_none());
    assert_eq!(
        page.next,
        Some(format!(
            "{}/rest/posts?q=author&author=urn%3Ali%3Aorganization%3A2414183&start=2&count=2",
            server.uri()
        ))
    );
    assert_eq!(page.paging.unwrap().links[0].rel, "next");
}

#[tokio::test]
async fn test_paginate_follows_next_links() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/posts"))
        .and(query_param("start", "0"))
        .respond_with(json_response("posts_first_page.json"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/posts"))
        .and(query_param("start", "2"))
        .respond_with(json_response("posts_last_page.json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let author = AuthorId::from(organization());
    let posts = client
        .all_posts_by_author(&author, 2)
        .unwrap()
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect::<Result<Vec<Post>, _>>()
        .unwrap();

    let commentaries = posts
        .iter()
        .map(|post| post.commentary.as_str())
        .collect::<Vec<_>>();
    assert_eq!(commentaries, ["First post", "Second post", "Third post"]);
}

#[tokio::test]
async fn test_paginate_stops_on_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/posts"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let author = AuthorId::from(organization());
    let results = client
        .all_posts_by_author(&author, 2)
        .unwrap()
        .collect::<Vec<_>>()
        .await;

    assert_eq!(results.len(), 1);
    assert!(results[0].is_err());
}

#[tokio::test]
async fn test_create_post_returns_urn() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/posts"))
        .and(body_string_contains(r#""commentary":"Hello""#))
        .respond_with(
            ResponseTemplate::new(201).insert_header("x-restli-id", "urn:li:share:6844785523593134080"),
        )
        .mount(&server)
        .await;

    let post = Post::new(AuthorId::from(organization()), "Hello");
    let urn = client(&server).create_post(&post).await.unwrap();

    assert_eq!(urn, "urn:li:share:6844785523593134080");
}

#[tokio::test]
async fn test_create_without_id_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/posts"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let post = Post::new(AuthorId::from(organization()), "Hello");
    let result = client(&server).create_post(&post).await;

    assert!(matches!(result, Err(ClientError::MissingHeader("x-restli-id"))));
}

#[tokio::test]
async fn test_shares_use_restli_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/ugcPosts"))
        .and(query_param("q", "authors"))
        .and(query_param("authors", "List(urn:li:organization:2414183)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paging": {"start": 0, "count": 10, "links": []},
            "elements": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .shares_by_author(&AuthorId::from(organization()), 0, 10)
        .await
        .unwrap();

    assert!(page.elements.is_empty());
    assert!(!page.has_next());
}

#[tokio::test]
async fn test_initialize_image_upload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/images"))
        .and(query_param("action", "initializeUpload"))
        .and(body_json(json!({
            "initializeUploadRequest": {"owner": "urn:li:organization:2414183"}
        })))
        .respond_with(json_response("image_upload.json"))
        .mount(&server)
        .await;

    let upload = client(&server)
        .initialize_image_upload(&AuthorId::from(organization()))
        .await
        .unwrap();

    assert_eq!(upload.image, "urn:li:image:C4E10AQFoyyAjHPMQuQ");
    assert!(upload.upload_url.starts_with("https://www.linkedin.com/dms-uploads/"));
}

#[tokio::test]
async fn test_batch_images() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/images"))
        .and(query_param("ids", "List(urn:li:image:C4E10AQFoyyAjHPMQuQ)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": {
                "urn:li:image:C4E10AQFoyyAjHPMQuQ": {
                    "id": "urn:li:image:C4E10AQFoyyAjHPMQuQ",
                    "status": "AVAILABLE",
                    "owner": "urn:li:organization:2414183"
                }
            },
            "statuses": {"urn:li:image:C4E10AQFoyyAjHPMQuQ": 200},
            "errors": {}
        })))
        .mount(&server)
        .await;

    let id = ImageId::from_id("C4E10AQFoyyAjHPMQuQ").unwrap();
    let images = client(&server).images(&[id.clone()]).await.unwrap();

    let image = &images[&id.urn()];
    assert_eq!(image.owner, Some(AuthorId::from(organization())));
}

#[tokio::test]
async fn test_follower_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/networkSizes/urn%3Ali%3Aorganization%3A2414183"))
        .and(query_param("edgeType", "CompanyFollowedByMember"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"firstDegreeSize": 2548})))
        .mount(&server)
        .await;

    let count = client(&server).follower_count(&organization()).await.unwrap();
    assert_eq!(count, 2548);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/organizations/2414183"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "status": 403,
            "serviceErrorCode": 100,
            "code": "ACCESS_DENIED",
            "message": "Not enough permissions to access: GET /organizations/2414183"
        })))
        .mount(&server)
        .await;

    let result = client(&server).organization(&organization()).await;

    match result {
        Err(ClientError::Http(err)) => match *err {
            HttpError::StatusCode(response) => {
                assert_eq!(response.status, 403);
                let body: linkedin::model::ApiErrorBody =
                    libs::serde_json::from_str(&response.body).unwrap();
                assert_eq!(body.code.as_deref(), Some("ACCESS_DENIED"));
            }
            other => panic!("unexpected http error: {:?}", other),
        },
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_client_credentials_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/v2/accessToken"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=this-is-my-client-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "client-token",
            "expires_in": 1799
        })))
        .expect(1)
        .mount(&server)
        .await;

    let creds = Credentials::new("this-is-my-client-id", "this-is-my-client-secret");
    let linkedin = ClientCredsLinkedIn::with_config(creds, config(&server));
    linkedin.request_token().await.unwrap();

    let token = linkedin.token.lock().await.clone().unwrap();
    assert_eq!(token.access_token, "client-token");
    assert!(!token.is_expired());
}

#[tokio::test]
async fn test_refresh_keeps_refresh_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/v2/accessToken"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=my-refresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "refreshed-token",
            "expires_in": 5184000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let creds = Credentials::new("this-is-my-client-id", "this-is-my-client-secret");
    let linkedin = AuthCodeLinkedIn::with_config(creds, Default::default(), config(&server));
    *linkedin.token.lock().await = Some(Token {
        refresh_token: Some("my-refresh-token".to_owned()),
        ..Default::default()
    });

    linkedin.refresh_token().await.unwrap();

    let token = linkedin.token.lock().await.clone().unwrap();
    assert_eq!(token.access_token, "refreshed-token");
    assert_eq!(token.refresh_token.as_deref(), Some("my-refresh-token"));
}
