//! End-to-end tests for the zip-code update flow.
//!
//! Drives the full router with a wiremock zip directory and the seeded
//! in-memory customer store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use customer_api::AppState;
use customer_api::auth::JwtService;
use customer_api::config::Config;
use customer_api::database::seed_repository;
use customer_api::router::build_router;
use customer_api::services::HttpZipCodeDirectory;

const JWT_SECRET: &str = "integration-test-secret-key";

fn test_config(zip_api_url: String) -> Config {
    Config {
        environment: "test".to_string(),
        port: 0,
        zip_api_url,
        jwt_secret: JWT_SECRET.to_string(),
        jwt_expiration: 3600,
        service_api_key: "test-service-key".to_string(),
        request_timeout: 5,
        log_level: "debug".to_string(),
    }
}

async fn directory_with(zips: Vec<&str>) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/GetAll"))
        .respond_with(ResponseTemplate::new(200).set_body_json(zips))
        .mount(&server)
        .await;
    server
}

fn build_app(zip_api_url: String) -> (axum::Router, JwtService) {
    let config = test_config(zip_api_url);
    let jwt_service =
        JwtService::new(&config.jwt_secret, config.jwt_expiration).expect("jwt service");
    let state = AppState::new(
        config.clone(),
        jwt_service.clone(),
        Arc::new(seed_repository()),
        Arc::new(HttpZipCodeDirectory::new(
            config.zip_api_url.clone(),
            config.request_timeout,
        )),
    );
    (build_router(state), jwt_service)
}

fn put_zip_request(token: &str, zip_code: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri("/api/v1/customers/zip")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(json!({ "zip_code": zip_code }).to_string()))
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn test_known_zip_code_is_updated() {
    let directory = directory_with(vec!["12345", "67890"]).await;
    let (app, jwt) = build_app(directory.uri());
    let token = jwt.generate_token(1).unwrap();

    let response = app
        .oneshot(put_zip_request(&token, "67890"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["updated"], true);
    assert_eq!(body["data"]["zip_code"], "67890");
}

#[tokio::test]
async fn test_zip_code_missing_from_directory_is_not_updated() {
    let directory = directory_with(vec!["12345"]).await;
    let (app, jwt) = build_app(directory.uri());
    let token = jwt.generate_token(1).unwrap();

    // Well-formed zip code the directory does not know
    let response = app
        .oneshot(put_zip_request(&token, "99999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["updated"], false);
}

#[tokio::test]
async fn test_malformed_zip_code_is_a_bad_request() {
    let directory = directory_with(vec!["12345"]).await;
    let (app, jwt) = build_app(directory.uri());
    let token = jwt.generate_token(1).unwrap();

    let response = app.oneshot(put_zip_request(&token, "9999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_request_without_token_is_unauthorized() {
    let directory = directory_with(vec!["12345"]).await;
    let (app, _jwt) = build_app(directory.uri());

    let request = Request::builder()
        .method("PUT")
        .uri("/api/v1/customers/zip")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "zip_code": "12345" }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_directory_outage_is_a_bad_gateway() {
    let directory = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/GetAll"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&directory)
        .await;

    let (app, jwt) = build_app(directory.uri());
    let token = jwt.generate_token(1).unwrap();

    let response = app
        .oneshot(put_zip_request(&token, "12345"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_token_issuance_and_profile_fetch() {
    let directory = directory_with(vec!["12345"]).await;
    let (app, _jwt) = build_app(directory.uri());

    // Issue a token through the service-key gated endpoint
    let issue = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/token")
        .header(header::CONTENT_TYPE, "application/json")
        .header("X-API-Key", "test-service-key")
        .body(Body::from(json!({ "customer_id": 1 }).to_string()))
        .unwrap();

    let response = app.clone().oneshot(issue).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let token = body["access_token"].as_str().expect("token").to_string();

    let me = Request::builder()
        .method("GET")
        .uri("/api/v1/customers/me")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(me).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["zip_code"], "12345");
}

#[tokio::test]
async fn test_token_issuance_with_wrong_service_key_is_rejected() {
    let directory = directory_with(vec!["12345"]).await;
    let (app, _jwt) = build_app(directory.uri());

    let issue = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/token")
        .header(header::CONTENT_TYPE, "application/json")
        .header("X-API-Key", "wrong-key")
        .body(Body::from(json!({ "customer_id": 1 }).to_string()))
        .unwrap();

    let response = app.oneshot(issue).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
