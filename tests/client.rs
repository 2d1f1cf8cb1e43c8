//
//  sentry-client
//  tests/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::net::TcpListener;
use std::time::Duration;

use mockito::{Matcher, Server};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use sentry_client::api::projects::{CreateProjectRequest, ProjectListQuery, UpdateProjectRequest};
use sentry_client::api::{response, ErrorKind, Method, SentryClient, NO_INPUT};

#[derive(Debug, Deserialize, PartialEq)]
struct ProjectSummary {
    id: String,
    name: String,
}

fn client_for(server: &Server) -> SentryClient {
    SentryClient::new("abc", Some(server.url()), Some(Duration::from_secs(5))).unwrap()
}

/// Accepts one connection, writes `preamble` after reading the request, then
/// goes quiet. Returns an endpoint pointing at it.
async fn stalling_server(preamble: &'static [u8]) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let _ = socket.write_all(preamble).await;
        tokio::time::sleep(Duration::from_secs(10)).await;
        drop(socket);
    });

    format!("http://{}/api/0/", addr)
}

#[tokio::test]
async fn test_get_decodes_success_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/projects/")
        .match_header("authorization", "Bearer abc")
        .match_header("content-type", "application/json")
        .match_header("connection", "close")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"1","name":"demo"}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let projects: Vec<ProjectSummary> = client.get("projects").await.unwrap();

    assert_eq!(
        projects,
        vec![ProjectSummary {
            id: "1".to_string(),
            name: "demo".to_string(),
        }]
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_becomes_api_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/projects/")
        .match_body(Matcher::Json(json!({"name": "demo"})))
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"name already exists"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .post::<_, Value>("projects", &json!({"name": "demo"}))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), Some(400));
    let api_error = err.as_api_error().unwrap();
    assert_eq!(api_error.status_code(), 400);
    assert_eq!(api_error.detail(), Some("name already exists"));
    assert!(api_error.is_client_error());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_body_keeps_extra_fields() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("PUT", "/projects/acme/web/")
        .with_status(400)
        .with_body(r#"{"slug":["Another project is already using this slug"]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let request = UpdateProjectRequest {
        slug: Some("api".to_string()),
        ..Default::default()
    };
    let err = client
        .update_project("acme", "web", &request)
        .await
        .unwrap_err();

    let api_error = err.as_api_error().unwrap();
    assert_eq!(api_error.detail(), None);
    assert_eq!(
        api_error.extra().get("slug"),
        Some(&json!(["Another project is already using this slug"]))
    );
}

#[tokio::test]
async fn test_non_json_error_body_is_decoding_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/organizations/")
        .with_status(502)
        .with_header("content-type", "text/html")
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.get::<Value>("organizations").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decoding);
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_success_body_with_wrong_shape_is_decoding_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/projects/")
        .with_status(200)
        .with_body(r#"{"id":"1","name":"demo"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.get::<Vec<ProjectSummary>>("projects").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decoding);
}

#[tokio::test]
async fn test_delete_ignores_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/projects/acme/web/")
        .with_status(202)
        .with_body("scheduled")
        .create_async()
        .await;

    let client = client_for(&server);
    client.delete_project("acme", "web").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_failure_is_api_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/projects/acme/missing/")
        .with_status(404)
        .with_body(r#"{"detail":"The requested resource does not exist"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.delete_project("acme", "missing").await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_query_parameters_are_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/organizations/acme/issues/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "is:unresolved".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server);
    let issues: Vec<Value> = client
        .get_with_query(
            "organizations/acme/issues",
            &[("query", "is:unresolved"), ("limit", "10")],
        )
        .await
        .unwrap();

    assert!(issues.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_projects_passes_cursor() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/projects/")
        .match_query(Matcher::UrlEncoded("cursor".into(), "1700000000:0:1".into()))
        .with_status(200)
        .with_body(
            r#"[{"id":"2","slug":"api","name":"API","status":"active",
                "organization":{"id":"7","slug":"acme","name":"Acme"}}]"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let query = ProjectListQuery {
        cursor: Some("1700000000:0:1".to_string()),
    };
    let projects = client.list_projects(&query).await.unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].slug, "api");
    assert_eq!(projects[0].organization.as_ref().unwrap().slug, "acme");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_project_posts_to_team() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/teams/acme/backend/projects/")
        .match_body(Matcher::Json(json!({"name": "Web", "platform": "javascript"})))
        .with_status(201)
        .with_body(r#"{"id":"9","slug":"web","name":"Web","platform":"javascript"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let request = CreateProjectRequest {
        name: "Web".to_string(),
        slug: None,
        platform: Some("javascript".to_string()),
    };
    let project = client
        .create_project("acme", "backend", &request)
        .await
        .unwrap();

    assert_eq!(project.id, "9");
    assert_eq!(project.slug, "web");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_project() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/projects/acme/web/")
        .with_status(200)
        .with_body(r#"{"id":"9","slug":"web","name":"Web","isBookmarked":true}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let project = client.get_project("acme", "web").await.unwrap();

    assert_eq!(project.name, "Web");
    assert!(project.is_bookmarked);
}

#[tokio::test]
async fn test_server_error_is_retryable() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/projects/")
        .with_status(503)
        .with_body(r#"{"detail":"Service unavailable"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.get::<Value>("projects").await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(err.as_api_error().unwrap().is_server_error());
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_build_then_send_then_decode() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/organizations/")
        .match_body(Matcher::Exact(String::new()))
        .with_status(200)
        .with_body(r#"[{"slug":"acme"}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let request = client
        .build_request(Method::GET, "/organizations/", NO_INPUT)
        .unwrap();
    let response = client.send(request).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let organizations: Vec<Value> = response::decode(response).await.unwrap();
    assert_eq!(organizations, vec![json!({"slug": "acme"})]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = SentryClient::new(
        "abc",
        Some(format!("http://127.0.0.1:{}/api/0/", port)),
        Some(Duration::from_secs(5)),
    )
    .unwrap();
    let err = client.get::<Value>("projects").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), None);
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_timeout_before_headers_is_transport_error() {
    let endpoint = stalling_server(b"").await;
    let client = SentryClient::new("abc", Some(endpoint), Some(Duration::from_millis(200))).unwrap();

    let err = client.get::<Value>("projects").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.is_timeout());
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_timeout_while_reading_body_is_transport_error() {
    let endpoint =
        stalling_server(b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 100\r\n\r\n[").await;
    let client = SentryClient::new("abc", Some(endpoint), Some(Duration::from_millis(200))).unwrap();

    let err = client.get::<Value>("projects").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.is_timeout());
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_empty_success_body_decodes_to_none() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/organizations/acme/releases/")
        .with_status(202)
        .create_async()
        .await;

    let client = client_for(&server);
    let request = client
        .build_request(Method::POST, "organizations/acme/releases", Some(&json!({"version": "1.0"})))
        .unwrap();
    let response = client.send(request).await.unwrap();

    let value: Option<Value> = response::decode_optional(response).await.unwrap();
    assert_eq!(value, None);
}

#[tokio::test]
async fn test_client_is_shared_across_tasks() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/projects/")
        .with_status(200)
        .with_body("[]")
        .expect(4)
        .create_async()
        .await;

    let client = client_for(&server);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.get::<Vec<Value>>("projects").await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().unwrap().is_empty());
    }
    mock.assert_async().await;
}
