//! Integration tests for the API client against a local stub server
//!
//! A minimal TCP server answers each connection with a canned HTTP/1.1
//! response, which is enough to exercise header injection, status handling
//! and JSON decoding without touching the real API.

use futures_util::StreamExt;
use serde_json::json;
use std::net::SocketAddr;
use switchtube_dl::api::{ApiClient, ApiError};
use switchtube_dl::output::create_video_file;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve `response` to every connection; 401 when the auth header is wrong.
async fn spawn_stub(expected_auth: &'static str, response: String) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let response = response.clone();

            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).to_lowercase();

                let reply = if request.contains(&expected_auth.to_lowercase()) {
                    response
                } else {
                    plain_response("401 Unauthorized", "{}")
                };

                let _ = socket.write_all(reply.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

fn plain_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    )
}

#[tokio::test]
async fn decodes_video_metadata_and_sends_auth_header() {
    let body = json!({"id": "abc123", "title": "Intro", "episode": "01"}).to_string();
    let addr = spawn_stub(
        "authorization: token secret-token",
        plain_response("200 OK", &body),
    )
    .await;

    let client = ApiClient::with_base_url(format!("http://{addr}"), "secret-token".to_string());
    let video = client.video("abc123").await.unwrap();

    assert_eq!(video.id, "abc123");
    assert_eq!(video.title, "Intro");
    assert_eq!(video.episode, "01");
}

#[tokio::test]
async fn missing_episode_defaults_to_empty() {
    let body = json!({"id": "abc123", "title": "Intro"}).to_string();
    let addr = spawn_stub(
        "authorization: token secret-token",
        plain_response("200 OK", &body),
    )
    .await;

    let client = ApiClient::with_base_url(format!("http://{addr}"), "secret-token".to_string());
    let video = client.video("abc123").await.unwrap();

    assert_eq!(video.episode, "");
}

#[tokio::test]
async fn decodes_channel_video_listing() {
    let body = json!([
        {"id": "a", "title": "One", "episode": "01"},
        {"id": "b", "title": "Two", "episode": "02"},
    ])
    .to_string();
    let addr = spawn_stub(
        "authorization: token secret-token",
        plain_response("200 OK", &body),
    )
    .await;

    let client = ApiClient::with_base_url(format!("http://{addr}"), "secret-token".to_string());
    let videos = client.channel_videos("chan").await.unwrap();

    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].title, "One");
    assert_eq!(videos[1].id, "b");
}

#[tokio::test]
async fn variant_media_type_uses_camel_case_json() {
    let body = json!([{"path": "download/abc", "mediaType": "video/mp4"}]).to_string();
    let addr = spawn_stub(
        "authorization: token secret-token",
        plain_response("200 OK", &body),
    )
    .await;

    let client = ApiClient::with_base_url(format!("http://{addr}"), "secret-token".to_string());
    let variants = client.video_variants("abc").await.unwrap();

    assert_eq!(variants[0].path, "download/abc");
    assert_eq!(variants[0].media_type, "video/mp4");
}

#[tokio::test]
async fn non_200_status_is_an_error() {
    let addr = spawn_stub(
        "authorization: token secret-token",
        plain_response("404 Not Found", "{}"),
    )
    .await;

    let client = ApiClient::with_base_url(format!("http://{addr}"), "secret-token".to_string());

    assert!(matches!(
        client.video("missing").await,
        Err(ApiError::Status { status: 404, .. })
    ));
}

#[tokio::test]
async fn wrong_token_is_rejected_by_the_server() {
    let addr = spawn_stub(
        "authorization: token secret-token",
        plain_response("200 OK", "{}"),
    )
    .await;

    let client = ApiClient::with_base_url(format!("http://{addr}"), "wrong".to_string());

    assert!(matches!(
        client.video("abc").await,
        Err(ApiError::Status { status: 401, .. })
    ));
}

#[tokio::test]
async fn streams_a_body_to_disk_unchanged() {
    let payload = "not json, just bytes on the wire ".repeat(64);
    let addr = spawn_stub(
        "authorization: token secret-token",
        plain_response("200 OK", &payload),
    )
    .await;

    let client = ApiClient::with_base_url(format!("http://{addr}"), "secret-token".to_string());
    let response = client.get_stream("download/abc").await.unwrap();
    assert_eq!(response.content_length(), Some(payload.len() as u64));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("channel").join("clip.mp4");
    let mut file = create_video_file(&path).await.unwrap();

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        file.write_all(&chunk.unwrap()).await.unwrap();
    }
    file.flush().await.unwrap();
    drop(file);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), payload);
}

#[tokio::test]
async fn invalid_json_is_a_decode_error() {
    let addr = spawn_stub(
        "authorization: token secret-token",
        plain_response("200 OK", "not json"),
    )
    .await;

    let client = ApiClient::with_base_url(format!("http://{addr}"), "secret-token".to_string());

    assert!(matches!(
        client.video("abc").await,
        Err(ApiError::Decode { .. })
    ));
}
