use std::net::SocketAddr;

use mediator::app_routes;
use mediator_server::Server;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

async fn start() -> (SocketAddr, CancellationToken, JoinHandle<()>) {
    let server = Server::bind("127.0.0.1:0".parse().unwrap(), app_routes())
        .await
        .unwrap();
    let addr = server.local_addr().unwrap();
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    let handle = tokio::spawn(async move {
        server.serve(token).await.unwrap();
    });
    (addr, cancel, handle)
}

/// Send a raw request and return the whole response.
async fn request(addr: SocketAddr, method: &str, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let req = format!("{method} {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(req.as_bytes()).await.unwrap();

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    String::from_utf8(buf).unwrap()
}

#[tokio::test]
async fn test_get_home() {
    let (addr, cancel, handle) = start().await;

    let response = request(addr, "GET", "/home").await;
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.contains("content-type: text/html; charset=utf-8"));
    assert!(response.contains("<title>Home</title>"));
    assert!(response.contains("Discussion Mediator"));

    cancel.cancel();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_query_string_is_ignored() {
    let (addr, cancel, handle) = start().await;

    let response = request(addr, "GET", "/home?tab=trends").await;
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));

    cancel.cancel();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_head_has_no_body() {
    let (addr, cancel, handle) = start().await;

    let response = request(addr, "HEAD", "/home").await;
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(!response.contains("<!DOCTYPE html>"));

    cancel.cancel();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_path() {
    let (addr, cancel, handle) = start().await;

    let response = request(addr, "GET", "/").await;
    assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));

    cancel.cancel();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_post_not_allowed() {
    let (addr, cancel, handle) = start().await;

    let response = request(addr, "POST", "/home").await;
    assert!(response.starts_with("HTTP/1.1 405 Method Not Allowed\r\n"));
    assert!(response.contains("allow: GET, HEAD"));

    cancel.cancel();
    handle.await.unwrap();
}
