// Common test utilities for integration tests
#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use migration::{MigratorTrait, StorageMigrator};
use poem::http::StatusCode;
use poem::listener::{Acceptor, Listener, TcpListener};
use poem::web::Json;
use poem::{handler, Body, IntoResponse, Request, Response, Route, Server};
use sea_orm::{Database, DatabaseConnection};
use serde_json::{json, Value};

/// Creates a storage database with migrations applied
pub async fn setup_test_storage_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    StorageMigrator::up(&db, None)
        .await
        .expect("Failed to run storage migrations");

    db
}

/// Echoes every request back as JSON
///
/// Paths ending in `/missing` answer 404, paths ending in `/empty` answer an
/// empty 204 and paths ending in `/slow` stall for two seconds before echoing.
#[handler]
async fn echo(req: &Request, body: Body) -> Response {
    let path = req.uri().path().to_string();
    if path.ends_with("/missing") {
        return Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body("no such record");
    }
    if path.ends_with("/empty") {
        return StatusCode::NO_CONTENT.into_response();
    }
    if path.ends_with("/slow") {
        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    let raw = body.into_string().await.unwrap_or_default();
    let body: Value = if raw.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&raw).unwrap_or(Value::String(raw))
    };
    let authorization = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    Json(json!({
        "method": req.method().as_str(),
        "path": path,
        "query": req.uri().query(),
        "authorization": authorization,
        "body": body,
    }))
    .into_response()
}

/// Starts the echo server on an ephemeral port
///
/// Returns the base URL, e.g. `http://127.0.0.1:54321/asset-t1/`.
pub async fn spawn_mock_backend() -> String {
    let acceptor = TcpListener::bind("127.0.0.1:0")
        .into_acceptor()
        .await
        .expect("Failed to bind mock backend");
    let addr: SocketAddr = *acceptor.local_addr()[0]
        .as_socket_addr()
        .expect("Mock backend should listen on a socket address");

    let app = Route::new().at("/*path", echo);
    tokio::spawn(async move {
        let _ = Server::new_with_acceptor(acceptor).run(app).await;
    });

    format!("http://{}/asset-t1/", addr)
}
