use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use services::{EcoletaApi, IbgeClient, Services};
use shared_types::{AppConfig, AppErrorKind, CreatePointRequest};
use std::sync::{Arc, Mutex};

type Received = Arc<Mutex<Vec<Value>>>;

/// Serve `router` on an ephemeral local port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A stand-in for the Ecoleta backend that records posted points.
fn backend(received: Received) -> Router {
    Router::new()
        .route(
            "/items",
            get(|| async {
                Json(json!([
                    {"id": 1, "title": "Lâmpadas", "image_url": "http://localhost:3333/uploads/lampadas.svg"},
                    {"id": 2, "title": "Pilhas e Baterias", "image_url": "http://localhost:3333/uploads/baterias.svg"}
                ]))
            }),
        )
        .route(
            "/points",
            post(
                |State(received): State<Received>, Json(body): Json<Value>| async move {
                    received.lock().unwrap().push(body);
                    Json(json!({"id": 1}))
                },
            ),
        )
        .with_state(received)
}

/// A stand-in for the IBGE localities API.
fn ibge() -> Router {
    Router::new()
        .route(
            "/estados",
            get(|| async {
                Json(json!([
                    {"id": 35, "sigla": "SP", "nome": "São Paulo"},
                    {"id": 33, "sigla": "RJ", "nome": "Rio de Janeiro"},
                    {"id": 12, "sigla": "AC", "nome": "Acre"}
                ]))
            }),
        )
        .route(
            "/estados/{uf}/municipios",
            get(|Path(uf): Path<String>| async move {
                match uf.as_str() {
                    "SP" => Json(json!([{"id": 1, "nome": "Santos"}, {"id": 2, "nome": "Campinas"}])),
                    _ => Json(json!([])),
                }
            }),
        )
}

fn failing() -> Router {
    Router::new()
        .route(
            "/items",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database offline") }),
        )
        .route(
            "/points",
            post(|| async { (StatusCode::BAD_REQUEST, "missing items") }),
        )
        .route("/estados", get(|| async { "not json" }))
}

fn point() -> CreatePointRequest {
    CreatePointRequest {
        name: "Mercado Verde".into(),
        email: "contato@mercadoverde.com.br".into(),
        whatsapp: "48999990000".into(),
        uf: "SP".into(),
        city: "Santos".into(),
        latitude: -23.5,
        longitude: -46.6,
        items: vec![2, 1],
    }
}

#[tokio::test]
async fn list_items_returns_catalog() {
    let base = serve(backend(Received::default())).await;
    let items = EcoletaApi::new(&base).list_items().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, 1);
    assert_eq!(items[1].title, "Pilhas e Baterias");
}

#[tokio::test]
async fn create_point_posts_full_payload() {
    let received = Received::default();
    let base = serve(backend(received.clone())).await;

    EcoletaApi::new(&base).create_point(&point()).await.unwrap();

    let bodies = received.lock().unwrap().clone();
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        json!({
            "name": "Mercado Verde",
            "email": "contato@mercadoverde.com.br",
            "whatsapp": "48999990000",
            "uf": "SP",
            "city": "Santos",
            "latitude": -23.5,
            "longitude": -46.6,
            "items": [2, 1]
        })
    );
}

#[tokio::test]
async fn list_ufs_projects_and_sorts_codes() {
    let base = serve(ibge()).await;
    let ufs = IbgeClient::new(&base).list_ufs().await.unwrap();
    assert_eq!(ufs, vec!["AC", "RJ", "SP"]);
}

#[tokio::test]
async fn list_cities_projects_names() {
    let base = serve(ibge()).await;
    let client = IbgeClient::new(&base);
    assert_eq!(client.list_cities("SP").await.unwrap(), vec!["Santos", "Campinas"]);
    assert!(client.list_cities("AC").await.unwrap().is_empty());
}

#[tokio::test]
async fn non_success_status_is_a_server_error() {
    let base = serve(failing()).await;
    let api = EcoletaApi::new(&base);

    let err = api.list_items().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ServerError);
    assert!(err.message.contains("500"));
    assert!(err.message.contains("database offline"));

    let err = api.create_point(&point()).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ServerError);
    assert!(err.message.contains("400"));
}

#[tokio::test]
async fn undecodable_body_is_a_network_error() {
    let base = serve(failing()).await;
    let err = IbgeClient::new(&base).list_ufs().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NetworkError);
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = EcoletaApi::new(&format!("http://{addr}"))
        .list_items()
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NetworkError);
    assert!(err.is_retryable());
}

#[tokio::test]
async fn services_from_config_point_at_configured_hosts() {
    let received = Received::default();
    let backend_url = serve(backend(received)).await;
    let ibge_url = serve(ibge()).await;

    let mut config = AppConfig::default();
    config.api.base_url = format!("{backend_url}/");
    config.geography.base_url = ibge_url;

    let services = Services::from_config(&config);
    assert_eq!(services.api.list_items().await.unwrap().len(), 2);
    assert_eq!(services.ibge.list_ufs().await.unwrap().len(), 3);
}
