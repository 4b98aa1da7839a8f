//! The requests the create-point page performs, each folded back into a
//! [`PointForm`].
//!
//! The page spawns these with its form signal; tests drive them with a plain
//! `&mut PointForm` against a local stub server.

use dioxus::prelude::*;
use services::{EcoletaApi, IbgeClient};
use shared_types::{AppError, CityRequest, PointForm};

/// Somewhere a [`PointForm`] can be updated in place.
pub trait FormStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut PointForm) -> R) -> R;
}

impl FormStore for Signal<PointForm> {
    fn update<R>(&mut self, f: impl FnOnce(&mut PointForm) -> R) -> R {
        f(&mut self.write())
    }
}

impl FormStore for &mut PointForm {
    fn update<R>(&mut self, f: impl FnOnce(&mut PointForm) -> R) -> R {
        f(self)
    }
}

pub async fn load_items(api: &EcoletaApi, mut form: impl FormStore) {
    let result = api.list_items().await;
    if let Err(e) = &result {
        tracing::warn!(error = %e, "Failed to load collectable items");
    }
    form.update(|f| f.set_items(result));
}

pub async fn load_ufs(ibge: &IbgeClient, mut form: impl FormStore) {
    let result = ibge.list_ufs().await;
    if let Err(e) = &result {
        tracing::warn!(error = %e, "Failed to load states");
    }
    form.update(|f| f.set_ufs(result));
}

/// Fetch the listing `request` asks for. Returns false when the response
/// arrived for a superseded state selection and was dropped.
pub async fn load_cities(ibge: &IbgeClient, request: CityRequest, mut form: impl FormStore) -> bool {
    let result = ibge.list_cities(&request.uf).await;
    if let Err(e) = &result {
        tracing::warn!(uf = %request.uf, error = %e, "Failed to load cities");
    }
    let applied = form.update(|f| f.apply_cities(request.generation, result));
    if !applied {
        tracing::debug!(uf = %request.uf, "Discarded stale city listing");
    }
    applied
}

/// Validate the form and, when it passes, send it.
///
/// `ValidationError` and `Conflict` come back without any request being
/// made; other errors are the outcome of the `POST`.
pub async fn submit_point(api: &EcoletaApi, mut form: impl FormStore) -> Result<(), AppError> {
    let request = match form.update(PointForm::begin_submit) {
        Ok(request) => request,
        Err(e) => {
            tracing::info!(error = %e, "Submission rejected");
            return Err(e);
        }
    };

    let result = api.create_point(&request).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "Failed to create collection point");
    }
    form.update(|f| f.finish_submit(result.clone()));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::{get, post},
        Json, Router,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use shared_types::{AppErrorKind, FormField, LatLng, SubmissionState};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Request counters per route; `fail_first` makes the first call of each
    /// route answer 503.
    #[derive(Clone, Default)]
    struct Stub {
        fail_first: bool,
        fail_posts: bool,
        items: Arc<AtomicUsize>,
        cities: Arc<AtomicUsize>,
        posts: Arc<AtomicUsize>,
    }

    impl Stub {
        fn flaky(&self, counter: &AtomicUsize, body: serde_json::Value) -> Response {
            let call = counter.fetch_add(1, Ordering::SeqCst);
            if self.fail_first && call == 0 {
                (StatusCode::SERVICE_UNAVAILABLE, "try later").into_response()
            } else {
                Json(body).into_response()
            }
        }
    }

    async fn serve(stub: Stub) -> String {
        let router = Router::new()
            .route(
                "/items",
                get(|State(stub): State<Stub>| async move {
                    stub.flaky(
                        &stub.items,
                        json!([{"id": 1, "title": "Lâmpadas", "image_url": "http://x/l.svg"}]),
                    )
                }),
            )
            .route(
                "/estados",
                get(|| async { Json(json!([{"sigla": "SP"}, {"sigla": "AC"}])) }),
            )
            .route(
                "/estados/{uf}/municipios",
                get(|State(stub): State<Stub>| async move {
                    stub.flaky(&stub.cities, json!([{"nome": "Santos"}]))
                }),
            )
            .route(
                "/points",
                post(|State(stub): State<Stub>| async move {
                    stub.posts.fetch_add(1, Ordering::SeqCst);
                    if stub.fail_posts {
                        (StatusCode::INTERNAL_SERVER_ERROR, "database offline").into_response()
                    } else {
                        Json(json!({"id": 1})).into_response()
                    }
                }),
            )
            .with_state(stub);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn filled(form: &mut PointForm) {
        form.set_field(FormField::Name, "Mercado Verde");
        form.set_field(FormField::Email, "contato@mercadoverde.com.br");
        form.set_field(FormField::Whatsapp, "48999990000");
        let req = form.select_state(Some("SP".into())).unwrap();
        form.apply_cities(req.generation, Ok(vec!["Santos".into()]));
        form.select_city(Some("Santos".into()));
        form.select_position(LatLng::new(-23.5, -46.6).unwrap());
        form.toggle_item(1);
    }

    #[tokio::test]
    async fn item_retry_after_failure_loads_catalog() {
        let stub = Stub {
            fail_first: true,
            ..Stub::default()
        };
        let api = EcoletaApi::new(&serve(stub.clone()).await);
        let mut form = PointForm::new();

        load_items(&api, &mut form).await;
        assert!(form.items().error().is_some());

        form.reload_items();
        load_items(&api, &mut form).await;
        assert_eq!(form.items().entries().len(), 1);
        assert_eq!(stub.items.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn states_load_sorted() {
        let ibge = IbgeClient::new(&serve(Stub::default()).await);
        let mut form = PointForm::new();
        load_ufs(&ibge, &mut form).await;
        assert_eq!(form.ufs().entries(), &["AC".to_string(), "SP".to_string()]);
    }

    #[tokio::test]
    async fn city_listing_for_superseded_state_is_dropped() {
        let ibge = IbgeClient::new(&serve(Stub::default()).await);
        let mut form = PointForm::new();
        let sp = form.select_state(Some("SP".into())).unwrap();
        let rj = form.select_state(Some("RJ".into())).unwrap();

        assert!(!load_cities(&ibge, sp, &mut form).await);
        assert!(form.cities().is_loading());

        assert!(load_cities(&ibge, rj, &mut form).await);
        assert_eq!(form.cities().entries(), &["Santos".to_string()]);
    }

    #[tokio::test]
    async fn failed_city_listing_recovers_on_reload() {
        let stub = Stub {
            fail_first: true,
            ..Stub::default()
        };
        let ibge = IbgeClient::new(&serve(stub.clone()).await);
        let mut form = PointForm::new();

        let request = form.select_state(Some("SP".into())).unwrap();
        assert!(load_cities(&ibge, request, &mut form).await);
        assert!(form.cities().error().is_some());

        let retry = form.reload_cities().unwrap();
        assert!(load_cities(&ibge, retry, &mut form).await);
        assert_eq!(form.cities().entries(), &["Santos".to_string()]);
        assert_eq!(form.selected_uf(), Some("SP"));
        assert_eq!(stub.cities.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn submit_posts_once_and_refuses_repeat() {
        let stub = Stub::default();
        let api = EcoletaApi::new(&serve(stub.clone()).await);
        let mut form = PointForm::new();
        filled(&mut form);

        submit_point(&api, &mut form).await.unwrap();
        assert_eq!(form.submission(), &SubmissionState::Succeeded);

        let err = submit_point(&api, &mut form).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Conflict);
        assert_eq!(stub.posts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn server_failure_leaves_form_retryable() {
        let stub = Stub {
            fail_posts: true,
            ..Stub::default()
        };
        let api = EcoletaApi::new(&serve(stub.clone()).await);
        let mut form = PointForm::new();
        filled(&mut form);

        let err = submit_point(&api, &mut form).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ServerError);
        assert!(matches!(
            form.submission(),
            SubmissionState::Failed { retryable: true, .. }
        ));

        assert!(submit_point(&api, &mut form).await.is_err());
        assert_eq!(stub.posts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn invalid_form_sends_nothing() {
        let stub = Stub::default();
        let api = EcoletaApi::new(&serve(stub.clone()).await);
        let mut form = PointForm::new();

        let err = submit_point(&api, &mut form).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(form.submission(), &SubmissionState::Idle);
        assert_eq!(stub.posts.load(Ordering::SeqCst), 0);
    }
}
