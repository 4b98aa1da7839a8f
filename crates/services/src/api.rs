use shared_types::{AppError, CreatePointRequest, Item};

use crate::error_convert::{ensure_success, ReqwestErrorExt};
use crate::join_url;

/// Client for the Ecoleta backend.
#[derive(Debug, Clone)]
pub struct EcoletaApi {
    client: reqwest::Client,
    base_url: String,
}

impl EcoletaApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the collectible item categories (`GET /items`).
    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn list_items(&self) -> Result<Vec<Item>, AppError> {
        let response = self
            .client
            .get(join_url(&self.base_url, "items"))
            .send()
            .await
            .map_err(|e| e.into_app_error())?;

        let items: Vec<Item> = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| e.into_app_error())?;

        tracing::info!(count = items.len(), "Loaded item catalog");
        Ok(items)
    }

    /// Register a collection point (`POST /points`). The response body is
    /// not inspected.
    #[tracing::instrument(
        skip(self, request),
        fields(uf = %request.uf, city = %request.city, items = request.items.len())
    )]
    pub async fn create_point(&self, request: &CreatePointRequest) -> Result<(), AppError> {
        let response = self
            .client
            .post(join_url(&self.base_url, "points"))
            .json(request)
            .send()
            .await
            .map_err(|e| e.into_app_error())?;

        ensure_success(response).await?;
        tracing::info!("Collection point created");
        Ok(())
    }
}
