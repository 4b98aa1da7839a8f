use shared_types::{city_names, uf_codes, AppError, CityResponse, UfResponse};

use crate::error_convert::{ensure_success, ReqwestErrorExt};
use crate::join_url;

/// Client for the IBGE localities API.
#[derive(Debug, Clone)]
pub struct IbgeClient {
    client: reqwest::Client,
    base_url: String,
}

impl IbgeClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// List state codes (`GET /estados`), sorted alphabetically.
    #[tracing::instrument(skip(self))]
    pub async fn list_ufs(&self) -> Result<Vec<String>, AppError> {
        let states: Vec<UfResponse> = self.get_json("estados").await?;
        let codes = uf_codes(states);
        tracing::info!(count = codes.len(), "Loaded states");
        Ok(codes)
    }

    /// List city names of one state (`GET /estados/{uf}/municipios`).
    #[tracing::instrument(skip(self))]
    pub async fn list_cities(&self, uf: &str) -> Result<Vec<String>, AppError> {
        let cities: Vec<CityResponse> =
            self.get_json(&format!("estados/{uf}/municipios")).await?;
        let names = city_names(cities);
        tracing::info!(uf, count = names.len(), "Loaded cities");
        Ok(names)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self
            .client
            .get(join_url(&self.base_url, path))
            .send()
            .await
            .map_err(|e| e.into_app_error())?;

        ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| e.into_app_error())
    }
}
