//! HTTP access to the Ecoleta backend and the IBGE localities service.

pub mod api;
pub mod config;
pub mod error_convert;
pub mod ibge;

pub use api::EcoletaApi;
pub use ibge::IbgeClient;

use shared_types::AppConfig;

/// Both remote services, configured from one [`AppConfig`].
#[derive(Debug, Clone)]
pub struct Services {
    pub api: EcoletaApi,
    pub ibge: IbgeClient,
}

impl Services {
    pub fn from_config(config: &AppConfig) -> Self {
        let client = reqwest::Client::new();
        Self {
            api: EcoletaApi::with_client(client.clone(), &config.api.base_url),
            ibge: IbgeClient::with_client(client, &config.geography.base_url),
        }
    }
}

/// Join a base URL and a path without doubling the slash.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
