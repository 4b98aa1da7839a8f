use serde::{Deserialize, Serialize};

/// A collectible item category offered by the backend (`GET /items`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub image_url: String,
}

/// One entry of the IBGE `/estados` listing. Only the code is used.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UfResponse {
    pub sigla: String,
}

/// One entry of the IBGE `/estados/{uf}/municipios` listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityResponse {
    pub nome: String,
}

/// Project the states listing to sorted state codes.
pub fn uf_codes(states: Vec<UfResponse>) -> Vec<String> {
    let mut codes: Vec<String> = states.into_iter().map(|s| s.sigla).collect();
    codes.sort();
    codes
}

/// Project the cities listing to names, keeping service order.
pub fn city_names(cities: Vec<CityResponse>) -> Vec<String> {
    cities.into_iter().map(|c| c.nome).collect()
}
