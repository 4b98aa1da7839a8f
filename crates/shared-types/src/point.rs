use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// A geographic coordinate picked on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    latitude: f64,
    longitude: f64,
}

/// Why a coordinate was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for InvalidCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid coordinate: lat={}, lng={}",
            self.latitude, self.longitude
        )
    }
}

impl std::error::Error for InvalidCoordinate {}

impl LatLng {
    pub const ORIGIN: LatLng = LatLng {
        latitude: 0.0,
        longitude: 0.0,
    };

    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        if !latitude.is_finite()
            || !longitude.is_finite()
            || !(-90.0..=90.0).contains(&latitude)
            || !(-180.0..=180.0).contains(&longitude)
        {
            return Err(InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Body of `POST /points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreatePointRequest {
    #[validate(length(min = 1, message = "Informe o nome da entidade"))]
    pub name: String,
    #[validate(email(message = "Informe um e-mail válido"))]
    pub email: String,
    #[validate(length(min = 1, message = "Informe o número de Whatsapp"))]
    pub whatsapp: String,
    pub uf: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    #[validate(length(min = 1, message = "Selecione ao menos um item de coleta"))]
    pub items: Vec<i64>,
}
