//! State of the "create collection point" form.
//!
//! Every user interaction and every network completion is a method call on
//! [`PointForm`]. The UI holds one `PointForm` in a signal and performs the
//! HTTP requests the methods ask for; nothing here does I/O.

use crate::{AppError, CreatePointRequest, Item, LatLng};
use std::collections::HashMap;
use validator::Validate;

/// Progress of one reference-data list.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, AppError>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Failed(e.friendly_message()),
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

impl<T> LoadState<Vec<T>> {
    /// The loaded entries, or an empty slice while loading or after a failure.
    pub fn entries(&self) -> &[T] {
        self.loaded().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Free-text inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Whatsapp,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Whatsapp => "whatsapp",
        }
    }
}

/// Contact details typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

/// Lifecycle of the single `POST /points` a form may perform.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// The request failed. `retryable` is false when resending the same
    /// record cannot help.
    Failed { message: String, retryable: bool },
}

/// A city listing the caller must fetch for `uf`.
///
/// Hand `generation` back to [`PointForm::apply_cities`] with the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRequest {
    pub uf: String,
    pub generation: u64,
}

/// Field-error key used for the map position.
pub const LOCATION_FIELD: &str = "location";

#[derive(Debug, Clone, PartialEq)]
pub struct PointForm {
    items: LoadState<Vec<Item>>,
    ufs: LoadState<Vec<String>>,
    cities: LoadState<Vec<String>>,
    form_data: FormData,
    selected_uf: Option<String>,
    selected_city: Option<String>,
    selected_items: Vec<i64>,
    selected_position: Option<LatLng>,
    city_generation: u64,
    submission: SubmissionState,
    field_errors: HashMap<String, String>,
}

impl Default for PointForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PointForm {
    pub fn new() -> Self {
        Self {
            items: LoadState::Loading,
            ufs: LoadState::Loading,
            cities: LoadState::Loaded(Vec::new()),
            form_data: FormData::default(),
            selected_uf: None,
            selected_city: None,
            selected_items: Vec::new(),
            selected_position: None,
            city_generation: 0,
            submission: SubmissionState::Idle,
            field_errors: HashMap::new(),
        }
    }

    // ── Reference data ──────────────────────────────────

    pub fn items(&self) -> &LoadState<Vec<Item>> {
        &self.items
    }

    pub fn ufs(&self) -> &LoadState<Vec<String>> {
        &self.ufs
    }

    pub fn cities(&self) -> &LoadState<Vec<String>> {
        &self.cities
    }

    pub fn reload_items(&mut self) {
        self.items = LoadState::Loading;
    }

    pub fn reload_ufs(&mut self) {
        self.ufs = LoadState::Loading;
    }

    pub fn set_items(&mut self, result: Result<Vec<Item>, AppError>) {
        self.items = LoadState::from_result(result);
    }

    pub fn set_ufs(&mut self, result: Result<Vec<String>, AppError>) {
        self.ufs = LoadState::from_result(result);
    }

    // ── Text fields ─────────────────────────────────────

    pub fn form_data(&self) -> &FormData {
        &self.form_data
    }

    /// Overwrite one text field, leaving the others untouched.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.form_data.name = value,
            FormField::Email => self.form_data.email = value,
            FormField::Whatsapp => self.form_data.whatsapp = value,
        }
        self.field_errors.remove(field.as_str());
    }

    // ── Cascading state / city ──────────────────────────

    pub fn selected_uf(&self) -> Option<&str> {
        self.selected_uf.as_deref()
    }

    pub fn selected_city(&self) -> Option<&str> {
        self.selected_city.as_deref()
    }

    /// Change the selected state.
    ///
    /// The city selection and city list are always reset. Returns the city
    /// listing to fetch, or `None` when no state is selected.
    pub fn select_state(&mut self, uf: Option<String>) -> Option<CityRequest> {
        self.city_generation += 1;
        self.selected_uf = uf.filter(|code| !code.is_empty());
        self.selected_city = None;
        self.field_errors.remove("uf");

        match &self.selected_uf {
            Some(code) => {
                self.cities = LoadState::Loading;
                Some(CityRequest {
                    uf: code.clone(),
                    generation: self.city_generation,
                })
            }
            None => {
                self.cities = LoadState::Loaded(Vec::new());
                None
            }
        }
    }

    /// Record a city listing. Responses for a superseded state selection are
    /// dropped; returns whether the response was applied.
    pub fn apply_cities(
        &mut self,
        generation: u64,
        result: Result<Vec<String>, AppError>,
    ) -> bool {
        if generation != self.city_generation {
            return false;
        }
        self.cities = LoadState::from_result(result);
        true
    }

    /// Refetch the cities of the selected state after a failed listing.
    ///
    /// Any listing still in flight becomes stale. Returns `None` when no
    /// state is selected.
    pub fn reload_cities(&mut self) -> Option<CityRequest> {
        let uf = self.selected_uf.clone()?;
        self.city_generation += 1;
        self.cities = LoadState::Loading;
        Some(CityRequest {
            uf,
            generation: self.city_generation,
        })
    }

    /// Change the selected city. The name is not checked against the list.
    pub fn select_city(&mut self, city: Option<String>) {
        self.selected_city = city.filter(|name| !name.is_empty());
        self.field_errors.remove("city");
    }

    // ── Items ───────────────────────────────────────────

    pub fn selected_items(&self) -> &[i64] {
        &self.selected_items
    }

    pub fn is_item_selected(&self, id: i64) -> bool {
        self.selected_items.contains(&id)
    }

    /// Add `id` to the selection, or remove it if already present.
    pub fn toggle_item(&mut self, id: i64) {
        if let Some(pos) = self.selected_items.iter().position(|&i| i == id) {
            self.selected_items.remove(pos);
        } else {
            self.selected_items.push(id);
            self.field_errors.remove("items");
        }
    }

    // ── Map ─────────────────────────────────────────────

    pub fn selected_position(&self) -> Option<LatLng> {
        self.selected_position
    }

    pub fn select_position(&mut self, position: LatLng) {
        self.selected_position = Some(position);
        self.field_errors.remove(LOCATION_FIELD);
    }

    // ── Submission ──────────────────────────────────────

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    pub fn field_errors(&self) -> &HashMap<String, String> {
        &self.field_errors
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    /// Validate the current snapshot and move to `Submitting`.
    ///
    /// Returns the request body to send. Fails with `Conflict` while a
    /// submission is outstanding or after one succeeded, and with
    /// `ValidationError` (also stored per field) when the form is incomplete.
    pub fn begin_submit(&mut self) -> Result<CreatePointRequest, AppError> {
        match self.submission {
            SubmissionState::Submitting => {
                return Err(AppError::conflict("Envio em andamento"));
            }
            SubmissionState::Succeeded => {
                return Err(AppError::conflict("Ponto de coleta já cadastrado"));
            }
            SubmissionState::Idle | SubmissionState::Failed { .. } => {}
        }

        let request = CreatePointRequest {
            name: self.form_data.name.clone(),
            email: self.form_data.email.clone(),
            whatsapp: self.form_data.whatsapp.clone(),
            uf: self.selected_uf.clone().unwrap_or_default(),
            city: self.selected_city.clone().unwrap_or_default(),
            latitude: self.selected_position.map(|p| p.latitude()).unwrap_or_default(),
            longitude: self.selected_position.map(|p| p.longitude()).unwrap_or_default(),
            items: self.selected_items.clone(),
        };

        let mut field_errors = match request.validate() {
            Ok(()) => HashMap::new(),
            Err(errors) => AppError::from(errors).field_errors,
        };
        // Whitespace-only text counts as missing; the values are sent as typed.
        for (field, value, message) in [
            (FormField::Name, &request.name, "Informe o nome da entidade"),
            (FormField::Whatsapp, &request.whatsapp, "Informe o número de Whatsapp"),
        ] {
            if value.trim().is_empty() {
                field_errors.insert(field.as_str().to_string(), message.to_string());
            }
        }
        if self.selected_uf.is_none() {
            field_errors.insert("uf".to_string(), "Selecione uma UF".to_string());
        }
        if self.selected_city.is_none() {
            field_errors.insert("city".to_string(), "Selecione uma cidade".to_string());
        }
        if self.selected_position.is_none() {
            field_errors.insert(
                LOCATION_FIELD.to_string(),
                "Selecione o endereço no mapa".to_string(),
            );
        }

        if !field_errors.is_empty() {
            self.field_errors = field_errors.clone();
            return Err(AppError::validation("Validation failed", field_errors));
        }

        self.field_errors.clear();
        self.submission = SubmissionState::Submitting;
        Ok(request)
    }

    /// Record the outcome of the request started by [`Self::begin_submit`].
    /// Ignored unless a submission is outstanding.
    pub fn finish_submit(&mut self, result: Result<(), AppError>) {
        if !self.is_submitting() {
            return;
        }
        self.submission = match result {
            Ok(()) => SubmissionState::Succeeded,
            Err(e) => SubmissionState::Failed {
                message: e.friendly_message(),
                retryable: e.is_retryable(),
            },
        };
    }
}
