use shared_types::AppError;

/// Convert a reqwest::Error into an AppError.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if let Some(status) = err.status() {
        return AppError::server(status.as_u16(), err.to_string());
    }
    if err.is_decode() {
        return AppError::network(format!("Invalid response body: {}", err));
    }
    AppError::network(err.to_string())
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}

/// Pass successful responses through; turn any other status into a
/// `ServerError` carrying the response body.
pub async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AppError::server(status.as_u16(), body))
}
