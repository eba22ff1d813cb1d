// src/api/parser.rs
//! Turns raw HTTP bodies into wire types, mapping API errors into `AppError`.

use super::client::ApiResponse;
use super::responses::{ApiDescriptor, PrismicErrorBody, SearchPage};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, PrismicErrorCode};
use reqwest::StatusCode;

/// Parse any content API response.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success_body(&result.data, &result.url)
    } else {
        parse_error_body(&result.data, result.status, &result.url)
    }
}

fn parse_success_body<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse(format!("{} (body: {})", e, preview(body)))
    })
}

fn parse_error_body<T>(body: &str, status: StatusCode, url: &str) -> Result<T, AppError> {
    if let Ok(error) = serde_json::from_str::<PrismicErrorBody>(body) {
        if let Some(code) = error.code() {
            return Err(AppError::PrismicService {
                code: PrismicErrorCode::from_api_response(code),
                message: error.message.clone().unwrap_or_else(|| code.to_string()),
                status,
            });
        }
    }

    Err(AppError::PrismicService {
        code: PrismicErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}", status, url),
        status,
    })
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let head: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", head)
    } else {
        body.to_string()
    }
}

/// Parse a page of search results.
pub fn parse_search_page(result: ApiResponse<String>) -> Result<SearchPage, AppError> {
    parse_api_response(result)
}

/// Parse the API root descriptor and pick its master ref.
pub fn parse_master_ref(result: ApiResponse<String>) -> Result<String, AppError> {
    let descriptor: ApiDescriptor = parse_api_response(result)?;
    descriptor
        .master_ref()
        .map(|r| r.reference.clone())
        .ok_or(AppError::MissingMasterRef)
}
