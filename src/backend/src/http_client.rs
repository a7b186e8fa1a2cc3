use crate::services::alarm::AlarmResult;
use actix_web::HttpResponse;
use alarm_widget_core::WidgetConfiguration;
use anyhow::{Context, Result, ensure};
use log::error;
use reqwest::Response;
use serde::Serialize;

/// Trait for converting service results into HTTP responses
pub trait ServiceResultResponse {
    fn into_response(self) -> HttpResponse;
}

impl ServiceResultResponse for WidgetConfiguration {
    fn into_response(self) -> HttpResponse {
        json_response(&self, "WidgetConfiguration")
    }
}

impl ServiceResultResponse for AlarmResult {
    fn into_response(self) -> HttpResponse {
        json_response(&self, "AlarmResult")
    }
}

fn json_response<T: Serialize>(value: &T, type_name: &str) -> HttpResponse {
    match serde_json::to_string(value) {
        Ok(json) => HttpResponse::Ok()
            .content_type("application/json")
            .body(json),
        Err(e) => {
            error!("failed to serialize {type_name}: {e:#}");
            HttpResponse::InternalServerError().body("failed to serialize response")
        }
    }
}

/// Handle Result and convert data to Response
///
/// Successful results are turned into their response, errors are logged and
/// answered with `500 Internal Server Error` carrying the error text.
pub fn handle_service_result<T>(result: Result<T>, operation: &str) -> HttpResponse
where
    T: ServiceResultResponse,
{
    match result {
        Ok(data) => data.into_response(),
        Err(e) => {
            error!("{operation} failed: {e:#}");
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

/// Handle HTTP response by checking status and extracting body
///
/// # Returns
/// * `Ok(String)` - The response body if the status is successful
/// * `Err` - If the status is not successful or reading the body fails
pub async fn handle_http_response(res: Response, context_msg: &str) -> Result<String> {
    let status = res.status();
    let body = res.text().await.context("failed to read response body")?;

    ensure!(
        status.is_success(),
        "{context_msg} failed with status {status} and body: {body}"
    );

    Ok(body)
}
