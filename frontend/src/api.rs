//! The single service module for the two backend endpoints.

use gloo_net::http::Request;
use shared::{ApiError, FlagRequest, ImageFilters, ModelChoice, PredictRequest, PredictResponse};

use crate::config;

/// Strips the data-URI prefix the browser readers produce; the backend wants
/// the bare base64 payload.
pub fn base64_payload(image_data: &str) -> &str {
    if image_data.starts_with("data:image") {
        image_data
            .split_once(',')
            .map_or(image_data, |(_, payload)| payload)
    } else {
        image_data
    }
}

pub fn predict_body(
    image_data: &str,
    model: ModelChoice,
    filters: Option<ImageFilters>,
    is_camera_input: bool,
) -> PredictRequest {
    PredictRequest {
        image: base64_payload(image_data).to_owned(),
        model,
        filters,
        is_camera_input,
    }
}

pub async fn predict(
    image_data: &str,
    model: ModelChoice,
    filters: Option<ImageFilters>,
    is_camera_input: bool,
) -> Result<PredictResponse, ApiError> {
    let body = predict_body(image_data, model, filters, is_camera_input);
    log::info!("Sending prediction request (model: {model}, camera input: {is_camera_input})");

    let response = Request::post(&config::predict_url())
        .json(&body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let detail = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, detail });
    }

    response
        .json::<PredictResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// The flag response payload is opaque; only the status matters.
pub async fn flag(request: &FlagRequest) -> Result<(), ApiError> {
    let response = Request::post(&config::flag_url())
        .json(request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let detail = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, detail });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_uri_prefixes_are_stripped() {
        assert_eq!(base64_payload("data:image/png;base64,iVBORw0KGgo"), "iVBORw0KGgo");
        assert_eq!(base64_payload("data:image/jpeg;base64,/9j/4AAQ"), "/9j/4AAQ");
    }

    #[test]
    fn bare_base64_passes_through() {
        assert_eq!(base64_payload("iVBORw0KGgo"), "iVBORw0KGgo");
        assert_eq!(base64_payload("data:image-without-comma"), "data:image-without-comma");
    }

    #[test]
    fn predict_body_carries_the_source_flag_and_model_id() {
        let body = predict_body(
            "data:image/jpeg;base64,/9j/4AAQ",
            ModelChoice::Xception71,
            None,
            true,
        );
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["image"], json!("/9j/4AAQ"));
        assert_eq!(value["model"], json!("Xception71"));
        assert!(value["filters"].is_null());
        assert_eq!(value["isCameraInput"], json!(true));
    }

    #[test]
    fn predict_body_forwards_filters_as_metadata() {
        let mut filters = ImageFilters::default();
        filters.set(shared::FilterKind::Brightness, 120.0);
        let body = predict_body("AAAA", ModelChoice::CustomCnn, Some(filters), false);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["filters"]["brightness"], json!(120.0));
        assert_eq!(value["model"], json!("CustomCNN"));
    }
}
