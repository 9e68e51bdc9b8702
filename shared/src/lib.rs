use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::{Display as WireName, EnumString};
use uuid::Uuid;

/// Identifies a single image acquisition. Prediction requests carry the id of
/// the image they were issued for, so responses that outlive their image can
/// be told apart from current ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct ImageId(Uuid);

impl ImageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the current image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ImageSource {
    #[display(fmt = "upload")]
    Upload,
    #[display(fmt = "camera")]
    Camera,
}

impl ImageSource {
    pub fn is_camera(self) -> bool {
        matches!(self, Self::Camera)
    }
}

/// Landscape iff width >= height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Orientation {
    #[display(fmt = "landscape")]
    Landscape,
    #[display(fmt = "portrait")]
    Portrait,
}

impl Orientation {
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width >= height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}

/// Backend model selector. The strum/serde names are the wire-level model ids.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, WireName, EnumString,
)]
pub enum ModelChoice {
    #[default]
    #[serde(rename = "CustomCNN")]
    #[strum(serialize = "CustomCNN")]
    CustomCnn,
    #[serde(rename = "Xception71")]
    #[strum(serialize = "Xception71")]
    Xception71,
}

impl ModelChoice {
    pub const ALL: [ModelChoice; 2] = [ModelChoice::CustomCnn, ModelChoice::Xception71];

    /// Text for the model dropdown.
    pub fn option_label(self) -> &'static str {
        match self {
            Self::CustomCnn => "Custom CNN Model (Faster)",
            Self::Xception71 => "Xception71 Model (More Accurate)",
        }
    }

    /// Human-readable name shown in the results panel.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::CustomCnn => "Custom CNN",
            Self::Xception71 => "Xception71",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Self::CustomCnn => "Optimized",
            Self::Xception71 => "High Precision",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Self::CustomCnn => {
                "Our custom CNN model is optimized for speed while maintaining high accuracy."
            }
            Self::Xception71 => {
                "Xception71 offers the highest precision for detecting sophisticated deepfakes."
            }
        }
    }
}

/// One of the three display-only adjustment sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, WireName)]
pub enum FilterKind {
    Brightness,
    Contrast,
    Saturation,
}

impl FilterKind {
    pub const ALL: [FilterKind; 3] = [
        FilterKind::Brightness,
        FilterKind::Contrast,
        FilterKind::Saturation,
    ];
}

/// Percentage values for the preview-only CSS filters. Values are clamped to
/// [0, 200] on write; 100 is the neutral setting for all three.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ImageFilters {
    pub brightness: f64,
    pub contrast: f64,
    pub saturation: f64,
}

impl Default for ImageFilters {
    fn default() -> Self {
        Self {
            brightness: Self::NEUTRAL,
            contrast: Self::NEUTRAL,
            saturation: Self::NEUTRAL,
        }
    }
}

impl ImageFilters {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 200.0;
    pub const NEUTRAL: f64 = 100.0;

    pub fn get(&self, kind: FilterKind) -> f64 {
        match kind {
            FilterKind::Brightness => self.brightness,
            FilterKind::Contrast => self.contrast,
            FilterKind::Saturation => self.saturation,
        }
    }

    pub fn set(&mut self, kind: FilterKind, value: f64) {
        let value = value.clamp(Self::MIN, Self::MAX);
        match kind {
            FilterKind::Brightness => self.brightness = value,
            FilterKind::Contrast => self.contrast = value,
            FilterKind::Saturation => self.saturation = value,
        }
    }

    /// CSS `filter` property applied to the preview element.
    pub fn css(&self) -> String {
        format!(
            "brightness({}%) contrast({}%) saturate({}%)",
            self.brightness, self.contrast, self.saturation
        )
    }
}

/// Body of `POST {API_URL}/predict`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PredictRequest {
    pub image: String,
    pub model: ModelChoice,
    pub filters: Option<ImageFilters>,
    #[serde(rename = "isCameraInput")]
    pub is_camera_input: bool,
}

/// Successful predict response. `id` is a backend contract addition and may be
/// absent from older deployments, so it is tolerated as optional.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PredictResponse {
    #[serde(rename = "isReal")]
    pub is_real: bool,
    pub probability: f64,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Legacy placeholder sent when the backend did not assign a prediction id.
pub const FALLBACK_FLAG_ID: &str = "temp-id";

pub const FLAG_FEEDBACK: &str = "Incorrect prediction";

/// Body of `POST {API_URL}/flag`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlagRequest {
    pub id: String,
    pub feedback: String,
}

impl FlagRequest {
    /// Flags a displayed verdict, threading through the server-assigned
    /// prediction id when one exists.
    pub fn for_prediction(prediction: &PredictResponse) -> Self {
        Self {
            id: prediction
                .id
                .clone()
                .unwrap_or_else(|| FALLBACK_FLAG_ID.to_owned()),
            feedback: FLAG_FEEDBACK.to_owned(),
        }
    }
}

/// Failure of one of the two service calls, as surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ApiError {
    #[display(fmt = "Network error: {}", _0)]
    Network(String),
    #[display(fmt = "Server error: {} - {}", status, detail)]
    Status { status: u16, detail: String },
    #[display(fmt = "Failed to parse response: {}", _0)]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn orientation_is_portrait_iff_height_exceeds_width() {
        assert_eq!(Orientation::from_dimensions(200, 100), Orientation::Landscape);
        assert_eq!(Orientation::from_dimensions(100, 200), Orientation::Portrait);
        assert_eq!(Orientation::from_dimensions(128, 128), Orientation::Landscape);
        assert_eq!(Orientation::Portrait.to_string(), "portrait");
    }

    #[test]
    fn filters_default_to_neutral() {
        let filters = ImageFilters::default();
        assert_eq!(filters.brightness, 100.0);
        assert_eq!(filters.contrast, 100.0);
        assert_eq!(filters.saturation, 100.0);
    }

    #[test]
    fn filter_writes_are_clamped() {
        let mut filters = ImageFilters::default();
        filters.set(FilterKind::Brightness, -5.0);
        assert_eq!(filters.brightness, 0.0);
        filters.set(FilterKind::Contrast, 999.0);
        assert_eq!(filters.contrast, 200.0);
        filters.set(FilterKind::Saturation, 150.0);
        assert_eq!(filters.get(FilterKind::Saturation), 150.0);
    }

    #[test]
    fn filters_render_as_css() {
        let mut filters = ImageFilters::default();
        filters.set(FilterKind::Saturation, 40.0);
        assert_eq!(filters.css(), "brightness(100%) contrast(100%) saturate(40%)");
    }

    #[test]
    fn model_choice_uses_backend_ids_on_the_wire() {
        assert_eq!(ModelChoice::CustomCnn.to_string(), "CustomCNN");
        assert_eq!(ModelChoice::Xception71.to_string(), "Xception71");
        assert_eq!("CustomCNN".parse(), Ok(ModelChoice::CustomCnn));
        assert_eq!("Xception71".parse(), Ok(ModelChoice::Xception71));
        assert!("resnet".parse::<ModelChoice>().is_err());

        let value = serde_json::to_value(ModelChoice::Xception71).unwrap();
        assert_eq!(value, json!("Xception71"));
    }

    #[test]
    fn predict_request_wire_shape() {
        let request = PredictRequest {
            image: "AAAA".into(),
            model: ModelChoice::CustomCnn,
            filters: Some(ImageFilters::default()),
            is_camera_input: true,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "image": "AAAA",
                "model": "CustomCNN",
                "filters": { "brightness": 100.0, "contrast": 100.0, "saturation": 100.0 },
                "isCameraInput": true,
            })
        );
    }

    #[test]
    fn absent_filters_serialize_as_null() {
        let request = PredictRequest {
            image: "AAAA".into(),
            model: ModelChoice::Xception71,
            filters: None,
            is_camera_input: false,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value["filters"].is_null());
        assert_eq!(value["isCameraInput"], json!(false));
    }

    #[test]
    fn predict_response_parses_with_and_without_id() {
        let bare: PredictResponse =
            serde_json::from_value(json!({ "isReal": true, "probability": 97.2, "model": "CustomCNN" }))
                .unwrap();
        assert!(bare.is_real);
        assert_eq!(bare.probability, 97.2);
        assert_eq!(bare.id, None);

        let tagged: PredictResponse = serde_json::from_value(json!({
            "isReal": false,
            "probability": 88.0,
            "model": "Xception71",
            "id": "pred-42",
        }))
        .unwrap();
        assert!(!tagged.is_real);
        assert_eq!(tagged.id.as_deref(), Some("pred-42"));
    }

    #[test]
    fn flag_request_threads_the_prediction_id_through() {
        let prediction = PredictResponse {
            is_real: false,
            probability: 88.0,
            model: "Xception71".into(),
            id: Some("pred-42".into()),
        };
        let request = FlagRequest::for_prediction(&prediction);
        assert_eq!(request.id, "pred-42");
        assert_eq!(request.feedback, FLAG_FEEDBACK);
    }

    #[test]
    fn flag_request_falls_back_to_the_placeholder_id() {
        let prediction = PredictResponse {
            is_real: true,
            probability: 51.0,
            model: "CustomCNN".into(),
            id: None,
        };
        assert_eq!(FlagRequest::for_prediction(&prediction).id, FALLBACK_FLAG_ID);
    }

    #[test]
    fn api_errors_render_their_detail() {
        let error = ApiError::Status {
            status: 500,
            detail: "model unavailable".into(),
        };
        assert_eq!(error.to_string(), "Server error: 500 - model unavailable");
        assert_eq!(
            ApiError::Network("timed out".into()).to_string(),
            "Network error: timed out"
        );
    }

    #[test]
    fn image_ids_are_unique_per_acquisition() {
        assert_ne!(ImageId::new(), ImageId::new());
    }
}
