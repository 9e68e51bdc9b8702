use shared::{
    FilterKind, ImageFilters, ImageId, ImageSource, ModelChoice, Orientation, PredictResponse,
};

// Models
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedImage {
    pub id: ImageId,
    pub data_url: String,
    pub source: ImageSource,
    pub orientation: Orientation,
}

/// Per-image lifecycle, derived from the state fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    ImageLoaded,
    Processing,
    Resulted,
}

/// All transient UI state, owned by the root component and mutated only
/// through the transition methods below. Browser-resource handles (camera
/// stream, timers, reader callbacks) live on the component instead, keeping
/// this struct testable off the wasm target.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub image: Option<LoadedImage>,
    pub filters: ImageFilters,
    pub show_filters: bool,
    pub model: ModelChoice,
    pub processing: bool,
    pub result: Option<PredictResponse>,
    pub error: Option<String>,
    pub flag_notice: Option<String>,
    pub warning_banner: bool,
    pub info_tip: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            image: None,
            filters: ImageFilters::default(),
            show_filters: false,
            model: ModelChoice::default(),
            processing: false,
            result: None,
            error: None,
            flag_notice: None,
            warning_banner: true,
            info_tip: 0,
        }
    }
}

impl AppState {
    pub fn phase(&self) -> Phase {
        match (&self.image, self.processing, &self.result) {
            (None, _, _) => Phase::Empty,
            (Some(_), true, _) => Phase::Processing,
            (Some(_), false, Some(_)) => Phase::Resulted,
            (Some(_), false, None) => Phase::ImageLoaded,
        }
    }

    /// A freshly acquired image replaces whatever was current: any displayed
    /// result, in-flight processing marker and notices are dropped.
    /// Orientation starts as landscape until the decode probe reports back.
    pub fn acquire_image(&mut self, id: ImageId, data_url: String, source: ImageSource) {
        self.image = Some(LoadedImage {
            id,
            data_url,
            source,
            orientation: Orientation::Landscape,
        });
        self.result = None;
        self.processing = false;
        self.error = None;
        self.flag_notice = None;
    }

    /// Applies a measured orientation, unless the probe outlived its image.
    pub fn set_orientation(&mut self, id: ImageId, orientation: Orientation) -> bool {
        match &mut self.image {
            Some(image) if image.id == id => {
                image.orientation = orientation;
                true
            }
            _ => false,
        }
    }

    pub fn is_current_image(&self, id: ImageId) -> bool {
        self.image.as_ref().is_some_and(|image| image.id == id)
    }

    /// The submit action is only offered while an image is loaded and neither
    /// a request is in flight nor a result is displayed.
    pub fn can_submit(&self) -> bool {
        self.image.is_some() && !self.processing && self.result.is_none()
    }

    pub fn begin_processing(&mut self) {
        self.processing = true;
        self.error = None;
        self.flag_notice = None;
    }

    /// Stores a successful verdict. Responses tagged with a superseded image
    /// id are discarded and leave the state untouched.
    pub fn store_result(&mut self, id: ImageId, response: PredictResponse) -> bool {
        if !self.is_current_image(id) {
            return false;
        }
        self.result = Some(response);
        self.processing = false;
        true
    }

    /// Records a failed prediction: processing ends without a result so the
    /// submit action becomes available again.
    pub fn fail_processing(&mut self, id: ImageId, message: String) -> bool {
        if !self.is_current_image(id) {
            return false;
        }
        self.processing = false;
        self.error = Some(message);
        true
    }

    pub fn set_filter(&mut self, kind: FilterKind, value: f64) {
        self.filters.set(kind, value);
    }

    pub fn toggle_filters(&mut self) {
        self.show_filters = !self.show_filters;
    }

    pub fn set_model(&mut self, model: ModelChoice) {
        self.model = model;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn set_flag_notice(&mut self, notice: String) {
        self.flag_notice = Some(notice);
    }

    /// Clears image, result and processing; filter values survive.
    pub fn reset(&mut self) {
        self.image = None;
        self.result = None;
        self.processing = false;
        self.error = None;
        self.flag_notice = None;
    }

    /// Reset plus restoring the default filter values.
    pub fn test_another_image(&mut self) {
        self.reset();
        self.filters = ImageFilters::default();
    }

    pub fn dismiss_warning(&mut self) {
        self.warning_banner = false;
    }

    pub fn advance_tip(&mut self, tip_count: usize) {
        self.info_tip = (self.info_tip + 1) % tip_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(is_real: bool, probability: f64, model: &str) -> PredictResponse {
        PredictResponse {
            is_real,
            probability,
            model: model.to_owned(),
            id: None,
        }
    }

    fn loaded() -> (AppState, ImageId) {
        let mut state = AppState::default();
        let id = ImageId::new();
        state.acquire_image(id, "data:image/png;base64,AAAA".into(), ImageSource::Upload);
        (state, id)
    }

    #[test]
    fn starts_empty_with_neutral_filters() {
        let state = AppState::default();
        assert_eq!(state.phase(), Phase::Empty);
        assert_eq!(state.filters, ImageFilters::default());
        assert_eq!(state.model, ModelChoice::CustomCnn);
        assert!(state.warning_banner);
        assert!(!state.can_submit());
    }

    #[test]
    fn acquisition_moves_to_image_loaded() {
        let (state, _) = loaded();
        assert_eq!(state.phase(), Phase::ImageLoaded);
        assert!(state.can_submit());
        assert_eq!(
            state.image.as_ref().unwrap().orientation,
            Orientation::Landscape
        );
    }

    #[test]
    fn orientation_probe_updates_only_the_current_image() {
        let (mut state, id) = loaded();
        assert!(state.set_orientation(id, Orientation::Portrait));
        assert_eq!(
            state.image.as_ref().unwrap().orientation,
            Orientation::Portrait
        );

        let stale = ImageId::new();
        assert!(!state.set_orientation(stale, Orientation::Landscape));
        assert_eq!(
            state.image.as_ref().unwrap().orientation,
            Orientation::Portrait
        );
    }

    #[test]
    fn submit_gating_follows_the_lifecycle() {
        let (mut state, id) = loaded();
        assert!(state.can_submit());

        state.begin_processing();
        assert_eq!(state.phase(), Phase::Processing);
        assert!(!state.can_submit());

        assert!(state.store_result(id, response(true, 97.2, "CustomCNN")));
        assert_eq!(state.phase(), Phase::Resulted);
        assert!(!state.can_submit());
    }

    #[test]
    fn successful_prediction_is_stored() {
        let (mut state, id) = loaded();
        state.begin_processing();
        assert!(state.store_result(id, response(true, 97.2, "CustomCNN")));

        let result = state.result.as_ref().unwrap();
        assert!(result.is_real);
        assert_eq!(result.probability, 97.2);
        assert_eq!(result.model, "CustomCNN");
        assert!(!state.processing);
    }

    #[test]
    fn failed_prediction_allows_retry() {
        let (mut state, id) = loaded();
        state.begin_processing();
        assert!(state.fail_processing(id, "Server error: 500 - model unavailable".into()));

        assert_eq!(state.phase(), Phase::ImageLoaded);
        assert!(state.result.is_none());
        assert!(state.can_submit());
        assert_eq!(
            state.error.as_deref(),
            Some("Server error: 500 - model unavailable")
        );
    }

    #[test]
    fn new_image_clears_any_previous_result() {
        let (mut state, id) = loaded();
        state.begin_processing();
        state.store_result(id, response(false, 88.0, "Xception71"));

        state.acquire_image(ImageId::new(), "data:image/jpeg;base64,BBBB".into(), ImageSource::Camera);
        assert!(state.result.is_none());
        assert_eq!(state.phase(), Phase::ImageLoaded);
        assert!(state.image.as_ref().unwrap().source.is_camera());
    }

    #[test]
    fn responses_for_superseded_images_are_discarded() {
        let (mut state, first) = loaded();
        state.begin_processing();

        let second = ImageId::new();
        state.acquire_image(second, "data:image/png;base64,BBBB".into(), ImageSource::Upload);

        assert!(!state.store_result(first, response(true, 60.0, "CustomCNN")));
        assert!(state.result.is_none());
        assert_eq!(state.phase(), Phase::ImageLoaded);

        assert!(!state.fail_processing(first, "Network error: timed out".into()));
        assert!(state.error.is_none());
    }

    #[test]
    fn filter_adjustments_clamp_and_persist_through_reset() {
        let (mut state, _) = loaded();
        state.set_filter(FilterKind::Brightness, 300.0);
        state.set_filter(FilterKind::Contrast, -40.0);
        assert_eq!(state.filters.brightness, 200.0);
        assert_eq!(state.filters.contrast, 0.0);

        state.reset();
        assert_eq!(state.phase(), Phase::Empty);
        assert_eq!(state.filters.brightness, 200.0);
        assert_eq!(state.filters.contrast, 0.0);
    }

    #[test]
    fn test_another_image_restores_default_filters() {
        let (mut state, id) = loaded();
        state.set_filter(FilterKind::Saturation, 10.0);
        state.begin_processing();
        state.store_result(id, response(true, 70.0, "CustomCNN"));

        state.test_another_image();
        assert_eq!(state.phase(), Phase::Empty);
        assert!(state.result.is_none());
        assert!(!state.processing);
        assert_eq!(state.filters, ImageFilters::default());
    }

    #[test]
    fn flag_notice_is_dropped_with_its_result() {
        let (mut state, id) = loaded();
        state.begin_processing();
        state.store_result(id, response(false, 88.0, "Xception71"));
        state.set_flag_notice("Result has been flagged for review.".into());

        state.acquire_image(ImageId::new(), "data:image/png;base64,CCCC".into(), ImageSource::Upload);
        assert!(state.flag_notice.is_none());
    }

    #[test]
    fn info_tips_wrap_around() {
        let mut state = AppState::default();
        for _ in 0..5 {
            state.advance_tip(5);
        }
        assert_eq!(state.info_tip, 0);
        state.advance_tip(5);
        assert_eq!(state.info_tip, 1);
    }

    #[test]
    fn warning_banner_dismisses() {
        let mut state = AppState::default();
        state.dismiss_warning();
        assert!(!state.warning_banner);
    }
}
