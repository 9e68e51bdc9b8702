use gloo_events::EventListener;
use gloo_file::File as GlooFile;
use gloo_file::callbacks::read_as_data_url;
use shared::{ApiError, FlagRequest, ImageId, ImageSource, Orientation, PredictResponse};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlCanvasElement, HtmlImageElement, HtmlVideoElement, MediaStream};
use yew::prelude::*;

use crate::{Model, Msg, api, camera};

/// Keeps the decoding `<img>` and its load listener alive until the browser
/// reports the image's natural dimensions.
pub struct OrientationProbe {
    _image: HtmlImageElement,
    _listener: EventListener,
}

fn start_orientation_probe(ctx: &Context<Model>, id: ImageId, data_url: &str) -> OrientationProbe {
    let image = HtmlImageElement::new().expect("failed to create image element");

    let link = ctx.link().clone();
    let probe = image.clone();
    let listener = EventListener::once(&image, "load", move |_| {
        let orientation =
            Orientation::from_dimensions(probe.natural_width(), probe.natural_height());
        link.send_message(Msg::OrientationMeasured(id, orientation));
    });
    image.set_src(data_url);

    OrientationProbe {
        _image: image,
        _listener: listener,
    }
}

/// Installs a freshly decoded image as the current one and kicks off its
/// orientation probe. Shared by the upload and camera-capture paths.
pub fn acquire_image(model: &mut Model, ctx: &Context<Model>, data_url: String, source: ImageSource) {
    let id = ImageId::new();
    model.orientation_probe = Some(start_orientation_probe(ctx, id, &data_url));
    model.state.acquire_image(id, data_url, source);
    model.file_reader = None;
}

pub fn handle_file_selected(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    if !file.raw_mime_type().starts_with("image/") {
        log::warn!("Skipping non-image file: {}", file.name());
        model
            .state
            .set_error(Some(format!("Unsupported file type: {}", file.name())));
        return true;
    }

    model.state.set_error(None);
    let link = ctx.link().clone();
    model.file_reader = Some(read_as_data_url(&file, move |outcome| match outcome {
        Ok(data_url) => link.send_message(Msg::ImageDecoded {
            data_url,
            source: ImageSource::Upload,
        }),
        Err(error) => {
            link.send_message(Msg::SetError(Some(format!("Failed to read file: {error}"))))
        }
    }));
    true
}

pub fn handle_start_camera(model: &mut Model, ctx: &Context<Model>) -> bool {
    if model.camera.is_some() {
        return false;
    }

    let link = ctx.link().clone();
    spawn_local(async move {
        match camera::open().await {
            Ok(stream) => link.send_message(Msg::CameraReady(stream)),
            Err(reason) => link.send_message(Msg::CameraFailed(reason)),
        }
    });
    false
}

pub fn handle_camera_ready(model: &mut Model, stream: MediaStream) -> bool {
    model.camera = Some(stream);
    model.state.set_error(None);
    true
}

pub fn handle_camera_failed(model: &mut Model, reason: String) -> bool {
    log::error!("Error accessing camera: {reason}");
    model.state.set_error(Some(format!(
        "Failed to access the camera: {reason}. Please check your permissions."
    )));
    true
}

pub fn handle_stop_camera(model: &mut Model) -> bool {
    match model.camera.take() {
        Some(stream) => {
            camera::shutdown(&stream, model.video_ref.cast::<HtmlVideoElement>().as_ref());
            true
        }
        None => false,
    }
}

pub fn handle_capture_photo(model: &mut Model, ctx: &Context<Model>) -> bool {
    let (Some(video), Some(canvas)) = (
        model.video_ref.cast::<HtmlVideoElement>(),
        model.canvas_ref.cast::<HtmlCanvasElement>(),
    ) else {
        return false;
    };

    match camera::capture_frame(&video, &canvas) {
        Ok(data_url) => {
            handle_stop_camera(model);
            acquire_image(model, ctx, data_url, ImageSource::Camera);
        }
        Err(reason) => {
            log::error!("Photo capture failed: {reason}");
            model
                .state
                .set_error(Some(format!("Failed to capture photo: {reason}")));
        }
    }
    true
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    if !model.state.can_submit() {
        return false;
    }
    let Some(image) = model.state.image.clone() else {
        return false;
    };

    model.state.begin_processing();

    let model_choice = model.state.model;
    let filters = Some(model.state.filters);
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome =
            api::predict(&image.data_url, model_choice, filters, image.source.is_camera()).await;
        link.send_message(Msg::PredictionFinished(image.id, outcome));
    });
    true
}

pub fn handle_prediction_finished(
    model: &mut Model,
    id: ImageId,
    outcome: Result<PredictResponse, ApiError>,
) -> bool {
    let applied = match outcome {
        Ok(response) => model.state.store_result(id, response),
        Err(error) => {
            log::error!("Prediction failed: {error}");
            model.state.fail_processing(id, error.to_string())
        }
    };

    if !applied {
        log::warn!("Discarding prediction outcome for a superseded image");
    }
    applied
}

pub fn handle_flag_result(model: &mut Model, ctx: &Context<Model>) -> bool {
    let Some(result) = &model.state.result else {
        return false;
    };

    let request = FlagRequest::for_prediction(result);
    let link = ctx.link().clone();
    spawn_local(async move {
        link.send_message(Msg::FlagFinished(api::flag(&request).await));
    });
    false
}

pub fn handle_flag_finished(model: &mut Model, outcome: Result<(), ApiError>) -> bool {
    match outcome {
        Ok(()) => model.state.set_flag_notice(
            "Result has been flagged for review. Thank you for your feedback!".to_owned(),
        ),
        Err(error) => {
            log::error!("Flagging failed: {error}");
            model
                .state
                .set_flag_notice(format!("Failed to flag the result: {error}"));
        }
    }
    true
}

pub fn handle_reset(model: &mut Model) -> bool {
    model.state.reset();
    model.orientation_probe = None;
    model.file_reader = None;
    true
}

pub fn handle_test_another_image(model: &mut Model) -> bool {
    model.state.test_another_image();
    model.orientation_probe = None;
    model.file_reader = None;
    true
}
