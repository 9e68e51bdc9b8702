use gloo_file::File as GlooFile;
use gloo_file::callbacks::FileReader;
use gloo_timers::callback::Interval;
use shared::{ApiError, FilterKind, ImageId, ImageSource, ModelChoice, Orientation, PredictResponse};
use web_sys::{HtmlVideoElement, MediaStream};
use yew::prelude::*;

mod api;
mod camera;
mod components;
mod config;
mod state;

use components::handlers::{self, OrientationProbe};
use components::info_tips::INFO_TIPS;
use components::{banner, controls, header, info_tips, preview_area, results, utils};
use state::AppState;

// Yew msg components
pub enum Msg {
    // Image acquisition
    FileSelected(GlooFile),
    ImageDecoded { data_url: String, source: ImageSource },
    OrientationMeasured(ImageId, Orientation),

    // Camera operations
    StartCamera,
    CameraReady(MediaStream),
    CameraFailed(String),
    StopCamera,
    CapturePhoto,

    // Controls
    SetModel(ModelChoice),
    ToggleFilters,
    SetFilter(FilterKind, f64),

    // Analysis operations
    Submit,
    PredictionFinished(ImageId, Result<PredictResponse, ApiError>),

    // Feedback operations
    FlagResult,
    FlagFinished(Result<(), ApiError>),

    // UI states
    Reset,
    TestAnotherImage,
    DismissWarning,
    AdvanceTip,
    SetError(Option<String>),
}

// Main component
pub struct Model {
    pub state: AppState,
    pub camera: Option<MediaStream>,
    pub video_ref: NodeRef,
    pub canvas_ref: NodeRef,
    pub file_reader: Option<FileReader>,
    pub orientation_probe: Option<OrientationProbe>,
    tip_timer: Option<Interval>,
}

// Yew component implementation
impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let tip_timer = Interval::new(5_000, move || {
            link.send_message(Msg::AdvanceTip);
        });

        Self {
            state: AppState::default(),
            camera: None,
            video_ref: NodeRef::default(),
            canvas_ref: NodeRef::default(),
            file_reader: None,
            orientation_probe: None,
            tip_timer: Some(tip_timer),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Image acquisition
            Msg::FileSelected(file) => handlers::handle_file_selected(self, ctx, file),
            Msg::ImageDecoded { data_url, source } => {
                handlers::acquire_image(self, ctx, data_url, source);
                true
            }
            Msg::OrientationMeasured(id, orientation) => {
                self.state.set_orientation(id, orientation)
            }

            // Camera operations
            Msg::StartCamera => handlers::handle_start_camera(self, ctx),
            Msg::CameraReady(stream) => handlers::handle_camera_ready(self, stream),
            Msg::CameraFailed(reason) => handlers::handle_camera_failed(self, reason),
            Msg::StopCamera => handlers::handle_stop_camera(self),
            Msg::CapturePhoto => handlers::handle_capture_photo(self, ctx),

            // Controls
            Msg::SetModel(model) => {
                self.state.set_model(model);
                true
            }
            Msg::ToggleFilters => {
                self.state.toggle_filters();
                true
            }
            Msg::SetFilter(kind, value) => {
                self.state.set_filter(kind, value);
                true
            }

            // Analysis operations
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::PredictionFinished(id, outcome) => {
                handlers::handle_prediction_finished(self, id, outcome)
            }

            // Feedback operations
            Msg::FlagResult => handlers::handle_flag_result(self, ctx),
            Msg::FlagFinished(outcome) => handlers::handle_flag_finished(self, outcome),

            // UI states
            Msg::Reset => handlers::handle_reset(self),
            Msg::TestAnotherImage => handlers::handle_test_another_image(self),
            Msg::DismissWarning => {
                self.state.dismiss_warning();
                true
            }
            Msg::AdvanceTip => {
                self.state.advance_tip(INFO_TIPS.len());
                true
            }
            Msg::SetError(error) => {
                self.state.set_error(error);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-shell">
                { banner::render_warning_banner(self, ctx) }
                <div class="container">
                    { header::render_header() }
                    { info_tips::render_info_tips(self) }

                    <main class="main-content">
                        <div class="analysis-grid">
                            { controls::render_controls(self, ctx) }
                            { preview_area::render_preview_area(self, ctx) }
                        </div>
                        { utils::render_error_message(self) }
                        { results::render_analysis_section(self, ctx) }
                    </main>

                    { header::render_about_section() }

                    <footer class="app-footer">
                        <p>{"Deepfake Detection | Fighting Misinformation with AI"}</p>
                    </footer>
                </div>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // The video element only exists while the camera is active, so the
        // stream gets wired up after the render that mounts it.
        if let (Some(stream), Some(video)) = (&self.camera, self.video_ref.cast::<HtmlVideoElement>())
        {
            if video.src_object().is_none() {
                camera::attach(stream, &video);
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(stream) = self.camera.take() {
            camera::shutdown(&stream, self.video_ref.cast::<HtmlVideoElement>().as_ref());
        }
        self.tip_timer = None;
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Deepfake detection UI starting...");
    yew::Renderer::<Model>::new().render();
}
