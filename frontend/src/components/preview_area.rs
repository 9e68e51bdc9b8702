use shared::Orientation;
use yew::prelude::*;

use crate::state::LoadedImage;
use crate::{Model, Msg};

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="preview-column">
            {
                if model.camera.is_some() {
                    render_live_camera(model, ctx)
                } else if let Some(image) = &model.state.image {
                    render_selected_image(model, ctx, image)
                } else {
                    render_placeholder()
                }
            }
            <canvas ref={model.canvas_ref.clone()} class="capture-canvas" style="display: none;" />
        </div>
    }
}

fn render_live_camera(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="camera-preview">
            <video
                ref={model.video_ref.clone()}
                autoplay=true
                playsinline=true
                class="camera-feed"
            />
            <button
                class="capture-btn"
                title="Capture photo"
                onclick={ctx.link().callback(|_| Msg::CapturePhoto)}
            >
                <i class="fa-solid fa-camera"></i>
            </button>
        </div>
    }
}

fn render_selected_image(model: &Model, ctx: &Context<Model>, image: &LoadedImage) -> Html {
    let orientation_class = match image.orientation {
        Orientation::Portrait => "preview-portrait",
        Orientation::Landscape => "preview-landscape",
    };

    html! {
        <div class="image-preview">
            <img
                class={classes!("preview-image", orientation_class)}
                src={image.data_url.clone()}
                alt="Selected image"
                style={format!("filter: {};", model.state.filters.css())}
            />
            <button
                class="remove-btn"
                title="Remove this image"
                onclick={ctx.link().callback(|_| Msg::Reset)}
            >
                <i class="fa-solid fa-times"></i>
            </button>
            {
                if model.state.processing {
                    html! { <div class="scan-overlay"><div class="scanline"></div></div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn render_placeholder() -> Html {
    html! {
        <div class="preview-placeholder">
            <i class="fa-solid fa-expand"></i>
            <p>{"Upload an image or use camera"}</p>
        </div>
    }
}
