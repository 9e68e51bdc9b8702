use gloo_file::File as GlooFile;
use shared::{FilterKind, ImageFilters, ModelChoice};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::utils::{click_element_by_id, debounce};
use crate::{Model, Msg};

pub fn render_controls(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="controls-column">
            <div class="controls-heading">
                <i class="fa-solid fa-eye"></i>
                <h2>{"Image Analysis"}</h2>
            </div>

            { render_acquisition_buttons(model, ctx) }
            { render_file_input(ctx) }
            { render_model_select(model, ctx) }
            { render_filter_toggle(model, ctx) }
            { if model.state.show_filters { render_filter_sliders(model, ctx) } else { html! {} } }
        </div>
    }
}

fn render_acquisition_buttons(model: &Model, ctx: &Context<Model>) -> Html {
    let camera_active = model.camera.is_some();
    let camera_click = ctx.link().callback(move |_| {
        if camera_active {
            Msg::StopCamera
        } else {
            Msg::StartCamera
        }
    });

    html! {
        <div class="acquisition-buttons">
            <button
                id="upload-button"
                class="upload-btn"
                onclick={debounce(300, || click_element_by_id("file-input"))}
            >
                <i class="fa-solid fa-upload"></i>{" Upload Image"}
            </button>
            <button class="camera-btn" onclick={camera_click}>
                <i class="fa-solid fa-camera"></i>
                { if camera_active { " Stop Camera" } else { " Use Camera" } }
            </button>
        </div>
    }
}

fn render_file_input(ctx: &Context<Model>) -> Html {
    let handle_change = ctx.link().callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input
            .files()
            .and_then(|files| files.item(0))
            .map(GlooFile::from);

        input.set_value("");

        match file {
            Some(file) => Msg::FileSelected(file),
            None => Msg::SetError(Some("No file selected.".into())),
        }
    });

    html! {
        <input
            type="file"
            id="file-input"
            accept="image/*"
            style="display: none;"
            onchange={handle_change}
        />
    }
}

fn render_model_select(model: &Model, ctx: &Context<Model>) -> Html {
    let handle_change = ctx.link().callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetModel(select.value().parse().unwrap_or_default())
    });

    html! {
        <select class="model-select" onchange={handle_change}>
            { for ModelChoice::ALL.iter().map(|choice| html! {
                <option value={choice.to_string()} selected={model.state.model == *choice}>
                    { choice.option_label() }
                </option>
            }) }
        </select>
    }
}

fn render_filter_toggle(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <button class="filter-toggle" onclick={ctx.link().callback(|_| Msg::ToggleFilters)}>
            <i class="fa-solid fa-sliders"></i>
            { if model.state.show_filters { " Hide Image Adjustments" } else { " Show Image Adjustments" } }
        </button>
    }
}

fn render_filter_sliders(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="filter-panel">
            { for FilterKind::ALL.iter().map(|kind| render_filter_slider(model, ctx, *kind)) }
        </div>
    }
}

fn render_filter_slider(model: &Model, ctx: &Context<Model>, kind: FilterKind) -> Html {
    let value = model.state.filters.get(kind);
    let oninput = ctx.link().callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let value = input.value().parse().unwrap_or(ImageFilters::NEUTRAL);
        Msg::SetFilter(kind, value)
    });

    html! {
        <div class="filter-row">
            <label class="filter-label">
                <span>{ kind.to_string() }</span>
                <span class="filter-value">{ format!("{value}%") }</span>
            </label>
            <input
                type="range"
                min={ImageFilters::MIN.to_string()}
                max={ImageFilters::MAX.to_string()}
                value={value.to_string()}
                {oninput}
            />
        </div>
    }
}
