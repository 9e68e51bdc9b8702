use shared::{ModelChoice, PredictResponse};
use yew::prelude::*;

use super::utils::debounce;
use crate::{Model, Msg};

/// Everything below the preview grid: the submit button while one is allowed,
/// the processing indicator while a request is in flight, and the verdict
/// panel once a result arrived.
pub fn render_analysis_section(model: &Model, ctx: &Context<Model>) -> Html {
    if model.state.processing {
        return render_processing();
    }
    if let Some(result) = &model.state.result {
        return render_results(model, ctx, result);
    }
    if model.state.can_submit() {
        return render_submit_button(ctx);
    }
    html! {}
}

pub fn verdict_heading(is_real: bool) -> &'static str {
    if is_real {
        "Real Image Verified"
    } else {
        "Deepfake Detected"
    }
}

pub fn verdict_caption(is_real: bool) -> &'static str {
    if is_real {
        "Our AI confirms this image appears to be authentic."
    } else {
        "Warning: This image shows signs of AI manipulation."
    }
}

pub fn confidence_text(probability: f64) -> String {
    format!("{probability:.1}%")
}

/// Maps the wire-level model id to its display name, badge and blurb. Unknown
/// ids pass through unlabelled rather than failing the render.
pub fn model_presentation(wire_model: &str) -> (String, Option<&'static str>, Option<&'static str>) {
    match wire_model.parse::<ModelChoice>() {
        Ok(choice) => (
            choice.display_name().to_owned(),
            Some(choice.badge()),
            Some(choice.blurb()),
        ),
        Err(_) => (wire_model.to_owned(), None, None),
    }
}

fn render_submit_button(ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();
    html! {
        <button
            class="analyze-btn submit-btn"
            onclick={debounce(300, move || link.send_message(Msg::Submit))}
        >
            <i class="fa-solid fa-magnifying-glass"></i>
            <span>{" Analyze for Deepfakes"}</span>
        </button>
    }
}

fn render_processing() -> Html {
    html! {
        <div class="processing-indicator">
            <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
            <p>{"Analyzing image with advanced AI..."}</p>
            <div class="loading-bar"><div class="loading-bar-fill"></div></div>
        </div>
    }
}

fn render_results(model: &Model, ctx: &Context<Model>, result: &PredictResponse) -> Html {
    let verdict_class = if result.is_real { "verdict-real" } else { "verdict-fake" };
    let (model_name, model_badge, model_blurb) = model_presentation(&result.model);

    let link = ctx.link().clone();
    let flag_click = debounce(300, {
        let link = link.clone();
        move || link.send_message(Msg::FlagResult)
    });
    let test_another_click = debounce(300, {
        let link = link.clone();
        move || link.send_message(Msg::TestAnotherImage)
    });

    html! {
        <div class={classes!("results-container", verdict_class)}>
            <div class="result-header">
                <h3>
                    {
                        if result.is_real {
                            html! { <i class="fa-solid fa-check"></i> }
                        } else {
                            html! { <i class="fa-solid fa-xmark"></i> }
                        }
                    }
                    { format!(" {}", verdict_heading(result.is_real)) }
                </h3>
                <p class="verdict-caption">{ verdict_caption(result.is_real) }</p>
                <button class="flag-btn" onclick={flag_click}>
                    <i class="fa-solid fa-triangle-exclamation"></i>{" Report False Result"}
                </button>
            </div>

            { render_flag_notice(model) }

            <div class="result-details">
                <div class="confidence-meter">
                    <div class="meter-label">{"AI Confidence:"}</div>
                    <div class="meter">
                        <div class="meter-fill" style={format!("width: {}%", result.probability)}></div>
                    </div>
                    <div class="meter-value">{ confidence_text(result.probability) }</div>
                </div>
                <div class="model-card">
                    <p>
                        <span class="model-label">{"Detection Model: "}</span>
                        <span class="model-name">{ model_name }</span>
                        {
                            match model_badge {
                                Some(badge) => html! { <span class="model-badge">{ badge }</span> },
                                None => html! {},
                            }
                        }
                    </p>
                    {
                        match model_blurb {
                            Some(blurb) => html! { <p class="model-blurb">{ blurb }</p> },
                            None => html! {},
                        }
                    }
                </div>
            </div>

            <button class="analyze-btn test-another-btn" onclick={test_another_click}>
                <i class="fa-solid fa-rotate"></i>{" Test Another Image"}
            </button>
        </div>
    }
}

fn render_flag_notice(model: &Model) -> Html {
    match &model.state.flag_notice {
        Some(notice) => html! { <p class="flag-notice">{ notice }</p> },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_verdicts_use_the_cnn_presentation() {
        assert_eq!(verdict_heading(true), "Real Image Verified");
        assert_eq!(confidence_text(97.2), "97.2%");

        let (name, badge, blurb) = model_presentation("CustomCNN");
        assert_eq!(name, "Custom CNN");
        assert_eq!(badge, Some("Optimized"));
        assert!(blurb.unwrap().contains("optimized for speed"));
    }

    #[test]
    fn fake_verdicts_use_the_xception_presentation() {
        assert_eq!(verdict_heading(false), "Deepfake Detected");
        assert_eq!(confidence_text(88.0), "88.0%");

        let (name, badge, _) = model_presentation("Xception71");
        assert_eq!(name, "Xception71");
        assert_eq!(badge, Some("High Precision"));
    }

    #[test]
    fn unknown_wire_models_pass_through_unlabelled() {
        let (name, badge, blurb) = model_presentation("EfficientNetB7");
        assert_eq!(name, "EfficientNetB7");
        assert_eq!(badge, None);
        assert_eq!(blurb, None);
    }
}
