use yew::prelude::*;

use crate::{Model, Msg};

pub fn render_warning_banner(model: &Model, ctx: &Context<Model>) -> Html {
    if !model.state.warning_banner {
        return html! {};
    }

    html! {
        <div class="warning-banner">
            <div class="warning-banner-inner">
                <i class="fa-solid fa-triangle-exclamation"></i>
                <p>{"Warning: Deepfake media can be used for scams and misinformation. Stay vigilant!"}</p>
                <button
                    class="dismiss-btn"
                    title="Dismiss warning"
                    onclick={ctx.link().callback(|_| Msg::DismissWarning)}
                >
                    <i class="fa-solid fa-times"></i>
                </button>
            </div>
        </div>
    }
}
