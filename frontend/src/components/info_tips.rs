use yew::prelude::*;

use crate::Model;

pub struct InfoTip {
    pub icon: &'static str,
    pub text: &'static str,
}

/// Rotating educational messages, advanced every five seconds.
pub const INFO_TIPS: [InfoTip; 5] = [
    InfoTip {
        icon: "fa-solid fa-bolt",
        text: "Deepfakes use AI to create convincing fake images or videos of real people.",
    },
    InfoTip {
        icon: "fa-solid fa-circle-exclamation",
        text: "In 2024, over 85% of Indian social media users encountered deepfakes.",
    },
    InfoTip {
        icon: "fa-solid fa-shield-halved",
        text: "Our AI models can detect 94% of current deepfake technologies.",
    },
    InfoTip {
        icon: "fa-solid fa-lock",
        text: "Always verify media sources before sharing sensitive content.",
    },
    InfoTip {
        icon: "fa-solid fa-circle-info",
        text: "Report suspected deepfakes to help improve our detection systems.",
    },
];

pub fn render_info_tips(model: &Model) -> Html {
    let current = model.state.info_tip % INFO_TIPS.len();
    let tip = &INFO_TIPS[current];

    html! {
        <div class="info-tips">
            <div class="info-tips-heading">
                <i class={tip.icon}></i>
                <span>{"Did you know?"}</span>
            </div>
            <p class="info-tip-text">{ tip.text }</p>
            <div class="info-tip-progress">
                { for (0..INFO_TIPS.len()).map(|index| html! {
                    <div class={classes!("progress-dot", (index == current).then_some("active"))}></div>
                }) }
            </div>
        </div>
    }
}
