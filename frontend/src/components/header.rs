use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <div class="app-badge">
                <i class="fa-solid fa-shield-halved"></i>
            </div>
            <h1>{"Deepfake Detection"}</h1>
            <p class="subtitle">{"Protecting Digital Truth with Advanced AI"}</p>
        </header>
    }
}

pub fn render_about_section() -> Html {
    html! {
        <div class="about-section">
            <h3><i class="fa-solid fa-circle-info"></i>{" About Deepfake Detection"}</h3>
            <div class="about-grid">
                <div class="about-card">
                    <h4>{"What are Deepfakes?"}</h4>
                    <p>
                        {"Deepfakes use artificial intelligence to create convincing fake images or \
                          videos that show people saying or doing things they never did in reality."}
                    </p>
                </div>
                <div class="about-card">
                    <h4>{"Our Technology"}</h4>
                    <p>
                        {"We use advanced neural networks trained on millions of images to detect \
                          subtle inconsistencies and artifacts that are invisible to the human eye."}
                    </p>
                </div>
                <div class="about-card">
                    <h4>{"Stay Safe"}</h4>
                    <p>
                        {"Verify the source of media before trusting it. If you suspect a deepfake, \
                          use our tool to analyze it and report suspicious content."}
                    </p>
                </div>
            </div>
        </div>
    }
}
