use super::zoomable::Zoomable;
use yew::prelude::*;

const TILE_COLORS: [&str; 6] = ["#238636", "#1f6feb", "#8957e5", "#da3633", "#d29922", "#3fb950"];

// Demo page: one zoomable `#content` block inside a fixed-size viewport.
#[function_component(App)]
pub fn app() -> Html {
    let active = use_state(|| true);

    let toggle = {
        let active = active.clone();
        Callback::from(move |_| active.set(!*active))
    };

    let tiles: Html = (0..48)
        .map(|i| {
            let color = TILE_COLORS[i % TILE_COLORS.len()];
            html! {
                <div key={i.to_string()} style={format!("background:{color}; border-radius:6px; height:72px; display:flex; align-items:center; justify-content:center; color:#fff;")}>
                    { (i + 1).to_string() }
                </div>
            }
        })
        .collect();

    html! {
        <div style="display:flex; flex-direction:column; width:100vw; height:100vh; background:#0d1117; color:#c9d1d9; font-family:sans-serif;">
            <div id="top-bar" style="display:flex; gap:8px; align-items:center; padding:8px; border-bottom:1px solid #30363d;">
                <strong>{"Pinch zoom"}</strong>
                <span style="flex:1;">{"Use two fingers on the grid to zoom."}</span>
                <button onclick={toggle}>{ if *active { "Pause zoom" } else { "Resume zoom" } }</button>
            </div>
            <div style="flex:1; min-height:0;">
                <Zoomable id="content" min_scale={0.5} max_scale={3.0} active={*active}>
                    <div style="display:grid; grid-template-columns:repeat(6, 1fr); gap:8px; padding:8px; width:640px;">
                        { tiles }
                    </div>
                </Zoomable>
            </div>
        </div>
    }
}
