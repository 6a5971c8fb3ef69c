use log::warn;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::ZoomOptions;
use crate::consts::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_SENSITIVITY, INITIAL_SCALE};
use crate::dom::PinchZoom;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomableProps {
    #[prop_or(DEFAULT_MIN_SCALE)]
    pub min_scale: f64,
    #[prop_or(DEFAULT_MAX_SCALE)]
    pub max_scale: f64,
    #[prop_or(DEFAULT_SENSITIVITY)]
    pub sensitivity: f64,
    /// Render loop runs only while true; gestures are still tracked.
    #[prop_or(true)]
    pub active: bool,
    /// Id of the zoomed element, for page scripts and styles.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// Scrollable viewport whose content can be pinch-zoomed.
#[function_component(Zoomable)]
pub fn zoomable(props: &ZoomableProps) -> Html {
    let content_ref = use_node_ref();
    let zoom = use_mut_ref(|| None::<PinchZoom>);
    // Scale the last detached handle ended at; the next attach resumes from it.
    let resume_scale = use_mut_ref(|| INITIAL_SCALE);
    let active = use_mut_ref(|| props.active);
    *active.borrow_mut() = props.active;
    let error = use_state(|| None::<String>);

    // Attach on mount and whenever the options change; detach on unmount.
    {
        let content_ref = content_ref.clone();
        let zoom = zoom.clone();
        let resume_scale = resume_scale.clone();
        let active = active.clone();
        let error = error.clone();
        let deps = (props.min_scale, props.max_scale, props.sensitivity);
        use_effect_with(deps, move |&(min_scale, max_scale, sensitivity)| {
            let options = ZoomOptions::new(min_scale, max_scale).with_sensitivity(sensitivity);
            if let Some(element) = content_ref.cast::<HtmlElement>() {
                match PinchZoom::attach_at(element, options, *resume_scale.borrow()) {
                    Ok(handle) => {
                        if !*active.borrow() {
                            handle.stop();
                        }
                        *zoom.borrow_mut() = Some(handle);
                        error.set(None);
                    }
                    Err(e) => {
                        warn!("pinch zoom not attached: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
            }
            move || {
                if let Some(handle) = zoom.borrow_mut().take() {
                    *resume_scale.borrow_mut() = handle.current_scale();
                }
            }
        });
    }
    {
        let zoom = zoom.clone();
        use_effect_with(props.active, move |&active| {
            if let Some(handle) = zoom.borrow().as_ref() {
                if active {
                    handle.start();
                } else {
                    handle.stop();
                }
            }
            || ()
        });
    }

    html! {
        <>
            <div class="pinch-zoom-viewport" style="overflow:auto; width:100%; height:100%;">
                <div ref={content_ref} id={props.id.clone()} class="pinch-zoom-content">
                    { props.children.clone() }
                </div>
            </div>
            if let Some(msg) = &*error {
                <p class="pinch-zoom-error" style="color:#f85149; margin:4px 0;">{ msg.clone() }</p>
            }
        </>
    }
}
