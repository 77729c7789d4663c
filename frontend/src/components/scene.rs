use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

const VIEWER_TAG: &str = "spline-viewer";

#[derive(Properties, PartialEq)]
pub struct SceneEmbedProps {
    pub url: AttrValue,
}

fn viewer_defined() -> bool {
    window()
        .map(|window| !window.custom_elements().get(VIEWER_TAG).is_undefined())
        .unwrap_or(false)
}

fn report_viewer() {
    if viewer_defined() {
        debug!("3D scene viewer ready");
    } else {
        warn!("3D scene viewer did not load, showing the gradient only");
    }
}

/// Embedded 3D scene filling its container. If the viewer script never
/// loads the element stays empty and whatever is behind it shows through.
#[function_component(SceneEmbed)]
pub fn scene_embed(props: &SceneEmbedProps) -> Html {
    use_effect_with_deps(
        move |_| {
            let window = window();
            let loaded = window
                .as_ref()
                .and_then(|window| window.document())
                .map(|document| document.ready_state() == "complete")
                .unwrap_or(true);

            let mut listener: Option<Closure<dyn FnMut()>> = None;
            if loaded {
                report_viewer();
            } else if let Some(window) = &window {
                let on_load = Closure::wrap(Box::new(report_viewer) as Box<dyn FnMut()>);
                if window
                    .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
                    .is_ok()
                {
                    listener = Some(on_load);
                }
            }

            move || {
                if let (Some(window), Some(on_load)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
                }
            }
        },
        (),
    );

    html! {
        <div class="scene-embed">
            <spline-viewer url={props.url.clone()} loading-anim-type="none"></spline-viewer>
            <style>
                {r#"
                    .scene-embed {
                        position: absolute;
                        inset: 0;
                    }
                    .scene-embed spline-viewer {
                        display: block;
                        width: 100%;
                        height: 100%;
                    }
                "#}
            </style>
        </div>
    }
}
