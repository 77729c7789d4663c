use log::{debug, warn};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::progress::listener::{ScrollContainer, ScrollProgressIndicator};

#[derive(Properties, PartialEq)]
pub struct ScrollProgressBarProps {
    /// Scrolling element to follow instead of the page.
    #[prop_or_default]
    pub container: Option<NodeRef>,
}

/// Thin gradient bar across the top of the page that fills as the page scrolls.
#[function_component(ScrollProgressBar)]
pub fn scroll_progress_bar(props: &ScrollProgressBarProps) -> Html {
    let bar = use_node_ref();

    {
        let bar = bar.clone();
        let container = props.container.clone();
        use_effect_with_deps(
            move |_| {
                let container = container
                    .and_then(|node| node.cast::<HtmlElement>())
                    .map(ScrollContainer::Element)
                    .unwrap_or_default();
                // written straight to the element on every scroll event, outside the vdom
                let attached = ScrollProgressIndicator::attach(container, move |progress| {
                    if let Some(bar) = bar.cast::<HtmlElement>() {
                        let _ = bar
                            .style()
                            .set_property("transform", &format!("scaleX({})", progress));
                    }
                });
                let mut indicator = match attached {
                    Ok(indicator) => Some(indicator),
                    Err(e) => {
                        warn!("Scroll progress unavailable: {}", e);
                        None
                    }
                };
                move || {
                    if let Some(mut indicator) = indicator.take() {
                        debug!("Detaching scroll progress at {:.2}", indicator.current_progress());
                        indicator.detach();
                        debug_assert!(!indicator.is_attached());
                    }
                }
            },
            (),
        );
    }

    html! {
        <>
            <div ref={bar} class="scroll-progress" style="transform: scaleX(0);"></div>
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 4px;
                        transform-origin: left center;
                        background: linear-gradient(to right, #6366f1, #a855f7, #3b82f6);
                        z-index: 50;
                        pointer-events: none;
                    }
                "#}
            </style>
        </>
    }
}
