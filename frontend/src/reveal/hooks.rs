use std::ops::Deref;
use std::rc::Rc;

use log::debug;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::driver::{apply_state, RevealDriver, RevealKey};
use super::intent::AnimationIntent;
use super::stagger::StaggerGroup;

/// Shared reveal driver, provided once at the root of the app.
#[derive(Clone)]
pub struct RevealHandle(Rc<RevealDriver>);

impl RevealHandle {
    pub fn new() -> Self {
        Self(Rc::new(RevealDriver::new()))
    }

    fn log_release(&self, released: usize) {
        debug!(
            "Released {} reveal(s), {} still observed, {} frame update(s) pending",
            released,
            self.active_observations(),
            self.pending_frames()
        );
    }
}

impl Default for RevealHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for RevealHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for RevealHandle {
    type Target = RevealDriver;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Reveal the element behind `node` per `intent` for as long as the
/// component is mounted. Without a [`RevealHandle`] in context the element
/// is shown right away.
#[hook]
pub fn use_reveal(node: NodeRef, intent: AnimationIntent) {
    let handle = use_context::<RevealHandle>();
    use_effect_with_deps(
        move |_| {
            let registration: Option<(RevealHandle, RevealKey)> =
                node.cast::<HtmlElement>().and_then(|element| match handle {
                    Some(handle) => {
                        let key = handle.register(element, intent);
                        Some((handle, key))
                    }
                    None => {
                        apply_state(&element, &intent.shown);
                        None
                    }
                });
            move || {
                if let Some((handle, key)) = registration {
                    handle.unregister(key);
                    handle.log_release(1);
                }
            }
        },
        (),
    );
}

/// Like [`use_reveal`], for a parent whose children start one after another.
/// Children whose node is not rendered are skipped.
#[hook]
pub fn use_stagger_reveal(parent: NodeRef, group: StaggerGroup<NodeRef>) {
    let handle = use_context::<RevealHandle>();
    use_effect_with_deps(
        move |_| {
            let registration: Option<(RevealHandle, Vec<RevealKey>)> =
                parent.cast::<HtmlElement>().and_then(|element| {
                    let group = group.filter_map_keys(|node| node.cast::<HtmlElement>());
                    match handle {
                        Some(handle) => {
                            let keys = handle.register_group(element, group);
                            Some((handle, keys))
                        }
                        None => {
                            apply_state(&element, &group.parent.shown);
                            for (child, intent) in &group.children {
                                apply_state(child, &intent.shown);
                            }
                            None
                        }
                    }
                });
            move || {
                if let Some((handle, keys)) = registration {
                    // child keys still hold their element and attribute
                    for key in &keys {
                        handle.unregister(*key);
                    }
                    handle.log_release(keys.len());
                }
            }
        },
        (),
    );
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub intent: AnimationIntent,
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in `tag`, starting from the intent's hidden state.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    use_reveal(node.clone(), props.intent.clone());

    html! {
        <@{props.tag.to_string()} ref={node} class={props.class.clone()} style={props.intent.hidden.to_css()}>
            { for props.children.iter() }
        </@>
    }
}
