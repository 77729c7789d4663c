use std::time::Duration;

use yew::prelude::*;

use crate::components::scene::SceneEmbed;
use crate::content::Profile;
use crate::reveal::easing::Easing;
use crate::reveal::hooks::Reveal;
use crate::reveal::intent::AnimationIntent;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub profile: Profile,
    #[prop_or_default]
    pub scene_url: Option<AttrValue>,
}

fn entrance(duration_ms: u64, delay_ms: u64) -> AnimationIntent {
    AnimationIntent::rise(20.0)
        .duration(Duration::from_millis(duration_ms))
        .delay(Duration::from_millis(delay_ms))
        .easing(Easing::EXPO_OUT)
        .on_mount()
}

/// Full-height opening section. Plays its entrance on load, no scrolling needed.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let profile = &props.profile;

    html! {
        <section id="hero" class="hero">
            {
                if let Some(url) = &props.scene_url {
                    html! { <SceneEmbed url={url.clone()} /> }
                } else {
                    html! {}
                }
            }
            <div class="hero-overlay"></div>

            <div class="hero-content">
                <Reveal intent={entrance(900, 0)}>
                    <h1 class="hero-name">{profile.name.clone()}</h1>
                </Reveal>
                <Reveal tag="p" class="hero-tagline" intent={entrance(1100, 150)}>
                    {profile.tagline.clone()}
                </Reveal>
                <Reveal
                    class="hero-actions"
                    intent={AnimationIntent::fade_in()
                        .duration(Duration::from_millis(800))
                        .delay(Duration::from_millis(600))
                        .easing(Easing::EaseOut)
                        .on_mount()}
                >
                    <a href="#about" class="hero-pill">{"About Me"}</a>
                    <a href="#projects" class="hero-pill primary">{"View Work"}</a>
                </Reveal>
                <Reveal
                    class="hero-hint"
                    intent={AnimationIntent::rise(10.0)
                        .delay(Duration::from_millis(1200))
                        .easing(Easing::EaseOut)
                        .on_mount()}
                >
                    {"Scroll to explore"}
                </Reveal>
            </div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                        background: #000;
                        color: #fff;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, rgba(0,0,0,0.6), rgba(0,0,0,0.3) 50%, #000);
                        pointer-events: none;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        height: 100%;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        pointer-events: none;
                    }
                    .hero-name {
                        font-size: clamp(2.25rem, 7vw, 4.5rem);
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        margin: 0;
                    }
                    .hero-tagline {
                        margin-top: 1rem;
                        font-size: clamp(1.1rem, 2.5vw, 1.5rem);
                        color: rgba(255,255,255,0.85);
                        max-width: 42rem;
                    }
                    .hero-actions {
                        margin-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        pointer-events: auto;
                    }
                    .hero-pill {
                        border-radius: 9999px;
                        background: rgba(255,255,255,0.1);
                        backdrop-filter: blur(8px);
                        padding: 0.75rem 1.5rem;
                        color: #fff;
                        text-decoration: none;
                        transition: background 0.2s;
                    }
                    .hero-pill:hover {
                        background: rgba(255,255,255,0.2);
                    }
                    .hero-pill.primary {
                        background: #6366f1;
                    }
                    .hero-pill.primary:hover {
                        background: #4f46e5;
                    }
                    .hero-hint {
                        position: absolute;
                        bottom: 1.5rem;
                        left: 0;
                        right: 0;
                        text-align: center;
                        font-size: 0.75rem;
                        color: rgba(255,255,255,0.7);
                    }
                "#}
            </style>
        </section>
    }
}
