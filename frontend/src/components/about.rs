use std::time::Duration;

use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::{About as AboutContent, Profile};
use crate::reveal::hooks::Reveal;
use crate::reveal::intent::AnimationIntent;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub profile: Profile,
    pub about: AboutContent,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let profile = &props.profile;

    html! {
        <section id="about" class="about">
            <div class="about-inner">
                <SectionHeader overline="About" title={props.about.title.clone()} />
                <div class="about-story">
                    { for props.about.paragraphs.iter().enumerate().map(|(i, paragraph)| html! {
                        <Reveal key={i} tag="p" class="about-paragraph" intent={AnimationIntent::fade_up().threshold(0.6)}>
                            {paragraph.clone()}
                        </Reveal>
                    }) }
                </div>

                <Reveal class="about-facts" intent={AnimationIntent::rise(16.0).delay(Duration::from_millis(100))}>
                    <div class="about-fact">{format!("Location: {}", profile.location)}</div>
                    <a href={profile.mailto()} class="about-fact">{format!("Email: {}", profile.email)}</a>
                    <a href={profile.tel()} class="about-fact">{format!("Phone: {}", profile.phone)}</a>
                    <a href={profile.github_url()} target="_blank" rel="noreferrer" class="about-fact">
                        {format!("GitHub: {}", profile.github_label())}
                    </a>
                </Reveal>
            </div>
            <style>
                {r#"
                    .about {
                        position: relative;
                        padding: 7rem 0;
                        background: #fff;
                    }
                    .about-inner {
                        max-width: 64rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .about-story {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .about-paragraph {
                        font-size: 1.125rem;
                        line-height: 1.75;
                        color: #374151;
                        margin: 0;
                    }
                    .about-facts {
                        margin-top: 2.5rem;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 1rem;
                        font-size: 0.875rem;
                        color: #4b5563;
                    }
                    .about-fact {
                        border-radius: 0.75rem;
                        background: #f9fafb;
                        padding: 1rem;
                        color: inherit;
                        text-decoration: none;
                        transition: background 0.2s;
                    }
                    a.about-fact:hover {
                        background: #f3f4f6;
                    }
                "#}
            </style>
        </section>
    }
}
