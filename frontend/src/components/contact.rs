use std::time::Duration;

use chrono::Datelike;
use yew::prelude::*;

use crate::content::{Contact as ContactContent, Profile};
use crate::reveal::hooks::Reveal;
use crate::reveal::intent::AnimationIntent;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub profile: Profile,
    pub contact: ContactContent,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let profile = &props.profile;
    let year = chrono::Local::now().year();

    html! {
        <section id="contact" class="contact">
            <div class="contact-inner">
                <Reveal intent={AnimationIntent::rise(10.0)}>
                    <div class="contact-overline">{props.contact.overline.clone()}</div>
                    <h3 class="contact-title">{props.contact.title.clone()}</h3>
                    <p class="contact-blurb">{props.contact.blurb.clone()}</p>
                </Reveal>
                <Reveal class="contact-links" intent={AnimationIntent::fade_in().delay(Duration::from_millis(100))}>
                    <a href={profile.mailto()} class="contact-link">{"✉ "}{profile.email.clone()}</a>
                    <a href={profile.tel()} class="contact-link">{"☎ "}{profile.phone.clone()}</a>
                    <a href={profile.github_url()} target="_blank" rel="noreferrer" class="contact-link">
                        {"⌘ "}{profile.github_label()}
                    </a>
                </Reveal>
                <div class="contact-footer">
                    {format!("© {} {} · {}", year, profile.name, profile.role)}
                </div>
            </div>
            <style>
                {r#"
                    .contact {
                        position: relative;
                        padding: 7rem 0;
                        background: #000;
                        color: #fff;
                    }
                    .contact-inner {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        text-align: center;
                    }
                    .contact-overline {
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: #818cf8;
                    }
                    .contact-title {
                        margin-top: 0.75rem;
                        font-size: clamp(1.9rem, 4vw, 2.25rem);
                        font-weight: 600;
                    }
                    .contact-blurb {
                        margin-top: 1rem;
                        color: rgba(255,255,255,0.8);
                    }
                    .contact-links {
                        margin-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.75rem;
                    }
                    .contact-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border-radius: 9999px;
                        background: rgba(255,255,255,0.1);
                        padding: 0.75rem 1.25rem;
                        color: #fff;
                        text-decoration: none;
                        transition: background 0.2s;
                    }
                    .contact-link:hover {
                        background: rgba(255,255,255,0.2);
                    }
                    .contact-footer {
                        margin-top: 2.5rem;
                        font-size: 0.75rem;
                        color: rgba(255,255,255,0.5);
                    }
                "#}
            </style>
        </section>
    }
}
