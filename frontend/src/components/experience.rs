use std::time::Duration;

use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::Experience as ExperienceContent;
use crate::reveal::hooks::Reveal;
use crate::reveal::intent::{AnimationIntent, VisualState};

#[derive(Properties, PartialEq)]
pub struct ExperienceProps {
    pub experience: ExperienceContent,
}

fn slide_in() -> AnimationIntent {
    AnimationIntent::new(
        VisualState::new().opacity(0.0).offset_x(-10.0),
        VisualState::new().opacity(1.0).offset_x(0.0),
    )
    .duration(Duration::from_millis(500))
    .threshold(0.6)
}

/// Vertical timeline, newest first as listed in the content.
#[function_component(Experience)]
pub fn experience(props: &ExperienceProps) -> Html {
    html! {
        <section id="experience" class="experience">
            <div class="experience-inner">
                <SectionHeader overline="Experience" title={props.experience.title.clone()} />
                <div class="timeline">
                    { for props.experience.entries.iter().enumerate().map(|(i, entry)| html! {
                        <Reveal key={i} class="timeline-entry" intent={slide_in()}>
                            <span class="timeline-dot"></span>
                            <div class="timeline-period">{entry.period.clone()}</div>
                            <div class="timeline-title">{entry.title.clone()}</div>
                            <div class="timeline-company">{entry.company.clone()}</div>
                            <p class="timeline-summary">{entry.summary.clone()}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .experience {
                        position: relative;
                        padding: 7rem 0;
                        background: #fff;
                    }
                    .experience-inner {
                        max-width: 64rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .timeline {
                        position: relative;
                        border-left: 1px solid #e5e7eb;
                        margin-left: 0.75rem;
                    }
                    .timeline-entry {
                        position: relative;
                        padding: 0 0 2.5rem 1.5rem;
                    }
                    .timeline-dot {
                        position: absolute;
                        left: -0.375rem;
                        top: 0.5rem;
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 9999px;
                        background: #6366f1;
                    }
                    .timeline-period {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .timeline-title {
                        margin-top: 0.25rem;
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #111827;
                    }
                    .timeline-company {
                        color: #374151;
                    }
                    .timeline-summary {
                        margin-top: 0.75rem;
                        color: #4b5563;
                    }
                "#}
            </style>
        </section>
    }
}
