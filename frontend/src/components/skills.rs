use std::time::Duration;

use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::Skills as SkillsContent;
use crate::reveal::hooks::Reveal;
use crate::reveal::intent::{AnimationIntent, VisualState};

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub skills: SkillsContent,
}

/// Cards rise and settle from 98% scale, each 50 ms after the previous one.
fn card_intent(index: usize) -> AnimationIntent {
    AnimationIntent::new(
        VisualState::new().opacity(0.0).offset_y(20.0).scale(0.98),
        VisualState::new().opacity(1.0).offset_y(0.0).scale(1.0),
    )
    .duration(Duration::from_millis(600))
    .delay(Duration::from_millis(50 * index as u64))
    .threshold(0.4)
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    html! {
        <section id="skills" class="skills">
            <div class="skills-inner">
                <SectionHeader
                    overline="Skills"
                    title={props.skills.title.clone()}
                    subtitle={props.skills.subtitle.clone().map(AttrValue::from)}
                />
                <div class="skills-grid">
                    { for props.skills.groups.iter().enumerate().map(|(index, group)| html! {
                        <Reveal key={group.name.clone()} class="skill-card" intent={card_intent(index)}>
                            <div class="skill-group">{group.name.clone()}</div>
                            <ul class="skill-list">
                                { for group.items.iter().map(|item| html! {
                                    <Reveal key={item.clone()} tag="li" class="skill-item" intent={AnimationIntent::fade_up().threshold(0.7)}>
                                        {item.clone()}
                                    </Reveal>
                                }) }
                            </ul>
                        </Reveal>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .skills {
                        position: relative;
                        padding: 7rem 0;
                        background: linear-gradient(to bottom, #fff, #f9fafb);
                    }
                    .skills-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .skills-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
                        gap: 1.5rem;
                    }
                    .skill-card {
                        border-radius: 1rem;
                        border: 1px solid #f3f4f6;
                        background: #fff;
                        padding: 1.5rem;
                        box-shadow: 0 1px 2px rgba(0,0,0,0.05);
                    }
                    .skill-group {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #4f46e5;
                    }
                    .skill-list {
                        list-style: none;
                        margin: 1rem 0 0;
                        padding: 0;
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 0.75rem;
                    }
                    .skill-item {
                        border-radius: 0.5rem;
                        background: #f9fafb;
                        padding: 0.5rem 0.75rem;
                        font-size: 0.875rem;
                        color: #1f2937;
                    }
                "#}
            </style>
        </section>
    }
}
