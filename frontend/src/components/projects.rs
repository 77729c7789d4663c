use std::time::Duration;

use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::{Project, Projects as ProjectsContent};
use crate::reveal::easing::Easing;
use crate::reveal::hooks::{use_stagger_reveal, Reveal};
use crate::reveal::intent::{AnimationIntent, VisualState};
use crate::reveal::stagger::{Stagger, StaggerGroup};

const CARD_THRESHOLD: f64 = 0.6;

/// Wipes the image in from the left edge.
fn media_reveal() -> AnimationIntent {
    AnimationIntent::new(
        VisualState::new().clip_right(100.0),
        VisualState::new().clip_right(0.0),
    )
    .duration(Duration::from_millis(800))
    .easing(Easing::EXPO_OUT)
    .threshold(CARD_THRESHOLD)
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let text = use_node_ref();
    let title = use_node_ref();
    let description = use_node_ref();
    let tags = use_node_ref();
    let link = use_node_ref();

    let line = AnimationIntent::fade_up();
    use_stagger_reveal(
        text.clone(),
        StaggerGroup::new(
            AnimationIntent::fade_in().threshold(CARD_THRESHOLD),
            Stagger::new(Duration::from_millis(120)),
        )
        .child(title.clone(), line.clone())
        .child(description.clone(), line.clone())
        .child(tags.clone(), line.clone())
        .child(link.clone(), line.clone()),
    );
    let hidden_line = line.hidden.to_css();

    html! {
        <div class="project-card">
            <Reveal class="project-media" intent={media_reveal()}>
                <img src={project.image.clone()} alt={project.title.clone()} loading="lazy" />
            </Reveal>
            <div ref={text} class="project-text" style={AnimationIntent::fade_in().hidden.to_css()}>
                <h3 ref={title} class="project-title" style={hidden_line.clone()}>{project.title.clone()}</h3>
                <p ref={description} class="project-description" style={hidden_line.clone()}>
                    {project.description.clone()}
                </p>
                <div ref={tags} class="project-stack" style={hidden_line.clone()}>
                    { for project.stack.iter().map(|tech| html! {
                        <span key={tech.clone()} class="project-tag">{tech.clone()}</span>
                    }) }
                </div>
                {
                    if let Some(href) = &project.link {
                        html! {
                            <a ref={link} href={href.clone()} target="_blank" rel="noreferrer" class="project-link" style={hidden_line.clone()}>
                                {"View project →"}
                            </a>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub projects: ProjectsContent,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    html! {
        <section id="projects" class="projects">
            <div class="projects-inner">
                <SectionHeader
                    overline="Projects"
                    title={props.projects.title.clone()}
                    subtitle={props.projects.subtitle.clone().map(AttrValue::from)}
                />
                <div class="project-list">
                    { for props.projects.entries.iter().enumerate().map(|(i, project)| html! {
                        <ProjectCard key={i} project={project.clone()} />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .projects {
                        position: relative;
                        padding: 7rem 0;
                        background: linear-gradient(to bottom, #f9fafb, #fff);
                    }
                    .projects-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .project-list {
                        display: flex;
                        flex-direction: column;
                        gap: 5rem;
                    }
                    .project-card {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        align-items: center;
                    }
                    @media (min-width: 768px) {
                        .project-card {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    .project-media {
                        border-radius: 1rem;
                        overflow: hidden;
                        background: #f3f4f6;
                        aspect-ratio: 16 / 10;
                    }
                    .project-media img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        display: block;
                    }
                    .project-title {
                        font-size: 1.5rem;
                        font-weight: 600;
                        color: #111827;
                        margin: 0;
                    }
                    .project-description {
                        margin-top: 0.75rem;
                        color: #4b5563;
                    }
                    .project-stack {
                        margin-top: 1rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .project-tag {
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: #f3f4f6;
                        color: #1f2937;
                        font-size: 0.75rem;
                    }
                    .project-link {
                        display: inline-block;
                        margin-top: 1.5rem;
                        color: #4f46e5;
                        text-decoration: none;
                    }
                    .project-link:hover {
                        color: #4338ca;
                    }
                "#}
            </style>
        </section>
    }
}
