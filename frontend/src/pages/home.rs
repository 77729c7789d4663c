use std::rc::Rc;

use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, experience::Experience, hero::Hero, projects::Projects,
    skills::Skills,
};
use crate::config;
use crate::content::Portfolio;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub content: Rc<Portfolio>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let content = &props.content;

    html! {
        <main class="portfolio">
            <Hero profile={content.profile.clone()} scene_url={config::scene_url().map(AttrValue::from)} />
            <About profile={content.profile.clone()} about={content.about.clone()} />
            <Skills skills={content.skills.clone()} />
            <Experience experience={content.experience.clone()} />
            <Projects projects={content.projects.clone()} />
            <Contact profile={content.profile.clone()} contact={content.contact.clone()} />
            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        background: #fff;
                        color: #111827;
                    }
                    .portfolio {
                        overflow-x: hidden;
                    }
                "#}
            </style>
        </main>
    }
}
