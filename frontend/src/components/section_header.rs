use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    #[prop_or_default]
    pub overline: Option<AttrValue>,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            {
                if let Some(overline) = &props.overline {
                    html! { <div class="section-overline">{overline.clone()}</div> }
                } else {
                    html! {}
                }
            }
            <h2 class="section-title">{props.title.clone()}</h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p class="section-subtitle">{subtitle.clone()}</p> }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .section-header {
                        max-width: 56rem;
                        margin: 0 auto 3rem;
                        text-align: center;
                    }
                    .section-overline {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: #6366f1;
                        margin-bottom: 0.75rem;
                    }
                    .section-title {
                        font-size: clamp(1.9rem, 4vw, 3rem);
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        color: #111827;
                        margin: 0;
                    }
                    .section-subtitle {
                        margin-top: 1rem;
                        color: #4b5563;
                    }
                "#}
            </style>
        </div>
    }
}
