use axum::{extract::State, response::IntoResponse};

use crate::{
    content::{
        ABOUT_INTRO, ABOUT_JOURNEY, CHANNELS, Channel, EDUCATION, EXPERIENCE, Education,
        Experience, HERO_FOCUS, HERO_LINKS, HERO_PITCH, HIGHLIGHTS, Highlight, INVOLVEMENTS,
        Involvement, Link, OWNER_NAME, OWNER_TAGLINE, PROJECTS, Project, SECTIONS, SKILLS,
        Section, SkillCategory,
    },
    routes::{AppState, contact::ContactFormTemplate},
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub view: String,
    /// Pre-rendered contact form partial.
    pub contact_form: String,
    pub owner_name: &'static str,
    pub owner_tagline: &'static str,
    pub hero_focus: &'static [&'static str],
    pub hero_pitch: &'static str,
    pub hero_links: &'static [Link],
    pub sections: &'static [Section],
    pub about_intro: &'static str,
    pub about_journey: &'static [&'static str],
    pub highlights: &'static [Highlight],
    pub education: &'static [Education],
    pub experience: &'static [Experience],
    pub skills: &'static [SkillCategory],
    pub projects: &'static [Project],
    pub involvements: &'static [Involvement],
    pub channels: &'static [Channel],
}

/// GET / - the whole portfolio. Every render opens a fresh contact form.
pub async fn page(template: Template, State(app_state): State<AppState>) -> impl IntoResponse {
    let (view, session) = app_state.views.open().await;
    let view = view.to_string();
    tracing::debug!(view = %view, "opened contact view");

    let contact_form = session
        .read(|form| template.to_string(ContactFormTemplate::new(&view, form, &app_state, None)))
        .await;

    template.render(IndexTemplate {
        view,
        contact_form,
        owner_name: OWNER_NAME,
        owner_tagline: OWNER_TAGLINE,
        hero_focus: HERO_FOCUS,
        hero_pitch: HERO_PITCH,
        hero_links: HERO_LINKS,
        sections: SECTIONS,
        about_intro: ABOUT_INTRO,
        about_journey: ABOUT_JOURNEY,
        highlights: HIGHLIGHTS,
        education: EDUCATION,
        experience: EXPERIENCE,
        skills: SKILLS,
        projects: PROJECTS,
        involvements: INVOLVEMENTS,
        channels: CHANNELS,
    })
}
