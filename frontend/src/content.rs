use serde::Deserialize;
use thiserror::Error;

const BUNDLED: &str = include_str!("../content/portfolio.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content is missing {0}")]
    Missing(&'static str),
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: About,
    pub skills: Skills,
    pub experience: Experience,
    pub projects: Projects,
    pub contact: Contact,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    /// GitHub username
    pub github: String,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn github_url(&self) -> String {
        format!("https://{}", self.github_label())
    }

    pub fn github_label(&self) -> String {
        format!("github.com/{}", self.github)
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct About {
    pub title: String,
    pub paragraphs: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Skills {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub groups: Vec<SkillGroup>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Experience {
    pub title: String,
    pub entries: Vec<ExperienceEntry>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub summary: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Projects {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub entries: Vec<Project>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Image URL
    pub image: String,
    pub stack: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Contact {
    pub overline: String,
    pub title: String,
    pub blurb: String,
}

/// Parse and sanity-check a content table.
pub fn parse(json: &str) -> Result<Portfolio, ContentError> {
    let portfolio: Portfolio = serde_json::from_str(json)?;
    if portfolio.profile.name.trim().is_empty() {
        return Err(ContentError::Missing("profile.name"));
    }
    Ok(portfolio)
}

/// The content compiled into the binary.
pub fn load() -> Result<Portfolio, ContentError> {
    parse(BUNDLED)
}
