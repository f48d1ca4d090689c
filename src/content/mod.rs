//! Portfolio content.
//!
//! Everything the page shows is plain data: the built-in, hand-authored
//! portfolio lives in [`builtin`], and a JSON document with the same shape can
//! replace it at startup (see [`Portfolio::load`]).

mod builtin;
mod loader;

use serde::{Deserialize, Serialize};

/// The complete content of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    /// Words cycled by the hero typewriter
    pub typewriter_words: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub recognitions: Vec<Recognition>,
    pub projects: Vec<Project>,
    pub skill_categories: Vec<SkillCategory>,
    pub contact: ContactInfo,
}

/// Hero banner content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    /// Bio paragraph; the `#about` anchor points here
    pub bio: String,
    /// Year shown in the footer copyright line
    pub copyright_year: u16,
}

/// Whether a timeline entry is schooling or a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Education,
    Work,
}

impl TimelineKind {
    /// Icon glyph shown next to the entry title.
    pub fn icon(&self) -> &'static str {
        match self {
            TimelineKind::Education => "🎓",
            TimelineKind::Work => "💼",
        }
    }
}

/// Which side of the timeline rail an entry sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineSide {
    Left,
    Right,
}

/// A paragraph or a bullet list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Bullets(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub kind: TimelineKind,
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: Description,
    pub side: TimelineSide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recognition {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub repository_url: String,
}

/// Icon shown on a skill category card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    Code,
    Server,
    Database,
}

impl SkillIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            SkillIcon::Code => "</>",
            SkillIcon::Server => "[=]",
            SkillIcon::Database => "(≡)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: SkillIcon,
    pub skills: Vec<String>,
}

/// Contact section and outbound links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub linkedin_url: String,
    pub github_url: String,
    /// Paragraph above the contact links
    pub blurb: String,
    /// File name the resume is offered under
    pub resume_file_name: String,
}

impl ContactInfo {
    pub fn mailto_url(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
