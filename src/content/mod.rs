//! Static portfolio content model.
//!
//! The portfolio is a fixed document: everything the viewer renders
//! comes from one [`Profile`] value. The types are serde-derived so the
//! `export` subcommand can dump the whole model as JSON.

mod builtin;

use serde::{Deserialize, Serialize};

/// The whole portfolio: identity, rotating roles, and one block of data
/// per page section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Display name shown in the hero section and nav bar
    pub name: String,
    /// One-line tagline under the typed role
    pub tagline: String,
    /// Role strings cycled by the typewriter ("I'm a ...")
    pub roles: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub education: Vec<EducationEntry>,
    pub contact: Contact,
}

impl Profile {
    /// The built-in portfolio content.
    pub fn builtin() -> Self {
        builtin::profile()
    }
}

/// One entry in the work-history timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    /// Bullet points describing the role
    pub highlights: Vec<String>,
}

/// A named group of skills (e.g. "Frontend").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

/// A single skill with a self-assessed proficiency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: Proficiency,
}

/// Self-assessed proficiency scale, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    Expert,
    Proficient,
    Familiar,
    Learning,
    Basic,
}

impl Proficiency {
    /// Short label for rendering.
    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Expert => "Expert",
            Proficiency::Proficient => "Proficient",
            Proficiency::Familiar => "Familiar",
            Proficiency::Learning => "Learning",
            Proficiency::Basic => "Basic",
        }
    }

    /// Filled-cell count for a five-cell meter.
    pub fn meter(&self) -> usize {
        match self {
            Proficiency::Expert => 5,
            Proficiency::Proficient => 4,
            Proficiency::Familiar => 3,
            Proficiency::Learning => 2,
            Proficiency::Basic => 1,
        }
    }
}

/// A showcased project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// Repository URL
    pub repo: String,
}

/// One education record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: String,
    /// Final grade, where one was awarded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub description: String,
}

/// Contact section: blurb, direct details, and social links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub blurb: String,
    pub email: String,
    pub location: String,
    pub links: Vec<SocialLink>,
}

/// A named external link (GitHub, LinkedIn, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}
