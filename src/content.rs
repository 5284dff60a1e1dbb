use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

const DEVICON_BASE: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(&'static str),
    #[error("couldn't parse {file}: {reason}")]
    Parse { file: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub about_heading: String,
    pub about: String,
    pub skills_heading: String,
    pub career_heading: String,
    pub strengths_heading: String,
    pub strengths_intro: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerKind {
    School,
    Company,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CareerEntry {
    pub kind: CareerKind,
    pub title: String,
    pub subtitle: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub emoji: String,
    pub icons: Vec<String>,
}

impl SkillCategory {
    pub fn icon_url(icon: &str) -> String {
        format!("{DEVICON_BASE}/{icon}/{icon}-original.svg")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthIcon {
    Code,
    Learning,
    Puzzle,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Strength {
    pub icon: StrengthIcon,
    pub title: String,
    pub description: String,
}

static PROFILE: LazyLock<Result<Profile, ContentError>> =
    LazyLock::new(|| load("profile.json"));
static CAREER: LazyLock<Result<Vec<CareerEntry>, ContentError>> =
    LazyLock::new(|| load("career.json"));
static SKILLS: LazyLock<Result<Vec<SkillCategory>, ContentError>> =
    LazyLock::new(|| load("skills.json"));
static STRENGTHS: LazyLock<Result<Vec<Strength>, ContentError>> =
    LazyLock::new(|| load("strengths.json"));

fn load<T: DeserializeOwned>(file: &'static str) -> Result<T, ContentError> {
    let asset = Assets::get(file).ok_or(ContentError::NotFound(file))?;
    serde_json::from_slice(&asset.data).map_err(|e| ContentError::Parse {
        file,
        reason: e.to_string(),
    })
}

pub fn profile() -> Result<&'static Profile, ContentError> {
    PROFILE.as_ref().map_err(Clone::clone)
}

pub fn career() -> Result<&'static [CareerEntry], ContentError> {
    CAREER.as_deref().map_err(Clone::clone)
}

pub fn skills() -> Result<&'static [SkillCategory], ContentError> {
    SKILLS.as_deref().map_err(Clone::clone)
}

pub fn strengths() -> Result<&'static [Strength], ContentError> {
    STRENGTHS.as_deref().map_err(Clone::clone)
}

/// Unwraps a content table for rendering, logging and rendering nothing when
/// it failed to load.
pub fn or_empty<T: ?Sized>(res: Result<&'static T, ContentError>, empty: &'static T) -> &'static T {
    res.unwrap_or_else(|e| {
        log::error!("{e}");
        empty
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_loads() {
        let profile = profile().expect("profile should parse");
        assert_eq!(profile.name, "Jou Okuyama");
        assert_eq!(profile.tagline, "Student Developer");
    }

    #[test]
    fn test_career_loads() {
        let career = career().expect("career should parse");
        assert_eq!(career.len(), 3);
        assert_eq!(career[1].kind, CareerKind::Company);
        assert!(career.iter().all(|c| c.link.is_some()));
    }

    #[test]
    fn test_skills_load() {
        let skills = skills().expect("skills should parse");
        assert_eq!(skills.len(), 4);
        assert!(skills.iter().all(|c| !c.icons.is_empty()));
    }

    #[test]
    fn test_strengths_load() {
        let strengths = strengths().expect("strengths should parse");
        assert_eq!(
            strengths.iter().map(|s| s.icon).collect::<Vec<_>>(),
            vec![StrengthIcon::Code, StrengthIcon::Learning, StrengthIcon::Puzzle]
        );
    }

    #[test]
    fn test_missing_link_parses() {
        let entry: CareerEntry = serde_json::from_str(
            r#"{"kind":"company","title":"t","subtitle":"s","period":"p","description":"d"}"#,
        )
        .expect("entry without link should parse");
        assert_eq!(entry.link, None);
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            load::<Profile>("nope.json"),
            Err(ContentError::NotFound("nope.json"))
        );
    }

    #[test]
    fn test_icon_url() {
        assert_eq!(
            SkillCategory::icon_url("rust"),
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/rust/rust-original.svg"
        );
    }

    #[test]
    fn test_or_empty_falls_back() {
        let err: Result<&'static [Strength], ContentError> =
            Err(ContentError::NotFound("strengths.json"));
        assert!(or_empty(err, &[]).is_empty());
    }
}
