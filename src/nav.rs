use std::{fmt, str::FromStr};

use thiserror::Error;

/// Page sections reachable from the header menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Career,
    Strengths,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct SectionParseError(pub String);

impl Section {
    /// Menu order.
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Career,
        Section::Strengths,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Career => "Career",
            Section::Strengths => "Strengths",
        }
    }

    /// DOM id of the section's root element.
    pub fn anchor_id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Career => "career",
            Section::Strengths => "strengths",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = SectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.label() == s)
            .ok_or_else(|| SectionParseError(s.to_string()))
    }
}
