use std::fmt;

use serde::{Deserialize, Serialize};

/// Self-reported experience level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }

    /// Case-insensitive lookup. Unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "beginner" => Some(ExperienceLevel::Beginner),
            "intermediate" => Some(ExperienceLevel::Intermediate),
            "advanced" => Some(ExperienceLevel::Advanced),
            _ => None,
        }
    }
}

/// Highest completed (or in-progress) education level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationLevel {
    HighSchool,
    Bachelor,
    Master,
    Phd,
    Other,
}

impl EducationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "high-school",
            EducationLevel::Bachelor => "bachelor",
            EducationLevel::Master => "master",
            EducationLevel::Phd => "phd",
            EducationLevel::Other => "other",
        }
    }

    /// Case-insensitive lookup with common spellings.
    /// Blank input yields `None`; any other unknown value is `Other`.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        let level = match normalized.as_str() {
            "" => return None,
            "high-school" | "high school" | "highschool" | "high_school" => {
                EducationLevel::HighSchool
            }
            "bachelor" | "bachelors" | "bachelor's" => EducationLevel::Bachelor,
            "master" | "masters" | "master's" => EducationLevel::Master,
            "phd" | "ph.d" | "ph.d." | "doctorate" => EducationLevel::Phd,
            _ => EducationLevel::Other,
        };
        Some(level)
    }
}

/// A validated, normalized profile. Built per request and dropped afterwards.
///
/// Invariant: `interests` and `skills` are non-empty, trimmed and free of duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub experience: Option<ExperienceLevel>,
    pub education: Option<EducationLevel>,
    pub goals: Option<String>,
}

/// Growth outlook label attached to a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum GrowthProspect {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl GrowthProspect {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthProspect::Low => "Low",
            GrowthProspect::Medium => "Medium",
            GrowthProspect::High => "High",
            GrowthProspect::VeryHigh => "Very High",
        }
    }
}

impl TryFrom<String> for GrowthProspect {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        match raw.trim().to_lowercase().as_str() {
            "low" => Ok(GrowthProspect::Low),
            "medium" => Ok(GrowthProspect::Medium),
            "high" => Ok(GrowthProspect::High),
            "very high" | "very-high" | "veryhigh" => Ok(GrowthProspect::VeryHigh),
            _ => Err(format!(
                "unknown growthProspect '{raw}' (expected Low, Medium, High or Very High)"
            )),
        }
    }
}

impl fmt::Display for GrowthProspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recommended career. Field names are the public wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSuggestion {
    pub title: String,
    pub description: String,
    /// 0 – 100. From the model, or the catalog's fixed value.
    pub match_score: u8,
    pub required_skills: Vec<String>,
    /// Entry level first, most senior last.
    pub career_path: Vec<String>,
    pub salary_range: String,
    pub growth_prospect: GrowthProspect,
    pub time_to_achieve: String,
    pub next_steps: Vec<String>,
}
