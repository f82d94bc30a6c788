//! Request validation — turns a raw request body into a normalized `Profile`.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::debug;

use crate::career::models::{EducationLevel, ExperienceLevel, Profile};
use crate::errors::AppError;

/// Raw request body for career suggestions, exactly as the client sent it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub goals: Option<String>,
}

/// Validates and normalizes a request.
///
/// Tags are trimmed, blank entries dropped, duplicates removed (case-sensitive,
/// first occurrence wins). Fails if interests or skills end up empty; every
/// offending field is named in the message.
pub fn validate_request(request: &RecommendRequest) -> Result<Profile, AppError> {
    let interests = normalize_tags(&request.interests);
    let skills = normalize_tags(&request.skills);

    let mut problems = Vec::new();
    if interests.is_empty() {
        problems.push("interests must contain at least one non-blank entry");
    }
    if skills.is_empty() {
        problems.push("skills must contain at least one non-blank entry");
    }
    if !problems.is_empty() {
        return Err(AppError::Validation(problems.join("; ")));
    }

    let experience = request.experience.as_deref().and_then(|raw| {
        let level = ExperienceLevel::parse(raw);
        if level.is_none() && !raw.trim().is_empty() {
            debug!("Ignoring unrecognized experience level {raw:?}");
        }
        level
    });

    let education = request.education.as_deref().and_then(EducationLevel::parse);

    let goals = request
        .goals
        .as_deref()
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string);

    Ok(Profile {
        interests,
        skills,
        experience,
        education,
        goals,
    })
}

fn normalize_tags(raw: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(*tag))
        .map(str::to_string)
        .collect()
}
