// Prompt template for the model-backed suggestion source.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::career::models::Profile;
use crate::career::MAX_SUGGESTIONS;
use crate::llm_client::prompts::{JSON_ARRAY_ONLY_INSTRUCTION, NOT_SPECIFIED};

/// Career suggestion prompt.
/// Replace: {interests}, {skills}, {experience}, {education}, {goals},
///          {count}, {json_instruction}
pub const SUGGESTION_PROMPT_TEMPLATE: &str = r#"You are an experienced career counselor advising a university student or recent graduate.

Based on this profile, suggest the {count} most suitable career paths.

PROFILE:
- Interests: {interests}
- Skills: {skills}
- Experience level: {experience}
- Education level: {education}
- Career goals: {goals}

Return a JSON ARRAY where every element has EXACTLY these fields and types:
[
  {
    "title": "Career title (string)",
    "description": "One or two sentences about the role (string)",
    "matchScore": 85,
    "requiredSkills": ["Skill 1", "Skill 2"],
    "careerPath": ["Entry level role", "Mid level role", "Senior role"],
    "salaryRange": "$60,000 - $120,000",
    "growthProspect": "High",
    "timeToAchieve": "1-2 years",
    "nextSteps": ["Actionable step 1", "Actionable step 2", "Actionable step 3"]
  }
]

RULES:
1. matchScore is an integer from 0 to 100 describing how well the career fits this profile
2. growthProspect is exactly one of: "Low", "Medium", "High", "Very High"
3. careerPath starts at the entry level and ends at the most senior level
4. nextSteps has 3 to 5 concrete actions the person can start this month
5. Order the array from best fit to weakest fit

{json_instruction}"#;

/// Fills the template with the profile. Unset fields read "not specified".
pub fn build_suggestion_prompt(profile: &Profile) -> String {
    SUGGESTION_PROMPT_TEMPLATE
        .replace("{count}", &MAX_SUGGESTIONS.to_string())
        .replace("{json_instruction}", JSON_ARRAY_ONLY_INSTRUCTION)
        .replace("{interests}", &profile.interests.join(", "))
        .replace("{skills}", &profile.skills.join(", "))
        .replace(
            "{experience}",
            profile.experience.map(|e| e.as_str()).unwrap_or(NOT_SPECIFIED),
        )
        .replace(
            "{education}",
            profile.education.map(|e| e.as_str()).unwrap_or(NOT_SPECIFIED),
        )
        .replace("{goals}", profile.goals.as_deref().unwrap_or(NOT_SPECIFIED))
}
