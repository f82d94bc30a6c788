// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it; this file holds the cross-cutting pieces.

/// Instruction appended to prompts whose answer is parsed as a JSON array.
pub const JSON_ARRAY_ONLY_INSTRUCTION: &str = "\
    You MUST respond with a valid JSON array only. \
    Do NOT include any text before or after the array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Rendered in place of optional profile fields the user left blank.
pub const NOT_SPECIFIED: &str = "not specified";
