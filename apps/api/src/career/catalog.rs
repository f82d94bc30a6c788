//! Rule catalog — deterministic career suggestions without any model call.
//!
//! Algorithm:
//! 1. An archetype matches when any profile interest equals one of its interest
//!    triggers, or any profile skill equals one of its skill triggers
//!    (case-insensitive whole-tag comparison, no fuzzy matching).
//! 2. Matches are emitted in catalog order with their predeclared `match_score`.
//! 3. The result is truncated to `MAX_SUGGESTIONS`.
//! 4. No match at all → the generic software developer suggestion, alone.

use serde::Serialize;

use crate::career::models::{CareerSuggestion, GrowthProspect, Profile};
use crate::career::MAX_SUGGESTIONS;

/// Static payload of a catalog entry. Converted to an owned `CareerSuggestion` on match.
#[derive(Debug)]
pub struct SuggestionTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub match_score: u8,
    pub required_skills: &'static [&'static str],
    pub career_path: &'static [&'static str],
    pub salary_range: &'static str,
    pub growth_prospect: GrowthProspect,
    pub time_to_achieve: &'static str,
    pub next_steps: &'static [&'static str],
}

impl SuggestionTemplate {
    pub fn to_suggestion(&self) -> CareerSuggestion {
        CareerSuggestion {
            title: self.title.to_string(),
            description: self.description.to_string(),
            match_score: self.match_score,
            required_skills: owned(self.required_skills),
            career_path: owned(self.career_path),
            salary_range: self.salary_range.to_string(),
            growth_prospect: self.growth_prospect,
            time_to_achieve: self.time_to_achieve.to_string(),
            next_steps: owned(self.next_steps),
        }
    }
}

/// A career archetype. Triggers are stored lowercase.
#[derive(Debug)]
pub struct Archetype {
    pub key: &'static str,
    pub interest_triggers: &'static [&'static str],
    pub skill_triggers: &'static [&'static str],
    pub template: SuggestionTemplate,
}

impl Archetype {
    pub fn matches(&self, profile: &Profile) -> bool {
        any_tag_in(&profile.interests, self.interest_triggers)
            || any_tag_in(&profile.skills, self.skill_triggers)
    }
}

/// Public view of an archetype for the catalog listing endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeSummary {
    pub key: &'static str,
    pub title: &'static str,
    pub interest_triggers: &'static [&'static str],
    pub skill_triggers: &'static [&'static str],
    pub match_score: u8,
}

impl From<&Archetype> for ArchetypeSummary {
    fn from(archetype: &Archetype) -> Self {
        Self {
            key: archetype.key,
            title: archetype.template.title,
            interest_triggers: archetype.interest_triggers,
            skill_triggers: archetype.skill_triggers,
            match_score: archetype.template.match_score,
        }
    }
}

/// Catalog in priority order. Declaration order is the tie-break.
const CATALOG: &[Archetype] = &[
    Archetype {
        key: "software",
        interest_triggers: &[
            "software development",
            "web development",
            "programming",
            "app development",
        ],
        skill_triggers: &["javascript", "typescript", "react", "node.js", "html", "css", "java"],
        template: SuggestionTemplate {
            title: "Full Stack Developer",
            description: "Build complete web applications, from user-facing interfaces to \
                the servers and databases behind them.",
            match_score: 92,
            required_skills: &["JavaScript", "React", "Node.js", "Databases", "Git"],
            career_path: &[
                "Junior Developer",
                "Full Stack Developer",
                "Senior Developer",
                "Tech Lead",
                "Engineering Manager",
            ],
            salary_range: "$60,000 - $150,000",
            growth_prospect: GrowthProspect::High,
            time_to_achieve: "6-12 months",
            next_steps: &[
                "Build a portfolio of 3-5 full stack projects",
                "Learn a backend framework such as Express or Django",
                "Contribute to an open source project",
                "Ask an alumni mentor for a code review",
            ],
        },
    },
    Archetype {
        key: "data",
        interest_triggers: &[
            "data science",
            "machine learning",
            "artificial intelligence",
            "ai",
            "analytics",
        ],
        skill_triggers: &["python", "sql", "r", "statistics", "pandas", "tensorflow"],
        template: SuggestionTemplate {
            title: "Data Scientist",
            description: "Analyze complex datasets and build predictive models that drive \
                business decisions.",
            match_score: 88,
            required_skills: &["Python", "Statistics", "SQL", "Machine Learning", "Data Visualization"],
            career_path: &[
                "Data Analyst",
                "Junior Data Scientist",
                "Data Scientist",
                "Senior Data Scientist",
                "Head of Data",
            ],
            salary_range: "$70,000 - $160,000",
            growth_prospect: GrowthProspect::VeryHigh,
            time_to_achieve: "1-2 years",
            next_steps: &[
                "Strengthen statistics and linear algebra fundamentals",
                "Complete two end-to-end analysis projects on public datasets",
                "Learn scikit-learn and a deep learning framework",
                "Publish your work on Kaggle or GitHub",
            ],
        },
    },
    Archetype {
        key: "product",
        interest_triggers: &["product management", "business", "entrepreneurship", "strategy"],
        skill_triggers: &["communication", "leadership", "project management", "agile"],
        template: SuggestionTemplate {
            title: "Product Manager",
            description: "Decide what gets built and why, aligning user needs, business goals \
                and engineering effort.",
            match_score: 85,
            required_skills: &["Communication", "User Research", "Roadmapping", "Data Analysis", "Agile"],
            career_path: &[
                "Associate Product Manager",
                "Product Manager",
                "Senior Product Manager",
                "Director of Product",
                "VP of Product",
            ],
            salary_range: "$80,000 - $170,000",
            growth_prospect: GrowthProspect::High,
            time_to_achieve: "1-3 years",
            next_steps: &[
                "Write a product teardown of an app you use daily",
                "Lead a small cross-functional project end to end",
                "Learn basic SQL to answer your own product questions",
                "Shadow a product manager through an alumni mentor",
            ],
        },
    },
    Archetype {
        key: "security",
        interest_triggers: &["cybersecurity", "security", "ethical hacking", "information security"],
        skill_triggers: &["networking", "linux", "penetration testing", "cryptography"],
        template: SuggestionTemplate {
            title: "Cybersecurity Analyst",
            description: "Protect systems and data by detecting, investigating and preventing \
                security threats.",
            match_score: 82,
            required_skills: &["Networking", "Linux", "Threat Analysis", "SIEM Tools", "Incident Response"],
            career_path: &[
                "Security Analyst",
                "Security Engineer",
                "Senior Security Engineer",
                "Security Architect",
                "CISO",
            ],
            salary_range: "$65,000 - $155,000",
            growth_prospect: GrowthProspect::VeryHigh,
            time_to_achieve: "1-2 years",
            next_steps: &[
                "Earn an entry-level certification such as Security+",
                "Practice on capture-the-flag platforms",
                "Set up a home lab for network monitoring",
            ],
        },
    },
    Archetype {
        key: "infrastructure",
        interest_triggers: &["cloud computing", "devops", "infrastructure", "site reliability"],
        skill_triggers: &["aws", "azure", "gcp", "docker", "kubernetes", "terraform"],
        template: SuggestionTemplate {
            title: "Cloud / DevOps Engineer",
            description: "Design, automate and operate the infrastructure that applications \
                run on.",
            match_score: 80,
            required_skills: &["Linux", "Docker", "Kubernetes", "CI/CD", "A Major Cloud Provider"],
            career_path: &[
                "Operations Engineer",
                "DevOps Engineer",
                "Senior DevOps Engineer",
                "Platform Architect",
                "Head of Infrastructure",
            ],
            salary_range: "$75,000 - $165,000",
            growth_prospect: GrowthProspect::High,
            time_to_achieve: "1-2 years",
            next_steps: &[
                "Earn a cloud associate certification",
                "Containerize and deploy one of your projects",
                "Automate a deployment pipeline with CI/CD",
                "Learn infrastructure as code with Terraform",
            ],
        },
    },
];

/// Returned alone when no archetype matches.
const GENERIC_SOFTWARE_DEVELOPER: SuggestionTemplate = SuggestionTemplate {
    title: "Software Developer",
    description: "Design, build and maintain software. A flexible starting point that opens \
        doors to most technology careers.",
    match_score: 70,
    required_skills: &["Programming Fundamentals", "Problem Solving", "Git", "Testing"],
    career_path: &[
        "Junior Developer",
        "Software Developer",
        "Senior Developer",
        "Lead Developer",
    ],
    salary_range: "$55,000 - $140,000",
    growth_prospect: GrowthProspect::High,
    time_to_achieve: "6-12 months",
    next_steps: &[
        "Pick one language and complete a structured course",
        "Build two small projects that solve real problems",
        "Talk to an alumni mentor about which specialisation fits you",
    ],
};

pub fn catalog() -> &'static [Archetype] {
    CATALOG
}

/// Deterministically derives suggestions for `profile`. Never empty.
pub fn rule_based_suggestions(profile: &Profile) -> Vec<CareerSuggestion> {
    let matched: Vec<CareerSuggestion> = CATALOG
        .iter()
        .filter(|archetype| archetype.matches(profile))
        .take(MAX_SUGGESTIONS)
        .map(|archetype| archetype.template.to_suggestion())
        .collect();

    if matched.is_empty() {
        vec![GENERIC_SOFTWARE_DEVELOPER.to_suggestion()]
    } else {
        matched
    }
}

fn any_tag_in(tags: &[String], triggers: &[&str]) -> bool {
    tags.iter().any(|tag| {
        let tag_lower = tag.to_lowercase();
        triggers.iter().any(|trigger| *trigger == tag_lower)
    })
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
