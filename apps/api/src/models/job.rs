use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_MATCH_SCORE: u32 = 40;

/// A job posting supplied by the caller. Listings are not stored; only the
/// tracker state keyed by `id` is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub mode: String,
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub posted_days_ago: u32,
    pub source: String,
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub apply_url: String,
}

/// What the candidate is looking for. `role_keywords` and `skills` are
/// comma-separated free text, as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPreferences {
    pub role_keywords: String,
    pub locations: Vec<String>,
    pub modes: Vec<String>,
    pub experience: String,
    pub skills: String,
    pub min_match_score: u32,
}

impl Default for JobPreferences {
    fn default() -> Self {
        Self {
            role_keywords: String::new(),
            locations: Vec::new(),
            modes: Vec::new(),
            experience: String::new(),
            skills: String::new(),
            min_match_score: DEFAULT_MIN_MATCH_SCORE,
        }
    }
}

/// Partial update for [`JobPreferences`]; absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_match_score: Option<u32>,
}

impl JobPreferences {
    pub fn merge(&mut self, patch: PreferencesPatch) {
        if let Some(v) = patch.role_keywords {
            self.role_keywords = v;
        }
        if let Some(v) = patch.locations {
            self.locations = v;
        }
        if let Some(v) = patch.modes {
            self.modes = v;
        }
        if let Some(v) = patch.experience {
            self.experience = v;
        }
        if let Some(v) = patch.skills {
            self.skills = v;
        }
        if let Some(v) = patch.min_match_score {
            self.min_match_score = v;
        }
    }
}

/// Where an application stands. Jobs never touched read as `NotApplied`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[default]
    #[serde(rename = "Not Applied")]
    NotApplied,
    Applied,
    Rejected,
    Selected,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::NotApplied => "Not Applied",
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Selected => "Selected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        [
            ApplicationStatus::NotApplied,
            ApplicationStatus::Applied,
            ApplicationStatus::Rejected,
            ApplicationStatus::Selected,
        ]
        .into_iter()
        .find(|s| s.as_str() == raw)
    }
}
