//! Resume record as edited by the builder UI. The scoring engine only reads it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    pub tech_stack: Vec<String>,
    pub description: String,
    pub link: String,
    pub github: String,
}

/// Skills grouped by kind. Older records stored a single comma-separated
/// string; that shape is read into `technical`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SkillsWire")]
pub struct SkillGroups {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub tools: Vec<String>,
}

impl SkillGroups {
    pub fn total(&self) -> usize {
        [&self.technical, &self.soft, &self.tools]
            .iter()
            .flat_map(|group| group.iter())
            .filter(|s| !s.trim().is_empty())
            .count()
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct GroupedSkills {
    technical: Vec<String>,
    soft: Vec<String>,
    tools: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SkillsWire {
    Grouped(GroupedSkills),
    Legacy(String),
}

impl From<SkillsWire> for SkillGroups {
    fn from(wire: SkillsWire) -> Self {
        match wire {
            SkillsWire::Grouped(g) => SkillGroups {
                technical: g.technical,
                soft: g.soft,
                tools: g.tools,
            },
            SkillsWire::Legacy(csv) => SkillGroups {
                technical: csv
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileLinks {
    pub linkedin: String,
    pub github: String,
}

/// Visual template chosen in the builder. Rendering is out of scope; the value
/// is carried so the record round-trips intact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeTemplate {
    #[default]
    Classic,
    Modern,
    Minimal,
}

pub const DEFAULT_ACCENT_COLOR: &str = "#0f766e";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub personal: PersonalInfo,
    pub summary: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: SkillGroups,
    pub links: ProfileLinks,
    pub template: ResumeTemplate,
    pub color: String,
}

impl Default for ResumeRecord {
    fn default() -> Self {
        Self {
            personal: PersonalInfo::default(),
            summary: String::new(),
            education: Vec::new(),
            experience: Vec::new(),
            projects: Vec::new(),
            skills: SkillGroups::default(),
            links: ProfileLinks::default(),
            template: ResumeTemplate::default(),
            color: DEFAULT_ACCENT_COLOR.to_string(),
        }
    }
}
