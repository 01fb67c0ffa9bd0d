use serde::{Deserialize, Serialize};

use crate::models::job::JobListing;

/// Dashboard-style listing filter. Blank fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobFilter {
    /// Case-insensitive substring of the title or company.
    pub keyword: String,
    pub location: String,
    pub experience: String,
    pub mode: String,
}

impl JobFilter {
    pub fn matches(&self, job: &JobListing) -> bool {
        let keyword = self.keyword.trim().to_lowercase();
        let keyword_ok = keyword.is_empty()
            || job.title.to_lowercase().contains(&keyword)
            || job.company.to_lowercase().contains(&keyword);

        keyword_ok
            && exact_or_blank(&self.location, &job.location)
            && exact_or_blank(&self.experience, &job.experience)
            && exact_or_blank(&self.mode, &job.mode)
    }

    pub fn apply<'a>(&self, jobs: &'a [JobListing]) -> Vec<&'a JobListing> {
        jobs.iter().filter(|job| self.matches(job)).collect()
    }
}

fn exact_or_blank(wanted: &str, actual: &str) -> bool {
    wanted.is_empty() || wanted == actual
}
