//! Scraper sources and the jobs they run.

use serde::{Deserialize, Serialize};

/// A site the backend knows how to scrape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScraperSource {
    pub id: String,
    pub name: String,
    pub site_url: String,
    pub enabled: bool,
    #[serde(default)]
    pub last_run_at: Option<String>,
    /// Total deals this source has produced.
    #[serde(default)]
    pub deal_count: u64,
}

/// One scraper run, queued manually or by a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScraperJob {
    pub id: String,
    pub source: String,
    pub status: JobStatus,
    pub started_at: String,
    #[serde(default)]
    pub finished_at: Option<String>,
    #[serde(default)]
    pub deals_found: u64,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Running,
    Succeeded,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    /// Short label for status badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tags_are_lowercase_on_the_wire() {
        let job: ScraperJob = serde_json::from_str(
            r#"{"id": "j1", "source": "hotdeals", "status": "running", "started_at": "2026-08-21T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(job.status, JobStatus::Running);
        assert!(!job.status.is_terminal());
        assert_eq!(job.deals_found, 0);
    }

    #[test]
    fn terminal_states_are_terminal() {
        assert!(JobStatus::Succeeded.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
        assert!(!JobStatus::Queued.is_terminal());
    }
}
